use super::*;

#[test]
fn every_phase_has_a_distinct_message() {
    let phases = [
        VerifyPhase::MissingParams,
        VerifyPhase::Verifying,
        VerifyPhase::Verified,
        VerifyPhase::AuthSkipped,
        VerifyPhase::Failed,
    ];
    for (i, a) in phases.iter().enumerate() {
        for (j, b) in phases.iter().enumerate() {
            if i != j {
                assert_ne!(phase_message(*a), phase_message(*b));
            }
        }
    }
}

#[test]
fn unauthorized_verification_is_reported_gently() {
    let err = ApiError::Status { code: 401, message: "Session expired".to_owned() };
    assert_eq!(phase_for_error(&err), VerifyPhase::AuthSkipped);
    let err = ApiError::Status { code: 403, message: String::new() };
    assert_eq!(phase_for_error(&err), VerifyPhase::AuthSkipped);
}

#[test]
fn other_failures_report_the_failed_phase() {
    assert_eq!(
        phase_for_error(&ApiError::Network("offline".to_owned())),
        VerifyPhase::Failed
    );
    assert_eq!(
        phase_for_error(&ApiError::Status { code: 500, message: "boom".to_owned() }),
        VerifyPhase::Failed
    );
}
