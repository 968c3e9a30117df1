use super::*;

#[test]
fn demand_percent_scales_to_the_busiest_service() {
    assert_eq!(demand_percent(12, 12), 100.0);
    assert_eq!(demand_percent(6, 12), 50.0);
    assert_eq!(demand_percent(0, 12), 0.0);
}

#[test]
fn demand_percent_handles_empty_histogram() {
    assert_eq!(demand_percent(0, 0), 0.0);
    assert_eq!(demand_percent(5, 0), 0.0);
}
