use super::*;

#[test]
fn current_step_is_marked_current() {
    assert_eq!(
        step_class(BookingStatus::Planning, BookingStatus::Planning),
        "flow-step flow-step--current"
    );
}

#[test]
fn earlier_steps_are_done_and_later_steps_are_plain() {
    assert_eq!(
        step_class(BookingStatus::OnTheWay, BookingStatus::Assigned),
        "flow-step flow-step--done"
    );
    assert_eq!(step_class(BookingStatus::OnTheWay, BookingStatus::Completed), "flow-step");
}

#[test]
fn statuses_outside_the_flow_render_plain_steps() {
    assert_eq!(step_class(BookingStatus::Pending, BookingStatus::Assigned), "flow-step");
    assert_eq!(step_class(BookingStatus::Cancelled, BookingStatus::Planning), "flow-step");
}
