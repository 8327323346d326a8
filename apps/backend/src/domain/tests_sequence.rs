use crate::domain::sequence::next_ball;
use crate::domain::test_state_helpers::delivery_fixture;

#[test]
fn first_delivery_of_innings() {
    let n = next_ball(None);
    assert_eq!((n.over, n.ball, n.sequence), (1, 1, 1));
}

#[test]
fn legal_delivery_advances_the_ball() {
    let last = delivery_fixture(1, 3, 2, 20);
    let n = next_ball(Some(&last));
    assert_eq!((n.over, n.ball, n.sequence), (3, 3, 21));
}

#[test]
fn sixth_legal_ball_wraps_into_a_new_over() {
    let last = delivery_fixture(1, 3, 6, 24);
    let n = next_ball(Some(&last));
    assert_eq!((n.over, n.ball, n.sequence), (4, 1, 25));
}

#[test]
fn illegal_delivery_is_rebowled_at_the_same_slot() {
    let mut last = delivery_fixture(1, 5, 4, 33);
    last.legal = false;
    let n = next_ball(Some(&last));
    assert_eq!((n.over, n.ball), (5, 4));
    // The global sequence still advances.
    assert_eq!(n.sequence, 34);
}

#[test]
fn illegal_sixth_slot_does_not_open_a_new_over() {
    let mut last = delivery_fixture(1, 2, 6, 12);
    last.legal = false;
    let n = next_ball(Some(&last));
    assert_eq!((n.over, n.ball, n.sequence), (2, 6, 13));
}
