//! Strike rotation: the final authority on swapping striker and
//! non-striker, evaluated last so it sees the end-of-delivery facts.

use crate::domain::delivery::Delivery;
use crate::domain::state::MatchState;

/// Rotate the strike for a finished delivery.
///
/// Wicket deliveries never odd-run rotate: a run out already placed both
/// batters, and on any other wicket the new batter stands at the
/// striker's end. A boundary is a dead ball with no mid-delivery
/// rotation. In every case an over-completing delivery swaps ends once
/// more, so the two swaps can cancel or compound.
pub fn rotate(state: &mut MatchState, delivery: &Delivery) {
    if delivery.wicket {
        if delivery.over_completed {
            state.swap_strike();
        }
        return;
    }

    if delivery.boundary {
        if delivery.over_completed {
            state.swap_strike();
        }
        return;
    }

    if delivery.rotation_runs() % 2 == 1 {
        state.swap_strike();
    }

    if delivery.over_completed {
        state.swap_strike();
    }
}
