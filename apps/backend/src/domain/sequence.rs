//! Ball sequencing: assigns over/ball/global-sequence numbers from the
//! most recent delivery of the (match, innings).

use crate::domain::delivery::Delivery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallNumber {
    pub over: i32,
    pub ball: i16,
    pub sequence: i64,
}

/// Compute the next ball number.
///
/// First delivery of an innings is over 1, ball 1, sequence 1. The
/// global sequence always advances by one. The ball slot advances only
/// after a legal delivery (wrapping 6 -> 1 into a new over); an illegal
/// delivery is re-bowled at the same over/ball.
pub fn next_ball(last: Option<&Delivery>) -> BallNumber {
    let Some(last) = last else {
        return BallNumber {
            over: 1,
            ball: 1,
            sequence: 1,
        };
    };

    let sequence = last.sequence + 1;

    if last.legal {
        if last.ball == 6 {
            BallNumber {
                over: last.over + 1,
                ball: 1,
                sequence,
            }
        } else {
            BallNumber {
                over: last.over,
                ball: last.ball + 1,
                sequence,
            }
        }
    } else {
        BallNumber {
            over: last.over,
            ball: last.ball,
            sequence,
        }
    }
}
