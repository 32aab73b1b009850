//! Top-down formulation of the change count.
//!
//! For the denomination at `index`, use it 0, 1, 2, ... times and count the ways
//! to cover what is left with the denominations after it. Identical
//! `(remaining, index)` subproblems recur, so answers are memoized. The memo
//! belongs to a single call and is dropped when it returns.
//!
//! This is kept as a cross-check for the bottom-up table; it costs
//! `O(amount * denominations)` memo entries against the table's `O(amount)`.

use std::collections::HashMap;

use log::debug;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::ChangeCounter;
use crate::cs::error::Result;

type Memo = HashMap<(usize, usize), BigUint>;

/// Exact number of ways to make `amount`, computed top-down.
///
/// Accepts and rejects exactly the same inputs as
/// [`count_change_ways`](super::count_change_ways) and agrees with it.
///
/// # Examples
///
/// ```
/// use making_change::count_change_ways_memoized;
/// use num_bigint::BigUint;
///
/// assert_eq!(count_change_ways_memoized(4, &[1, 2, 3]).unwrap(), BigUint::from(4u32));
/// ```
pub fn count_change_ways_memoized(amount: i64, denominations: &[i64]) -> Result<BigUint> {
    ChangeCounter::default().count_memoized(amount, denominations)
}

/// `coins` must be positive and distinct.
///
/// The case split runs on an explicit stack of frames, one per denomination
/// index in use, so deep subproblem chains cost heap rather than call stack.
pub(super) fn count_top_down(target: usize, coins: &[u64]) -> BigUint {
    let coins: Vec<usize> = coins
        .iter()
        .filter_map(|&coin| usize::try_from(coin).ok())
        .filter(|&coin| coin <= target)
        .collect();

    let mut memo = Memo::new();
    if let Some(ways) = settled((target, 0), &coins, &memo) {
        return ways;
    }

    let mut stack = vec![Frame::new(target, 0)];
    let mut total = BigUint::zero();
    while let Some(frame) = stack.last_mut() {
        let pending = match frame.left {
            Some(amount_left) => {
                let child = (amount_left, frame.index + 1);
                match settled(child, &coins, &memo) {
                    Some(ways) => {
                        frame.ways += ways;
                        frame.left = amount_left.checked_sub(coins[frame.index]);
                        continue;
                    }
                    None => Some(child),
                }
            }
            None => None,
        };

        match pending {
            Some((remaining, index)) => stack.push(Frame::new(remaining, index)),
            None => {
                if let Some(done) = stack.pop() {
                    if stack.is_empty() {
                        total = done.ways.clone();
                    }
                    memo.insert((done.remaining, done.index), done.ways);
                }
            }
        }
    }

    debug!("top-down count for {target} used {} memo entries", memo.len());
    total
}

/// A subproblem whose coin at `index` is being used 0, 1, 2, ... times.
struct Frame {
    remaining: usize,
    index: usize,
    /// Amount handed to the next denomination, `None` once the coin overshoots.
    left: Option<usize>,
    ways: BigUint,
}

impl Frame {
    fn new(remaining: usize, index: usize) -> Self {
        Self {
            remaining,
            index,
            left: Some(remaining),
            ways: BigUint::zero(),
        }
    }
}

/// Answer for `(remaining, index)` if it is a base case or already memoized.
fn settled((remaining, index): (usize, usize), coins: &[usize], memo: &Memo) -> Option<BigUint> {
    if remaining == 0 {
        return Some(BigUint::one());
    }
    if index == coins.len() {
        return Some(BigUint::zero());
    }
    memo.get(&(remaining, index)).cloned()
}
