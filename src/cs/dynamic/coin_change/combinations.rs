//! Listing the combinations behind a change count.
//!
//! Combinations are produced by backtracking over the denominations from the
//! largest down. Each combination is non-increasing, and the list is in
//! descending lexicographic order. The search keeps its own stack of picked
//! coins instead of recursing, since a combination of many small coins can be
//! as long as the amount itself.
//!
//! A completion table built in `O(amount * denominations)` steps is consulted
//! before every pick, so the search never enters a branch that cannot finish.
//! Past the table, each listed combination costs `O(length * denominations)`.

use log::debug;

use super::{allocate_table, ChangeCounter};
use crate::cs::error::Result;

/// Returns up to `limit` combinations summing to `amount`.
///
/// The number returned is `min(limit, count_change_ways(amount, denominations))`.
///
/// # Examples
///
/// ```
/// use making_change::change_combinations;
///
/// let combos = change_combinations(4, &[1, 2, 3], 10).unwrap();
/// assert_eq!(
///     combos,
///     vec![vec![3, 1], vec![2, 2], vec![2, 1, 1], vec![1, 1, 1, 1]]
/// );
///
/// // The empty combination makes zero.
/// assert_eq!(change_combinations(0, &[5], 10).unwrap(), vec![Vec::<u64>::new()]);
/// ```
pub fn change_combinations(
    amount: i64,
    denominations: &[i64],
    limit: usize,
) -> Result<Vec<Vec<u64>>> {
    ChangeCounter::default().combinations(amount, denominations, limit)
}

/// `coins` must be positive and distinct, in any order.
pub(super) fn enumerate(target: usize, coins: &[u64], limit: usize) -> Result<Vec<Vec<u64>>> {
    let mut found = Vec::new();
    if limit == 0 {
        return Ok(found);
    }

    let mut desc: Vec<usize> = coins
        .iter()
        .filter_map(|&coin| usize::try_from(coin).ok())
        .filter(|&coin| coin <= target)
        .collect();
    desc.sort_unstable_by(|a, b| b.cmp(a));
    if target > 0 && desc.is_empty() {
        return Ok(found);
    }

    let deepest = completion_table(target, &desc)?;
    // Some combination of `desc[index..]` sums to `amount`.
    let completes = |index: usize, amount: usize| deepest[amount].is_some_and(|d| d >= index);
    let first_fit = |from: usize, remaining: usize| {
        (from..desc.len()).find(|&i| desc[i] <= remaining && completes(i, remaining - desc[i]))
    };

    if !completes(0, target) {
        debug!("no combination of {} denominations makes {target}", desc.len());
        return Ok(found);
    }

    // Indices into `desc`, never decreasing, so each multiset is visited once.
    let mut picked: Vec<usize> = Vec::new();
    let mut remaining = target;
    let mut from = 0;

    loop {
        if remaining == 0 {
            found.push(picked.iter().map(|&i| desc[i] as u64).collect());
            if found.len() == limit {
                return Ok(found);
            }
        } else if let Some(i) = first_fit(from, remaining) {
            picked.push(i);
            remaining -= desc[i];
            from = i;
            continue;
        }

        // Complete: swap the last pick for the next smaller coin that still completes.
        loop {
            let Some(last) = picked.pop() else {
                return Ok(found);
            };
            remaining += desc[last];
            if let Some(i) = first_fit(last + 1, remaining) {
                picked.push(i);
                remaining -= desc[i];
                from = i;
                break;
            }
        }
    }
}

/// Entry `amount` holds the largest `index` such that some combination of
/// `desc[index..]` sums to `amount`, or `None` if no suffix reaches it.
/// Shorter suffixes reach fewer amounts, so `index <= deepest[amount]` is
/// exactly "reachable from `desc[index..]`".
fn completion_table(target: usize, desc: &[usize]) -> Result<Vec<Option<usize>>> {
    let mut deepest = allocate_table(target + 1, None)?;
    deepest[0] = Some(desc.len());
    for (index, &coin) in desc.iter().enumerate().rev() {
        for amount in coin..=target {
            if deepest[amount].is_none() && deepest[amount - coin].is_some_and(|d| d >= index) {
                deepest[amount] = Some(index);
            }
        }
    }
    Ok(deepest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::dynamic::coin_change::count_change_ways;
    use crate::cs::error::Error;
    use num_bigint::BigUint;

    #[test]
    fn test_lists_every_combination() {
        let combos = change_combinations(10, &[2, 5, 3, 6], 100).unwrap();
        assert_eq!(
            combos,
            vec![
                vec![6, 2, 2],
                vec![5, 5],
                vec![5, 3, 2],
                vec![3, 3, 2, 2],
                vec![2, 2, 2, 2, 2],
            ]
        );
        for combo in &combos {
            assert_eq!(combo.iter().sum::<u64>(), 10);
            assert!(combo.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_limit_truncates() {
        let combos = change_combinations(5, &[1, 3, 5], 2).unwrap();
        assert_eq!(combos, vec![vec![5], vec![3, 1, 1]]);
        assert!(change_combinations(5, &[1, 3, 5], 0).unwrap().is_empty());
    }

    #[test]
    fn test_no_combinations() {
        assert!(change_combinations(7, &[], 10).unwrap().is_empty());
        assert!(change_combinations(7, &[2, 4], 10).unwrap().is_empty());
        assert!(change_combinations(7, &[5, 6], 10).unwrap().is_empty());
    }

    #[test]
    fn test_length_matches_count() {
        let coins = [1, 2, 5, 10];
        for amount in 0..=30 {
            let listed = change_combinations(amount, &coins, usize::MAX).unwrap();
            let count = count_change_ways(amount, &coins).unwrap();
            assert_eq!(BigUint::from(listed.len()), count, "amount {amount}");
        }
    }

    #[test]
    fn test_dead_ends_are_skipped() {
        // Large coins that almost never complete would stall an unpruned search
        // before reaching the handful of real answers.
        let combos = change_combinations(1_001, &[1_000, 999, 998, 997, 2, 1], 3).unwrap();
        assert_eq!(combos[0], vec![1_000, 1]);
        assert_eq!(combos[1], vec![999, 2]);
        assert_eq!(combos[2], vec![999, 1, 1]);

        // gcd 1, yet most branches under 31 never finish.
        let combos = change_combinations(31, &[6, 10, 15], 100).unwrap();
        assert_eq!(combos, vec![vec![15, 10, 6]]);
    }

    #[test]
    fn test_completion_table() {
        // desc = [5, 3]: 3, 6 reachable from [3]; 5, 8 need the 5.
        let deepest = completion_table(8, &[5, 3]).unwrap();
        assert_eq!(deepest[0], Some(2));
        assert_eq!(deepest[3], Some(1));
        assert_eq!(deepest[6], Some(1));
        assert_eq!(deepest[5], Some(0));
        assert_eq!(deepest[8], Some(0));
        assert_eq!(deepest[1], None);
        assert_eq!(deepest[7], None);
    }

    #[test]
    fn test_huge_amount() {
        assert!(change_combinations(i64::MAX, &[], 5).unwrap().is_empty());
        assert!(change_combinations(i64::MAX - 2, &[i64::MAX], 5)
            .unwrap()
            .is_empty());
        assert!(matches!(
            change_combinations(i64::MAX, &[1], 1),
            Err(Error::InputTooLarge(_))
        ));
    }

    #[test]
    fn test_long_combination_does_not_recurse() {
        let combos = change_combinations(100_000, &[1], 1).unwrap();
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].len(), 100_000);
    }
}
