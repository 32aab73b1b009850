//! Counting the ways to make change.
//!
//! Given a target amount and a set of coin denominations, each usable any number
//! of times, count the multisets of coins summing exactly to the amount. `1+2` and
//! `2+1` are the same combination.
//!
//! The engine is the unbounded-knapsack recurrence built bottom-up. A table
//! `ways[0..=amount]` starts as `[1, 0, 0, ...]` and each denomination `c` is
//! folded in with an ascending in-place sweep:
//!
//! ```text
//! ways[k] += ways[k - c]    for k in c..=amount
//! ```
//!
//! Sweeping upward in place lets `ways[k - c]` already include combinations that
//! use `c`, so `c` can repeat. Folding one denomination at a time in the outer loop
//! means a combination is discovered only when its last denomination is folded in,
//! so permutations are never counted twice. After folding a subset `S`, `ways[k]`
//! is the number of multisets over `S` summing to `k`.
//!
//! Counts are exact: the default entry points use `BigUint`. The `_checked`
//! variants count in a fixed-width type and fail with [`Error::Overflow`] instead
//! of wrapping.
//!
//! # Examples
//!
//! ```
//! use making_change::count_change_ways;
//! use num_bigint::BigUint;
//!
//! // 1+1+1+1, 1+1+2, 1+3, 2+2
//! assert_eq!(count_change_ways(4, &[1, 2, 3]).unwrap(), BigUint::from(4u32));
//! ```

use std::collections::BTreeSet;

use log::{debug, trace, warn};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{CheckedAdd, One, Zero};
use rayon::prelude::*;

use crate::cs::error::{Error, Result};

pub mod combinations;
pub mod memoized;


/// Limits applied before a table is allocated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountConfig {
    /// Largest amount accepted. `None` accepts any amount that can index a table.
    pub max_amount: Option<usize>,
}

impl CountConfig {
    /// Rejects amounts above `max_amount` with [`Error::InputTooLarge`].
    pub fn with_max_amount(mut self, max_amount: usize) -> Self {
        self.max_amount = Some(max_amount);
        self
    }
}

/// A single independent query for [`count_change_ways_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeQuery {
    pub amount: i64,
    pub denominations: Vec<i64>,
}

impl ChangeQuery {
    pub fn new(amount: i64, denominations: Vec<i64>) -> Self {
        Self {
            amount,
            denominations,
        }
    }
}

/// Change-counting engine carrying a [`CountConfig`].
///
/// Every method validates its input against the config and fails before doing
/// any work. No state survives between calls, so a counter can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct ChangeCounter {
    config: CountConfig,
}

impl ChangeCounter {
    pub fn new(config: CountConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CountConfig {
        &self.config
    }

    /// Exact number of ways to make `amount` from `denominations`.
    pub fn count(&self, amount: i64, denominations: &[i64]) -> Result<BigUint> {
        self.count_checked(amount, denominations)
    }

    /// Number of ways counted in `T`, failing with [`Error::Overflow`] if any
    /// entry of the ways table exceeds `T`.
    pub fn count_checked<T>(&self, amount: i64, denominations: &[i64]) -> Result<T>
    where
        T: CheckedAdd + Zero + One + Clone,
    {
        let (target, coins) = self.prepare(amount, denominations)?;
        debug!(
            "counting ways to make {} from {} distinct denominations",
            target,
            coins.len()
        );

        if !has_usable_coin(target, &coins) {
            debug!("no denomination fits in {target}; no combinations");
            return Ok(T::zero());
        }
        if !reachable_by_gcd(target, &coins) {
            debug!("gcd of denominations does not divide {target}; no combinations");
            return Ok(T::zero());
        }

        let mut ways = fill_ways_table::<T>(target, &coins)?;
        // The table always holds at least `ways[0]`.
        Ok(ways.pop().unwrap_or_else(T::zero))
    }

    /// The full ways table: entry `k` is the number of ways to make `k`.
    pub fn table(&self, amount: i64, denominations: &[i64]) -> Result<Vec<BigUint>> {
        self.table_checked(amount, denominations)
    }

    /// The full ways table counted in `T`.
    pub fn table_checked<T>(&self, amount: i64, denominations: &[i64]) -> Result<Vec<T>>
    where
        T: CheckedAdd + Zero + One + Clone,
    {
        let (target, coins) = self.prepare(amount, denominations)?;
        fill_ways_table(target, &coins)
    }

    /// Same count as [`ChangeCounter::count`], computed top-down with a per-call memo.
    pub fn count_memoized(&self, amount: i64, denominations: &[i64]) -> Result<BigUint> {
        let (target, coins) = self.prepare(amount, denominations)?;
        Ok(memoized::count_top_down(target, &coins))
    }

    /// Up to `limit` combinations, largest coins first.
    pub fn combinations(
        &self,
        amount: i64,
        denominations: &[i64],
        limit: usize,
    ) -> Result<Vec<Vec<u64>>> {
        let (target, coins) = self.prepare(amount, denominations)?;
        if !has_usable_coin(target, &coins) || !reachable_by_gcd(target, &coins) {
            return Ok(Vec::new());
        }
        combinations::enumerate(target, &coins, limit)
    }

    /// Counts every query independently on the rayon pool. Results keep the
    /// order of `queries`; an invalid query fails on its own without affecting
    /// the others.
    pub fn count_batch(&self, queries: &[ChangeQuery]) -> Vec<Result<BigUint>> {
        debug!("counting {} queries in parallel", queries.len());
        queries
            .par_iter()
            .map(|query| self.count(query.amount, &query.denominations))
            .collect()
    }

    fn prepare(&self, amount: i64, denominations: &[i64]) -> Result<(usize, Vec<u64>)> {
        let target = validate_amount(amount, &self.config)?;
        let coins = normalize_denominations(denominations)?;
        Ok((target, coins))
    }
}

/// Exact number of ways to make `amount` from an unlimited supply of each
/// denomination.
///
/// # Errors
///
/// * [`Error::InvalidAmount`] if `amount` is negative.
/// * [`Error::InvalidDenomination`] if any denomination is zero or negative.
/// * [`Error::InputTooLarge`] if the ways table for `amount` cannot be
///   allocated. Amounts no coin fits into are answered without a table.
///
/// # Examples
///
/// ```
/// use making_change::{count_change_ways, Error};
/// use num_bigint::BigUint;
///
/// assert_eq!(count_change_ways(10, &[2, 5, 3, 6]).unwrap(), BigUint::from(5u32));
/// assert_eq!(count_change_ways(0, &[]).unwrap(), BigUint::from(1u32));
/// assert_eq!(count_change_ways(-1, &[1, 2]), Err(Error::InvalidAmount(-1)));
/// ```
pub fn count_change_ways(amount: i64, denominations: &[i64]) -> Result<BigUint> {
    ChangeCounter::default().count(amount, denominations)
}

/// Number of ways to make `amount`, counted in the fixed-width type `T`.
///
/// # Examples
///
/// ```
/// use making_change::{count_change_ways_checked, Error};
///
/// assert_eq!(count_change_ways_checked::<u64>(5, &[1, 3, 5]), Ok(3));
///
/// // 1000 from every coin 1..=100 has far more than 2^8 combinations.
/// let coins: Vec<i64> = (1..=100).collect();
/// assert!(matches!(
///     count_change_ways_checked::<u8>(1000, &coins),
///     Err(Error::Overflow { .. })
/// ));
/// ```
pub fn count_change_ways_checked<T>(amount: i64, denominations: &[i64]) -> Result<T>
where
    T: CheckedAdd + Zero + One + Clone,
{
    ChangeCounter::default().count_checked(amount, denominations)
}

/// Ways table for every partial amount `0..=amount`.
///
/// # Examples
///
/// ```
/// use making_change::change_ways_table;
/// use num_bigint::BigUint;
///
/// let table = change_ways_table(5, &[1, 3, 5]).unwrap();
/// let expected: Vec<BigUint> = [1u32, 1, 1, 2, 2, 3].into_iter().map(BigUint::from).collect();
/// assert_eq!(table, expected);
/// ```
pub fn change_ways_table(amount: i64, denominations: &[i64]) -> Result<Vec<BigUint>> {
    ChangeCounter::default().table(amount, denominations)
}

/// Counts each query in parallel with default limits.
pub fn count_change_ways_batch(queries: &[ChangeQuery]) -> Vec<Result<BigUint>> {
    ChangeCounter::default().count_batch(queries)
}

/// Validates `denominations` and returns them as a sorted set.
///
/// Fails on the first zero or negative value. Duplicates collapse, since a
/// denomination's multiplicity in the input does not change the count.
///
/// # Examples
///
/// ```
/// use making_change::{normalize_denominations, Error};
///
/// assert_eq!(normalize_denominations(&[5, 1, 5, 2]), Ok(vec![1, 2, 5]));
/// assert_eq!(normalize_denominations(&[0, 1]), Err(Error::InvalidDenomination(0)));
/// ```
pub fn normalize_denominations(denominations: &[i64]) -> Result<Vec<u64>> {
    let mut distinct = BTreeSet::new();
    for &denomination in denominations {
        let coin = u64::try_from(denomination)
            .ok()
            .filter(|&coin| coin > 0)
            .ok_or(Error::InvalidDenomination(denomination))?;
        distinct.insert(coin);
    }
    Ok(distinct.into_iter().collect())
}

fn validate_amount(amount: i64, config: &CountConfig) -> Result<usize> {
    if amount < 0 {
        return Err(Error::InvalidAmount(amount));
    }
    // The table needs `amount + 1` slots.
    let target = usize::try_from(amount)
        .ok()
        .filter(|&target| target < usize::MAX)
        .ok_or_else(|| {
            Error::InputTooLarge(format!("amount {amount} cannot be addressed on this platform"))
        })?;
    if let Some(limit) = config.max_amount {
        if target > limit {
            return Err(Error::InputTooLarge(format!(
                "amount {target} exceeds the configured maximum of {limit}"
            )));
        }
    }
    Ok(target)
}

/// False when the target is positive and every coin is larger than it.
fn has_usable_coin(target: usize, coins: &[u64]) -> bool {
    target == 0 || coins.iter().any(|&coin| coin <= target as u64)
}

/// Allocates a table of `len` copies of `fill`, reporting a table the
/// platform cannot hold as [`Error::InputTooLarge`].
fn allocate_table<T: Clone>(len: usize, fill: T) -> Result<Vec<T>> {
    let mut table = Vec::new();
    table.try_reserve_exact(len).map_err(|err| {
        Error::InputTooLarge(format!("a table of {len} entries cannot be allocated: {err}"))
    })?;
    table.resize(len, fill);
    Ok(table)
}

/// False when no combination can exist because the gcd of the coins does not
/// divide the target.
fn reachable_by_gcd(target: usize, coins: &[u64]) -> bool {
    let gcd = coins
        .iter()
        .fold(0u64, |acc, coin| Integer::gcd(&acc, coin));
    gcd == 0 || target as u64 % gcd == 0
}

/// Builds the ways table bottom-up. `coins` must be positive and distinct.
fn fill_ways_table<T>(target: usize, coins: &[u64]) -> Result<Vec<T>>
where
    T: CheckedAdd + Zero + One + Clone,
{
    let mut ways = allocate_table(target + 1, T::zero())?;
    ways[0] = T::one();

    for &coin in coins {
        let coin = match usize::try_from(coin) {
            Ok(coin) if coin <= target => coin,
            _ => {
                trace!("denomination {coin} exceeds {target}; skipped");
                continue;
            }
        };

        for curr_amount in coin..=target {
            ways[curr_amount] = ways[curr_amount]
                .checked_add(&ways[curr_amount - coin])
                .ok_or_else(|| {
                    warn!("ways to make {curr_amount} overflowed while folding in {coin}");
                    Error::Overflow {
                        amount: curr_amount,
                    }
                })?;
        }
        trace!("folded in denomination {coin}");
    }

    Ok(ways)
}
