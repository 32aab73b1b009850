pub mod coin_change;

// Re-export the change-counting engine with descriptive names
pub use coin_change::combinations::change_combinations;
pub use coin_change::memoized::count_change_ways_memoized;
pub use coin_change::{
    change_ways_table, count_change_ways, count_change_ways_batch, count_change_ways_checked,
    normalize_denominations, ChangeCounter, ChangeQuery, CountConfig,
};
