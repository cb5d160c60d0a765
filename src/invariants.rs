//! Debug assertion macros for the index protocol.
//!
//! Active only in debug builds; release builds pay nothing. Used from
//! `ring.rs` on the hot paths and at construction.

/// Assert that a wrapped index is inside `[0, internal_capacity)`.
///
/// Every stored index must stay in the wrapped range; a value at or past
/// `internal_capacity` means the wrap arithmetic was skipped.
macro_rules! debug_assert_index_wrapped {
    ($name:literal, $idx:expr, $internal:expr) => {
        debug_assert!(
            $idx < $internal,
            "{} index {} outside wrapped range [0, {})",
            $name,
            $idx,
            $internal
        )
    };
}

/// Assert that a live-element count never exceeds the requested capacity.
///
/// The reserved slot guarantees `(write - read) mod internal_capacity` is at
/// most `capacity`; exceeding it means the full check let a write through.
macro_rules! debug_assert_len_bounded {
    ($len:expr, $capacity:expr) => {
        debug_assert!(
            $len <= $capacity,
            "live count {} exceeds capacity {}",
            $len,
            $capacity
        )
    };
}

/// Assert that two index fields do not share a cache line.
///
/// Producer stores to one field must not invalidate the line holding the
/// other; this checks the field layout actually delivers that separation.
macro_rules! debug_assert_distinct_lines {
    ($a:expr, $b:expr, $line:expr) => {
        debug_assert!(
            ($a as *const _ as usize).abs_diff($b as *const _ as usize) >= $line,
            "index fields share a cache line"
        )
    };
}

pub(crate) use debug_assert_distinct_lines;
pub(crate) use debug_assert_index_wrapped;
pub(crate) use debug_assert_len_bounded;
