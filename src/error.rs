//! Error types for ring construction.

use thiserror::Error;

/// Errors reported by [`Ring::new`](crate::Ring::new) and [`channel`](fn@crate::channel).
///
/// Both variants are configuration errors: they are fatal to the construction
/// call and never recovered internally. Transient full/empty conditions are
/// not errors; the try-variants report them through their return values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// The requested capacity was zero.
    ///
    /// A zero-capacity ring is a caller bug, not a degenerate configuration,
    /// so it is rejected rather than clamped to one slot.
    #[error("ring capacity must be at least 1")]
    ZeroCapacity,

    /// The requested capacity cannot be represented once the reserved
    /// disambiguation slot and the cache-line padding slots are added.
    ///
    /// Silently truncating would break every size/capacity computation the
    /// caller performs afterwards, so this is a hard failure.
    #[error("ring capacity {requested} overflows the index range with reserved and padding slots added")]
    CapacityOverflow {
        /// The capacity the caller asked for.
        requested: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_cause() {
        assert_eq!(RingError::ZeroCapacity.to_string(), "ring capacity must be at least 1");
        let err = RingError::CapacityOverflow { requested: usize::MAX };
        assert!(err.to_string().contains(&usize::MAX.to_string()));
    }
}
