use crate::invariants::{
    debug_assert_distinct_lines, debug_assert_index_wrapped, debug_assert_len_bounded,
};
use crate::{RingError, SpinWait};
use crossbeam_utils::CachePadded;
use std::cell::UnsafeCell;
use std::mem::{self, MaybeUninit};
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// INDEX PROTOCOL
// =============================================================================
//
// Two wrapped indices in [0, internal_capacity) delimit the live range
// [read_idx, write_idx): those slots hold initialized values, every other slot
// is vacant. internal_capacity = capacity + 1, so a full ring still satisfies
// write_idx != read_idx and emptiness stays unambiguous.
//
// **Producer (push path):**
// 1. Load `write_idx` with Relaxed (only the producer writes it)
// 2. Check `next` against `cached_read_idx` (plain read, single-writer cell)
// 3. If the cache says full: reload `read_idx` with Acquire, update the cache
// 4. Write the value into the vacant slot (no ordering needed yet)
// 5. Store `write_idx` with Release, publishing the slot
//
// **Consumer (pop path):**
// 1. Load `read_idx` with Relaxed (only the consumer writes it)
// 2. Check against `cached_write_idx` (plain read, single-writer cell)
// 3. If the cache says empty: reload `write_idx` with Acquire, update the cache
// 4. Move the value out of the front slot
// 5. Store `read_idx` with Release, handing the slot back
//
// The Release store in step 5 of one side paired with the Acquire load in
// step 3 of the other is the only synchronization edge in the structure. No
// lock, no CAS, no fence beyond those two orderings.
//
// The cache cells are read and written by exactly one thread each
// (`cached_read_idx` by the producer, `cached_write_idx` by the consumer), so
// they need no atomicity at all, only the slot count they save: a push that
// finds room in the cache touches no consumer-written cache line.
//
// =============================================================================

/// Assumed cache line size in bytes.
///
/// 64 covers mainstream x86_64 and aarch64 parts; a platform with a different
/// line size loses padding precision, not correctness.
pub(crate) const CACHE_LINE_SIZE: usize = 64;

/// Bounded lock-free single-producer single-consumer ring buffer.
///
/// A fixed-capacity circular buffer moving values from exactly one producer
/// thread to exactly one consumer thread with no locks, no syscalls, and one
/// Release/Acquire pair per handoff. Blocking variants busy-poll; they are
/// intended for threads pinned to dedicated cores (pinning is the caller's
/// job; the ring never spawns or parks threads).
///
/// # Layout
///
/// `write_idx` and `read_idx` each live on their own cache line
/// ([`CachePadded`] pads to 128 bytes, which also defeats adjacent-line
/// prefetching), as do the two thread-private index caches, so the producer's
/// hot stores never invalidate the consumer's hot line and vice versa. The
/// slot array carries `pad` unused element slots at each end, keeping the
/// first and last live slots off cache lines shared with neighboring
/// allocations.
///
/// # Discipline
///
/// Methods take `&self`, so a shared `Ring` (e.g. in an `Arc`) will accept
/// calls from any thread; the structure is only correct while at most one
/// thread pushes and at most one thread pops. The [`channel`](fn@crate::channel)
/// split enforces those roles at compile time; prefer it unless you are
/// embedding the ring in a structure that provides the same guarantee.
///
/// [`CachePadded`]: crossbeam_utils::CachePadded
#[repr(C)]
pub struct Ring<T> {
    // === PRODUCER HOT ===
    /// Next slot the producer will fill. Wraps in `[0, internal_capacity)`.
    write_idx: CachePadded<AtomicUsize>,
    /// Producer's private copy of `read_idx`, refreshed only when it reports
    /// the ring full.
    cached_read_idx: CachePadded<UnsafeCell<usize>>,

    // === CONSUMER HOT ===
    /// Next slot the consumer will drain. Wraps in `[0, internal_capacity)`.
    read_idx: CachePadded<AtomicUsize>,
    /// Consumer's private copy of `write_idx`, refreshed only when it reports
    /// the ring empty.
    cached_write_idx: CachePadded<UnsafeCell<usize>>,

    // === COLD ===
    /// `capacity + 1`: one vacant slot always separates full from empty.
    internal_capacity: usize,
    /// Unaddressed element slots at each end of `buffer`.
    pad: usize,
    /// `internal_capacity + 2 * pad` slots. Indexed as `pad + wrapped_index`;
    /// the leading and trailing `pad` slots are never touched.
    buffer: Box<[UnsafeCell<MaybeUninit<T>>]>,
}

// SAFETY: one thread holds the producer role and one the consumer role.
// `write_idx`/`read_idx` are atomics; each cache cell has exactly one writing
// thread; a storage slot is accessed by at most one thread at a time under the
// index protocol, with ownership handoff ordered by the Release store /
// Acquire load pair on the owning index.
unsafe impl<T: Send> Send for Ring<T> {}
unsafe impl<T: Send> Sync for Ring<T> {}

impl<T> Ring<T> {
    /// Creates a ring that holds up to `capacity` values.
    ///
    /// # Errors
    ///
    /// [`RingError::ZeroCapacity`] if `capacity == 0`;
    /// [`RingError::CapacityOverflow`] if `capacity` plus the reserved slot
    /// and padding slots does not fit in `usize`. Neither case is clamped.
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::ZeroCapacity);
        }
        let pad = Self::slot_padding();
        let internal_capacity = capacity
            .checked_add(1)
            .ok_or(RingError::CapacityOverflow { requested: capacity })?;
        let slots = internal_capacity
            .checked_add(2 * pad)
            .ok_or(RingError::CapacityOverflow { requested: capacity })?;

        let mut buffer = Vec::with_capacity(slots);
        buffer.resize_with(slots, || UnsafeCell::new(MaybeUninit::uninit()));

        let ring = Self {
            write_idx: CachePadded::new(AtomicUsize::new(0)),
            cached_read_idx: CachePadded::new(UnsafeCell::new(0)),
            read_idx: CachePadded::new(AtomicUsize::new(0)),
            cached_write_idx: CachePadded::new(UnsafeCell::new(0)),
            internal_capacity,
            pad,
            buffer: buffer.into_boxed_slice(),
        };
        debug_assert_distinct_lines!(&ring.write_idx, &ring.read_idx, CACHE_LINE_SIZE);
        debug_assert_distinct_lines!(&ring.write_idx, &ring.cached_read_idx, CACHE_LINE_SIZE);
        debug_assert_distinct_lines!(&ring.read_idx, &ring.cached_write_idx, CACHE_LINE_SIZE);
        Ok(ring)
    }

    /// Element slots needed to span one cache line.
    const fn slot_padding() -> usize {
        match mem::size_of::<T>() {
            // Zero-sized slots cannot share cache lines with anything.
            0 => 0,
            size => (CACHE_LINE_SIZE - 1) / size + 1,
        }
    }

    // ---------------------------------------------------------------------
    // INTROSPECTION
    // ---------------------------------------------------------------------

    /// Returns the number of values a caller can hold in the ring.
    ///
    /// Always the capacity passed to [`Ring::new`], never the padded
    /// internal slot count.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.internal_capacity - 1
    }

    /// Returns the number of live values.
    ///
    /// Both indices are loaded fresh with Acquire; under concurrent mutation
    /// the result is an instantaneous snapshot, valid only as an
    /// approximation.
    #[inline]
    pub fn len(&self) -> usize {
        let write = self.write_idx.load(Ordering::Acquire);
        let read = self.read_idx.load(Ordering::Acquire);
        let len = if write >= read {
            write - read
        } else {
            self.internal_capacity - (read - write)
        };
        debug_assert_len_bounded!(len, self.capacity());
        len
    }

    /// Returns `true` if the ring holds no values.
    ///
    /// Same snapshot semantics as [`len`](Ring::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.write_idx.load(Ordering::Acquire) == self.read_idx.load(Ordering::Acquire)
    }

    // ---------------------------------------------------------------------
    // PRODUCER API
    // ---------------------------------------------------------------------

    /// Appends a value, busy-polling while the ring is full.
    ///
    /// Never yields to the OS; see the crate docs on core pinning.
    #[inline]
    pub fn push(&self, value: T) {
        self.push_with(move || value);
    }

    /// Appends the value produced by `make`, busy-polling while full.
    ///
    /// The closure runs once the slot is claimed, so the value is constructed
    /// directly in slot storage when the closure body allows it.
    pub fn push_with<F: FnOnce() -> T>(&self, make: F) {
        let write = self.write_idx.load(Ordering::Relaxed);
        let next = self.wrap(write + 1);
        if !self.producer_sees_room(next) {
            let mut spin = SpinWait::new();
            while !self.refresh_read_cache(next) {
                spin.spin();
            }
        }
        // SAFETY: slot `write` is outside the live range [read_idx, write_idx),
        // so the producer has exclusive access until the Release store below
        // publishes it.
        unsafe { (*self.slot_ptr(write)).write(make()) };
        self.write_idx.store(next, Ordering::Release);
    }

    /// Attempts to append without blocking.
    ///
    /// Performs at most one refresh of the producer's read-index cache. On a
    /// full ring the value is handed back instead of dropped.
    #[inline]
    pub fn try_push(&self, value: T) -> Result<(), T> {
        match self.claim_write_slot() {
            Some((write, next)) => {
                // SAFETY: as in `push_with`: the claimed slot is the
                // producer's alone until published.
                unsafe { (*self.slot_ptr(write)).write(value) };
                self.write_idx.store(next, Ordering::Release);
                Ok(())
            }
            None => Err(value),
        }
    }

    /// Attempts to append the value produced by `make` without blocking.
    ///
    /// The closure does not run when the ring is full.
    #[inline]
    pub fn try_push_with<F: FnOnce() -> T>(&self, make: F) -> bool {
        match self.claim_write_slot() {
            Some((write, next)) => {
                // SAFETY: as in `push_with`.
                unsafe { (*self.slot_ptr(write)).write(make()) };
                self.write_idx.store(next, Ordering::Release);
                true
            }
            None => false,
        }
    }

    /// Appends unconditionally, with no space check.
    ///
    /// Escape hatch for latest-value-wins feeds. On a ring that is not full
    /// this is an ordinary push. On a full ring it advances `write_idx` onto
    /// `read_idx`: every buffered value becomes unreachable and the ring
    /// reads as empty until the next push (the consumer does not resume at
    /// an oldest-surviving element). Values abandoned that way are
    /// overwritten later without being dropped.
    ///
    /// Forcing while the consumer is concurrently popping forfeits FIFO and
    /// the not-yet-read values; never combine this method with code that
    /// assumes strict queue semantics.
    #[inline]
    pub fn force_push(&self, value: T) {
        self.force_push_with(move || value);
    }

    /// [`force_push`](Ring::force_push) with deferred construction.
    pub fn force_push_with<F: FnOnce() -> T>(&self, make: F) {
        let write = self.write_idx.load(Ordering::Relaxed);
        let next = self.wrap(write + 1);
        // SAFETY: slot `write` is never inside the live range, so the
        // consumer does not read it under the normal protocol. A value left
        // here by an earlier forced lap is overwritten without being dropped.
        unsafe { (*self.slot_ptr(write)).write(make()) };
        self.write_idx.store(next, Ordering::Release);
    }

    // ---------------------------------------------------------------------
    // CONSUMER API
    // ---------------------------------------------------------------------

    /// Removes and returns the front value, or `None` when empty.
    ///
    /// Performs at most one refresh of the consumer's write-index cache.
    #[inline]
    pub fn try_pop(&self) -> Option<T> {
        let read = self.claim_read_slot()?;
        // SAFETY: the live range is non-empty, so slot `read` holds an
        // initialized value; the Acquire load that established that pairs
        // with the producer's Release store. Reading by value moves
        // ownership to the caller, and the Release store below lets the
        // producer reuse the slot.
        let value = unsafe { (*self.slot_ptr(read)).assume_init_read() };
        self.read_idx.store(self.wrap(read + 1), Ordering::Release);
        Some(value)
    }

    /// Removes and returns the front value, busy-polling while empty.
    pub fn pop(&self) -> T {
        let mut spin = SpinWait::new();
        loop {
            if let Some(value) = self.try_pop() {
                return value;
            }
            spin.spin();
        }
    }

    /// Returns a reference to the front value without removing it.
    ///
    /// Pair with [`release`](Ring::release) to consume the value after
    /// inspection without copying it out. The reference is valid until the
    /// consumer advances; the split [`Consumer`](crate::Consumer) handle
    /// makes that pairing compiler-checked.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        let read = self.claim_read_slot()?;
        // SAFETY: initialized for the same reason as in `try_pop`; the
        // producer cannot touch the slot until `read_idx` advances past it.
        Some(unsafe { (*self.slot_ptr(read)).assume_init_ref() })
    }

    /// Drops the front value in place and advances, without re-reading it.
    ///
    /// Returns `false` (and does nothing) when the ring is empty.
    #[inline]
    pub fn release(&self) -> bool {
        match self.claim_read_slot() {
            None => false,
            Some(read) => {
                // SAFETY: same liveness as `try_pop`; dropping in place
                // consumes the front value without moving it out.
                unsafe { (*self.slot_ptr(read)).assume_init_drop() };
                self.read_idx.store(self.wrap(read + 1), Ordering::Release);
                true
            }
        }
    }

    // ---------------------------------------------------------------------
    // PROTOCOL INTERNALS
    // ---------------------------------------------------------------------

    /// Wraps an incremented index back into `[0, internal_capacity)`.
    #[inline]
    fn wrap(&self, idx: usize) -> usize {
        // `idx` is an in-range index plus at most one.
        if idx == self.internal_capacity {
            0
        } else {
            idx
        }
    }

    /// Raw pointer to the storage slot for wrapped index `idx`.
    ///
    /// Only the thread that owns the slot under the index protocol may
    /// dereference the result.
    #[inline]
    fn slot_ptr(&self, idx: usize) -> *mut MaybeUninit<T> {
        debug_assert_index_wrapped!("slot", idx, self.internal_capacity);
        self.buffer[self.pad + idx].get()
    }

    /// Fast-path space check against the producer's private index copy.
    #[inline]
    fn producer_sees_room(&self, next: usize) -> bool {
        // SAFETY: `cached_read_idx` is written only from the producer
        // thread, the sole caller of the producer paths.
        next != unsafe { *self.cached_read_idx.get() }
    }

    /// Slow path: refresh the producer's copy from the shared `read_idx`.
    ///
    /// The Acquire load pairs with the consumer's Release store, handing
    /// drained slots back to the producer. Returns `true` when room exists.
    #[inline]
    fn refresh_read_cache(&self, next: usize) -> bool {
        let read = self.read_idx.load(Ordering::Acquire);
        // SAFETY: single writer, the producer thread.
        unsafe { *self.cached_read_idx.get() = read };
        next != read
    }

    /// Claims the next write slot, refreshing the cache at most once.
    #[inline]
    fn claim_write_slot(&self) -> Option<(usize, usize)> {
        let write = self.write_idx.load(Ordering::Relaxed);
        let next = self.wrap(write + 1);
        if self.producer_sees_room(next) || self.refresh_read_cache(next) {
            Some((write, next))
        } else {
            None
        }
    }

    /// Fast-path emptiness check against the consumer's private index copy.
    #[inline]
    fn consumer_sees_data(&self, read: usize) -> bool {
        // SAFETY: `cached_write_idx` is written only from the consumer
        // thread, the sole caller of the consumer paths.
        read != unsafe { *self.cached_write_idx.get() }
    }

    /// Slow path: refresh the consumer's copy from the shared `write_idx`.
    ///
    /// The Acquire load pairs with the producer's Release store, making the
    /// published values visible. Returns `true` when data exists.
    #[inline]
    fn refresh_write_cache(&self, read: usize) -> bool {
        let write = self.write_idx.load(Ordering::Acquire);
        // SAFETY: single writer, the consumer thread.
        unsafe { *self.cached_write_idx.get() = write };
        read != write
    }

    /// Claims the front slot for reading, refreshing the cache at most once.
    #[inline]
    fn claim_read_slot(&self) -> Option<usize> {
        let read = self.read_idx.load(Ordering::Relaxed);
        if self.consumer_sees_data(read) || self.refresh_write_cache(read) {
            Some(read)
        } else {
            None
        }
    }
}

impl<T> Drop for Ring<T> {
    fn drop(&mut self) {
        // Drain the live range so every still-buffered value is dropped
        // exactly once. Values abandoned by a forced lap sit outside the
        // live range and are not tracked.
        let mut read = *self.read_idx.get_mut();
        let write = *self.write_idx.get_mut();
        while read != write {
            // SAFETY: `&mut self` means no other thread is active; slots in
            // [read_idx, write_idx) hold initialized values.
            unsafe { self.buffer[self.pad + read].get_mut().assume_init_drop() };
            read = self.wrap(read + 1);
        }
    }
}

impl<T> std::fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ring")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RingError;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(Ring::<u64>::new(0).unwrap_err(), RingError::ZeroCapacity);
    }

    #[test]
    fn capacity_overflow_is_rejected() {
        assert_eq!(
            Ring::<u64>::new(usize::MAX).unwrap_err(),
            RingError::CapacityOverflow { requested: usize::MAX }
        );
        // Padding slots alone can push a near-MAX capacity over the edge.
        assert!(matches!(
            Ring::<u8>::new(usize::MAX - 1),
            Err(RingError::CapacityOverflow { .. })
        ));
    }

    #[test]
    fn fresh_ring_is_empty() {
        let ring = Ring::<u64>::new(8).unwrap();
        assert_eq!(ring.try_pop(), None);
        assert_eq!(ring.len(), 0);
        assert!(ring.is_empty());
        assert_eq!(ring.capacity(), 8);
    }

    #[test]
    fn fifo_order_is_preserved() {
        let ring = Ring::new(16).unwrap();
        for i in 0..10u64 {
            ring.push(i);
        }
        for i in 0..10u64 {
            assert_eq!(ring.try_pop(), Some(i));
        }
        assert!(ring.is_empty());
    }

    #[test]
    fn full_ring_rejects_try_push() {
        let ring = Ring::new(4).unwrap();
        for i in 0..4u64 {
            assert_eq!(ring.try_push(i), Ok(()));
        }
        assert_eq!(ring.try_push(99), Err(99));
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn wraparound_preserves_order_and_size() {
        let ring = Ring::new(4).unwrap();
        for cycle in 0..5u64 {
            for i in 0..4u64 {
                ring.push(cycle * 10 + i);
            }
            assert_eq!(ring.len(), 4);
            for i in 0..4u64 {
                assert_eq!(ring.try_pop(), Some(cycle * 10 + i));
            }
            assert!(ring.is_empty());
        }
    }

    #[test]
    fn drain_interleaved_with_refill() {
        // capacity 5 walkthrough: fill, verify full, rotate one, drain.
        let ring = Ring::new(5).unwrap();
        for i in 0..5u64 {
            ring.push(i);
        }
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.try_push(5), Err(5));
        assert_eq!(ring.try_pop(), Some(0));
        assert_eq!(ring.try_push(5), Ok(()));
        for i in 1..=5u64 {
            assert_eq!(ring.try_pop(), Some(i));
        }
        assert!(ring.is_empty());
    }

    #[test]
    fn single_slot_ring() {
        let ring = Ring::new(1).unwrap();
        ring.push(42u64);
        assert_eq!(ring.try_push(1), Err(1));
        assert_eq!(ring.try_pop(), Some(42));
        assert!(ring.is_empty());
    }

    #[test]
    fn push_with_constructs_on_demand() {
        let ring = Ring::new(2).unwrap();
        ring.push_with(|| vec![1u8, 2, 3]);
        assert!(ring.try_push_with(|| vec![4u8]));
        // Full: the closure must not run.
        assert!(!ring.try_push_with(|| unreachable!("ring is full")));
        assert_eq!(ring.try_pop(), Some(vec![1, 2, 3]));
        assert_eq!(ring.try_pop(), Some(vec![4]));
    }

    #[test]
    fn peek_does_not_consume() {
        let ring = Ring::new(4).unwrap();
        assert_eq!(ring.peek(), None);
        ring.push(7u64);
        assert_eq!(ring.peek(), Some(&7));
        assert_eq!(ring.peek(), Some(&7));
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.try_pop(), Some(7));
    }

    #[test]
    fn release_consumes_without_reading() {
        let ring = Ring::new(4).unwrap();
        assert!(!ring.release());
        ring.push(1u64);
        ring.push(2);
        assert_eq!(ring.peek(), Some(&1));
        assert!(ring.release());
        assert_eq!(ring.peek(), Some(&2));
        assert!(ring.release());
        assert!(!ring.release());
        assert!(ring.is_empty());
    }

    #[test]
    fn force_push_on_full_ring_abandons_backlog() {
        let ring = Ring::new(3).unwrap();
        for i in 0..3u64 {
            ring.push(i);
        }
        ring.force_push(9);
        // The oldest value must be gone; with the whole backlog abandoned the
        // ring reads as empty, and it must stay usable.
        assert_ne!(ring.try_pop(), Some(0));
        assert!(ring.len() <= ring.capacity());
        ring.push(7);
        assert_eq!(ring.try_pop(), Some(7));
        assert!(ring.is_empty());
    }

    #[test]
    fn force_push_twice_exposes_forced_value() {
        // Force past full twice: the second forced write lands on the slot
        // the consumer reads next, so the next pop yields the forced value.
        let ring = Ring::new(10).unwrap();
        for i in 0..10u64 {
            ring.push(i);
        }
        ring.force_push(10);
        ring.force_push(10);
        assert_eq!(ring.try_pop(), Some(10));
        assert!(ring.len() <= ring.capacity());
    }

    #[test]
    fn force_push_below_capacity_is_plain_push() {
        let ring = Ring::new(4).unwrap();
        ring.force_push(1u64);
        ring.force_push(2);
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.try_pop(), Some(1));
        assert_eq!(ring.try_pop(), Some(2));
    }

    #[test]
    fn move_only_values_round_trip() {
        let ring = Ring::new(4).unwrap();
        ring.push(Box::new(11u64));
        ring.push(Box::new(22));
        assert_eq!(ring.try_pop(), Some(Box::new(11)));
        assert_eq!(ring.try_pop(), Some(Box::new(22)));
    }

    #[test]
    fn zero_sized_values_round_trip() {
        let ring = Ring::new(3).unwrap();
        ring.push(());
        ring.push(());
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.try_pop(), Some(()));
        assert_eq!(ring.try_pop(), Some(()));
        assert_eq!(ring.try_pop(), None);
    }

    #[test]
    fn drop_drains_live_values() {
        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        struct DropTracker;
        impl Drop for DropTracker {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROP_COUNT.store(0, Ordering::SeqCst);
        {
            let ring = Ring::new(8).unwrap();
            for _ in 0..5 {
                ring.push(DropTracker);
            }
            assert!(ring.try_pop().is_some());
            assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 1);
            // 4 live values remain when the ring drops.
        }
        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn release_drops_in_place() {
        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        struct DropTracker;
        impl Drop for DropTracker {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROP_COUNT.store(0, Ordering::SeqCst);
        let ring = Ring::new(4).unwrap();
        ring.push(DropTracker);
        assert!(ring.peek().is_some());
        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 0);
        assert!(ring.release());
        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn padding_spans_a_cache_line() {
        assert_eq!(Ring::<u8>::slot_padding(), 64);
        assert_eq!(Ring::<u64>::slot_padding(), 8);
        assert_eq!(Ring::<[u8; 200]>::slot_padding(), 1);
        assert_eq!(Ring::<()>::slot_padding(), 0);
    }
}
