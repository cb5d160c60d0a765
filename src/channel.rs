use crate::{Ring, RingError};
use std::sync::Arc;

/// Creates a bounded SPSC channel over a shared [`Ring`].
///
/// The two handles pin the producer and consumer roles: each is `Send` but
/// not `Clone`, and every mutating method takes `&mut self`, so at most one
/// thread can ever drive each side. Move the [`Producer`] to the producing
/// thread and the [`Consumer`] to the consuming thread; the backing ring is
/// drained when the last handle drops.
///
/// # Errors
///
/// Construction errors are [`Ring::new`]'s, unchanged.
///
/// # Example
///
/// ```
/// use ringspsc_rs::channel;
/// use std::thread;
///
/// let (mut tx, mut rx) = channel::<u64>(64).unwrap();
/// let producer = thread::spawn(move || {
///     for i in 0..1000 {
///         tx.push(i);
///     }
/// });
/// for i in 0..1000 {
///     assert_eq!(rx.pop(), i);
/// }
/// producer.join().unwrap();
/// ```
pub fn channel<T>(capacity: usize) -> Result<(Producer<T>, Consumer<T>), RingError> {
    let ring = Arc::new(Ring::new(capacity)?);
    let producer = Producer { ring: Arc::clone(&ring) };
    let consumer = Consumer { ring };
    Ok((producer, consumer))
}

/// Producing half of an SPSC channel.
pub struct Producer<T> {
    ring: Arc<Ring<T>>,
}

// Note: Producer intentionally does NOT implement Clone. A second handle
// would allow a second pushing thread, breaking the single-producer
// invariant the lock-free protocol rests on. Same for Consumer.

impl<T> Producer<T> {
    /// Appends a value, busy-polling while the ring is full.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.ring.push(value);
    }

    /// Appends the value produced by `make`, busy-polling while full.
    #[inline]
    pub fn push_with<F: FnOnce() -> T>(&mut self, make: F) {
        self.ring.push_with(make);
    }

    /// Attempts to append without blocking; hands the value back when full.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), T> {
        self.ring.try_push(value)
    }

    /// Attempts to append the value produced by `make` without blocking.
    #[inline]
    pub fn try_push_with<F: FnOnce() -> T>(&mut self, make: F) -> bool {
        self.ring.try_push_with(make)
    }

    /// Appends unconditionally; see [`Ring::force_push`] for the overwrite
    /// semantics on a full ring.
    #[inline]
    pub fn force_push(&mut self, value: T) {
        self.ring.force_push(value);
    }

    /// [`force_push`](Producer::force_push) with deferred construction.
    #[inline]
    pub fn force_push_with<F: FnOnce() -> T>(&mut self, make: F) {
        self.ring.force_push_with(make);
    }

    /// Snapshot of the number of live values.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Snapshot emptiness check.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// The capacity the channel was created with.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }
}

impl<T> std::fmt::Debug for Producer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Producer").field("ring", &self.ring).finish()
    }
}

/// Consuming half of an SPSC channel.
pub struct Consumer<T> {
    ring: Arc<Ring<T>>,
}

impl<T> std::fmt::Debug for Consumer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Consumer").field("ring", &self.ring).finish()
    }
}

impl<T> Consumer<T> {
    /// Removes and returns the front value, busy-polling while empty.
    #[inline]
    pub fn pop(&mut self) -> T {
        self.ring.pop()
    }

    /// Removes and returns the front value, or `None` when empty.
    #[inline]
    pub fn try_pop(&mut self) -> Option<T> {
        self.ring.try_pop()
    }

    /// Returns a reference to the front value without removing it.
    ///
    /// The reference borrows the consumer, so [`release`](Consumer::release)
    /// and [`pop`](Consumer::pop) cannot be called while it is alive; the
    /// inspect-then-consume pairing is checked by the borrow checker.
    #[inline]
    pub fn peek(&mut self) -> Option<&T> {
        self.ring.peek()
    }

    /// Drops the front value in place and advances, without re-reading it.
    ///
    /// Returns `false` when the ring is empty.
    #[inline]
    pub fn release(&mut self) -> bool {
        self.ring.release()
    }

    /// Snapshot of the number of live values.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Snapshot emptiness check.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// The capacity the channel was created with.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }
}
