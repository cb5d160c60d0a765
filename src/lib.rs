//! Bounded lock-free single-producer single-consumer ring buffer.
//!
//! A fixed-capacity circular buffer that moves values from exactly one
//! producer thread to exactly one consumer thread without locks, CAS loops,
//! or blocking syscalls. One Release store paired with one Acquire load is
//! the entire synchronization protocol; thread-private copies of the peer
//! index keep the hot paths off shared cache lines until a full/empty
//! boundary forces a refresh.
//!
//! # Key properties
//!
//! - Producer and consumer touch disjoint cache lines on the hot path
//!   (128-byte padded index fields, element-sized guard slots around the
//!   storage array)
//! - Blocking variants busy-poll with PAUSE hints and never enter the OS
//!   scheduler; pin both threads to dedicated cores for the intended
//!   latency profile (pinning is the caller's responsibility)
//! - FIFO delivery, except through the documented `force_push` escape hatch
//! - Construction is the only fallible surface; full/empty are ordinary
//!   return values, not errors
//!
//! # Example
//!
//! ```
//! use ringspsc_rs::channel;
//! use std::thread;
//!
//! let (mut tx, mut rx) = channel::<u64>(1024).unwrap();
//!
//! let producer = thread::spawn(move || {
//!     for i in 0..100 {
//!         tx.push(i);
//!     }
//! });
//!
//! for i in 0..100 {
//!     assert_eq!(rx.pop(), i);
//! }
//! producer.join().unwrap();
//! ```
//!
//! The [`channel`](fn@channel) split is the compiler-checked surface. [`Ring`] itself is
//! public for callers embedding the buffer in a structure that already
//! guarantees the two roles.

mod channel;
mod error;
mod invariants;
mod ring;
mod spin;

pub use channel::{channel, Consumer, Producer};
pub use error::RingError;
pub use ring::Ring;
pub use spin::SpinWait;
