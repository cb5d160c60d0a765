use std::hint;

/// Busy-poll pacing for the blocking operations.
///
/// Issues exponentially growing batches of PAUSE hints, capped at a small
/// batch size so a waiting thread keeps observing the peer index with low
/// latency. Unlike a general-purpose backoff there is no yield tier: the
/// blocking paths trade CPU for wake-up latency and must never enter the
/// scheduler.
#[derive(Debug)]
pub struct SpinWait {
    step: u32,
}

impl SpinWait {
    const SPIN_LIMIT: u32 = 6; // 2^6 = 64 pause hints per batch, max

    /// Creates a new spin pacer starting at the shortest batch.
    #[inline]
    pub fn new() -> Self {
        Self { step: 0 }
    }

    /// Burns one batch of PAUSE hints and grows the next batch.
    #[inline]
    pub fn spin(&mut self) {
        for _ in 0..(1u32 << self.step) {
            hint::spin_loop();
        }
        if self.step < Self::SPIN_LIMIT {
            self.step += 1;
        }
    }

    /// Restarts at the shortest batch for the next wait cycle.
    #[inline]
    pub fn reset(&mut self) {
        self.step = 0;
    }
}

impl Default for SpinWait {
    fn default() -> Self {
        Self::new()
    }
}
