//! Fixed-capacity sample window.
//!
//! [`SampleBuffer`] stores the most recent `N` samples in place. Pushes fill
//! the buffer first, then wrap and overwrite the oldest slot, so derived
//! statistics always cover a sliding window of the newest `N` values.

use heapless::Vec;

/// Ring buffer of the `N` most recent samples.
///
/// Backed by a `heapless::Vec`, so the storage is inline and fixed — no
/// allocation after construction. `N == 0` is tolerated: pushes are dropped
/// and the buffer stays empty.
#[derive(Debug, Clone)]
pub struct SampleBuffer<T, const N: usize> {
    samples: Vec<T, N>,
    /// Next slot to overwrite once the buffer is full.
    head: usize,
}

impl<T: Copy, const N: usize> SampleBuffer<T, N> {
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
            head: 0,
        }
    }

    /// Append a sample, overwriting the oldest one once `N` are held.
    pub fn push(&mut self, sample: T) {
        if N == 0 {
            return;
        }
        if self.samples.is_full() {
            self.samples[self.head] = sample;
        } else {
            // Cannot fail: the full case is handled above.
            let _ = self.samples.push(sample);
        }
        self.head = (self.head + 1) % N;
    }

    /// Number of samples currently held (saturates at `N`).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// True once a full window of `N` samples has been collected.
    ///
    /// Callers that need a complete window before trusting derived
    /// statistics (warm-up periods, moving averages) gate on this.
    pub fn is_primed(&self) -> bool {
        self.samples.is_full()
    }

    /// Drop all samples and reset the write position.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.head = 0;
    }

    /// Iterate over the held samples in slot order.
    ///
    /// Slot order is not arrival order once the buffer has wrapped; the
    /// statistics in this crate are order-insensitive, so this is fine.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.samples
    }
}

impl<T: Copy, const N: usize> Default for SampleBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
