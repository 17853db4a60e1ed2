//! Derived statistics over a [`SampleBuffer`].
//!
//! Integer sample types report mean/variance/stdev as fixed-point
//! **milli-units** (scaled by 1000) so callers on targets without an FPU get
//! three decimal places of resolution from pure integer math. `f32` samples
//! get ordinary floating-point statistics.
//!
//! All statistics cover only the samples actually held; an empty buffer
//! yields `None` rather than a made-up value.

use crate::buffer::SampleBuffer;

/// Marker for types storable in a [`SampleBuffer`] with min/max support.
pub trait Sample: Copy + PartialOrd {}

impl Sample for u8 {}
impl Sample for i8 {}
impl Sample for u16 {}
impl Sample for i16 {}
impl Sample for u32 {}
impl Sample for i32 {}
impl Sample for f32 {}

/// Integer sample types, widened to `i64` for fixed-point accumulation.
pub trait IntSample: Sample {
    fn widen(self) -> i64;
}

macro_rules! impl_int_sample {
    ($($t:ty),*) => {
        $(impl IntSample for $t {
            fn widen(self) -> i64 {
                i64::from(self)
            }
        })*
    };
}

impl_int_sample!(u8, i8, u16, i16, u32, i32);

impl<T: Sample, const N: usize> SampleBuffer<T, N> {
    /// Smallest held sample, or `None` when empty.
    pub fn min(&self) -> Option<T> {
        self.iter()
            .copied()
            .reduce(|acc, v| if v < acc { v } else { acc })
    }

    /// Largest held sample, or `None` when empty.
    pub fn max(&self) -> Option<T> {
        self.iter()
            .copied()
            .reduce(|acc, v| if v > acc { v } else { acc })
    }
}

impl<T: IntSample, const N: usize> SampleBuffer<T, N> {
    /// Mean of the held samples in milli-units (value × 1000).
    pub fn mean_milli(&self) -> Option<i64> {
        if self.is_empty() {
            return None;
        }
        let sum: i64 = self.iter().map(|s| s.widen()).sum();
        Some(sum * 1000 / self.len() as i64)
    }

    /// Population variance in milli-units (value² × 1000).
    pub fn variance_milli(&self) -> Option<i64> {
        let mean_milli = self.mean_milli()?;
        // Deviations are computed in milli-units, so the squared sum is in
        // micro-units (×10⁶); i128 keeps u32-range samples from overflowing.
        let sq_sum: i128 = self
            .iter()
            .map(|s| {
                let d = i128::from(s.widen() * 1000 - mean_milli);
                d * d
            })
            .sum();
        Some((sq_sum / self.len() as i128 / 1000) as i64)
    }

    /// Population standard deviation in milli-units (value × 1000).
    pub fn stdev_milli(&self) -> Option<i64> {
        let variance_milli = self.variance_milli()?;
        // stdev×1000 = √(variance×10⁶) = √(variance_milli×1000)
        Some(isqrt(variance_milli as u128 * 1000) as i64)
    }
}

impl<const N: usize> SampleBuffer<f32, N> {
    /// Mean of the held samples.
    pub fn mean(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }
        let sum: f32 = self.iter().sum();
        Some(sum / self.len() as f32)
    }

    /// Population variance of the held samples.
    pub fn variance(&self) -> Option<f32> {
        let mean = self.mean()?;
        let sq_sum: f32 = self.iter().map(|v| (v - mean) * (v - mean)).sum();
        Some(sq_sum / self.len() as f32)
    }

    /// Population standard deviation of the held samples.
    pub fn stdev(&self) -> Option<f32> {
        Some(self.variance()?.sqrt())
    }
}

/// Integer square root by Newton iteration (floor of √v).
fn isqrt(v: u128) -> u128 {
    if v < 2 {
        return v;
    }
    let mut x = v;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + v / x) / 2;
    }
    x
}
