//! Fuzz / Clip / Compression
//!
//! All three are memoryless waveshapers: each output sample depends only on
//! the input sample at the same instant.
//!
//! # Transfer Functions
//!
//! Fuzz (soft saturation):
//!   f(x) = sign(x) * |x|^0.7
//!   - Boosts quiet parts more than loud parts
//!   - Odd-symmetric, so only odd harmonics are added
//!
//! Clip (hard limiter):
//!   f(x) = clamp(x, -1, 1)
//!   - Anything beyond full scale is flattened
//!   - Idempotent: clipping twice is the same as clipping once
//!   - NaN maps to 0, so a clip at the end of a chain always yields a
//!     playable sample
//!
//! Compress:
//!   f(x) = sign(x) * |x|^(1 / amount)
//!   - amount = 1 is identity
//!   - amount > 1 lifts quiet samples towards full scale (less dynamic range)
//!   - amount < 1 pushes them down (expansion)
//!   - |x| is limited to 1 first, so a boosted input cannot blow up a
//!     large exponent
//!
//! Fuzz and clip stay finite for any finite input. Clip and compress also
//! stay inside [-1, 1] whatever sits in front of them.

const FUZZ_EXPONENT: f32 = 0.7;
const MIN_COMPRESS_AMOUNT: f32 = 1e-3;

/// Sign of `x` as -1, 0 or 1. Zero and NaN map to 0.
#[inline]
pub fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Soft saturation, `sign(x) * |x|^0.7`.
#[inline]
pub fn fuzz(x: f32) -> f32 {
    sign(x) * x.abs().powf(FUZZ_EXPONENT)
}

/// Hard limiter to [-1, 1]. NaN comes out as silence.
#[inline]
pub fn clip(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(-1.0, 1.0)
    }
}

/// Power-law compression, `sign(x) * min(|x|, 1)^(1/amount)`.
///
/// Amounts below 0.001 (and NaN) are raised to 0.001.
#[inline]
pub fn compress(x: f32, amount: f32) -> f32 {
    let amount = amount.max(MIN_COMPRESS_AMOUNT);
    sign(x) * x.abs().min(1.0).powf(1.0 / amount)
}

/// Per-sample compressor with a fixed amount.
#[derive(Clone, Copy, Debug)]
pub struct Compressor {
    amount: f32,
}

impl Compressor {
    /// Amounts below 0.001 are raised to 0.001 so the exponent stays finite.
    pub fn new(amount: f32) -> Self {
        Self {
            amount: amount.max(MIN_COMPRESS_AMOUNT),
        }
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }

    #[inline]
    pub fn next_sample(&mut self, x: f32) -> f32 {
        compress(x, self.amount)
    }
}
