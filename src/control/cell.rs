use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/*
Lock-Free Scalar Cells
======================

There is no `AtomicF32` in std, but an f32 is just 32 bits, so it can live
in an `AtomicU32` as its bit pattern:

    store:  value.to_bits()  ──→ AtomicU32
    load:   AtomicU32 ──→ f32::from_bits()

Relaxed ordering is enough. Each cell is an independent value with no other
memory published alongside it, so readers only need to see *some* recent
value, never a torn one. The audio thread never waits on a reader.

A (hi, low) pair has to be read as a unit: loading hi and low separately
could mix two different blocks. Both halves are packed into one
`AtomicU64` instead:

    bits 63..32  hi
    bits 31..0   low
*/

/// An f32 readable and writable from any thread without locking.
#[derive(Debug)]
pub struct AtomicF32(AtomicU32);

impl AtomicF32 {
    pub fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl Default for AtomicF32 {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// A `(hi, low)` pair of f32 stored and loaded atomically as one word.
#[derive(Debug)]
pub struct AtomicHiLow(AtomicU64);

impl AtomicHiLow {
    pub fn new(hi: f32, low: f32) -> Self {
        Self(AtomicU64::new(pack(hi, low)))
    }

    #[inline]
    pub fn get(&self) -> (f32, f32) {
        unpack(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set(&self, hi: f32, low: f32) {
        self.0.store(pack(hi, low), Ordering::Relaxed);
    }
}

impl Default for AtomicHiLow {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[inline]
fn pack(hi: f32, low: f32) -> u64 {
    ((hi.to_bits() as u64) << 32) | low.to_bits() as u64
}

#[inline]
fn unpack(bits: u64) -> (f32, f32) {
    (
        f32::from_bits((bits >> 32) as u32),
        f32::from_bits(bits as u32),
    )
}
