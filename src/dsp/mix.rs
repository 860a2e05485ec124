//! Crossfading and summing of buffers.

/*
Signal Mixing
=============

  balance       A control value (0.0 to 1.0) that sets the mix ratio.
                  balance = 0.0  →  100% signal A, 0% signal B
                  balance = 0.5  →  50% A, 50% B
                  balance = 1.0  →  0% A, 100% B

  wet/dry       dry = original signal, wet = effect signal.
                With A = dry and B = wet, balance is the "wet amount".

Linear crossfade, per sample:

    output = (A × (1 - balance)) + (B × balance)

The weights sum to 1, so two full-scale inputs never exceed full scale.
Plain summing has no such guarantee and is only used where one of the
inputs is known to be quiet (the drone layer, for example).
*/

/// Mix two signals using linear crossfade. `balance` is clamped to [0, 1].
///
/// output = (A × (1-balance)) + (B × balance)
#[inline]
pub fn mix(a: &[f32], b: &[f32], balance: f32, out: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());

    let balance = balance.clamp(0.0, 1.0);
    let weight_a = 1.0 - balance;
    let weight_b = balance;

    for ((&sa, &sb), o) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
        *o = (sa * weight_a) + (sb * weight_b);
    }
}

/// Sum two signals together without weighting.
///
/// Can exceed [-1.0, +1.0]; clip afterwards if that matters.
#[inline]
pub fn sum(a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());

    for ((&sa, &sb), o) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
        *o = sa + sb;
    }
}

/// Sample-wise minimum of two signals.
#[inline]
pub fn min(a: &[f32], b: &[f32], out: &mut [f32]) {
    for ((&sa, &sb), o) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
        *o = sa.min(sb);
    }
}

/// Sample-wise maximum of two signals.
#[inline]
pub fn max(a: &[f32], b: &[f32], out: &mut [f32]) {
    for ((&sa, &sb), o) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
        *o = sa.max(sb);
    }
}
