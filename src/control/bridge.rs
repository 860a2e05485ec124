use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::control::cell::{AtomicF32, AtomicHiLow};

/// Upper bound accepted by `set_gain`.
pub const MAX_GAIN: f32 = 16.0;
pub const DEFAULT_WET_MIX: f32 = 0.5;
pub const DEFAULT_GAIN: f32 = 1.0;

/// Shared cells between the audio thread and the control plane.
///
/// The engine owns the bridge behind an `Arc`. The audio side never touches
/// the fields directly: transforms are handed small closures
/// (`volume_publisher`, `wet_mix_source`, ...) that capture a clone of the
/// `Arc` and load or store one cell each. The control side goes through a
/// `ControlHandle`.
///
/// Every access is a single relaxed atomic load or store, so neither side
/// can ever block the other.
#[derive(Debug)]
pub struct ControlBridge {
    out_volume: AtomicF32,
    out_hi_low: AtomicHiLow,
    wet_mix: AtomicF32,
    gain: AtomicF32,
    input_underruns: AtomicU64,
    input_overruns: AtomicU64,
}

impl ControlBridge {
    pub fn new() -> Self {
        Self {
            out_volume: AtomicF32::new(0.0),
            out_hi_low: AtomicHiLow::new(0.0, 0.0),
            wet_mix: AtomicF32::new(DEFAULT_WET_MIX),
            gain: AtomicF32::new(DEFAULT_GAIN),
            input_underruns: AtomicU64::new(0),
            input_overruns: AtomicU64::new(0),
        }
    }

    pub fn handle(self: &Arc<Self>) -> ControlHandle {
        ControlHandle {
            bridge: Arc::clone(self),
        }
    }

    // Telemetry (written by the audio thread)

    #[inline]
    pub fn publish_volume(&self, volume: f32) {
        self.out_volume.set(volume);
    }

    #[inline]
    pub fn publish_hi_low(&self, hi: f32, low: f32) {
        self.out_hi_low.set(hi, low);
    }

    #[inline]
    pub fn record_underrun(&self) {
        self.input_underruns.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_overrun(&self) {
        self.input_overruns.fetch_add(1, Ordering::Relaxed);
    }

    pub fn out_volume(&self) -> f32 {
        self.out_volume.get()
    }

    pub fn out_hi_low(&self) -> (f32, f32) {
        self.out_hi_low.get()
    }

    pub fn input_underruns(&self) -> u64 {
        self.input_underruns.load(Ordering::Relaxed)
    }

    pub fn input_overruns(&self) -> u64 {
        self.input_overruns.load(Ordering::Relaxed)
    }

    // Parameters (written by the control plane)

    pub fn wet_mix(&self) -> f32 {
        self.wet_mix.get()
    }

    /// Clamped to [0, 1]. NaN is ignored.
    pub fn set_wet_mix(&self, mix: f32) {
        if !mix.is_nan() {
            self.wet_mix.set(mix.clamp(0.0, 1.0));
        }
    }

    pub fn gain(&self) -> f32 {
        self.gain.get()
    }

    /// Clamped to [0, MAX_GAIN]. NaN is ignored.
    pub fn set_gain(&self, gain: f32) {
        if !gain.is_nan() {
            self.gain.set(gain.clamp(0.0, MAX_GAIN));
        }
    }

    // Closures for the audio side

    /// For `VolumeTap`.
    pub fn volume_publisher(self: &Arc<Self>) -> impl FnMut(f32) + Send + 'static {
        let bridge = Arc::clone(self);
        move |volume| bridge.publish_volume(volume)
    }

    /// For `HiLowTap`.
    pub fn hi_low_publisher(self: &Arc<Self>) -> impl FnMut(f32, f32) + Send + 'static {
        let bridge = Arc::clone(self);
        move |hi, low| bridge.publish_hi_low(hi, low)
    }

    /// For `Mixer`.
    pub fn wet_mix_source(self: &Arc<Self>) -> impl FnMut() -> f32 + Send + 'static {
        let bridge = Arc::clone(self);
        move || bridge.wet_mix()
    }

    /// For `ParamGain`.
    pub fn gain_source(self: &Arc<Self>) -> impl FnMut() -> f32 + Send + 'static {
        let bridge = Arc::clone(self);
        move || bridge.gain()
    }
}

impl Default for ControlBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Control-plane view of a running engine's bridge.
///
/// Cheap to clone and safe to move to any thread. All methods return
/// immediately with the latest value; before the first block completes the
/// telemetry reads 0 and `(0, 0)`.
#[derive(Clone, Debug)]
pub struct ControlHandle {
    bridge: Arc<ControlBridge>,
}

impl ControlHandle {
    /// RMS of the most recent metered block.
    pub fn get_out_volume(&self) -> f32 {
        self.bridge.out_volume()
    }

    /// `(max, min)` of the most recent metered block.
    pub fn get_out_hi_low(&self) -> (f32, f32) {
        self.bridge.out_hi_low()
    }

    pub fn wet_mix(&self) -> f32 {
        self.bridge.wet_mix()
    }

    pub fn set_wet_mix(&self, mix: f32) {
        self.bridge.set_wet_mix(mix);
    }

    pub fn gain(&self) -> f32 {
        self.bridge.gain()
    }

    pub fn set_gain(&self, gain: f32) {
        self.bridge.set_gain(gain);
    }

    /// Blocks that ran short of captured input and were zero-filled.
    pub fn input_underruns(&self) -> u64 {
        self.bridge.input_underruns()
    }

    /// Capture callbacks that dropped samples because the ring was full.
    pub fn input_overruns(&self) -> u64 {
        self.bridge.input_overruns()
    }
}
