//! Device lifecycle: default input and output devices, stream setup, and the
//! callback that drives the top-level transform.

pub mod config;
pub mod error;
pub mod processor;

use std::sync::Arc;

use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    BufferSize, Device, SampleFormat, Stream, StreamConfig, SupportedBufferSize,
    SupportedStreamConfigRange,
};
use rtrb::RingBuffer;

use crate::{
    control::{ControlBridge, ControlHandle},
    graph::node::Transform,
    io::SampleSource,
};

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use processor::{BlockProcessor, CaptureWriter};

/*
Audio Engine
============

cpal has no duplex stream, so the engine runs two:

    capture device ──→ [input callback] ──→ rtrb ring ──┐
                                                        │
    playback device ←── [output callback] ←── BlockProcessor ←┘
                                               (transform lives here)

The input callback only copies channel 0 into the ring. The output callback
owns the BlockProcessor, which owns the transform: nothing else can touch
the transform while the stream runs, and there is no lock anywhere on the
audio path. Telemetry and parameters cross threads through the
ControlBridge.

When an input override is given (a SoundLoop, say), it replaces the ring
as the processor's source and no capture device is opened at all.

Opening is all-or-nothing. Streams are built first and started last; if
any step fails, streams already built are dropped (which closes them)
before the error is returned. Closing pauses and drops both streams, and
runs again harmlessly from Drop.
*/

const INPUT: &str = "input";
const OUTPUT: &str = "output";

pub struct AudioEngine {
    config: EngineConfig,
    bridge: Arc<ControlBridge>,
    input_stream: Option<Stream>,
    output_stream: Option<Stream>,
}

impl AudioEngine {
    /// Open the default devices and start processing.
    ///
    /// `build` receives the engine's bridge so the transform can be wired to
    /// telemetry taps and parameter sources before it moves into the output
    /// callback.
    pub fn open<T, F>(
        config: EngineConfig,
        input_override: Option<Box<dyn SampleSource>>,
        build: F,
    ) -> EngineResult<Self>
    where
        T: Transform + 'static,
        F: FnOnce(&Arc<ControlBridge>) -> T,
    {
        config.validate()?;

        let host = cpal::default_host();
        log::info!("Using audio host: {:?}", host.id());

        let bridge = Arc::new(ControlBridge::new());
        let transform = build(&bridge);

        let (source, input_stream): (Box<dyn SampleSource>, Option<Stream>) = match input_override {
            Some(source) => {
                log::info!("Input override supplied, capture device not opened");
                (source, None)
            }
            None => {
                let device = host
                    .default_input_device()
                    .ok_or(EngineError::DeviceUnavailable(INPUT))?;
                let (producer, consumer) = RingBuffer::<f32>::new(config.ring_capacity());
                let writer = CaptureWriter::new(producer, Arc::clone(&bridge));
                let stream = build_input_stream(&device, &config, writer)?;
                (Box::new(consumer), Some(stream))
            }
        };

        let device = host
            .default_output_device()
            .ok_or(EngineError::DeviceUnavailable(OUTPUT))?;
        let processor =
            BlockProcessor::new(config.block_len, transform, source, Arc::clone(&bridge));
        let output_stream = build_output_stream(&device, &config, processor)?;

        if let Some(stream) = &input_stream {
            stream
                .play()
                .map_err(|e| EngineError::StreamStartFailed {
                    direction: INPUT,
                    reason: e.to_string(),
                })?;
        }
        output_stream
            .play()
            .map_err(|e| EngineError::StreamStartFailed {
                direction: OUTPUT,
                reason: e.to_string(),
            })?;

        log::info!(
            "Audio engine started: {}Hz, {} frame blocks (~{:.2}ms)",
            config.sample_rate,
            config.block_len,
            config.block_duration().as_secs_f64() * 1000.0
        );

        Ok(Self {
            config,
            bridge,
            input_stream,
            output_stream: Some(output_stream),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Handle for the control plane. Stays valid after `close`.
    pub fn control(&self) -> ControlHandle {
        self.bridge.handle()
    }

    pub fn is_running(&self) -> bool {
        self.output_stream.is_some()
    }

    /// Stop both streams and release the devices. Idempotent.
    pub fn close(&mut self) {
        let was_running = self.is_running();

        for (direction, stream) in [
            (OUTPUT, self.output_stream.take()),
            (INPUT, self.input_stream.take()),
        ] {
            if let Some(stream) = stream {
                if let Err(e) = stream.pause() {
                    log::warn!("Failed to pause {} stream: {}", direction, e);
                }
            }
        }

        if was_running {
            log::info!("Audio engine closed");
        }
    }
}

impl Drop for AudioEngine {
    fn drop(&mut self) {
        self.close();
    }
}

fn device_name(device: &Device) -> String {
    device.name().unwrap_or_else(|_| "Unknown".to_string())
}

/// Pick the f32 configuration with the fewest channels that runs at the
/// requested rate. Mono wins whenever the device offers it.
fn select_config(
    direction: &'static str,
    supported: impl Iterator<Item = SupportedStreamConfigRange>,
    config: &EngineConfig,
) -> EngineResult<StreamConfig> {
    let rate = config.sample_rate;
    let best = supported
        .filter(|c| c.sample_format() == SampleFormat::F32)
        .filter(|c| c.min_sample_rate().0 <= rate && rate <= c.max_sample_rate().0)
        .min_by_key(|c| c.channels())
        .ok_or_else(|| EngineError::UnsupportedConfig {
            direction,
            reason: format!("no f32 configuration at {}Hz", rate),
        })?;

    if best.channels() != 1 {
        log::warn!(
            "{} device has no mono f32 configuration, using {} channels",
            direction,
            best.channels()
        );
    }

    let frames = config.block_len as u32;
    let buffer_size = match best.buffer_size() {
        SupportedBufferSize::Range { min, max } if !(*min..=*max).contains(&frames) => {
            log::warn!(
                "{} device buffer range {}..={} excludes {} frames, using driver default",
                direction,
                min,
                max,
                frames
            );
            BufferSize::Default
        }
        _ => BufferSize::Fixed(frames),
    };

    Ok(StreamConfig {
        channels: best.channels(),
        sample_rate: cpal::SampleRate(rate),
        buffer_size,
    })
}

fn build_input_stream(
    device: &Device,
    config: &EngineConfig,
    mut writer: CaptureWriter,
) -> EngineResult<Stream> {
    log::info!("Using {} device: {}", INPUT, device_name(device));

    let supported = device
        .supported_input_configs()
        .map_err(|e| EngineError::UnsupportedConfig {
            direction: INPUT,
            reason: e.to_string(),
        })?;
    let stream_config = select_config(INPUT, supported, config)?;
    let channels = stream_config.channels as usize;
    log::debug!("Input stream config: {:?}", stream_config);

    device
        .build_input_stream(
            &stream_config,
            move |data: &[f32], _info: &cpal::InputCallbackInfo| {
                writer.push_interleaved(data, channels);
            },
            move |err| {
                log::error!("Input stream error: {}", err);
            },
            None,
        )
        .map_err(|e| EngineError::StreamOpenFailed {
            direction: INPUT,
            reason: e.to_string(),
        })
}

fn build_output_stream<T>(
    device: &Device,
    config: &EngineConfig,
    mut processor: BlockProcessor<T, Box<dyn SampleSource>>,
) -> EngineResult<Stream>
where
    T: Transform + 'static,
{
    log::info!("Using {} device: {}", OUTPUT, device_name(device));

    let supported = device
        .supported_output_configs()
        .map_err(|e| EngineError::UnsupportedConfig {
            direction: OUTPUT,
            reason: e.to_string(),
        })?;
    let stream_config = select_config(OUTPUT, supported, config)?;
    let channels = stream_config.channels as usize;
    log::debug!("Output stream config: {:?}", stream_config);

    device
        .build_output_stream(
            &stream_config,
            move |data: &mut [f32], _info: &cpal::OutputCallbackInfo| {
                processor.fill_interleaved(data, channels);
            },
            move |err| {
                log::error!("Output stream error: {}", err);
            },
            None,
        )
        .map_err(|e| EngineError::StreamOpenFailed {
            direction: OUTPUT,
            reason: e.to_string(),
        })
}
