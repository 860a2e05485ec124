//! stompbox - live mono effects pedal
//!
//! Run with: cargo run -- [loop.wav]
//!
//! Without an argument the default capture device feeds the pedal board.
//! With a mono WAV path the file loops in place of the capture device.
//! Set RUST_LOG to change verbosity. Press Enter to stop.

mod pedal;

use std::{
    io::BufRead,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use color_eyre::eyre::{eyre, Result, WrapErr};
use stompbox::{
    control::ControlHandle,
    io::{SampleSource, SoundLoop},
    AudioEngine, EngineConfig,
};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EngineConfig::default();

    let input_override = match std::env::args().nth(1) {
        Some(path) => {
            let source = SoundLoop::open(&path)
                .wrap_err_with(|| format!("failed to open input loop {}", path))?;
            if source.sample_rate() != config.sample_rate {
                log::warn!(
                    "{} is {}Hz, engine runs at {}Hz; playback will be pitched",
                    path,
                    source.sample_rate(),
                    config.sample_rate
                );
            }
            Some(Box::new(source) as Box<dyn SampleSource>)
        }
        None => None,
    };

    let sample_rate = config.sample_rate as f32;
    let mut engine = AudioEngine::open(config, input_override, |bridge| {
        pedal::build(bridge, sample_rate)
    })
    .wrap_err("failed to start audio engine")?;

    let stop = Arc::new(AtomicBool::new(false));
    let reporter = {
        let control = engine.control();
        let stop = Arc::clone(&stop);
        thread::Builder::new()
            .name("telemetry".into())
            .spawn(move || report(control, &stop))
            .wrap_err("failed to spawn telemetry thread")?
    };

    println!("Playing... Press Enter to stop");
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .wrap_err("failed to read stdin")?;

    stop.store(true, Ordering::Relaxed);
    reporter
        .join()
        .map_err(|_| eyre!("telemetry thread panicked"))?;

    engine.close();
    Ok(())
}

/// Log the bridge's telemetry until asked to stop.
fn report(control: ControlHandle, stop: &AtomicBool) {
    let mut last_underruns = 0;
    while !stop.load(Ordering::Relaxed) {
        thread::sleep(REPORT_INTERVAL);

        let (hi, low) = control.get_out_hi_low();
        log::info!(
            "volume {:.3}  hi {:+.3}  low {:+.3}  wet {:.2}  gain {:.2}",
            control.get_out_volume(),
            hi,
            low,
            control.wet_mix(),
            control.gain()
        );

        let underruns = control.input_underruns();
        if underruns > last_underruns {
            log::warn!(
                "input ran dry {} times (overruns {})",
                underruns - last_underruns,
                control.input_overruns()
            );
            last_underruns = underruns;
        }
    }
}
