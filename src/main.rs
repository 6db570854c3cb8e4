use std::path::PathBuf;
use std::time::Duration;

use color_eyre::{eyre::eyre, Result};
use gamepad_state::config::Config;
use gamepad_state::{DeviceSource, GamepadState, GilrsSource, StandardAxis, StandardButton};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let config = setup()?;

    let mut source = GilrsSource::new().map_err(|e| eyre!("Failed to open gamepads: {}", e))?;
    source.refresh();

    let mut pad = match config.poll.device_slot {
        Some(slot) => GamepadState::with_slot(&source, slot),
        None => GamepadState::new(&source),
    };

    let frame_rate = config.poll.frame_rate();
    let mut ticker = interval(Duration::from_secs(1) / frame_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    info!("Polling at {} frames per second, Ctrl-C to stop", frame_rate);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                source.refresh();
                tick(&mut pad, &source);
                report(&pad);
            }
            _ = &mut shutdown => {
                info!("Stopping");
                break;
            }
        }
    }

    Ok(())
}

// The library keeps stale state for an empty slot; the host treats that as unplugged
fn tick(pad: &mut GamepadState, source: &impl DeviceSource) {
    if pad.connected() && pad.device_index().and_then(|i| source.device(i)).is_none() {
        pad.disconnect();
    }
    if !pad.connected() {
        if let Some(device) = source.first_connected() {
            pad.set_gamepad(Some(device));
        }
    }
    pad.update(source);
}

fn report(pad: &GamepadState) {
    for button in StandardButton::ALL {
        if pad.button_just_pressed(button) {
            info!("{} pressed ({:.2})", button, pad.analogue_button(button));
        }
        if pad.button_just_released(button) {
            info!("{} released", button);
        }
    }

    debug!(
        "Sticks: left=({:.2}, {:.2}) right=({:.2}, {:.2})",
        pad.axis(StandardAxis::LeftHorizontal),
        pad.axis(StandardAxis::LeftVertical),
        pad.axis(StandardAxis::RightHorizontal),
        pad.axis(StandardAxis::RightVertical)
    );
}

fn setup() -> Result<Config> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(Config::default_path);

    let config = {
        let _guard = tracing::subscriber::set_default(subscriber(Level::INFO));
        Config::load(&path)?
    };
    setup_logging(config.logging.max_level());
    info!("Using config {}", path.display());
    Ok(config)
}

fn subscriber(level: Level) -> FmtSubscriber {
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .finish()
}

// Config loading logs through a temporary INFO subscriber until the configured level is known
fn setup_logging(level: Level) {
    tracing::subscriber::set_global_default(subscriber(level))
        .unwrap_or_else(|e| eprintln!("Failed to install logger: {e}"));
}
