use gilrs::{Axis, Button, Event, EventType, Gamepad, Gilrs};
use tracing::{debug, error, info, warn};

use crate::controller::device_source::{DeviceSnapshot, DeviceSource, RawButton};
use crate::controller::layout::{StandardAxis, StandardButton};

// Source errors
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to initialize gamepad backend: {0}")]
    Init(String),
}

/// Platform devices through gilrs, presented in the standard layout.
///
/// gilrs only updates its cached gamepad state while events are drained, so
/// the host calls [`GilrsSource::refresh`] once per frame before reading.
pub struct GilrsSource {
    gilrs: Gilrs,
}

impl GilrsSource {
    pub fn new() -> Result<Self, SourceError> {
        info!("Initializing gilrs gamepad backend");
        let gilrs = match Gilrs::new() {
            Ok(g) => g,
            Err(e) => {
                error!("Failed to initialize gilrs: {}", e);
                return Err(SourceError::Init(e.to_string()));
            }
        };

        for (id, gamepad) in gilrs.gamepads() {
            info!("  [{}] Name: {}, UUID: {:?}", id, gamepad.name(), gamepad.uuid());
        }

        Ok(Self { gilrs })
    }

    /// Drains pending backend events. Returns how many were drained.
    pub fn refresh(&mut self) -> usize {
        let mut drained = 0;
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::Connected => info!("Gamepad {} connected", id),
                EventType::Disconnected => warn!("Gamepad {} disconnected", id),
                _ => debug!("Gamepad {} event: {:?}", id, event),
            }
            drained += 1;
        }
        drained
    }
}

impl DeviceSource for GilrsSource {
    fn slot_count(&self) -> usize {
        self.gilrs
            .gamepads()
            .map(|(id, _)| usize::from(id) + 1)
            .max()
            .unwrap_or(0)
    }

    fn device(&self, index: usize) -> Option<DeviceSnapshot> {
        self.gilrs
            .gamepads()
            .find(|(id, _)| usize::from(*id) == index)
            .map(|(_, gamepad)| snapshot(index, &gamepad))
    }
}

fn snapshot(index: usize, gamepad: &Gamepad<'_>) -> DeviceSnapshot {
    let buttons = StandardButton::ALL
        .into_iter()
        .map(|button| {
            gamepad
                .button_data(map_button(button))
                .map_or(RawButton::default(), |data| {
                    RawButton::new(data.is_pressed(), data.value())
                })
        })
        .collect();

    let axes = StandardAxis::ALL
        .into_iter()
        .map(|axis| {
            let value = gamepad.axis_data(map_axis(axis)).map_or(0.0, |data| data.value());
            standard_axis_value(axis, value)
        })
        .collect();

    DeviceSnapshot {
        index,
        identifier: identifier(gamepad.name(), gamepad.vendor_id(), gamepad.product_id()),
        buttons,
        axes,
    }
}

// "{vendor}-{product}-{name}" so the hyphen parser picks the ids back up
fn identifier(name: &str, vendor: Option<u16>, product: Option<u16>) -> String {
    match (vendor, product) {
        (Some(vendor), Some(product)) => format!("{vendor:04x}-{product:04x}-{name}"),
        _ => name.to_string(),
    }
}

// gilrs reports stick Y with up positive; the standard layout has down positive
fn standard_axis_value(axis: StandardAxis, value: f32) -> f32 {
    match axis {
        StandardAxis::LeftVertical | StandardAxis::RightVertical => -value,
        _ => value,
    }
}

fn map_button(button: StandardButton) -> Button {
    match button {
        StandardButton::A => Button::South,
        StandardButton::B => Button::East,
        StandardButton::C => Button::West,
        StandardButton::D => Button::North,
        StandardButton::LeftTriggerA => Button::LeftTrigger,
        StandardButton::RightTriggerA => Button::RightTrigger,
        StandardButton::LeftTriggerB => Button::LeftTrigger2,
        StandardButton::RightTriggerB => Button::RightTrigger2,
        StandardButton::Select => Button::Select,
        StandardButton::Start => Button::Start,
        StandardButton::LeftStick => Button::LeftThumb,
        StandardButton::RightStick => Button::RightThumb,
        StandardButton::Up => Button::DPadUp,
        StandardButton::Down => Button::DPadDown,
        StandardButton::Left => Button::DPadLeft,
        StandardButton::Right => Button::DPadRight,
        StandardButton::Home => Button::Mode,
    }
}

fn map_axis(axis: StandardAxis) -> Axis {
    match axis {
        StandardAxis::LeftHorizontal => Axis::LeftStickX,
        StandardAxis::LeftVertical => Axis::LeftStickY,
        StandardAxis::RightHorizontal => Axis::RightStickX,
        StandardAxis::RightVertical => Axis::RightStickY,
    }
}
