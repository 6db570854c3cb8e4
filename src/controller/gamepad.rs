//! Per-frame view over a single tracked gamepad.
//!
//! [`GamepadState`] binds to one slot of a [`DeviceSource`], keeps one
//! [`ButtonState`] per reported button and answers level and edge queries
//! for the host. The host calls [`GamepadState::update`] exactly once per
//! frame, before any query for that frame. Calling it twice in a frame eats
//! the just-pressed/just-released edges.
//!
//! Nothing here fails. A missing device, an unparsable identifier or an
//! out-of-range index all degrade to neutral values.

use tracing::{debug, info, warn};

use crate::controller::button_state::{ButtonAction, ButtonState};
use crate::controller::device_source::{DeviceSnapshot, DeviceSource};
use crate::controller::identifier::parse_identifier;
use crate::controller::layout::{StandardAxis, StandardButton};

/// Anything that can address a button. Negative integers are out of range.
pub trait ButtonIndex {
    fn button_index(self) -> Option<usize>;
}

/// Anything that can address an axis. Negative integers are out of range.
pub trait AxisIndex {
    fn axis_index(self) -> Option<usize>;
}

impl ButtonIndex for usize {
    fn button_index(self) -> Option<usize> {
        Some(self)
    }
}

impl ButtonIndex for i32 {
    fn button_index(self) -> Option<usize> {
        usize::try_from(self).ok()
    }
}

impl ButtonIndex for StandardButton {
    fn button_index(self) -> Option<usize> {
        Some(self.index())
    }
}

impl AxisIndex for usize {
    fn axis_index(self) -> Option<usize> {
        Some(self)
    }
}

impl AxisIndex for i32 {
    fn axis_index(self) -> Option<usize> {
        usize::try_from(self).ok()
    }
}

impl AxisIndex for StandardAxis {
    fn axis_index(self) -> Option<usize> {
        Some(self.index())
    }
}

#[derive(Clone, Debug, Default)]
pub struct GamepadState {
    device_index: Option<usize>,
    vendor_id: Option<String>,
    product_id: Option<String>,
    connected: bool,
    buttons: Vec<ButtonState>,
    snapshot: Option<DeviceSnapshot>,
}

impl GamepadState {
    /// Binds to the first occupied slot of `source`, or stays unbound with a
    /// warning when no device is connected.
    pub fn new(source: &impl DeviceSource) -> Self {
        let mut state = Self::default();
        match source.first_connected() {
            Some(device) => state.bind(device),
            None => warn!("No gamepad found"),
        }
        state
    }

    /// Binds to a specific slot of `source`.
    pub fn with_slot(source: &impl DeviceSource, slot: usize) -> Self {
        let mut state = Self::default();
        match source.device(slot) {
            Some(device) => state.bind(device),
            None => warn!("No gamepad found in slot {}", slot),
        }
        state
    }

    /// Replaces the current binding. `None` disconnects.
    pub fn set_gamepad(&mut self, device: Option<DeviceSnapshot>) {
        match device {
            Some(device) => self.bind(device),
            None => {
                warn!("No gamepad found");
                self.disconnect();
            }
        }
    }

    pub fn disconnect(&mut self) {
        if self.connected {
            info!("Gamepad in slot {:?} disconnected", self.device_index);
        }
        *self = Self::default();
    }

    /// Pulls this frame's snapshot for the tracked slot and advances edge
    /// detection by one step.
    ///
    /// An empty slot leaves the last known state in place. A different device
    /// in the slot (other identifier or button count) causes a rebind.
    pub fn update(&mut self, source: &impl DeviceSource) {
        let Some(index) = self.device_index else {
            return;
        };

        let Some(device) = source.device(index) else {
            debug!("Slot {} is empty, keeping last known state", index);
            return;
        };

        if self.is_other_device(&device) {
            info!("Slot {} now holds {:?}, rebinding", index, device.identifier);
            self.bind(device);
            return;
        }

        for (i, button) in self.buttons.iter_mut().enumerate() {
            let pressed = device.button(i).is_some_and(|b| b.pressed);
            button.update(ButtonAction::from(pressed));
        }
        self.snapshot = Some(device);
    }

    /// Analogue travel in `[0, 1]` from the latest snapshot, 0 when out of range.
    pub fn analogue_button(&self, button: impl ButtonIndex) -> f32 {
        self.raw_button_index(button)
            .and_then(|i| self.snapshot.as_ref()?.button(i))
            .map_or(0.0, |b| b.value)
    }

    /// Axis value in `[-1, 1]` from the latest snapshot, 0 when out of range.
    pub fn axis(&self, axis: impl AxisIndex) -> f32 {
        axis.axis_index()
            .and_then(|i| self.snapshot.as_ref()?.axis(i))
            .unwrap_or(0.0)
    }

    pub fn button_pressed(&self, button: impl ButtonIndex) -> bool {
        self.button_state(button).is_some_and(ButtonState::pressed)
    }

    pub fn button_just_pressed(&self, button: impl ButtonIndex) -> bool {
        self.button_state(button).is_some_and(ButtonState::just_pressed)
    }

    pub fn button_just_released(&self, button: impl ButtonIndex) -> bool {
        self.button_state(button).is_some_and(ButtonState::just_released)
    }

    pub fn connected(&self) -> bool {
        self.connected
    }

    pub fn device_index(&self) -> Option<usize> {
        self.device_index
    }

    pub fn vendor_id(&self) -> Option<&str> {
        self.vendor_id.as_deref()
    }

    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    pub fn identifier(&self) -> Option<&str> {
        self.snapshot.as_ref().map(|d| d.identifier.as_str())
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    pub fn axis_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, |d| d.axes.len())
    }

    pub fn buttons(&self) -> &[ButtonState] {
        &self.buttons
    }

    pub fn snapshot(&self) -> Option<&DeviceSnapshot> {
        self.snapshot.as_ref()
    }

    fn bind(&mut self, device: DeviceSnapshot) {
        let ids = parse_identifier(&device.identifier);

        info!(
            "Bound gamepad {:?} in slot {} ({} buttons, {} axes)",
            device.identifier,
            device.index,
            device.buttons.len(),
            device.axes.len()
        );

        if let Some(ids) = &ids {
            debug!(
                "Vendor {:?} / product {:?} from identifier",
                ids.vendor_u16(),
                ids.product_u16()
            );
        }

        self.device_index = Some(device.index);
        self.vendor_id = ids.as_ref().map(|ids| ids.vendor.clone());
        self.product_id = ids.map(|ids| ids.product);
        self.buttons = vec![ButtonState::new(); device.buttons.len()];
        self.snapshot = Some(device);
        self.connected = true;
    }

    fn is_other_device(&self, device: &DeviceSnapshot) -> bool {
        device.buttons.len() != self.buttons.len()
            || self.identifier() != Some(device.identifier.as_str())
    }

    fn raw_button_index(&self, button: impl ButtonIndex) -> Option<usize> {
        button.button_index().filter(|&i| i < self.buttons.len())
    }

    fn button_state(&self, button: impl ButtonIndex) -> Option<&ButtonState> {
        button.button_index().and_then(|i| self.buttons.get(i))
    }
}
