use tracing::debug;

use crate::controller::device_source::{DeviceSnapshot, DeviceSource, RawButton};

/// In-memory device slots driven by hand.
///
/// Useful for replaying recorded input, for hosts without a platform backend,
/// and for tests.
#[derive(Clone, Debug, Default)]
pub struct VirtualDeviceSource {
    slots: Vec<Option<DeviceSnapshot>>,
}

impl VirtualDeviceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plugs a device into the first free slot and returns that slot.
    pub fn connect(&mut self, identifier: &str, button_count: usize, axis_count: usize) -> usize {
        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.slots.len());

        let device = DeviceSnapshot {
            index,
            identifier: identifier.to_string(),
            buttons: vec![RawButton::default(); button_count],
            axes: vec![0.0; axis_count],
        };

        if index == self.slots.len() {
            self.slots.push(Some(device));
        } else {
            self.slots[index] = Some(device);
        }
        debug!("Virtual device {:?} connected in slot {}", identifier, index);
        index
    }

    /// Empties a slot. The slot number stays reserved for the next `connect`.
    pub fn unplug(&mut self, slot: usize) {
        if let Some(entry) = self.slots.get_mut(slot) {
            if entry.take().is_some() {
                debug!("Virtual device in slot {} unplugged", slot);
            }
        }
    }

    pub fn set_button(&mut self, slot: usize, index: usize, pressed: bool, value: f32) {
        match self.slot_mut(slot).and_then(|d| d.buttons.get_mut(index)) {
            Some(button) => *button = RawButton::new(pressed, value.clamp(0.0, 1.0)),
            None => debug!("Ignoring button {} on virtual slot {}", index, slot),
        }
    }

    pub fn press(&mut self, slot: usize, index: usize) {
        self.set_button(slot, index, true, 1.0);
    }

    pub fn release(&mut self, slot: usize, index: usize) {
        self.set_button(slot, index, false, 0.0);
    }

    pub fn set_axis(&mut self, slot: usize, index: usize, value: f32) {
        match self.slot_mut(slot).and_then(|d| d.axes.get_mut(index)) {
            Some(axis) => *axis = value.clamp(-1.0, 1.0),
            None => debug!("Ignoring axis {} on virtual slot {}", index, slot),
        }
    }

    fn slot_mut(&mut self, slot: usize) -> Option<&mut DeviceSnapshot> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }
}

impl DeviceSource for VirtualDeviceSource {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn device(&self, index: usize) -> Option<DeviceSnapshot> {
        self.slots.get(index).cloned().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_reuses_free_slots() {
        let mut source = VirtualDeviceSource::new();
        assert_eq!(source.connect("first", 2, 2), 0);
        assert_eq!(source.connect("second", 2, 2), 1);

        source.unplug(0);
        assert_eq!(source.slot_count(), 2);
        assert!(source.device(0).is_none());

        assert_eq!(source.connect("third", 4, 0), 0);
        let device = source.device(0).unwrap();
        assert_eq!(device.identifier, "third");
        assert_eq!(device.index, 0);
        assert_eq!(device.buttons.len(), 4);
    }

    #[test]
    fn writes_are_clamped() {
        let mut source = VirtualDeviceSource::new();
        let slot = source.connect("pad", 1, 1);

        source.set_button(slot, 0, true, 3.0);
        source.set_axis(slot, 0, -7.5);

        let device = source.device(slot).unwrap();
        assert_eq!(device.buttons[0], RawButton::new(true, 1.0));
        assert_eq!(device.axes[0], -1.0);
    }

    #[test]
    fn writes_to_missing_targets_are_ignored() {
        let mut source = VirtualDeviceSource::new();
        let slot = source.connect("pad", 1, 1);

        source.press(slot, 5);
        source.set_axis(slot, 5, 0.5);
        source.press(9, 0);
        source.unplug(9);

        let device = source.device(slot).unwrap();
        assert_eq!(device.buttons, vec![RawButton::default()]);
        assert_eq!(device.axes, vec![0.0]);
    }
}
