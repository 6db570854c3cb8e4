//! Injectable access to the platform's list of connected devices.
//!
//! A source exposes numbered slots. Each occupied slot yields an owned
//! [`DeviceSnapshot`] of the device at the instant it is read.

/// One button as reported by the device.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawButton {
    pub pressed: bool,
    /// Analogue travel in `[0, 1]`
    pub value: f32,
}

impl RawButton {
    pub fn new(pressed: bool, value: f32) -> Self {
        Self { pressed, value }
    }
}

/// Momentary state of a device in a source slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceSnapshot {
    pub index: usize,
    pub identifier: String,
    pub buttons: Vec<RawButton>,
    /// Axis values in `[-1, 1]`
    pub axes: Vec<f32>,
}

impl DeviceSnapshot {
    pub fn button(&self, index: usize) -> Option<&RawButton> {
        self.buttons.get(index)
    }

    pub fn axis(&self, index: usize) -> Option<f32> {
        self.axes.get(index).copied()
    }
}

pub trait DeviceSource {
    /// Number of slots, occupied or not.
    fn slot_count(&self) -> usize;

    /// Snapshot of the device in `index`, or `None` if the slot is empty.
    fn device(&self, index: usize) -> Option<DeviceSnapshot>;

    fn first_connected(&self) -> Option<DeviceSnapshot> {
        (0..self.slot_count()).find_map(|index| self.device(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Slots(Vec<Option<DeviceSnapshot>>);

    impl DeviceSource for Slots {
        fn slot_count(&self) -> usize {
            self.0.len()
        }

        fn device(&self, index: usize) -> Option<DeviceSnapshot> {
            self.0.get(index).cloned().flatten()
        }
    }

    #[test]
    fn first_connected_skips_empty_slots() {
        let pad = DeviceSnapshot {
            index: 2,
            identifier: "pad".to_string(),
            ..Default::default()
        };
        let source = Slots(vec![None, None, Some(pad.clone())]);

        assert_eq!(source.first_connected(), Some(pad));
        assert_eq!(Slots(vec![None, None]).first_connected(), None);
    }

    #[test]
    fn snapshot_lookups_are_bounded() {
        let snapshot = DeviceSnapshot {
            buttons: vec![RawButton::new(true, 1.0)],
            axes: vec![-0.5],
            ..Default::default()
        };

        assert!(snapshot.button(0).is_some_and(|b| b.pressed));
        assert!(snapshot.button(1).is_none());
        assert_eq!(snapshot.axis(0), Some(-0.5));
        assert_eq!(snapshot.axis(1), None);
    }
}
