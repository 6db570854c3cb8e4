//! Named indices for the common "standard gamepad" layout.
//!
//! These follow the usual browser/SDL convention for a two-stick controller
//! with four face buttons. They are a convention, not a guarantee: physical
//! layouts and platform mappings vary, so a given device may report its
//! buttons in a different order.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown control name: {0}")]
pub struct UnknownControl(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardButton {
    /// Bottom face button
    A,
    /// Right face button
    B,
    /// Left face button
    C,
    /// Top face button
    D,
    LeftTriggerA,
    RightTriggerA,
    LeftTriggerB,
    RightTriggerB,
    Select,
    Start,
    LeftStick,
    RightStick,
    Up,
    Down,
    Left,
    Right,
    Home,
}

impl StandardButton {
    /// All buttons in index order.
    pub const ALL: [StandardButton; 17] = [
        StandardButton::A,
        StandardButton::B,
        StandardButton::C,
        StandardButton::D,
        StandardButton::LeftTriggerA,
        StandardButton::RightTriggerA,
        StandardButton::LeftTriggerB,
        StandardButton::RightTriggerB,
        StandardButton::Select,
        StandardButton::Start,
        StandardButton::LeftStick,
        StandardButton::RightStick,
        StandardButton::Up,
        StandardButton::Down,
        StandardButton::Left,
        StandardButton::Right,
        StandardButton::Home,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            StandardButton::A => "a",
            StandardButton::B => "b",
            StandardButton::C => "c",
            StandardButton::D => "d",
            StandardButton::LeftTriggerA => "left_trigger_a",
            StandardButton::RightTriggerA => "right_trigger_a",
            StandardButton::LeftTriggerB => "left_trigger_b",
            StandardButton::RightTriggerB => "right_trigger_b",
            StandardButton::Select => "select",
            StandardButton::Start => "start",
            StandardButton::LeftStick => "left_stick",
            StandardButton::RightStick => "right_stick",
            StandardButton::Up => "up",
            StandardButton::Down => "down",
            StandardButton::Left => "left",
            StandardButton::Right => "right",
            StandardButton::Home => "home",
        }
    }
}

impl fmt::Display for StandardButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardButton {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|button| button.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownControl(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardAxis {
    LeftHorizontal,
    /// Positive is down
    LeftVertical,
    RightHorizontal,
    /// Positive is down
    RightVertical,
}

impl StandardAxis {
    pub const ALL: [StandardAxis; 4] = [
        StandardAxis::LeftHorizontal,
        StandardAxis::LeftVertical,
        StandardAxis::RightHorizontal,
        StandardAxis::RightVertical,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            StandardAxis::LeftHorizontal => "left_horizontal",
            StandardAxis::LeftVertical => "left_vertical",
            StandardAxis::RightHorizontal => "right_horizontal",
            StandardAxis::RightVertical => "right_vertical",
        }
    }
}

impl fmt::Display for StandardAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardAxis {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|axis| axis.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownControl(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_indices_match_layout() {
        assert_eq!(StandardButton::A.index(), 0);
        assert_eq!(StandardButton::D.index(), 3);
        assert_eq!(StandardButton::LeftTriggerA.index(), 4);
        assert_eq!(StandardButton::RightTriggerB.index(), 7);
        assert_eq!(StandardButton::Select.index(), 8);
        assert_eq!(StandardButton::Start.index(), 9);
        assert_eq!(StandardButton::Up.index(), 12);
        assert_eq!(StandardButton::Down.index(), 13);
        assert_eq!(StandardButton::Left.index(), 14);
        assert_eq!(StandardButton::Right.index(), 15);
        assert_eq!(StandardButton::Home.index(), 16);

        for (i, button) in StandardButton::ALL.iter().enumerate() {
            assert_eq!(button.index(), i);
            assert_eq!(StandardButton::from_index(i), Some(*button));
        }
        assert_eq!(StandardButton::from_index(17), None);
    }

    #[test]
    fn axis_indices_match_layout() {
        assert_eq!(StandardAxis::LeftHorizontal.index(), 0);
        assert_eq!(StandardAxis::LeftVertical.index(), 1);
        assert_eq!(StandardAxis::RightHorizontal.index(), 2);
        assert_eq!(StandardAxis::RightVertical.index(), 3);
        assert_eq!(StandardAxis::from_index(4), None);
    }

    #[test]
    fn names_round_trip() {
        assert_eq!("START".parse::<StandardButton>(), Ok(StandardButton::Start));
        assert_eq!("left_trigger_b".parse::<StandardButton>(), Ok(StandardButton::LeftTriggerB));
        assert_eq!(
            "right_vertical".parse::<StandardAxis>(),
            Ok(StandardAxis::RightVertical)
        );
        assert_eq!(
            "turbo".parse::<StandardButton>(),
            Err(UnknownControl("turbo".to_string()))
        );
        assert_eq!(StandardButton::Home.to_string(), "home");
    }
}
