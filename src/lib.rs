pub mod config;
pub mod controller;

pub use crate::controller::{
    AxisIndex, ButtonAction, ButtonIndex, ButtonState, DeviceIds, DeviceSnapshot, DeviceSource,
    GamepadState, GilrsSource, RawButton, SourceError, StandardAxis, StandardButton,
    VirtualDeviceSource,
};
