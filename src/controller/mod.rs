//! Controller subsystem for per-frame gamepad polling
//!
//! Splits the work into a source of raw device data and a stateful view
//! over a single tracked device:
//!
//! 1. [`device_source`] - Raw device snapshots ([`GilrsSource`], [`VirtualDeviceSource`])
//! 2. [`gamepad`] - Binding, edge detection and queries ([`GamepadState`])
//! 3. [`layout`] - Named indices of the standard gamepad layout
//!
//! # Architecture
//!
//! ```text
//! Platform ──► DeviceSource ──► GamepadState ──► Host queries
//!              (Snapshots)      (update once per frame)
//! ```
//!
//! Everything runs on the host's thread. `GamepadState` borrows the source
//! only while binding or updating.

pub mod button_state;
pub mod device_source;
pub mod gamepad;
pub mod gilrs_source;
pub mod identifier;
pub mod layout;
pub mod virtual_source;

pub use crate::controller::button_state::{ButtonAction, ButtonState};
pub use crate::controller::device_source::{DeviceSnapshot, DeviceSource, RawButton};
pub use crate::controller::gamepad::{AxisIndex, ButtonIndex, GamepadState};
pub use crate::controller::gilrs_source::{GilrsSource, SourceError};
pub use crate::controller::identifier::DeviceIds;
pub use crate::controller::layout::{StandardAxis, StandardButton};
pub use crate::controller::virtual_source::VirtualDeviceSource;
