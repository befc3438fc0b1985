pub mod dto;
pub mod implementation;

pub use dto::{ControlServoInput, HoldInput, SetServoInput};
pub use implementation::DeviceTools;
