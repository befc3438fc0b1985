pub mod servo;

pub use servo::{ControlServoInput, DeviceTools, HoldInput, SetServoInput};
