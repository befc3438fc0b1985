use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ControlServoInput {
    /// Advertised range is 0-180 but the value is forwarded as-is; the
    /// controller owns rejection of out-of-range angles.
    pub angle: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetServoInput {
    pub servo: u32,
    pub value: f64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HoldInput {}
