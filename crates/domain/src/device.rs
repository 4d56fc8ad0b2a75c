//! Device — a controllable unit in the home (light, thermostat, door).
//!
//! Every concrete device satisfies the same small capability set. Methods take
//! `&self`: devices keep their state behind interior mutability so that one
//! instance can be owned by the registry while other parts of the home (an
//! observable thermostat, a proxy) still reach it.

use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidArgumentError, SmartHomeError};

/// The capability set shared by every device.
pub trait Device: Send + Sync {
    /// Which kind of device this is. Never changes after construction.
    fn kind(&self) -> DeviceKind;

    /// Switch the device on. A no-op for devices without an on/off axis.
    fn turn_on(&self);

    /// Switch the device off. A no-op for devices without an on/off axis.
    fn turn_off(&self);

    /// One-line, human-readable description of the current state.
    fn status(&self) -> String;
}

/// The closed set of device kinds a home can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Light,
    Thermostat,
    Door,
}

impl DeviceKind {
    /// The type tag used to request this kind from a factory.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Thermostat => "thermostat",
            Self::Door => "door",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DeviceKind {
    type Err = SmartHomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "thermostat" => Ok(Self::Thermostat),
            "door" => Ok(Self::Door),
            other => Err(InvalidArgumentError::UnknownDeviceType(other.to_string()).into()),
        }
    }
}
