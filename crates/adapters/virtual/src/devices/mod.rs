//! Virtual device implementations — light, thermostat, door.
//!
//! Devices are handed out behind [`Arc`] so the same instance can be
//! registered with the registry and subscribed to a thermostat.

mod door;
mod light;
mod thermostat;

pub use door::Door;
pub use light::Light;
pub use thermostat::Thermostat;

use std::sync::Arc;

use smarthome_domain::device::{Device, DeviceKind};

/// Wrapper enum for the concrete virtual device types.
#[derive(Clone)]
pub enum VirtualDevice {
    Light(Arc<Light>),
    Thermostat(Arc<Thermostat>),
    Door(Arc<Door>),
}

impl VirtualDevice {
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(_) => DeviceKind::Light,
            Self::Thermostat(_) => DeviceKind::Thermostat,
            Self::Door(_) => DeviceKind::Door,
        }
    }

    /// The light behind this device, if it is one.
    #[must_use]
    pub fn as_light(&self) -> Option<&Arc<Light>> {
        match self {
            Self::Light(d) => Some(d),
            _ => None,
        }
    }

    /// The thermostat behind this device, if it is one.
    #[must_use]
    pub fn as_thermostat(&self) -> Option<&Arc<Thermostat>> {
        match self {
            Self::Thermostat(d) => Some(d),
            _ => None,
        }
    }

    /// Erase the concrete type, keeping the shared instance.
    #[must_use]
    pub fn into_device(self) -> Arc<dyn Device> {
        match self {
            Self::Light(d) => d,
            Self::Thermostat(d) => d,
            Self::Door(d) => d,
        }
    }
}

impl From<VirtualDevice> for Arc<dyn Device> {
    fn from(device: VirtualDevice) -> Self {
        device.into_device()
    }
}
