//! Device factory — maps a type tag to a freshly constructed virtual device.

use std::sync::Arc;

use smarthome_domain::device::DeviceKind;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::id::DeviceId;

use crate::devices::{Door, Light, Thermostat, VirtualDevice};

/// Builds virtual devices from type tags.
///
/// Construction only; the factory never touches a registry.
pub struct DeviceFactory;

impl DeviceFactory {
    /// Build the device named by `type_tag` (`"light"`, `"thermostat"` or
    /// `"door"`). `temperature` is only used by thermostats.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::InvalidArgument`] when `type_tag` names no
    /// known device kind.
    pub fn create_device(
        id: DeviceId,
        type_tag: &str,
        temperature: i32,
    ) -> Result<VirtualDevice, SmartHomeError> {
        let kind: DeviceKind = type_tag.parse()?;
        Ok(Self::create(id, kind, temperature))
    }

    /// Build a device of an already-parsed kind.
    #[must_use]
    pub fn create(id: DeviceId, kind: DeviceKind, temperature: i32) -> VirtualDevice {
        tracing::debug!(device = %id, %kind, "creating device");
        match kind {
            DeviceKind::Light => VirtualDevice::Light(Arc::new(Light::new(id))),
            DeviceKind::Thermostat => {
                VirtualDevice::Thermostat(Arc::new(Thermostat::new(id, temperature)))
            }
            DeviceKind::Door => VirtualDevice::Door(Arc::new(Door::new(id))),
        }
    }
}
