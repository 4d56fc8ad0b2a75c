//! Device registry — owns every device in the home and routes commands to
//! them by identifier.

use std::collections::BTreeMap;
use std::sync::Arc;

use smarthome_domain::device::Device;
use smarthome_domain::error::{NotFoundError, SmartHomeError};
use smarthome_domain::id::DeviceId;

/// Owning collection of devices keyed by sequentially assigned ids.
///
/// Ids start at [`DeviceId::FIRST`], increase by one per insertion and are
/// never reused. Iteration and the status report follow ascending id order.
pub struct DeviceRegistry {
    devices: BTreeMap<DeviceId, Arc<dyn Device>>,
    next_id: DeviceId,
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self {
            devices: BTreeMap::new(),
            next_id: DeviceId::FIRST,
        }
    }
}

impl DeviceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next [`add_device`](Self::add_device) call will assign.
    ///
    /// Peeking does not consume the id.
    #[must_use]
    pub fn next_device_id(&self) -> DeviceId {
        self.next_id
    }

    /// Take ownership of `device` under the next id and return that id.
    #[tracing::instrument(skip(self, device), fields(kind = %device.kind()))]
    pub fn add_device(&mut self, device: Arc<dyn Device>) -> DeviceId {
        let id = self.next_id;
        self.next_id = id.next();
        self.devices.insert(id, device);
        tracing::debug!(device = %id, "device added");
        id
    }

    /// Look up a device by id.
    #[must_use]
    pub fn device(&self, id: DeviceId) -> Option<&Arc<dyn Device>> {
        self.devices.get(&id)
    }

    /// Turn the device with `id` on.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device has `id`. The
    /// registry is left unchanged.
    #[tracing::instrument(skip(self))]
    pub fn turn_on(&self, id: DeviceId) -> Result<(), SmartHomeError> {
        self.get(id)?.turn_on();
        Ok(())
    }

    /// Turn the device with `id` off.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device has `id`. The
    /// registry is left unchanged.
    #[tracing::instrument(skip(self))]
    pub fn turn_off(&self, id: DeviceId) -> Result<(), SmartHomeError> {
        self.get(id)?.turn_off();
        Ok(())
    }

    /// Status of every device as `Device {id}: {status}`, ascending by id,
    /// separated by single spaces.
    #[must_use]
    pub fn status(&self) -> String {
        let report = self
            .devices
            .iter()
            .map(|(id, device)| format!("Device {id}: {}", device.status()))
            .collect::<Vec<_>>()
            .join(" ");
        report.trim_end().to_string()
    }

    /// Devices in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (DeviceId, &Arc<dyn Device>)> {
        self.devices.iter().map(|(id, device)| (*id, device))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    fn get(&self, id: DeviceId) -> Result<&Arc<dyn Device>, SmartHomeError> {
        self.devices.get(&id).ok_or_else(|| {
            tracing::warn!(device = %id, "device not found");
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarthome_adapter_virtual::{DeviceFactory, Door, Light, Thermostat};

    fn light(registry: &DeviceRegistry) -> Arc<dyn Device> {
        Arc::new(Light::new(registry.next_device_id()))
    }

    fn demo_home() -> DeviceRegistry {
        let mut registry = DeviceRegistry::new();
        let l = light(&registry);
        registry.add_device(l);
        let id = registry.next_device_id();
        registry.add_device(Arc::new(Thermostat::new(id, 70)));
        let id = registry.next_device_id();
        registry.add_device(Arc::new(Door::new(id)));
        registry
    }

    #[test]
    fn should_start_empty_with_first_id() {
        let registry = DeviceRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.next_device_id(), DeviceId::FIRST);
        assert_eq!(registry.status(), "");
    }

    #[test]
    fn should_assign_strictly_increasing_ids() {
        let mut registry = DeviceRegistry::new();
        let mut previous = None;
        for _ in 0..10 {
            let device = light(&registry);
            let id = registry.add_device(device);
            if let Some(previous) = previous {
                assert!(id > previous);
            }
            previous = Some(id);
        }
        assert_eq!(registry.len(), 10);
        assert_eq!(previous, Some(DeviceId::new(10)));
    }

    #[test]
    fn should_not_advance_counter_when_peeking() {
        let mut registry = DeviceRegistry::new();
        let peeked = registry.next_device_id();
        assert_eq!(registry.next_device_id(), peeked);

        let device = light(&registry);
        let assigned = registry.add_device(device);
        assert_eq!(assigned, peeked);
        assert_eq!(registry.next_device_id(), peeked.next());
    }

    #[test]
    fn should_report_assigned_id_matching_device_label() {
        let mut registry = DeviceRegistry::new();
        registry.add_device(light(&registry));
        let id = registry.next_device_id();
        let device = DeviceFactory::create_device(id, "light", 0)
            .unwrap()
            .into_device();
        let assigned = registry.add_device(device);

        assert_eq!(assigned, DeviceId::new(2));
        assert_eq!(
            registry.device(assigned).unwrap().status(),
            "Light 2 is off."
        );
    }

    #[test]
    fn should_produce_status_in_ascending_id_order() {
        let registry = demo_home();
        assert_eq!(
            registry.status(),
            "Device 1: Light 1 is off. Device 2: Thermostat is set to 70 degrees. Device 3: Door is locked."
        );
    }

    #[test]
    fn should_restore_light_status_after_on_then_off() {
        let registry = demo_home();
        let before = registry.status();

        registry.turn_on(DeviceId::new(1)).unwrap();
        assert!(registry.status().contains("Light 1 is on."));

        registry.turn_off(DeviceId::new(1)).unwrap();
        assert_eq!(registry.status(), before);
    }

    #[test]
    fn should_not_change_thermostat_or_door_on_power_commands() {
        let registry = demo_home();
        let before = registry.status();

        for id in [DeviceId::new(2), DeviceId::new(3)] {
            registry.turn_on(id).unwrap();
            registry.turn_off(id).unwrap();
        }
        assert_eq!(registry.status(), before);
    }

    #[test]
    fn should_return_not_found_for_unknown_id() {
        let registry = demo_home();
        let before = registry.status();

        let on = registry.turn_on(DeviceId::new(42));
        let off = registry.turn_off(DeviceId::new(42));

        assert!(matches!(on, Err(SmartHomeError::NotFound(_))));
        assert!(matches!(off, Err(SmartHomeError::NotFound(_))));
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.status(), before);
    }

    #[test]
    fn should_iterate_in_ascending_id_order() {
        let registry = demo_home();
        let ids: Vec<u32> = registry.iter().map(|(id, _)| id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn should_route_to_shared_instance() {
        let mut registry = DeviceRegistry::new();
        let shared = Arc::new(Light::new(registry.next_device_id()));
        let id = registry.add_device(shared.clone());

        registry.turn_on(id).unwrap();
        assert!(shared.state().is_on());
    }
}
