//! Seeds the registry with the devices listed in the configuration and wires
//! lights to thermostats.

use std::sync::Arc;

use smarthome_adapter_virtual::{DeviceFactory, Light, Thermostat, VirtualDevice};
use smarthome_app::proxy::DeviceProxy;
use smarthome_app::registry::DeviceRegistry;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::observer::Observable;

use crate::config::HomeConfig;

/// Handles on the seeded devices that take part in observer wiring.
#[derive(Default)]
pub struct Home {
    pub lights: Vec<Arc<Light>>,
    pub thermostats: Vec<Arc<Thermostat>>,
}

/// Register every seed device, behind a [`DeviceProxy`], in listed order.
///
/// # Errors
///
/// Returns [`SmartHomeError::InvalidArgument`] if a seed names an unknown
/// device kind. Devices registered before the bad entry stay registered.
pub fn seed(config: &HomeConfig, registry: &mut DeviceRegistry) -> Result<Home, SmartHomeError> {
    let mut home = Home::default();

    for seed in &config.devices {
        let id = registry.next_device_id();
        let device = DeviceFactory::create_device(id, &seed.kind, seed.temperature)?;
        match &device {
            VirtualDevice::Light(light) => home.lights.push(light.clone()),
            VirtualDevice::Thermostat(thermostat) => home.thermostats.push(thermostat.clone()),
            VirtualDevice::Door(_) => {}
        }
        registry.add_device(Arc::new(DeviceProxy::new(device.into())));
    }

    if config.link_lights_to_thermostats {
        for thermostat in &home.thermostats {
            for light in &home.lights {
                thermostat.add_observer(light.clone());
            }
        }
    }

    Ok(home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedDevice;
    use smarthome_domain::id::DeviceId;
    use smarthome_domain::state::PowerState;

    fn seed_device(kind: &str, temperature: i32) -> SeedDevice {
        SeedDevice {
            kind: kind.to_string(),
            temperature,
        }
    }

    #[test]
    fn should_seed_default_home() {
        let mut registry = DeviceRegistry::new();
        let home = seed(&HomeConfig::default(), &mut registry).unwrap();

        assert_eq!(home.lights.len(), 1);
        assert_eq!(home.thermostats.len(), 1);
        assert_eq!(
            registry.status(),
            "Device 1: Light 1 is off. Device 2: Thermostat is set to 70 degrees. Device 3: Door is locked."
        );
        assert_eq!(registry.next_device_id(), DeviceId::new(4));
    }

    #[test]
    fn should_turn_off_registered_lights_when_thermostat_overheats() {
        let config = HomeConfig {
            devices: vec![
                seed_device("light", 0),
                seed_device("light", 0),
                seed_device("thermostat", 70),
            ],
            link_lights_to_thermostats: true,
        };
        let mut registry = DeviceRegistry::new();
        let home = seed(&config, &mut registry).unwrap();

        registry.turn_on(DeviceId::new(1)).unwrap();
        registry.turn_on(DeviceId::new(2)).unwrap();

        home.thermostats[0].set_temperature(75);
        assert!(home.lights.iter().all(|l| l.state() == PowerState::Off));
        assert_eq!(
            registry.status(),
            "Device 1: Light 1 is off. Device 2: Light 2 is off. Device 3: Thermostat is set to 75 degrees."
        );

        home.thermostats[0].set_temperature(60);
        assert!(home.lights.iter().all(|l| l.state() == PowerState::Off));
    }

    #[test]
    fn should_not_wire_when_linking_disabled() {
        let config = HomeConfig {
            devices: vec![seed_device("light", 0), seed_device("thermostat", 70)],
            link_lights_to_thermostats: false,
        };
        let mut registry = DeviceRegistry::new();
        let home = seed(&config, &mut registry).unwrap();

        registry.turn_on(DeviceId::new(1)).unwrap();
        home.thermostats[0].set_temperature(90);

        assert_eq!(home.thermostats[0].observer_count(), 0);
        assert_eq!(home.lights[0].state(), PowerState::On);
    }

    #[test]
    fn should_fail_on_unknown_kind() {
        let config = HomeConfig {
            devices: vec![seed_device("light", 0), seed_device("fan", 0)],
            link_lights_to_thermostats: true,
        };
        let mut registry = DeviceRegistry::new();
        let result = seed(&config, &mut registry);

        assert!(matches!(result, Err(SmartHomeError::InvalidArgument(_))));
        assert_eq!(registry.len(), 1);
    }
}
