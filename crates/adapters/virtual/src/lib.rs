//! # smarthome-adapter-virtual
//!
//! Simulated devices for the smarthome simulator, plus the factory that
//! builds them from a type tag.
//!
//! ## Provided devices
//!
//! | Device | Tag | Behaviour |
//! |--------|-----|-----------|
//! | [`Light`] | `light` | Responds to `turn_on` / `turn_off`; observes thermostats and turns off at 75° or more |
//! | [`Thermostat`] | `thermostat` | Holds a temperature; pushes every change to subscribed observers |
//! | [`Door`] | `door` | Always locked; ignores `turn_on` / `turn_off` |
//!
//! ## Dependency rule
//!
//! Depends on `smarthome-domain` only.

mod devices;
mod factory;

pub use devices::{Door, Light, Thermostat, VirtualDevice};
pub use factory::DeviceFactory;
