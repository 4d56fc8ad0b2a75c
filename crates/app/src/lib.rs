//! # smarthome-app
//!
//! Application layer — owns devices and routes commands to them.
//!
//! ## Responsibilities
//! - [`registry::DeviceRegistry`]: assigns ids, owns devices, routes
//!   `turn_on` / `turn_off` by id and builds the status report
//! - [`proxy::DeviceProxy`]: forwarding wrapper that instruments device calls
//!   without changing the devices or their callers
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only and works against the
//! [`Device`](smarthome_domain::device::Device) trait. Concrete devices come
//! from adapter crates; this crate never names them outside tests.

pub mod proxy;
pub mod registry;
