//! # smarthome-domain
//!
//! Pure domain model for the smarthome simulator.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the **Device** capability set (`turn_on`, `turn_off`, `status`)
//! - Define the **device kinds** a home can hold and how their type tags parse
//! - Define the **Observer / Observable** push-notification capabilities
//! - Define the value types that make up device state (power, lock)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! Concrete devices live in adapter crates and implement the traits defined here.

pub mod error;
pub mod id;

pub mod device;
pub mod observer;
pub mod state;
