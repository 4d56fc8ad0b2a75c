//! # smarthome — home automation simulator
//!
//! Composition root that wires the crates together and runs the console menu.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise logging (stderr, so the menu on stdout stays readable)
//! - Seed the registry with the configured devices and wire observers
//! - Run the interactive menu on stdin/stdout until the user quits
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no device logic belongs here.

mod config;
mod home;
mod menu;

use smarthome_app::registry::DeviceRegistry;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::menu::Menu;

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("smarthome starting");

    let mut registry = DeviceRegistry::new();
    let home = home::seed(&config.home, &mut registry)?;
    tracing::info!(
        devices = registry.len(),
        lights = home.lights.len(),
        thermostats = home.thermostats.len(),
        "home seeded"
    );

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    Menu::new(&mut registry, stdin, stdout).run()?;

    tracing::info!("smarthome stopped");
    Ok(())
}
