//! Virtual light — responds to `turn_on` / `turn_off` and switches itself off
//! when a subscribed thermostat reports overheating.

use std::sync::Mutex;

use smarthome_domain::device::{Device, DeviceKind};
use smarthome_domain::id::DeviceId;
use smarthome_domain::observer::Observer;
use smarthome_domain::state::PowerState;

/// A simulated light that can be turned on and off.
pub struct Light {
    id: DeviceId,
    state: Mutex<PowerState>,
}

impl Light {
    /// Temperature, in degrees, at or above which a notified light turns off.
    pub const OVERHEAT_THRESHOLD: i32 = 75;

    /// Create a light that starts switched off.
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            state: Mutex::new(PowerState::Off),
        }
    }

    /// The id this light was constructed with.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Current power state.
    #[must_use]
    pub fn state(&self) -> PowerState {
        *self.lock_state()
    }

    fn set_state(&self, value: PowerState) {
        *self.lock_state() = value;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, PowerState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Device for Light {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Light
    }

    fn turn_on(&self) {
        self.set_state(PowerState::On);
    }

    fn turn_off(&self) {
        self.set_state(PowerState::Off);
    }

    fn status(&self) -> String {
        format!("Light {} is {}.", self.id, self.state())
    }
}

impl Observer for Light {
    fn update(&self, temperature: i32) {
        if temperature >= Self::OVERHEAT_THRESHOLD {
            tracing::debug!(light = %self.id, temperature, "overheat, turning light off");
            self.turn_off();
        }
    }
}
