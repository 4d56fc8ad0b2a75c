//! Virtual thermostat — holds a temperature and pushes every change to its
//! subscribers.

use std::sync::{Arc, Mutex, Weak};

use smarthome_domain::device::{Device, DeviceKind};
use smarthome_domain::id::DeviceId;
use smarthome_domain::observer::{Observable, Observer};

/// A simulated thermostat.
///
/// The subscriber list may contain the same observer more than once; each
/// entry is notified. Subscribers are held weakly and pruned once dropped.
pub struct Thermostat {
    id: DeviceId,
    temperature: Mutex<i32>,
    observers: Mutex<Vec<Weak<dyn Observer>>>,
}

impl Thermostat {
    /// Create a thermostat set to `temperature` degrees, with no subscribers.
    #[must_use]
    pub fn new(id: DeviceId, temperature: i32) -> Self {
        Self {
            id,
            temperature: Mutex::new(temperature),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// The id this thermostat was constructed with.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Current set point, in degrees.
    #[must_use]
    pub fn temperature(&self) -> i32 {
        *self.lock_temperature()
    }

    /// Store a new set point then notify every subscriber before returning.
    pub fn set_temperature(&self, temperature: i32) {
        *self.lock_temperature() = temperature;
        tracing::debug!(thermostat = %self.id, temperature, "temperature changed");
        self.notify_observers(temperature);
    }

    /// Number of subscription entries still pointing at a live observer.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.lock_observers()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    fn lock_temperature(&self) -> std::sync::MutexGuard<'_, i32> {
        self.temperature
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock_observers(&self) -> std::sync::MutexGuard<'_, Vec<Weak<dyn Observer>>> {
        self.observers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Device for Thermostat {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Thermostat
    }

    fn turn_on(&self) {
        tracing::trace!(thermostat = %self.id, "thermostat has no on/off state, ignoring turn_on");
    }

    fn turn_off(&self) {
        tracing::trace!(thermostat = %self.id, "thermostat has no on/off state, ignoring turn_off");
    }

    fn status(&self) -> String {
        format!("Thermostat is set to {} degrees.", self.temperature())
    }
}

impl Observable for Thermostat {
    fn add_observer(&self, observer: Arc<dyn Observer>) {
        self.lock_observers().push(Arc::downgrade(&observer));
    }

    fn remove_observer(&self, observer: &dyn Observer) {
        let target = std::ptr::from_ref(observer);
        let mut observers = self.lock_observers();
        if let Some(pos) = observers
            .iter()
            .position(|w| std::ptr::addr_eq(w.as_ptr(), target))
        {
            observers.remove(pos);
        }
    }

    fn notify_observers(&self, temperature: i32) {
        // Subscribers may (un)subscribe from inside `update`.
        let snapshot = self.lock_observers().clone();

        let mut dropped = 0usize;
        for observer in &snapshot {
            match observer.upgrade() {
                Some(observer) => observer.update(temperature),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            tracing::debug!(thermostat = %self.id, dropped, "pruning dropped observers");
            self.lock_observers().retain(|w| w.strong_count() > 0);
        }
    }
}
