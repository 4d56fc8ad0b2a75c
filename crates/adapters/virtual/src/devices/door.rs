//! Virtual door — always locked, has no on/off axis.

use smarthome_domain::device::{Device, DeviceKind};
use smarthome_domain::id::DeviceId;
use smarthome_domain::state::LockState;

/// A simulated door.
///
/// The lock state is fixed at construction; `turn_on` / `turn_off` are
/// accepted and ignored.
pub struct Door {
    id: DeviceId,
    lock: LockState,
}

impl Door {
    /// Create a locked door.
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            lock: LockState::Locked,
        }
    }

    /// The id this door was constructed with.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Current lock state.
    #[must_use]
    pub fn lock_state(&self) -> LockState {
        self.lock
    }
}

impl Device for Door {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Door
    }

    fn turn_on(&self) {
        tracing::trace!(door = %self.id, "door has no on/off state, ignoring turn_on");
    }

    fn turn_off(&self) {
        tracing::trace!(door = %self.id, "door has no on/off state, ignoring turn_off");
    }

    fn status(&self) -> String {
        format!("Door is {}.", self.lock)
    }
}
