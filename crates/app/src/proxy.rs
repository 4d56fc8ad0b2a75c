//! Device proxy — a forwarding wrapper used to instrument access to a device
//! without changing the device or its callers.

use std::sync::Arc;

use smarthome_domain::device::{Device, DeviceKind};

/// Forwards every [`Device`] call to the wrapped device, unchanged.
///
/// The only addition is a trace event per forwarded call.
pub struct DeviceProxy {
    device: Arc<dyn Device>,
}

impl DeviceProxy {
    /// Wrap `device`.
    #[must_use]
    pub fn new(device: Arc<dyn Device>) -> Self {
        Self { device }
    }

    /// The wrapped device.
    #[must_use]
    pub fn inner(&self) -> &Arc<dyn Device> {
        &self.device
    }
}

impl Device for DeviceProxy {
    fn kind(&self) -> DeviceKind {
        self.device.kind()
    }

    fn turn_on(&self) {
        tracing::trace!(kind = %self.device.kind(), "proxy: turn_on");
        self.device.turn_on();
    }

    fn turn_off(&self) {
        tracing::trace!(kind = %self.device.kind(), "proxy: turn_off");
        self.device.turn_off();
    }

    fn status(&self) -> String {
        let status = self.device.status();
        tracing::trace!(kind = %self.device.kind(), %status, "proxy: status");
        status
    }
}
