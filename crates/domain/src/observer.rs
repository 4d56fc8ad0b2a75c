//! One-directional push of temperature changes.
//!
//! An [`Observable`] keeps a subscription list and pushes each new value to
//! every subscriber, synchronously and in subscription order. Subscriptions
//! are non-owning: the observable never keeps a subscriber alive.

use std::sync::Arc;

/// Receives pushed temperature readings.
pub trait Observer: Send + Sync {
    /// React to a new temperature, in degrees.
    fn update(&self, temperature: i32);
}

/// Holds subscribers and pushes temperature readings to them.
pub trait Observable {
    /// Subscribe `observer`. Only a weak reference is retained.
    fn add_observer(&self, observer: Arc<dyn Observer>);

    /// Unsubscribe `observer`, matched by identity.
    ///
    /// Removing an observer that is not subscribed does nothing.
    fn remove_observer(&self, observer: &dyn Observer);

    /// Push `temperature` to every live subscriber, in subscription order.
    fn notify_observers(&self, temperature: i32);
}
