//! Typed device identifier.
//!
//! Identifiers are small sequential integers handed out by the registry,
//! starting at [`DeviceId::FIRST`].

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a [`Device`](crate::device::Device).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceId(u32);

impl DeviceId {
    /// The first identifier a fresh registry hands out.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The identifier following this one.
    ///
    /// # Panics
    ///
    /// Panics when called on `u32::MAX`; ids are never wrapped or reused.
    #[must_use]
    pub const fn next(self) -> Self {
        match self.0.checked_add(1) {
            Some(value) => Self(value),
            None => panic!("device id space exhausted"),
        }
    }

    /// Access the raw value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<u32> for DeviceId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DeviceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_at_one() {
        assert_eq!(DeviceId::FIRST.get(), 1);
        assert_eq!(DeviceId::default(), DeviceId::FIRST);
    }

    #[test]
    fn should_increment_when_calling_next() {
        let id = DeviceId::new(4);
        assert_eq!(id.next(), DeviceId::new(5));
        assert!(id < id.next());
    }

    #[test]
    #[should_panic(expected = "device id space exhausted")]
    fn should_panic_instead_of_wrapping_at_max() {
        let _ = DeviceId::new(u32::MAX).next();
    }

    #[test]
    fn should_convert_from_raw_value() {
        let id: DeviceId = 9.into();
        assert_eq!(id.get(), 9);
    }

    #[test]
    fn should_display_plain_number() {
        assert_eq!(DeviceId::new(12).to_string(), "12");
    }

    #[test]
    fn should_parse_surrounding_whitespace() {
        let parsed: DeviceId = " 3\n".parse().unwrap();
        assert_eq!(parsed, DeviceId::new(3));
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric() {
        assert!("three".parse::<DeviceId>().is_err());
        assert!("-1".parse::<DeviceId>().is_err());
    }
}
