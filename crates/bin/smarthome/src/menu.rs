//! Interactive console menu.
//!
//! Reads one command per line and drives the registry. Input and output are
//! generic so the loop can be exercised without a terminal.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;

use smarthome_adapter_virtual::DeviceFactory;
use smarthome_app::proxy::DeviceProxy;
use smarthome_app::registry::DeviceRegistry;
use smarthome_domain::device::DeviceKind;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::id::DeviceId;

/// A menu entry picked by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    AddLight,
    TurnOn,
    TurnOff,
    Status,
    Quit,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid choice")]
struct InvalidChoice;

impl FromStr for Choice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::AddLight),
            "2" => Ok(Self::TurnOn),
            "3" => Ok(Self::TurnOff),
            "4" => Ok(Self::Status),
            "5" => Ok(Self::Quit),
            _ => Err(InvalidChoice),
        }
    }
}

/// Console front-end over a [`DeviceRegistry`].
pub struct Menu<'a, R, W> {
    registry: &'a mut DeviceRegistry,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(registry: &'a mut DeviceRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the input or output stream are returned.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed, leaving menu");
                return Ok(());
            };

            match line.parse::<Choice>() {
                Ok(Choice::AddLight) => self.add_light()?,
                Ok(Choice::TurnOn) => self.power(true)?,
                Ok(Choice::TurnOff) => self.power(false)?,
                Ok(Choice::Status) => writeln!(self.output, "{}", self.registry.status())?,
                Ok(Choice::Quit) => return Ok(()),
                Err(InvalidChoice) => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Smart Home System Menu ---")?;
        writeln!(self.output, "1. Add Light")?;
        writeln!(self.output, "2. Turn On Device")?;
        writeln!(self.output, "3. Turn Off Device")?;
        writeln!(self.output, "4. Get Status Report")?;
        writeln!(self.output, "5. Quit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_light(&mut self) -> io::Result<()> {
        let id = self.registry.next_device_id();
        let device = DeviceFactory::create(id, DeviceKind::Light, 0);
        let assigned = self
            .registry
            .add_device(Arc::new(DeviceProxy::new(device.into_device())));
        writeln!(self.output, "Light added with ID: {assigned}")
    }

    fn power(&mut self, on: bool) -> io::Result<()> {
        let verb = if on { "on" } else { "off" };
        write!(self.output, "Enter device ID to turn {verb}: ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let Ok(id) = line.parse::<DeviceId>() else {
            return writeln!(self.output, "Invalid device ID.");
        };

        let result = if on {
            self.registry.turn_on(id)
        } else {
            self.registry.turn_off(id)
        };
        match result {
            Ok(()) => Ok(()),
            Err(SmartHomeError::NotFound(_)) => writeln!(self.output, "Device not found."),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }
}
