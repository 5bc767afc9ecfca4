//! Ordinary devices, whose physical layout is the logical shape.

use crate::spi::contract::Device;

/// Host memory device. Never reports a padded shape.
#[derive(Debug, Clone)]
pub struct HostDevice {
    name: String,
}

impl HostDevice {
    pub fn new() -> Self {
        Self::named("host")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HostDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for HostDevice {
    fn name(&self) -> &str {
        &self.name
    }
}
