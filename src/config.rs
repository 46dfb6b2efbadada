// SPDX-License-Identifier: MPL-2.0

use cosmic::cosmic_config::{self, cosmic_config_derive::CosmicConfigEntry, CosmicConfigEntry};

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    /// Put each filter's name in front of its summary
    pub show_prefix: bool,
    /// Path to a JSON option catalog (empty uses the built-in catalog)
    pub catalog_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_prefix: true,
            catalog_path: String::new(),
        }
    }
}
