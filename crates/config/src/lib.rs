//! Shard Configuration Management
//!
//! Loads server options from `serveroptions.txt`: one `key = value` per
//! line, `#` starts a comment. Unknown keys are ignored and values that do
//! not parse keep their default.

use shard_core::{Result, ShardError};
use std::fs;
use std::path::Path;

/// Default location of the options file
pub const DEFAULT_OPTIONS_PATH: &str = "servers/default/config/serveroptions.txt";

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Server name (from "name" option)
    pub name: String,
    /// Map width in tiles (from "mapwidth" option); the loaded terrain must match
    pub map_width: u32,
    /// Map height in tiles (from "mapheight" option)
    pub map_height: u32,
    /// Log every movement decision (from "debugmove" option)
    pub debug_move: bool,
    /// Maximum items per container (from "maxcontaineritems" option)
    pub max_container_items: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "My Shard".into(),
            map_width: 1024,
            map_height: 1024,
            debug_move: false,
            max_container_items: 125,
        }
    }
}

impl ServerConfig {
    /// Load configuration from an options file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ShardError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Load configuration from the default server path
    pub fn load_default() -> Result<Self> {
        Self::load_from_file(DEFAULT_OPTIONS_PATH)
    }

    /// Parse options file content
    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key=value
            if let Some(eq_pos) = line.find('=') {
                let key = line[..eq_pos].trim();
                let value = line[eq_pos + 1..].trim();

                config.parse_option(&key.to_lowercase(), value);
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn parse_option(&mut self, key: &str, value: &str) {
        match key {
            "name" => self.name = value.into(),
            "mapwidth" => {
                self.map_width = value.parse().unwrap_or(1024);
            }
            "mapheight" => {
                self.map_height = value.parse().unwrap_or(1024);
            }
            "debugmove" => {
                self.debug_move = parse_bool(value).unwrap_or(false);
            }
            "maxcontaineritems" => {
                self.max_container_items = value.parse().unwrap_or(125);
            }
            _ => {
                tracing::debug!("Ignoring unknown option '{}'", key);
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.map_width == 0 || self.map_height == 0 {
            return Err(ShardError::Config(format!(
                "Map size {}x{} is empty",
                self.map_width, self.map_height
            )));
        }
        // Coordinates go on the wire as 16-bit words
        if self.map_width > u32::from(u16::MAX) + 1 || self.map_height > u32::from(u16::MAX) + 1 {
            return Err(ShardError::Config(format!(
                "Map size {}x{} exceeds the protocol's coordinate range",
                self.map_width, self.map_height
            )));
        }
        Ok(())
    }

    /// Display configuration summary
    pub fn display(&self) {
        tracing::info!("Server Configuration:");
        tracing::info!("    Name: {}", self.name);
        tracing::info!("    Map: {}x{}", self.map_width, self.map_height);
        tracing::info!("    Debug moves: {}", self.debug_move);
        tracing::info!("    Max container items: {}", self.max_container_items);
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
