//! Generator options and configuration file loading
//!
//! Config files use `OPTIONS=` lines holding comma-separated `key:value`
//! pairs (`key=value` also works). Lines starting with `#` are comments.
//!
//! ```text
//! # 60x40 map, fixed seed
//! OPTIONS=width:60,height:40,seed:1234
//! OPTIONS=min_room_size:10,max_room_size:30
//! ```

use std::path::Path;

use thiserror::Error;

/// Everything the generation driver needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub width: i32,
    pub height: i32,
    /// RNG seed; a random one is picked when unset
    pub seed: Option<u64>,
    /// Distance between room seed lattice points
    pub room_spacing: i32,
    /// Maximum offset applied to each lattice point
    pub room_jitter: i32,
    pub min_room_size: i32,
    pub max_room_size: i32,
    pub corridor_attempts: i32,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            seed: None,
            room_spacing: 10,
            room_jitter: 10,
            min_room_size: 20,
            max_room_size: 50,
            corridor_attempts: 400,
        }
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl GeneratorOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse options from a config string, starting from the defaults
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                    options.parse_option(opt)?;
                }
            }
        }

        Ok(options)
    }

    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        match opt.split_once(':').or_else(|| opt.split_once('=')) {
            Some((key, value)) => self.set_option(key.trim(), value.trim()),
            None => match opt {
                "width" | "height" | "seed" | "room_spacing" | "room_jitter" | "min_room_size"
                | "max_room_size" | "corridor_attempts" => {
                    Err(OptionsError::MissingValue(opt.to_string()))
                }
                _ => Err(OptionsError::UnknownOption(opt.to_string())),
            },
        }
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        if value.is_empty() {
            return Err(OptionsError::MissingValue(name.to_string()));
        }

        match name {
            "width" => self.width = parse_value(name, value)?,
            "height" => self.height = parse_value(name, value)?,
            "seed" => {
                self.seed = match value {
                    "random" | "none" => None,
                    _ => Some(parse_value(name, value)?),
                }
            }
            "room_spacing" | "spacing" => self.room_spacing = parse_value(name, value)?,
            "room_jitter" | "jitter" => self.room_jitter = parse_value(name, value)?,
            "min_room_size" => self.min_room_size = parse_value(name, value)?,
            "max_room_size" => self.max_room_size = parse_value(name, value)?,
            "corridor_attempts" | "corridors" => {
                self.corridor_attempts = parse_value(name, value)?
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Check the values make sense together
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(OptionsError::Invalid(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.room_spacing <= 0 {
            return Err(OptionsError::Invalid(format!(
                "room_spacing must be positive, got {}",
                self.room_spacing
            )));
        }
        if self.room_jitter < 0 {
            return Err(OptionsError::Invalid(format!(
                "room_jitter must not be negative, got {}",
                self.room_jitter
            )));
        }
        if self.min_room_size > self.max_room_size {
            return Err(OptionsError::Invalid(format!(
                "min_room_size {} exceeds max_room_size {}",
                self.min_room_size, self.max_room_size
            )));
        }
        if self.corridor_attempts < 0 {
            return Err(OptionsError::Invalid(format!(
                "corridor_attempts must not be negative, got {}",
                self.corridor_attempts
            )));
        }
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        std::fs::write(path, self.to_config_string())?;
        Ok(())
    }

    /// Convert options to config file format
    pub fn to_config_string(&self) -> String {
        let mut lines = vec!["# dungeon generator options".to_string()];
        lines.push(format!(
            "OPTIONS=width:{},height:{}",
            self.width, self.height
        ));
        if let Some(seed) = self.seed {
            lines.push(format!("OPTIONS=seed:{seed}"));
        }
        lines.push(format!(
            "OPTIONS=room_spacing:{},room_jitter:{}",
            self.room_spacing, self.room_jitter
        ));
        lines.push(format!(
            "OPTIONS=min_room_size:{},max_room_size:{}",
            self.min_room_size, self.max_room_size
        ));
        lines.push(format!("OPTIONS=corridor_attempts:{}", self.corridor_attempts));
        lines.join("\n") + "\n"
    }
}

fn parse_value<T: core::str::FromStr>(name: &str, value: &str) -> Result<T, OptionsError> {
    value
        .parse()
        .map_err(|_| OptionsError::InvalidValue(name.to_string(), value.to_string()))
}
