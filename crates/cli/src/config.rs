//! Optional JSON config file. Command-line flags override its values.
//!
//! Every field has a default, so `{}` (or no file at all) is a valid config.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use mandala::cfg::{AGE_DEFAULT, BASE_DEFAULT, DAY_DEFAULT, MONTH_DEFAULT, MULTIPLIER_DEFAULT};
use mandala::prelude::{Padding, Viewport};
use serde::{Deserialize, Serialize};

/// Artifact format written by the render commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub width: f64,
    pub height: f64,
    /// Uniform padding on all four sides.
    pub padding: f64,
    pub format: OutputFormat,
    pub base: i32,
    pub multiplier: i32,
    pub day: i32,
    pub month: i32,
    pub age: Option<i32>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            padding: 0.0,
            format: OutputFormat::Svg,
            base: BASE_DEFAULT,
            multiplier: MULTIPLIER_DEFAULT,
            day: DAY_DEFAULT,
            month: MONTH_DEFAULT,
            age: Some(AGE_DEFAULT),
        }
    }
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// `load` when a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height).with_padding(Padding::uniform(self.padding))
    }
}
