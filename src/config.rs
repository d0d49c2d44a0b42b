use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::calculator::RateSchedule;

/// Field values the form starts with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InitialInputs {
    pub otr: String,
    pub down_payment: String,
    pub duration: String,
}

impl Default for InitialInputs {
    fn default() -> Self {
        Self {
            otr: "240000000".to_string(),
            down_payment: "20".to_string(),
            duration: "18".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub defaults: InitialInputs,
    pub rates: RateSchedule,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&raw)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        info!(path = %path.display(), rates = ?settings.rates, "loaded settings");
        Ok(settings)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
