use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::RingError;
use crate::types::{DEFAULT_SLOT_MODULUS, RemovePolicy};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub log_filter: String,
    pub ring: RingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingConfig {
    pub slot_modulus: u64,
    pub remove_policy: RemovePolicy,
    /// Nodes placed on the ring at startup.
    pub nodes: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "hashslot=info".to_string(),
            ring: RingConfig::default(),
        }
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            slot_modulus: DEFAULT_SLOT_MODULUS,
            remove_policy: RemovePolicy::default(),
            nodes: vec![],
        }
    }
}

impl RingConfig {
    pub fn validate(&self) -> Result<(), RingError> {
        if self.slot_modulus == 0 {
            return Err(RingError::InvalidModulus(self.slot_modulus));
        }
        Ok(())
    }
}

impl CliConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self, figment::Error> {
        Self::figment(config_path).extract()
    }

    /// Defaults, then the optional TOML file, then `HASHSLOT_*` env vars
    /// (`__` separates nesting, e.g. `HASHSLOT_RING__SLOT_MODULUS`).
    pub fn figment(config_path: Option<&str>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(CliConfig::default()));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("HASHSLOT_").split("__"))
    }
}
