//! Configuration for the node front door

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use config::{Config, File};
use serde::Deserialize;
use stoa_common::Era;

/// Network selector appended to every query/sign/submit sub-command
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum Network {
    Mainnet,
    Testnet { magic: u32 },
}

impl Network {
    pub fn args(&self) -> Vec<String> {
        match self {
            Network::Mainnet => vec!["--mainnet".to_string()],
            Network::Testnet { magic } => {
                vec!["--testnet-magic".to_string(), magic.to_string()]
            }
        }
    }
}

fn default_binary() -> String {
    "cardano-cli".to_string()
}

fn default_network() -> Network {
    Network::Mainnet
}

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Name or path of the node tool binary
    #[serde(default = "default_binary")]
    pub binary: String,

    #[serde(default = "default_network")]
    pub network: Network,

    /// Node socket, passed as `--socket-path` on query/submit commands
    #[serde(default)]
    pub socket_path: Option<PathBuf>,

    /// Era name for build-raw; unset lets the tool pick its default
    #[serde(default)]
    pub era: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            network: default_network(),
            socket_path: None,
            era: None,
        }
    }
}

impl CliConfig {
    /// Load from a TOML file, with defaults for anything missing
    pub fn load(path: &Path) -> Result<Self> {
        let config = Config::builder().add_source(File::from(path)).build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn era(&self) -> Result<Option<Era>> {
        match &self.era {
            None => Ok(None),
            Some(name) => match Era::from_name(name) {
                Some(era) => Ok(Some(era)),
                None => bail!("unknown era {name:?}"),
            },
        }
    }
}
