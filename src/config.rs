use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "wisp", about = "Minimal HTTP/1.1 server")]
struct Cli {
    /// Optional YAML config file
    #[arg(long, env = "WISP_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:4221
    #[arg(long)]
    addr: Option<String>,

    /// Directory served under /files/
    #[arg(long)]
    directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

fn default_listen_addr() -> String {
    "127.0.0.1:4221".to_string()
}

fn default_max_connections() -> usize {
    256
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            max_connections: default_max_connections(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            files: FilesConfig::default(),
        }
    }
}

impl Config {
    /// Loads the configuration: YAML file when given, then CLI overrides.
    pub fn load() -> anyhow::Result<Self> {
        let cli = Cli::parse();

        let mut cfg = match &cli.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                Self::from_yaml(&raw)?
            }
            None => Self::default(),
        };

        if let Some(addr) = cli.addr {
            cfg.server.listen_addr = addr;
        }
        if let Some(directory) = cli.directory {
            cfg.files.directory = directory;
        }

        Ok(cfg)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
