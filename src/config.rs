use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;

/// Where the web build drops its entry document, relative to this binary.
const TARGET_RELATIVE: &str = "../build/web/index.html";

#[derive(Debug, Parser)]
#[command(
    name = "inject-api-key",
    version,
    about = "Inject the API key into the built web front-end's index.html."
)]
pub struct Cli {
    /// API key to inject. Falls back to the API_KEY env var.
    #[arg(long, env = "API_KEY")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub target_path: PathBuf,
}

impl Config {
    pub fn from_cli() -> Result<Self> {
        let cli = Cli::parse();
        let exe = std::env::current_exe().context("failed to locate the running executable")?;
        Config::from_parts(cli, &exe)
    }

    fn from_parts(cli: Cli, exe_path: &Path) -> Result<Self> {
        let exe_dir = exe_path
            .parent()
            .ok_or_else(|| anyhow!("executable path has no parent directory"))?;

        Ok(Self {
            api_key: cli.api_key.unwrap_or_default(),
            target_path: exe_dir.join(TARGET_RELATIVE),
        })
    }
}
