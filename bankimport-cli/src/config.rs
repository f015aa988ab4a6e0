use anyhow::{bail, Context, Result};
use bankimport_core::{Classifier, KeywordRules, DEFAULT_CURRENCY};
use bankimport_ingest::StatementImporter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the config directory, mainly for scripted runs.
pub const HOME_ENV: &str = "BANKIMPORT_HOME";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub statement: StatementSection,
    pub classifier: KeywordRules,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementSection {
    /// Currency tag stamped on every imported statement
    pub currency: String,
}

impl Default for StatementSection {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Config {
    pub fn importer(&self) -> Result<StatementImporter> {
        let classifier = Classifier::new(&self.classifier).context("compile classifier keywords")?;
        Ok(StatementImporter::new(classifier).with_currency(self.statement.currency.clone()))
    }
}

/// `$BANKIMPORT_HOME`, else `$HOME/.bankimport`.
pub fn config_dir() -> Result<PathBuf> {
    resolve_config_dir(
        std::env::var_os(HOME_ENV).map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve_config_dir(override_dir: Option<PathBuf>, home: Option<PathBuf>) -> Result<PathBuf> {
    match (override_dir, home) {
        (Some(dir), _) if !dir.as_os_str().is_empty() => Ok(dir),
        (_, Some(home)) => Ok(home.join(".bankimport")),
        _ => bail!("neither {HOME_ENV} nor HOME is set"),
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Explicit path must exist; the default location may be absent.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };
    read_config(&p)
}

pub fn read_config(p: &Path) -> Result<Config> {
    debug!(path = %p.display(), "loading config");
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let p = dir.join("config.toml");
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
