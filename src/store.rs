//! The admin home directory: `config.json` plus the key-value `state.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::model::AdminConfig;

pub const HOME_DIR: &str = ".i18n-admin";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AdminState {
    pub version: u32,

    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// `--home` when given, otherwise `.i18n-admin` under `cwd`.
    pub fn resolve_home(home: Option<&Path>, cwd: &Path) -> PathBuf {
        match home {
            Some(h) => h.to_path_buf(),
            None => cwd.join(HOME_DIR),
        }
    }

    pub fn open(root: &Path) -> Result<Self> {
        if !root.join("config.json").is_file() {
            return Err(anyhow!(
                "no config found at {} (run `i18n-admin init --url ...`)",
                root.display()
            ));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn init(root: &Path, cfg: &AdminConfig, force: bool) -> Result<Self> {
        if root.join("config.json").exists() && !force {
            return Err(anyhow!(
                "{} is already initialized (use --force to overwrite)",
                root.display()
            ));
        }
        fs::create_dir_all(root).with_context(|| format!("create {}", root.display()))?;

        let store = Self {
            root: root.to_path_buf(),
        };
        store.write_config(cfg)?;
        store.write_state(&AdminState {
            version: 1,
            entries: BTreeMap::new(),
        })?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<AdminConfig> {
        let bytes = fs::read(self.root.join("config.json")).context("read config.json")?;
        let cfg: AdminConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &AdminConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn read_state(&self) -> Result<AdminState> {
        let path = self.root.join("state.json");
        if !path.exists() {
            return Ok(AdminState {
                version: 1,
                entries: BTreeMap::new(),
            });
        }
        let bytes = fs::read(&path).context("read state.json")?;
        let st: AdminState = serde_json::from_slice(&bytes).context("parse state.json")?;
        if st.version != 1 {
            anyhow::bail!("unsupported state version {}", st.version);
        }
        Ok(st)
    }

    pub fn write_state(&self, st: &AdminState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
        write_atomic(&self.root.join("state.json"), &bytes).context("write state.json")?;
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
