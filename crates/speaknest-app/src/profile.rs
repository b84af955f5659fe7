use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use speaknest_config::Config;

/// A named configuration stored as JSON
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub value: Config,
}

/// Config from the profile at `path`, or environment defaults without one
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    if !path.exists() {
        tracing::warn!(
            "Profile {} not found, falling back to environment defaults",
            path.display()
        );
        return Ok(Config::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;

    tracing::info!("Loaded profile {}", profile.name);
    Ok(profile.value)
}

/// Write `config` as a new profile; refuses to overwrite
pub fn init_profile(path: &Path, name: &str, config: &Config) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("Profile {} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let profile = Profile {
        name: name.to_string(),
        value: config.clone(),
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created profile {name} at {}", path.display());
    Ok(())
}
