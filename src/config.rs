use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub devices: DevicesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default to human-readable sizes (same as passing -h).
    pub human_readable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevicesConfig {
    /// Glob-style patterns of devices to hide from the report
    /// (e.g. "sdb*", "nvme1n1p2"). Matched against the short device name.
    pub exclude: Vec<String>,
}

impl DevicesConfig {
    pub fn is_excluded(&self, device: &str) -> bool {
        let name = device.trim_start_matches("/dev/");
        self.exclude.iter().any(|pat| {
            if let Some(prefix) = pat.strip_suffix('*') {
                name.starts_with(prefix)
            } else {
                pat == name
            }
        })
    }
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            devices: DevicesConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { human_readable: false }
    }
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self { exclude: Vec::new() }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        match try_load() {
            Ok(c) => c,
            Err(_) => {
                // Write defaults on first run (best-effort)
                let _ = try_write_defaults();
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dfree").join("dfree.toml"))
    }
}

fn try_load() -> Result<Config> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    let text = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&text)?;
    Ok(cfg)
}

fn try_write_defaults() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# dfree configuration\n# Generated on first run — edit freely\n\n{}", text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclude_matches_prefix_globs_and_exact_names() {
        let devices = DevicesConfig { exclude: vec!["sdb*".into(), "nvme0n1p2".into()] };
        assert!(devices.is_excluded("/dev/sdb1"));
        assert!(devices.is_excluded("/dev/sdb12"));
        assert!(devices.is_excluded("/dev/nvme0n1p2"));
        assert!(!devices.is_excluded("/dev/sda1"));
        assert!(!devices.is_excluded("/dev/nvme0n1p1"));
    }

    #[test]
    fn empty_exclude_list_keeps_everything() {
        let devices = DevicesConfig::default();
        assert!(!devices.is_excluded("/dev/sda1"));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let text = "[output]\nhuman_readable = true\n\n[devices]\nexclude = [\"sdc*\"]\n";
        let cfg: Config = toml::from_str(text).unwrap();
        assert!(cfg.output.human_readable);
        assert_eq!(cfg.devices.exclude, vec!["sdc*".to_string()]);
    }
}
