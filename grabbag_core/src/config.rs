use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct PickerSettings {
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,
    #[serde(default = "default_draws")]
    pub draws: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_phrases() -> Vec<String> {
    crate::greetings::default_greetings()
}

pub fn default_draws() -> u64 {
    8
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            draws: default_draws(),
            seed: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct FeedSettings {
    #[serde(default = "default_max_comments")]
    pub max_comments: usize,
    pub comments_path: Option<PathBuf>,
}

pub fn default_max_comments() -> usize {
    10
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            max_comments: default_max_comments(),
            comments_path: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct GrabbagConfig {
    #[serde(default)]
    pub picker: Option<PickerSettings>,
    #[serde(default)]
    pub feed: Option<FeedSettings>,
}

impl GrabbagConfig {
    pub fn load_from_file(path: &PathBuf) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file at {:?}: {}", path, e))?;

        let config: GrabbagConfig = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse TOML from config file {:?}: {}", path, e)
        })?;

        Ok(config)
    }
}

impl Default for GrabbagConfig {
    fn default() -> Self {
        Self {
            picker: Some(PickerSettings::default()),
            feed: Some(FeedSettings::default()),
        }
    }
}
