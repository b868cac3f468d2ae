use crate::session::FailurePolicy;
use crate::types::ShardIteratorType;

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;
use validator::Validate;

/// Optional YAML overrides. Absent keys keep their defaults.
#[derive(Debug, Default, Deserialize, Validate, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub region: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub stream_name: Option<String>,
    #[validate(range(min = 1))]
    pub shard_count: Option<i32>,
    #[validate(length(min = 1, max = 128))]
    pub shard_id: Option<String>,
    #[validate(length(min = 1, max = 256))]
    pub partition_key: Option<String>,
    pub seed: Option<String>,
    pub suffix: Option<char>,
    #[validate(range(min = 1, max = 10000))]
    pub batch_size: Option<i32>,
    pub iterator_type: Option<ShardIteratorType>,
    #[validate(range(min = 1))]
    pub produce_interval_secs: Option<u32>,
    #[validate(range(min = 1))]
    pub consume_interval_secs: Option<u32>,
    #[validate(range(min = 1))]
    pub poll_interval_secs: Option<u32>,
    pub run_secs: Option<u32>,
    #[validate(range(min = 1))]
    pub wait_max_attempts: Option<u32>,
    pub on_failure: Option<FailurePolicy>,
}

impl ConfigFile {
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Self {
        path.map(read_config).unwrap_or_default()
    }
}

fn read_config<P: AsRef<Path>>(path: P) -> ConfigFile {
    _read_config(path).unwrap_or_else(|err| {
        warn!("{err}");
        warn!("Skip reading config file.");
        ConfigFile::default()
    })
}

fn _read_config<P: AsRef<Path>>(path: P) -> Result<ConfigFile, String> {
    let content = fs::read_to_string(&path)
        .map_err(|err| format!("Failed to read: {}. {err}", path.as_ref().to_string_lossy()))?;
    let file: ConfigFile = serde_yaml::from_str(&content)
        .map_err(|err| format!("Failed to deserialize config file: {err}"))?;
    file.validate()
        .map_err(|err| format!("Invalid config file: {err}"))?;
    Ok(file)
}
