use crate::lifecycle::WaitPolicy;
use crate::session::FailurePolicy;
use crate::types::ShardIteratorType;
use crate::{ENV_CONFIG_PATH, ENV_KINESIS_ENDPOINT_URL};

use std::env;
use std::time::Duration;

mod file;

pub use file::ConfigFile;

/// Everything a session needs to know, fixed before it starts.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) endpoint_url: Option<String>,
    pub(crate) region: String,
    pub(crate) stream_name: String,
    pub(crate) shard_count: i32,
    pub(crate) shard_id: String,
    pub(crate) partition_key: String,
    pub(crate) seed: String,
    pub(crate) suffix: char,
    pub(crate) batch_size: i32,
    pub(crate) iterator_type: ShardIteratorType,
    pub(crate) produce_interval: Duration,
    pub(crate) consume_interval: Duration,
    pub(crate) poll_interval: Duration,
    pub(crate) run_duration: Duration,
    pub(crate) wait_max_attempts: Option<usize>,
    pub(crate) on_failure: FailurePolicy,
}

impl Config {
    pub fn new() -> Self {
        let conf_path = env::var(ENV_CONFIG_PATH).ok();
        let file = ConfigFile::new(conf_path);

        Self {
            endpoint_url: env::var(ENV_KINESIS_ENDPOINT_URL).ok(),
            ..Self::from(file)
        }
    }

    pub fn endpoint_url(&self) -> Option<String> {
        self.endpoint_url.clone()
    }

    pub fn region(&self) -> &str {
        self.region.as_str()
    }

    pub fn stream_name(&self) -> &str {
        self.stream_name.as_str()
    }

    pub fn shard_count(&self) -> i32 {
        self.shard_count
    }

    pub fn partition_key(&self) -> &str {
        self.partition_key.as_str()
    }

    pub fn run_duration(&self) -> Duration {
        self.run_duration
    }

    pub fn on_failure(&self) -> FailurePolicy {
        self.on_failure
    }

    pub fn wait_policy(&self) -> WaitPolicy {
        WaitPolicy {
            interval: self.poll_interval,
            max_attempts: self.wait_max_attempts,
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            endpoint_url: None,
            region: "us-east-1".into(),
            stream_name: "test-stream".into(),
            shard_count: 1,
            shard_id: "0".into(),
            partition_key: "foo".into(),
            seed: "ALEX".into(),
            suffix: '1',
            batch_size: 1,
            iterator_type: ShardIteratorType::Latest,
            produce_interval: Duration::from_secs(1),
            consume_interval: Duration::from_secs(1),
            poll_interval: Duration::from_secs(5),
            run_duration: Duration::from_secs(10),
            wait_max_attempts: None,
            on_failure: FailurePolicy::Continue,
        }
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Config {
        let defaults = Config::default();
        let secs = |value: Option<u32>, default: Duration| {
            value.map(|s| Duration::from_secs(s.into())).unwrap_or(default)
        };

        Config {
            endpoint_url: defaults.endpoint_url,
            region: file.region.unwrap_or(defaults.region),
            stream_name: file.stream_name.unwrap_or(defaults.stream_name),
            shard_count: file.shard_count.unwrap_or(defaults.shard_count),
            shard_id: file.shard_id.unwrap_or(defaults.shard_id),
            partition_key: file.partition_key.unwrap_or(defaults.partition_key),
            seed: file.seed.unwrap_or(defaults.seed),
            suffix: file.suffix.unwrap_or(defaults.suffix),
            batch_size: file.batch_size.unwrap_or(defaults.batch_size),
            iterator_type: file.iterator_type.unwrap_or(defaults.iterator_type),
            produce_interval: secs(file.produce_interval_secs, defaults.produce_interval),
            consume_interval: secs(file.consume_interval_secs, defaults.consume_interval),
            poll_interval: secs(file.poll_interval_secs, defaults.poll_interval),
            run_duration: secs(file.run_secs, defaults.run_duration),
            wait_max_attempts: file
                .wait_max_attempts
                .map(|n| n as usize)
                .or(defaults.wait_max_attempts),
            on_failure: file.on_failure.unwrap_or(defaults.on_failure),
        }
    }
}
