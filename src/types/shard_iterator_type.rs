use aws_sdk_kinesis::types;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a fresh shard iterator starts reading.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShardIteratorType {
    /// Just after the most recent record; earlier records are never observed.
    #[default]
    Latest,
    /// The oldest untrimmed record of the shard.
    TrimHorizon,
}

impl From<ShardIteratorType> for types::ShardIteratorType {
    fn from(value: ShardIteratorType) -> types::ShardIteratorType {
        match value {
            ShardIteratorType::Latest => types::ShardIteratorType::Latest,
            ShardIteratorType::TrimHorizon => types::ShardIteratorType::TrimHorizon,
        }
    }
}

impl fmt::Display for ShardIteratorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "LATEST"),
            Self::TrimHorizon => write!(f, "TRIM_HORIZON"),
        }
    }
}
