use super::{into_chrono, ShardSummary, StreamStatus};

use aws_sdk_kinesis::types;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreamDescription {
    name: String,
    arn: String,
    status: StreamStatus,
    shards: Vec<ShardSummary>,
    retention_period_hours: i32,
    created_at: Option<DateTime<Utc>>,
}

impl StreamDescription {
    pub fn new<T: Into<String>>(name: T, status: StreamStatus) -> Self {
        let name: String = name.into();
        Self {
            arn: format!("arn:aws:kinesis:us-east-1:000000000000:stream/{name}"),
            name,
            status,
            shards: vec![],
            retention_period_hours: 24,
            created_at: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn arn(&self) -> &str {
        self.arn.as_str()
    }

    pub fn status(&self) -> StreamStatus {
        self.status
    }

    pub fn shards(&self) -> &[ShardSummary] {
        self.shards.as_slice()
    }
}

impl From<types::StreamDescription> for StreamDescription {
    fn from(description: types::StreamDescription) -> StreamDescription {
        let types::StreamDescription {
            stream_name,
            stream_arn,
            stream_status,
            shards,
            retention_period_hours,
            stream_creation_timestamp,
            ..
        } = description;

        StreamDescription {
            name: stream_name,
            arn: stream_arn,
            status: StreamStatus::from(stream_status),
            shards: shards.into_iter().map(ShardSummary::from).collect(),
            retention_period_hours,
            created_at: into_chrono(stream_creation_timestamp),
        }
    }
}
