use super::into_chrono;

use aws_sdk_kinesis::types;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::borrow::Cow;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    sequence_number: String,
    partition_key: String,
    #[serde(serialize_with = "lossy_str")]
    data: Vec<u8>,
    approximate_arrival_timestamp: Option<DateTime<Utc>>,
}

impl Record {
    pub fn new<S, T, D>(sequence_number: S, partition_key: T, data: D) -> Self
    where
        S: Into<String>,
        T: Into<String>,
        D: Into<Vec<u8>>,
    {
        Self {
            sequence_number: sequence_number.into(),
            partition_key: partition_key.into(),
            data: data.into(),
            approximate_arrival_timestamp: None,
        }
    }

    pub fn sequence_number(&self) -> &str {
        self.sequence_number.as_str()
    }

    pub fn partition_key(&self) -> &str {
        self.partition_key.as_str()
    }

    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// Payload rendered as UTF-8, replacing invalid sequences.
    pub fn payload(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    pub fn arrived_at(&self) -> Option<DateTime<Utc>> {
        self.approximate_arrival_timestamp
    }
}

impl From<types::Record> for Record {
    fn from(value: types::Record) -> Record {
        Record {
            sequence_number: value.sequence_number,
            partition_key: value.partition_key,
            data: value.data.into_inner(),
            approximate_arrival_timestamp: value.approximate_arrival_timestamp.and_then(into_chrono),
        }
    }
}

impl From<&str> for Record {
    fn from(payload: &str) -> Record {
        Record::new("", "", payload)
    }
}

fn lossy_str<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(data))
}
