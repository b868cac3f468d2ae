use aws_sdk_kinesis::types;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum StreamStatus {
    Creating,
    Active,
    Deleting,
    Updating,
    Unknown,
}

impl From<types::StreamStatus> for StreamStatus {
    fn from(status: types::StreamStatus) -> StreamStatus {
        match status {
            types::StreamStatus::Creating => StreamStatus::Creating,
            types::StreamStatus::Active => StreamStatus::Active,
            types::StreamStatus::Deleting => StreamStatus::Deleting,
            types::StreamStatus::Updating => StreamStatus::Updating,
            _ => StreamStatus::Unknown,
        }
    }
}

impl fmt::Display for StreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Self::Creating => "CREATING",
            Self::Active => "ACTIVE",
            Self::Deleting => "DELETING",
            Self::Updating => "UPDATING",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{status}")
    }
}
