use std::fmt;
use thiserror::Error;
use tokio::task::JoinError;

pub type Result<T> = std::result::Result<T, Error>;

/// Remote operation a request error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateStream,
    ListStreams,
    DescribeStream,
    DeleteStream,
    GetShardIterator,
    GetRecords,
    PutRecord,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreateStream => "CreateStream",
            Self::ListStreams => "ListStreams",
            Self::DescribeStream => "DescribeStream",
            Self::DeleteStream => "DeleteStream",
            Self::GetShardIterator => "GetShardIterator",
            Self::GetRecords => "GetRecords",
            Self::PutRecord => "PutRecord",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{operation} failed on `{stream}`: {source}")]
    Request {
        operation: Operation,
        stream: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("`{stream}` was not {target} after {attempts} polls")]
    WaitExhausted {
        stream: String,
        target: &'static str,
        attempts: usize,
    },
    #[error("No shard iterator for shard `{shard_id}` of `{stream}`")]
    NoIterator { stream: String, shard_id: String },
    #[error("Background task failed: {0}")]
    Task(#[from] JoinError),
}

impl Error {
    pub fn request<T: Into<String>>(operation: Operation, stream: T, source: anyhow::Error) -> Self {
        Self::Request {
            operation,
            stream: stream.into(),
            source,
        }
    }

    /// Returns a closure wrapping a client error, for use with `map_err`.
    pub fn on(operation: Operation, stream: &str) -> impl FnOnce(anyhow::Error) -> Error + '_ {
        move |source| Error::request(operation, stream, source)
    }
}
