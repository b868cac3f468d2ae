mod kinesis;
#[cfg(test)]
mod mock;

use crate::types::{Records, ShardIteratorType, StreamDescription};

use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct ListStreamsOutput {
    pub stream_names: Vec<String>,
    pub has_more: bool,
}

#[derive(Debug, Clone)]
pub struct DescribeStreamOutput {
    pub description: StreamDescription,
}

#[derive(Debug, Clone)]
pub struct GetIteratorOutput {
    pub iterator: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetRecordsOutput {
    pub records: Records,
    /// None once the shard is closed and fully read.
    pub next_iterator: Option<String>,
    pub millis_behind_latest: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct PutRecordOutput {
    pub shard_id: String,
    pub sequence_number: String,
}

/// Request/response surface of the streaming service.
#[async_trait]
pub trait Client: Send + Sync {
    async fn create_stream(&self, stream: &str, shard_count: i32) -> Result<()>;

    async fn list_streams(&self, exclusive_start: Option<String>) -> Result<ListStreamsOutput>;

    async fn describe_stream(&self, stream: &str) -> Result<DescribeStreamOutput>;

    async fn delete_stream(&self, stream: &str) -> Result<()>;

    async fn get_shard_iterator(
        &self,
        stream: &str,
        shard_id: &str,
        iterator_type: ShardIteratorType,
    ) -> Result<GetIteratorOutput>;

    async fn get_records(&self, iterator: &str, limit: i32) -> Result<GetRecordsOutput>;

    async fn put_record(
        &self,
        stream: &str,
        data: &[u8],
        partition_key: &str,
    ) -> Result<PutRecordOutput>;
}

pub use kinesis::{KinesisClient, KinesisClientBuilder};
#[cfg(test)]
pub use mock::MockClient;
