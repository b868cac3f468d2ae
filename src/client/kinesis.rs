use super::{
    Client, DescribeStreamOutput, GetIteratorOutput, GetRecordsOutput, ListStreamsOutput,
    PutRecordOutput,
};
use crate::types::{Record, ShardIteratorType, StreamDescription};

use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_kinesis::{
    config::{Builder as ConfigBuilder, Region},
    primitives::Blob,
    types, Client as SdkClient,
};

#[derive(Debug, Clone)]
pub struct KinesisClient {
    client: SdkClient,
}

impl KinesisClient {
    pub async fn builder() -> KinesisClientBuilder {
        KinesisClientBuilder::new().await
    }
}

#[async_trait]
impl Client for KinesisClient {
    async fn create_stream(&self, stream: &str, shard_count: i32) -> Result<()> {
        self.client
            .create_stream()
            .stream_name(stream)
            .shard_count(shard_count)
            .send()
            .await
            .map(drop)
            .map_err(anyhow::Error::from)
    }

    async fn list_streams(&self, exclusive_start: Option<String>) -> Result<ListStreamsOutput> {
        self.client
            .list_streams()
            .set_exclusive_start_stream_name(exclusive_start)
            .send()
            .await
            .map(|output| ListStreamsOutput {
                stream_names: output.stream_names,
                has_more: output.has_more_streams,
            })
            .map_err(anyhow::Error::from)
    }

    async fn describe_stream(&self, stream: &str) -> Result<DescribeStreamOutput> {
        self.client
            .describe_stream()
            .stream_name(stream)
            .send()
            .await?
            .stream_description
            .map(|description| DescribeStreamOutput {
                description: StreamDescription::from(description),
            })
            .ok_or(anyhow::anyhow!(
                "`stream_description` is None in `DescribeStreamOutput`"
            ))
    }

    async fn delete_stream(&self, stream: &str) -> Result<()> {
        self.client
            .delete_stream()
            .stream_name(stream)
            .send()
            .await
            .map(drop)
            .map_err(anyhow::Error::from)
    }

    async fn get_shard_iterator(
        &self,
        stream: &str,
        shard_id: &str,
        iterator_type: ShardIteratorType,
    ) -> Result<GetIteratorOutput> {
        self.client
            .get_shard_iterator()
            .stream_name(stream)
            .shard_id(shard_id)
            .shard_iterator_type(types::ShardIteratorType::from(iterator_type))
            .send()
            .await
            .map(|output| GetIteratorOutput {
                iterator: output.shard_iterator,
            })
            .map_err(anyhow::Error::from)
    }

    async fn get_records(&self, iterator: &str, limit: i32) -> Result<GetRecordsOutput> {
        self.client
            .get_records()
            .shard_iterator(iterator)
            .limit(limit)
            .send()
            .await
            .map(|output| {
                let records = output
                    .records
                    .into_iter()
                    .map(Record::from)
                    .collect::<Vec<Record>>()
                    .into();

                GetRecordsOutput {
                    records,
                    next_iterator: output.next_shard_iterator,
                    millis_behind_latest: output.millis_behind_latest,
                }
            })
            .map_err(anyhow::Error::from)
    }

    async fn put_record(
        &self,
        stream: &str,
        data: &[u8],
        partition_key: &str,
    ) -> Result<PutRecordOutput> {
        self.client
            .put_record()
            .stream_name(stream)
            .data(Blob::new(data))
            .partition_key(partition_key)
            .send()
            .await
            .map(|output| PutRecordOutput {
                shard_id: output.shard_id,
                sequence_number: output.sequence_number,
            })
            .map_err(anyhow::Error::from)
    }
}

#[derive(Debug)]
pub struct KinesisClientBuilder {
    builder: ConfigBuilder,
}

impl KinesisClientBuilder {
    pub async fn new() -> Self {
        let config = aws_config::load_from_env().await;
        Self {
            builder: ConfigBuilder::from(&config),
        }
    }

    pub fn region<T: Into<String>>(self, region: T) -> Self {
        let region: String = region.into();
        Self {
            builder: self.builder.region(Region::new(region)),
        }
    }

    pub fn endpoint_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => Self {
                builder: self.builder.endpoint_url(url),
            },
            None => self,
        }
    }

    pub fn build(self) -> KinesisClient {
        let config = self.builder.build();
        KinesisClient {
            client: SdkClient::from_conf(config),
        }
    }
}
