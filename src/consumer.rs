use crate::channel::StopListener;
use crate::client::Client;
use crate::config::Config;
use crate::error::{Error, Operation, Result};
use crate::session::LoopOutcome;
use crate::types::ShardIteratorType;

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

pub struct Consumer {
    client: Arc<dyn Client>,
    stream: String,
    shard_id: String,
    iterator_type: ShardIteratorType,
    batch_size: i32,
    interval: Duration,
}

impl Consumer {
    pub fn new(client: Arc<dyn Client>, config: &Config) -> Self {
        Self {
            client,
            stream: config.stream_name.clone(),
            shard_id: config.shard_id.clone(),
            iterator_type: config.iterator_type,
            batch_size: config.batch_size,
            interval: config.consume_interval,
        }
    }

    pub fn spawn(self, stop: StopListener) -> JoinHandle<LoopOutcome> {
        tokio::spawn(self.run(stop))
    }

    /// Follow one shard from its iterator until stopped, closed or a read fails.
    pub async fn run(self, stop: StopListener) -> LoopOutcome {
        let mut outcome = LoopOutcome::default();

        if let Err(err) = self.consume(&stop, &mut outcome).await {
            error!("{err}");
            outcome.failure = Some(err);
        }

        info!("Consumer stopped after {} record(s)", outcome.processed);
        outcome
    }

    async fn consume(&self, stop: &StopListener, outcome: &mut LoopOutcome) -> Result<()> {
        let iterator = self
            .client
            .get_shard_iterator(&self.stream, &self.shard_id, self.iterator_type)
            .await
            .map_err(Error::on(Operation::GetShardIterator, &self.stream))?
            .iterator
            .ok_or_else(|| Error::NoIterator {
                stream: self.stream.clone(),
                shard_id: self.shard_id.clone(),
            })?;
        debug!(
            "Reading shard `{}` from {}",
            self.shard_id, self.iterator_type
        );

        let mut next = self.read(&iterator, outcome).await?;

        while !stop.is_stopped() {
            let Some(iterator) = next.take() else {
                info!("Shard `{}` is closed", self.shard_id);
                break;
            };

            next = self.read(&iterator, outcome).await?;
            stop.sleep(self.interval).await;
        }

        Ok(())
    }

    /// One GetRecords call; returns the iterator for the following read.
    async fn read(&self, iterator: &str, outcome: &mut LoopOutcome) -> Result<Option<String>> {
        let output = self
            .client
            .get_records(iterator, self.batch_size)
            .await
            .map_err(Error::on(Operation::GetRecords, &self.stream))?;

        for record in output.records.iter() {
            info!("{}", record.payload());
        }
        outcome.processed += output.records.len();

        if let Some(millis) = output.millis_behind_latest {
            debug!("{millis}ms behind the tip of `{}`", self.shard_id);
        }

        Ok(output.next_iterator)
    }
}
