use crate::channel::StopListener;
use crate::client::Client;
use crate::config::Config;
use crate::error::{Error, Operation};
use crate::session::LoopOutcome;

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Synthetic payload that grows by one character per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    buffer: String,
    suffix: char,
}

impl Message {
    pub fn new<T: Into<String>>(seed: T, suffix: char) -> Self {
        Self {
            buffer: seed.into(),
            suffix,
        }
    }

    /// Append the suffix and return the new payload.
    pub fn grow(&mut self) -> &str {
        self.buffer.push(self.suffix);
        self.buffer.as_str()
    }

    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }
}

pub struct Producer {
    client: Arc<dyn Client>,
    stream: String,
    partition_key: String,
    message: Message,
    interval: Duration,
}

impl Producer {
    pub fn new(client: Arc<dyn Client>, config: &Config) -> Self {
        Self {
            client,
            stream: config.stream_name.clone(),
            partition_key: config.partition_key.clone(),
            message: Message::new(config.seed.as_str(), config.suffix),
            interval: config.produce_interval,
        }
    }

    pub fn spawn(self, stop: StopListener) -> JoinHandle<LoopOutcome> {
        tokio::spawn(self.run(stop))
    }

    /// Put one record per interval until stopped or a put fails.
    pub async fn run(mut self, stop: StopListener) -> LoopOutcome {
        let mut outcome = LoopOutcome::default();

        while !stop.is_stopped() {
            let payload = self.message.grow();

            match self
                .client
                .put_record(&self.stream, payload.as_bytes(), &self.partition_key)
                .await
            {
                Ok(output) => {
                    outcome.processed += 1;
                    debug!(
                        "Produced `{payload}` to {} at {}",
                        output.shard_id, output.sequence_number
                    );
                }
                Err(err) => {
                    let err = Error::request(Operation::PutRecord, self.stream.as_str(), err);
                    error!("{err}");
                    outcome.failure = Some(err);
                    break;
                }
            }

            stop.sleep(self.interval).await;
        }

        info!("Producer stopped after {} record(s)", outcome.processed);
        outcome
    }
}
