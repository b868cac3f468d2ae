use crate::client::Client;
use crate::error::{Error, Operation, Result};
use crate::types::{StreamDescription, StreamStatus};

use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// How long to keep polling for a stream state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub interval: Duration,
    /// `None` polls until the transition is observed, however long it takes.
    pub max_attempts: Option<usize>,
}

impl WaitPolicy {
    pub fn unbounded(interval: Duration) -> Self {
        Self {
            interval,
            max_attempts: None,
        }
    }

    pub fn bounded(interval: Duration, max_attempts: usize) -> Self {
        Self {
            interval,
            max_attempts: Some(max_attempts),
        }
    }

    fn exhausted(&self, attempts: usize) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}

/// Request a new stream and block until it is observed as ACTIVE.
pub async fn create_stream(
    client: &dyn Client,
    stream: &str,
    shard_count: i32,
    policy: &WaitPolicy,
) -> Result<()> {
    client
        .create_stream(stream, shard_count)
        .await
        .map_err(Error::on(Operation::CreateStream, stream))?;

    wait_until_active(client, stream, policy).await
}

pub async fn wait_until_active(client: &dyn Client, stream: &str, policy: &WaitPolicy) -> Result<()> {
    let mut attempts = 0;

    loop {
        attempts += 1;

        // Only ACTIVE ends the wait. Any other status, or a failed describe,
        // keeps polling.
        if stream_status(client, stream).await == Some(StreamStatus::Active) {
            info!("Stream `{stream}` is active");
            return Ok(());
        }

        if policy.exhausted(attempts) {
            return Err(Error::WaitExhausted {
                stream: stream.into(),
                target: "ACTIVE",
                attempts,
            });
        }

        info!("Waiting for stream to be created");
        sleep(policy.interval).await;
    }
}

/// Request deletion, block until describe stops answering, then list the
/// remaining streams.
pub async fn delete_stream(
    client: &dyn Client,
    stream: &str,
    policy: &WaitPolicy,
) -> Result<Vec<String>> {
    client
        .delete_stream(stream)
        .await
        .map_err(Error::on(Operation::DeleteStream, stream))?;

    wait_until_gone(client, stream, policy).await?;

    list_all_streams(client).await
}

/// Any describe failure is taken to mean the stream no longer exists.
pub async fn wait_until_gone(client: &dyn Client, stream: &str, policy: &WaitPolicy) -> Result<()> {
    let mut attempts = 0;

    loop {
        attempts += 1;

        match client.describe_stream(stream).await {
            Err(err) => {
                debug!("{err:#}");
                info!("Stream has been removed");
                return Ok(());
            }
            Ok(output) => {
                if output.description.status() == StreamStatus::Deleting {
                    info!("Still deleting stream");
                }
            }
        }

        if policy.exhausted(attempts) {
            return Err(Error::WaitExhausted {
                stream: stream.into(),
                target: "removed",
                attempts,
            });
        }

        sleep(policy.interval).await;
    }
}

/// Single describe call; `None` when it fails.
pub async fn stream_status(client: &dyn Client, stream: &str) -> Option<StreamStatus> {
    match client.describe_stream(stream).await {
        Ok(output) => Some(output.description.status()),
        Err(err) => {
            error!("{}", Error::request(Operation::DescribeStream, stream, err));
            None
        }
    }
}

pub async fn list_all_streams(client: &dyn Client) -> Result<Vec<String>> {
    let mut stream_names: Vec<String> = vec![];
    let mut exclusive_start: Option<String> = None;

    loop {
        let mut output = client
            .list_streams(exclusive_start.take())
            .await
            .map_err(Error::on(Operation::ListStreams, "*"))?;

        let has_more = output.has_more && !output.stream_names.is_empty();
        stream_names.append(&mut output.stream_names);

        if !has_more {
            break;
        }
        exclusive_start = stream_names.last().cloned();
    }

    info!("Streams: {stream_names:?}");
    Ok(stream_names)
}

pub async fn describe_stream(client: &dyn Client, stream: &str) -> Result<StreamDescription> {
    let description = client
        .describe_stream(stream)
        .await
        .map_err(Error::on(Operation::DescribeStream, stream))?
        .description;

    info!("{:#?}", description);
    Ok(description)
}
