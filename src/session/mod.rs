mod builder;
mod report;

use crate::channel::stop_channel;
use crate::client::Client;
use crate::config::Config;
use crate::consumer::Consumer;
use crate::error::{Error, Operation, Result};
use crate::lifecycle;
use crate::producer::Producer;

use serde::Deserialize;
use std::sync::Arc;
use tokio::task::JoinError;
use tokio::time::sleep;
use tracing::{error, info};

pub use builder::SessionBuilder;
pub use report::{LoopOutcome, RunReport};

/// What to do after a step of the session fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure and go on with the next step.
    #[default]
    Continue,
    /// Skip the remaining steps, delete the stream if it may exist, and
    /// return the failure.
    Abort,
}

/// Create a stream, exercise it with a producer and a consumer for a while,
/// then delete it.
pub struct Session {
    client: Arc<dyn Client>,
    config: Config,
}

impl Session {
    pub fn builder(client: Arc<dyn Client>) -> SessionBuilder {
        SessionBuilder::new(client)
    }

    fn client(&self) -> &dyn Client {
        self.client.as_ref()
    }

    /// Both loops are joined after the stop signal and before the delete
    /// request, so a loop blocked in a remote call holds up the delete too.
    pub async fn run(&self) -> Result<RunReport> {
        let stream = self.config.stream_name();
        let policy = self.config.wait_policy();
        let mut report = RunReport::new(stream);

        info!("Creating stream...");
        let created =
            lifecycle::create_stream(self.client(), stream, self.config.shard_count(), &policy)
                .await;
        let created = self.settle(created, &mut report);

        // Nothing to clean up when the create request itself was refused.
        if let Err(err @ Error::Request {
            operation: Operation::CreateStream,
            ..
        }) = created
        {
            return Err(err);
        }

        let exercised = match created {
            Ok(_) => self.exercise(&mut report).await,
            Err(err) => Err(err),
        };

        info!("Deleting stream...");
        let deleted = lifecycle::delete_stream(self.client(), stream, &policy).await;
        let deleted = self.settle(deleted, &mut report);

        exercised?;
        deleted?;

        info!(
            "Session on `{stream}` finished: {} produced, {} consumed, {} failure(s)",
            report.produced,
            report.consumed,
            report.failures.len()
        );
        Ok(report)
    }

    async fn exercise(&self, report: &mut RunReport) -> Result<()> {
        let stream = self.config.stream_name();

        info!("Listing all streams...");
        let listed = lifecycle::list_all_streams(self.client()).await;
        self.settle(listed, report)?;

        info!("Describing created stream");
        let described = lifecycle::describe_stream(self.client(), stream).await;
        self.settle(described, report)?;

        let (trigger, listener) = stop_channel();

        info!("Starting producer...");
        let producer = Producer::new(Arc::clone(&self.client), &self.config).spawn(listener.clone());
        info!("Starting consumer...");
        let consumer = Consumer::new(Arc::clone(&self.client), &self.config).spawn(listener);

        info!("Waiting {:?}...", self.config.run_duration());
        sleep(self.config.run_duration()).await;

        info!("Stopping producer and consumer...");
        trigger.stop();

        let produced = producer.await;
        let consumed = consumer.await;
        report.produced = self.collect(produced, report)?;
        report.consumed = self.collect(consumed, report)?;

        Ok(())
    }

    /// Log a failed step and apply the failure policy.
    fn settle<T>(&self, result: Result<T>, report: &mut RunReport) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                error!("{err}");
                self.record(err, report).map(|_| None)
            }
        }
    }

    fn record(&self, err: Error, report: &mut RunReport) -> Result<()> {
        report.failures.push(err.to_string());

        match self.config.on_failure() {
            FailurePolicy::Continue => Ok(()),
            FailurePolicy::Abort => Err(err),
        }
    }

    /// Loops log their own failures, so only the policy is applied here.
    fn collect(
        &self,
        joined: std::result::Result<LoopOutcome, JoinError>,
        report: &mut RunReport,
    ) -> Result<usize> {
        let LoopOutcome { processed, failure } = self
            .settle(joined.map_err(Error::from), report)?
            .unwrap_or_default();

        if let Some(err) = failure {
            self.record(err, report)?;
        }

        Ok(processed)
    }
}
