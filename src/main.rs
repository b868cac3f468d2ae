use kinesis_session::{Config, KinesisClient, Session};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Hello Kinesis");

    let config = Config::new();
    let client = KinesisClient::builder()
        .await
        .region(config.region())
        .endpoint_url(config.endpoint_url())
        .build();

    let session = Session::builder(Arc::new(client)).set_config(config).build();
    let report = session.run().await?;

    info!("{}", serde_json::to_string(&report)?);
    Ok(())
}
