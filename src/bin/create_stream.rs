use kinesis_session::{lifecycle, Config, KinesisClient};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::new();
    let client = KinesisClient::builder()
        .await
        .region(config.region())
        .endpoint_url(config.endpoint_url())
        .build();

    match lifecycle::create_stream(
        &client,
        config.stream_name(),
        config.shard_count(),
        &config.wait_policy(),
    )
    .await
    {
        Ok(()) => match lifecycle::describe_stream(&client, config.stream_name()).await {
            Ok(description) => info!("Stream ARN: {}", description.arn()),
            Err(err) => error!("{err}"),
        },
        Err(err) => error!("{err}"),
    }
}
