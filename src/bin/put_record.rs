use kinesis_session::{Client, Config, KinesisClient};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;
use ulid::Ulid;

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

    let payload = Ulid::new().to_string();

    match client
        .put_record(
            config.stream_name(),
            payload.as_bytes(),
            config.partition_key(),
        )
        .await
    {
        Ok(output) => info!(
            "Put `{payload}` to {} at {}",
            output.shard_id, output.sequence_number
        ),
        Err(err) => error!("{:#?}", err),
    }
}
