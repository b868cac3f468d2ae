use kinesis_session::{lifecycle, Config, KinesisClient};
use tracing::error;
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

    if let Err(err) = lifecycle::list_all_streams(&client).await {
        error!("{err}");
    }
}
