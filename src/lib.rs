pub mod channel;
pub mod client;
pub mod config;
pub mod consumer;
pub mod error;
pub mod lifecycle;
pub mod producer;
pub mod session;
pub mod types;

pub use client::{Client, KinesisClient};
pub use config::Config;
pub use error::{Error, Result};
pub use session::{FailurePolicy, RunReport, Session};

pub const ENV_KINESIS_ENDPOINT_URL: &str = "KINESIS_ENDPOINT_URL";
pub const ENV_CONFIG_PATH: &str = "KINESIS_SESSION_CONFIG";
