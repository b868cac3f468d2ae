mod record;
mod records;
mod shard;
mod shard_iterator_type;
mod stream_description;
mod stream_status;

pub use record::Record;
pub use records::Records;
pub use shard::ShardSummary;
pub use shard_iterator_type::ShardIteratorType;
pub use stream_description::StreamDescription;
pub use stream_status::StreamStatus;

use aws_sdk_kinesis::primitives;
use chrono::{DateTime, Utc};

fn into_chrono(datetime: primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(datetime.secs(), datetime.subsec_nanos())
}
