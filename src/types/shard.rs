use aws_sdk_kinesis::types;
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShardSummary {
    id: String,
    parent: Option<String>,
}

impl ShardSummary {
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}

impl From<types::Shard> for ShardSummary {
    fn from(shard: types::Shard) -> ShardSummary {
        ShardSummary {
            id: shard.shard_id,
            parent: shard.parent_shard_id,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sdk_shard(id: &str, parent: Option<&str>) -> types::Shard {
        types::Shard::builder()
            .shard_id(id)
            .set_parent_shard_id(parent.map(String::from))
            .hash_key_range(
                types::HashKeyRange::builder()
                    .starting_hash_key("0")
                    .ending_hash_key("340282366920938463463374607431768211455")
                    .build()
                    .unwrap(),
            )
            .sequence_number_range(
                types::SequenceNumberRange::builder()
                    .starting_sequence_number("49590338271490256608559692538361571095921575989136588898")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn it_converts_from_sdk_shard() {
        let root = ShardSummary::from(sdk_shard("shardId-000000000000", None));
        assert_eq!(root.id(), "shardId-000000000000");
        assert!(root.parent().is_none());

        let child = ShardSummary::from(sdk_shard(
            "shardId-000000000001",
            Some("shardId-000000000000"),
        ));
        assert_eq!(child.id(), "shardId-000000000001");
        assert_eq!(child.parent(), Some("shardId-000000000000"));
    }
}
