use super::{
    Client, DescribeStreamOutput, GetIteratorOutput, GetRecordsOutput, ListStreamsOutput,
    PutRecordOutput,
};
use crate::error::Operation;
use crate::types::{Records, ShardIteratorType, StreamDescription, StreamStatus};

use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

type Reply<T> = std::result::Result<T, String>;

/// Scripted replies handed out in order, then the fallback forever.
#[derive(Debug)]
pub struct Replies<T: Clone> {
    queue: VecDeque<T>,
    fallback: Option<T>,
}

impl<T: Clone> Replies<T> {
    pub fn new(fallback: Option<T>) -> Self {
        Self {
            queue: VecDeque::new(),
            fallback,
        }
    }

    pub fn push(&mut self, item: T) {
        self.queue.push_back(item);
    }

    pub fn repeat(&mut self, item: T) {
        self.fallback = Some(item);
    }
}

impl<T: Clone> Iterator for Replies<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front().or_else(|| self.fallback.clone())
    }
}

#[derive(Debug)]
struct State {
    create: Replies<Reply<()>>,
    list: Replies<Reply<Vec<String>>>,
    describe: Replies<Reply<StreamStatus>>,
    delete: Replies<Reply<()>>,
    iterator: Reply<Option<String>>,
    records: Replies<Reply<Vec<String>>>,
    put: Replies<Reply<()>>,
    closes_after: Option<usize>,
    calls: Vec<Operation>,
    payloads: Vec<String>,
    iterators: Vec<String>,
}

/// In-memory stand-in for the streaming service.
///
/// Describe answers `ResourceNotFoundException` once its script runs out,
/// every other operation succeeds unless told otherwise. Shard iterators are
/// `iter_0`, `iter_1`, ... with each read handing out the next one.
#[derive(Debug)]
pub struct MockClient {
    state: Mutex<State>,
}

impl MockClient {
    pub fn new() -> Self {
        let state = State {
            create: Replies::new(Some(Ok(()))),
            list: Replies::new(Some(Ok(vec![]))),
            describe: Replies::new(Some(Err("ResourceNotFoundException".into()))),
            delete: Replies::new(Some(Ok(()))),
            iterator: Ok(Some("iter_0".into())),
            records: Replies::new(Some(Ok(vec![]))),
            put: Replies::new(Some(Ok(()))),
            closes_after: None,
            calls: vec![],
            payloads: vec![],
            iterators: vec![],
        };

        Self {
            state: Mutex::new(state),
        }
    }

    pub fn push_describe(&self, reply: Reply<StreamStatus>) -> &Self {
        self.state.lock().unwrap().describe.push(reply);
        self
    }

    pub fn repeat_describe(&self, reply: Reply<StreamStatus>) -> &Self {
        self.state.lock().unwrap().describe.repeat(reply);
        self
    }

    pub fn fail_create(&self, message: &str) -> &Self {
        self.state.lock().unwrap().create.push(Err(message.into()));
        self
    }

    pub fn push_list(&self, reply: Reply<Vec<&str>>) -> &Self {
        let reply = reply.map(|names| names.into_iter().map(String::from).collect());
        self.state.lock().unwrap().list.push(reply);
        self
    }

    pub fn fail_delete(&self, message: &str) -> &Self {
        self.state.lock().unwrap().delete.push(Err(message.into()));
        self
    }

    pub fn set_iterator(&self, reply: Reply<Option<&str>>) -> &Self {
        self.state.lock().unwrap().iterator = reply.map(|it| it.map(String::from));
        self
    }

    pub fn push_records(&self, reply: Reply<Vec<&str>>) -> &Self {
        let reply = reply.map(|payloads| payloads.into_iter().map(String::from).collect());
        self.state.lock().unwrap().records.push(reply);
        self
    }

    /// The read numbered `reads` (1-based) returns no next iterator.
    pub fn close_shard_after(&self, reads: usize) -> &Self {
        self.state.lock().unwrap().closes_after = Some(reads);
        self
    }

    /// The first `successes` puts succeed and the following one fails.
    pub fn fail_put_after(&self, successes: usize, message: &str) -> &Self {
        let mut state = self.state.lock().unwrap();
        for _ in 0..successes {
            state.put.push(Ok(()));
        }
        state.put.push(Err(message.into()));
        self
    }

    pub fn calls(&self) -> Vec<Operation> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, operation: Operation) -> usize {
        self.calls().into_iter().filter(|op| *op == operation).count()
    }

    pub fn payloads(&self) -> Vec<String> {
        self.state.lock().unwrap().payloads.clone()
    }

    pub fn iterators(&self) -> Vec<String> {
        self.state.lock().unwrap().iterators.clone()
    }

    fn record_call(&self, operation: Operation) {
        self.state.lock().unwrap().calls.push(operation);
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

fn into_result<T>(reply: Option<Reply<T>>) -> Result<T> {
    match reply {
        Some(Ok(value)) => Ok(value),
        Some(Err(message)) => Err(anyhow::anyhow!(message)),
        None => Err(anyhow::anyhow!("No reply is scripted")),
    }
}

#[async_trait]
impl Client for MockClient {
    async fn create_stream(&self, _stream: &str, shard_count: i32) -> Result<()> {
        assert!(shard_count > 0);
        self.record_call(Operation::CreateStream);
        into_result(self.state.lock().unwrap().create.next())
    }

    async fn list_streams(&self, _exclusive_start: Option<String>) -> Result<ListStreamsOutput> {
        self.record_call(Operation::ListStreams);
        into_result(self.state.lock().unwrap().list.next()).map(|stream_names| ListStreamsOutput {
            stream_names,
            has_more: false,
        })
    }

    async fn describe_stream(&self, stream: &str) -> Result<DescribeStreamOutput> {
        self.record_call(Operation::DescribeStream);
        into_result(self.state.lock().unwrap().describe.next()).map(|status| DescribeStreamOutput {
            description: StreamDescription::new(stream, status),
        })
    }

    async fn delete_stream(&self, _stream: &str) -> Result<()> {
        self.record_call(Operation::DeleteStream);
        into_result(self.state.lock().unwrap().delete.next())
    }

    async fn get_shard_iterator(
        &self,
        _stream: &str,
        _shard_id: &str,
        _iterator_type: ShardIteratorType,
    ) -> Result<GetIteratorOutput> {
        self.record_call(Operation::GetShardIterator);
        let reply = self.state.lock().unwrap().iterator.clone();
        into_result(Some(reply)).map(|iterator| GetIteratorOutput { iterator })
    }

    async fn get_records(&self, iterator: &str, limit: i32) -> Result<GetRecordsOutput> {
        self.record_call(Operation::GetRecords);

        let mut state = self.state.lock().unwrap();
        state.iterators.push(iterator.to_string());
        let reads = state.iterators.len();

        let payloads = into_result(state.records.next())?;
        assert!(payloads.len() <= limit as usize);

        let next_iterator = match state.closes_after {
            Some(last) if reads >= last => None,
            _ => Some(format!("iter_{reads}")),
        };

        Ok(GetRecordsOutput {
            records: Records::from(payloads.iter().map(String::as_str)),
            next_iterator,
            millis_behind_latest: Some(0),
        })
    }

    async fn put_record(
        &self,
        _stream: &str,
        data: &[u8],
        partition_key: &str,
    ) -> Result<PutRecordOutput> {
        self.record_call(Operation::PutRecord);

        let mut state = self.state.lock().unwrap();
        into_result(state.put.next())?;
        state.payloads.push(String::from_utf8_lossy(data).into_owned());

        Ok(PutRecordOutput {
            shard_id: "shardId-000000000000".into(),
            sequence_number: format!("{}-{partition_key}", state.payloads.len()),
        })
    }
}

#[test]
fn replies_implement_iterator_trait() {
    let mut replies: Replies<&str> = Replies::new(None);
    replies.push("first");
    replies.push("second");

    assert_eq!(replies.next(), Some("first"));
    assert_eq!(replies.next(), Some("second"));
    assert_eq!(replies.next(), None);

    replies.repeat("again");
    assert_eq!(replies.next(), Some("again"));
    assert_eq!(replies.next(), Some("again"));
}

#[tokio::test]
async fn mock_client_hands_out_successive_iterators() {
    let client = MockClient::new();
    client.push_records(Ok(vec!["a"])).close_shard_after(2);

    let first = client.get_records("iter_0", 1).await.unwrap();
    assert_eq!(first.records.payloads(), ["a"]);
    assert_eq!(first.next_iterator.as_deref(), Some("iter_1"));

    let second = client.get_records("iter_1", 1).await.unwrap();
    assert!(second.records.is_empty());
    assert!(second.next_iterator.is_none());

    assert_eq!(client.iterators(), ["iter_0", "iter_1"]);
}
