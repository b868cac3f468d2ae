use crate::error::Error;

use serde::Serialize;

/// What a background loop managed before it ended.
#[derive(Debug, Default)]
pub struct LoopOutcome {
    pub processed: usize,
    pub failure: Option<Error>,
}

/// Summary of one session, logged once the stream is gone.
#[derive(Debug, Default, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub stream: String,
    pub produced: usize,
    pub consumed: usize,
    pub failures: Vec<String>,
}

impl RunReport {
    pub fn new<T: Into<String>>(stream: T) -> Self {
        Self {
            stream: stream.into(),
            ..Self::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
