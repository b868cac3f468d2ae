use super::Record;

use serde::Serialize;
use std::slice::Iter;

#[derive(Debug, Default, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Records {
    records: Vec<Record>,
}

impl Records {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> Iter<'_, Record> {
        self.records.iter()
    }

    #[cfg(test)]
    pub fn payloads(&self) -> Vec<String> {
        self.records.iter().map(|r| r.payload().into_owned()).collect()
    }
}

impl<I, T> From<I> for Records
where
    I: IntoIterator<Item = T>,
    T: Into<Record>,
{
    fn from(values: I) -> Records {
        let records = values.into_iter().map(|v| v.into()).collect();
        Records { records }
    }
}
