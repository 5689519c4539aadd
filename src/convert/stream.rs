use crate::errors::AppResult;
use crate::models::Record;
use serde::ser::{Error as _, SerializeSeq};
use serde::{Serialize, Serializer};
use std::cell::RefCell;

/// Serializes a lazy record stream as a sequence without collecting it.
///
/// Each record is pulled from the wrapped iterator while the serializer is
/// writing, so the full record set never resides in memory. The sequence
/// length is reported as unknown; streaming encoders such as `serde_json`
/// emit elements incrementally either way.
///
/// A `StreamArray` is single-use: the first serialization consumes the
/// iterator, and a second attempt fails. An `Err` item from the stream
/// aborts serialization with that error's message.
pub struct StreamArray<I> {
    rows: RefCell<Option<I>>,
}

impl<I> StreamArray<I> {
    pub fn new(rows: I) -> Self {
        Self {
            rows: RefCell::new(Some(rows)),
        }
    }
}

impl<I> Serialize for StreamArray<I>
where
    I: Iterator<Item = AppResult<Record>>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows = self
            .rows
            .borrow_mut()
            .take()
            .ok_or_else(|| S::Error::custom("record stream already consumed"))?;

        let mut seq = serializer.serialize_seq(None)?;
        for row in rows {
            let record = row.map_err(S::Error::custom)?;
            seq.serialize_element(&record)?;
        }
        seq.end()
    }
}
