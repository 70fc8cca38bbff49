//! Per-reader function values

use std::borrow::Cow;

use super::errors::{JoinError, JoinResult};
use super::source::JoinValueSource;
use crate::docvalues::{DocId, JoinFieldReader};

/// A join value source applied to the documents of one reader.
///
/// `exists` is cheap and never consults the results. `value` is only
/// computed for documents that carry a join value.
pub struct JoinValues<'a> {
    source: &'a JoinValueSource,
    reader: &'a dyn JoinFieldReader,
}

impl<'a> JoinValues<'a> {
    pub(crate) fn new(source: &'a JoinValueSource, reader: &'a dyn JoinFieldReader) -> Self {
        Self { source, reader }
    }

    /// The source these values come from
    pub fn source(&self) -> &JoinValueSource {
        self.source
    }

    /// Returns true if the document has a join value
    pub fn exists(&self, doc: DocId) -> bool {
        self.reader.join_value(doc).is_some()
    }

    /// The document's join key, decoded from UTF-8.
    ///
    /// Invalid sequences are replaced rather than rejected.
    pub fn join_key(&self, doc: DocId) -> Option<Cow<'a, str>> {
        self.reader.join_value(doc).map(String::from_utf8_lossy)
    }

    /// Value for a document, `None` if it has no join value
    pub fn value(&self, doc: DocId) -> JoinResult<Option<f64>> {
        let metrics = self.source.metrics_handle();
        metrics.record_evaluated();

        let Some(key) = self.join_key(doc) else {
            metrics.record_absent();
            return Ok(None);
        };
        self.source.value_for_key(&key).map(Some)
    }

    /// Value for a document that must have a join value
    pub fn double_val(&self, doc: DocId) -> JoinResult<f64> {
        self.value(doc)?.ok_or(JoinError::NoJoinValue(doc))
    }

    /// [`double_val`](Self::double_val) narrowed to `f32`
    pub fn float_val(&self, doc: DocId) -> JoinResult<f32> {
        self.double_val(doc).map(|v| v as f32)
    }

    /// `description=value` for one document, as shown in explain output
    pub fn describe(&self, doc: DocId) -> JoinResult<String> {
        let description = self.source.description();
        Ok(match self.value(doc)? {
            Some(v) => format!("{}={}", description, v),
            None => format!("{}=(missing)", description),
        })
    }
}
