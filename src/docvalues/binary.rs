//! In-memory binary doc values

use serde_json::Value;

use super::{DocId, JoinFieldReader};

/// Binary doc values for one field, held in memory.
///
/// Document ids are positions: the first pushed value belongs to doc 0.
#[derive(Debug, Clone, Default)]
pub struct BinaryDocValues {
    field: String,
    values: Vec<Option<Vec<u8>>>,
}

impl BinaryDocValues {
    /// Creates empty doc values for a field
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            values: Vec::new(),
        }
    }

    /// Append the value for the next document and return its id
    pub fn push(&mut self, value: Option<impl Into<Vec<u8>>>) -> DocId {
        let doc = self.values.len() as DocId;
        self.values.push(value.map(Into::into));
        doc
    }

    /// Build doc values for `field` from JSON document bodies.
    ///
    /// Strings are taken as-is, numbers and booleans in their display form.
    /// Missing fields, nulls, arrays and objects have no join value.
    pub fn from_documents<'a>(
        field: impl Into<String>,
        documents: impl IntoIterator<Item = &'a Value>,
    ) -> Self {
        let mut values = Self::new(field);
        for doc in documents {
            let encoded = doc.get(&values.field).and_then(Self::encode);
            values.push(encoded);
        }
        values
    }

    fn encode(value: &Value) -> Option<Vec<u8>> {
        match value {
            Value::String(s) => Some(s.as_bytes().to_vec()),
            Value::Number(n) => Some(n.to_string().into_bytes()),
            Value::Bool(b) => Some(b.to_string().into_bytes()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Returns the number of documents
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no documents
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl JoinFieldReader for BinaryDocValues {
    fn field(&self) -> &str {
        &self.field
    }

    fn join_value(&self, doc: DocId) -> Option<&[u8]> {
        self.values
            .get(doc as usize)
            .and_then(|v| v.as_deref())
    }

    fn max_doc(&self) -> DocId {
        self.values.len() as DocId
    }
}
