//! Per-document join field values
//!
//! The document storage layer hands xjoin the raw bytes of each
//! document's join field. A document may have no value at all, which is
//! an ordinary case (documents outside the join scope).

mod binary;

pub use binary::BinaryDocValues;

/// Document identifier within one reader
pub type DocId = u32;

/// Read access to the raw join field bytes of each document
pub trait JoinFieldReader {
    /// Name of the field the values were read from
    fn field(&self) -> &str;

    /// Raw bytes of the join field, or `None` if the document has none
    fn join_value(&self, doc: DocId) -> Option<&[u8]>;

    /// One past the highest document id
    fn max_doc(&self) -> DocId;
}
