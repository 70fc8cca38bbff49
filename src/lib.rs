//! xjoin - external process results as query functions
//!
//! Lets a query's scoring and sorting read numbers computed by an external
//! process, joined to documents on a field, without the query engine
//! knowing the shape of those results.
//!
//! ```ignore
//! use xjoin::context::{ComponentRegistry, JoinComponent, QueryContext};
//! use xjoin::value_source::{JoinValueSourceParser, ParserConfig};
//!
//! let parser = JoinValueSourceParser::init(ParserConfig::for_component("xjoin"))?;
//! let source = parser.parse_call("xjoin(score)", &components, &context)?;
//! let values = source.values(&doc_values)?;
//! let score = values.value(doc)?;
//! ```

pub mod attribute;
pub mod cli;
pub mod context;
pub mod docvalues;
pub mod executor;
pub mod observability;
pub mod results;
pub mod value_source;
