//! Query-time binding to upstream join components
//!
//! An upstream join component runs the external process and publishes its
//! results into the [`QueryContext`] under the component's results tag.
//! The value source parser receives both the [`ComponentRegistry`] and
//! the context explicitly; nothing is looked up from global state.

mod component;
mod query_context;

pub use component::{ComponentRegistry, JoinComponent};
pub use query_context::QueryContext;
