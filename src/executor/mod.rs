//! Query-side consumers of join value functions
//!
//! Sort expressions and boost functions see an xjoin value source only as
//! a numeric function with an existence predicate.

mod sorter;

pub use sorter::{ScoreSorter, ScoredDoc, SortDirection};
