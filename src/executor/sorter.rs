//! Sorting documents by a join value function
//!
//! Stable and deterministic. Documents without a value always sort last.
//! Values follow the IEEE 754 total order, so positive NaN sorts above infinity.

use std::cmp::Ordering;

use serde::Serialize;

use crate::docvalues::DocId;
use crate::value_source::{JoinResult, JoinValues};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// A document with its function value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDoc {
    pub doc: DocId,
    pub value: Option<f64>,
}

/// Scores and sorts documents
pub struct ScoreSorter;

impl ScoreSorter {
    /// Evaluate `values` for each document, in the given order.
    ///
    /// Stops at the first document whose value cannot be computed.
    pub fn score(values: &JoinValues<'_>, docs: &[DocId]) -> JoinResult<Vec<ScoredDoc>> {
        docs.iter()
            .map(|&doc| {
                Ok(ScoredDoc {
                    doc,
                    value: values.value(doc)?,
                })
            })
            .collect()
    }

    /// Sort scored documents by value
    pub fn sort(scored: &mut [ScoredDoc], direction: SortDirection) {
        scored.sort_by(|a, b| Self::compare(a.value, b.value, direction));
    }

    /// Score then sort
    pub fn rank(
        values: &JoinValues<'_>,
        docs: &[DocId],
        direction: SortDirection,
    ) -> JoinResult<Vec<ScoredDoc>> {
        let mut scored = Self::score(values, docs)?;
        Self::sort(&mut scored, direction);
        Ok(scored)
    }

    fn compare(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => {
                let ordering = x.total_cmp(&y);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            }
        }
    }
}
