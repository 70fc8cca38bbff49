//! Observable xjoin events

use std::fmt;

use super::logger::Severity;

/// Events xjoin reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A value source parser was configured
    ParserInit,
    /// External results were published into a query context
    ResultsPublished,
    /// A value source was bound to published results
    SourceBound,
    /// The upstream component published nothing for this query
    ContextMissing,
    /// An attribute could not be read from an external result
    AttributeFailed,
    /// A batch evaluation finished
    EvalComplete,
    /// A failure could not be written to the command output
    ReportFailed,
}

impl Event {
    /// Returns the event name written to the log
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ParserInit => "XJOIN_PARSER_INIT",
            Event::ResultsPublished => "XJOIN_RESULTS_PUBLISHED",
            Event::SourceBound => "XJOIN_SOURCE_BOUND",
            Event::ContextMissing => "XJOIN_CONTEXT_MISSING",
            Event::AttributeFailed => "XJOIN_ATTRIBUTE_FAILED",
            Event::EvalComplete => "XJOIN_EVAL_COMPLETE",
            Event::ReportFailed => "XJOIN_REPORT_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ContextMissing | Event::AttributeFailed | Event::ReportFailed => {
                Severity::Error
            }
            Event::SourceBound | Event::ResultsPublished => Severity::Trace,
            Event::ParserInit | Event::EvalComplete => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
