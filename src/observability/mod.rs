//! Observability for xjoin
//!
//! - Structured JSON log lines, one event per line
//! - Typed events
//! - Per-value-source counters
//!
//! Nothing here influences evaluation. Per-document paths only touch
//! counters; log lines are written at setup, binding and failure.
//!
//! ```ignore
//! use xjoin::observability::{Event, Logger};
//!
//! Logger::event(Event::SourceBound, &[("component", "xjoin"), ("field", "id")]);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{JoinMetrics, MetricsSnapshot};
