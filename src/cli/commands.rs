//! CLI command implementations
//!
//! `eval` plays every collaborator of the value source in one process:
//! the upstream component publishing results, the document store
//! providing join values and the scorer consuming the function.

use std::io::{self, Write};

use serde_json::{json, Value};

use super::args::{Cli, Command, EvalArgs};
use super::errors::CliResult;
use super::io::{read_documents, read_results, write_error, write_rows};
use crate::context::{ComponentRegistry, JoinComponent, QueryContext};
use crate::docvalues::{BinaryDocValues, DocId, JoinFieldReader};
use crate::executor::{ScoreSorter, ScoredDoc};
use crate::observability::{Event, Logger};
use crate::value_source::{FunctionArgs, JoinValueSourceParser, ParserConfig};

/// Parse arguments, run, and report failures as a JSON error object
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    Logger::set_min_severity(cli.log_level.severity());

    report(run_command(cli.command), &mut io::stdout())
}

/// Write a failed result to `out` as a JSON error object.
///
/// The command's own error is always returned, even if writing it fails.
fn report<W: Write>(result: CliResult<()>, out: &mut W) -> CliResult<()> {
    if let Err(e) = &result {
        if let Err(write_failure) = write_error(out, e.code_str(), e.message()) {
            let reason = write_failure.to_string();
            Logger::event(
                Event::ReportFailed,
                &[("code", e.code_str()), ("reason", reason.as_str())],
            );
        }
    }
    result
}

/// Run one command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Eval(args) => {
            let rows = eval(&args)?;
            write_rows(&rows)
        }
    }
}

/// Evaluate the xjoin function for every document and return one row each
pub fn eval(args: &EvalArgs) -> CliResult<Vec<Value>> {
    let store = read_results(&args.results)?;
    let documents = read_documents(&args.docs)?;

    let component = JoinComponent::new(args.component.clone(), args.field.clone());
    let mut components = ComponentRegistry::new();
    components.register(component.clone())?;

    let mut context = QueryContext::new();
    context.publish(component.results_tag(), store);

    let mut config = ParserConfig::for_component(args.component.clone())
        .with_default_value(args.default_value);
    config.attribute = args.attribute.clone();
    let parser = JoinValueSourceParser::init(config)?;

    let source = match &args.call {
        Some(call) => parser.parse_call(call, &components, &context)?,
        None => parser.parse(&mut FunctionArgs::default(), &components, &context)?,
    };

    let doc_values = BinaryDocValues::from_documents(args.field.clone(), &documents);
    let values = source.values(&doc_values)?;

    let docs: Vec<DocId> = (0..doc_values.max_doc()).collect();
    let scored = match args.sort {
        Some(direction) => ScoreSorter::rank(&values, &docs, direction)?,
        None => ScoreSorter::score(&values, &docs)?,
    };

    let rows = scored
        .iter()
        .map(|s| row(s, &doc_values))
        .collect();

    let query_id = context.query_id.to_string();
    let metrics = serde_json::to_string(&source.metrics())?;
    Logger::event(
        Event::EvalComplete,
        &[
            ("description", source.description().as_str()),
            ("metrics", metrics.as_str()),
            ("query_id", query_id.as_str()),
        ],
    );

    Ok(rows)
}

fn row(scored: &ScoredDoc, doc_values: &BinaryDocValues) -> Value {
    let key = doc_values
        .join_value(scored.doc)
        .map(|raw| String::from_utf8_lossy(raw).into_owned());
    let exists = key.is_some();
    json!({
        "doc": scored.doc,
        "key": key,
        "exists": exists,
        "value": scored.value,
    })
}
