//! xjoin value source parser
//!
//! Configured once at setup; turns each `xjoin(...)` function call of a
//! query into a [`JoinValueSource`] bound to that query's external results.
//!
//! # Resolution order
//!
//! 1. Component and attribute come from the setup configuration
//! 2. Whatever is missing is read positionally from the call arguments,
//!    component first; arguments left over are a syntax error
//! 3. The component names the join field and the results tag
//! 4. The results must already be published in the query context

use super::args::FunctionArgs;
use super::config::ParserConfig;
use super::errors::{JoinError, JoinResult};
use super::source::JoinValueSource;
use crate::attribute::AttributeResolver;
use crate::context::{ComponentRegistry, QueryContext};
use crate::observability::{Event, Logger};
use crate::results::AccessorCheck;

/// Builds join value sources from function calls
#[derive(Debug)]
pub struct JoinValueSourceParser {
    config: ParserConfig,
    resolver: AttributeResolver,
}

impl JoinValueSourceParser {
    /// Function name the parser is registered under
    pub const NAME: &'static str = "xjoin";

    /// Validate the configuration and create the parser.
    ///
    /// Fails if neither component nor attribute is configured.
    pub fn init(config: ParserConfig) -> JoinResult<Self> {
        config.validate()?;

        let default_value = config.default_value.to_string();
        Logger::event(
            Event::ParserInit,
            &[
                ("attribute", config.attribute.as_deref().unwrap_or("(argument)")),
                ("component", config.component.as_deref().unwrap_or("(argument)")),
                ("default_value", default_value.as_str()),
            ],
        );

        Ok(Self {
            config,
            resolver: AttributeResolver::new(),
        })
    }

    /// Returns the setup configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Bind a value source for one function call of one query
    pub fn parse(
        &self,
        args: &mut FunctionArgs,
        components: &ComponentRegistry,
        context: &QueryContext,
    ) -> JoinResult<JoinValueSource> {
        let component_name = match &self.config.component {
            Some(name) => name.clone(),
            None => args.parse_arg()?,
        };
        let attribute = match &self.config.attribute {
            Some(attr) => attr.clone(),
            None => args.parse_arg()?,
        };
        args.finish()?;

        let component = components.get(&component_name)?;
        let query_id = context.query_id.to_string();

        let Some(results) = context.results_for(component) else {
            Logger::event(
                Event::ContextMissing,
                &[
                    ("component", component.name()),
                    ("query_id", query_id.as_str()),
                    ("tag", component.results_tag()),
                ],
            );
            return Err(JoinError::MissingContext {
                component: component.name().to_string(),
                tag: component.results_tag().to_string(),
            });
        };

        let accessor = self.resolver.resolve(&attribute);
        if results.check_accessor(&accessor) == AccessorCheck::Undeclared {
            Logger::event(
                Event::AttributeFailed,
                &[
                    ("accessor", accessor.as_str()),
                    ("attribute", attribute.as_str()),
                    ("component", component.name()),
                    ("query_id", query_id.as_str()),
                ],
            );
            return Err(JoinError::AttributeResolution {
                attribute,
                accessor: accessor.to_string(),
                key: None,
                reason: "result type does not declare this accessor".to_string(),
            });
        }

        let source = JoinValueSource::resolved(component.join_field(), results, attribute, accessor)
            .with_default_value(self.config.default_value);

        let store_id = source.store_id().to_string();
        Logger::event(
            Event::SourceBound,
            &[
                ("component", component.name()),
                ("description", source.description().as_str()),
                ("query_id", query_id.as_str()),
                ("store_id", store_id.as_str()),
            ],
        );

        Ok(source)
    }

    /// Parse the call text and bind a value source
    pub fn parse_call(
        &self,
        call: &str,
        components: &ComponentRegistry,
        context: &QueryContext,
    ) -> JoinResult<JoinValueSource> {
        let mut args = FunctionArgs::parse(call)?;
        if let Some(name) = args.function() {
            if name != Self::NAME {
                return Err(JoinError::Syntax(format!(
                    "expected {}(...), found {}(...)",
                    Self::NAME,
                    name
                )));
            }
        }
        self.parse(&mut args, components, context)
    }
}
