//! Console logging for hosts without stdout.
//!
//! [`ConsoleLayer`] formats each tracing event into a single line and hands
//! it to a sink closure together with its level. The browser crate's sink
//! forwards to `console.debug/info/warn/error`.
//!
//! ```ignore
//! use rollcall_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new(|level, line| println!("{level} {line}"))
//!     .with_filter("rollcall_core=debug")
//!     .init()?;
//! ```

use std::fmt::Write as FmtWrite;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use crate::error::{FilterError, FilterResult};

type Sink = Arc<dyn Fn(&Level, &str) + Send + Sync>;

/// A tracing Layer that writes formatted lines to a sink.
pub struct ConsoleLayer {
    sink: Sink,
}

impl ConsoleLayer {
    pub fn new(sink: impl Fn(&Level, &str) + Send + Sync + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let mut line = format!("{}: {}", metadata.target(), visitor.message);
        if !visitor.fields.is_empty() {
            line.push(' ');
            line.push_str(&visitor.fields);
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                let _ = write!(&mut line, " ({})", spans.join(" > "));
            }
        }

        (self.sink)(metadata.level(), &line);
    }
}

/// Collects the message and `key=value` pairs of an event.
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn push_field(&mut self, name: &str, value: impl std::fmt::Display) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(&mut self.fields, "{}={}", name, value);
    }
}

impl Visit for LineVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(&mut self.message, "{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push_field(field.name(), value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push_field(field.name(), value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push_field(field.name(), value);
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.push_field(field.name(), value);
    }
}

/// Builder for installing the global subscriber with a [`ConsoleLayer`].
pub struct LoggingBuilder {
    sink: Sink,
    filter: String,
}

impl LoggingBuilder {
    pub fn new(sink: impl Fn(&Level, &str) + Send + Sync + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
            filter: "info".to_string(),
        }
    }

    /// Set the filter directive (e.g., "info", "rollcall_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Build the layer for manual composition.
    pub fn build_layer(&self) -> ConsoleLayer {
        ConsoleLayer {
            sink: Arc::clone(&self.sink),
        }
    }

    /// Install as the global default subscriber.
    ///
    /// Fails on an invalid filter directive or if a global subscriber is
    /// already set.
    pub fn init(self) -> FilterResult<()> {
        let filter = EnvFilter::try_new(&self.filter)
            .map_err(|e| FilterError::Logging(format!("invalid filter '{}': {}", self.filter, e)))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(self.build_layer())
            .try_init()
            .map_err(|e| FilterError::Logging(e.to_string()))
    }
}
