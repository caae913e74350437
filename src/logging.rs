// ────────────────────────────────
// src/logging.rs
// Plain-text log lines: `<timestamp> - [<component>] - <message>`
// ────────────────────────────────
use anyhow::{anyhow, Result};
use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Clone)]
pub struct ComponentFormat {
    component: &'static str,
}

impl ComponentFormat {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    fn write_prefix(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        write!(
            writer,
            "{} - [{}] - ",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            self.component
        )
    }
}

impl<S, N> FormatEvent<S, N> for ComponentFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        self.write_prefix(&mut writer)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing(component: &'static str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(ComponentFormat::new(component))
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}
