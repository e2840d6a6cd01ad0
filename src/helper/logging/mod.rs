use std::io;

use color_eyre::eyre::WrapErr;
use color_eyre::{eyre, Report};
use tracing::field::{display, DisplayValue};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{format, time};

use crate::config::tracing_config::{ErrorLogStyle, TracingConfig};

pub mod event_targets;

/// Logs an expression's string representation and its value, then returns the value.
///
/// ### Examples:
///
/// `let size = log_expr_val!(config.size)` prints ```eval `config.size` => [1280, 720]``` (using [Debug]) and returns `config.size`
#[macro_export]
macro_rules! log_expr_val {
    ($expression:expr) => {
        $crate::log_expr_val!($expression, expr, val, "eval `{expr}` => {val:?}")
    };
    ($expression:expr, $expression_name:ident, $value_name:ident, $format_and_args:tt) => {{
        let $value_name = $expression;
        tracing::trace!(
            target: $crate::helper::logging::event_targets::BACKEND_INIT,
            $format_and_args,
            $expression_name = stringify!($expression),
            $value_name = $value_name
        );
        $value_name
    }};
}

/// Installs the global [tracing] subscriber: a compact stdout layer filtered by [EnvFilter](tracing_subscriber::EnvFilter), plus the [tracing_error::ErrorLayer] so [color_eyre] reports carry span traces
///
/// `RUST_LOG` takes precedence over [TracingConfig::default_level]; targets disabled in [TracingConfig::target_filters] are turned off either way
pub fn init_tracing(config: &TracingConfig) -> eyre::Result<()> {
    use tracing_error::*;
    use tracing_subscriber::{fmt, layer::SubscriberExt, prelude::*, EnvFilter};

    let standard_format = format()
        .compact()
        .with_ansi(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_target(false)
        .with_level(true)
        .with_timer(time::time())
        .with_source_location(false);

    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(config.default_level).into())
        .from_env_lossy();
    for directive in filter_directives(config)? {
        filter = filter.add_directive(directive);
    }

    let standard_layer = fmt::layer()
        .with_span_events(FmtSpan::ACTIVE)
        .log_internal_errors(true)
        .event_format(standard_format)
        .with_writer(io::stdout)
        .with_filter(filter);

    let error_layer = ErrorLayer::default();

    tracing_subscriber::registry()
        .with(standard_layer)
        .with(error_layer)
        .try_init()
        .wrap_err("could not install global tracing subscriber")?;

    Ok(())
}

/// Converts the configured target filters into [Directive]s (`target=off` or `target=trace`)
pub fn filter_directives(config: &TracingConfig) -> eyre::Result<Vec<Directive>> {
    config
        .target_filters
        .iter()
        .map(|filter| {
            let level = if filter.enabled { LevelFilter::TRACE } else { LevelFilter::OFF };
            format!("{}={}", filter.target, level)
                .parse::<Directive>()
                .wrap_err_with(|| format!("invalid log target filter {:?}", filter.target))
        })
        .collect()
}

/// Formats a report in whichever way the app is configured to log errors, for use as a [tracing] field
pub fn format_error(report: &Report, style: ErrorLogStyle) -> DisplayValue<String> {
    display(format_error_string(report, style))
}

pub fn format_error_string(report: &Report, style: ErrorLogStyle) -> String {
    match style {
        ErrorLogStyle::Short => format!("{}", report),
        ErrorLogStyle::ShortWithCause => format!("{:#}", report),
        ErrorLogStyle::WithBacktrace => format!("{:?}", report),
        ErrorLogStyle::Debug => format!("{:#?}", report),
    }
}
