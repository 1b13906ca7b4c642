//! Colorful console output for constraint construction.
//!
//! Provides a custom `tracing` layer that formats FlavorForge events with
//! colors on stderr, leaving stdout to the caller.
//!
//! ## Log Levels
//!
//! - **INFO**: Summaries (constraints built, skipped)
//! - **WARN**: Unknown constraint names that were skipped
//! - **DEBUG**: One line per constraint built
//! - **TRACE**: Individual observable resolutions

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "flavorforge=info";

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect. The filter
/// comes from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(FlavorConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

/// A tracing layer that formats FlavorForge events with colors.
pub struct FlavorConsoleLayer;

impl<S: Subscriber> Layer<S> for FlavorConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from workspace crates only
        if !metadata.target().starts_with("flavorforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{} {}", format_elapsed(), output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    constraint: Option<String>,
    family: Option<String>,
    observable: Option<String>,
    kinematics: Option<String>,
    options: Option<String>,
    error: Option<String>,
    built: Option<u64>,
    skipped: Option<u64>,
    observables: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "built" => self.built = Some(value),
            "skipped" => self.skipped = Some(value),
            "observables" => self.observables = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "message" => self.message = value,
            "constraint" => self.constraint = value,
            "family" => self.family = value,
            "observable" => self.observable = value,
            "kinematics" => self.kinematics = value,
            "options" => self.options = value,
            "error" => self.error = value,
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let message = v.message.as_deref().unwrap_or("");

    let icon = match level {
        Level::ERROR => "✗".bright_red().bold().to_string(),
        Level::WARN => "⚠".bright_yellow().bold().to_string(),
        Level::INFO => "■".bright_cyan().bold().to_string(),
        Level::DEBUG => "▶".bright_blue().to_string(),
        Level::TRACE => "·".bright_black().to_string(),
    };

    let mut output = if level == Level::TRACE {
        format!("{} {}", icon, message.bright_black())
    } else {
        format!("{} {}", icon, message.white().bold())
    };

    if let Some(ref constraint) = v.constraint {
        output.push_str(&format!(" │ {}", constraint.bright_yellow()));
    }
    if let Some(ref family) = v.family {
        output.push_str(&format!(" │ {}", family.bright_magenta()));
    }
    if let Some(ref observable) = v.observable {
        output.push_str(&format!(" │ {}", observable.white()));
    }
    for extra in [&v.kinematics, &v.options].into_iter().flatten() {
        if !extra.is_empty() {
            output.push_str(&format!(" [{}]", extra.bright_black()));
        }
    }
    if let Some(built) = v.built {
        output.push_str(&format!(" │ {} built", built.bright_green().bold()));
    }
    if let Some(skipped) = v.skipped {
        let count = if skipped > 0 {
            skipped.bright_yellow().bold().to_string()
        } else {
            skipped.white().to_string()
        };
        output.push_str(&format!(" │ {} skipped", count));
    }
    if let Some(observables) = v.observables {
        output.push_str(&format!(" │ {} observables", observables.white()));
    }
    if let Some(ref error) = v.error {
        output.push_str(&format!(" │ {}", error.bright_red()));
    }

    output
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_format_build_event() {
        let v = EventVisitor {
            message: Some("Building constraint".into()),
            constraint: Some("B^0_s->mu^+mu^-::BR_limit@CDF-2011".into()),
            family: Some("amoroso_limit".into()),
            ..EventVisitor::default()
        };
        assert_eq!(
            strip(&format_event(&v, Level::DEBUG)),
            "▶ Building constraint │ B^0_s->mu^+mu^-::BR_limit@CDF-2011 │ amoroso_limit"
        );
    }

    #[test]
    fn test_format_summary() {
        let v = EventVisitor {
            message: Some("Constraints built".into()),
            built: Some(12),
            skipped: Some(1),
            observables: Some(14),
            ..EventVisitor::default()
        };
        assert_eq!(
            strip(&format_event(&v, Level::INFO)),
            "■ Constraints built │ 12 built │ 1 skipped │ 14 observables"
        );
    }

    #[test]
    fn test_empty_extras_are_omitted() {
        let v = EventVisitor {
            message: Some("Resolving observable".into()),
            observable: Some("B_q->ll::BR".into()),
            kinematics: Some(String::new()),
            options: Some("l=mu,q=s".into()),
            ..EventVisitor::default()
        };
        assert_eq!(
            strip(&format_event(&v, Level::TRACE)),
            "· Resolving observable │ B_q->ll::BR [l=mu,q=s]"
        );
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(INIT.get().is_some());
    }
}
