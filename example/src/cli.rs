use clap::Parser;
use range_calendar::CalendarMonth;
use tracing_subscriber::EnvFilter;

use crate::DemoOptions;

/// Pick a stay on a scrolling range calendar.
#[derive(Parser, Debug)]
#[command(name = "stay_picker", version, about, long_about = None)]
pub(crate) struct DemoArgs {
    /// First month to show, as YYYY-MM (defaults to the current month)
    #[arg(long, value_name = "YYYY-MM")]
    pub initial_month: Option<CalendarMonth>,
    /// Months rendered before the first month
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub months_before: i32,
    /// Months rendered after the first month
    #[arg(long, default_value_t = 6, allow_negative_numbers = true)]
    pub months_after: i32,
    /// Reject days before today
    #[arg(long)]
    pub disable_past: bool,
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DemoArgs {
    pub(crate) fn into_options(self) -> DemoOptions {
        DemoOptions {
            initial_month: self.initial_month,
            months_before: self.months_before,
            months_after: self.months_after,
            disable_past: self.disable_past,
        }
    }
}

fn default_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "error,tessera_ui=info,stay_picker=info",
        1 => "warn,tessera_ui=info,stay_picker=debug,range_calendar=debug,range_calendar_core=debug",
        _ => "info,stay_picker=trace,range_calendar=trace,range_calendar_core=trace",
    }
}

/// `RUST_LOG` wins over `-v`.
pub(crate) fn init_tracing(verbose: u8) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new(default_directives(verbose)) {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
