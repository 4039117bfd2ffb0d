mod app;
#[cfg(not(target_os = "android"))]
mod cli;

use std::sync::OnceLock;

use range_calendar::CalendarMonth;
use tessera_ui::{EntryPoint, renderer::TesseraConfig};

use crate::app::app;

/// Calendar settings picked at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOptions {
    /// Month shown first; the current month when `None`.
    pub initial_month: Option<CalendarMonth>,
    /// Months rendered before the initial month.
    pub months_before: i32,
    /// Months rendered after the initial month.
    pub months_after: i32,
    /// Reject days before today.
    pub disable_past: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            initial_month: None,
            months_before: 0,
            months_after: 6,
            disable_past: false,
        }
    }
}

static OPTIONS: OnceLock<DemoOptions> = OnceLock::new();

pub(crate) fn options() -> DemoOptions {
    OPTIONS.get().cloned().unwrap_or_default()
}

#[tessera_ui::entry]
pub fn run() -> EntryPoint {
    let config = TesseraConfig {
        window_title: "Choose your stay".to_string(),
        ..Default::default()
    };
    EntryPoint::new(app)
        .package(tessera_components::ComponentsPackage)
        .config(config)
}

#[cfg(not(target_os = "android"))]
pub fn desktop_main() -> anyhow::Result<()> {
    use clap::Parser as _;

    let args = cli::DemoArgs::parse();
    cli::init_tracing(args.verbose);
    let options = args.into_options();
    tracing::info!(?options, "starting stay picker");
    if OPTIONS.set(options).is_err() {
        tracing::warn!("demo options were already set");
    }
    run().run_desktop()?;
    Ok(())
}
