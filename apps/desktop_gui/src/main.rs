mod ui;

use clap::Parser;
use eframe::egui;
use shared::domain::TabDestination;

use crate::ui::{LatchGuiApp, StartupConfig};

#[derive(Parser, Debug)]
struct Args {
    /// Tab shown when the window opens: home, pump, diapers, calendar, profile.
    #[arg(long, default_value = "home")]
    start_tab: TabDestination,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    tracing::info!(start_tab = %args.start_tab, "launching Latch desktop shell");

    let startup = StartupConfig {
        start_tab: args.start_tab,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Latch")
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([320.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Latch",
        options,
        Box::new(move |cc| Ok(Box::new(LatchGuiApp::new(cc, startup)))),
    )
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use shared::domain::TabDestination;

    use super::Args;

    #[test]
    fn start_tab_defaults_to_home() {
        let args = Args::try_parse_from(["desktop_gui"]).expect("defaults parse");
        assert_eq!(args.start_tab, TabDestination::Home);
    }

    #[test]
    fn start_tab_flag_accepts_destination_labels() {
        let args =
            Args::try_parse_from(["desktop_gui", "--start-tab", "pump"]).expect("flag parse");
        assert_eq!(args.start_tab, TabDestination::Pump);
    }

    #[test]
    fn start_tab_flag_rejects_unknown_destinations() {
        let err = Args::try_parse_from(["desktop_gui", "--start-tab", "settings"]).unwrap_err();
        assert!(err.to_string().contains("unknown tab destination"));
    }
}
