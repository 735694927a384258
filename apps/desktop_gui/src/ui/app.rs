use eframe::egui;
use shared::domain::TabDestination;

use crate::ui::{screens, theme};

/// Options resolved from the command line before the window opens.
#[derive(Debug, Clone, Copy)]
pub struct StartupConfig {
    pub start_tab: TabDestination,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            start_tab: TabDestination::Home,
        }
    }
}

/// Root tab shell. Owns which destination is active; everything rendered
/// behind the tab strip is placeholder content.
pub struct LatchGuiApp {
    selected_tab: TabDestination,
}

impl LatchGuiApp {
    pub fn new(cc: &eframe::CreationContext<'_>, startup: StartupConfig) -> Self {
        theme::apply_light_appearance(&cc.egui_ctx);
        Self::from_startup(startup)
    }

    fn from_startup(startup: StartupConfig) -> Self {
        Self {
            selected_tab: startup.start_tab,
        }
    }

    fn show_tab_strip(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("tab_strip").show(ctx, |ui| {
            ui.add_space(4.0);
            let previous = self.selected_tab;
            ui.columns(TabDestination::ALL.len(), |columns| {
                for (column, tab) in columns.iter_mut().zip(TabDestination::ALL) {
                    column.vertical_centered(|ui| {
                        let entry = format!("{}\n{}", tab.icon(), tab.label());
                        ui.selectable_value(&mut self.selected_tab, tab, entry);
                    });
                }
            });
            if self.selected_tab != previous {
                tracing::debug!(tab = %self.selected_tab, "tab selected");
            }
            ui.add_space(4.0);
        });
    }

    fn show_selected_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            screens::show(self.selected_tab, ui);
        });
    }
}

impl eframe::App for LatchGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_tab_strip(ctx);
        self.show_selected_screen(ctx);
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::TabDestination;

    use super::{LatchGuiApp, StartupConfig};

    #[test]
    fn opens_on_home_by_default() {
        let app = LatchGuiApp::from_startup(StartupConfig::default());
        assert_eq!(app.selected_tab, TabDestination::Home);
    }

    #[test]
    fn start_tab_override_selects_that_destination() {
        let app = LatchGuiApp::from_startup(StartupConfig {
            start_tab: TabDestination::Diapers,
        });
        assert_eq!(app.selected_tab, TabDestination::Diapers);
    }
}
