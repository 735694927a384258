//! Placeholder screens, one per tab destination. Each renders static text
//! only; real screens replace these as product features land.

use eframe::egui;
use shared::domain::TabDestination;

pub fn placeholder_text(tab: TabDestination) -> &'static str {
    match tab {
        TabDestination::Home => "Home Screen",
        TabDestination::Pump => "Pump Timer",
        TabDestination::Diapers => "Diaper Log",
        TabDestination::Calendar => "Calendar",
        TabDestination::Profile => "Profile",
    }
}

pub fn show(tab: TabDestination, ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(egui::RichText::new(placeholder_text(tab)).heading());
    });
}

#[cfg(test)]
mod tests {
    use shared::domain::TabDestination;

    use super::placeholder_text;

    #[test]
    fn every_destination_has_its_placeholder_text() {
        let texts: Vec<_> = TabDestination::ALL
            .into_iter()
            .map(placeholder_text)
            .collect();
        assert_eq!(
            texts,
            ["Home Screen", "Pump Timer", "Diaper Log", "Calendar", "Profile"]
        );
    }
}
