//! Fixed light appearance. The shell has no theme switching; the window
//! always opens light.

use eframe::egui;

pub fn light_style(base: &egui::Style) -> egui::Style {
    let mut style = base.clone();
    style.visuals = egui::Visuals::light();

    // Keep widget outlines visible against the light panel fill.
    style.visuals.widgets.inactive.bg_stroke =
        egui::Stroke::new(1.0, style.visuals.widgets.noninteractive.bg_stroke.color);
    style.visuals.widgets.hovered.bg_stroke =
        egui::Stroke::new(1.0, style.visuals.widgets.hovered.bg_stroke.color);
    style.visuals.widgets.active.bg_stroke =
        egui::Stroke::new(1.2, style.visuals.selection.bg_fill.gamma_multiply(0.9));

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.interact_size = egui::vec2(40.0, 30.0);

    style
}

pub fn apply_light_appearance(ctx: &egui::Context) {
    let style = light_style(&ctx.style());
    ctx.set_style(style);
}
