use egui::{Color32, Rounding, Stroke};

pub const TEXT_COLOR: Color32 = Color32::from_rgb(255, 212, 163);
pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(13, 43, 69);
pub const EXTRA_BACKGROUND_COLOR: Color32 = Color32::from_rgb(10, 30, 60);
pub const BG_STROKE_COLOR: Color32 = Color32::from_rgb(32, 60, 86);
pub const ORANGE: Color32 = Color32::from_rgb(255, 170, 94);

pub fn set_style(style: &mut egui::Style) {
    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    style.visuals.dark_mode = true;
    style.visuals.override_text_color = Some(TEXT_COLOR);
    style.visuals.window_rounding = Rounding::none();

    style.visuals.extreme_bg_color = EXTRA_BACKGROUND_COLOR;
    style.visuals.widgets.noninteractive.bg_fill = BACKGROUND_COLOR;
    style.visuals.widgets.inactive.bg_fill = BACKGROUND_COLOR;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, ORANGE);
    style.visuals.widgets.hovered.bg_fill = BACKGROUND_COLOR;
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, BG_STROKE_COLOR);
    style.visuals.widgets.active.bg_fill = BACKGROUND_COLOR;
    style.visuals.widgets.active.bg_stroke = Stroke::new(2.0, BG_STROKE_COLOR);
}
