// src/ui/helpers.rs
use crate::model::{Language, Segment};
use egui::{Button, Color32, CornerRadius, RichText, Ui, Vec2};

pub const DARK_BLUE: Color32 = Color32::from_rgb(0x00, 0x2D, 0x74);
pub const GREEN: Color32 = Color32::from_rgb(0x3D, 0xAE, 0x2B);
pub const CARD_FILL: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a);
pub const DIM_WHITE: Color32 = Color32::from_gray(200);

/// Texto literal de la interfaz en el idioma activo.
pub fn tr(language: Language, en: &'static str, ar: &'static str) -> &'static str {
    match language {
        Language::En => en,
        Language::Ar => ar,
    }
}

pub fn segment_color(segment: Segment) -> Color32 {
    match segment {
        Segment::Retail => GREEN,
        Segment::Corporate => DARK_BLUE,
    }
}

/// Botón redondeado grande, pensado para el dedo.
pub fn pill_button(ui: &mut Ui, label: &str, fill: Color32, size: Vec2, text_size: f32) -> bool {
    let text = RichText::new(label).size(text_size).strong().color(Color32::WHITE);
    ui.add_sized(
        size,
        Button::new(text)
            .fill(fill)
            .corner_radius(CornerRadius::same((size.y / 2.0).min(255.0) as u8)),
    )
    .clicked()
}

/// Como `pill_button`, pero deshabilitable (flechas de navegación).
pub fn round_button(ui: &mut Ui, label: &str, size: f32, enabled: bool) -> bool {
    let text = RichText::new(label).size(size * 0.5).color(Color32::WHITE);
    let button = Button::new(text)
        .fill(Color32::from_white_alpha(20))
        .corner_radius(CornerRadius::same((size / 2.0).min(255.0) as u8))
        .min_size(Vec2::splat(size));
    ui.add_enabled(enabled, button).clicked()
}

/// Alinea a la derecha en árabe.
pub fn text_layout(language: Language) -> egui::Layout {
    if language.is_rtl() {
        egui::Layout::top_down(egui::Align::Max)
    } else {
        egui::Layout::top_down(egui::Align::Min)
    }
}
