use super::{center_vertically, screen_panel};
use crate::app::KioskApp;
use crate::model::{Language, OverlayStyle, Screen, Segment};
use crate::ui::helpers::{CARD_FILL, DIM_WHITE, GREEN, segment_color, tr};
use crate::ui::layout::footer_panel;
use egui::{Color32, Context, CornerRadius, Frame, Margin, Rect, RichText, Sense, Ui, Vec2, pos2};

/// Minijuegos ofrecidos: (inglés, árabe, lema inglés, lema árabe).
const GAMES: [(&str, &str, &str, &str); 2] = [
    ("Arrow & Locker", "السهم والقفل", "Test your speed and precision!", "اختبر سرعتك ودقتك!"),
    ("Puzzle Challenge", "تحدي الألغاز", "Solve the mystery!", "حل اللغز!"),
];

pub fn ui_game(app: &mut KioskApp, ctx: &Context, segment: Segment) {
    footer_panel(app, ctx, Screen::Cards(segment));

    let title = app
        .current_card()
        .map(|card| card.title.get(app.language).to_owned())
        .unwrap_or_default();

    screen_panel(app, ctx, None, OverlayStyle::Stars, |app, ui| {
        let lang = app.language;
        center_vertically(ui, 760.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&title).size(64.0).strong().color(Color32::WHITE));
            ui.add_space(16.0);
            ui.label(
                RichText::new(tr(
                    lang,
                    "Scan to register and win exciting prizes!",
                    "امسح للتسجيل والفوز بجوائز مثيرة!",
                ))
                .size(28.0)
                .color(DIM_WHITE),
            );
            ui.add_space(32.0);

            qr_placeholder(ui, segment_color(segment));
            ui.label(RichText::new(tr(lang, "Game QR", "رمز QR للعبة")).size(24.0).strong().color(Color32::WHITE));
            ui.label(RichText::new(tr(lang, "Scan to learn more", "امسح لمعرفة المزيد")).size(20.0).color(DIM_WHITE));
            ui.add_space(40.0);

            let row_w = 2.0 * 400.0 + 32.0;
            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - row_w) / 2.0).max(0.0));
                for (idx, game) in GAMES.iter().enumerate() {
                    if idx > 0 {
                        ui.add_space(32.0);
                    }
                    if game_button(ui, *game, lang) {
                        // Los juegos viven fuera del kiosco
                        log::info!("Starting {}", game.0);
                    }
                }
            });
        });
    });
}

/// Cuadrícula con aspecto de código QR; el código real lo pone el evento.
fn qr_placeholder(ui: &mut Ui, accent: Color32) {
    let side = 260.0;
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::same(16), Color32::WHITE);

    let cells: i32 = 21;
    let cell = (side - 32.0) / cells as f32;
    let origin = rect.min + Vec2::splat(16.0);
    for r in 0..cells {
        for c in 0..cells {
            let dark = finder(r, c)
                || finder(r, cells - 1 - c)
                || finder(cells - 1 - r, c)
                || (r >= 8 || c >= 8) && (r * 7 + c * 13 + r * c) % 3 == 0;
            if dark {
                let min = pos2(origin.x + c as f32 * cell, origin.y + r as f32 * cell);
                painter.rect_filled(Rect::from_min_size(min, Vec2::splat(cell)), 0.0, Color32::BLACK);
            }
        }
    }
    painter.circle_filled(rect.center(), 18.0, accent);
}

/// Marco de 7x7 con núcleo de 3x3 de las esquinas del QR.
fn finder(r: i32, c: i32) -> bool {
    if r >= 7 || c >= 7 {
        return false;
    }
    let ring = r == 0 || r == 6 || c == 0 || c == 6;
    let core = (2..=4).contains(&r) && (2..=4).contains(&c);
    ring || core
}

fn game_button(ui: &mut Ui, game: (&str, &str, &str, &str), lang: Language) -> bool {
    let (name, tagline) = match lang {
        Language::En => (game.0, game.2),
        Language::Ar => (game.1, game.3),
    };
    let response = Frame::NONE
        .fill(CARD_FILL)
        .stroke(egui::Stroke::new(2.0, GREEN.gamma_multiply(0.6)))
        .corner_radius(CornerRadius::same(24))
        .inner_margin(Margin::symmetric(24, 24))
        .show(ui, |ui| {
            ui.set_width(352.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("🎮").size(48.0));
                ui.label(RichText::new(name).size(28.0).strong().color(Color32::WHITE));
                ui.label(RichText::new(tagline).size(20.0).color(DIM_WHITE));
            });
        })
        .response
        .interact(Sense::click());
    response.clicked()
}
