use super::{center_vertically, screen_panel};
use crate::app::KioskApp;
use crate::model::{Icon, OverlayStyle, Screen, Segment};
use crate::ui::helpers::{CARD_FILL, segment_color};
use crate::ui::layout::footer_panel;
use egui::{Align2, Color32, Context, CornerRadius, FontId, Response, Sense, Stroke, StrokeKind, Ui, Vec2};

const CARD_SIZE: Vec2 = Vec2::new(440.0, 200.0);
const GAP: f32 = 24.0;

pub fn ui_card_grid(app: &mut KioskApp, ctx: &Context, segment: Segment) {
    footer_panel(app, ctx, Screen::Landing(segment));

    screen_panel(app, ctx, None, OverlayStyle::Stars, |app, ui| {
        // Copia de lo que se pinta: el clic necesita `app` mutable
        let tiles: Vec<(Screen, String, Icon)> = app
            .grid_cards(segment)
            .into_iter()
            .map(|card| (card.target, card.title.get(app.language).to_owned(), card.icon))
            .collect();

        let rows = tiles.len().div_ceil(2) as f32;
        center_vertically(ui, rows * (CARD_SIZE.y + GAP));

        let mut clicked = None;
        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - CARD_SIZE.x * 2.0 - GAP) / 2.0).max(0.0));
            egui::Grid::new("card_grid")
                .num_columns(2)
                .spacing([GAP, GAP])
                .show(ui, |ui| {
                    for (idx, (target, title, icon)) in tiles.iter().enumerate() {
                        if card_tile(ui, title, *icon, segment).clicked() {
                            clicked = Some(*target);
                        }
                        if idx % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
        });

        if let Some(target) = clicked {
            log::debug!("Tarjeta pulsada: {target}");
            app.go_to(target);
        }
    });
}

fn card_tile(ui: &mut Ui, title: &str, icon: Icon, segment: Segment) -> Response {
    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, Sense::click());
    let painter = ui.painter_at(rect);
    let accent = segment_color(segment);

    let fill = if response.hovered() { accent.gamma_multiply(0.35) } else { CARD_FILL };
    painter.rect_filled(rect, CornerRadius::same(24), fill);
    painter.rect_stroke(
        rect,
        CornerRadius::same(24),
        Stroke::new(2.0, accent.gamma_multiply(0.6)),
        StrokeKind::Inside,
    );

    painter.text(
        rect.center() - Vec2::new(0.0, 30.0),
        Align2::CENTER_CENTER,
        icon.glyph(),
        FontId::proportional(56.0),
        Color32::WHITE,
    );
    painter.text(
        rect.center() + Vec2::new(0.0, 50.0),
        Align2::CENTER_CENTER,
        title,
        FontId::proportional(28.0),
        Color32::WHITE,
    );

    response
}
