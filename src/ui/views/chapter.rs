use super::{center_vertically, screen_panel};
use crate::app::KioskApp;
use crate::model::{ChapterId, Screen};
use crate::ui::helpers::{DIM_WHITE, GREEN, pill_button, text_layout, tr};
use egui::{Align, Color32, Context, Layout, RichText, Vec2};

pub fn ui_chapter(app: &mut KioskApp, ctx: &Context, chapter: ChapterId) {
    let Some(record) = app.current_chapter().cloned() else {
        log::error!("Sin registro para {}", Screen::Chapter(chapter));
        return;
    };

    screen_panel(
        app,
        ctx,
        Some(record.background_image.clone()),
        record.overlay,
        |app, ui| {
            let lang = app.language;

            // Inicio a un lado, Continuar al otro
            ui.horizontal(|ui| {
                ui.add_space(32.0);
                if pill_button(ui, tr(lang, "← Home", "الرئيسية ←"), Color32::from_white_alpha(25), Vec2::new(200.0, 60.0), 24.0) {
                    app.go_home();
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.add_space(32.0);
                    if pill_button(ui, tr(lang, "Continue →", "متابعة →"), GREEN, Vec2::new(220.0, 60.0), 24.0) {
                        app.advance();
                    }
                });
            });

            center_vertically(ui, 360.0);
            ui.horizontal(|ui| {
                ui.add_space(ui.available_width() * 0.12);
                ui.allocate_ui_with_layout(
                    Vec2::new(ui.available_width() * 0.86, 360.0),
                    text_layout(lang),
                    |ui| {
                        ui.horizontal(|ui| {
                            for icon in &record.icons {
                                ui.label(RichText::new(icon.glyph()).size(56.0));
                                ui.add_space(16.0);
                            }
                        });
                        ui.add_space(32.0);
                        ui.label(
                            RichText::new(record.headline.get(lang))
                                .size(80.0)
                                .strong()
                                .color(Color32::WHITE),
                        );
                        if let Some(subline) = &record.subline {
                            ui.add_space(24.0);
                            ui.label(RichText::new(subline.get(lang)).size(36.0).color(DIM_WHITE));
                        }
                        ui.add_space(24.0);
                        let (rect, _) = ui.allocate_exact_size(Vec2::new(160.0, 3.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 0.0, GREEN.gamma_multiply(0.7));
                    },
                );
            });
        },
    );
}
