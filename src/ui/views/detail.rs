use super::screen_panel;
use crate::app::{DetailMode, KioskApp};
use crate::model::{Card, Language, OverlayStyle, Product, Screen};
use crate::ui::helpers::{CARD_FILL, DIM_WHITE, GREEN, segment_color, text_layout, tr};
use crate::ui::layout::footer_panel;
use egui::{Button, Color32, Context, CornerRadius, Frame, Margin, RichText, Ui, Vec2};

pub fn ui_detail(app: &mut KioskApp, ctx: &Context, product: Product) {
    let segment = product.segment();
    footer_panel(app, ctx, Screen::Cards(segment));

    let Some(card) = app.current_card().cloned() else {
        log::error!("Sin tarjeta para {}", Screen::Detail(product));
        return;
    };

    screen_panel(app, ctx, None, OverlayStyle::Stars, |app, ui| {
        ui.add_space(48.0);
        match app.detail_mode {
            DetailMode::Description => description(app, ui, &card, product),
            DetailMode::Video => video(app, ui, &card),
        }
    });
}

fn description(app: &mut KioskApp, ui: &mut Ui, card: &Card, product: Product) {
    let lang = app.language;
    let mut play = false;

    ui.columns(2, |cols| {
        // En árabe la ficha va a la derecha
        let (text_col, demo_col) = if lang.is_rtl() { (1, 0) } else { (0, 1) };

        cols[text_col].with_layout(text_layout(lang), |ui| {
            ui.add_space(40.0);
            if let Some(title) = &card.content_title {
                ui.label(RichText::new(title.get(lang)).size(56.0).strong().color(Color32::WHITE));
            }
            ui.add_space(24.0);
            if let Some(body) = &card.content_description {
                ui.label(RichText::new(body.get(lang)).size(26.0).color(DIM_WHITE));
            }

            if !card.features.is_empty() {
                ui.add_space(40.0);
                ui.label(
                    RichText::new(tr(lang, "Key Features", "الميزات الرئيسية"))
                        .size(32.0)
                        .strong()
                        .color(GREEN),
                );
                ui.add_space(12.0);
                for feature in &card.features {
                    ui.label(RichText::new(format!("• {}", feature.get(lang))).size(24.0).color(Color32::WHITE));
                    ui.add_space(6.0);
                }
            }
        });

        cols[demo_col].vertical_centered(|ui| {
            ui.add_space(80.0);
            play = demo_card(ui, card, lang, segment_color(product.segment()));
        });
    });

    if play {
        app.play_video();
    }
}

/// Tarjeta de demostración; `true` si se pidió el vídeo.
fn demo_card(ui: &mut Ui, card: &Card, lang: Language, accent: Color32) -> bool {
    let title = card.title.get(lang);
    let heading = match lang {
        Language::En => format!("{title} Demo:"),
        Language::Ar => format!("عرض توضيحي {title}:"),
    };

    let mut clicked = false;
    Frame::NONE
        .fill(CARD_FILL)
        .corner_radius(CornerRadius::same(32))
        .inner_margin(Margin::symmetric(40, 40))
        .show(ui, |ui| {
            ui.set_width(480.0);
            ui.vertical_centered(|ui| {
                let play = Button::new(RichText::new("▶").size(64.0).color(Color32::WHITE))
                    .fill(accent)
                    .corner_radius(CornerRadius::same(80))
                    .min_size(Vec2::splat(160.0));
                clicked = ui.add_enabled(card.has_video, play).clicked();

                ui.add_space(24.0);
                ui.label(RichText::new(heading).size(30.0).strong().color(Color32::WHITE));
                if let Some(tagline) = &card.demo_tagline {
                    ui.add_space(8.0);
                    ui.label(RichText::new(tagline.get(lang)).size(24.0).color(DIM_WHITE));
                }
                ui.add_space(8.0);
                ui.label(
                    RichText::new(tr(lang, "Interactive demo", "عرض توضيحي تفاعلي"))
                        .size(20.0)
                        .color(Color32::from_gray(140)),
                );
            });
        });
    clicked
}

/// Vista del vídeo en curso. En la web el `<video>` se superpone al hueco
/// central; en nativo suena en el reproductor externo y aquí queda el estado.
fn video(app: &mut KioskApp, ui: &mut Ui, card: &Card) {
    app.poll_video();
    if app.detail_mode != DetailMode::Video {
        return;
    }

    let lang = app.language;
    let mut close = false;
    ui.vertical_centered(|ui| {
        let size = Vec2::new(ui.available_width() * 0.8, ui.available_height() * 0.8);
        Frame::NONE
            .fill(Color32::from_gray(10))
            .corner_radius(CornerRadius::same(16))
            .inner_margin(Margin::symmetric(24, 24))
            .show(ui, |ui| {
                ui.set_min_size(size);
                ui.horizontal(|ui| {
                    let close_btn = Button::new(RichText::new("✕").size(32.0).color(Color32::WHITE))
                        .fill(Color32::from_white_alpha(25))
                        .corner_radius(CornerRadius::same(32))
                        .min_size(Vec2::splat(64.0));
                    close = ui.add(close_btn).clicked();
                });
                ui.add_space(size.y * 0.35);
                ui.vertical_centered(|ui| match &app.video_error {
                    Some(error) => {
                        ui.label(
                            RichText::new(tr(lang, "Video unavailable", "الفيديو غير متاح"))
                                .size(36.0)
                                .strong()
                                .color(Color32::WHITE),
                        );
                        ui.add_space(12.0);
                        ui.label(RichText::new(error).size(20.0).monospace().color(DIM_WHITE));
                    }
                    None => {
                        ui.label(RichText::new("▶").size(96.0).color(Color32::from_white_alpha(60)));
                        ui.label(
                            RichText::new(format!("{} Demo", card.title.get(lang)))
                                .size(28.0)
                                .color(Color32::WHITE),
                        );
                        if let Some(source) = app.video.source() {
                            ui.label(RichText::new(source).size(20.0).monospace().color(DIM_WHITE));
                        }
                    }
                });
            });
    });

    if close {
        app.close_video();
    }
}
