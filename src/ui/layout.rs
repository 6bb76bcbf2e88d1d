use super::helpers::{GREEN, pill_button, round_button, segment_color, tr};
use crate::app::KioskApp;
use crate::model::{Language, Screen, Segment};
use egui::{Align, Align2, Button, Color32, Context, Frame, Layout, Margin, RichText, Vec2};

/// Cabecera global: logo (vuelve al inicio), idioma y selector de segmento.
pub fn top_panel(app: &mut KioskApp, ctx: &Context) {
    egui::TopBottomPanel::top("header")
        .frame(
            Frame::NONE
                .fill(Color32::from_black_alpha(230))
                .inner_margin(Margin::symmetric(32, 14)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let logo = RichText::new("◆ Dukhan Bank").size(30.0).strong().color(Color32::WHITE);
                if ui.add(Button::new(logo).frame(false)).clicked() {
                    app.go_home();
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let active = app.active_segment();
                    // right_to_left: el primero queda más a la derecha
                    for segment in [Segment::Corporate, Segment::Retail] {
                        let label = match segment {
                            Segment::Retail => tr(app.language, "Retail", "التجزئة"),
                            Segment::Corporate => tr(app.language, "Corporate", "الشركات"),
                        };
                        let fill = if segment == active {
                            segment_color(segment)
                        } else {
                            Color32::from_white_alpha(15)
                        };
                        if pill_button(ui, label, fill, Vec2::new(150.0, 44.0), 20.0) {
                            app.go_to(Screen::Landing(segment));
                        }
                    }

                    ui.add_space(32.0);

                    for language in [Language::Ar, Language::En] {
                        let selected = app.language == language;
                        let text = RichText::new(language.code())
                            .size(20.0)
                            .strong()
                            .color(if selected { Color32::BLACK } else { Color32::from_gray(160) });
                        let fill = if selected { Color32::WHITE } else { Color32::TRANSPARENT };
                        if ui
                            .add_sized([70.0, 44.0], Button::new(text).fill(fill).selected(selected))
                            .clicked()
                        {
                            app.set_language(language);
                        }
                    }
                });
            });
        });
}

/// Pie con Inicio y Atrás de las rejillas, detalles y juegos.
pub fn footer_panel(app: &mut KioskApp, ctx: &Context, back_to: Screen) {
    egui::TopBottomPanel::bottom("footer")
        .frame(
            Frame::NONE
                .fill(Color32::from_black_alpha(200))
                .inner_margin(Margin::symmetric(32, 20)),
        )
        .show(ctx, |ui| {
            let button = Vec2::new(220.0, 64.0);
            let gap = 24.0;
            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - button.x * 2.0 - gap) / 2.0).max(0.0));
                if pill_button(ui, tr(app.language, "Home", "الرئيسية"), Color32::from_white_alpha(25), button, 26.0) {
                    app.go_home();
                }
                ui.add_space(gap);
                if pill_button(ui, tr(app.language, "Back", "رجوع"), GREEN, button, 26.0) {
                    app.go_to(back_to);
                }
            });
        });
}

/// Barra inferior de los capítulos: flecha atrás (apagada en el suelo de la secuencia), puntos, flecha adelante.
pub fn chapter_nav_panel(app: &mut KioskApp, ctx: &Context) {
    let Some(position) = app.chapter_position() else {
        return;
    };
    // El suelo lo marca la secuencia, no el número de capítulo
    let can_go_back = app.session.navigator().can_go_back();

    egui::TopBottomPanel::bottom("chapter_nav")
        .frame(
            Frame::NONE
                .fill(Color32::from_black_alpha(160))
                .inner_margin(Margin::symmetric(0, 20)),
        )
        .show(ctx, |ui| {
            let arrow = 88.0;
            let dot_gap = 28.0;
            let dots_w = dot_gap * position.count as f32;
            let row_w = arrow * 2.0 + dots_w + 64.0;

            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - row_w) / 2.0).max(0.0));
                if round_button(ui, "◀", arrow, can_go_back) {
                    app.back();
                }
                ui.add_space(32.0);

                let (rect, _) = ui.allocate_exact_size(Vec2::new(dots_w, arrow), egui::Sense::hover());
                let painter = ui.painter_at(rect);
                for idx in 0..position.count {
                    let center = egui::pos2(rect.left() + dot_gap * (idx as f32 + 0.5), rect.center().y);
                    let (radius, color) = if idx == position.index {
                        (10.0, GREEN)
                    } else {
                        (8.0, Color32::from_white_alpha(80))
                    };
                    painter.circle_filled(center, radius, color);
                }

                ui.add_space(32.0);
                if round_button(ui, "▶", arrow, true) {
                    app.advance();
                }
            });
        });
}

/// Indicación ambiental de que se puede deslizar (solo en capítulos).
pub fn swipe_hint(app: &KioskApp, ctx: &Context) {
    if app.screen().chapter().is_none() {
        return;
    }
    let pulse = ((app.now.as_secs_f32() * std::f32::consts::TAU / 5.0).sin() + 1.0) / 2.0;
    let alpha = (20.0 + pulse * 40.0) as u8;
    egui::Area::new(egui::Id::new("swipe_hint"))
        .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -150.0))
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(
                RichText::new(tr(app.language, "Swipe to Navigate", "اسحب للتنقل"))
                    .size(24.0)
                    .color(Color32::from_white_alpha(alpha)),
            );
        });
}
