use super::{center_vertically, screen_panel};
use crate::app::KioskApp;
use crate::model::OverlayStyle;
use crate::ui::helpers::{GREEN, pill_button, tr};
use egui::{Color32, Context, RichText, Vec2};

/// Pantalla de cierre con la marca, Inicio y Reiniciar.
pub fn ui_end(app: &mut KioskApp, ctx: &Context) {
    screen_panel(app, ctx, None, OverlayStyle::Stars, |app, ui| {
        let lang = app.language;

        // Halo verde que respira cada 4 s
        let breath = ((app.now.as_secs_f32() * std::f32::consts::TAU / 4.0).sin() + 1.0) / 2.0;
        let center = ui.max_rect().center();
        ui.painter().circle_filled(
            center,
            ui.max_rect().height() * 0.3,
            GREEN.gamma_multiply(0.05 + 0.1 * breath),
        );

        ui.horizontal(|ui| {
            ui.add_space(32.0);
            if pill_button(ui, tr(lang, "← Home", "الرئيسية ←"), Color32::from_white_alpha(25), Vec2::new(200.0, 60.0), 24.0) {
                app.go_home();
            }
        });

        center_vertically(ui, 420.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("◆").size(120.0).color(Color32::WHITE));
            ui.add_space(24.0);
            ui.label(
                RichText::new(tr(lang, "Future Forward", "نحو المستقبل"))
                    .size(96.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(16.0);
            let (rect, _) = ui.allocate_exact_size(Vec2::new(160.0, 1.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 0.0, GREEN.gamma_multiply(0.5));
            ui.add_space(16.0);
            ui.label(
                RichText::new(tr(lang, "Dukhan Bank • Web Summit", "بنك دخان • ويب سوميت"))
                    .size(30.0)
                    .color(Color32::from_white_alpha(100)),
            );
            ui.add_space(64.0);
            if pill_button(
                ui,
                tr(lang, "Restart ↻", "إعادة التشغيل ↻"),
                Color32::from_white_alpha(25),
                Vec2::new(300.0, 72.0),
                28.0,
            ) {
                app.go_home();
            }
        });
    });
}
