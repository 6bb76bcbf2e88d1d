use super::{center_vertically, screen_panel};
use crate::app::KioskApp;
use crate::model::{OverlayStyle, Screen, Segment};
use crate::ui::helpers::{DIM_WHITE, pill_button, segment_color, tr};
use egui::{Color32, Context, RichText, Vec2};

pub fn ui_landing(app: &mut KioskApp, ctx: &Context, segment: Segment) {
    screen_panel(app, ctx, None, OverlayStyle::Stars, |app, ui| {
        let (title, subtitle) = match segment {
            Segment::Corporate => (
                tr(
                    app.language,
                    "Wholesale & SME Banking",
                    "الخدمات المصرفية للجملة والمؤسسات الصغيرة والمتوسطة",
                ),
                tr(
                    app.language,
                    "Experience the future of corporate banking",
                    "اختبر مستقبل الخدمات المصرفية للشركات",
                ),
            ),
            Segment::Retail => (
                tr(app.language, "Retail Banking", "الخدمات المصرفية للأفراد"),
                tr(
                    app.language,
                    "Experience the future of personal banking",
                    "اختبر مستقبل الخدمات المصرفية الشخصية",
                ),
            ),
        };

        // La historia solo se ofrece si esta portada forma parte de la secuencia
        let in_story = app
            .session
            .navigator()
            .sequence()
            .position(Screen::Landing(segment))
            .is_some();

        center_vertically(ui, if in_story { 460.0 } else { 360.0 });
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(title).size(72.0).strong().color(Color32::WHITE));
            ui.add_space(24.0);
            ui.label(RichText::new(subtitle).size(34.0).color(DIM_WHITE));
            ui.add_space(64.0);

            let start = tr(app.language, "Start Experience", "ابدأ التجربة");
            if pill_button(ui, start, segment_color(segment), Vec2::new(420.0, 96.0), 32.0) {
                app.go_to(Screen::Cards(segment));
            }

            if in_story {
                ui.add_space(24.0);
                let story = tr(app.language, "Our Story", "قصتنا");
                if pill_button(ui, story, Color32::from_white_alpha(25), Vec2::new(320.0, 72.0), 26.0) {
                    app.advance();
                }
            }
        });
    });
}
