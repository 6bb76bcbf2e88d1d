use crate::app::KioskApp;
use crate::ui::helpers::{DIM_WHITE, GREEN, tr};
use egui::load::{ImagePoll, SizeHint};
use egui::{CentralPanel, Color32, Context, Frame, ProgressBar, RichText, Spinner};

/// Pide a los cargadores de egui cada fondo pendiente y anota el resultado.
pub fn poll_assets(app: &mut KioskApp, ctx: &Context) {
    for url in app.preloader.pending() {
        match ctx.try_load_image(&url, SizeHint::default()) {
            Ok(ImagePoll::Ready { .. }) => app.preloader.mark_loaded(&url),
            Ok(ImagePoll::Pending { .. }) => {}
            Err(e) => app.preloader.mark_failed(&url, &e.to_string()),
        }
    }
}

pub fn ui_loading(app: &mut KioskApp, ctx: &Context) {
    CentralPanel::default()
        .frame(Frame::NONE.fill(Color32::BLACK))
        .show(ctx, |ui| {
            super::center_vertically(ui, 200.0);
            ui.vertical_centered(|ui| {
                ui.add(Spinner::new().size(64.0).color(GREEN));
                ui.add_space(32.0);
                ui.label(
                    RichText::new(tr(app.language, "Loading experience…", "جارٍ تحميل التجربة…"))
                        .size(32.0)
                        .color(Color32::WHITE),
                );
                ui.add_space(12.0);
                let progress = format!("{} / {}", app.preloader.completed(), app.preloader.total());
                ui.label(RichText::new(progress).size(22.0).color(DIM_WHITE));
                ui.add_space(12.0);
                ui.add(ProgressBar::new(app.preloader.progress()).desired_width(360.0).fill(GREEN));

                if let Some(left) = app.preloader.remaining(app.now) {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("{:.1} s", left.as_secs_f32()))
                            .size(18.0)
                            .color(Color32::from_gray(120)),
                    );
                }
            });
        });
}
