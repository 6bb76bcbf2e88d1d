pub mod card_grid;
pub mod chapter;
pub mod detail;
pub mod end;
pub mod game;
pub mod landing;
pub mod loading;

use super::overlay;
use crate::app::KioskApp;
use crate::model::OverlayStyle;
use egui::{CentralPanel, Color32, Context, Frame, Image, Ui};

/// Panel central común: fondo negro, imagen opcional, capa animada,
/// velo al 40 % y contenido con el fundido de entrada aplicado.
pub(crate) fn screen_panel(
    app: &mut KioskApp,
    ctx: &Context,
    background: Option<String>,
    style: OverlayStyle,
    add_contents: impl FnOnce(&mut KioskApp, &mut Ui),
) {
    CentralPanel::default()
        .frame(Frame::NONE.fill(Color32::BLACK))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            if let Some(url) = background {
                Image::from_uri(url)
                    .tint(Color32::from_gray(150))
                    .paint_at(ui, rect);
            }
            overlay::paint(ui.painter(), rect, style, app.now.as_secs_f32());
            ui.painter().rect_filled(rect, 0.0, Color32::from_black_alpha(100));

            ui.set_opacity(app.fade_alpha());
            add_contents(app, ui);
        });
}

/// Hueco superior para centrar verticalmente un bloque de altura estimada.
pub(crate) fn center_vertically(ui: &mut Ui, estimated_h: f32) {
    let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
    ui.add_space(vs);
}
