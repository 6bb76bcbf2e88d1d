use egui::{Context, FontData, FontDefinitions, FontFamily};
use std::sync::Arc;

const ARABIC_FONT: &str = "arabic";

/// Añade una fuente con glifos árabes como respaldo de la proporcional.
/// Sin ruta configurada el texto árabe se verá con las fuentes por defecto.
pub fn install(ctx: &Context, path: Option<&str>) {
    let Some(path) = path else {
        log::warn!("Sin arabic_font_path: el texto árabe puede no mostrarse");
        return;
    };

    match read_font(path) {
        Ok(bytes) => {
            let mut fonts = FontDefinitions::default();
            fonts
                .font_data
                .insert(ARABIC_FONT.to_owned(), Arc::new(FontData::from_owned(bytes)));
            for family in [FontFamily::Proportional, FontFamily::Monospace] {
                fonts
                    .families
                    .entry(family)
                    .or_default()
                    .push(ARABIC_FONT.to_owned());
            }
            ctx.set_fonts(fonts);
            log::info!("Fuente árabe cargada desde {path}");
        }
        Err(e) => log::warn!("{e}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_font(path: &str) -> Result<Vec<u8>, crate::error::KioskError> {
    std::fs::read(path).map_err(|source| crate::error::KioskError::Io {
        path: path.to_owned(),
        source,
    })
}

#[cfg(target_arch = "wasm32")]
fn read_font(path: &str) -> Result<Vec<u8>, crate::error::KioskError> {
    Err(crate::error::KioskError::InvalidConfig(format!(
        "arabic_font_path ({path}) no está disponible en la versión web"
    )))
}
