use kiosk_showcase::KioskApp;
use kiosk_showcase::config::KioskConfig;
use kiosk_showcase::data::Catalog;

const TITLE: &str = "Dukhan Bank - Web Summit";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, catalog) = match KioskConfig::load().and_then(|c| Ok((c, Catalog::embedded()?))) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("{e}");
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([1920.0, 1080.0])
            .with_fullscreen(config.fullscreen),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(KioskApp::setup(cc, config, catalog)?))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let loaded = KioskConfig::load().and_then(|c| Ok((c, Catalog::embedded()?)));
        let (config, catalog) = match loaded {
            Ok(loaded) => loaded,
            Err(e) => {
                log::error!("{e}");
                return;
            }
        };

        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("No se encontró el canvas the_canvas_id");
            return;
        };

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(KioskApp::setup(cc, config, catalog)?))),
            )
            .await;
        if let Err(e) = started {
            log::error!("No se pudo arrancar eframe: {e:?}");
        }
    });
}
