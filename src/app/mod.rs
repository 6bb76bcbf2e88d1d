use crate::config::KioskConfig;
use crate::data::Catalog;
use crate::error::KioskError;
use crate::model::{Language, Screen};
use std::time::Duration;

// Submódulos
pub mod navigation;
pub mod preload;
pub mod session;
pub mod timers;
pub mod video;
pub mod view_models;

pub use preload::AssetPreloader;
pub use session::{Cause, Session, Transition};
pub use video::VideoPlayback;

/// Qué enseña la página de detalle: la ficha o el vídeo.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DetailMode {
    #[default]
    Description,
    Video,
}

/// Controlador raíz: dueño único del estado de sesión.
pub struct KioskApp {
    pub config: KioskConfig,
    pub catalog: Catalog,
    pub session: Session,
    pub language: Language,
    pub preloader: AssetPreloader,
    pub detail_mode: DetailMode,
    pub video: VideoPlayback,
    /// Último fallo al lanzar el vídeo, para enseñarlo en lugar del reproductor.
    pub video_error: Option<String>,
    /// Reloj del fotograma actual (tiempo desde el arranque).
    pub now: Duration,
    /// Origen de la pulsación en curso, para medir el deslizamiento al soltar.
    pub press_origin: Option<egui::Pos2>,
    /// Los temporizadores se rearman una vez, al abrirse la puerta de precarga.
    timers_armed: bool,
}

impl KioskApp {
    pub fn new(config: KioskConfig, catalog: Catalog, now: Duration) -> Result<Self, KioskError> {
        let session = Session::new(&config, now)?;
        let preloader = AssetPreloader::new(catalog.background_images(), config.preload_timeout(), now);
        let video = VideoPlayback::new(config.video_root.clone(), config.video_player.clone());
        log::info!("Kiosco listo en {}", session.screen());
        Ok(Self {
            timers_armed: preloader.is_open(),
            config,
            catalog,
            session,
            language: Language::default(),
            preloader,
            detail_mode: DetailMode::default(),
            video,
            video_error: None,
            now,
            press_origin: None,
        })
    }

    /// Configuración (embebida o `KIOSK_CONFIG`) y catálogo embebido.
    pub fn load(now: Duration) -> Result<Self, KioskError> {
        let config = KioskConfig::load()?;
        let catalog = Catalog::embedded()?;
        Self::new(config, catalog, now)
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    pub fn set_clock(&mut self, now: Duration) {
        self.now = now;
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            log::info!("Idioma: {}", language.code());
            self.language = language;
        }
    }

    pub fn advance(&mut self) {
        let t = self.session.advance(self.now);
        self.apply(t);
    }

    pub fn back(&mut self) {
        let t = self.session.back(self.now);
        self.apply(t);
    }

    pub fn go_to(&mut self, screen: Screen) {
        let t = self.session.go_to(screen, self.now);
        self.apply(t);
    }

    pub fn go_home(&mut self) {
        let t = self.session.go_home(self.now);
        self.apply(t);
    }

    pub fn drag_end(&mut self, offset_x: f32) {
        let t = self.session.handle_drag_end(offset_x, self.now);
        self.apply(t);
    }

    pub fn pointer_pressed(&mut self, pos: egui::Pos2) {
        self.press_origin = Some(pos);
        self.session.pointer_down(pos, self.now);
    }

    /// Al soltar se cancela la pulsación de administración y, en un capítulo,
    /// el desplazamiento horizontal desde el origen cuenta como deslizamiento.
    pub fn pointer_released(&mut self, pos: egui::Pos2) {
        self.session.pointer_up();
        if let Some(origin) = self.press_origin.take() {
            if self.screen().chapter().is_some() {
                self.drag_end(pos.x - origin.x);
            }
        }
    }

    /// Temporizadores de la sesión; solo corren con la puerta de precarga abierta.
    pub fn tick(&mut self) {
        if !self.preloader.is_open() {
            return;
        }
        if !self.timers_armed {
            // Lo programado durante la precarga no cuenta
            self.session.restart_timers(self.now);
            self.timers_armed = true;
        }
        for t in self.session.tick(self.now) {
            self.apply(Some(t));
        }
    }

    pub fn show_video(&mut self) {
        self.detail_mode = DetailMode::Video;
    }

    pub fn close_video(&mut self) {
        self.detail_mode = DetailMode::Description;
        self.video.stop();
        self.video_error = None;
    }

    /// Pasa a modo vídeo y lanza la reproducción del vídeo de la tarjeta actual.
    pub fn play_video(&mut self) {
        let Some(path) = self.current_card().and_then(|card| card.video_path.clone()) else {
            return;
        };
        self.show_video();
        self.video_error = match self.video.play(&path) {
            Ok(()) => None,
            Err(e) => {
                log::warn!("{e}");
                Some(e.to_string())
            }
        };
    }

    /// Al acabar el vídeo se vuelve a la ficha.
    pub fn poll_video(&mut self) {
        if self.video.poll_finished() {
            self.close_video();
        }
    }

    /// Opacidad del contenido durante el fundido de entrada.
    pub fn fade_alpha(&self) -> f32 {
        let total = self.config.transition().as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        let elapsed = self.now.saturating_sub(self.session.entered_at()).as_secs_f32();
        (elapsed / total).clamp(0.0, 1.0)
    }

    fn apply(&mut self, transition: Option<Transition>) {
        if transition.is_some() {
            // El conmutador de vídeo es local a cada visita de la página
            self.close_video();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChapterId, Product, Segment};

    fn app() -> KioskApp {
        let config = KioskConfig::default();
        let catalog = Catalog::embedded().expect("catálogo");
        KioskApp::new(config, catalog, Duration::ZERO).expect("app")
    }

    #[test]
    fn clicking_a_card_jumps_to_its_target() {
        let mut app = app();
        app.go_to(Screen::Chapter(ChapterId::Three));
        let card = app.catalog.cards(Segment::Retail)[0].clone();
        assert_eq!(card.id, 1);
        app.go_to(card.target);
        assert_eq!(app.screen(), Screen::Detail(Product::MobileApp));
    }

    #[test]
    fn leaving_a_detail_page_resets_the_video_toggle() {
        let mut app = app();
        app.go_to(Screen::Detail(Product::Vcp));
        app.show_video();
        assert_eq!(app.detail_mode, DetailMode::Video);
        app.go_to(Screen::Cards(Segment::Corporate));
        assert_eq!(app.detail_mode, DetailMode::Description);
    }

    #[test]
    fn timers_wait_for_the_preloader() {
        let mut config = KioskConfig::default();
        config.idle_reset.timeout_ms = 1_000;
        config.preload_timeout_ms = None;
        let catalog = Catalog::embedded().expect("catálogo");
        let mut app = KioskApp::new(config, catalog, Duration::ZERO).expect("app");
        app.go_to(Screen::Cards(Segment::Retail));

        app.set_clock(Duration::from_secs(5));
        app.tick();
        assert_eq!(app.screen(), Screen::Cards(Segment::Retail));

        for url in app.preloader.pending() {
            app.preloader.mark_loaded(&url);
        }
        app.preloader.poll(app.now);

        // La inactividad empieza a contar al abrirse la puerta, no al crear la app
        app.tick();
        assert_eq!(app.screen(), Screen::Cards(Segment::Retail));
        app.set_clock(Duration::from_millis(5_999));
        app.tick();
        assert_eq!(app.screen(), Screen::Cards(Segment::Retail));
        app.set_clock(Duration::from_secs(6));
        app.tick();
        assert_eq!(app.screen(), app.session.home());
    }

    #[test]
    fn empty_sequence_fails_to_build_the_app() {
        let mut config = KioskConfig::default();
        config.sequence.clear();
        let catalog = Catalog::embedded().expect("catálogo");
        assert!(KioskApp::new(config, catalog, Duration::ZERO).is_err());
    }

    #[test]
    fn missing_video_is_reported_and_cleared_on_leaving() {
        let mut config = KioskConfig::default();
        config.video_root = "/nonexistent-kiosk-root".to_owned();
        let catalog = Catalog::embedded().expect("catálogo");
        let mut app = KioskApp::new(config, catalog, Duration::ZERO).expect("app");

        app.go_to(Screen::Detail(Product::Wps));
        app.play_video();
        assert_eq!(app.detail_mode, DetailMode::Video);
        assert!(app.video_error.is_some());
        assert!(!app.video.is_playing());

        app.go_to(Screen::Cards(Segment::Corporate));
        assert_eq!(app.detail_mode, DetailMode::Description);
        assert_eq!(app.video_error, None);
    }

    #[test]
    fn fade_ramps_after_each_transition() {
        let mut app = app();
        app.set_clock(Duration::from_millis(10_000));
        app.advance();
        assert_eq!(app.fade_alpha(), 0.0);
        app.set_clock(Duration::from_millis(10_400));
        assert!((app.fade_alpha() - 0.5).abs() < 1e-3);
        app.set_clock(Duration::from_millis(20_000));
        assert_eq!(app.fade_alpha(), 1.0);
    }

    #[test]
    fn swipe_only_navigates_on_chapters() {
        use egui::Pos2;

        let mut app = app();
        app.go_to(Screen::Chapter(ChapterId::One));
        app.pointer_pressed(Pos2::new(600.0, 900.0));
        app.pointer_released(Pos2::new(480.0, 910.0));
        assert_eq!(app.screen(), Screen::Chapter(ChapterId::Two));

        app.pointer_pressed(Pos2::new(600.0, 900.0));
        app.pointer_released(Pos2::new(640.0, 900.0));
        assert_eq!(app.screen(), Screen::Chapter(ChapterId::Two));

        app.go_to(Screen::Cards(Segment::Retail));
        app.pointer_pressed(Pos2::new(600.0, 900.0));
        app.pointer_released(Pos2::new(100.0, 900.0));
        assert_eq!(app.screen(), Screen::Cards(Segment::Retail));
    }

    #[test]
    fn language_is_independent_of_the_screen() {
        let mut app = app();
        app.advance();
        let screen = app.screen();
        app.set_language(Language::Ar);
        assert_eq!(app.screen(), screen);
        assert_eq!(app.language, Language::Ar);
    }
}
