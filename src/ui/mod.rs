mod fonts;
mod helpers;
pub mod layout;
mod overlay;
pub mod views;

use crate::app::KioskApp;
use crate::config::KioskConfig;
use crate::data::Catalog;
use crate::error::KioskError;
use crate::model::Screen;
use eframe::{App, CreationContext, Frame};
use egui::{Context, Event, PointerButton, Visuals};
use layout::{chapter_nav_panel, swipe_hint, top_panel};
use std::time::Duration;

/// Intervalo de repintado mientras hay fondos animados.
const ANIMATION_FRAME: Duration = Duration::from_millis(33);

impl KioskApp {
    /// Prepara el contexto de egui (cargadores de imagen, fuentes, tema) y crea la app.
    pub fn setup(
        cc: &CreationContext<'_>,
        config: KioskConfig,
        catalog: Catalog,
    ) -> Result<Self, KioskError> {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        fonts::install(&cc.egui_ctx, config.arabic_font_path.as_deref());
        cc.egui_ctx.set_visuals(Visuals::dark());
        KioskApp::new(config, catalog, frame_clock(&cc.egui_ctx))
    }
}

impl App for KioskApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.set_clock(frame_clock(ctx));

        // Puerta de precarga
        if !self.preloader.is_open() {
            views::loading::poll_assets(self, ctx);
            if !self.preloader.poll(self.now) {
                views::loading::ui_loading(self, ctx);
                ctx.request_repaint_after(ANIMATION_FRAME);
                return;
            }
        }

        route_pointer_events(self, ctx);
        self.tick();

        top_panel(self, ctx);
        if self.screen().chapter().is_some() {
            chapter_nav_panel(self, ctx);
        }

        // Dispatch por pantalla
        match self.screen() {
            Screen::Landing(segment) => views::landing::ui_landing(self, ctx, segment),
            Screen::Cards(segment) => views::card_grid::ui_card_grid(self, ctx, segment),
            Screen::Detail(product) => views::detail::ui_detail(self, ctx, product),
            Screen::Game(segment) => views::game::ui_game(self, ctx, segment),
            Screen::Chapter(chapter) => views::chapter::ui_chapter(self, ctx, chapter),
            Screen::End => views::end::ui_end(self, ctx),
        }

        swipe_hint(self, ctx);

        // Los temporizadores deben vencer aunque nadie toque la pantalla
        let until_due = self
            .session
            .next_due()
            .map(|due| due.saturating_sub(self.now))
            .unwrap_or(ANIMATION_FRAME);
        ctx.request_repaint_after(until_due.min(ANIMATION_FRAME));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.session.shutdown();
        self.video.stop();
        log::info!("Kiosco cerrado");
    }
}

fn frame_clock(ctx: &Context) -> Duration {
    Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0))
}

/// Pulsaciones globales de cualquier botón del puntero (el tacto llega como puntero).
fn route_pointer_events(app: &mut KioskApp, ctx: &Context) {
    let presses: Vec<(egui::Pos2, bool)> = ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => Some((*pos, *pressed)),
                _ => None,
            })
            .collect()
    });

    for (pos, pressed) in presses {
        if pressed {
            app.pointer_pressed(pos);
        } else {
            app.pointer_released(pos);
        }
    }
}
