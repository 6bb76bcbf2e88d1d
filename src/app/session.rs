use super::navigation::{LinearSequence, Navigator};
use super::timers::{TimerPurpose, Timers};
use crate::config::{AutoAction, AutoProgress, KioskConfig};
use crate::error::KioskError;
use crate::model::Screen;
use egui::Pos2;
use std::time::Duration;

/// Origen de una transición (solo para trazas).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cause {
    Advance,
    Back,
    Jump,
    Swipe,
    IdleReset,
    AutoProgress,
    AdminReset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    pub cause: Cause,
}

/// Estado de sesión: pantalla actual más los tres temporizadores que la vigilan.
/// El tiempo siempre llega como argumento (`now`, desde el arranque).
#[derive(Clone, Debug)]
pub struct Session {
    navigator: Navigator,
    timers: Timers,
    home: Screen,
    idle_timeout: Option<Duration>,
    auto_progress: AutoProgress,
    admin_corner: f32,
    admin_hold: Duration,
    entered_at: Duration,
}

impl Session {
    /// Valida la configuración antes de usarla: una sesión nunca arranca con una secuencia vacía.
    pub fn new(config: &KioskConfig, now: Duration) -> Result<Self, KioskError> {
        config.validate()?;
        let navigator = Navigator::new(
            config.home,
            LinearSequence::new(config.sequence.clone())?,
            config.wrap_at_end,
            config.drag_threshold_px,
        );
        let mut session = Self {
            navigator,
            timers: Timers::default(),
            home: config.home,
            idle_timeout: config.idle_timeout(),
            auto_progress: config.auto_progress.clone(),
            admin_corner: config.admin_corner_px,
            admin_hold: config.admin_hold(),
            entered_at: now,
        };
        session.arm_screen_timers(now);
        Ok(session)
    }

    pub fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    pub fn home(&self) -> Screen {
        self.home
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Momento en que se entró en la pantalla actual.
    pub fn entered_at(&self) -> Duration {
        self.entered_at
    }

    pub fn advance(&mut self, now: Duration) -> Option<Transition> {
        let from = self.screen();
        let changed = self.navigator.advance();
        self.finish(from, changed, Cause::Advance, now)
    }

    pub fn back(&mut self, now: Duration) -> Option<Transition> {
        let from = self.screen();
        let changed = self.navigator.back();
        self.finish(from, changed, Cause::Back, now)
    }

    pub fn go_to(&mut self, screen: Screen, now: Duration) -> Option<Transition> {
        self.jump(screen, Cause::Jump, now)
    }

    pub fn go_home(&mut self, now: Duration) -> Option<Transition> {
        self.jump(self.home, Cause::Jump, now)
    }

    pub fn handle_drag_end(&mut self, offset_x: f32, now: Duration) -> Option<Transition> {
        let from = self.screen();
        match self.navigator.handle_drag_end(offset_x) {
            Some(direction) => {
                log::debug!("Deslizamiento {direction:?} ({offset_x:.0}px)");
                let changed = self.screen() != from;
                self.finish(from, changed, Cause::Swipe, now)
            }
            None => None,
        }
    }

    /// Pulsación en cualquier punto: reinicia la inactividad y, en la esquina, arma el reinicio oculto.
    pub fn pointer_down(&mut self, pos: Pos2, now: Duration) {
        self.restart_idle(now);
        if self.in_admin_corner(pos) {
            log::debug!("Pulsación en la esquina de administración");
            self.timers.schedule(TimerPurpose::AdminHold, now, self.admin_hold);
        }
    }

    pub fn pointer_up(&mut self) {
        self.timers.cancel(TimerPurpose::AdminHold);
    }

    /// Ejecuta los temporizadores vencidos y devuelve las transiciones que provocaron.
    pub fn tick(&mut self, now: Duration) -> Vec<Transition> {
        let mut transitions = Vec::new();
        while let Some(purpose) = self.timers.take_expired(now) {
            let fired = match purpose {
                TimerPurpose::AdminHold => {
                    log::info!("Reinicio de administración");
                    self.jump(self.home, Cause::AdminReset, now)
                }
                TimerPurpose::Idle => self.jump(self.home, Cause::IdleReset, now),
                TimerPurpose::AutoProgress => match self.auto_progress.dwell_for(self.screen()) {
                    Some((_, AutoAction::Advance)) => {
                        let from = self.screen();
                        let changed = self.navigator.advance();
                        self.finish(from, changed, Cause::AutoProgress, now)
                    }
                    Some((_, AutoAction::ReturnHome)) => {
                        self.jump(self.home, Cause::AutoProgress, now)
                    }
                    None => None,
                },
            };
            transitions.extend(fired);
        }
        transitions
    }

    /// Rearma los temporizadores de la pantalla actual desde `now` en una época nueva.
    /// Se usa al abrirse la puerta de precarga: nada programado antes sobrevive.
    pub fn restart_timers(&mut self, now: Duration) {
        let epoch = self.timers.bump_epoch();
        self.timers.cancel(TimerPurpose::AdminHold);
        self.entered_at = now;
        self.arm_screen_timers(now);
        log::debug!("Temporizadores rearmados en {} (época {epoch})", self.screen());
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    /// Desmontaje: ningún temporizador sobrevive a la sesión.
    pub fn shutdown(&mut self) {
        self.timers.clear();
    }

    fn jump(&mut self, screen: Screen, cause: Cause, now: Duration) -> Option<Transition> {
        let from = self.screen();
        let changed = self.navigator.go_to(screen);
        self.finish(from, changed, cause, now)
    }

    fn finish(&mut self, from: Screen, changed: bool, cause: Cause, now: Duration) -> Option<Transition> {
        if !changed {
            return None;
        }
        let to = self.screen();
        let epoch = self.timers.bump_epoch();
        self.entered_at = now;
        self.arm_screen_timers(now);
        log::info!("{from} -> {to} ({cause:?}, época {epoch})");
        Some(Transition { from, to, cause })
    }

    fn arm_screen_timers(&mut self, now: Duration) {
        match self.auto_progress.dwell_for(self.screen()) {
            Some((dwell, _)) => self.timers.schedule(TimerPurpose::AutoProgress, now, dwell),
            None => {
                self.timers.cancel(TimerPurpose::AutoProgress);
            }
        }
        self.restart_idle(now);
    }

    fn restart_idle(&mut self, now: Duration) {
        if let Some(timeout) = self.idle_timeout {
            self.timers.schedule(TimerPurpose::Idle, now, timeout);
        }
    }

    fn in_admin_corner(&self, pos: Pos2) -> bool {
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x < self.admin_corner && pos.y < self.admin_corner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AutoProgressPolicy;
    use crate::model::{ChapterId, Product, Segment};

    const HOME: Screen = Screen::Landing(Segment::Corporate);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn config(policy: AutoProgressPolicy, idle: bool) -> KioskConfig {
        let mut config = KioskConfig::default();
        config.auto_progress.policy = policy;
        config.idle_reset.enabled = idle;
        config
    }

    fn corner() -> Pos2 {
        Pos2::new(20.0, 30.0)
    }

    #[test]
    fn starts_on_the_designated_home_screen() {
        let session = Session::new(&KioskConfig::default(), ms(0)).expect("sesión");
        assert_eq!(session.screen(), HOME);
        assert!(session.timers().is_live(TimerPurpose::Idle));
        assert!(!session.timers().is_live(TimerPurpose::AutoProgress));
    }

    #[test]
    fn admin_hold_released_early_changes_nothing() {
        let mut session = Session::new(&config(AutoProgressPolicy::Manual, false), ms(0)).expect("sesión");
        session.go_to(Screen::Chapter(ChapterId::Three), ms(0));

        session.pointer_down(corner(), ms(1000));
        assert!(session.tick(ms(3999)).is_empty());
        session.pointer_up();

        assert!(session.tick(ms(10_000)).is_empty());
        assert_eq!(session.screen(), Screen::Chapter(ChapterId::Three));
    }

    #[test]
    fn admin_hold_forces_home_from_any_screen() {
        for start in Screen::all().into_iter().filter(|&s| s != HOME) {
            let mut session = Session::new(&config(AutoProgressPolicy::Manual, false), ms(0)).expect("sesión");
            session.go_to(start, ms(0));
            session.pointer_down(corner(), ms(500));

            let fired = session.tick(ms(3500));
            assert_eq!(session.screen(), HOME, "desde {start}");
            assert_eq!(fired.last().map(|t| t.cause), Some(Cause::AdminReset));
        }
    }

    #[test]
    fn admin_hold_survives_an_intermediate_transition() {
        let mut session = Session::new(&config(AutoProgressPolicy::Manual, false), ms(0)).expect("sesión");
        session.pointer_down(corner(), ms(0));
        session.go_to(Screen::Cards(Segment::Retail), ms(1000));
        session.tick(ms(3000));
        assert_eq!(session.screen(), HOME);
    }

    #[test]
    fn press_outside_the_corner_does_not_arm_the_admin_timer() {
        let mut session = Session::new(&config(AutoProgressPolicy::Manual, false), ms(0)).expect("sesión");
        session.pointer_down(Pos2::new(100.0, 10.0), ms(0));
        assert!(!session.timers().is_live(TimerPurpose::AdminHold));
        session.pointer_down(Pos2::new(10.0, 100.0), ms(0));
        assert!(!session.timers().is_live(TimerPurpose::AdminHold));
    }

    #[test]
    fn end_only_policy_resets_from_the_end_screen() {
        let mut session = Session::new(&config(AutoProgressPolicy::EndOnly, false), ms(0)).expect("sesión");
        session.go_to(Screen::Chapter(ChapterId::One), ms(0));
        assert!(session.tick(ms(60_000)).is_empty());

        session.go_to(Screen::End, ms(100_000));
        assert!(session.tick(ms(107_999)).is_empty());
        let fired = session.tick(ms(108_000));
        assert_eq!(session.screen(), HOME);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].cause, Cause::AutoProgress);
    }

    #[test]
    fn timed_policy_walks_the_chapters_on_its_own() {
        let mut session = Session::new(&config(AutoProgressPolicy::Timed, false), ms(0)).expect("sesión");
        session.advance(ms(0));
        assert_eq!(session.screen(), Screen::Chapter(ChapterId::One));

        let mut now = 0;
        for expected in [ChapterId::Two, ChapterId::Three, ChapterId::Four] {
            now += 12_000;
            session.tick(ms(now));
            assert_eq!(session.screen(), Screen::Chapter(expected));
        }
        now += 12_000;
        session.tick(ms(now));
        assert_eq!(session.screen(), Screen::End);

        now += 8_000;
        session.tick(ms(now));
        assert_eq!(session.screen(), HOME);
    }

    #[test]
    fn manual_policy_never_moves_on_its_own() {
        let mut session = Session::new(&config(AutoProgressPolicy::Manual, false), ms(0)).expect("sesión");
        session.go_to(Screen::End, ms(0));
        assert!(session.tick(ms(1_000_000)).is_empty());
        assert_eq!(session.screen(), Screen::End);
    }

    #[test]
    fn transition_before_the_dwell_cancels_the_pending_auto_progress() {
        let mut session = Session::new(&config(AutoProgressPolicy::Timed, false), ms(0)).expect("sesión");
        session.go_to(Screen::Chapter(ChapterId::One), ms(0));
        // Se sale del capítulo antes de los 12s
        session.go_to(Screen::Detail(Product::Vcp), ms(5_000));

        assert!(session.tick(ms(12_000)).is_empty());
        assert!(session.tick(ms(30_000)).is_empty());
        assert_eq!(session.screen(), Screen::Detail(Product::Vcp));
    }

    #[test]
    fn swipe_restarts_the_dwell_instead_of_stacking_it() {
        let mut session = Session::new(&config(AutoProgressPolicy::Timed, false), ms(0)).expect("sesión");
        session.go_to(Screen::Chapter(ChapterId::One), ms(0));
        session.handle_drag_end(-80.0, ms(10_000));
        assert_eq!(session.screen(), Screen::Chapter(ChapterId::Two));

        // El plazo del capítulo 1 (12s) ya no cuenta
        assert!(session.tick(ms(12_000)).is_empty());
        session.tick(ms(22_000));
        assert_eq!(session.screen(), Screen::Chapter(ChapterId::Three));
    }

    #[test]
    fn idle_timeout_returns_home_after_the_last_press() {
        let mut session = Session::new(&config(AutoProgressPolicy::Manual, true), ms(0)).expect("sesión");
        session.go_to(Screen::Cards(Segment::Retail), ms(0));
        session.pointer_down(Pos2::new(500.0, 500.0), ms(30_000));

        assert!(session.tick(ms(89_999)).is_empty());
        let fired = session.tick(ms(90_000));
        assert_eq!(fired[0].cause, Cause::IdleReset);
        assert_eq!(session.screen(), HOME);
    }

    #[test]
    fn stale_idle_deadline_is_ignored_after_a_transition() {
        let mut session = Session::new(&config(AutoProgressPolicy::Manual, true), ms(0)).expect("sesión");
        session.go_to(Screen::Cards(Segment::Retail), ms(50_000));
        // El primer plazo (60s) quedó sustituido por el de la transición (110s)
        assert!(session.tick(ms(60_000)).is_empty());
        assert_eq!(session.screen(), Screen::Cards(Segment::Retail));
    }

    #[test]
    fn disabled_idle_reset_never_arms() {
        let mut session = Session::new(&config(AutoProgressPolicy::Manual, false), ms(0)).expect("sesión");
        session.go_to(Screen::Cards(Segment::Corporate), ms(0));
        session.pointer_down(Pos2::new(400.0, 400.0), ms(0));
        assert!(!session.timers().is_live(TimerPurpose::Idle));
        assert!(session.tick(ms(10_000_000)).is_empty());
    }

    #[test]
    fn no_op_navigation_reports_no_transition() {
        let mut session = Session::new(&KioskConfig::default(), ms(0)).expect("sesión");
        let epoch = session.timers().epoch();
        assert_eq!(session.back(ms(10)), None);
        assert_eq!(session.go_home(ms(10)), None);
        assert_eq!(session.handle_drag_end(10.0, ms(10)), None);
        assert_eq!(session.timers().epoch(), epoch);
    }

    #[test]
    fn shutdown_clears_every_timer() {
        let mut session = Session::new(&config(AutoProgressPolicy::Timed, true), ms(0)).expect("sesión");
        session.go_to(Screen::Chapter(ChapterId::One), ms(0));
        session.pointer_down(corner(), ms(0));
        session.shutdown();
        assert_eq!(session.next_due(), None);
        assert!(session.tick(ms(u32::MAX as u64)).is_empty());
    }

    #[test]
    fn empty_sequence_is_refused_instead_of_panicking_later() {
        let mut config = KioskConfig::default();
        config.sequence.clear();
        assert!(matches!(
            Session::new(&config, ms(0)),
            Err(KioskError::InvalidConfig(_))
        ));
    }

    #[test]
    fn restarting_timers_discards_deadlines_armed_before() {
        let mut session = Session::new(&config(AutoProgressPolicy::Manual, true), ms(0)).expect("sesión");
        session.restart_timers(ms(45_000));

        // El plazo inicial (60s) ya no cuenta; el nuevo vence a los 105s
        assert!(session.tick(ms(60_000)).is_empty());
        assert_eq!(session.next_due(), Some(ms(105_000)));
        assert_eq!(session.entered_at(), ms(45_000));
    }
}
