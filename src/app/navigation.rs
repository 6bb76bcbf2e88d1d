use crate::error::KioskError;
use crate::model::Screen;

/// Orden de las pantallas recorridas con avanzar/retroceder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearSequence {
    screens: Vec<Screen>,
}

impl LinearSequence {
    /// Una secuencia vacía se rechaza aquí; a partir de entonces nunca lo está.
    pub fn new(screens: Vec<Screen>) -> Result<Self, KioskError> {
        if screens.is_empty() {
            return Err(KioskError::InvalidConfig("la secuencia está vacía".into()));
        }
        Ok(Self { screens })
    }

    pub fn position(&self, screen: Screen) -> Option<usize> {
        self.screens.iter().position(|&s| s == screen)
    }

    pub fn first(&self) -> Screen {
        // `new` no admite secuencias vacías
        self.screens[0]
    }

    pub fn get(&self, idx: usize) -> Option<Screen> {
        self.screens.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

/// Dueño de la pantalla actual. Ninguna operación falla: en el peor caso no cambia nada.
#[derive(Clone, Debug)]
pub struct Navigator {
    screen: Screen,
    sequence: LinearSequence,
    wrap_at_end: bool,
    drag_threshold: f32,
}

impl Navigator {
    pub fn new(initial: Screen, sequence: LinearSequence, wrap_at_end: bool, drag_threshold: f32) -> Self {
        Self {
            screen: initial,
            sequence,
            wrap_at_end,
            drag_threshold,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn sequence(&self) -> &LinearSequence {
        &self.sequence
    }

    /// Siguiente pantalla de la secuencia. Devuelve `true` si la pantalla cambió.
    pub fn advance(&mut self) -> bool {
        let next = match self.sequence.position(self.screen) {
            Some(idx) if idx + 1 < self.sequence.len() => self.sequence.get(idx + 1),
            Some(_) if self.wrap_at_end => Some(self.sequence.first()),
            Some(_) => None,
            // Desde una tarjeta o detalle se entra por el principio
            None => Some(self.sequence.first()),
        };
        match next {
            Some(screen) => self.go_to(screen),
            None => false,
        }
    }

    /// Pantalla anterior. Los dos primeros puestos hacen de suelo: no se retrocede desde ellos.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        match self
            .sequence
            .position(self.screen)
            .and_then(|idx| self.sequence.get(idx - 1))
        {
            Some(prev) => self.go_to(prev),
            None => false,
        }
    }

    /// `back()` solo actúa por encima del suelo (posición > 1 de la secuencia).
    pub fn can_go_back(&self) -> bool {
        self.sequence.position(self.screen).is_some_and(|idx| idx > 1)
    }

    /// Salto directo, sin condiciones.
    pub fn go_to(&mut self, screen: Screen) -> bool {
        let changed = self.screen != screen;
        self.screen = screen;
        changed
    }

    /// Arrastre horizontal soltado: hacia la izquierda avanza, hacia la derecha retrocede.
    pub fn handle_drag_end(&mut self, offset_x: f32) -> Option<SwipeDirection> {
        let direction = SwipeDirection::classify(offset_x, self.drag_threshold)?;
        match direction {
            SwipeDirection::Forward => self.advance(),
            SwipeDirection::Backward => self.back(),
        };
        Some(direction)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Forward,
    Backward,
}

impl SwipeDirection {
    pub fn classify(offset_x: f32, threshold: f32) -> Option<Self> {
        if offset_x < -threshold {
            Some(SwipeDirection::Forward)
        } else if offset_x > threshold {
            Some(SwipeDirection::Backward)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChapterId, Product, Segment};

    const LANDING: Screen = Screen::Landing(Segment::Corporate);

    fn sequence() -> LinearSequence {
        let mut screens = vec![LANDING];
        screens.extend(ChapterId::ALL.into_iter().map(Screen::Chapter));
        screens.push(Screen::End);
        LinearSequence::new(screens).expect("secuencia no vacía")
    }

    fn navigator(wrap: bool) -> Navigator {
        Navigator::new(LANDING, sequence(), wrap, 50.0)
    }

    #[test]
    fn advance_steps_to_the_next_entry_and_wraps_from_the_last() {
        let seq = sequence();
        for idx in 0..seq.len() {
            let mut nav = navigator(true);
            nav.go_to(seq.get(idx).expect("en rango"));
            nav.advance();
            let expected = seq.get(idx + 1).unwrap_or(seq.first());
            assert_eq!(nav.screen(), expected, "desde la posición {idx}");
        }
    }

    #[test]
    fn advance_at_the_end_without_wrap_is_a_no_op() {
        let mut nav = navigator(false);
        nav.go_to(Screen::End);
        assert!(!nav.advance());
        assert_eq!(nav.screen(), Screen::End);
    }

    #[test]
    fn advance_from_outside_the_sequence_starts_over() {
        let mut nav = navigator(true);
        nav.go_to(Screen::Detail(Product::Wps));
        nav.advance();
        assert_eq!(nav.screen(), LANDING);
    }

    #[test]
    fn back_is_guarded_on_the_first_two_entries() {
        let mut nav = navigator(true);
        assert!(!nav.back());
        assert_eq!(nav.screen(), LANDING);

        nav.go_to(Screen::Chapter(ChapterId::One));
        assert!(!nav.back());
        assert_eq!(nav.screen(), Screen::Chapter(ChapterId::One));
    }

    #[test]
    fn back_above_the_floor_returns_the_previous_entry() {
        let seq = sequence();
        for idx in 2..seq.len() {
            let mut nav = navigator(true);
            nav.go_to(seq.get(idx).expect("en rango"));
            assert!(nav.back());
            assert_eq!(Some(nav.screen()), seq.get(idx - 1));
        }
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(matches!(
            LinearSequence::new(Vec::new()),
            Err(KioskError::InvalidConfig(_))
        ));
    }

    #[test]
    fn can_go_back_follows_the_sequence_floor_not_the_chapter_number() {
        let screens = ChapterId::ALL.into_iter().map(Screen::Chapter).collect();
        let seq = LinearSequence::new(screens).expect("secuencia no vacía");
        let mut nav = Navigator::new(Screen::Chapter(ChapterId::One), seq, true, 50.0);

        nav.go_to(Screen::Chapter(ChapterId::Two));
        assert!(!nav.can_go_back());
        assert!(!nav.back());

        nav.go_to(Screen::Chapter(ChapterId::Three));
        assert!(nav.can_go_back());
        assert!(nav.back());
        assert_eq!(nav.screen(), Screen::Chapter(ChapterId::Two));
    }

    #[test]
    fn back_outside_the_sequence_does_nothing() {
        let mut nav = navigator(true);
        nav.go_to(Screen::Cards(Segment::Retail));
        assert!(!nav.back());
        assert_eq!(nav.screen(), Screen::Cards(Segment::Retail));
    }

    #[test]
    fn drag_threshold_is_exclusive() {
        let mut nav = navigator(true);
        nav.go_to(Screen::Chapter(ChapterId::Two));

        assert_eq!(nav.handle_drag_end(-50.0), None);
        assert_eq!(nav.handle_drag_end(50.0), None);
        assert_eq!(nav.handle_drag_end(0.0), None);
        assert_eq!(nav.screen(), Screen::Chapter(ChapterId::Two));

        assert_eq!(nav.handle_drag_end(-51.0), Some(SwipeDirection::Forward));
        assert_eq!(nav.screen(), Screen::Chapter(ChapterId::Three));

        assert_eq!(nav.handle_drag_end(51.0), Some(SwipeDirection::Backward));
        assert_eq!(nav.screen(), Screen::Chapter(ChapterId::Two));
    }

    #[test]
    fn walking_the_whole_story_reaches_the_end_screen() {
        let mut nav = navigator(true);
        // Inicio -> capítulo 1 -> ... -> capítulo 4
        for _ in 0..4 {
            nav.advance();
        }
        assert_eq!(nav.screen(), Screen::Chapter(ChapterId::Four));
        nav.advance();
        assert_eq!(nav.screen(), Screen::End);

        nav.go_to(LANDING);
        assert_eq!(nav.screen(), LANDING);
    }

    #[test]
    fn card_jump_ignores_the_previous_screen() {
        let target = Screen::Detail(Product::MobileApp);
        for start in Screen::all() {
            let mut nav = navigator(true);
            nav.go_to(start);
            nav.go_to(target);
            assert_eq!(nav.screen(), target);
        }
    }
}
