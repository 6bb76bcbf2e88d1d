use super::*;
use crate::model::{Card, Chapter, Segment};

/// Orden de pintado de una rejilla de dos columnas. En RTL se intercambian las
/// columnas de cada fila; una última tarjeta sin pareja se queda donde está.
pub fn grid_order<T>(items: &[T], rtl: bool) -> Vec<&T> {
    if !rtl {
        return items.iter().collect();
    }
    (0..items.len())
        .map(|idx| {
            let swapped = if idx % 2 == 0 { idx + 1 } else { idx - 1 };
            items.get(swapped).unwrap_or(&items[idx])
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChapterPosition {
    pub index: usize,
    pub count: usize,
}

impl KioskApp {
    /// Registro del capítulo que se está mostrando, si la pantalla es un capítulo.
    pub fn current_chapter(&self) -> Option<&Chapter> {
        let id = self.screen().chapter()?;
        self.catalog.chapter(id)
    }

    pub fn chapter_position(&self) -> Option<ChapterPosition> {
        let current = self.screen();
        let chapters = self.catalog.chapters();
        let index = chapters.iter().position(|c| c.id == current)?;
        Some(ChapterPosition {
            index,
            count: chapters.len(),
        })
    }

    /// Tarjeta de la pantalla de detalle o juego actual.
    pub fn current_card(&self) -> Option<&Card> {
        self.catalog.card_for(self.screen())
    }

    pub fn grid_cards(&self, segment: Segment) -> Vec<&Card> {
        grid_order(self.catalog.cards(segment), self.language.is_rtl())
    }

    /// Segmento resaltado en el selector de la cabecera.
    pub fn active_segment(&self) -> Segment {
        self.screen().segment().unwrap_or(Segment::Corporate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChapterId, Product};

    #[test]
    fn ltr_order_is_untouched() {
        let items = [1, 2, 3, 4];
        assert_eq!(grid_order(&items, false), vec![&1, &2, &3, &4]);
    }

    #[test]
    fn rtl_swaps_columns_per_row() {
        let items = [1, 2, 3, 4, 5, 6];
        assert_eq!(grid_order(&items, true), vec![&2, &1, &4, &3, &6, &5]);
    }

    #[test]
    fn rtl_keeps_an_unpaired_last_card() {
        let items = [1, 2, 3];
        assert_eq!(grid_order(&items, true), vec![&2, &1, &3]);
        let empty: [u8; 0] = [];
        assert!(grid_order(&empty, true).is_empty());
    }

    fn app() -> KioskApp {
        let catalog = Catalog::embedded().expect("catálogo");
        KioskApp::new(KioskConfig::default(), catalog, Duration::ZERO).expect("app")
    }

    #[test]
    fn chapter_lookup_follows_the_current_screen() {
        let mut app = app();
        assert!(app.current_chapter().is_none());
        app.go_to(Screen::Chapter(ChapterId::Three));
        let chapter = app.current_chapter().expect("capítulo 3");
        assert_eq!(chapter.id, Screen::Chapter(ChapterId::Three));
        assert_eq!(
            app.chapter_position(),
            Some(ChapterPosition { index: 2, count: 4 })
        );
    }

    #[test]
    fn detail_screen_finds_its_card() {
        let mut app = app();
        app.go_to(Screen::Detail(Product::Rdc));
        let card = app.current_card().expect("tarjeta");
        assert!(card.has_video);
        assert_eq!(app.active_segment(), Segment::Corporate);

        app.go_to(Screen::Game(Segment::Retail));
        assert_eq!(app.active_segment(), Segment::Retail);
    }

    #[test]
    fn arabic_grid_uses_the_swapped_order() {
        let mut app = app();
        app.set_language(Language::Ar);
        let ids: Vec<u8> = app.grid_cards(Segment::Retail).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1, 4, 3, 6, 5]);
    }
}
