// src/data.rs

use crate::error::KioskError;
use crate::model::{Card, Chapter, ChapterId, Product, Screen, Segment};
use serde::Deserialize;
use std::collections::HashSet;

/// Catálogo de contenidos: capítulos y tarjetas por segmento. Inmutable tras la carga.
#[derive(Deserialize, Debug, Clone)]
pub struct Catalog {
    chapters: Vec<Chapter>,
    retail_cards: Vec<Card>,
    corporate_cards: Vec<Card>,
}

impl Catalog {
    /// Carga el catálogo desde el YAML embebido y comprueba que está sincronizado con `Screen`.
    pub fn embedded() -> Result<Self, KioskError> {
        Self::from_yaml(include_str!("data/catalog.yaml"))
    }

    pub fn from_yaml(text: &str) -> Result<Self, KioskError> {
        let catalog: Catalog = serde_yaml::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), KioskError> {
        // Capítulos: uno por ChapterId, en orden
        if self.chapters.len() != ChapterId::ALL.len() {
            return Err(KioskError::Catalog(format!(
                "se esperaban {} capítulos y hay {}",
                ChapterId::ALL.len(),
                self.chapters.len()
            )));
        }
        for (chapter, expected) in self.chapters.iter().zip(ChapterId::ALL) {
            if chapter.id != Screen::Chapter(expected) {
                return Err(KioskError::Catalog(format!(
                    "capítulo {} fuera de orden: {}",
                    expected.number(),
                    chapter.id
                )));
            }
        }

        // Tarjetas
        for segment in Segment::ALL {
            let cards = self.cards(segment);
            let mut ids = HashSet::new();
            for card in cards {
                if !ids.insert(card.id) {
                    return Err(KioskError::Catalog(format!(
                        "id de tarjeta {} repetido en {}",
                        card.id,
                        segment.key()
                    )));
                }
                if !card.target.is_card_target() || card.target.segment() != Some(segment) {
                    return Err(KioskError::Catalog(format!(
                        "la tarjeta {} de {} apunta a {}",
                        card.id,
                        segment.key(),
                        card.target
                    )));
                }
                if card.has_video && card.video_path.is_none() {
                    return Err(KioskError::Catalog(format!(
                        "la tarjeta {} tiene vídeo pero no ruta",
                        card.target
                    )));
                }
                if matches!(card.target, Screen::Detail(_))
                    && (card.content_title.is_none() || card.content_description.is_none())
                {
                    return Err(KioskError::Catalog(format!(
                        "falta el contenido de {}",
                        card.target
                    )));
                }
            }
            if !cards.iter().any(|c| c.target == Screen::Game(segment)) {
                return Err(KioskError::Catalog(format!(
                    "no hay tarjeta de juego en {}",
                    segment.key()
                )));
            }
        }

        for product in Product::ALL {
            let target = Screen::Detail(product);
            let count = self
                .cards(product.segment())
                .iter()
                .filter(|c| c.target == target)
                .count();
            if count != 1 {
                return Err(KioskError::Catalog(format!(
                    "{target} tiene {count} tarjetas (se esperaba 1)"
                )));
            }
        }
        Ok(())
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, id: ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == Screen::Chapter(id))
    }

    pub fn cards(&self, segment: Segment) -> &[Card] {
        match segment {
            Segment::Retail => &self.retail_cards,
            Segment::Corporate => &self.corporate_cards,
        }
    }

    /// Tarjeta cuyo destino es la pantalla dada (detalle o juego).
    pub fn card_for(&self, screen: Screen) -> Option<&Card> {
        let segment = screen.segment()?;
        self.cards(segment).iter().find(|c| c.target == screen)
    }

    pub fn background_images(&self) -> Vec<String> {
        self.chapters
            .iter()
            .map(|c| c.background_image.clone())
            .collect()
    }
}
