// src/config.rs

use crate::error::KioskError;
use crate::model::Screen;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Variable de entorno con la ruta de un YAML que sustituye al embebido (solo nativo).
pub const CONFIG_ENV: &str = "KIOSK_CONFIG";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AutoProgressPolicy {
    /// Capítulos y pantalla final avanzan solos.
    Timed,
    /// Solo la pantalla final vuelve al inicio.
    #[default]
    EndOnly,
    /// Sin transiciones automáticas.
    Manual,
}

/// Qué hace el temporizador de auto-avance cuando vence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoAction {
    Advance,
    ReturnHome,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IdleReset {
    pub enabled: bool,
    pub timeout_ms: u64,
}

impl Default for IdleReset {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: 60_000,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AutoProgress {
    pub policy: AutoProgressPolicy,
    pub chapter_dwell_ms: u64,
    pub end_dwell_ms: u64,
}

impl Default for AutoProgress {
    fn default() -> Self {
        Self {
            policy: AutoProgressPolicy::EndOnly,
            chapter_dwell_ms: 12_000,
            end_dwell_ms: 8_000,
        }
    }
}

impl AutoProgress {
    /// Tiempo de permanencia y acción para la pantalla dada, si la política la temporiza.
    pub fn dwell_for(&self, screen: Screen) -> Option<(Duration, AutoAction)> {
        match (self.policy, screen) {
            (AutoProgressPolicy::Manual, _) => None,
            (AutoProgressPolicy::Timed | AutoProgressPolicy::EndOnly, Screen::End) => {
                Some((Duration::from_millis(self.end_dwell_ms), AutoAction::ReturnHome))
            }
            (AutoProgressPolicy::Timed, Screen::Chapter(_)) => {
                Some((Duration::from_millis(self.chapter_dwell_ms), AutoAction::Advance))
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KioskConfig {
    pub home: Screen,
    pub sequence: Vec<Screen>,
    pub wrap_at_end: bool,
    pub idle_reset: IdleReset,
    pub auto_progress: AutoProgress,
    pub drag_threshold_px: f32,
    pub admin_corner_px: f32,
    pub admin_hold_ms: u64,
    pub transition_ms: u64,
    pub preload_timeout_ms: Option<u64>,
    pub fullscreen: bool,
    pub arabic_font_path: Option<String>,
    /// Directorio (nativo) o URL base (web) bajo el que viven las rutas `/videos/...` del catálogo.
    pub video_root: String,
    /// Programa y argumentos del reproductor nativo; vacío = aplicación por defecto del sistema.
    pub video_player: Vec<String>,
}

impl Default for KioskConfig {
    fn default() -> Self {
        use crate::model::{ChapterId, Segment};

        let mut sequence = vec![Screen::Landing(Segment::Corporate)];
        sequence.extend(ChapterId::ALL.into_iter().map(Screen::Chapter));
        sequence.push(Screen::End);

        Self {
            home: Screen::Landing(Segment::Corporate),
            sequence,
            wrap_at_end: true,
            idle_reset: IdleReset::default(),
            auto_progress: AutoProgress::default(),
            drag_threshold_px: 50.0,
            admin_corner_px: 100.0,
            admin_hold_ms: 3_000,
            transition_ms: 800,
            preload_timeout_ms: Some(3_000),
            fullscreen: true,
            arabic_font_path: None,
            video_root: ".".to_owned(),
            video_player: Vec::new(),
        }
    }
}

impl KioskConfig {
    /// Configuración embebida en el binario.
    pub fn embedded() -> Result<Self, KioskError> {
        Self::from_yaml(include_str!("data/kiosk.yaml"))
    }

    pub fn from_yaml(text: &str) -> Result<Self, KioskError> {
        let config: KioskConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &std::path::Path) -> Result<Self, KioskError> {
        let text = std::fs::read_to_string(path).map_err(|source| KioskError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// En nativo respeta `KIOSK_CONFIG`; si no está definida usa la embebida.
    pub fn load() -> Result<Self, KioskError> {
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            let path = std::path::PathBuf::from(path);
            log::info!("Cargando configuración desde {}", path.display());
            return Self::from_path(&path);
        }
        Self::embedded()
    }

    pub fn validate(&self) -> Result<(), KioskError> {
        if self.sequence.is_empty() {
            return Err(KioskError::InvalidConfig("la secuencia está vacía".into()));
        }
        let mut seen = HashSet::new();
        for screen in &self.sequence {
            if !seen.insert(*screen) {
                return Err(KioskError::InvalidConfig(format!(
                    "{screen} aparece dos veces en la secuencia"
                )));
            }
            if screen.is_card_target() {
                return Err(KioskError::InvalidConfig(format!(
                    "{screen} solo es accesible desde una tarjeta"
                )));
            }
        }
        if !self.sequence.contains(&self.home) {
            return Err(KioskError::InvalidConfig(format!(
                "la pantalla inicial {} no está en la secuencia",
                self.home
            )));
        }
        if self.idle_reset.enabled && self.idle_reset.timeout_ms == 0 {
            return Err(KioskError::InvalidConfig("idle_reset.timeout_ms es 0".into()));
        }
        let dwell_zero = match self.auto_progress.policy {
            AutoProgressPolicy::Timed => {
                self.auto_progress.chapter_dwell_ms == 0 || self.auto_progress.end_dwell_ms == 0
            }
            AutoProgressPolicy::EndOnly => self.auto_progress.end_dwell_ms == 0,
            AutoProgressPolicy::Manual => false,
        };
        if dwell_zero {
            return Err(KioskError::InvalidConfig("tiempo de auto-avance a 0".into()));
        }
        if self.admin_hold_ms == 0 {
            return Err(KioskError::InvalidConfig("admin_hold_ms es 0".into()));
        }
        Ok(())
    }

    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_reset
            .enabled
            .then(|| Duration::from_millis(self.idle_reset.timeout_ms))
    }

    pub fn admin_hold(&self) -> Duration {
        Duration::from_millis(self.admin_hold_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn preload_timeout(&self) -> Option<Duration> {
        self.preload_timeout_ms.map(Duration::from_millis)
    }
}
