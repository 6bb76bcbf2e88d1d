// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KioskError {
    #[error("YAML inválido: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("no se pudo leer {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("pantalla desconocida: {0:?}")]
    UnknownScreen(String),

    #[error("catálogo inconsistente: {0}")]
    Catalog(String),

    #[error("configuración inválida: {0}")]
    InvalidConfig(String),

    #[error("no se pudo reproducir el vídeo: {0}")]
    Playback(String),
}
