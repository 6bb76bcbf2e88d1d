use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetStatus {
    Pending,
    Loaded,
    Failed,
}

/// Puerta de precarga: bloquea la interfaz hasta que todas las imágenes terminan
/// (bien o mal) o vence el plazo. Una vez abierta no se vuelve a cerrar.
#[derive(Clone, Debug)]
pub struct AssetPreloader {
    assets: Vec<(String, AssetStatus)>,
    started_at: Duration,
    timeout: Option<Duration>,
    open: bool,
}

impl AssetPreloader {
    pub fn new(urls: Vec<String>, timeout: Option<Duration>, now: Duration) -> Self {
        let open = urls.is_empty();
        if open {
            log::info!("Nada que precargar");
        }
        Self {
            assets: urls.into_iter().map(|u| (u, AssetStatus::Pending)).collect(),
            started_at: now,
            timeout,
            open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn total(&self) -> usize {
        self.assets.len()
    }

    pub fn completed(&self) -> usize {
        self.assets
            .iter()
            .filter(|(_, status)| *status != AssetStatus::Pending)
            .count()
    }

    pub fn progress(&self) -> f32 {
        if self.assets.is_empty() {
            1.0
        } else {
            self.completed() as f32 / self.total() as f32
        }
    }

    pub fn pending(&self) -> Vec<String> {
        self.assets
            .iter()
            .filter(|(_, status)| *status == AssetStatus::Pending)
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn mark_loaded(&mut self, url: &str) {
        self.set(url, AssetStatus::Loaded);
    }

    /// Un fallo cuenta como terminado para que la puerta no se quede cerrada.
    pub fn mark_failed(&mut self, url: &str, reason: &str) {
        log::warn!("No se pudo cargar la imagen {url}: {reason}");
        self.set(url, AssetStatus::Failed);
    }

    /// Abre la puerta si ya terminó todo o si venció el plazo. Devuelve si está abierta.
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.open {
            return true;
        }
        if self.completed() == self.total() {
            log::info!("Precarga completa ({} imágenes)", self.total());
            self.open = true;
        } else if let Some(timeout) = self.timeout {
            if now.saturating_sub(self.started_at) >= timeout {
                log::info!(
                    "Plazo de precarga vencido, se abre con {}/{} imágenes",
                    self.completed(),
                    self.total()
                );
                self.open = true;
            }
        }
        self.open
    }

    /// Tiempo restante hasta forzar la apertura, si hay plazo.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        let timeout = self.timeout?;
        Some(timeout.saturating_sub(now.saturating_sub(self.started_at)))
    }

    fn set(&mut self, url: &str, status: AssetStatus) {
        for (asset, current) in &mut self.assets {
            if asset.as_str() == url && *current == AssetStatus::Pending {
                *current = status;
            }
        }
    }
}
