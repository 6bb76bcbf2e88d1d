use crate::error::KioskError;
use std::path::{Path, PathBuf};

/// Vídeo de demostración de la página de detalle.
/// En nativo lo reproduce un proceso externo (el configurado o el del sistema);
/// en la web, un elemento `<video>` superpuesto al lienzo.
pub struct VideoPlayback {
    root: PathBuf,
    player: Vec<String>,
    source: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    child: Option<std::process::Child>,
    #[cfg(target_arch = "wasm32")]
    element: Option<web_sys::HtmlVideoElement>,
}

/// Geometría del `<video>` en la web: deja libre la franja del botón de cierre.
#[cfg(target_arch = "wasm32")]
const WEB_VIDEO_STYLE: &str = "position:fixed;left:10%;top:18%;width:80%;height:62%;\
     object-fit:contain;background:#000;border-radius:16px;z-index:10;";

impl VideoPlayback {
    pub fn new(root: impl Into<PathBuf>, player: Vec<String>) -> Self {
        Self {
            root: root.into(),
            player,
            source: None,
            #[cfg(not(target_arch = "wasm32"))]
            child: None,
            #[cfg(target_arch = "wasm32")]
            element: None,
        }
    }

    /// Las rutas del catálogo son absolutas respecto a la raíz de vídeos (`/videos/x.mp4`).
    pub fn locate(&self, video_path: &str) -> PathBuf {
        self.root.join(video_path.trim_start_matches('/'))
    }

    /// Ruta del catálogo que se está reproduciendo.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.source.is_some()
    }

    /// Sustituye lo que estuviera sonando.
    pub fn play(&mut self, video_path: &str) -> Result<(), KioskError> {
        self.stop();
        let location = self.locate(video_path);
        self.launch(&location)?;
        log::info!("Reproduciendo {}", location.display());
        self.source = Some(video_path.to_owned());
        Ok(())
    }

    /// Devuelve `true` si había algo reproduciéndose.
    pub fn stop(&mut self) -> bool {
        self.halt();
        let was_playing = self.source.take().is_some();
        if was_playing {
            log::debug!("Vídeo detenido");
        }
        was_playing
    }

    /// `true` una sola vez, cuando la reproducción termina por sí misma.
    pub fn poll_finished(&mut self) -> bool {
        if !self.is_playing() || !self.has_ended() {
            return false;
        }
        self.halt();
        self.source = None;
        log::info!("Vídeo terminado");
        true
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn launch(&mut self, location: &Path) -> Result<(), KioskError> {
        let io_error = |source| KioskError::Io {
            path: location.display().to_string(),
            source,
        };
        if !location.is_file() {
            return Err(io_error(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "vídeo no encontrado",
            )));
        }
        match self.player.split_first() {
            Some((program, args)) => {
                let child = std::process::Command::new(program)
                    .args(args)
                    .arg(location)
                    .spawn()
                    .map_err(io_error)?;
                self.child = Some(child);
            }
            // Sin reproductor configurado: la aplicación por defecto del sistema
            None => open::that_detached(location).map_err(io_error)?,
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn halt(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                log::debug!("El reproductor ya había salido: {e}");
            }
            if let Err(e) = child.wait() {
                log::warn!("No se pudo recoger el reproductor: {e}");
            }
        }
    }

    /// Solo se sabe cuándo acaba un reproductor propio; el del sistema se suelta.
    #[cfg(not(target_arch = "wasm32"))]
    fn has_ended(&mut self) -> bool {
        match self.child.as_mut().map(|child| child.try_wait()) {
            Some(Ok(Some(status))) => {
                log::debug!("Reproductor terminado: {status}");
                true
            }
            Some(Ok(None)) | None => false,
            Some(Err(e)) => {
                log::warn!("Estado del reproductor desconocido: {e}");
                false
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn launch(&mut self, location: &Path) -> Result<(), KioskError> {
        use eframe::wasm_bindgen::JsCast as _;

        let js_error = |e: eframe::wasm_bindgen::JsValue| KioskError::Playback(format!("{e:?}"));
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| KioskError::Playback("sin documento".into()))?;
        let body = document
            .body()
            .ok_or_else(|| KioskError::Playback("sin <body>".into()))?;

        let video = document
            .create_element("video")
            .map_err(js_error)?
            .dyn_into::<web_sys::HtmlVideoElement>()
            .map_err(|_| KioskError::Playback("<video> no soportado".into()))?;
        video.set_src(&location.to_string_lossy());
        video.set_autoplay(true);
        video.set_controls(true);
        video.set_attribute("style", WEB_VIDEO_STYLE).map_err(js_error)?;
        body.append_child(&video).map_err(js_error)?;

        self.element = Some(video);
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    fn halt(&mut self) {
        if let Some(video) = self.element.take() {
            if let Err(e) = video.pause() {
                log::debug!("pause() falló: {e:?}");
            }
            video.remove();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn has_ended(&mut self) -> bool {
        self.element.as_ref().is_some_and(|video| video.ended())
    }
}

impl Drop for VideoPlayback {
    fn drop(&mut self) {
        self.halt();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_paths_resolve_under_the_video_root() {
        let playback = VideoPlayback::new("/srv/kiosk", Vec::new());
        assert_eq!(
            playback.locate("/videos/vcp.mp4"),
            PathBuf::from("/srv/kiosk/videos/vcp.mp4")
        );
        assert_eq!(
            playback.locate("videos/vcp.mp4"),
            PathBuf::from("/srv/kiosk/videos/vcp.mp4")
        );
    }

    #[test]
    fn missing_file_is_an_io_error_and_nothing_plays() {
        let mut playback = VideoPlayback::new("/nonexistent-kiosk-root", Vec::new());
        let err = playback.play("/videos/vcp.mp4");
        assert!(matches!(err, Err(KioskError::Io { .. })));
        assert!(!playback.is_playing());
        assert!(!playback.poll_finished());
    }

    #[test]
    fn stop_without_playback_reports_nothing() {
        let mut playback = VideoPlayback::new(".", Vec::new());
        assert!(!playback.stop());
        assert_eq!(playback.source(), None);
    }

    #[cfg(unix)]
    #[test]
    fn configured_player_runs_until_it_exits() {
        let dir = std::env::temp_dir().join(format!("kiosk-video-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("videos")).expect("directorio temporal");
        std::fs::write(dir.join("videos/demo.mp4"), b"").expect("vídeo vacío");

        // `true` ignora su argumento y sale enseguida
        let mut playback = VideoPlayback::new(&dir, vec!["true".to_owned()]);
        playback.play("/videos/demo.mp4").expect("reproductor lanzado");
        assert_eq!(playback.source(), Some("/videos/demo.mp4"));

        let mut finished = false;
        for _ in 0..200 {
            if playback.poll_finished() {
                finished = true;
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(finished);
        assert!(!playback.is_playing());

        std::fs::remove_dir_all(&dir).ok();
    }
}
