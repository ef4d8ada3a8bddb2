use std::collections::HashMap;

use i18n_embed::DesktopLanguageRequester;
use unic_langid::{langid, LanguageIdentifier};

// Simple in-memory translations
#[derive(Default)]
pub struct Translations {
    strings: HashMap<&'static str, &'static str>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: &'static str) {
        self.strings.insert(key, value);
    }

    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.strings.get(key).copied()
    }
}

const FALLBACK: LanguageIdentifier = langid!("en-US");

pub struct Localizations {
    translations: HashMap<LanguageIdentifier, Translations>,
    current_lang: LanguageIdentifier,
}

impl Default for Localizations {
    fn default() -> Self {
        Self::new()
    }
}

impl Localizations {
    /// Picks the first supported language the desktop asks for.
    pub fn new() -> Self {
        let requested = DesktopLanguageRequester::requested_languages();
        log::debug!("Requested languages: {:?}", requested);
        Self::with_languages(&requested)
    }

    pub fn with_languages(requested: &[LanguageIdentifier]) -> Self {
        let mut translations = HashMap::new();

        let mut en = Translations::new();
        en.insert("app-title", "Media Catcher");
        en.insert("url-label", "Media URL(s), one per line:");
        en.insert("url-placeholder", "Enter URL(s) here...");
        en.insert("playlist-label", "Download entire playlist");
        en.insert("media-label", "Download as:");
        en.insert("media-audio", "Audio");
        en.insert("media-video", "Video");
        en.insert("codec-label", "Format:");
        en.insert("bitrate-label", "Bitrate:");
        en.insert("quality-label", "Max quality:");
        en.insert("theme-label", "Theme:");
        en.insert("output-label", "Output:");
        en.insert("browse-button", "Choose folder...");
        en.insert("download-button", "Download");
        en.insert("stop-button", "Stop");
        en.insert("clear-button", "Clear");
        en.insert("update-button", "Update yt-dlp");
        en.insert("status-ready", "Ready");
        en.insert("status-starting", "Starting download...");
        en.insert("status-downloading", "Downloading");
        en.insert("status-downloading-playlist", "Downloading playlist");
        en.insert("status-item-finished", "Finished item");
        en.insert("status-stopping", "Stopping...");
        en.insert("status-stopped", "Download stopped");
        en.insert("status-complete", "All downloads complete!");
        en.insert("status-error", "Error");
        en.insert("status-updating", "Updating yt-dlp...");
        en.insert("update-success", "yt-dlp updated");
        en.insert("update-failed", "Failed to update yt-dlp");
        en.insert("error-title", "Error");
        en.insert("close-button", "Close");
        translations.insert(langid!("en-US"), en);

        let mut es = Translations::new();
        es.insert("app-title", "Media Catcher");
        es.insert("url-label", "URL(s), una por línea:");
        es.insert("url-placeholder", "Ingrese las URL aquí...");
        es.insert("playlist-label", "Descargar la lista completa");
        es.insert("media-label", "Descargar como:");
        es.insert("media-audio", "Audio");
        es.insert("media-video", "Video");
        es.insert("codec-label", "Formato:");
        es.insert("bitrate-label", "Tasa de bits:");
        es.insert("quality-label", "Calidad máxima:");
        es.insert("theme-label", "Tema:");
        es.insert("output-label", "Destino:");
        es.insert("browse-button", "Elegir carpeta...");
        es.insert("download-button", "Descargar");
        es.insert("stop-button", "Detener");
        es.insert("clear-button", "Limpiar");
        es.insert("update-button", "Actualizar yt-dlp");
        es.insert("status-ready", "Listo");
        es.insert("status-starting", "Iniciando descarga...");
        es.insert("status-downloading", "Descargando");
        es.insert("status-downloading-playlist", "Descargando lista");
        es.insert("status-item-finished", "Elemento terminado");
        es.insert("status-stopping", "Deteniendo...");
        es.insert("status-stopped", "Descarga detenida");
        es.insert("status-complete", "¡Todas las descargas completadas!");
        es.insert("status-error", "Error");
        es.insert("status-updating", "Actualizando yt-dlp...");
        es.insert("update-success", "yt-dlp actualizado");
        es.insert("update-failed", "Error al actualizar yt-dlp");
        es.insert("error-title", "Error");
        es.insert("close-button", "Cerrar");
        translations.insert(langid!("es-ES"), es);

        let mut localizer = Self {
            translations,
            current_lang: FALLBACK,
        };
        if let Some(lang) = requested.iter().find(|lang| localizer.select(lang)) {
            log::info!("Using language {}", lang);
        }
        localizer
    }

    pub fn current(&self) -> &LanguageIdentifier {
        &self.current_lang
    }

    /// Exact match first, then any table sharing the language subtag.
    pub fn select(&mut self, lang: &LanguageIdentifier) -> bool {
        if self.translations.contains_key(lang) {
            self.current_lang = lang.clone();
            return true;
        }

        let same_language = self
            .translations
            .keys()
            .find(|key| key.language == lang.language)
            .cloned();
        match same_language {
            Some(key) => {
                self.current_lang = key;
                true
            }
            None => false,
        }
    }

    /// Current language, then English, then the key itself.
    pub fn tr(&self, key: &str) -> String {
        self.translations
            .get(&self.current_lang)
            .and_then(|t| t.lookup(key))
            .or_else(|| self.translations.get(&FALLBACK).and_then(|t| t.lookup(key)))
            .unwrap_or(key)
            .to_string()
    }
}
