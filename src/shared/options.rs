//! Zentrale Konfiguration für den Schaltplan-Editor.
//!
//! Enthält `const`-Standardwerte sowie die serialisierbaren Laufzeit-Optionen.

use serde::{Deserialize, Serialize};

// ── Raster ──────────────────────────────────────────────────────────

/// Rastergröße in Diagramm-Einheiten
pub const GRID_SIZE: u32 = 50;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Snapshots im Undo/Redo-Verlauf (inkl. Ausgangszustand)
pub const HISTORY_CAPACITY: usize = 50;

// ── Viewport ────────────────────────────────────────────────────────

/// Zoom-Schritt bei Buttons / Shortcuts
pub const VIEW_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt pro Mausrad-Raste
pub const VIEW_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Export-Dienst ───────────────────────────────────────────────────

/// Basis-URL des LaTeX-Export-Dienstes
pub const EXPORT_SERVICE_URL: &str = "http://localhost:8080";
/// CircuiTikZ-Skalierung, wenn der Aufrufer keine angibt
pub const EXPORT_SCALE: f32 = 50.0;
/// Timeout pro Anfrage in Sekunden
pub const EXPORT_TIMEOUT_SECS: u64 = 10;

const CONFIG_FILE_NAME: &str = "circuit_schematic_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `circuit_schematic_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Rastergröße in Diagramm-Einheiten
    pub grid_size: u32,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Verlaufslänge (wird auf mindestens 1 angehoben)
    pub history_capacity: usize,

    // ── Viewport ────────────────────────────────────────────────
    /// Zoom-Schritt bei Buttons / Shortcuts
    pub view_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub view_scroll_zoom_step: f32,

    // ── Export ──────────────────────────────────────────────────
    /// Basis-URL des Export-Dienstes
    pub export_service_url: String,
    /// Standard-Skalierung für den Export
    pub export_scale: f32,
    /// Vollständiges LaTeX-Dokument statt nur der `circuitikz`-Umgebung
    pub export_include_header: bool,
    /// Timeout pro Anfrage in Sekunden
    pub export_timeout_secs: u64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            history_capacity: HISTORY_CAPACITY,
            view_zoom_step: VIEW_ZOOM_STEP,
            view_scroll_zoom_step: VIEW_SCROLL_ZOOM_STEP,
            export_service_url: EXPORT_SERVICE_URL.to_string(),
            export_scale: EXPORT_SCALE,
            export_include_header: false,
            export_timeout_secs: EXPORT_TIMEOUT_SECS,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("circuit-schematic-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Rastergröße als `f32` für die Geometrie.
    pub fn grid(&self) -> f32 {
        self.grid_size as f32
    }

    /// Effektive History-Kapazität (mindestens 1).
    pub fn effective_history_capacity(&self) -> usize {
        self.history_capacity.max(1)
    }
}
