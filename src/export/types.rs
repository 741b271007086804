//! JSON-Verträge des LaTeX-Export-Dienstes.

use crate::core::Diagram;
use serde::{Deserialize, Serialize};

/// Body von `POST /api/export`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest<'a> {
    pub diagram: &'a Diagram,
    /// Vollständiges LaTeX-Dokument inkl. Präambel
    pub include_header: bool,
    /// Koordinaten-Skalierung (Diagramm-Einheiten pro CircuiTikZ-Einheit)
    pub scale: f32,
}

/// Antwort von `POST /api/export`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExportResponse {
    #[serde(default)]
    pub latex: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Antwort von `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Eintrag der Bauteil-Bibliothek des Dienstes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LibraryEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub tikz: String,
}

/// Antwort von `GET /api/components`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentLibrary {
    pub components: Vec<LibraryEntry>,
    pub count: usize,
}

/// Aufrufer-Optionen für einen Export.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExportOptions {
    pub include_header: bool,
    /// `None` oder `<= 0` → Standard-Skalierung
    pub scale: Option<f32>,
}
