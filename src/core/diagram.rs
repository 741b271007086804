//! Serialisierbares Gesamtdiagramm (Übergabeeinheit an den Export-Dienst).

use super::{Component, Connection};
use serde::{Deserialize, Serialize};

/// Optionale Metadaten eines Diagramms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Vollständiges Diagramm: alle Komponenten, alle Verbindungen, Raster und Zoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    pub components: Vec<Component>,
    pub connections: Vec<Connection>,
    /// Rastergröße in Diagramm-Einheiten
    pub grid_size: u32,
    /// Zoom-Faktor zum Zeitpunkt der Erstellung
    pub zoom: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DiagramMetadata>,
}

impl Diagram {
    /// Leeres Diagramm mit Raster und Zoom.
    pub fn empty(grid_size: u32, zoom: f32) -> Self {
        Self {
            components: Vec::new(),
            connections: Vec::new(),
            grid_size,
            zoom,
            metadata: None,
        }
    }

    /// Gibt `true` zurück, wenn keine Komponente enthalten ist.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
