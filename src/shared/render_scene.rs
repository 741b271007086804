//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie konsumiert.

use crate::core::{Component, ComponentId, ConnectionId, EntitySnapshot, Viewport};
use glam::Vec2;
use indexmap::IndexSet;
use std::fmt;

/// Aufgelöster Leitungsverlauf einer Verbindung.
#[derive(Debug, Clone, PartialEq)]
pub struct WireRender {
    pub id: ConnectionId,
    /// Start-Port, Zwischenpunkte, Ziel-Port (Diagramm-Koordinaten)
    pub points: Vec<Vec2>,
    pub selected: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Alle Entitäten (Arc-Klon, O(1) pro Frame)
    pub entities: EntitySnapshot,
    /// Leitungen mit aufgelösten Port-Positionen
    pub wires: Vec<WireRender>,
    /// IDs der aktuell selektierten Komponenten
    pub selected_components: IndexSet<ComponentId>,
    /// IDs der aktuell selektierten Verbindungen
    pub selected_connections: IndexSet<ConnectionId>,
    /// Pan/Zoom für diesen Frame
    pub viewport: Viewport,
    /// Rastergröße in Diagramm-Einheiten
    pub grid_size: u32,
    /// Name des aktiven Werkzeugs
    pub active_tool: &'static str,
    /// Position des offenen Leitungs-Starts (für die Vorschau-Linie)
    pub pending_wire_start: Option<Vec2>,
}

impl RenderScene {
    /// Komponenten in Zeichenreihenfolge.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.entities.components().values()
    }

    pub fn is_component_selected(&self, id: ComponentId) -> bool {
        self.selected_components.contains(&id)
    }
}

/// Inhalt der Statuszeile unter dem Diagramm.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSummary {
    /// Zeigerposition in Diagramm-Einheiten (gerundet)
    pub cursor: (i32, i32),
    /// Zoom in Prozent (gerundet)
    pub zoom_percent: u32,
    pub component_count: usize,
    pub connection_count: usize,
    pub tool: &'static str,
}

impl fmt::Display for StatusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X: {} Y: {} | Zoom: {}% | Components: {} | Connections: {} | Tool: {}",
            self.cursor.0,
            self.cursor.1,
            self.zoom_percent,
            self.component_count,
            self.connection_count,
            self.tool
        )
    }
}
