use crate::core::Viewport;
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Pan/Zoom des Diagramm-Fensters
    pub viewport: Viewport,
    /// Letzte bekannte Zeigerposition in Diagramm-Koordinaten
    pub cursor_diagram_pos: Option<Vec2>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
