//! Use-Case-Funktionen für Pan/Zoom des Viewports.

use crate::app::AppState;
use glam::Vec2;

/// Setzt den Zoom absolut (geklemmt auf den erlaubten Bereich).
pub fn set_zoom(state: &mut AppState, scale: f32) {
    state.view.viewport.set_scale(scale);
}

/// Ändert den Zoom um einen Faktor.
pub fn zoom_by(state: &mut AppState, factor: f32) {
    state.view.viewport.zoom_by(factor);
}

/// Zoomt um einen Faktor, der Diagramm-Punkt unter dem Zeiger bleibt stabil.
pub fn zoom_at(state: &mut AppState, screen_pos: Vec2, factor: f32) {
    state.view.viewport.zoom_at(screen_pos, factor);
}

/// Setzt den Pan-Offset absolut.
pub fn set_pan_offset(state: &mut AppState, offset: Vec2) {
    state.view.viewport.set_offset(offset);
}

/// Verschiebt die Ansicht.
pub fn pan_by(state: &mut AppState, delta: Vec2) {
    state.view.viewport.pan_by(delta);
}

/// Setzt Zoom und Pan auf Default zurück.
pub fn reset(state: &mut AppState) {
    state.view.viewport.reset();
}

/// Merkt die Zeigerposition (in Diagramm-Koordinaten) für die Statuszeile.
pub fn update_cursor(state: &mut AppState, screen_pos: Vec2) {
    state.view.cursor_diagram_pos = Some(state.view.viewport.screen_to_diagram(screen_pos));
}
