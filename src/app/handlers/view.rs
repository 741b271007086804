//! Handler für Viewport-Operationen (Pan/Zoom, Zeigerposition).

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Setzt Zoom und Pan zurück.
pub fn reset(state: &mut AppState) {
    use_cases::viewport::reset(state);
}

/// Setzt den Zoom absolut.
pub fn set_zoom(state: &mut AppState, scale: f32) {
    use_cases::viewport::set_zoom(state, scale);
}

/// Zoomt um einen Faktor.
pub fn zoom_by(state: &mut AppState, factor: f32) {
    use_cases::viewport::zoom_by(state, factor);
}

/// Zoomt um einen Faktor auf die Zeigerposition hin.
pub fn zoom_at(state: &mut AppState, screen_pos: Vec2, factor: f32) {
    use_cases::viewport::zoom_at(state, screen_pos, factor);
}

/// Setzt den Pan-Offset.
pub fn set_pan_offset(state: &mut AppState, offset: Vec2) {
    use_cases::viewport::set_pan_offset(state, offset);
}

/// Verschiebt die Ansicht.
pub fn pan(state: &mut AppState, delta: Vec2) {
    use_cases::viewport::pan_by(state, delta);
}

/// Aktualisiert die Zeigerposition für die Statuszeile.
pub fn update_cursor(state: &mut AppState, screen_pos: Vec2) {
    use_cases::viewport::update_cursor(state, screen_pos);
}
