//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    if let Some(prev) = state.history.undo() {
        prev.apply_to(&mut state.repository);
        drop_stale_references(state);
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    if let Some(next) = state.history.redo() {
        next.apply_to(&mut state.repository);
        drop_stale_references(state);
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}

/// Entfernt Selektions-IDs und Leitungs-Start, deren Entität nach dem
/// Wiederherstellen nicht mehr existiert.
fn drop_stale_references(state: &mut AppState) {
    state.selection.retain_existing(&state.repository);
    if let Some(port) = state.editor.wire_start_port() {
        if !state.repository.contains_component(port.component_id) {
            state.editor.clear_wire_start_port();
        }
    }
}
