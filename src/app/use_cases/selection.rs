//! Use-Case-Funktionen für die Selektion.
//!
//! Selektion ist kein Teil des Undo-Verlaufs; keine dieser Funktionen
//! zeichnet einen Snapshot auf.

use crate::app::AppState;
use crate::core::{ComponentId, ConnectionId};

/// Selektiert genau diese Komponente (Verbindungs-Selektion bleibt).
pub fn select_component(state: &mut AppState, id: ComponentId) {
    state.selection.select_component(id);
    log::debug!("Komponente {} selektiert", id);
}

/// Selektiert genau diese Verbindung (Komponenten-Selektion bleibt).
pub fn select_connection(state: &mut AppState, id: ConnectionId) {
    state.selection.select_connection(id);
    log::debug!("Verbindung {} selektiert", id);
}

/// Ersetzt beide Selektionsmengen.
pub fn set_selection(
    state: &mut AppState,
    components: Vec<ComponentId>,
    connections: Vec<ConnectionId>,
) {
    state.selection.set(components, connections);
}

/// Hebt die gesamte Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}
