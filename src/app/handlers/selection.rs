//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ComponentId, ConnectionId};

/// Exklusive Einzelselektion einer Komponente.
pub fn select_component(state: &mut AppState, id: ComponentId) {
    use_cases::selection::select_component(state, id);
}

/// Exklusive Einzelselektion einer Verbindung.
pub fn select_connection(state: &mut AppState, id: ConnectionId) {
    use_cases::selection::select_connection(state, id);
}

/// Setzt beide Selektionsmengen explizit.
pub fn set(state: &mut AppState, components: Vec<ComponentId>, connections: Vec<ConnectionId>) {
    use_cases::selection::set_selection(state, components, connections);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
