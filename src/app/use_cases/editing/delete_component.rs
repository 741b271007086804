//! Use-Case: Komponente löschen (inkl. aller anhängenden Verbindungen).

use crate::app::AppState;
use crate::core::{ComponentId, RemovedComponent};

/// Löscht eine Komponente, ihre Verbindungen und alle Selektions-Einträge
/// dazu in einem Schritt. Ohne Wirkung (und ohne Snapshot), wenn die ID fehlt.
pub fn delete_component(state: &mut AppState, id: ComponentId) -> bool {
    let Some(removed) = remove_without_snapshot(state, id) else {
        log::debug!("Komponente {} nicht gefunden, nichts gelöscht", id);
        return false;
    };
    state.save_to_history();
    log::info!(
        "Komponente {} gelöscht ({} Verbindungen entfernt)",
        id,
        removed.connections.len()
    );
    true
}

/// Entfernt die Komponente samt Kaskade und räumt Selektion und
/// Leitungs-Geste auf. Zeichnet keinen Snapshot auf.
pub(super) fn remove_without_snapshot(
    state: &mut AppState,
    id: ComponentId,
) -> Option<RemovedComponent> {
    let removed = state.repository.delete_component(id)?;

    state.selection.remove_component(id);
    for conn_id in &removed.connections {
        state.selection.remove_connection(*conn_id);
    }
    if state
        .editor
        .wire_start_port()
        .is_some_and(|port| port.component_id == id)
    {
        state.editor.clear_wire_start_port();
    }

    Some(removed)
}
