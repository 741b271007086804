//! Use-Case: Alle selektierten Komponenten und Verbindungen löschen.

use super::delete_component::remove_without_snapshot;
use crate::app::AppState;
use crate::core::{ComponentId, ConnectionId};

/// Löscht die gesamte Selektion als ein atomarer Schritt mit einem Snapshot.
///
/// Veraltete IDs werden übersprungen. Bleibt nichts zu löschen, wird kein
/// Snapshot aufgezeichnet.
pub fn delete_selected(state: &mut AppState) {
    if state.selection.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }

    let component_ids: Vec<ComponentId> = state.selection.components.iter().copied().collect();
    let connection_ids: Vec<ConnectionId> = state.selection.connections.iter().copied().collect();

    let mut removed_components = 0usize;
    let mut removed_connections = 0usize;

    for id in component_ids {
        if let Some(removed) = remove_without_snapshot(state, id) {
            removed_components += 1;
            removed_connections += removed.connections.len();
        }
    }
    for id in connection_ids {
        // Kann bereits durch die Kaskade oben entfernt sein
        if state.repository.delete_connection(id).is_some() {
            removed_connections += 1;
        }
    }
    state.selection.clear();

    if removed_components == 0 && removed_connections == 0 {
        log::debug!("Selektion enthielt nur veraltete IDs, nichts gelöscht");
        return;
    }

    state.save_to_history();
    log::info!(
        "{} Komponenten und {} Verbindungen gelöscht",
        removed_components,
        removed_connections
    );
}
