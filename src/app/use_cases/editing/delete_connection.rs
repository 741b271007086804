//! Use-Case: Verbindung löschen.

use crate::app::AppState;
use crate::core::ConnectionId;

/// Löscht eine Verbindung samt Selektions-Eintrag.
/// Ohne Wirkung (und ohne Snapshot), wenn die ID fehlt.
pub fn delete_connection(state: &mut AppState, id: ConnectionId) -> bool {
    if state.repository.delete_connection(id).is_none() {
        log::debug!("Verbindung {} nicht gefunden, nichts gelöscht", id);
        return false;
    }
    state.selection.remove_connection(id);
    state.save_to_history();
    log::info!("Verbindung {} gelöscht", id);
    true
}
