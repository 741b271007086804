//! Use-Case: Felder einer Komponente ändern.

use crate::app::AppState;
use crate::core::{ComponentId, ComponentPatch};

/// Führt den Patch mit der Komponente zusammen.
///
/// Fehlt die ID, bleibt das Repository unverändert. Ein Snapshot wird in
/// jedem Fall aufgezeichnet, auch wenn sich nichts geändert hat.
pub fn update_component(state: &mut AppState, id: ComponentId, patch: &ComponentPatch) {
    if state.repository.update_component(id, patch) {
        log::debug!("Komponente {} aktualisiert", id);
    } else {
        log::debug!("Komponente {} nicht gefunden, Update ohne Wirkung", id);
    }
    state.save_to_history();
}
