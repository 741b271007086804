//! Use-Case: Neue Komponente hinzufügen.

use crate::app::AppState;
use crate::core::{ComponentId, NewComponent};

/// Fügt eine Komponente hinzu und zeichnet einen Snapshot auf.
///
/// Die Position wird unverändert übernommen; Snapping ist Sache des Aufrufers.
pub fn add_component(state: &mut AppState, component: NewComponent) -> ComponentId {
    let kind = component.kind;
    let id = state.repository.add_component(component);
    state.save_to_history();
    log::info!("Komponente {} ({}) hinzugefügt", id, kind);
    id
}
