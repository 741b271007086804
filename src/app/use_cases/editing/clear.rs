//! Use-Case: Diagramm vollständig leeren.

use crate::app::AppState;

/// Leert Repository, Selektion und Leitungs-Geste. Der Verlauf beginnt
/// danach wieder mit einem einzelnen leeren Eintrag. ID-Zähler laufen weiter.
pub fn clear_diagram(state: &mut AppState) {
    state.repository.clear();
    state.history.reset();
    state.selection.clear();
    state.editor.clear_wire_start_port();
    log::info!("Diagramm geleert");
}
