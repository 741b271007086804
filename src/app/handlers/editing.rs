//! Handler für Komponenten/Verbindungs-Editing und Editor-Werkzeug.

use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ComponentId, ComponentKind, ComponentPatch, ConnectionId, NewComponent};
use crate::core::{NewConnection, Port};

/// Aktiviert ein Editor-Werkzeug. Eine offene Leitungs-Geste wird verworfen.
pub fn set_active_tool(state: &mut AppState, tool: EditorTool) {
    state.editor.set_active_tool(tool);
    log::info!("Editor-Werkzeug: {}", tool.as_str());
}

/// Merkt den Start-Port der Leitungs-Geste.
pub fn set_wire_start_port(state: &mut AppState, port: Port) {
    if state.editor.set_wire_start_port(port) {
        log::debug!("Leitung startet an {}.{:?}", port.component_id, port.position);
    } else {
        log::debug!("Start-Port ignoriert: Wire-Werkzeug nicht aktiv");
    }
}

/// Verwirft eine offene Leitungs-Geste.
pub fn clear_wire_start_port(state: &mut AppState) {
    state.editor.clear_wire_start_port();
}

/// Fügt eine Komponente hinzu.
pub fn add_component(state: &mut AppState, component: NewComponent) {
    use_cases::editing::add_component(state, component);
}

/// Fügt eine Komponente an der nächsten freien Slot-Position hinzu.
pub fn quick_add_component(state: &mut AppState, kind: ComponentKind) {
    use_cases::editing::quick_add_component(state, kind);
}

/// Führt einen Patch mit einer Komponente zusammen.
pub fn update_component(state: &mut AppState, id: ComponentId, patch: &ComponentPatch) {
    use_cases::editing::update_component(state, id, patch);
}

/// Löscht eine Komponente inkl. anhängender Verbindungen.
pub fn delete_component(state: &mut AppState, id: ComponentId) {
    use_cases::editing::delete_component(state, id);
}

/// Legt eine Verbindung an.
pub fn add_connection(state: &mut AppState, connection: NewConnection) {
    use_cases::editing::add_connection(state, connection);
}

/// Löscht eine Verbindung.
pub fn delete_connection(state: &mut AppState, id: ConnectionId) {
    use_cases::editing::delete_connection(state, id);
}

/// Löscht alles Selektierte.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}

/// Dreht die selektierten Komponenten.
pub fn rotate_selected(state: &mut AppState) {
    use_cases::editing::rotate_selected(state);
}

/// Leert das Diagramm.
pub fn clear_diagram(state: &mut AppState) {
    use_cases::editing::clear_diagram(state);
}
