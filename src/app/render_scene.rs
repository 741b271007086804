//! Builder für Render-Szene und Statuszeile aus dem AppState.

use crate::app::AppState;
use crate::core::{port_position, wire_path};
use crate::shared::{RenderScene, StatusSummary, WireRender};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Verbindungen, deren Komponenten fehlen, werden übersprungen.
pub fn build(state: &AppState) -> RenderScene {
    let repo = state.repository();

    let wires = repo
        .connections()
        .filter_map(|conn| {
            let source = repo.component(conn.source.component_id)?;
            let target = repo.component(conn.target.component_id)?;
            let points = wire_path(
                conn,
                port_position(source, conn.source.position),
                port_position(target, conn.target.position),
            );
            Some(WireRender {
                id: conn.id,
                points,
                selected: state.selection.is_connection_selected(conn.id),
            })
        })
        .collect();

    let pending_wire_start = state.editor.wire_start_port().and_then(|port| {
        repo.component(port.component_id)
            .map(|comp| port_position(comp, port.position))
    });

    RenderScene {
        entities: repo.snapshot(),
        wires,
        selected_components: state.selection.components.clone(),
        selected_connections: state.selection.connections.clone(),
        viewport: state.view.viewport,
        grid_size: state.options.grid_size,
        active_tool: state.editor.active_tool().as_str(),
        pending_wire_start,
    }
}

/// Baut die Statuszeile (Zeigerposition, Zoom, Zähler, Werkzeug).
pub fn status(state: &AppState) -> StatusSummary {
    let cursor = state
        .view
        .cursor_diagram_pos
        .map_or((0, 0), |p| (p.x.round() as i32, p.y.round() as i32));

    StatusSummary {
        cursor,
        zoom_percent: (state.view.viewport.scale() * 100.0).round() as u32,
        component_count: state.component_count(),
        connection_count: state.connection_count(),
        tool: state.editor.active_tool().as_str(),
    }
}
