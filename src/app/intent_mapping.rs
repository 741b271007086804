//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::{EditorTool, WireGesture};
use super::{AppCommand, AppIntent, AppState};
use crate::core::{snap_point, ComponentPatch, NewConnection};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::AddComponentRequested { component } => {
            vec![AppCommand::AddComponent { component }]
        }
        AppIntent::QuickAddComponentRequested { kind } => {
            vec![AppCommand::QuickAddComponent { kind }]
        }
        AppIntent::UpdateComponentRequested { id, patch } => {
            vec![AppCommand::UpdateComponent { id, patch }]
        }
        AppIntent::DeleteComponentRequested { id } => vec![AppCommand::DeleteComponent { id }],
        AppIntent::ConnectRequested {
            source,
            target,
            waypoints,
        } => vec![AppCommand::AddConnection {
            connection: NewConnection::new(source, target).with_waypoints(waypoints),
        }],
        AppIntent::DeleteConnectionRequested { id } => vec![AppCommand::DeleteConnection { id }],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::RotateSelectedRequested => vec![AppCommand::RotateSelected],
        AppIntent::ClearDiagramRequested => vec![AppCommand::ClearDiagram],

        AppIntent::ComponentDragEnded { id, diagram_pos } => {
            let snapped = snap_point(diagram_pos, state.options.grid());
            vec![AppCommand::UpdateComponent {
                id,
                patch: ComponentPatch::position(snapped),
            }]
        }
        AppIntent::ComponentClicked { id } => match state.editor.active_tool() {
            EditorTool::Select => vec![AppCommand::SelectComponent { id }],
            EditorTool::Delete => vec![AppCommand::DeleteComponent { id }],
            // Im Wire-Modus zählen nur Port-Klicks
            EditorTool::Wire => vec![],
        },
        AppIntent::ConnectionClicked { id } => match state.editor.active_tool() {
            EditorTool::Select => vec![AppCommand::SelectConnection { id }],
            EditorTool::Delete => vec![AppCommand::DeleteConnection { id }],
            EditorTool::Wire => vec![],
        },
        AppIntent::PortClicked { port } => {
            if state.editor.active_tool() != EditorTool::Wire {
                return vec![];
            }
            match state.editor.wire_gesture() {
                WireGesture::Idle => vec![AppCommand::SetWireStartPort { port }],
                WireGesture::AwaitingSecondPort(start) if start == port => {
                    vec![AppCommand::ClearWireStartPort]
                }
                WireGesture::AwaitingSecondPort(start) => vec![
                    AppCommand::AddConnection {
                        connection: NewConnection::new(start, port),
                    },
                    AppCommand::ClearWireStartPort,
                ],
            }
        }
        AppIntent::BackgroundClicked => vec![AppCommand::ClearSelection],
        AppIntent::PointerMoved { screen_pos } => vec![AppCommand::UpdateCursor { screen_pos }],

        AppIntent::EscapePressed => {
            vec![AppCommand::ClearSelection, AppCommand::ClearWireStartPort]
        }
        AppIntent::SelectionSetRequested {
            components,
            connections,
        } => vec![AppCommand::SetSelection {
            components,
            connections,
        }],
        AppIntent::SetToolRequested { tool } => vec![AppCommand::SetActiveTool { tool }],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::WheelScrolled {
            screen_pos,
            delta_y,
        } => {
            let step = state.options.view_scroll_zoom_step;
            let factor = if delta_y > 0.0 {
                1.0 / step
            } else if delta_y < 0.0 {
                step
            } else {
                return vec![];
            };
            vec![AppCommand::ZoomAt { screen_pos, factor }]
        }
        AppIntent::PanEnded { offset } => vec![AppCommand::SetPanOffset { offset }],
        AppIntent::PanRequested { delta } => vec![AppCommand::PanBy { delta }],
        AppIntent::SetZoomRequested { scale } => vec![AppCommand::SetZoom { scale }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomBy {
            factor: state.options.view_zoom_step,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomBy {
            factor: 1.0 / state.options.view_zoom_step,
        }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
    }
}
