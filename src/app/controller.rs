//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::AddComponent { component } => {
                handlers::editing::add_component(state, component)
            }
            AppCommand::QuickAddComponent { kind } => {
                handlers::editing::quick_add_component(state, kind)
            }
            AppCommand::UpdateComponent { id, patch } => {
                handlers::editing::update_component(state, id, &patch)
            }
            AppCommand::DeleteComponent { id } => handlers::editing::delete_component(state, id),
            AppCommand::AddConnection { connection } => {
                handlers::editing::add_connection(state, connection)
            }
            AppCommand::DeleteConnection { id } => handlers::editing::delete_connection(state, id),
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),
            AppCommand::RotateSelected => handlers::editing::rotate_selected(state),
            AppCommand::ClearDiagram => handlers::editing::clear_diagram(state),

            // === Selektion ===
            AppCommand::SelectComponent { id } => handlers::selection::select_component(state, id),
            AppCommand::SelectConnection { id } => {
                handlers::selection::select_connection(state, id)
            }
            AppCommand::SetSelection {
                components,
                connections,
            } => handlers::selection::set(state, components, connections),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Werkzeug ===
            AppCommand::SetActiveTool { tool } => handlers::editing::set_active_tool(state, tool),
            AppCommand::SetWireStartPort { port } => {
                handlers::editing::set_wire_start_port(state, port)
            }
            AppCommand::ClearWireStartPort => handlers::editing::clear_wire_start_port(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Viewport ===
            AppCommand::SetZoom { scale } => handlers::view::set_zoom(state, scale),
            AppCommand::ZoomBy { factor } => handlers::view::zoom_by(state, factor),
            AppCommand::ZoomAt { screen_pos, factor } => {
                handlers::view::zoom_at(state, screen_pos, factor)
            }
            AppCommand::SetPanOffset { offset } => handlers::view::set_pan_offset(state, offset),
            AppCommand::PanBy { delta } => handlers::view::pan(state, delta),
            AppCommand::ResetView => handlers::view::reset(state),
            AppCommand::UpdateCursor { screen_pos } => {
                handlers::view::update_cursor(state, screen_pos)
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
