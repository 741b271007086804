use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{Diagram, DiagramMetadata, EntityRepository};
use crate::shared::EditorOptions;

use super::{EditorToolState, SelectionState, ViewState};

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Komponenten und Verbindungen (nur Use-Cases mutieren)
    pub(crate) repository: EntityRepository,
    /// Undo/Redo-History (Snapshot-basiert)
    pub(crate) history: EditHistory,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            repository: EntityRepository::new(),
            history: EditHistory::new_with_capacity(options.effective_history_capacity()),
            view: ViewState::new(),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Read-only Zugriff auf alle Entitäten.
    pub fn repository(&self) -> &EntityRepository {
        &self.repository
    }

    /// Read-only Zugriff auf den Verlauf.
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Gibt die Anzahl der Komponenten zurück (für UI-Anzeige)
    pub fn component_count(&self) -> usize {
        self.repository.component_count()
    }

    /// Gibt die Anzahl der Verbindungen zurück (für UI-Anzeige)
    pub fn connection_count(&self) -> usize {
        self.repository.connection_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Hängt einen Snapshot des aktuellen Repositorys an den Verlauf an.
    /// Abschluss jeder mutierenden Operation.
    pub(crate) fn save_to_history(&mut self) {
        let snap = Snapshot::from_repository(&self.repository);
        self.history.record(snap);
    }

    /// Baut das serialisierbare Diagramm aus dem Live-Zustand.
    pub fn to_diagram(&self, metadata: Option<DiagramMetadata>) -> Diagram {
        Diagram {
            components: self.repository.components().cloned().collect(),
            connections: self.repository.connections().cloned().collect(),
            grid_size: self.options.grid_size,
            zoom: self.view.viewport.scale(),
            metadata,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
