//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::state::EditorTool;
use crate::core::{
    ComponentId, ComponentKind, ComponentPatch, ConnectionId, NewComponent, NewConnection, Port,
};
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // === Bearbeitung ===
    /// Komponente mit vollständiger Beschreibung hinzufügen
    AddComponentRequested { component: NewComponent },
    /// Komponente aus der Palette an automatischer Position platzieren
    QuickAddComponentRequested { kind: ComponentKind },
    /// Felder einer Komponente ändern
    UpdateComponentRequested {
        id: ComponentId,
        patch: ComponentPatch,
    },
    /// Komponente löschen
    DeleteComponentRequested { id: ComponentId },
    /// Verbindung zwischen zwei Ports anlegen
    ConnectRequested {
        source: Port,
        target: Port,
        waypoints: Vec<Vec2>,
    },
    /// Verbindung löschen
    DeleteConnectionRequested { id: ConnectionId },
    /// Alles Selektierte löschen (Delete/Backspace)
    DeleteSelectedRequested,
    /// Selektierte Komponenten um 90° im Uhrzeigersinn drehen
    RotateSelectedRequested,
    /// Diagramm leeren
    ClearDiagramRequested,

    // === Zeiger-Gesten ===
    /// Komponenten-Drag beendet (Position in Diagramm-Koordinaten, ungesnappt)
    ComponentDragEnded { id: ComponentId, diagram_pos: Vec2 },
    /// Klick auf eine Komponente
    ComponentClicked { id: ComponentId },
    /// Klick auf eine Verbindung
    ConnectionClicked { id: ConnectionId },
    /// Klick auf einen Port
    PortClicked { port: Port },
    /// Klick auf leeren Hintergrund
    BackgroundClicked,
    /// Zeiger bewegt (Bildschirm-Koordinaten)
    PointerMoved { screen_pos: Vec2 },

    // === Selektion & Werkzeug ===
    /// Escape: Selektion leeren und offene Leitungs-Geste abbrechen
    EscapePressed,
    /// Selektion explizit setzen (Mehrfachauswahl)
    SelectionSetRequested {
        components: Vec<ComponentId>,
        connections: Vec<ConnectionId>,
    },
    /// Werkzeug wechseln
    SetToolRequested { tool: EditorTool },

    // === History ===
    /// Ctrl+Z
    UndoRequested,
    /// Ctrl+Y / Ctrl+Shift+Z
    RedoRequested,

    // === Viewport ===
    /// Mausrad über dem Diagramm (`delta_y > 0` = herauszoomen)
    WheelScrolled { screen_pos: Vec2, delta_y: f32 },
    /// Pan-Geste beendet, neuer Offset in Bildschirm-Pixeln
    PanEnded { offset: Vec2 },
    /// Ansicht um Delta verschieben
    PanRequested { delta: Vec2 },
    /// Zoom absolut setzen
    SetZoomRequested { scale: f32 },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Zoom und Pan zurücksetzen
    ResetViewRequested,
}

/// Commands sind mutierende Operationen, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Bearbeitung ===
    /// Komponente hinzufügen
    AddComponent { component: NewComponent },
    /// Komponente an automatischer Slot-Position hinzufügen
    QuickAddComponent { kind: ComponentKind },
    /// Felder einer Komponente zusammenführen
    UpdateComponent {
        id: ComponentId,
        patch: ComponentPatch,
    },
    /// Komponente inkl. aller anhängenden Verbindungen löschen
    DeleteComponent { id: ComponentId },
    /// Verbindung hinzufügen
    AddConnection { connection: NewConnection },
    /// Verbindung löschen
    DeleteConnection { id: ConnectionId },
    /// Alle selektierten Komponenten und Verbindungen in einem Schritt löschen
    DeleteSelected,
    /// Selektierte Komponenten drehen
    RotateSelected,
    /// Repository, History und Selektion zurücksetzen
    ClearDiagram,

    // === Selektion ===
    /// Einzelne Komponente exklusiv selektieren
    SelectComponent { id: ComponentId },
    /// Einzelne Verbindung exklusiv selektieren
    SelectConnection { id: ConnectionId },
    /// Beide Selektionsmengen ersetzen
    SetSelection {
        components: Vec<ComponentId>,
        connections: Vec<ConnectionId>,
    },
    /// Selektion leeren
    ClearSelection,

    // === Werkzeug ===
    /// Editor-Werkzeug setzen
    SetActiveTool { tool: EditorTool },
    /// Start-Port der Leitungs-Geste merken
    SetWireStartPort { port: Port },
    /// Offene Leitungs-Geste verwerfen
    ClearWireStartPort,

    // === History ===
    /// Undo ausführen
    Undo,
    /// Redo ausführen
    Redo,

    // === Viewport ===
    /// Zoom absolut setzen (geklemmt)
    SetZoom { scale: f32 },
    /// Zoom um Faktor ändern
    ZoomBy { factor: f32 },
    /// Zoom um Faktor ändern, Punkt unter dem Zeiger bleibt fest
    ZoomAt { screen_pos: Vec2, factor: f32 },
    /// Pan-Offset absolut setzen
    SetPanOffset { offset: Vec2 },
    /// Pan-Offset verschieben
    PanBy { delta: Vec2 },
    /// Zoom und Pan zurücksetzen
    ResetView,
    /// Zeigerposition für die Statuszeile merken
    UpdateCursor { screen_pos: Vec2 },
}
