//! Circuit Schematic Editor Library.
//! Editier-Engine für Schaltplan-Diagramme, exportiert für Tests, CLI und Frontends.

pub mod app;
pub mod core;
pub mod export;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditHistory, EditorTool, EditorToolState,
    SelectionState, ViewState, WireGesture,
};
pub use core::{
    Component, ComponentId, ComponentKind, ComponentPatch, Connection, ConnectionId, Diagram,
    DiagramMetadata, EntityRepository, NewComponent, NewConnection, Port, PortSide, Rotation,
    Viewport,
};
pub use export::{ExportClient, ExportError, ExportOptions};
pub use shared::{EditorOptions, RenderScene, StatusSummary};
