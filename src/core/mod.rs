//! Core-Domänentypen: Komponenten, Ports, Verbindungen, Repository, Geometrie, Viewport.

pub mod catalog;
pub mod component;
pub mod connection;
pub mod diagram;
pub mod geometry;
pub mod ids;
pub mod repository;
pub mod viewport;

pub use catalog::{ComponentCategory, ComponentDefinition, CATALOG};
pub use component::{Component, ComponentKind, ComponentPatch, ComponentProps, NewComponent, Rotation};
pub use connection::{Connection, NewConnection, Point, Port, PortSide};
pub use diagram::{Diagram, DiagramMetadata};
pub use geometry::{port_position, snap_point, snap_to_grid, wire_path, PORT_OFFSET};
pub use ids::{ComponentId, ConnectionId, IdAllocator, IdParseError};
pub use repository::{
    ComponentMap, ConnectionMap, EntityRepository, EntitySnapshot, RemovedComponent,
};
pub use viewport::Viewport;
