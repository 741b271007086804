//! Reine Geometrie-Funktionen: Raster-Snapping, Port-Positionen, Leitungsverläufe.

use super::{Component, Connection, PortSide};
use glam::Vec2;

/// Abstand eines Ports vom Komponenten-Mittelpunkt in Diagramm-Einheiten.
pub const PORT_OFFSET: f32 = 20.0;

/// Rundet einen Wert auf das nächste Vielfache von `grid_size`.
///
/// Bei `grid_size <= 0` (oder NaN) wird der Wert unverändert zurückgegeben.
pub fn snap_to_grid(value: f32, grid_size: f32) -> f32 {
    if grid_size.is_nan() || grid_size <= 0.0 {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Snappt beide Achsen eines Punkts auf das Raster.
pub fn snap_point(point: Vec2, grid_size: f32) -> Vec2 {
    Vec2::new(
        snap_to_grid(point.x, grid_size),
        snap_to_grid(point.y, grid_size),
    )
}

/// Position eines Ports in Diagramm-Koordinaten.
///
/// Die Rotation der Komponente wird nicht berücksichtigt: Ports liegen immer
/// achsenparallel links/rechts/oben/unten vom Mittelpunkt.
pub fn port_position(component: &Component, side: PortSide) -> Vec2 {
    component.position() + side.direction() * PORT_OFFSET
}

/// Polylinie einer Verbindung: Start, alle Zwischenpunkte, Ziel.
pub fn wire_path(connection: &Connection, source: Vec2, target: Vec2) -> Vec<Vec2> {
    let mut path = Vec::with_capacity(connection.waypoints.len() + 2);
    path.push(source);
    path.extend(connection.waypoints.iter().copied().map(Vec2::from));
    path.push(target);
    path
}
