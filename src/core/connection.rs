//! Ports und Verbindungen zwischen zwei Komponenten.

use super::{ComponentId, ConnectionId};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Himmelsrichtung eines Ports am Komponentenrand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl PortSide {
    /// Alle vier Seiten.
    pub const ALL: [PortSide; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Gegenüberliegende Seite.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Einheitsvektor in Diagramm-Koordinaten (Y wächst nach unten).
    pub fn direction(self) -> Vec2 {
        match self {
            Self::Left => Vec2::NEG_X,
            Self::Right => Vec2::X,
            Self::Top => Vec2::NEG_Y,
            Self::Bottom => Vec2::Y,
        }
    }
}

/// Abgeleitete Referenz auf einen Anschlusspunkt einer Komponente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    /// Besitzende Komponente
    pub component_id: ComponentId,
    /// Seite am Komponentenrand
    pub position: PortSide,
}

impl Port {
    pub fn new(component_id: ComponentId, position: PortSide) -> Self {
        Self {
            component_id,
            position,
        }
    }
}

/// Zwischenpunkt einer Leitung (serialisiert als `{x, y}`)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// Eine Leitung zwischen zwei Ports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Eindeutige ID
    pub id: ConnectionId,
    /// Start-Port
    pub source: Port,
    /// Ziel-Port
    pub target: Port,
    /// Geordnete Zwischenpunkte für manuelles Routing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waypoints: Vec<Point>,
}

impl Connection {
    /// Prüft ob die Verbindung die Komponente als Start oder Ziel nennt.
    pub fn touches(&self, component_id: ComponentId) -> bool {
        self.source.component_id == component_id || self.target.component_id == component_id
    }
}

/// Beschreibung einer neuen Verbindung (alles außer der ID).
#[derive(Debug, Clone, PartialEq)]
pub struct NewConnection {
    pub source: Port,
    pub target: Port,
    pub waypoints: Vec<Point>,
}

impl NewConnection {
    /// Gerade Verbindung ohne Zwischenpunkte.
    pub fn new(source: Port, target: Port) -> Self {
        Self {
            source,
            target,
            waypoints: Vec::new(),
        }
    }

    pub fn with_waypoints(mut self, waypoints: impl IntoIterator<Item = Vec2>) -> Self {
        self.waypoints = waypoints.into_iter().map(Point::from).collect();
        self
    }

    /// Materialisiert die Verbindung mit der vergebenen ID.
    pub fn into_connection(self, id: ConnectionId) -> Connection {
        Connection {
            id,
            source: self.source,
            target: self.target,
            waypoints: self.waypoints,
        }
    }
}
