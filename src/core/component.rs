//! Repräsentiert eine platzierte Schaltplan-Komponente.

use super::ComponentId;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Freie Zusatz-Eigenschaften einer Komponente (JSON-Objekt).
pub type ComponentProps = serde_json::Map<String, serde_json::Value>;

/// Typ einer Komponente (feste Aufzählung).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    // Transistoren
    Npn,
    Pnp,
    Nmos,
    Pmos,
    // Passive Bauteile
    Resistor,
    Capacitor,
    Inductor,
    // Quellen
    DcVoltage,
    DcCurrent,
    AcVoltage,
    Battery,
    // Halbleiter
    Diode,
    Led,
    Zener,
    // Basis
    Ground,
    Rground,
    Junction,
    // Aktive Bauteile
    Opamp,
    Switch,
}

impl ComponentKind {
    /// Alle Typen in Katalog-Reihenfolge.
    pub const ALL: [ComponentKind; 19] = [
        Self::Npn,
        Self::Pnp,
        Self::Nmos,
        Self::Pmos,
        Self::Resistor,
        Self::Capacitor,
        Self::Inductor,
        Self::DcVoltage,
        Self::DcCurrent,
        Self::AcVoltage,
        Self::Battery,
        Self::Diode,
        Self::Led,
        Self::Zener,
        Self::Ground,
        Self::Rground,
        Self::Junction,
        Self::Opamp,
        Self::Switch,
    ];

    /// Serialisierter Name (z.B. `dc_voltage`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Npn => "npn",
            Self::Pnp => "pnp",
            Self::Nmos => "nmos",
            Self::Pmos => "pmos",
            Self::Resistor => "resistor",
            Self::Capacitor => "capacitor",
            Self::Inductor => "inductor",
            Self::DcVoltage => "dc_voltage",
            Self::DcCurrent => "dc_current",
            Self::AcVoltage => "ac_voltage",
            Self::Battery => "battery",
            Self::Diode => "diode",
            Self::Led => "led",
            Self::Zener => "zener",
            Self::Ground => "ground",
            Self::Rground => "rground",
            Self::Junction => "junction",
            Self::Opamp => "opamp",
            Self::Switch => "switch",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drehung einer Komponente in 90°-Schritten (serialisiert als Grad-Zahl).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Winkel in Grad.
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Nächste Stufe im Uhrzeigersinn (270 → 0).
    pub fn rotated_cw(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(format!(
                "ungültige Rotation {other}°, erlaubt sind 0, 90, 180, 270"
            )),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Eine Komponente im Diagramm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Eindeutige ID (stabil über die Lebensdauer)
    pub id: ComponentId,
    /// Komponententyp
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Mittelpunkt X in Diagramm-Einheiten
    pub x: f32,
    /// Mittelpunkt Y in Diagramm-Einheiten
    pub y: f32,
    /// Drehung
    #[serde(default)]
    pub rotation: Rotation,
    /// Anzeige-Label (z.B. "R1")
    #[serde(default)]
    pub label: String,
    /// Anzeige-Wert (z.B. "10kΩ")
    #[serde(default)]
    pub value: String,
    /// Optionaler Stil (z.B. "european")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Freie Zusatz-Eigenschaften
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<ComponentProps>,
}

impl Component {
    /// Mittelpunkt als Vektor.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Beschreibung einer neuen Komponente (alles außer der ID).
#[derive(Debug, Clone, PartialEq)]
pub struct NewComponent {
    /// Komponententyp
    pub kind: ComponentKind,
    /// Mittelpunkt in Diagramm-Einheiten
    pub position: Vec2,
    /// Drehung
    pub rotation: Rotation,
    /// Anzeige-Label
    pub label: String,
    /// Anzeige-Wert
    pub value: String,
    /// Optionaler Stil
    pub style: Option<String>,
    /// Freie Zusatz-Eigenschaften
    pub props: Option<ComponentProps>,
}

impl NewComponent {
    /// Neue Komponente ohne Label/Wert, ungedreht.
    pub fn new(kind: ComponentKind, position: Vec2) -> Self {
        Self {
            kind,
            position,
            rotation: Rotation::Deg0,
            label: String::new(),
            value: String::new(),
            style: None,
            props: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Materialisiert die Komponente mit der vergebenen ID.
    pub fn into_component(self, id: ComponentId) -> Component {
        Component {
            id,
            kind: self.kind,
            x: self.position.x,
            y: self.position.y,
            rotation: self.rotation,
            label: self.label,
            value: self.value,
            style: self.style,
            props: self.props,
        }
    }
}

/// Teil-Aktualisierung einer Komponente. `None`-Felder bleiben unverändert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentPatch {
    pub kind: Option<ComponentKind>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub rotation: Option<Rotation>,
    pub label: Option<String>,
    pub value: Option<String>,
    pub style: Option<String>,
    pub props: Option<ComponentProps>,
}

impl ComponentPatch {
    /// Patch, der nur die Position setzt.
    pub fn position(position: Vec2) -> Self {
        Self {
            x: Some(position.x),
            y: Some(position.y),
            ..Self::default()
        }
    }

    /// Patch, der nur die Rotation setzt.
    pub fn rotation(rotation: Rotation) -> Self {
        Self {
            rotation: Some(rotation),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Gibt `true` zurück, wenn der Patch kein Feld setzt.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Übernimmt alle gesetzten Felder in die Komponente.
    pub fn apply_to(&self, component: &mut Component) {
        if let Some(kind) = self.kind {
            component.kind = kind;
        }
        if let Some(x) = self.x {
            component.x = x;
        }
        if let Some(y) = self.y {
            component.y = y;
        }
        if let Some(rotation) = self.rotation {
            component.rotation = rotation;
        }
        if let Some(label) = &self.label {
            component.label.clone_from(label);
        }
        if let Some(value) = &self.value {
            component.value.clone_from(value);
        }
        if let Some(style) = &self.style {
            component.style = Some(style.clone());
        }
        if let Some(props) = &self.props {
            component.props = Some(props.clone());
        }
    }
}
