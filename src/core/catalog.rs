//! Statischer Bauteil-Katalog: Anzeigename, Kategorie, Label-Präfix, CircuiTikZ-Name.

use super::ComponentKind;
use serde::Serialize;

/// Gruppierung der Bauteile in der Palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Transistor,
    Passive,
    Source,
    Semiconductor,
    Basic,
    Active,
}

impl ComponentCategory {
    /// Alle Kategorien in Paletten-Reihenfolge.
    pub const ALL: [ComponentCategory; 6] = [
        Self::Transistor,
        Self::Passive,
        Self::Source,
        Self::Semiconductor,
        Self::Basic,
        Self::Active,
    ];

    /// Anzeigename der Kategorie.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Transistor => "Transistors",
            Self::Passive => "Passive",
            Self::Source => "Sources",
            Self::Semiconductor => "Semiconductors",
            Self::Basic => "Basic",
            Self::Active => "Active",
        }
    }
}

/// Katalogeintrag eines Bauteiltyps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub name: &'static str,
    pub category: ComponentCategory,
    /// Label-Präfix für neue Bauteile (leer = kein Label)
    pub default_label: &'static str,
    /// Name der CircuiTikZ-Vorlage
    pub tikz: &'static str,
    /// Knoten-Typen (Masse, Verbindungspunkt) haben keine Zwei-Pol-Geometrie
    pub is_node: bool,
}

const fn def(
    kind: ComponentKind,
    name: &'static str,
    category: ComponentCategory,
    default_label: &'static str,
    tikz: &'static str,
    is_node: bool,
) -> ComponentDefinition {
    ComponentDefinition {
        kind,
        name,
        category,
        default_label,
        tikz,
        is_node,
    }
}

use self::ComponentCategory as Cat;
use super::ComponentKind as K;

/// Alle Bauteile, nach Kategorie gruppiert.
pub static CATALOG: [ComponentDefinition; 19] = [
    def(K::Npn, "NPN Transistor", Cat::Transistor, "Q", "npn", false),
    def(K::Pnp, "PNP Transistor", Cat::Transistor, "Q", "pnp", false),
    def(K::Nmos, "NMOS Transistor", Cat::Transistor, "M", "nmos", false),
    def(K::Pmos, "PMOS Transistor", Cat::Transistor, "M", "pmos", false),
    def(K::Resistor, "Resistor", Cat::Passive, "R", "R", false),
    def(K::Capacitor, "Capacitor", Cat::Passive, "C", "C", false),
    def(K::Inductor, "Inductor", Cat::Passive, "L", "L", false),
    def(K::DcVoltage, "DC Voltage Source", Cat::Source, "V", "battery1", false),
    def(K::DcCurrent, "DC Current Source", Cat::Source, "I", "isource", false),
    def(K::AcVoltage, "AC Voltage Source", Cat::Source, "V", "sV", false),
    def(K::Battery, "Battery", Cat::Source, "B", "battery", false),
    def(K::Diode, "Diode", Cat::Semiconductor, "D", "D", false),
    def(K::Led, "LED", Cat::Semiconductor, "D", "leDo", false),
    def(K::Zener, "Zener Diode", Cat::Semiconductor, "D", "zDo", false),
    def(K::Ground, "Ground", Cat::Basic, "", "ground", true),
    def(K::Rground, "Reference Ground", Cat::Basic, "", "rground", true),
    def(K::Junction, "Junction", Cat::Basic, "", "circ", true),
    def(K::Opamp, "Op-Amp", Cat::Active, "U", "op amp", false),
    def(K::Switch, "Switch", Cat::Active, "S", "switch", false),
];

/// Katalogeintrag zu einem Typ.
pub fn definition(kind: ComponentKind) -> &'static ComponentDefinition {
    // CATALOG folgt der Reihenfolge von ComponentKind::ALL
    let index = ComponentKind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default();
    &CATALOG[index]
}

/// Alle Einträge einer Kategorie.
pub fn by_category(
    category: ComponentCategory,
) -> impl Iterator<Item = &'static ComponentDefinition> {
    CATALOG.iter().filter(move |d| d.category == category)
}

/// Knoten-Typ (Masse oder Verbindungspunkt)?
pub fn is_node(kind: ComponentKind) -> bool {
    definition(kind).is_node
}
