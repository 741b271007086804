//! Stabile IDs für Komponenten und Verbindungen.
//!
//! IDs werden pro Repository monoton vergeben (`comp_1`, `comp_2`, …) und
//! innerhalb der Lebensdauer eines Repositorys nie wiederverwendet.
//! Komponenten und Verbindungen haben getrennte Zählerräume.

use std::fmt;

/// Fehler beim Parsen einer serialisierten ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ungültige ID '{raw}': erwartet '{prefix}<n>'")]
pub struct IdParseError {
    raw: String,
    prefix: &'static str,
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(u64);

        impl $name {
            /// Präfix der serialisierten Form.
            pub const PREFIX: &'static str = $prefix;

            /// Erstellt eine ID aus dem rohen Zählerwert.
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// Roher Zählerwert.
            pub const fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", Self::PREFIX, self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.strip_prefix(Self::PREFIX)
                    .and_then(|n| n.parse::<u64>().ok())
                    .map(Self)
                    .ok_or_else(|| IdParseError {
                        raw: s.to_string(),
                        prefix: Self::PREFIX,
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }
    };
}

entity_id!(
    /// ID einer Komponente (`comp_<n>`).
    ComponentId,
    "comp_"
);

entity_id!(
    /// ID einer Verbindung (`conn_<n>`).
    ConnectionId,
    "conn_"
);

/// Monotoner Zähler für ID-Vergabe. Startet bei 1.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Erstellt einen frischen Zähler.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Vergibt den nächsten Wert.
    pub fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Wert, den der nächste `allocate()`-Aufruf liefert.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
