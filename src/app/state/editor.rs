use crate::core::Port;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Komponenten selektieren und verschieben
    #[default]
    Select,
    /// Leitungen zwischen zwei Ports ziehen
    Wire,
    /// Angeklickte Komponenten/Verbindungen löschen
    Delete,
}

impl EditorTool {
    /// Name für Statuszeile und Logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Wire => "wire",
            Self::Delete => "delete",
        }
    }
}

/// Laufende Leitungs-Geste des Wire-Werkzeugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireGesture {
    /// Kein Start-Port gewählt
    #[default]
    Idle,
    /// Start-Port gewählt, wartet auf den zweiten Klick
    AwaitingSecondPort(Port),
}

impl WireGesture {
    /// Ausstehender Start-Port, falls vorhanden.
    pub fn pending_port(&self) -> Option<Port> {
        match self {
            Self::Idle => None,
            Self::AwaitingSecondPort(port) => Some(*port),
        }
    }
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    active_tool: EditorTool,
    wire: WireGesture,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tool(&self) -> EditorTool {
        self.active_tool
    }

    /// Wechselt das Werkzeug. Eine offene Leitungs-Geste wird immer verworfen.
    pub fn set_active_tool(&mut self, tool: EditorTool) {
        self.active_tool = tool;
        self.wire = WireGesture::Idle;
    }

    pub fn wire_gesture(&self) -> WireGesture {
        self.wire
    }

    /// Ausstehender Start-Port der Leitungs-Geste.
    pub fn wire_start_port(&self) -> Option<Port> {
        self.wire.pending_port()
    }

    /// Setzt den Start-Port. Außerhalb des Wire-Werkzeugs ohne Wirkung.
    pub fn set_wire_start_port(&mut self, port: Port) -> bool {
        if self.active_tool != EditorTool::Wire {
            return false;
        }
        self.wire = WireGesture::AwaitingSecondPort(port);
        true
    }

    /// Verwirft eine offene Leitungs-Geste.
    pub fn clear_wire_start_port(&mut self) {
        self.wire = WireGesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ComponentId, PortSide};

    fn port() -> Port {
        Port::new(ComponentId::from_raw(1), PortSide::Right)
    }

    #[test]
    fn switching_tool_clears_pending_wire() {
        let mut editor = EditorToolState::new();
        editor.set_active_tool(EditorTool::Wire);
        assert!(editor.set_wire_start_port(port()));
        assert_eq!(editor.wire_start_port(), Some(port()));

        editor.set_active_tool(EditorTool::Wire);
        assert_eq!(editor.wire_gesture(), WireGesture::Idle);
    }

    #[test]
    fn start_port_is_ignored_outside_wire_tool() {
        let mut editor = EditorToolState::new();
        assert!(!editor.set_wire_start_port(port()));
        assert_eq!(editor.wire_start_port(), None);
    }

    #[test]
    fn clear_wire_start_port_returns_to_idle() {
        let mut editor = EditorToolState::new();
        editor.set_active_tool(EditorTool::Wire);
        editor.set_wire_start_port(port());
        editor.clear_wire_start_port();
        assert_eq!(editor.wire_gesture(), WireGesture::Idle);
        assert_eq!(editor.active_tool(), EditorTool::Wire);
    }
}
