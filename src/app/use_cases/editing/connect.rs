//! Use-Case: Verbindung zwischen zwei Ports anlegen.

use crate::app::AppState;
use crate::core::{ConnectionId, NewConnection};

/// Legt eine Verbindung an und zeichnet einen Snapshot auf.
///
/// Port-Gleichheit oder elektrische Sinnhaftigkeit werden nicht geprüft.
/// Nennt ein Ende eine nicht existierende Komponente, wird nichts angelegt
/// und kein Snapshot aufgezeichnet.
pub fn add_connection(state: &mut AppState, connection: NewConnection) -> Option<ConnectionId> {
    let source = connection.source;
    let target = connection.target;
    let Some(id) = state.repository.add_connection(connection) else {
        log::debug!(
            "Verbindung {}→{} verworfen: Komponente fehlt",
            source.component_id,
            target.component_id
        );
        return None;
    };
    state.save_to_history();
    log::info!(
        "Verbindung {} angelegt: {}.{:?} → {}.{:?}",
        id,
        source.component_id,
        source.position,
        target.component_id,
        target.position
    );
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::editing::add_component;
    use crate::core::{ComponentId, ComponentKind, NewComponent, Port, PortSide};
    use glam::Vec2;

    #[test]
    fn connect_records_snapshot() {
        let mut state = AppState::new();
        let a = add_component(&mut state, NewComponent::new(ComponentKind::Resistor, Vec2::ZERO));
        let b = add_component(&mut state, NewComponent::new(ComponentKind::Diode, Vec2::ONE));
        let before = state.history().len();

        let id = add_connection(
            &mut state,
            NewConnection::new(Port::new(a, PortSide::Right), Port::new(b, PortSide::Left)),
        );

        assert_eq!(id.map(|id| id.to_string()), Some("conn_1".to_string()));
        assert_eq!(state.history().len(), before + 1);
    }

    #[test]
    fn dangling_connection_is_rejected_without_snapshot() {
        let mut state = AppState::new();
        let a = add_component(&mut state, NewComponent::new(ComponentKind::Resistor, Vec2::ZERO));
        let before = state.history().len();

        let id = add_connection(
            &mut state,
            NewConnection::new(
                Port::new(a, PortSide::Right),
                Port::new(ComponentId::from_raw(99), PortSide::Left),
            ),
        );

        assert!(id.is_none());
        assert_eq!(state.history().len(), before);
    }
}
