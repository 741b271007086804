//! Entity-Repository: besitzt alle Komponenten und Verbindungen.
//!
//! Die Mengen liegen hinter `Arc`, Mutationen laufen über `Arc::make_mut`.
//! Ein Snapshot teilt sich die Daten mit dem Live-Zustand, bis die nächste
//! Mutation eine eigene Kopie erzwingt.

use super::{
    Component, ComponentId, ComponentPatch, Connection, ConnectionId, IdAllocator, NewComponent,
    NewConnection,
};
use indexmap::IndexMap;
use std::sync::Arc;

/// Komponenten in Einfüge-Reihenfolge (= Zeichenreihenfolge).
pub type ComponentMap = IndexMap<ComponentId, Component>;
/// Verbindungen in Einfüge-Reihenfolge.
pub type ConnectionMap = IndexMap<ConnectionId, Connection>;

/// Unveränderliche Momentaufnahme aller Entitäten.
#[derive(Debug, Clone, Default)]
pub struct EntitySnapshot {
    components: Arc<ComponentMap>,
    connections: Arc<ConnectionMap>,
}

impl EntitySnapshot {
    pub fn components(&self) -> &ComponentMap {
        &self.components
    }

    pub fn connections(&self) -> &ConnectionMap {
        &self.connections
    }

    /// Prüft ob beide Snapshots dieselben Daten teilen (ohne Kopie).
    pub fn shares_storage_with(&self, other: &EntitySnapshot) -> bool {
        Arc::ptr_eq(&self.components, &other.components)
            && Arc::ptr_eq(&self.connections, &other.connections)
    }
}

impl PartialEq for EntitySnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components && self.connections == other.connections
    }
}

/// Ergebnis eines Komponenten-Löschvorgangs.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedComponent {
    /// Die entfernte Komponente
    pub component: Component,
    /// IDs der kaskadierend entfernten Verbindungen
    pub connections: Vec<ConnectionId>,
}

/// Besitzt Komponenten und Verbindungen und garantiert referentielle Integrität.
#[derive(Debug, Clone, Default)]
pub struct EntityRepository {
    components: Arc<ComponentMap>,
    connections: Arc<ConnectionMap>,
    component_ids: IdAllocator,
    connection_ids: IdAllocator,
}

impl EntityRepository {
    /// Erstellt ein leeres Repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt eine Komponente hinzu und gibt die neue ID zurück.
    pub fn add_component(&mut self, component: NewComponent) -> ComponentId {
        let id = ComponentId::from_raw(self.component_ids.allocate());
        Arc::make_mut(&mut self.components).insert(id, component.into_component(id));
        id
    }

    /// Übernimmt die gesetzten Felder des Patches. `false`, wenn die ID fehlt.
    pub fn update_component(&mut self, id: ComponentId, patch: &ComponentPatch) -> bool {
        if !self.components.contains_key(&id) {
            return false;
        }
        match Arc::make_mut(&mut self.components).get_mut(&id) {
            Some(component) => {
                patch.apply_to(component);
                true
            }
            None => false,
        }
    }

    /// Entfernt eine Komponente inklusive aller Verbindungen, die sie referenzieren.
    pub fn delete_component(&mut self, id: ComponentId) -> Option<RemovedComponent> {
        if !self.components.contains_key(&id) {
            return None;
        }
        let component = Arc::make_mut(&mut self.components).shift_remove(&id)?;

        let cascaded: Vec<ConnectionId> = self
            .connections
            .values()
            .filter(|c| c.touches(id))
            .map(|c| c.id)
            .collect();
        if !cascaded.is_empty() {
            Arc::make_mut(&mut self.connections).retain(|_, c| !c.touches(id));
        }

        Some(RemovedComponent {
            component,
            connections: cascaded,
        })
    }

    /// Fügt eine Verbindung hinzu.
    ///
    /// Gibt `None` zurück, wenn Start- oder Ziel-Komponente nicht existiert.
    /// Gleiche Ports an beiden Enden sind erlaubt.
    pub fn add_connection(&mut self, connection: NewConnection) -> Option<ConnectionId> {
        if !self.contains_component(connection.source.component_id)
            || !self.contains_component(connection.target.component_id)
        {
            return None;
        }
        let id = ConnectionId::from_raw(self.connection_ids.allocate());
        Arc::make_mut(&mut self.connections).insert(id, connection.into_connection(id));
        Some(id)
    }

    /// Entfernt eine Verbindung.
    pub fn delete_connection(&mut self, id: ConnectionId) -> Option<Connection> {
        if !self.connections.contains_key(&id) {
            return None;
        }
        Arc::make_mut(&mut self.connections).shift_remove(&id)
    }

    /// Entfernt alle Entitäten. Die ID-Zähler laufen weiter.
    pub fn clear(&mut self) {
        self.components = Arc::default();
        self.connections = Arc::default();
    }

    /// Momentaufnahme des aktuellen Zustands (teilt Daten, O(1)).
    pub fn snapshot(&self) -> EntitySnapshot {
        EntitySnapshot {
            components: Arc::clone(&self.components),
            connections: Arc::clone(&self.connections),
        }
    }

    /// Stellt einen Snapshot wieder her. Die ID-Zähler laufen weiter.
    pub fn restore(&mut self, snapshot: &EntitySnapshot) {
        self.components = Arc::clone(&snapshot.components);
        self.connections = Arc::clone(&snapshot.connections);
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(&id)
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&id)
    }

    pub fn contains_component(&self, id: ComponentId) -> bool {
        self.components.contains_key(&id)
    }

    pub fn contains_connection(&self, id: ConnectionId) -> bool {
        self.connections.contains_key(&id)
    }

    /// Alle Komponenten in Einfüge-Reihenfolge.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Alle Verbindungen in Einfüge-Reihenfolge.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Alle Verbindungen, die eine Komponente berühren.
    pub fn connections_of(&self, id: ComponentId) -> impl Iterator<Item = &Connection> {
        self.connections.values().filter(move |c| c.touches(id))
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.connections.is_empty()
    }

    /// Nächste Komponenten-ID (ohne sie zu vergeben).
    pub fn peek_next_component_id(&self) -> ComponentId {
        ComponentId::from_raw(self.component_ids.peek())
    }
}
