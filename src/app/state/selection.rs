use crate::core::{ComponentId, ConnectionId, EntityRepository};
use indexmap::IndexSet;

/// Auswahlbezogener Anwendungszustand.
///
/// Zwei unabhängige ID-Mengen. Es werden nur IDs gehalten; eine ID kann auf
/// eine bereits entfernte Entität zeigen und wird dann ignoriert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektierte Komponenten (in Klick-Reihenfolge)
    pub components: IndexSet<ComponentId>,
    /// Selektierte Verbindungen (in Klick-Reihenfolge)
    pub connections: IndexSet<ConnectionId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ersetzt die Komponenten-Selektion durch genau diese ID.
    /// Die Verbindungs-Selektion bleibt unverändert.
    pub fn select_component(&mut self, id: ComponentId) {
        self.components.clear();
        self.components.insert(id);
    }

    /// Ersetzt die Verbindungs-Selektion durch genau diese ID.
    pub fn select_connection(&mut self, id: ConnectionId) {
        self.connections.clear();
        self.connections.insert(id);
    }

    /// Ersetzt beide Mengen explizit.
    pub fn set(
        &mut self,
        components: impl IntoIterator<Item = ComponentId>,
        connections: impl IntoIterator<Item = ConnectionId>,
    ) {
        self.components = components.into_iter().collect();
        self.connections = connections.into_iter().collect();
    }

    /// Leert beide Mengen.
    pub fn clear(&mut self) {
        self.components.clear();
        self.connections.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.connections.is_empty()
    }

    pub fn is_component_selected(&self, id: ComponentId) -> bool {
        self.components.contains(&id)
    }

    pub fn is_connection_selected(&self, id: ConnectionId) -> bool {
        self.connections.contains(&id)
    }

    pub fn remove_component(&mut self, id: ComponentId) -> bool {
        self.components.shift_remove(&id)
    }

    pub fn remove_connection(&mut self, id: ConnectionId) -> bool {
        self.connections.shift_remove(&id)
    }

    /// Entfernt IDs, die im Repository nicht mehr existieren.
    pub fn retain_existing(&mut self, repository: &EntityRepository) {
        self.components.retain(|id| repository.contains_component(*id));
        self.connections
            .retain(|id| repository.contains_connection(*id));
    }
}
