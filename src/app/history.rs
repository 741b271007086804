use crate::core::{EntityRepository, EntitySnapshot};

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// die eigentliche Kopie der Komponenten/Verbindungen entsteht erst beim
/// nächsten `Arc::make_mut()` im Repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    entities: EntitySnapshot,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot des Repositorys.
    pub fn from_repository(repository: &EntityRepository) -> Self {
        Self {
            entities: repository.snapshot(),
        }
    }

    /// Stellt den Snapshot im Repository wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(&self, repository: &mut EntityRepository) {
        repository.restore(&self.entities);
    }

    /// Read-only Zugriff auf die gespeicherten Entitäten.
    pub fn entities(&self) -> &EntitySnapshot {
        &self.entities
    }
}

/// Linearer Undo/Redo-Verlauf mit Cursor.
///
/// Eintrag 0 ist nach `new`/`reset` der leere Ausgangszustand. Der Cursor zeigt
/// immer auf den Snapshot, der dem aktuellen Repository-Zustand entspricht.
#[derive(Debug, Clone)]
pub struct EditHistory {
    entries: Vec<Snapshot>,
    cursor: usize,
    capacity: usize,
}

impl EditHistory {
    /// Standard-Kapazität (Anzahl Snapshots inkl. Ausgangszustand).
    pub const DEFAULT_CAPACITY: usize = 50;

    /// Erstellt einen Verlauf mit leerem Ausgangszustand. Kapazität mindestens 1.
    pub fn new_with_capacity(capacity: usize) -> Self {
        Self {
            entries: vec![Snapshot::default()],
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Verwirft alles und beginnt wieder mit einem leeren Ausgangszustand.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(Snapshot::default());
        self.cursor = 0;
    }

    /// Hängt einen Snapshot hinter dem Cursor an.
    ///
    /// Redo-Einträge hinter dem Cursor werden verworfen. Läuft die Kapazität
    /// über, fallen die ältesten Einträge weg und der Cursor rückt entsprechend
    /// nach, sodass er weiterhin auf den neuesten Eintrag zeigt.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);

        let overflow = self.entries.len().saturating_sub(self.capacity);
        if overflow > 0 {
            self.entries.drain(..overflow);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Geht einen Schritt zurück und liefert den wiederherzustellenden Snapshot.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Geht einen Schritt vor und liefert den wiederherzustellenden Snapshot.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    /// Aktuelle Cursor-Position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Anzahl gespeicherter Snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Nie leer, solange der Verlauf existiert.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot an der Cursor-Position.
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor)
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new_with_capacity(Self::DEFAULT_CAPACITY)
    }
}
