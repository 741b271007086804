//! Use-Case: Komponente aus der Palette an automatischer Position platzieren.

use super::add_component;
use crate::app::AppState;
use crate::core::{snap_point, ComponentId, ComponentKind, NewComponent};
use glam::Vec2;

/// Automatische Position für die `n`-te Komponente (vier Spalten, dann neue Zeile).
pub fn quick_add_slot(n: usize, grid_size: f32) -> Vec2 {
    let col = (n * 100) % 400;
    let row = n / 4;
    snap_point(
        Vec2::new(200.0 + col as f32, 200.0 + (row * 100) as f32),
        grid_size,
    )
}

/// Automatisches Label für die `n`-te Komponente.
///
/// Transistoren in MOS-Technik bekommen `M<n+1>`, Massen kein Label,
/// alles andere `<TYP>_<n+1>`.
pub fn quick_add_label(kind: ComponentKind, n: usize) -> String {
    match kind {
        ComponentKind::Nmos | ComponentKind::Pmos => format!("M{}", n + 1),
        ComponentKind::Ground | ComponentKind::Rground => String::new(),
        other => format!("{}_{}", other.as_str().to_uppercase(), n + 1),
    }
}

/// Platziert eine Komponente anhand der aktuellen Komponentenanzahl.
pub fn quick_add_component(state: &mut AppState, kind: ComponentKind) -> ComponentId {
    let n = state.component_count();
    let position = quick_add_slot(n, state.options.grid());
    add_component(
        state,
        NewComponent::new(kind, position).with_label(quick_add_label(kind, n)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_fill_four_columns_per_row() {
        assert_eq!(quick_add_slot(0, 50.0), Vec2::new(200.0, 200.0));
        assert_eq!(quick_add_slot(1, 50.0), Vec2::new(300.0, 200.0));
        assert_eq!(quick_add_slot(3, 50.0), Vec2::new(500.0, 200.0));
        assert_eq!(quick_add_slot(4, 50.0), Vec2::new(200.0, 300.0));
        assert_eq!(quick_add_slot(9, 50.0), Vec2::new(300.0, 400.0));
    }

    #[test]
    fn labels_follow_kind() {
        assert_eq!(quick_add_label(ComponentKind::Nmos, 0), "M1");
        assert_eq!(quick_add_label(ComponentKind::Ground, 3), "");
        assert_eq!(quick_add_label(ComponentKind::Resistor, 2), "RESISTOR_3");
        assert_eq!(quick_add_label(ComponentKind::DcVoltage, 0), "DC_VOLTAGE_1");
    }

    #[test]
    fn quick_add_uses_component_count() {
        let mut state = AppState::new();
        quick_add_component(&mut state, ComponentKind::Resistor);
        let id = quick_add_component(&mut state, ComponentKind::Pmos);

        let comp = state.repository().component(id).expect("Komponente existiert");
        assert_eq!(comp.position(), Vec2::new(300.0, 200.0));
        assert_eq!(comp.label, "M2");
        assert_eq!(comp.value, "");
    }
}
