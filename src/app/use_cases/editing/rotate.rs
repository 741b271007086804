//! Use-Case: Selektierte Komponenten drehen.

use super::update_component;
use crate::app::AppState;
use crate::core::{ComponentId, ComponentPatch};

/// Dreht jede selektierte Komponente um 90° im Uhrzeigersinn.
/// Pro Komponente ein Update (und damit ein Snapshot).
pub fn rotate_selected(state: &mut AppState) {
    let targets: Vec<(ComponentId, _)> = state
        .selection
        .components
        .iter()
        .filter_map(|id| {
            state
                .repository
                .component(*id)
                .map(|c| (*id, c.rotation.rotated_cw()))
        })
        .collect();

    if targets.is_empty() {
        log::debug!("Keine Komponente zum Drehen selektiert");
        return;
    }

    for (id, rotation) in targets {
        update_component(state, id, &ComponentPatch::rotation(rotation));
    }
}
