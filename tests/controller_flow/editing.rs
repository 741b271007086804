use circuit_schematic_editor::{AppController, AppIntent, AppState};
use circuit_schematic_editor::{
    ComponentId, ComponentKind, ComponentPatch, EditorTool, NewComponent, Port, PortSide,
    Rotation,
};
use glam::Vec2;

fn add(controller: &mut AppController, state: &mut AppState, kind: ComponentKind, pos: Vec2) -> ComponentId {
    let id = state.repository().peek_next_component_id();
    controller
        .handle_intent(
            state,
            AppIntent::AddComponentRequested {
                component: NewComponent::new(kind, pos),
            },
        )
        .expect("AddComponentRequested sollte ohne Fehler durchlaufen");
    id
}

#[test]
fn test_drag_end_snaps_position_to_grid() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = add(&mut controller, &mut state, ComponentKind::Resistor, Vec2::new(100.0, 100.0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::ComponentDragEnded {
                id,
                diagram_pos: Vec2::new(137.0, 74.0),
            },
        )
        .expect("ComponentDragEnded sollte ohne Fehler durchlaufen");

    let component = state.repository().component(id).expect("Komponente fehlt");
    assert_eq!(component.position(), Vec2::new(150.0, 50.0));
    assert_eq!(state.history().len(), 3);
}

#[test]
fn test_update_keeps_unpatched_fields() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = state.repository().peek_next_component_id();
    controller
        .handle_intent(
            &mut state,
            AppIntent::AddComponentRequested {
                component: NewComponent::new(ComponentKind::Resistor, Vec2::new(100.0, 100.0))
                    .with_label("R1")
                    .with_value("10k"),
            },
        )
        .expect("AddComponentRequested sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(
            &mut state,
            AppIntent::UpdateComponentRequested {
                id,
                patch: ComponentPatch::default().with_value("4k7"),
            },
        )
        .expect("UpdateComponentRequested sollte ohne Fehler durchlaufen");

    let component = state.repository().component(id).expect("Komponente fehlt");
    assert_eq!(component.label, "R1");
    assert_eq!(component.value, "4k7");
    assert_eq!(component.position(), Vec2::new(100.0, 100.0));
}

#[test]
fn test_rotate_selected_turns_each_selected_component() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let a = add(&mut controller, &mut state, ComponentKind::Resistor, Vec2::ZERO);
    let b = add(&mut controller, &mut state, ComponentKind::Diode, Vec2::new(100.0, 0.0));
    let c = add(&mut controller, &mut state, ComponentKind::Led, Vec2::new(200.0, 0.0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectionSetRequested {
                components: vec![a, b],
                connections: vec![],
            },
        )
        .expect("SelectionSetRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::RotateSelectedRequested)
        .expect("RotateSelectedRequested sollte ohne Fehler durchlaufen");

    let rotation = |id| state.repository().component(id).map(|c| c.rotation);
    assert_eq!(rotation(a), Some(Rotation::Deg90));
    assert_eq!(rotation(b), Some(Rotation::Deg90));
    assert_eq!(rotation(c), Some(Rotation::Deg0));
}

#[test]
fn test_delete_tool_click_removes_component_with_connections() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let a = add(&mut controller, &mut state, ComponentKind::Resistor, Vec2::ZERO);
    let b = add(&mut controller, &mut state, ComponentKind::Capacitor, Vec2::new(100.0, 0.0));
    controller
        .handle_intent(
            &mut state,
            AppIntent::ConnectRequested {
                source: Port::new(a, PortSide::Right),
                target: Port::new(b, PortSide::Left),
                waypoints: vec![],
            },
        )
        .expect("ConnectRequested sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetToolRequested {
                tool: EditorTool::Delete,
            },
        )
        .expect("SetToolRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ComponentClicked { id: b })
        .expect("ComponentClicked sollte ohne Fehler durchlaufen");

    assert!(!state.repository().contains_component(b));
    assert_eq!(state.connection_count(), 0);
    assert_eq!(state.component_count(), 1);
}

#[test]
fn test_quick_add_places_components_on_slots_with_labels() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for kind in [
        ComponentKind::Resistor,
        ComponentKind::Nmos,
        ComponentKind::Ground,
    ] {
        controller
            .handle_intent(&mut state, AppIntent::QuickAddComponentRequested { kind })
            .expect("QuickAdd sollte ohne Fehler durchlaufen");
    }

    let components: Vec<_> = state.repository().components().collect();
    assert_eq!(components.len(), 3);
    assert_eq!(components[0].label, "RESISTOR_1");
    assert_eq!(components[0].position(), Vec2::new(200.0, 200.0));
    assert_eq!(components[1].label, "M2");
    assert_eq!(components[1].position(), Vec2::new(300.0, 200.0));
    assert_eq!(components[2].label, "");
    assert_eq!(components[2].position(), Vec2::new(400.0, 200.0));
}

#[test]
fn test_clear_diagram_resets_history_and_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let a = add(&mut controller, &mut state, ComponentKind::Resistor, Vec2::ZERO);
    controller
        .handle_intent(&mut state, AppIntent::ComponentClicked { id: a })
        .expect("ComponentClicked sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::ClearDiagramRequested)
        .expect("ClearDiagramRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.component_count(), 0);
    assert!(state.selection.is_empty());
    assert!(!state.can_undo());
    assert!(!state.can_redo());

    // IDs laufen nach dem Leeren weiter
    let next = add(&mut controller, &mut state, ComponentKind::Resistor, Vec2::ZERO);
    assert_ne!(next, a);
}
