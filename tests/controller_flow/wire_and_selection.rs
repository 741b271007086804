use circuit_schematic_editor::{AppController, AppIntent, AppState, WireGesture};
use circuit_schematic_editor::{ComponentId, ComponentKind, EditorTool, NewComponent, Port, PortSide};
use glam::Vec2;

fn two_components() -> (AppController, AppState, ComponentId, ComponentId) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let a = state.repository().peek_next_component_id();
    controller
        .handle_intent(
            &mut state,
            AppIntent::AddComponentRequested {
                component: NewComponent::new(ComponentKind::Resistor, Vec2::new(100.0, 100.0)),
            },
        )
        .expect("AddComponentRequested sollte ohne Fehler durchlaufen");
    let b = state.repository().peek_next_component_id();
    controller
        .handle_intent(
            &mut state,
            AppIntent::AddComponentRequested {
                component: NewComponent::new(ComponentKind::Capacitor, Vec2::new(200.0, 100.0)),
            },
        )
        .expect("AddComponentRequested sollte ohne Fehler durchlaufen");
    (controller, state, a, b)
}

fn set_tool(controller: &mut AppController, state: &mut AppState, tool: EditorTool) {
    controller
        .handle_intent(state, AppIntent::SetToolRequested { tool })
        .expect("SetToolRequested sollte ohne Fehler durchlaufen");
}

fn click_port(controller: &mut AppController, state: &mut AppState, port: Port) {
    controller
        .handle_intent(state, AppIntent::PortClicked { port })
        .expect("PortClicked sollte ohne Fehler durchlaufen");
}

#[test]
fn test_two_port_clicks_create_connection() {
    let (mut controller, mut state, a, b) = two_components();
    set_tool(&mut controller, &mut state, EditorTool::Wire);

    let start = Port::new(a, PortSide::Right);
    click_port(&mut controller, &mut state, start);
    assert_eq!(state.editor.wire_gesture(), WireGesture::AwaitingSecondPort(start));

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.pending_wire_start, Some(Vec2::new(120.0, 100.0)));

    click_port(&mut controller, &mut state, Port::new(b, PortSide::Left));
    assert_eq!(state.editor.wire_gesture(), WireGesture::Idle);
    assert_eq!(state.connection_count(), 1);

    let connection = state
        .repository()
        .connections()
        .next()
        .expect("Verbindung fehlt");
    assert_eq!(connection.source, start);
    assert_eq!(connection.target, Port::new(b, PortSide::Left));

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.wires.len(), 1);
    assert_eq!(
        scene.wires[0].points,
        vec![Vec2::new(120.0, 100.0), Vec2::new(180.0, 100.0)]
    );
}

#[test]
fn test_same_port_twice_cancels_gesture() {
    let (mut controller, mut state, a, _) = two_components();
    set_tool(&mut controller, &mut state, EditorTool::Wire);

    let port = Port::new(a, PortSide::Top);
    click_port(&mut controller, &mut state, port);
    click_port(&mut controller, &mut state, port);

    assert_eq!(state.editor.wire_gesture(), WireGesture::Idle);
    assert_eq!(state.connection_count(), 0);
}

#[test]
fn test_port_click_outside_wire_tool_is_ignored() {
    let (mut controller, mut state, a, _) = two_components();

    click_port(&mut controller, &mut state, Port::new(a, PortSide::Right));

    assert_eq!(state.editor.wire_gesture(), WireGesture::Idle);
    assert_eq!(state.connection_count(), 0);
}

#[test]
fn test_switching_tool_abandons_pending_wire() {
    let (mut controller, mut state, a, _) = two_components();
    set_tool(&mut controller, &mut state, EditorTool::Wire);
    click_port(&mut controller, &mut state, Port::new(a, PortSide::Right));

    set_tool(&mut controller, &mut state, EditorTool::Select);

    assert!(state.editor.wire_start_port().is_none());
}

#[test]
fn test_deleting_wire_start_component_clears_gesture() {
    let (mut controller, mut state, a, _) = two_components();
    set_tool(&mut controller, &mut state, EditorTool::Wire);
    click_port(&mut controller, &mut state, Port::new(a, PortSide::Right));

    controller
        .handle_intent(&mut state, AppIntent::DeleteComponentRequested { id: a })
        .expect("DeleteComponentRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.editor.wire_gesture(), WireGesture::Idle);
}

#[test]
fn test_select_tool_click_is_exclusive_and_background_clears() {
    let (mut controller, mut state, a, b) = two_components();

    controller
        .handle_intent(&mut state, AppIntent::ComponentClicked { id: a })
        .expect("ComponentClicked sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ComponentClicked { id: b })
        .expect("ComponentClicked sollte ohne Fehler durchlaufen");

    assert_eq!(state.selection.components.len(), 1);
    assert!(state.selection.is_component_selected(b));

    controller
        .handle_intent(&mut state, AppIntent::BackgroundClicked)
        .expect("BackgroundClicked sollte ohne Fehler durchlaufen");
    assert!(state.selection.is_empty());
}

#[test]
fn test_wire_tool_click_does_not_change_selection() {
    let (mut controller, mut state, a, b) = two_components();
    controller
        .handle_intent(&mut state, AppIntent::ComponentClicked { id: a })
        .expect("ComponentClicked sollte ohne Fehler durchlaufen");
    set_tool(&mut controller, &mut state, EditorTool::Wire);

    controller
        .handle_intent(&mut state, AppIntent::ComponentClicked { id: b })
        .expect("ComponentClicked sollte ohne Fehler durchlaufen");

    assert!(state.selection.is_component_selected(a));
    assert!(!state.selection.is_component_selected(b));
}

#[test]
fn test_delete_selected_is_one_undo_step() {
    let (mut controller, mut state, a, b) = two_components();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ConnectRequested {
                source: Port::new(a, PortSide::Right),
                target: Port::new(b, PortSide::Left),
                waypoints: vec![Vec2::new(150.0, 50.0)],
            },
        )
        .expect("ConnectRequested sollte ohne Fehler durchlaufen");
    let history_len = state.history().len();

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
        .handle_intent(&mut state, AppIntent::DeleteSelectedRequested)
        .expect("DeleteSelectedRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.component_count(), 0);
    assert_eq!(state.connection_count(), 0);
    assert!(state.selection.is_empty());
    assert_eq!(state.history().len(), history_len + 1);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("UndoRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.component_count(), 2);
    assert_eq!(state.connection_count(), 1);
}

#[test]
fn test_connection_click_selects_and_delete_tool_removes() {
    let (mut controller, mut state, a, b) = two_components();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ConnectRequested {
                source: Port::new(a, PortSide::Bottom),
                target: Port::new(b, PortSide::Bottom),
                waypoints: vec![],
            },
        )
        .expect("ConnectRequested sollte ohne Fehler durchlaufen");
    let id = state
        .repository()
        .connections()
        .next()
        .map(|c| c.id)
        .expect("Verbindung fehlt");

    controller
        .handle_intent(&mut state, AppIntent::ConnectionClicked { id })
        .expect("ConnectionClicked sollte ohne Fehler durchlaufen");
    assert!(state.selection.is_connection_selected(id));

    set_tool(&mut controller, &mut state, EditorTool::Delete);
    controller
        .handle_intent(&mut state, AppIntent::ConnectionClicked { id })
        .expect("ConnectionClicked sollte ohne Fehler durchlaufen");

    assert_eq!(state.connection_count(), 0);
    assert!(!state.selection.is_connection_selected(id));
    assert_eq!(state.component_count(), 2);
}
