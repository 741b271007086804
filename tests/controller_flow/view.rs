use approx::assert_relative_eq;
use circuit_schematic_editor::app::build_status;
use circuit_schematic_editor::{AppController, AppIntent, AppState, Viewport};
use glam::Vec2;

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Viewport-Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_wheel_zoom_keeps_point_under_pointer() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport.set_offset(Vec2::new(40.0, -20.0));

    let pointer = Vec2::new(300.0, 200.0);
    let anchor = state.view.viewport.screen_to_diagram(pointer);

    send(
        &mut controller,
        &mut state,
        AppIntent::WheelScrolled {
            screen_pos: pointer,
            delta_y: -1.0,
        },
    );

    assert_relative_eq!(state.view.viewport.scale(), 1.1, epsilon = 1e-5);
    let screen = state.view.viewport.diagram_to_screen(anchor);
    assert_relative_eq!(screen.x, pointer.x, epsilon = 1e-3);
    assert_relative_eq!(screen.y, pointer.y, epsilon = 1e-3);
}

#[test]
fn test_zoom_buttons_stay_within_bounds() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for _ in 0..40 {
        send(&mut controller, &mut state, AppIntent::ZoomInRequested);
    }
    assert_relative_eq!(state.view.viewport.scale(), Viewport::ZOOM_MAX);

    for _ in 0..80 {
        send(&mut controller, &mut state, AppIntent::ZoomOutRequested);
    }
    assert_relative_eq!(state.view.viewport.scale(), Viewport::ZOOM_MIN);

    send(
        &mut controller,
        &mut state,
        AppIntent::SetZoomRequested { scale: 0.01 },
    );
    assert_relative_eq!(state.view.viewport.scale(), Viewport::ZOOM_MIN);
}

#[test]
fn test_pan_and_reset_view() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::PanEnded {
            offset: Vec2::new(10.0, 20.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PanRequested {
            delta: Vec2::new(5.0, -5.0),
        },
    );
    assert_eq!(state.view.viewport.offset, Vec2::new(15.0, 15.0));

    send(&mut controller, &mut state, AppIntent::ZoomInRequested);
    send(&mut controller, &mut state, AppIntent::ResetViewRequested);
    assert_eq!(state.view.viewport, Viewport::new());
}

#[test]
fn test_viewport_changes_do_not_touch_history() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::ZoomInRequested);
    send(
        &mut controller,
        &mut state,
        AppIntent::PanRequested {
            delta: Vec2::new(5.0, 5.0),
        },
    );

    assert_eq!(state.history().len(), 1);
    assert!(!state.can_undo());
}

#[test]
fn test_pointer_move_updates_status_cursor() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    send(
        &mut controller,
        &mut state,
        AppIntent::SetZoomRequested { scale: 2.0 },
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(101.0, -30.0),
        },
    );

    let status = build_status(&state);
    assert_eq!(status.cursor, (51, -15));
    assert_eq!(status.zoom_percent, 200);
    assert_eq!(status.tool, "select");
}
