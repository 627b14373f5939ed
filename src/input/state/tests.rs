use std::sync::{Arc, Mutex};

use super::*;
use crate::config::{ClearPolicy, Config};
use crate::draw::{BLACK, Color, RED};
use crate::input::{Action, SwipeDirection, TouchEvent};

fn create_test_input_state() -> InputState {
    InputState::with_defaults(
        BLACK,
        5.0,                                       // brush size (dp)
        2.0,                                       // density
        vec![10.0, 15.0, 20.0, 25.0, 30.0, 35.0], // presets
        ClearPolicy::DiscardRedo,
    )
}

fn draw_stroke(state: &mut InputState, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().unwrap();
    state.on_touch(TouchEvent::start(first.0, first.1));
    for (x, y) in rest {
        state.on_touch(TouchEvent::move_to(*x, *y));
    }
    let last = points.last().unwrap();
    state.on_touch(TouchEvent::end(last.0, last.1));
}

#[test]
fn test_new_state_needs_initial_redraw() {
    let state = create_test_input_state();
    assert!(state.needs_redraw);
    assert!(state.model.is_empty());
    assert_eq!(state.model.thickness(), 10.0);
}

#[test]
fn test_touch_sequence_commits_stroke() {
    let mut state = create_test_input_state();
    state.needs_redraw = false;

    state.on_touch(TouchEvent::start(0.0, 0.0));
    assert!(state.needs_redraw);
    assert!(state.model.current().is_some());

    state.needs_redraw = false;
    state.on_touch(TouchEvent::move_to(5.0, 5.0));
    assert!(state.needs_redraw);

    state.needs_redraw = false;
    state.on_touch(TouchEvent::end(5.0, 5.0));
    assert!(state.needs_redraw);

    let committed = state.model.committed();
    assert_eq!(committed.len(), 1);
    assert_eq!(committed[0].points, vec![(0.0, 0.0), (5.0, 5.0)]);
    assert_eq!(committed[0].color, BLACK);
    assert!(state.model.current().is_none());
}

#[test]
fn test_move_without_start_is_ignored() {
    let mut state = create_test_input_state();
    state.needs_redraw = false;

    state.on_touch(TouchEvent::move_to(3.0, 3.0));
    state.on_touch(TouchEvent::end(3.0, 3.0));

    assert!(!state.needs_redraw);
    assert!(state.model.committed().is_empty());
}

#[test]
fn test_tap_commits_single_point_stroke() {
    let mut state = create_test_input_state();
    draw_stroke(&mut state, &[(7.0, 7.0)]);
    assert_eq!(state.model.committed().len(), 1);
    assert_eq!(state.model.committed()[0].points, vec![(7.0, 7.0)]);
}

#[test]
fn test_brush_size_is_scaled_by_density() {
    let mut state = create_test_input_state();
    assert!(state.set_brush_size(20.0));
    draw_stroke(&mut state, &[(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(state.model.committed()[0].thickness, 40.0);
}

#[test]
fn test_invalid_brush_size_keeps_previous() {
    let mut state = create_test_input_state();
    assert!(!state.set_brush_size(0.0));
    assert!(!state.set_brush_size(f64::NAN));
    assert_eq!(state.model.thickness(), 10.0);
}

#[test]
fn test_select_brush_preset() {
    let mut state = create_test_input_state();
    state.handle_action(Action::SelectBrushPreset(2));
    assert_eq!(state.model.thickness(), 40.0);

    state.handle_action(Action::SelectBrushPreset(99));
    assert_eq!(state.model.thickness(), 40.0);
}

#[test]
fn test_set_color_applies_to_next_stroke_only() {
    let mut state = create_test_input_state();
    draw_stroke(&mut state, &[(0.0, 0.0), (1.0, 1.0)]);

    state.handle_action(Action::SetColor("#FF0000".to_string()));
    draw_stroke(&mut state, &[(2.0, 2.0), (3.0, 3.0)]);

    let committed = state.model.committed();
    assert_eq!(committed[0].color, BLACK);
    assert_eq!(committed[1].color, RED);
}

#[test]
fn test_unparseable_color_is_ignored() {
    let mut state = create_test_input_state();
    assert!(!state.set_color("not-a-color"));
    assert!(!state.set_color("#12"));
    assert_eq!(state.model.color(), BLACK);
}

#[test]
fn test_undo_redo_actions_flag_redraw() {
    let mut state = create_test_input_state();
    draw_stroke(&mut state, &[(0.0, 0.0), (5.0, 5.0)]);

    state.needs_redraw = false;
    state.handle_action(Action::Undo);
    assert!(state.needs_redraw);
    assert!(state.model.committed().is_empty());
    assert_eq!(state.model.undone().len(), 1);

    state.needs_redraw = false;
    state.handle_action(Action::Redo);
    assert!(state.needs_redraw);
    assert_eq!(state.model.committed().len(), 1);

    state.needs_redraw = false;
    state.handle_action(Action::Redo);
    assert!(!state.needs_redraw);
}

#[test]
fn test_clear_action_empties_canvas() {
    let mut state = create_test_input_state();
    draw_stroke(&mut state, &[(0.0, 0.0), (5.0, 5.0)]);
    draw_stroke(&mut state, &[(1.0, 0.0), (6.0, 5.0)]);
    state.handle_action(Action::Undo);

    state.needs_redraw = false;
    state.handle_action(Action::Clear);
    assert!(state.needs_redraw);
    assert!(state.model.committed().is_empty());
    assert!(!state.model.can_redo());
}

#[test]
fn test_export_action_is_queued_once() {
    let mut state = create_test_input_state();
    assert!(!state.take_pending_export());

    state.handle_action(Action::Export);
    assert!(state.has_pending_export());
    assert!(state.take_pending_export());
    assert!(!state.take_pending_export());
}

#[test]
fn test_swipe_handler_receives_direction() {
    let mut state = create_test_input_state();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    state.set_swipe_handler(Box::new(move |direction| {
        sink.lock().unwrap().push(direction);
    }));

    draw_stroke(&mut state, &[(0.0, 0.0), (100.0, 0.0), (300.0, 10.0)]);
    draw_stroke(&mut state, &[(0.0, 400.0), (0.0, 0.0)]);
    draw_stroke(&mut state, &[(0.0, 0.0), (20.0, 20.0)]);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![SwipeDirection::Right, SwipeDirection::Up]
    );
    // Swipes are still ordinary strokes
    assert_eq!(state.model.committed().len(), 3);
}

#[test]
fn test_from_config_uses_drawing_settings() {
    let mut config = Config::default();
    config.drawing.default_brush_size = 8.0;
    config.display.density = 1.5;
    config.history.clear_policy = ClearPolicy::KeepRedo;

    let state = InputState::from_config(&config);
    assert_eq!(state.model.thickness(), 12.0);
    assert_eq!(state.model.color(), Color::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(state.model.clear_policy(), ClearPolicy::KeepRedo);
    assert_eq!(state.brush_presets.len(), 6);
}
