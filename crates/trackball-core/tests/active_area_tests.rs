// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::expect_used, clippy::unwrap_used)]

use std::cell::Cell;
use std::rc::Rc;

use trackball_core::math::Vec3;
use trackball_core::{
    ActiveArea, ElementId, Phase, PointerEvent, ProjectionError, Rect, TrackballConfig,
    TrackballError,
};

mod common;
use common::{approx_eq, build, build_with, run_frame, SQUARE};

const GROWN: Rect = Rect::new(0.0, 0.0, 201.0, 201.0);

#[test]
fn selector_area_gates_the_start_and_frames_the_projection() {
    let mut tb = build_with(TrackballConfig::default(), Rect::new(0.0, 0.0, 400.0, 300.0));
    tb.layout_mut()
        .selectors
        .insert(".viewport".into(), Rect::new(200.0, 100.0, 101.0, 101.0));
    tb.set_active_area(Some(ActiveArea::Selector(".viewport".into())))
        .unwrap();

    tb.pointer_down(50.0, 50.0).unwrap();
    assert_eq!(tb.phase(), Phase::Idle, "outside the selector rect");
    assert_eq!(tb.observer().starts, 0);

    tb.pointer_down(250.0, 150.0).unwrap();
    assert_eq!(tb.phase(), Phase::Dragging);
    assert_eq!(tb.drag_session().unwrap().start_vec(), Vec3::UNIT_Z);
}

#[test]
fn unknown_element_falls_back_to_the_scene() {
    let mut tb = build(TrackballConfig::default());
    tb.set_active_area(Some(ActiveArea::Element(ElementId(99))))
        .unwrap();
    tb.pointer_down(50.0, 50.0).unwrap();
    let session = tb.drag_session().unwrap();
    assert_eq!(session.rect(), SQUARE);
    assert_eq!(session.start_vec(), Vec3::UNIT_Z);
}

#[test]
fn element_area_is_refreshed_every_frame() {
    let mut tb = build(TrackballConfig::default());
    tb.layout_mut().elements.insert(ElementId(7), SQUARE);
    tb.set_active_area(Some(ActiveArea::Element(ElementId(7))))
        .unwrap();
    tb.pointer_down(50.0, 50.0).unwrap();

    // the element grows while the pointer is down
    tb.layout_mut().elements.insert(ElementId(7), GROWN);
    tb.pointer_move(100.0, 50.0).unwrap();
    assert!(run_frame(&mut tb));

    assert_eq!(tb.drag_session().unwrap().rect(), GROWN);
    // (100, 50) sits straight above the centre of the grown rect
    let axis = tb.orientation().axis();
    approx_eq(axis.x(), 1.0, 1e-5);
    approx_eq(axis.y(), 0.0, 1e-5);
}

#[test]
fn callback_area_is_refreshed_every_frame() {
    let shared = Rc::new(Cell::new(SQUARE));
    let source = Rc::clone(&shared);
    let mut tb = build(TrackballConfig::default());
    tb.set_active_area(Some(ActiveArea::Callback(Box::new(move || source.get()))))
        .unwrap();
    tb.pointer_down(50.0, 50.0).unwrap();

    shared.set(GROWN);
    tb.pointer_move(100.0, 50.0).unwrap();
    assert!(run_frame(&mut tb));
    assert_eq!(tb.drag_session().unwrap().rect(), GROWN);
}

#[test]
fn fixed_rect_is_captured_at_pointer_down() {
    let mut tb = build(TrackballConfig::default());
    tb.set_active_area(Some(ActiveArea::Rect(SQUARE))).unwrap();
    tb.pointer_down(50.0, 50.0).unwrap();

    tb.layout_mut().scene = GROWN;
    tb.pointer_move(100.0, 50.0).unwrap();
    assert!(run_frame(&mut tb));

    assert_eq!(tb.drag_session().unwrap().rect(), SQUARE);
    let q = tb.orientation();
    approx_eq(q.angle(), core::f32::consts::FRAC_PI_2, 1e-4);
    approx_eq(q.axis().y(), 1.0, 1e-5);
}

#[test]
fn degenerate_refreshed_rect_skips_the_frame() {
    let mut tb = build(TrackballConfig::default());
    tb.layout_mut().elements.insert(ElementId(1), SQUARE);
    tb.set_active_area(Some(ActiveArea::Element(ElementId(1))))
        .unwrap();
    tb.pointer_down(50.0, 50.0).unwrap();
    let before = tb.orientation();

    tb.layout_mut()
        .elements
        .insert(ElementId(1), Rect::new(0.0, 0.0, 0.0, 0.0));
    tb.pointer_move(60.0, 50.0).unwrap();
    let token = tb.scheduler_mut().take_due().unwrap();
    assert!(matches!(
        tb.on_frame(token),
        Err(TrackballError::Projection(ProjectionError::DegenerateRect { .. }))
    ));
    assert_eq!(tb.phase(), Phase::Dragging);
    assert_eq!(tb.orientation(), before);
    assert_eq!(tb.drag_session().unwrap().rect(), SQUARE);

    // the drag recovers once the element has a size again
    tb.layout_mut().elements.insert(ElementId(1), SQUARE);
    tb.pointer_move(70.0, 50.0).unwrap();
    assert!(run_frame(&mut tb));
    assert!(tb.orientation().angle() > 0.0);
}

#[test]
fn area_changes_apply_from_the_next_gesture() {
    let mut tb = build_with(TrackballConfig::default(), Rect::new(0.0, 0.0, 400.0, 300.0));
    tb.pointer_down(50.0, 50.0).unwrap();
    tb.set_active_area(Some(ActiveArea::Rect(Rect::new(300.0, 200.0, 50.0, 50.0))))
        .unwrap();
    tb.pointer_move(60.0, 50.0).unwrap();
    assert!(run_frame(&mut tb), "fixed rects are not re-resolved mid-drag");
    tb.pointer_up(60.0, 50.0).unwrap();
    assert_eq!(tb.observer().ends, 1);

    tb.pointer_down(50.0, 50.0).unwrap();
    assert_eq!(tb.phase(), Phase::Idle);
    assert!(tb.active_area().is_some());
}

#[test]
fn handle_event_dispatches_each_kind() {
    let mut tb = build(TrackballConfig::default());
    tb.handle_event(PointerEvent::Down { x: 50.0, y: 50.0 })
        .unwrap();
    tb.handle_event(PointerEvent::Move { x: 80.0, y: 50.0 })
        .unwrap();
    assert!(tb.pending_frame().is_some());
    tb.handle_event(PointerEvent::Up { x: 80.0, y: 50.0 })
        .unwrap();
    assert_eq!(tb.phase(), Phase::Idle);
    assert!(tb.pending_frame().is_none());

    tb.handle_event(PointerEvent::Down { x: 50.0, y: 50.0 })
        .unwrap();
    tb.handle_event(PointerEvent::Cancel).unwrap();
    assert_eq!(tb.observer().starts, 2);
    assert_eq!(tb.observer().ends, 2);
}

#[test]
fn set_active_area_after_dispose_is_rejected() {
    let mut tb = build(TrackballConfig::default());
    tb.dispose();
    assert!(matches!(
        tb.set_active_area(None),
        Err(TrackballError::Disposed)
    ));
}
