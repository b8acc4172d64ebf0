// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code, clippy::expect_used)]

use std::collections::HashMap;

use trackball_core::math::Quat;
use trackball_core::{
    ElementId, FrameLoop, LayoutPort, Phase, Rect, Trackball, TrackballConfig, TrackballObserver,
    TrackballPorts, VecInput,
};

pub type TestTrackball = Trackball<VecInput, TestLayout, FrameLoop, Recorder>;

pub const SQUARE: Rect = Rect::new(0.0, 0.0, 101.0, 101.0);

#[derive(Debug, Default)]
pub struct Recorder {
    pub draws: usize,
    pub starts: usize,
    pub ends: usize,
    pub last_draw: Option<Quat>,
    pub ended_with: Vec<Quat>,
}

impl TrackballObserver for Recorder {
    fn on_draw(&mut self, orientation: Quat) {
        self.draws += 1;
        self.last_draw = Some(orientation);
    }

    fn on_gesture_start(&mut self, _orientation: Quat) {
        self.starts += 1;
    }

    fn on_gesture_end(&mut self, orientation: Quat) {
        self.ends += 1;
        self.ended_with.push(orientation);
    }
}

#[derive(Debug)]
pub struct TestLayout {
    pub scene: Rect,
    pub selectors: HashMap<String, Rect>,
    pub elements: HashMap<ElementId, Rect>,
}

impl TestLayout {
    pub fn new(scene: Rect) -> Self {
        Self {
            scene,
            selectors: HashMap::new(),
            elements: HashMap::new(),
        }
    }
}

impl LayoutPort for TestLayout {
    fn scene_rect(&self) -> Rect {
        self.scene
    }

    fn query_selector(&self, selector: &str) -> Option<Rect> {
        self.selectors.get(selector).copied()
    }

    fn element_rect(&self, element: ElementId) -> Option<Rect> {
        self.elements.get(&element).copied()
    }
}

pub fn build(config: TrackballConfig) -> TestTrackball {
    build_with(config, SQUARE)
}

pub fn build_with(config: TrackballConfig, scene: Rect) -> TestTrackball {
    let ports = TrackballPorts {
        input: VecInput::new(),
        layout: TestLayout::new(scene),
        scheduler: FrameLoop::new(),
        observer: Recorder::default(),
    };
    Trackball::new(config, Quat::identity(), ports).expect("valid config")
}

/// Fires the pending frame, if any. Returns whether one ran.
pub fn run_frame(tb: &mut TestTrackball) -> bool {
    match tb.scheduler_mut().take_due() {
        Some(token) => {
            tb.on_frame(token).expect("frame");
            true
        }
        None => false,
    }
}

/// Runs frames until the trackball is idle; returns how many ran.
pub fn run_until_idle(tb: &mut TestTrackball, limit: usize) -> usize {
    let mut frames = 0;
    while tb.phase() != Phase::Idle && frames < limit {
        tb.scheduler_mut().advance(16.0);
        if !run_frame(tb) {
            break;
        }
        frames += 1;
    }
    frames
}

pub fn approx_eq(a: f32, b: f32, tol: f32) {
    assert!(
        approx::abs_diff_eq!(a, b, epsilon = tol),
        "expected {b}, got {a} (diff {})",
        (a - b).abs()
    );
}

pub fn approx_quat(a: Quat, b: Quat, tol: f32) {
    // q and -q encode the same rotation
    let sign = if a.dot(&b) < 0.0 { -1.0 } else { 1.0 };
    for (x, y) in a.to_array().into_iter().zip(b.to_array()) {
        assert!(
            approx::abs_diff_eq!(x, sign * y, epsilon = tol),
            "quaternions differ: {a:?} vs {b:?}"
        );
    }
}
