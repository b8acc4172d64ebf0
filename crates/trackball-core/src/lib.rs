// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! trackball-core: turns single-pointer drags over a viewport into a unit
//! quaternion orientation, with optional inertial spin after release.
//!
//! Hosts inject four ports ([`InputSource`], [`LayoutPort`],
//! [`FrameScheduler`], [`TrackballObserver`]) and drive frames by calling
//! [`Trackball::on_frame`] with the tokens the scheduler hands out.
//!
//! ```
//! use trackball_core::math::Quat;
//! use trackball_core::{
//!     ElementId, FrameLoop, LayoutPort, Phase, Rect, Trackball, TrackballConfig,
//!     TrackballObserver, TrackballPorts, VecInput,
//! };
//!
//! struct Fixed;
//! impl LayoutPort for Fixed {
//!     fn scene_rect(&self) -> Rect { Rect::new(0.0, 0.0, 101.0, 101.0) }
//!     fn query_selector(&self, _: &str) -> Option<Rect> { None }
//!     fn element_rect(&self, _: ElementId) -> Option<Rect> { None }
//! }
//!
//! #[derive(Default)]
//! struct Draws(usize);
//! impl TrackballObserver for Draws {
//!     fn on_draw(&mut self, _: Quat) { self.0 += 1; }
//! }
//!
//! let ports = TrackballPorts {
//!     input: VecInput::new(),
//!     layout: Fixed,
//!     scheduler: FrameLoop::new(),
//!     observer: Draws::default(),
//! };
//! let mut tb = Trackball::new(TrackballConfig::default(), Quat::identity(), ports)?;
//! tb.pointer_down(50.0, 50.0)?;
//! tb.pointer_move(100.0, 50.0)?;
//! if let Some(token) = tb.scheduler_mut().take_due() {
//!     tb.on_frame(token)?;
//! }
//! tb.pointer_up(100.0, 50.0)?;
//! assert_eq!(tb.phase(), Phase::Idle);
//! assert!((tb.orientation().angle() - core::f32::consts::FRAC_PI_2).abs() < 1e-4);
//! # Ok::<(), trackball_core::TrackballError>(())
//! ```
#![forbid(unsafe_code)]

pub mod math;

mod area;
mod config;
mod drag;
mod error;
mod geometry;
mod inertia;
mod ports;
mod projector;
mod trackball;

pub use area::{resolve_area, ActiveArea, ElementId};
pub use config::{AreaPolicy, InertiaConfig, LimitAxis, TrackballConfig};
pub use drag::{DragSession, Interaction, Phase};
pub use error::{ConfigValidationError, ProjectionError, TrackballError};
pub use geometry::Rect;
pub use inertia::{release_step, InertiaState, SpinStep};
pub use ports::{
    FrameLoop, FrameScheduler, FrameToken, InputSource, LayoutPort, PointerEvent,
    TrackballObserver, VecInput,
};
pub use projector::Projector;
pub use trackball::{Trackball, TrackballPorts};
