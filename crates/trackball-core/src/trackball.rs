// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The trackball facade: owns orientation, configuration and ports, and runs
//! the Idle → Dragging → Spinning state machine.
//!
//! # Composition order
//! Every rotation (drag delta, inertial spin, [`Trackball::rotate`]) is
//! applied as `delta · committed`: deltas are expressed in world (screen)
//! axes, so dragging right always turns the scene about the screen's vertical
//! axis regardless of its current orientation.
//!
//! # Frames
//! Pointer moves only record the latest position and request a frame; the
//! rotation is recomputed once per [`Trackball::on_frame`]. At most one frame
//! token is outstanding, and a token that was cancelled or superseded is
//! ignored when it arrives.
//!
//! # Disposal
//! After [`Trackball::dispose`] every mutating operation returns
//! [`TrackballError::Disposed`]; read accessors keep working.

use tracing::{debug, instrument, trace, warn};

use crate::area::{resolve_area, ActiveArea};
use crate::config::TrackballConfig;
use crate::drag::{DragSession, Interaction, Phase};
use crate::error::TrackballError;
use crate::geometry::Rect;
use crate::inertia::{release_step, InertiaState, SpinStep};
use crate::math::Quat;
use crate::ports::{
    FrameScheduler, FrameToken, InputSource, LayoutPort, PointerEvent, TrackballObserver,
};
use crate::projector::Projector;

/// Collaborators injected by the host.
#[derive(Debug)]
pub struct TrackballPorts<I, L, S, O> {
    /// Pointer events.
    pub input: I,
    /// Rectangle measurement.
    pub layout: L,
    /// Frame cadence and clock.
    pub scheduler: S,
    /// Redraw and gesture notifications.
    pub observer: O,
}

/// Pointer-driven orientation controller.
pub struct Trackball<I, L, S, O> {
    config: TrackballConfig,
    projector: Projector,
    active_area: Option<ActiveArea>,
    committed: Quat,
    live: Quat,
    interaction: Interaction,
    pending_frame: Option<FrameToken>,
    disposed: bool,
    ports: TrackballPorts<I, L, S, O>,
}

impl<I, L, S, O> Trackball<I, L, S, O>
where
    I: InputSource,
    L: LayoutPort,
    S: FrameScheduler,
    O: TrackballObserver,
{
    /// Validates `config`, adopts `initial` as both committed and live
    /// orientation, and fires the first draw.
    #[instrument(skip_all)]
    pub fn new(
        config: TrackballConfig,
        initial: Quat,
        ports: TrackballPorts<I, L, S, O>,
    ) -> Result<Self, TrackballError> {
        config.validate()?;
        let projector = Projector::new(config.ball_size, config.border, config.limit_axis);
        let initial = initial.normalize();
        let mut trackball = Self {
            config,
            projector,
            active_area: None,
            committed: initial,
            live: initial,
            interaction: Interaction::Idle,
            pending_frame: None,
            disposed: false,
            ports,
        };
        debug!(inertia = trackball.config.inertia.enabled, "trackball created");
        trackball.draw();
        Ok(trackball)
    }

    /// Orientation currently displayed.
    pub fn orientation(&self) -> Quat {
        self.live
    }

    /// Orientation as of the last completed gesture or programmatic change.
    pub fn committed(&self) -> Quat {
        self.committed
    }

    /// Current interaction phase.
    pub fn phase(&self) -> Phase {
        self.interaction.phase()
    }

    /// Active drag session, if dragging.
    pub fn drag_session(&self) -> Option<&DragSession> {
        match &self.interaction {
            Interaction::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Active spin, if spinning.
    pub fn inertia(&self) -> Option<&InertiaState> {
        match &self.interaction {
            Interaction::Spinning(spin) => Some(spin),
            _ => None,
        }
    }

    /// Configuration in effect.
    pub fn config(&self) -> &TrackballConfig {
        &self.config
    }

    /// Whether new gestures are accepted.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Area gestures are measured against (`None` = scene rect).
    pub fn active_area(&self) -> Option<&ActiveArea> {
        self.active_area.as_ref()
    }

    /// Whether [`Trackball::dispose`] has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Frame token the trackball is waiting for, if any.
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending_frame
    }

    /// Injected observer.
    pub fn observer(&self) -> &O {
        &self.ports.observer
    }

    /// Injected observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.ports.observer
    }

    /// Injected scheduler.
    pub fn scheduler(&self) -> &S {
        &self.ports.scheduler
    }

    /// Injected scheduler, mutably (hosts advance clocks and poll tokens here).
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.ports.scheduler
    }

    /// Injected layout, mutably (hosts update measured rects here).
    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.ports.layout
    }

    /// Injected input source, mutably.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.ports.input
    }

    /// Composes `by` onto the orientation (`by · committed`) while idle.
    ///
    /// Returns `Ok(false)` without drawing while a drag or spin is active, so
    /// programmatic rotation never races the user.
    pub fn rotate(&mut self, by: Quat) -> Result<bool, TrackballError> {
        self.ensure_live()?;
        if self.interaction.phase() != Phase::Idle {
            trace!(phase = ?self.interaction.phase(), "rotate ignored during gesture");
            return Ok(false);
        }
        self.committed = by.multiply(&self.committed).normalize();
        self.live = self.committed;
        self.draw();
        Ok(true)
    }

    /// Replaces the orientation, cancelling any drag or spin without a
    /// gesture-end notification.
    pub fn set_orientation(&mut self, orientation: Quat) -> Result<(), TrackballError> {
        self.ensure_live()?;
        self.force_idle();
        self.committed = orientation.normalize();
        self.live = self.committed;
        self.draw();
        Ok(())
    }

    /// Sets the area used from the next pointer-down on. A dynamic area also
    /// refreshes the rect of a drag already in flight.
    pub fn set_active_area(&mut self, area: Option<ActiveArea>) -> Result<(), TrackballError> {
        self.ensure_live()?;
        debug!(?area, "active area changed");
        self.active_area = area;
        Ok(())
    }

    /// Enables or disables new gestures. A drag already in progress
    /// completes normally.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), TrackballError> {
        self.ensure_live()?;
        debug!(enabled, "trackball enabled flag changed");
        self.config.enabled = enabled;
        Ok(())
    }

    /// Cancels any gesture, detaches the input source and freezes the instance.
    ///
    /// Idempotent.
    #[instrument(skip_all)]
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.force_idle();
        self.ports.input.detach();
        self.disposed = true;
        debug!("trackball disposed");
    }

    /// Drains the injected input source, returning how many events were handled.
    ///
    /// Stops at the first error; events after it stay buffered.
    pub fn pump_input(&mut self) -> Result<usize, TrackballError> {
        self.ensure_live()?;
        let mut handled = 0;
        while let Some(event) = self.ports.input.next_event() {
            self.handle_event(event)?;
            handled += 1;
        }
        Ok(handled)
    }

    /// Dispatches one pointer event.
    pub fn handle_event(&mut self, event: PointerEvent) -> Result<(), TrackballError> {
        match event {
            PointerEvent::Down { x, y } => self.pointer_down(x, y),
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Up { x, y } => self.pointer_up(x, y),
            PointerEvent::Cancel => self.pointer_cancel(),
        }
    }

    /// Starts a drag if enabled and the area policy accepts the position.
    ///
    /// A spin in progress is stopped (and reported as ended) first. A
    /// degenerate rect is returned as an error and leaves the state untouched.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Result<(), TrackballError> {
        self.ensure_live()?;
        if !self.config.enabled {
            trace!("pointer down ignored: disabled");
            return Ok(());
        }
        if self.interaction.phase() == Phase::Dragging {
            return Ok(());
        }
        let rect = resolve_area(self.active_area.as_ref(), &self.ports.layout);
        if !self.config.area_policy.accepts_start(rect.contains(x, y)) {
            trace!(x, y, "pointer down outside active area");
            return Ok(());
        }
        let session = DragSession::begin(&self.projector, x, y, rect, self.ports.scheduler.now_ms())
            .inspect_err(|err| warn!(%err, "cannot start drag"))?;

        if self.interaction.phase() == Phase::Spinning {
            debug!("spin interrupted by pointer down");
            self.cancel_frame();
            self.committed = self.live;
            self.interaction = Interaction::Idle;
            self.ports.observer.on_gesture_end(self.live);
        }

        self.committed = self.live;
        self.interaction = Interaction::Dragging(session);
        debug!(x, y, "drag started");
        self.ports.observer.on_gesture_start(self.live);
        self.draw();
        Ok(())
    }

    /// Records the pointer and schedules a recomputation if none is pending.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<(), TrackballError> {
        self.ensure_live()?;
        let Interaction::Dragging(session) = &mut self.interaction else {
            return Ok(());
        };
        session.record_pointer(x, y);
        self.request_frame();
        Ok(())
    }

    /// Ends the drag: applies the release position, commits, and either
    /// starts a spin or reports the gesture as ended.
    ///
    /// If the final projection fails the release still completes with the
    /// last good orientation and the error is returned afterwards.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> Result<(), TrackballError> {
        self.ensure_live()?;
        if self.interaction.phase() != Phase::Dragging {
            return Ok(());
        }
        let now = self.ports.scheduler.now_ms();
        self.cancel_frame();
        let Interaction::Dragging(mut session) =
            std::mem::replace(&mut self.interaction, Interaction::Idle)
        else {
            return Ok(());
        };

        let mut outcome = Ok(());
        if self.config.area_policy.tracks(session.rect().contains(x, y)) {
            match session.update(&self.projector, x, y, self.inversion()) {
                Ok(delta) => self.live = delta.multiply(&self.committed).normalize(),
                Err(err) => {
                    warn!(%err, "release position not applied");
                    outcome = Err(err.into());
                }
            }
        }
        self.committed = self.live;

        if self.config.inertia.enabled {
            if let Some(delta) = session.last_delta() {
                let elapsed = now - session.started_ms();
                let inertia = self.config.inertia;
                let step = release_step(&delta, elapsed, &inertia);
                if let Some(spin) =
                    InertiaState::start(&delta, step, self.committed, inertia.min_velocity)
                {
                    debug!(step, elapsed, "spin started");
                    self.interaction = Interaction::Spinning(spin);
                    self.request_frame();
                    self.draw();
                    return outcome;
                }
            }
        }

        debug!("drag ended");
        self.end_gesture();
        outcome
    }

    /// Aborts the drag: commits the live orientation, no inertia.
    pub fn pointer_cancel(&mut self) -> Result<(), TrackballError> {
        self.ensure_live()?;
        if self.interaction.phase() != Phase::Dragging {
            return Ok(());
        }
        self.cancel_frame();
        self.interaction = Interaction::Idle;
        self.committed = self.live;
        debug!("drag cancelled");
        self.end_gesture();
        Ok(())
    }

    /// Runs the work scheduled for `token`: a coalesced drag update or one
    /// spin step. Stale tokens are ignored.
    pub fn on_frame(&mut self, token: FrameToken) -> Result<(), TrackballError> {
        self.ensure_live()?;
        if self.pending_frame != Some(token) {
            trace!(?token, "stale frame ignored");
            return Ok(());
        }
        self.pending_frame = None;
        match self.interaction.phase() {
            Phase::Dragging => self.drag_frame(),
            Phase::Spinning => {
                self.spin_frame();
                Ok(())
            }
            Phase::Idle => Ok(()),
        }
    }

    fn drag_frame(&mut self) -> Result<(), TrackballError> {
        let refreshed = self
            .active_area
            .as_ref()
            .filter(|area| area.is_dynamic())
            .map(|area| resolve_area(Some(area), &self.ports.layout));
        let invert = self.inversion();
        let Interaction::Dragging(session) = &mut self.interaction else {
            return Ok(());
        };
        let (x, y) = session.last_pointer();
        if !self.config.area_policy.tracks(session.rect().contains(x, y)) {
            trace!(x, y, "frame skipped: pointer outside active area");
            return Ok(());
        }
        if let Some(rect) = refreshed {
            Self::check_refreshed(&rect)?;
            session.set_rect(rect);
        }
        let delta = session.update(&self.projector, x, y, invert)?;
        self.live = delta.multiply(&self.committed).normalize();
        trace!(angle = delta.angle(), "drag frame");
        self.draw();
        Ok(())
    }

    fn spin_frame(&mut self) {
        let inertia = self.config.inertia;
        let Interaction::Spinning(spin) = &mut self.interaction else {
            return;
        };
        match spin.advance(inertia.damping, inertia.min_velocity) {
            SpinStep::Spinning(q) => {
                trace!(step = spin.step(), "spin frame");
                self.live = q;
                self.draw();
                self.request_frame();
            }
            SpinStep::Settled(q) => {
                debug!(angle = spin.angle(), "spin settled");
                self.live = q;
                self.committed = q;
                self.interaction = Interaction::Idle;
                self.draw();
                self.ports.observer.on_gesture_end(q);
            }
        }
    }

    fn check_refreshed(rect: &Rect) -> Result<(), TrackballError> {
        Projector::check_rect(rect).map(|_| ()).map_err(|err| {
            warn!(%err, "refreshed rect rejected; frame skipped");
            err.into()
        })
    }

    fn inversion(&self) -> (bool, bool) {
        (self.config.invert_x, self.config.invert_y)
    }

    fn end_gesture(&mut self) {
        self.ports.observer.on_gesture_end(self.live);
        self.draw();
    }

    fn draw(&mut self) {
        self.ports.observer.on_draw(self.live);
    }

    fn request_frame(&mut self) {
        if self.pending_frame.is_none() {
            self.pending_frame = Some(self.ports.scheduler.request_frame());
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(token) = self.pending_frame.take() {
            self.ports.scheduler.cancel_frame(token);
        }
    }

    fn force_idle(&mut self) {
        self.cancel_frame();
        if self.interaction.phase() != Phase::Idle {
            debug!(phase = ?self.interaction.phase(), "gesture reset");
        }
        self.interaction = Interaction::Idle;
    }

    fn ensure_live(&self) -> Result<(), TrackballError> {
        if self.disposed {
            warn!("trackball used after dispose");
            return Err(TrackballError::Disposed);
        }
        Ok(())
    }
}
