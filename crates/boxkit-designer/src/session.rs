//! Drag session state machine.
//!
//! ```text
//!          down on draggable            move (pressed)
//!   Idle ---------------------> Dragging <-------------+
//!    ^                              |  |               |
//!    |        up / leave            |  +---------------+
//!    +------------------------------+
//! ```
//!
//! Everything the rules need is captured once at pointer-down in a
//! [`DragSnapshot`]. Center and angle are never re-sampled mid-drag: the box
//! moves under the pointer while resizing, and re-reading them would feed the
//! output back into the input.

use boxkit_core::{
    AbsCoords, AngleDeg, AngleRad, DegeneratePolicy, InteractionSettings, RelCoords, Result,
    SessionError, Size,
};
use tracing::{debug, trace};

use crate::frame::{angle_from_origin, centered_offset, to_relative};
use crate::handle::{AxisSide, DragHandle, ElementRef, ResizeHandle};
use crate::host::SurfaceProbe;
use crate::layout::{layout_for, LayoutResult};

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// The pointer left the tracked surface.
    Leave,
}

/// A pointer event as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Element under the pointer. Only consulted on [`PointerKind::Down`].
    pub target: Option<ElementRef>,
    /// Page coordinates of the pointer.
    pub position: AbsCoords,
    /// Whether the primary button is held.
    pub pressed: bool,
}

impl PointerEvent {
    pub fn down(target: ElementRef, position: AbsCoords) -> Self {
        Self {
            kind: PointerKind::Down,
            target: Some(target),
            position,
            pressed: true,
        }
    }

    pub fn moved(position: AbsCoords) -> Self {
        Self {
            kind: PointerKind::Move,
            target: None,
            position,
            pressed: true,
        }
    }

    pub fn up(position: AbsCoords) -> Self {
        Self {
            kind: PointerKind::Up,
            target: None,
            position,
            pressed: false,
        }
    }

    pub fn leave(position: AbsCoords) -> Self {
        Self {
            kind: PointerKind::Leave,
            target: None,
            position,
            pressed: false,
        }
    }

    /// Overrides the reported button state.
    pub fn with_pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }
}

/// Rotation tracking data, captured for the rotate handle only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationAnchor {
    /// Surface-local point held fixed while rotating.
    pub pivot: AbsCoords,
    /// Polar angle of the pointer around the center at drag start.
    pub start_angle: AngleRad,
}

/// Everything captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSnapshot {
    pub handle: DragHandle,
    /// Absolute center of the box at drag start.
    pub center: AbsCoords,
    /// Rotation of the surface at drag start.
    pub start_rotation: AngleDeg,
    /// Surface top-left at drag start.
    pub start_position: AbsCoords,
    /// Pointer start, in the rotated relative frame.
    pub rel_start: RelCoords,
    /// Box size at drag start, resize handles only.
    pub size: Option<Size>,
    /// Rotate handle only.
    pub rotation: Option<RotationAnchor>,
}

impl DragSnapshot {
    /// Captures a snapshot for `handle` with the pointer at `pointer`.
    pub fn capture<P: SurfaceProbe + ?Sized>(
        handle: DragHandle,
        pointer: AbsCoords,
        probe: &P,
    ) -> Result<Self> {
        let center = probe
            .absolute_center()
            .ok_or_else(|| SessionError::InvalidState {
                reason: "center marker is not rendered".to_string(),
            })?;
        let start_rotation = probe.current_rotation()?;
        let layout = probe.current_layout();

        let rotation = (handle == DragHandle::Rotate).then(|| RotationAnchor {
            pivot: layout.center,
            start_angle: angle_from_origin(centered_offset(center, pointer)),
        });

        Ok(Self {
            handle,
            center,
            start_rotation,
            start_position: probe.surface_position(),
            rel_start: to_relative(center, start_rotation, pointer),
            size: handle.is_resize().then(|| layout.box_size()),
            rotation,
        })
    }

    /// Geometry updates for the pointer at `pointer`.
    pub fn effects_at(
        &self,
        pointer: AbsCoords,
        settings: &InteractionSettings,
    ) -> Result<Vec<SideEffect>> {
        match self.handle {
            DragHandle::Rotate => {
                let anchor = self.rotation.ok_or_else(|| SessionError::InvalidState {
                    reason: "rotate snapshot without a rotation anchor".to_string(),
                })?;
                let mut angle =
                    rotation_angle(anchor.start_angle, centered_offset(self.center, pointer));
                if settings.accumulate_rotation {
                    angle = AngleDeg(angle.value() + self.start_rotation.value()).rounded();
                }
                Ok(vec![SideEffect::Rotation {
                    angle,
                    pivot: anchor.pivot,
                }])
            }
            DragHandle::Move => {
                let offset = self.offset_to(pointer);
                Ok(vec![SideEffect::Position(
                    self.start_position.translated(offset.x, -offset.y),
                )])
            }
            DragHandle::Resize(handle) => {
                let size = self.size.ok_or_else(|| SessionError::InvalidState {
                    reason: format!("{handle} snapshot without a start size"),
                })?;
                let outcome = resize(handle, size, self.offset_to(pointer), &settings.degenerate);

                let mut effects = Vec::with_capacity(2);
                if outcome.moves_origin {
                    effects.push(SideEffect::Position(
                        self.start_position.translated(outcome.shift.x, outcome.shift.y),
                    ));
                }
                effects.push(SideEffect::Layout(layout_for(outcome.size)));
                Ok(effects)
            }
        }
    }

    /// Pointer travel since drag start, in the start frame.
    pub fn offset_to(&self, pointer: AbsCoords) -> RelCoords {
        to_relative(self.center, self.start_rotation, pointer) - self.rel_start
    }
}

/// Rotation reached when the pointer sits at `dest` around the center.
pub fn rotation_angle(start_angle: AngleRad, dest: RelCoords) -> AngleDeg {
    (angle_from_origin(dest) - start_angle).to_degrees().rounded()
}

/// Result of applying a resize rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOutcome {
    pub size: Size,
    /// Surface shift keeping the opposite edges in place.
    pub shift: AbsCoords,
    /// Whether the handle sits on a left or top side.
    pub moves_origin: bool,
}

/// Applies a handle's resize rule to a start size and a frame offset.
///
/// Right and bottom handles grow their axis outward; left and top handles
/// grow it outward too but move the origin by the same amount. Middle handles
/// leave their axis alone.
pub fn resize(
    handle: ResizeHandle,
    size: Size,
    offset: RelCoords,
    policy: &DegeneratePolicy,
) -> ResizeOutcome {
    // frame Y goes up: the top edge grows with +y, the bottom edge with -y
    let raw = Size::new(
        match handle.horizontal() {
            AxisSide::Leading => size.width - offset.x,
            AxisSide::Middle => size.width,
            AxisSide::Trailing => size.width + offset.x,
        },
        match handle.vertical() {
            AxisSide::Leading => size.height + offset.y,
            AxisSide::Middle => size.height,
            AxisSide::Trailing => size.height - offset.y,
        },
    );
    let clamped = policy.apply(raw);
    let width = match handle.horizontal() {
        AxisSide::Middle => size.width,
        _ => clamped.width,
    };
    let height = match handle.vertical() {
        AxisSide::Middle => size.height,
        _ => clamped.height,
    };

    let leading_x = handle.horizontal() == AxisSide::Leading;
    let leading_y = handle.vertical() == AxisSide::Leading;
    let shift = AbsCoords::new(
        if leading_x { size.width - width } else { 0.0 },
        if leading_y { size.height - height } else { 0.0 },
    );

    ResizeOutcome {
        size: Size::new(width, height),
        shift,
        moves_origin: leading_x || leading_y,
    }
}

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Dragging(DragSnapshot),
}

impl SessionState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn snapshot(&self) -> Option<&DragSnapshot> {
        match self {
            Self::Idle => None,
            Self::Dragging(snapshot) => Some(snapshot),
        }
    }
}

/// A geometry update for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    Layout(LayoutResult),
    Position(AbsCoords),
    Rotation { angle: AngleDeg, pivot: AbsCoords },
}

/// Outcome of one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: SessionState,
    pub effects: Vec<SideEffect>,
}

impl Transition {
    fn stay(state: SessionState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

/// Runs one event through the state machine.
///
/// Pure apart from reads on `probe`, which only happen on pointer-down. On
/// error no effects are produced; callers should fall back to
/// [`SessionState::Idle`].
pub fn transition<P: SurfaceProbe + ?Sized>(
    state: &SessionState,
    event: &PointerEvent,
    probe: &P,
    settings: &InteractionSettings,
) -> Result<Transition> {
    match (state, event.kind) {
        (_, PointerKind::Down) => {
            let Some(handle) = event.target.as_ref().and_then(ElementRef::drag_handle) else {
                return Ok(Transition::stay(SessionState::Idle));
            };
            let snapshot = DragSnapshot::capture(handle, event.position, probe)?;
            Ok(Transition::stay(SessionState::Dragging(snapshot)))
        }
        (SessionState::Idle, _) => Ok(Transition::stay(SessionState::Idle)),
        (SessionState::Dragging(snapshot), PointerKind::Move) => {
            if settings.require_pressed_button && !event.pressed {
                return Ok(Transition::stay(*state));
            }
            Ok(Transition {
                state: *state,
                effects: snapshot.effects_at(event.position, settings)?,
            })
        }
        (SessionState::Dragging(_), PointerKind::Leave) if !settings.release_on_leave => {
            Ok(Transition::stay(*state))
        }
        (SessionState::Dragging(snapshot), PointerKind::Up | PointerKind::Leave) => {
            Ok(Transition {
                state: SessionState::Idle,
                effects: snapshot.effects_at(event.position, settings)?,
            })
        }
    }
}

/// Owns the state of one drag session.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: SessionState,
    settings: InteractionSettings,
}

impl DragSession {
    pub fn new(settings: InteractionSettings) -> Self {
        Self {
            state: SessionState::Idle,
            settings,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn settings(&self) -> &InteractionSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: InteractionSettings) {
        self.settings = settings;
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Handle of the active session, if any.
    pub fn active_handle(&self) -> Option<DragHandle> {
        self.state.snapshot().map(|snapshot| snapshot.handle)
    }

    /// Feeds one event and returns the effects to apply.
    ///
    /// A failed transition drops the session.
    pub fn handle<P: SurfaceProbe + ?Sized>(
        &mut self,
        event: &PointerEvent,
        probe: &P,
    ) -> Result<Vec<SideEffect>> {
        let was_dragging = self.state.is_dragging();
        let next = match transition(&self.state, event, probe, &self.settings) {
            Ok(next) => next,
            Err(err) => {
                self.state = SessionState::Idle;
                return Err(err);
            }
        };

        match (was_dragging, &next.state, event.kind) {
            (_, SessionState::Dragging(snapshot), PointerKind::Down) => {
                debug!(handle = %snapshot.handle, center = %snapshot.center, "drag started");
            }
            (true, SessionState::Idle, PointerKind::Up | PointerKind::Leave) => {
                debug!(kind = ?event.kind, effects = next.effects.len(), "drag released");
            }
            (true, SessionState::Idle, PointerKind::Down) => {
                debug!("drag replaced by a non-draggable pointer-down");
            }
            _ if !next.effects.is_empty() => {
                trace!(position = %event.position, effects = next.effects.len(), "drag moved");
            }
            _ => {}
        }

        self.state = next.state;
        Ok(next.effects)
    }
}
