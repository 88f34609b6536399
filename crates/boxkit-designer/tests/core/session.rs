use boxkit_core::{
    AbsCoords, AngleDeg, DegeneratePolicy, InteractionSettings, RelCoords, Result, Size,
};
use boxkit_designer::handle::{ElementRef, HandleElement, ResizeHandle};
use boxkit_designer::host::SurfaceProbe;
use boxkit_designer::layout::{compute_layout, LayoutResult};
use boxkit_designer::session::{
    resize, rotation_angle, transition, DragSession, DragSnapshot, PointerEvent, SessionState,
    SideEffect,
};
use boxkit_designer::{angle_from_origin, DragHandle};

/// Probe with fixed readings and no rendering.
struct FixedProbe {
    center: Option<AbsCoords>,
    rotation: AngleDeg,
    position: AbsCoords,
    layout: LayoutResult,
}

impl FixedProbe {
    /// 400x200 box wrapped at (100, 100): surface at (90, 50), center (300, 200).
    fn reference() -> Self {
        Self {
            center: Some(AbsCoords::new(300.0, 200.0)),
            rotation: AngleDeg::ZERO,
            position: AbsCoords::new(90.0, 50.0),
            layout: compute_layout(400.0, 200.0),
        }
    }

    fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = AngleDeg(degrees);
        self
    }
}

impl SurfaceProbe for FixedProbe {
    fn bounding_box(&self, element: &ElementRef) -> Option<(AbsCoords, Size)> {
        match element {
            ElementRef::Center => self
                .center
                .map(|c| (c.translated(-5.0, -5.0), Size::new(10.0, 10.0))),
            _ => None,
        }
    }

    fn current_rotation(&self) -> Result<AngleDeg> {
        Ok(self.rotation)
    }

    fn surface_position(&self) -> AbsCoords {
        self.position
    }

    fn current_layout(&self) -> LayoutResult {
        self.layout
    }
}

const GRAB: AbsCoords = AbsCoords { x: 350.0, y: 250.0 };

/// Presses `target` at [`GRAB`], moves by a screen delta and returns the
/// move's effects.
fn drag_by(
    probe: &FixedProbe,
    target: ElementRef,
    dx: f64,
    dy: f64,
    settings: &InteractionSettings,
) -> Vec<SideEffect> {
    let down = transition(
        &SessionState::Idle,
        &PointerEvent::down(target, GRAB),
        probe,
        settings,
    )
    .unwrap();
    assert!(down.state.is_dragging());
    assert!(down.effects.is_empty());

    let moved = transition(
        &down.state,
        &PointerEvent::moved(GRAB.translated(dx, dy)),
        probe,
        settings,
    )
    .unwrap();
    assert!(moved.state.is_dragging());
    moved.effects
}

fn resize_by(handle: ResizeHandle, dx: f64, dy: f64) -> Vec<SideEffect> {
    drag_by(
        &FixedProbe::reference(),
        handle.into(),
        dx,
        dy,
        &InteractionSettings::default(),
    )
}

fn layout_of(size: (f64, f64)) -> SideEffect {
    SideEffect::Layout(compute_layout(size.0, size.1))
}

fn position(x: f64, y: f64) -> SideEffect {
    SideEffect::Position(AbsCoords::new(x, y))
}

#[test]
fn test_bottom_right_grows_both_axes() {
    // screen (+50, +30) is frame (+50, -30)
    assert_eq!(
        resize_by(ResizeHandle::BottomRight, 50.0, 30.0),
        vec![layout_of((450.0, 230.0))]
    );
}

#[test]
fn test_bottom_middle_only_touches_height() {
    assert_eq!(
        resize_by(ResizeHandle::BottomMiddle, 75.0, 40.0),
        vec![layout_of((400.0, 240.0))]
    );
}

#[test]
fn test_middle_right_only_touches_width() {
    assert_eq!(
        resize_by(ResizeHandle::MiddleRight, 25.0, 40.0),
        vec![layout_of((425.0, 200.0))]
    );
}

#[test]
fn test_top_left_moves_origin_first() {
    assert_eq!(
        resize_by(ResizeHandle::TopLeft, -20.0, -10.0),
        vec![position(70.0, 40.0), layout_of((420.0, 210.0))]
    );
}

#[test]
fn test_top_middle_shifts_vertically() {
    assert_eq!(
        resize_by(ResizeHandle::TopMiddle, 5.0, -15.0),
        vec![position(90.0, 35.0), layout_of((400.0, 215.0))]
    );
}

#[test]
fn test_top_right_shifts_vertically_only() {
    assert_eq!(
        resize_by(ResizeHandle::TopRight, 10.0, -10.0),
        vec![position(90.0, 40.0), layout_of((410.0, 210.0))]
    );
}

#[test]
fn test_middle_left_shifts_horizontally() {
    assert_eq!(
        resize_by(ResizeHandle::MiddleLeft, -30.0, 99.0),
        vec![position(60.0, 50.0), layout_of((430.0, 200.0))]
    );
}

#[test]
fn test_bottom_left_shifts_horizontally_only() {
    assert_eq!(
        resize_by(ResizeHandle::BottomLeft, -10.0, 20.0),
        vec![position(80.0, 50.0), layout_of((410.0, 220.0))]
    );
}

#[test]
fn test_zero_offset_reproduces_start_geometry() {
    for handle in ResizeHandle::ALL {
        let effects = resize_by(handle, 0.0, 0.0);
        let last = effects.last().unwrap();
        assert_eq!(
            *last,
            layout_of((400.0, 200.0)),
            "{} should not change the size",
            handle
        );
        if let Some(SideEffect::Position(p)) = effects.first().filter(|_| effects.len() == 2) {
            assert_eq!(*p, AbsCoords::new(90.0, 50.0));
        }
    }
}

#[test]
fn test_move_follows_screen_delta() {
    let settings = InteractionSettings::default();
    let probe = FixedProbe::reference();
    for target in [ElementRef::Box, ElementRef::Center, ElementRef::Surface] {
        assert_eq!(
            drag_by(&probe, target, 15.0, -5.0, &settings),
            vec![position(105.0, 45.0)]
        );
    }
}

#[test]
fn test_rotate_quarter_turn() {
    let probe = FixedProbe::reference();
    let settings = InteractionSettings::default();
    let start = AbsCoords::new(400.0, 200.0);

    let down = transition(
        &SessionState::Idle,
        &PointerEvent::down(ElementRef::Handle(HandleElement::Rotate), start),
        &probe,
        &settings,
    )
    .unwrap();
    let moved = transition(
        &down.state,
        &PointerEvent::moved(AbsCoords::new(300.0, 300.0)),
        &probe,
        &settings,
    )
    .unwrap();

    assert_eq!(
        moved.effects,
        vec![SideEffect::Rotation {
            angle: AngleDeg(90.0),
            pivot: AbsCoords::new(210.0, 150.0),
        }]
    );
}

#[test]
fn test_rotation_restarts_from_zero_by_default() {
    let probe = FixedProbe::reference().rotated(30.0);
    let settings = InteractionSettings::default();
    let down = transition(
        &SessionState::Idle,
        &PointerEvent::down(
            ElementRef::Handle(HandleElement::Rotate),
            AbsCoords::new(400.0, 200.0),
        ),
        &probe,
        &settings,
    )
    .unwrap();
    let up = transition(
        &down.state,
        &PointerEvent::up(AbsCoords::new(300.0, 300.0)),
        &probe,
        &settings,
    )
    .unwrap();

    assert!(matches!(
        up.effects[0],
        SideEffect::Rotation { angle, .. } if angle == AngleDeg(90.0)
    ));
}

#[test]
fn test_accumulated_rotation_adds_start_angle() {
    let probe = FixedProbe::reference().rotated(30.0);
    let settings = InteractionSettings {
        accumulate_rotation: true,
        ..Default::default()
    };
    let down = transition(
        &SessionState::Idle,
        &PointerEvent::down(
            ElementRef::Handle(HandleElement::Rotate),
            AbsCoords::new(400.0, 200.0),
        ),
        &probe,
        &settings,
    )
    .unwrap();
    let moved = transition(
        &down.state,
        &PointerEvent::moved(AbsCoords::new(300.0, 300.0)),
        &probe,
        &settings,
    )
    .unwrap();

    assert!(matches!(
        moved.effects[0],
        SideEffect::Rotation { angle, .. } if angle == AngleDeg(120.0)
    ));
}

#[test]
fn test_rotation_angle_is_rounded_to_two_decimals() {
    let start = angle_from_origin(RelCoords::new(100.0, 0.0));
    let angle = rotation_angle(start, RelCoords::new(100.0, 1.0));
    // atan(0.01) = 0.572938...°
    assert_eq!(angle, AngleDeg(0.57));
}

#[test]
fn test_resize_is_measured_in_the_rotated_frame() {
    // turned a quarter clockwise, a pure screen-right drag is frame-up
    let probe = FixedProbe::reference().rotated(90.0);
    let effects = drag_by(
        &probe,
        ResizeHandle::BottomRight.into(),
        40.0,
        0.0,
        &InteractionSettings::default(),
    );
    assert_eq!(effects, vec![layout_of((400.0, 160.0))]);
}

#[test]
fn test_up_applies_final_geometry_and_ends() {
    let probe = FixedProbe::reference();
    let settings = InteractionSettings::default();
    let down = transition(
        &SessionState::Idle,
        &PointerEvent::down(ResizeHandle::MiddleRight.into(), GRAB),
        &probe,
        &settings,
    )
    .unwrap();
    let up = transition(
        &down.state,
        &PointerEvent::up(GRAB.translated(10.0, 0.0)),
        &probe,
        &settings,
    )
    .unwrap();

    assert_eq!(up.state, SessionState::Idle);
    assert_eq!(up.effects, vec![layout_of((410.0, 200.0))]);
}

#[test]
fn test_idle_ignores_move_up_and_leave() {
    let probe = FixedProbe::reference();
    let settings = InteractionSettings::default();
    for event in [
        PointerEvent::moved(GRAB),
        PointerEvent::up(GRAB),
        PointerEvent::leave(GRAB),
    ] {
        let next = transition(&SessionState::Idle, &event, &probe, &settings).unwrap();
        assert_eq!(next.state, SessionState::Idle);
        assert!(next.effects.is_empty());
    }
}

#[test]
fn test_down_on_unrelated_target_stays_idle() {
    let probe = FixedProbe::reference();
    let settings = InteractionSettings::default();
    for target in [ElementRef::Foreign("toolbar".into()), ElementRef::RotateLink] {
        let next = transition(
            &SessionState::Idle,
            &PointerEvent::down(target, GRAB),
            &probe,
            &settings,
        )
        .unwrap();
        assert_eq!(next.state, SessionState::Idle);
    }

    let mut untargeted = PointerEvent::down(ElementRef::Box, GRAB);
    untargeted.target = None;
    let next = transition(&SessionState::Idle, &untargeted, &probe, &settings).unwrap();
    assert_eq!(next.state, SessionState::Idle);
}

#[test]
fn test_move_without_button_is_ignored() {
    let probe = FixedProbe::reference();
    let settings = InteractionSettings::default();
    let down = transition(
        &SessionState::Idle,
        &PointerEvent::down(ResizeHandle::BottomRight.into(), GRAB),
        &probe,
        &settings,
    )
    .unwrap();

    let hover = PointerEvent::moved(GRAB.translated(30.0, 30.0)).with_pressed(false);
    let next = transition(&down.state, &hover, &probe, &settings).unwrap();
    assert!(next.effects.is_empty());
    assert_eq!(next.state, down.state);

    let relaxed = InteractionSettings {
        require_pressed_button: false,
        ..Default::default()
    };
    let next = transition(&down.state, &hover, &probe, &relaxed).unwrap();
    assert_eq!(next.effects, vec![layout_of((430.0, 230.0))]);
}

#[test]
fn test_leave_releases_unless_disabled() {
    let probe = FixedProbe::reference();
    let settings = InteractionSettings::default();
    let down = transition(
        &SessionState::Idle,
        &PointerEvent::down(ElementRef::Box, GRAB),
        &probe,
        &settings,
    )
    .unwrap();

    let left = transition(&down.state, &PointerEvent::leave(GRAB), &probe, &settings).unwrap();
    assert_eq!(left.state, SessionState::Idle);
    assert_eq!(left.effects, vec![position(90.0, 50.0)]);

    let sticky = InteractionSettings {
        release_on_leave: false,
        ..Default::default()
    };
    let kept = transition(&down.state, &PointerEvent::leave(GRAB), &probe, &sticky).unwrap();
    assert_eq!(kept.state, down.state);
    assert!(kept.effects.is_empty());
}

#[test]
fn test_missing_center_is_invalid_state() {
    let probe = FixedProbe {
        center: None,
        ..FixedProbe::reference()
    };
    let err = DragSnapshot::capture(DragHandle::Move, GRAB, &probe).unwrap_err();
    assert!(err.is_session_error());
    assert!(!err.is_invalid_handle());
}

#[test]
fn test_snapshot_captures_start_readings() {
    let probe = FixedProbe::reference().rotated(15.0);
    let snapshot =
        DragSnapshot::capture(DragHandle::Resize(ResizeHandle::TopLeft), GRAB, &probe).unwrap();

    assert_eq!(snapshot.center, AbsCoords::new(300.0, 200.0));
    assert_eq!(snapshot.start_rotation, AngleDeg(15.0));
    assert_eq!(snapshot.start_position, AbsCoords::new(90.0, 50.0));
    assert_eq!(snapshot.size, Some(Size::new(400.0, 200.0)));
    assert!(snapshot.rotation.is_none());
    assert_eq!(snapshot.offset_to(GRAB), RelCoords::new(0.0, 0.0));
}

#[test]
fn test_clamp_keeps_opposite_edge_fixed() {
    let policy = DegeneratePolicy::Clamp {
        min_width: 10.0,
        min_height: 10.0,
    };
    let start = Size::new(400.0, 200.0);
    let outcome = resize(
        ResizeHandle::TopLeft,
        start,
        RelCoords::new(500.0, -300.0),
        &policy,
    );

    assert_eq!(outcome.size, Size::new(10.0, 10.0));
    assert_eq!(outcome.shift, AbsCoords::new(390.0, 190.0));
    assert!(outcome.moves_origin);
}

#[test]
fn test_allow_policy_passes_inverted_sizes_through() {
    let outcome = resize(
        ResizeHandle::BottomRight,
        Size::new(400.0, 200.0),
        RelCoords::new(-450.0, 0.0),
        &DegeneratePolicy::Allow,
    );
    assert_eq!(outcome.size, Size::new(-50.0, 200.0));
    assert!(!outcome.moves_origin);
}

#[test]
fn test_clamp_leaves_unaffected_axis_alone() {
    let policy = DegeneratePolicy::Clamp {
        min_width: 500.0,
        min_height: 500.0,
    };
    let outcome = resize(
        ResizeHandle::MiddleRight,
        Size::new(400.0, 200.0),
        RelCoords::new(10.0, 0.0),
        &policy,
    );
    assert_eq!(outcome.size, Size::new(500.0, 200.0));
}

#[test]
fn test_session_tracks_active_handle() {
    let probe = FixedProbe::reference();
    let mut session = DragSession::default();
    assert!(!session.is_dragging());

    session
        .handle(&PointerEvent::down(ResizeHandle::TopRight.into(), GRAB), &probe)
        .unwrap();
    assert_eq!(
        session.active_handle(),
        Some(DragHandle::Resize(ResizeHandle::TopRight))
    );

    session.handle(&PointerEvent::up(GRAB), &probe).unwrap();
    assert!(!session.is_dragging());
    assert_eq!(session.active_handle(), None);
}

#[test]
fn test_second_down_replaces_session() {
    let probe = FixedProbe::reference();
    let mut session = DragSession::default();

    session
        .handle(&PointerEvent::down(ResizeHandle::TopRight.into(), GRAB), &probe)
        .unwrap();
    session
        .handle(&PointerEvent::down(ElementRef::Box, GRAB), &probe)
        .unwrap();
    assert_eq!(session.active_handle(), Some(DragHandle::Move));

    session
        .handle(&PointerEvent::down(ElementRef::Foreign("x".into()), GRAB), &probe)
        .unwrap();
    assert!(!session.is_dragging());
}

#[test]
fn test_failed_capture_leaves_session_idle() {
    let probe = FixedProbe::reference();
    let broken = FixedProbe {
        center: None,
        ..FixedProbe::reference()
    };
    let mut session = DragSession::default();
    session
        .handle(&PointerEvent::down(ElementRef::Box, GRAB), &probe)
        .unwrap();

    assert!(session
        .handle(&PointerEvent::down(ElementRef::Box, GRAB), &broken)
        .is_err());
    assert!(!session.is_dragging());
}
