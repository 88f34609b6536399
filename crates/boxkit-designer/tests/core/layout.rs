use boxkit_core::{AbsCoords, Size};
use boxkit_designer::layout::{compute_layout, layout_for, LayoutResult};
use boxkit_designer::ResizeHandle;

#[test]
fn test_layout_for_reference_box() {
    let layout = compute_layout(400.0, 200.0);

    assert_eq!(layout.handle_size, 20.0);
    assert_eq!(layout.box_top, 50.0);
    assert_eq!(layout.box_left, 10.0);
    assert_eq!(layout.box_width, 400.0);
    assert_eq!(layout.box_height, 200.0);
    assert_eq!(layout.rotate, AbsCoords::new(210.0, 11.0));
    assert_eq!(layout.center, AbsCoords::new(210.0, 150.0));
    assert_eq!(layout.width, 420.0);
    assert_eq!(layout.height, 260.0);
    assert_eq!(layout.top_offset, -50.0);
    assert_eq!(layout.left_offset, -10.0);
}

#[test]
fn test_resize_anchors_for_reference_box() {
    let layout = compute_layout(400.0, 200.0);

    assert_eq!(layout.top_left, AbsCoords::new(1.0, 39.0));
    assert_eq!(layout.top_middle, AbsCoords::new(200.0, 39.0));
    assert_eq!(layout.top_right, AbsCoords::new(399.0, 39.0));
    assert_eq!(layout.middle_left, AbsCoords::new(1.0, 140.0));
    assert_eq!(layout.middle_right, AbsCoords::new(399.0, 140.0));
    assert_eq!(layout.bottom_left, AbsCoords::new(1.0, 239.0));
    assert_eq!(layout.bottom_middle, AbsCoords::new(200.0, 239.0));
    assert_eq!(layout.bottom_right, AbsCoords::new(399.0, 239.0));
}

#[test]
fn test_rotation_handle_ignores_box_height() {
    let short = compute_layout(100.0, 10.0);
    let tall = compute_layout(100.0, 900.0);

    assert_eq!(short.rotate, tall.rotate);
    assert_eq!(short.rotate_link.x, short.rotate.x);
    assert_eq!(short.rotate_link.y1, short.rotate.y);
    assert_eq!(short.rotate_link.y2, short.box_top);
}

#[test]
fn test_anchor_lookup_matches_fields() {
    let layout = compute_layout(64.0, 48.0);
    let anchors: Vec<_> = layout.anchors().collect();

    assert_eq!(anchors.len(), 8);
    assert_eq!(anchors[0], (ResizeHandle::TopLeft, layout.top_left));
    assert_eq!(anchors[7], (ResizeHandle::BottomRight, layout.bottom_right));
    assert_eq!(layout.anchor(ResizeHandle::MiddleRight), layout.middle_right);
}

#[test]
fn test_degenerate_sizes_do_not_fail() {
    let zero = compute_layout(0.0, 0.0);
    assert_eq!(zero.top_right, AbsCoords::new(-1.0, 39.0));
    assert_eq!(zero.width, 20.0);
    assert_eq!(zero.height, 60.0);

    let inverted = compute_layout(-30.0, -10.0);
    assert_eq!(inverted.box_size(), Size::new(-30.0, -10.0));
    assert!(inverted.center.x.is_finite());
}

#[test]
fn test_view_box_and_sizes() {
    let layout = layout_for(Size::new(400.0, 200.0));
    assert_eq!(layout.view_box(), "0 0 420 260");
    assert_eq!(layout.canvas_size(), Size::new(420.0, 260.0));
    assert_eq!(layout.box_size(), Size::new(400.0, 200.0));
}

#[test]
fn test_layout_json_round_trip() {
    let layout = compute_layout(320.0, 180.0);
    let json = layout.to_json().unwrap();
    assert!(json.contains("\"box_top\":50.0"));

    let parsed: LayoutResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, layout);
}
