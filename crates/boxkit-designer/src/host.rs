//! Host adapter interface.
//!
//! The engine never touches a rendering surface directly. It reads through a
//! [`SurfaceProbe`] when a drag starts and writes through a [`HostAdapter`]
//! after every transition.

use boxkit_core::{AbsCoords, AngleDeg, Result, Size};

use crate::handle::ElementRef;
use crate::layout::LayoutResult;

/// Read side of the host.
pub trait SurfaceProbe {
    /// Current rendered top-left and size of an element, in page pixels.
    ///
    /// `None` when the host does not render the element.
    fn bounding_box(&self, element: &ElementRef) -> Option<(AbsCoords, Size)>;

    /// Rotation the surface is currently drawn with.
    fn current_rotation(&self) -> Result<AngleDeg>;

    /// Screen position last written to the surface (its unrotated top-left).
    fn surface_position(&self) -> AbsCoords;

    /// Layout last written to the surface.
    fn current_layout(&self) -> LayoutResult;

    /// Absolute center of the box, taken from the center marker.
    fn absolute_center(&self) -> Option<AbsCoords> {
        self.bounding_box(&ElementRef::Center)
            .map(|(top_left, size)| top_left.translated(size.width / 2.0, size.height / 2.0))
    }
}

/// Write side of the host.
pub trait HostAdapter: SurfaceProbe {
    /// Redraws every handle, the box, the guide line and the canvas viewport.
    fn apply_layout(&mut self, layout: &LayoutResult);

    /// Moves the surface on the page.
    fn apply_position(&mut self, top_left: AbsCoords);

    /// Rotates the surface around `pivot` (surface-local coordinates).
    fn apply_rotation(&mut self, angle: AngleDeg, pivot: AbsCoords);
}
