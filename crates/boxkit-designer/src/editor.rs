//! The box editor: one drag session bound to one host surface.
//!
//! Several editors on a page are several independent `BoxEditor` values;
//! nothing is shared between them.

use boxkit_core::{thread_safe, AbsCoords, InteractionSettings, Result, Size, ThreadSafe};
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::handle::{DragHandle, ElementRef};
use crate::host::HostAdapter;
use crate::layout::{compute_layout, LayoutResult};
use crate::session::{DragSession, PointerEvent, PointerKind, SideEffect};

/// An editor bound to a host surface.
#[derive(Debug)]
pub struct BoxEditor<H: HostAdapter> {
    id: Uuid,
    host: H,
    session: DragSession,
}

impl<H: HostAdapter> BoxEditor<H> {
    /// Creates an editor over `host` with the given interaction settings.
    pub fn new(host: H, settings: InteractionSettings) -> Self {
        Self {
            id: Uuid::new_v4(),
            host,
            session: DragSession::new(settings),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    pub fn active_handle(&self) -> Option<DragHandle> {
        self.session.active_handle()
    }

    pub fn set_settings(&mut self, settings: InteractionSettings) {
        self.session.set_settings(settings);
    }

    /// Places the overlay over a target region of the page.
    ///
    /// The box takes the region's size and the surface is offset so the box
    /// lands exactly on `top_left`.
    pub fn wrap_region(&mut self, top_left: AbsCoords, size: Size) -> LayoutResult {
        let _span = info_span!("editor", id = %self.id).entered();
        let layout = compute_layout(size.width, size.height);
        let position = top_left.translated(layout.left_offset, layout.top_offset);

        self.host.apply_layout(&layout);
        self.host.apply_position(position);
        info!(region = %top_left, size = %size, surface = %position, "wrapped region");
        layout
    }

    /// Feeds one pointer event and applies the resulting effects to the host.
    pub fn handle_event(&mut self, event: &PointerEvent) -> Result<()> {
        let _span = info_span!("editor", id = %self.id).entered();
        let effects = self.session.handle(event, &self.host)?;
        for effect in &effects {
            self.apply(effect);
        }
        Ok(())
    }

    /// Feeds an event whose target arrives as a raw host id.
    ///
    /// On pointer-down, an id that names no known handle refuses the drag and
    /// leaves the session idle. Other kinds ignore the target.
    pub fn handle_raw_event(
        &mut self,
        kind: PointerKind,
        target_id: Option<&str>,
        position: AbsCoords,
        pressed: bool,
    ) -> Result<()> {
        // only a pointer-down consults the target
        let target = match kind {
            PointerKind::Down => match target_id.map(ElementRef::parse).transpose() {
                Ok(target) => target,
                Err(err) => {
                    let _span = info_span!("editor", id = %self.id).entered();
                    warn!(%err, "refusing drag on unknown handle");
                    None
                }
            },
            _ => target_id.and_then(|id| ElementRef::parse(id).ok()),
        };
        self.handle_event(&PointerEvent {
            kind,
            target,
            position,
            pressed,
        })
    }

    fn apply(&mut self, effect: &SideEffect) {
        match effect {
            SideEffect::Layout(layout) => self.host.apply_layout(layout),
            SideEffect::Position(top_left) => self.host.apply_position(*top_left),
            SideEffect::Rotation { angle, pivot } => self.host.apply_rotation(*angle, *pivot),
        }
    }

    /// Wraps the editor for hosts that deliver events from several threads.
    pub fn into_shared(self) -> ThreadSafe<Self> {
        thread_safe(self)
    }
}
