//! Frame scheduling contract.

/// Host-provided "request next frame" primitive (requestAnimationFrame and
/// friends): arms the host to invoke the frame callback once more, roughly
/// at display refresh rate.
///
/// The driver re-arms this at the end of every frame except the
/// cycle-boundary frame, where the chain deliberately stops and the host
/// must restart it (see [`crate::Driver::advance_frame`]).
pub trait FrameScheduler {
    fn request_frame(&mut self);
}
