//! Defines the seam between the editor and whatever actually puts pixels on the screen.
//!
//! Opening a window and talking to the GPU is not this crate's business. A backend only receives a
//! finished [`FrameRenderPlan`] per frame.
use crate::frame::FrameRenderPlan;

/// Draw frames on different "drawing contexts".
pub trait RenderBackend {
    /// Draw a frame, replacing whatever the previous frame drew.
    ///
    /// The plan is only borrowed for the duration of the call.
    fn draw_frame(&mut self, plan: &FrameRenderPlan);
}

pub mod svg;
