use egui::Context as EguiContext;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Puts rendered frames and the egui overlay on screen.
pub trait GuiPresenterPort {
    /// Copies a finished frame into the framebuffer. Returns `false` when the
    /// frame does not match the current surface size and was dropped.
    fn present(&mut self, buffer: &PixelBuffer) -> bool;

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
