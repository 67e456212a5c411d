use egui::Context as EguiContext;

use crate::controllers::view::FrameRequest;
use crate::error::Result;

pub trait GuiPresenterPort {
    fn render(
        &mut self,
        frame: &FrameRequest,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<()>;
    /// Sizes are physical pixels; zero in either axis suspends rendering.
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;
}
