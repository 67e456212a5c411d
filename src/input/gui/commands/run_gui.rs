use tracing::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::config::ViewerConfig;
use crate::controllers::view::ViewController;
use crate::core::data::screen::ScreenSize;
use crate::core::hue::HuePalettes;
use crate::core::shader::ShaderSources;
use crate::error::Result;
use crate::input::gui::app::{self, gui_app::GuiApp, hud::HudState};
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct RunGuiCommand {
    config: ViewerConfig,
}

impl RunGuiCommand {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(self) -> Result<()> {
        let config = self.config;

        info!("Creating window ...");
        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(config.window.title.as_str())
                .with_inner_size(LogicalSize::new(config.window.width, config.window.height))
                .with_min_inner_size(LogicalSize::new(
                    config.window.min_width,
                    config.window.min_height,
                ))
                .build(&event_loop)?,
        ));

        info!("Loading shaders ...");
        let sources = ShaderSources::load(
            &config.assets.vertex_shader,
            &config.assets.fragment_shader,
        )?;

        info!("Loading textures ...");
        let palettes = HuePalettes::load_all(&config.assets.texture_dir)?;

        let presenter = PixelsPresenter::new(window, config.window.vsync, &sources, &palettes)?;

        let logical = window.inner_size().to_logical::<f64>(window.scale_factor());
        let controller = ViewController::new(
            config.view,
            ScreenSize::new(logical.width, logical.height),
        );
        let hud = HudState::new(config.hud.visible, sources.fragment);

        let gui_app = GuiApp::new(window, &event_loop, presenter, controller, hud);

        info!("Entering event loop");
        app::run(window, event_loop, gui_app)
    }
}
