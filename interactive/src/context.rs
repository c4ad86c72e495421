use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use std::ffi::CString;
use std::num::NonZeroU32;

use winit::dpi::{PhysicalSize, Size};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::app::AppError;

#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

///
/// The window plus its current OpenGL 4.1 context.
///
/// Created once per process and handed to whatever needs the device. GL
/// function pointers are loaded during construction.
///
pub struct GraphicsContext {
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
}

impl GraphicsContext {
    pub fn new(event_loop: &EventLoop<()>, settings: &WindowSettings) -> Result<Self, AppError> {
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(
                settings.width,
                settings.height,
            )))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
            .with_title(&settings.title);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(event_loop, template, |mut configs| {
                configs.next().expect("config iterator is never empty")
            })
            .map_err(|e| AppError::Display(e.to_string()))?;

        let window = window.ok_or(AppError::NoWindow)?;

        let handle = window.raw_window_handle();
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 1))))
            .with_profile(GlProfile::Core)
            .build(Some(handle));

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&gl_window.surface)?;

        gl::load_with(|s| match CString::new(s) {
            Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });

        if settings.vsync {
            let interval = SwapInterval::Wait(NonZeroU32::MIN);

            if let Err(e) = gl_window.surface.set_swap_interval(&gl_context, interval) {
                log::warn!("could not enable vsync: {e}");
            }
        }

        log::info!(
            "created {}x{} window \"{}\"",
            settings.width,
            settings.height,
            settings.title
        );

        Ok(Self {
            gl_context,
            gl_window,
        })
    }

    /// Swaps the front and back buffers.
    pub fn present(&self) -> Result<(), glutin::error::Error> {
        self.gl_window.surface.swap_buffers(&self.gl_context)
    }

    pub fn resize(&self, width: u32, height: u32) {
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.gl_window.surface.resize(&self.gl_context, w, h);
        }
    }

    pub fn request_redraw(&self) {
        self.gl_window.window.request_redraw();
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(AppError::EmptyWindow)?,
            NonZeroU32::new(height).ok_or(AppError::EmptyWindow)?,
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { window, surface })
    }
}
