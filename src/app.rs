//! Windowing and GL bootstrap.
//!
//! Everything glutin wants before the first frame lives here, so the
//! shell in `main` only deals with events and per-frame updates. The
//! scene is painter-drawn through egui; the raw GL context exists to
//! clear the backbuffer and host the egui renderer.

use std::ffi::CString;
use std::num::NonZeroU32;
use std::sync::Arc;

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use egui_glow::EguiGlow;

use crate::constants::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};

/// The window, its GL plumbing, and the egui layer on top.
pub struct GlShell {
    pub window: Window,
    pub surface: Surface<WindowSurface>,
    pub context: PossiblyCurrentContext,
    pub gl: Arc<glow::Context>,
    pub egui_glow: EguiGlow,
}

impl GlShell {
    /// Open the window and bring up a current GL context with egui
    /// attached. Startup-only; failures here abort via `expect`.
    pub fn new(event_loop: &ActiveEventLoop) -> Self {
        let attrs = WindowAttributes::default()
            .with_title("Globe Portfolio")
            .with_inner_size(PhysicalSize::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));

        let template = ConfigTemplateBuilder::new().with_alpha_size(8);
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, pick_config)
            .expect("no usable GL display");
        let window = window.expect("window creation failed");

        let handle = window
            .window_handle()
            .expect("window has no native handle")
            .as_raw();
        let display = gl_config.display();

        // Ask for 3.3 core; if the driver refuses, take whatever it
        // offers. egui's renderer copes with either.
        let core = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(handle));
        let fallback = ContextAttributesBuilder::new().build(Some(handle));
        let context = unsafe {
            display
                .create_context(&gl_config, &core)
                .or_else(|_| display.create_context(&gl_config, &fallback))
                .expect("GL context creation failed")
        };

        let size = window.inner_size();
        let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            handle,
            NonZeroU32::new(size.width.max(1)).unwrap(),
            NonZeroU32::new(size.height.max(1)).unwrap(),
        );
        let surface = unsafe {
            display
                .create_window_surface(&gl_config, &surface_attrs)
                .expect("GL surface creation failed")
        };
        let context = context
            .make_current(&surface)
            .expect("could not make GL context current");

        // Everything on screen is eased motion; tie presentation to
        // vblank where the platform allows it.
        let vsync = SwapInterval::Wait(NonZeroU32::new(1).unwrap());
        if let Err(err) = surface.set_swap_interval(&context, vsync) {
            log::warn!("vsync unavailable: {}", err);
        }

        let gl = Arc::new(unsafe {
            glow::Context::from_loader_function(|name| {
                let name = CString::new(name).unwrap();
                display.get_proc_address(&name) as *const _
            })
        });

        let egui_glow = EguiGlow::new(event_loop, gl.clone(), None, None, false);
        egui_glow
            .egui_ctx
            .set_style(crate::ui::style::space_style());

        Self {
            window,
            surface,
            context,
            gl,
            egui_glow,
        }
    }

    /// Match the GL surface to a new window size. Zero-sized frames
    /// occur while minimized and are skipped.
    pub fn resize(&self, width: u32, height: u32) {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return;
        };
        self.surface.resize(&self.context, w, h);
    }

    /// Clear the backbuffer, paint the queued egui output, and present.
    pub fn present(&mut self) {
        unsafe {
            use glow::HasContext;
            self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
        self.egui_glow.paint(&self.window);
        if let Err(err) = self.surface.swap_buffers(&self.context) {
            log::error!("failed to present frame: {}", err);
        }
    }
}

/// The wireframe and starfield are thin painter lines; take the deepest
/// multisampling the display offers.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .max_by_key(|config| config.num_samples())
        .expect("display offered no GL configs")
}
