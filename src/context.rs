//! Window and OpenGL context bootstrap.
//!
//! [`GlWindow`] owns everything the windowing side hands out: the winit
//! window, the glutin surface and current context, and the loaded `glow`
//! procedure table.

use std::{ffi::CStr, num::NonZeroU32, sync::Arc};

use glow::HasContext;
use glutin::{
    config::{Config, ConfigTemplateBuilder, GlConfig},
    context::{
        ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext,
        PossiblyCurrentContext, Version,
    },
    display::{GetGlDisplay, GlDisplay},
    surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use raw_window_handle::HasWindowHandle;
use winit::{dpi::LogicalSize, event_loop::ActiveEventLoop, window::Window};

use crate::{config::WindowConfig, error::Error};

/// A window with a current OpenGL context and loaded GL functions.
///
/// Drop order follows field order: the procedure table and context go
/// before the surface, and the surface before the window it renders into.
pub struct GlWindow {
    gl: Arc<glow::Context>,
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
    window: Window,
}

impl GlWindow {
    /// Create the window, make a GL context current on it, enable vsync if
    /// requested, and load the procedure table.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`] for whichever step failed. Nothing is retried.
    pub fn new(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, Error> {
        let attributes = Window::default_attributes()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(config.resizable);

        let template = ConfigTemplateBuilder::new().with_alpha_size(8);
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes))
            .build(event_loop, template, pick_config)
            .map_err(|err| Error::Display(err.to_string()))?;
        let window =
            window.ok_or_else(|| Error::Display("display builder returned no window".to_owned()))?;

        log::debug!(
            "picked GL config: {} samples, srgb {}",
            gl_config.num_samples(),
            gl_config.srgb_capable()
        );

        let gl_display = gl_config.display();
        let raw_window_handle = window.window_handle()?.as_raw();

        let (major, minor) = config.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));

        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

        let surface_attributes =
            window.build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new())?;
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes)? };

        let context = not_current.make_current(&surface)?;

        let interval = if config.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        surface.set_swap_interval(&context, interval)?;

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol: &CStr| {
                gl_display.get_proc_address(symbol)
            })
        };

        unsafe {
            log::info!(
                "OpenGL {} on {}",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER)
            );
        }

        Ok(Self {
            gl: Arc::new(gl),
            context,
            surface,
            window,
        })
    }

    /// The shared procedure table.
    #[must_use]
    pub fn gl(&self) -> &Arc<glow::Context> {
        &self.gl
    }

    /// The underlying winit window.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Ask winit for another `RedrawRequested` event.
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Resize the surface and viewport. Zero-sized requests (minimized
    /// windows) are ignored.
    pub fn resize(&self, width: u32, height: u32) {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return;
        };
        self.surface.resize(&self.context, w, h);

        let (Ok(vw), Ok(vh)) = (i32::try_from(width), i32::try_from(height)) else {
            log::warn!("viewport {width}x{height} exceeds i32::MAX, skipping");
            return;
        };
        unsafe { self.gl.viewport(0, 0, vw, vh) };
    }

    /// Present the back buffer. Blocks on display refresh when vsync is on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Context`] if the swap fails.
    pub fn swap_buffers(&self) -> Result<(), Error> {
        self.surface.swap_buffers(&self.context)?;
        Ok(())
    }
}

/// Prefer the framebuffer config with the most MSAA samples.
///
/// # Panics
///
/// Panics if the display offers no configs at all. glutin reports that case
/// as an error before calling the picker, and the picker has no way to fail.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    let Some(config) = most_samples(configs, GlConfig::num_samples) else {
        log::error!("the GL display offered no framebuffer configs");
        panic!("glutin offered no GL configs");
    };
    config
}

/// The item with the highest sample count. Ties keep the earliest item.
fn most_samples<T>(items: impl Iterator<Item = T>, samples: impl Fn(&T) -> u8) -> Option<T> {
    items.reduce(|best, item| {
        if samples(&item) > samples(&best) {
            item
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_highest_sample_count() {
        let configs = [("a", 0u8), ("b", 4), ("c", 2)];
        let best = most_samples(configs.into_iter(), |&(_, n)| n);
        assert_eq!(best, Some(("b", 4)));
    }

    #[test]
    fn ties_keep_first_config() {
        let configs = [("a", 4u8), ("b", 4), ("c", 0)];
        assert_eq!(most_samples(configs.into_iter(), |&(_, n)| n), Some(("a", 4)));
    }

    #[test]
    fn no_configs_yields_none() {
        assert_eq!(most_samples(std::iter::empty::<u8>(), |&n| n), None);
    }
}
