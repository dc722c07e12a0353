//! The event loop: bootstrap on resume, then poll, render and swap until a
//! close signal arrives.

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowId,
};

use crate::{config::WindowConfig, context::GlWindow, error::Error, renderer::Renderer};

/// Close flag and frame bookkeeping for the render loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLoop {
    max_frames: Option<u64>,
    frames: u64,
    close_requested: bool,
}

impl FrameLoop {
    /// A loop that ends on close, or after `max_frames` presented frames.
    #[must_use]
    pub fn new(max_frames: Option<u64>) -> Self {
        Self {
            max_frames,
            ..Self::default()
        }
    }

    /// Record a close signal from the user.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Whether a close signal has been seen.
    #[must_use]
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Count one presented frame.
    pub fn frame_presented(&mut self) {
        self.frames = self.frames.saturating_add(1);
    }

    /// Frames presented so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether the loop should stop before presenting another frame.
    #[must_use]
    pub fn should_exit(&self) -> bool {
        self.close_requested || self.max_frames.is_some_and(|max| self.frames >= max)
    }
}

/// Whether `event` asks the window to close. Escape is treated as the
/// same signal as the window manager's close button.
fn is_close_signal(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event: KeyEvent {
                    logical_key: Key::Named(NamedKey::Escape),
                    state: ElementState::Pressed,
                    ..
                },
                ..
            }
    )
}

/// Live resources between bootstrap and teardown.
///
/// `renderer` is declared first so its GL objects are deleted while the
/// context in `window` is still current.
struct Running {
    renderer: Renderer,
    window: GlWindow,
}

/// winit application driving the three phases.
struct App {
    config: WindowConfig,
    frame_loop: FrameLoop,
    running: Option<Running>,
    error: Option<Error>,
}

impl App {
    fn new(config: WindowConfig) -> Self {
        let frame_loop = FrameLoop::new(config.max_frames);
        Self {
            config,
            frame_loop,
            running: None,
            error: None,
        }
    }

    fn bootstrap(&self, event_loop: &ActiveEventLoop) -> Result<Running, Error> {
        let window = GlWindow::new(event_loop, &self.config)?;
        let renderer = unsafe { Renderer::new(window.gl().clone(), self.config.clear_color)? };
        let size = window.window().inner_size();
        log::info!(
            "window {}x{} ready (scale {}), shader program linked",
            size.width,
            size.height,
            window.window().scale_factor()
        );
        Ok(Running { renderer, window })
    }

    /// Keep the first error for [`run`] to return, and stop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        log::debug!("stopping event loop: {err}");
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(running) = &self.running else {
            return;
        };

        unsafe { running.renderer.render() };

        if self.frame_loop.should_exit() {
            event_loop.exit();
            return;
        }

        if let Err(err) = running.window.swap_buffers() {
            self.fail(event_loop, err);
            return;
        }
        self.frame_loop.frame_presented();

        if self.frame_loop.should_exit() {
            log::info!("presented {} frames, stopping", self.frame_loop.frames());
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() || self.error.is_some() {
            return;
        }

        match self.bootstrap(event_loop) {
            Ok(running) => {
                running.window.request_redraw();
                self.running = Some(running);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if is_close_signal(&event) {
            log::debug!("close requested");
            self.frame_loop.request_close();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(running) = &self.running {
                    running.window.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(running) = &self.running {
            running.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.running.take().is_some() {
            log::debug!("window and GL context released");
        }
    }
}

/// Open the window and run until it is closed.
///
/// # Errors
///
/// Returns the first [`Error`] hit during bootstrap, shader setup, or the
/// render loop. The caller is expected to log it and exit.
pub fn run(config: WindowConfig) -> Result<(), Error> {
    config.validate()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    // `exiting` is skipped on some early-exit paths.
    app.running = None;

    match app.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
