use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::ShellConfig;
use crate::core::{AppControl, Sample};
use crate::event::{EventHandler, ShellEvent};
use crate::input::platform::winit::translate_window_event;
use crate::shell::Shell;

/// Entry point for the windowed shell.
pub struct Runtime;

impl Runtime {
    /// Opens a window for `sample` and pumps events until it closes.
    ///
    /// The window is sized to the sample's client area. `Sample::on_init`
    /// runs before the window is shown; the shutdown log is written and
    /// `Sample::on_destroy` runs before this returns.
    pub fn run<S>(config: ShellConfig, sample: S) -> Result<()>
    where
        S: Sample + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(Shell::new(&config, sample));

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct RuntimeState<S: Sample> {
    shell: Shell<S>,
    window: Option<Window>,
    failure: Option<anyhow::Error>,
}

impl<S: Sample> RuntimeState<S> {
    fn new(shell: Shell<S>) -> Self {
        Self {
            shell,
            window: None,
            failure: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let sample = self.shell.sample();
        let attrs = Window::default_attributes()
            .with_title(sample.title())
            .with_inner_size(LogicalSize::new(sample.width() as f64, sample.height() as f64))
            .with_visible(false);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        self.shell.init()?;

        window.set_visible(true);
        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    /// Sends `Destroy` if the shell has not seen it yet, then stops the loop.
    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        if self.failure.is_none() && !self.shell.is_destroyed() {
            self.shell.handle(ShellEvent::Destroy);
        }
        self.window = None;
        event_loop.exit();
    }
}

impl<S: Sample> ApplicationHandler for RuntimeState<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.failure.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to start sample: {e:#}");
            self.failure = Some(e);
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        // Render continuously, like a peek-message loop.
        event_loop.set_control_flow(ControlFlow::Poll);
        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        let scale_factor = window.scale_factor();
        let Some(ev) = translate_window_event(scale_factor, self.shell.input_mut(), &event) else {
            return;
        };

        if self.shell.handle(ev) == AppControl::Exit {
            self.shut_down(event_loop);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.failure.is_none() && !self.shell.is_destroyed() {
            self.shell.handle(ShellEvent::Destroy);
        }
    }
}
