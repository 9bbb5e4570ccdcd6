#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod canvas;

pub use canvas::PixelsCanvas;

use ca_grid::{Animate, Animator, AutomatonConfig, Rgba};
use error_iter::ErrorIter as _;
use log::{debug, error, info};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const BACKGROUND_COLOR: Color = Color::WHITE;
const CANVAS_BACKGROUND: Rgba = Rgba::WHITE;
const WINDOW_SCALE: f64 = 2.0;
/// Frames run as soon as the window exists: the first paints the seed, the
/// second is the opening step.
const STARTUP_FRAMES: u32 = 2;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("event loop failed")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("could not create window")]
    Window(#[from] winit::error::OsError),
    #[error("could not build pixel buffer")]
    Pixels(#[from] pixels::Error),
    #[error("could not resize pixel surface")]
    Texture(#[from] pixels::TextureError),
}

/// Opens a window showing `world` and drives it from the keyboard:
/// space plays or pauses, enter / S / right arrow steps once, escape / Q quits.
pub fn animate<W>(config: AutomatonConfig, title: &str, world: W) -> Result<(), HostError>
where
    W: Animate,
{
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut handler = AppEventHandler::new(config, title, world);
    event_loop.run_app(&mut handler)?;
    match handler.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub fn log_error<E>(method_name: &str, err: &E)
where
    E: std::error::Error + 'static,
{
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

struct App<W: Animate> {
    world: W,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    animator: Animator,
    canvas_width: u32,
    canvas_height: u32,
}

impl<W: Animate> App<W> {
    fn new(
        event_loop: &ActiveEventLoop,
        config: &AutomatonConfig,
        title: &str,
        world: W,
    ) -> Result<Self, HostError> {
        let canvas_width = config.canvas_width();
        let canvas_height = config.canvas_height();
        let window = Arc::new(Self::build_window(event_loop, title, canvas_width, canvas_height)?);
        let pixels = Self::build_pixels(&window, canvas_width, canvas_height)?;
        info!(
            "{}x{} cells on a {}x{} canvas",
            config.size.width, config.size.height, canvas_width, canvas_height
        );
        Ok(Self {
            world,
            window,
            pixels,
            animator: Animator::new(config.step_interval, Instant::now()),
            canvas_width,
            canvas_height,
        })
    }

    fn build_window(
        event_loop: &ActiveEventLoop,
        title: &str,
        width: u32,
        height: u32,
    ) -> Result<Window, HostError> {
        let min_size = LogicalSize::new(width as f64, height as f64);
        let size = LogicalSize::new(width as f64 * WINDOW_SCALE, height as f64 * WINDOW_SCALE);
        let window_attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(size)
            .with_min_inner_size(min_size)
            .with_visible(false);
        Ok(event_loop.create_window(window_attributes)?)
    }

    fn build_pixels(
        window: &Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, HostError> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        Ok(PixelsBuilder::new(width, height, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()?)
    }

    fn on_create(&mut self) {
        for _ in 0..STARTUP_FRAMES {
            let mut canvas = PixelsCanvas::new(
                self.pixels.frame_mut(),
                self.canvas_width,
                self.canvas_height,
                CANVAS_BACKGROUND,
            );
            self.animator.run_once(&mut self.world, &mut canvas);
        }
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_time_step(&mut self) {
        let mut canvas = PixelsCanvas::new(
            self.pixels.frame_mut(),
            self.canvas_width,
            self.canvas_height,
            CANVAS_BACKGROUND,
        );
        if self.animator.on_tick(Instant::now(), &mut self.world, &mut canvas) {
            self.window.request_redraw();
        }
    }

    fn on_step(&mut self) {
        debug!("step");
        let mut canvas = PixelsCanvas::new(
            self.pixels.frame_mut(),
            self.canvas_width,
            self.canvas_height,
            CANVAS_BACKGROUND,
        );
        self.animator.run_once(&mut self.world, &mut canvas);
        self.window.request_redraw();
    }

    fn on_toggle(&mut self) {
        self.animator.toggle(Instant::now());
    }

    fn on_resize(&mut self, width: u32, height: u32) -> Result<(), HostError> {
        if width > 0 && height > 0 {
            self.pixels.resize_surface(width, height)?;
            self.window.request_redraw();
        }
        Ok(())
    }

    fn on_redraw(&mut self) -> Result<(), HostError> {
        Ok(self.pixels.render()?)
    }
}

struct AppEventHandler<W>
where
    W: Animate,
{
    config: AutomatonConfig,
    title: String,
    world: Option<W>,
    app: Option<App<W>>,
    error: Option<HostError>,
}

impl<W> AppEventHandler<W>
where
    W: Animate,
{
    fn new(config: AutomatonConfig, title: &str, world: W) -> Self {
        Self {
            config,
            title: title.to_owned(),
            world: Some(world),
            app: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, method_name: &str, err: HostError) {
        log_error(method_name, &err);
        self.error = Some(err);
        event_loop.exit();
    }
}

impl<W> ApplicationHandler for AppEventHandler<W>
where
    W: Animate,
{
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let (StartCause::ResumeTimeReached { .. }, Some(app)) = (cause, self.app.as_mut()) {
            app.on_time_step();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(world) = self.world.take() else {
            return;
        };
        match App::new(event_loop, &self.config, &self.title, world) {
            Ok(mut app) => {
                app.on_create();
                self.app = Some(app);
            }
            Err(err) => self.fail(event_loop, "App::new", err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        let result = match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                Ok(())
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                match code {
                    KeyCode::Escape | KeyCode::KeyQ => event_loop.exit(),
                    KeyCode::Space => app.on_toggle(),
                    KeyCode::Enter | KeyCode::KeyS | KeyCode::ArrowRight => app.on_step(),
                    _ => (),
                }
                Ok(())
            }
            WindowEvent::Resized(size) => app.on_resize(size.width, size.height),
            WindowEvent::RedrawRequested => app.on_redraw(),
            _ => Ok(()),
        };
        if let Err(err) = result {
            self.fail(event_loop, "window_event", err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let wakeup_time = self.app.as_ref().and_then(|app| app.animator.next_wakeup());
        event_loop.set_control_flow(match wakeup_time {
            Some(time) => ControlFlow::WaitUntil(time),
            None => ControlFlow::Wait,
        });
    }
}
