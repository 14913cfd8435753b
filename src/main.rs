//! Clothnet - 2D cloth net simulation
//!
//! Opens a window and runs the net at a fixed frame rate.

use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use clothnet::config::AppConfig;
use clothnet::input::InputMapper;
use clothnet::scene::{Scene, SceneBuilder};
use clothnet::systems::{ActionOutcome, RenderError, RenderSystem, SimulationSystem, WindowSystem};
use clothnet_math::Color;
use clothnet_render::DrawList;

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    scene: Scene,
    simulation: SimulationSystem,
    /// Reused every frame
    draw_list: DrawList,
}

impl App {
    fn new(config: AppConfig, scene: Scene) -> Self {
        let simulation = SimulationSystem::new(&config.simulation);
        Self {
            config,
            window: None,
            render: None,
            scene,
            simulation,
            draw_list: DrawList::new(),
        }
    }

    fn clear_color(&self) -> Color {
        if self.simulation.is_paused() {
            Color::from(self.config.rendering.paused_color)
        } else {
            Color::from(self.config.rendering.background_color)
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.simulation.advance(Instant::now(), &mut self.scene);

        self.draw_list.clear();
        self.scene.draw(&mut self.draw_list);

        let clear_color = self.clear_color();
        if let Some(render) = &mut self.render {
            match render.render_frame(&self.draw_list, clear_color) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.reconfigure(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Skipped frame: {}", e),
            }
        }

        if let Some(window) = &mut self.window {
            window.update_title(
                self.simulation.measured_fps(),
                self.simulation.is_paused(),
                self.config.debug.show_fps,
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            self.config.window.width,
            self.config.window.height,
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
        self.simulation.restart_clock(Instant::now());
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };
                let Some(action) = InputMapper::map_keyboard(key, event.state) else {
                    return;
                };

                match self.simulation.handle_action(action, &mut self.scene) {
                    ActionOutcome::Handled => {}
                    ActionOutcome::ToggleFullscreen => {
                        if let Some(window) = &self.window {
                            window.toggle_fullscreen();
                        }
                    }
                    ActionOutcome::Exit => event_loop.exit(),
                }

                // Show pause and trail changes without waiting for the next tick
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            if self.simulation.is_frame_due(Instant::now()) {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.simulation.next_frame_at()));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging is configured by the config, so config errors are reported after init
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("{}. Using defaults.", e);
    }
    log::info!("Starting Clothnet");

    let scene = match SceneBuilder::from_config(&config).build() {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Failed to build scene: {}", e);
            return Err(e.into());
        }
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, scene);
    event_loop.run_app(&mut app)?;
    Ok(())
}
