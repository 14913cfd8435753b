//! Window management system
//!
//! Handles window creation, fullscreen toggle, and the title-bar status line.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};

use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
    current_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
            current_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Show the measured FPS and pause state in the title bar
    pub fn update_title(&mut self, fps: f32, paused: bool, show_fps: bool) {
        let title = format_title(&self.base_title, fps, paused, show_fps);
        if title != self.current_title {
            self.window.set_title(&title);
            self.current_title = title;
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Build the title-bar text, e.g. `"Cloth Simulation - FPS: 50 [paused]"`
///
/// FPS is truncated to a whole number.
pub fn format_title(base: &str, fps: f32, paused: bool, show_fps: bool) -> String {
    let mut title = base.to_string();
    if show_fps {
        title.push_str(&format!(" - FPS: {}", fps.max(0.0) as u32));
    }
    if paused {
        title.push_str(" [paused]");
    }
    title
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
