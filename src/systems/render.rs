//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The shape pipeline
//! - Frame rendering

use std::sync::Arc;

use clothnet_math::Color;
use clothnet_render::{ContextError, DrawList, RenderContext, ShapePipeline};
use winit::window::Window;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
///
/// Shapes are laid out on a fixed canvas (the configured window size) that
/// is stretched over the whole surface.
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ShapePipeline,
}

impl RenderSystem {
    /// Create render system from window and canvas size
    pub fn new(
        window: Arc<Window>,
        canvas_width: u32,
        canvas_height: u32,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let pipeline = ShapePipeline::new(&context.device, context.config.format);
        pipeline.update_screen(&context.queue, canvas_width, canvas_height);

        log::info!(
            "Renderer ready: {}x{} surface, {}x{} canvas",
            context.size.width,
            context.size.height,
            canvas_width,
            canvas_height
        );

        Ok(Self { context, pipeline })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface after it was lost
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Render a single frame
    pub fn render_frame(&mut self, list: &DrawList, clear_color: Color) -> Result<(), RenderError> {
        self.pipeline
            .upload(&self.context.device, &self.context.queue, list.vertices());

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, to_wgpu_color(clear_color));

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn to_wgpu_color(color: Color) -> wgpu::Color {
    wgpu::Color {
        r: color.r as f64,
        g: color.g as f64,
        b: color.b as f64,
        a: color.a as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert_eq!(
            format!("{}", RenderError::Context(ContextError::NoAdapter)),
            "GPU setup failed: No compatible GPU adapter found"
        );
    }

    #[test]
    fn test_to_wgpu_color() {
        let color = to_wgpu_color(Color::WHITE);
        assert_eq!((color.r, color.g, color.b, color.a), (1.0, 1.0, 1.0, 1.0));
    }
}
