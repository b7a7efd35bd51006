//! GPU rendering system
//!
//! Owns the render context and the mesh pipeline. The arena never changes, so
//! geometry is uploaded once and each frame only refreshes the uniforms.

use std::sync::Arc;
use winit::window::Window;
use arena_math::mat4;
use arena_render::{
    camera::Camera3D,
    context::{ContextError, RenderContext},
    hex_to_linear,
    pipeline::{MeshPipeline, RenderUniforms},
    RenderableGeometry,
};
use crate::config::{CameraConfig, RenderingConfig};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    mesh_pipeline: MeshPipeline,
    render_config: RenderingConfig,
    camera_config: CameraConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        camera_config: CameraConfig,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut mesh_pipeline = MeshPipeline::new(&context.device, context.config.format);
        mesh_pipeline.ensure_depth_texture(
            &context.device,
            context.config.width,
            context.config.height,
        );

        Ok(Self {
            context,
            mesh_pipeline,
            render_config,
            camera_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(winit::dpi::PhysicalSize::new(width, height));
        self.mesh_pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure the surface at its current size (after it was lost)
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.resize(size.width, size.height);
    }

    /// Upload geometry to GPU
    pub fn upload_geometry(&mut self, geometry: &RenderableGeometry) {
        self.mesh_pipeline.upload_geometry(&self.context.device, geometry);
        log::info!(
            "Uploaded {} vertices and {} triangles",
            geometry.vertex_count(),
            geometry.triangle_count()
        );
    }

    /// Uniforms for the current camera and surface size
    fn uniforms(&self, camera: &Camera3D) -> RenderUniforms {
        let projection = mat4::perspective(
            self.camera_config.fov.to_radians(),
            self.context.aspect_ratio(),
            self.camera_config.near,
            self.camera_config.far,
        );

        RenderUniforms::new(
            projection,
            camera.view_matrix(),
            hex_to_linear(self.render_config.sky_color),
            hex_to_linear(self.render_config.ground_color),
            self.render_config.light_intensity,
        )
    }

    /// Render a single frame
    pub fn render_frame(&mut self, camera: &Camera3D) -> Result<(), RenderError> {
        self.mesh_pipeline
            .update_uniforms(&self.context.queue, &self.uniforms(camera));

        let output = self.context.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.mesh_pipeline
            .render(&mut encoder, &view, clear_color(self.render_config.background_color));

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Opaque clear color from a `0xRRGGBB` value
fn clear_color(rgb: u32) -> wgpu::Color {
    let [r, g, b, a] = hex_to_linear(rgb);
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}
