use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use tabletop_core::{CameraUniform, FlyCamera, Mesh};
use winit::window::Window;

use crate::config::AppConfig;
use crate::scene::{SceneItem, ShapeKind, TextureKind};

use super::depth::{depth_stencil_state, DepthTarget};
use super::mesh::GpuMesh;
use super::object::{create_object_bgl, DrawObject};
use super::texture::{create_sampler, Texture};

pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    clear_color: wgpu::Color,

    depth: DepthTarget,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,

    pipeline: wgpu::RenderPipeline,
    meshes: HashMap<ShapeKind, GpuMesh>,
    objects: Vec<DrawObject>,
    _textures: HashMap<TextureKind, Texture>,
}

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

impl Renderer {
    pub async fn new(
        window: Arc<Window>,
        app: &AppConfig,
        meshes: &[(ShapeKind, Mesh)],
        scene: &[SceneItem],
    ) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = request_adapter(&instance, &surface).await?;
        let (device, queue) = request_device(&adapter).await?;

        let config = configure_surface(&window, &surface, &adapter, &device)?;
        let depth = DepthTarget::new(&device, config.width, config.height);

        let (camera_buffer, camera_bind_group, camera_bgl) =
            create_camera_resources(&device);

        let object_bgl = create_object_bgl(&device);
        let pipeline = create_pipeline(&device, &config, &camera_bgl, &object_bgl);

        let meshes: HashMap<ShapeKind, GpuMesh> = meshes
            .iter()
            .map(|(shape, mesh)| {
                log::info!(
                    "uploading {:?}: {} vertices, {} triangles",
                    shape,
                    mesh.vertex_count(),
                    mesh.triangle_count()
                );
                (*shape, GpuMesh::upload(&device, &format!("{shape:?}"), mesh))
            })
            .collect();

        let textures: HashMap<TextureKind, Texture> = TextureKind::ALL
            .iter()
            .map(|&kind| {
                let path = app.asset_dir.join(kind.file_name());
                (kind, Texture::load(&device, &queue, &path))
            })
            .collect();

        let sampler = create_sampler(&device);
        let objects = scene
            .iter()
            .filter_map(|item| {
                let texture = textures.get(&item.texture)?;
                Some(DrawObject::create(
                    &device,
                    &object_bgl,
                    item.shape,
                    item.transform,
                    &texture.view,
                    &sampler,
                ))
            })
            .collect();

        let clear_color = surface_clear_color(app.clear_color, config.format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            clear_color,
            depth,
            camera_buffer,
            camera_bind_group,
            pipeline,
            meshes,
            objects,
            _textures: textures,
        })
    }

    pub fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        log::debug!("resizing surface to {width}x{height}");

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth.resize(&self.device, width, height);
    }

    pub fn update_camera(&mut self, camera: &FlyCamera) {
        let uniform = CameraUniform::from_camera(camera, self.aspect());
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&uniform));
    }

    pub fn render(&mut self) {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(err) => {
                log::warn!("skipping frame: {err}");
                return;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });

        record_render_pass(
            &mut encoder,
            &view,
            &self.depth.view,
            self.clear_color,
            &self.pipeline,
            &self.camera_bind_group,
            &self.meshes,
            &self.objects,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}

//
// ──────────────────────────────────────────────────────────────
//   Initialization Helpers
// ──────────────────────────────────────────────────────────────
//

async fn request_adapter(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface<'_>,
) -> anyhow::Result<wgpu::Adapter> {
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(surface),
            force_fallback_adapter: false,
        })
        .await
        .context("no suitable GPU adapters found")?;

    log::info!("using adapter {}", adapter.get_info().name);
    Ok(adapter)
}

async fn request_device(
    adapter: &wgpu::Adapter,
) -> anyhow::Result<(wgpu::Device, wgpu::Queue)> {
    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("Tabletop Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            ..Default::default()
        })
        .await
        .context("failed to create device")
}

fn configure_surface(
    window: &Window,
    surface: &wgpu::Surface<'_>,
    adapter: &wgpu::Adapter,
    device: &wgpu::Device,
) -> anyhow::Result<wgpu::SurfaceConfiguration> {
    let size = window.inner_size();
    let caps = surface.get_capabilities(adapter);

    // Textures are sRGB; prefer a matching swapchain format
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first().copied())
        .context("surface reports no supported formats")?;

    let config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::Fifo,
        alpha_mode: wgpu::CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };

    surface.configure(device, &config);
    Ok(config)
}

/// The configured colour is what should appear on screen. sRGB surfaces
/// encode on write, so the clear value must be given in linear space.
fn surface_clear_color(rgb: [f64; 3], format: wgpu::TextureFormat) -> wgpu::Color {
    let [r, g, b] = if format.is_srgb() {
        rgb.map(srgb_to_linear)
    } else {
        rgb
    };

    wgpu::Color { r, g, b, a: 1.0 }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn create_camera_resources(
    device: &wgpu::Device,
) -> (wgpu::Buffer, wgpu::BindGroup, wgpu::BindGroupLayout) {
    let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Camera Buffer"),
        size: std::mem::size_of::<CameraUniform>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let camera_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Camera BGL"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Camera BG"),
        layout: &camera_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: camera_buffer.as_entire_binding(),
        }],
    });

    (camera_buffer, camera_bind_group, camera_bgl)
}

fn create_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    camera_bgl: &wgpu::BindGroupLayout,
    object_bgl: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Textured Shader"),
        source: wgpu::ShaderSource::Wgsl(
            include_str!("../shaders/textured.wgsl").into(),
        ),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Textured Pipeline Layout"),
        bind_group_layouts: &[camera_bgl, object_bgl],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Textured Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[GpuMesh::layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: config.format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None, // bowl and spoon are seen from inside too
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: Some(depth_stencil_state()),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

//
// ──────────────────────────────────────────────────────────────
//   Render Pass
// ──────────────────────────────────────────────────────────────
//

#[allow(clippy::too_many_arguments)]
fn record_render_pass(
    encoder: &mut wgpu::CommandEncoder,
    color_view: &wgpu::TextureView,
    depth_view: &wgpu::TextureView,
    clear_color: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    camera_bg: &wgpu::BindGroup,
    meshes: &HashMap<ShapeKind, GpuMesh>,
    objects: &[DrawObject],
) {
    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Scene Render Pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: color_view,
            depth_slice: None,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear_color),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
            view: depth_view,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(1.0),
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }),
        occlusion_query_set: None,
        timestamp_writes: None,
    });

    pass.set_pipeline(pipeline);
    pass.set_bind_group(0, camera_bg, &[]);

    for object in objects {
        let Some(mesh) = meshes.get(&object.shape) else {
            continue;
        };

        pass.set_bind_group(1, &object.bind_group, &[]);
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-5;

    #[test]
    fn srgb_to_linear_matches_reference_points() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < EPS);
        assert!((srgb_to_linear(0.04045) - 0.0031308).abs() < EPS);
        assert!((srgb_to_linear(0.2) - 0.0331048).abs() < EPS);
        assert!((srgb_to_linear(0.3) - 0.0732389).abs() < EPS);
    }

    #[test]
    fn clear_color_is_linearised_only_for_srgb_surfaces() {
        let rgb = [0.2, 0.3, 0.3];

        let srgb = surface_clear_color(rgb, wgpu::TextureFormat::Bgra8UnormSrgb);
        assert!((srgb.r - srgb_to_linear(0.2)).abs() < EPS);
        assert!((srgb.g - srgb_to_linear(0.3)).abs() < EPS);
        assert_eq!(srgb.a, 1.0);

        let unorm = surface_clear_color(rgb, wgpu::TextureFormat::Bgra8Unorm);
        assert_eq!((unorm.r, unorm.g, unorm.b, unorm.a), (0.2, 0.3, 0.3, 1.0));
    }
}
