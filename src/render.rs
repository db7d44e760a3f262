use crate::core::camera::Camera;
use crate::core::constants::MSAA_SAMPLES;
use crate::core::scene::TileInstance;
use crate::core::tier::RenderQuality;
use web_sys as web;
use wgpu;

pub mod helpers;
pub mod tiles;

use tiles::{Globals, InstanceRaw, TileResources};

struct Targets {
    msaa_view: Option<wgpu::TextureView>,
    depth_view: wgpu::TextureView,
}

impl Targets {
    fn new(device: &wgpu::Device, format: wgpu::TextureFormat, width: u32, height: u32, samples: u32) -> Self {
        let msaa_view = (samples > 1).then(|| {
            helpers::create_attachment(device, "msaa_color", width, height, format, samples).1
        });
        let (_, depth_view) =
            helpers::create_attachment(device, "depth", width, height, tiles::DEPTH_FORMAT, samples);
        Self {
            msaa_view,
            depth_view,
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    resources: TileResources,
    bind_group: wgpu::BindGroup,
    targets: Targets,
    sample_count: u32,
    shadows: bool,
    edge_lines: bool,
    tile_size: f32,
    has_logo: bool,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, quality: &RenderQuality) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: if quality.low_power {
                    wgpu::PowerPreference::LowPower
                } else {
                    wgpu::PowerPreference::HighPerformance
                },
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // transparent canvas so the host page shows through
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sample_count = if quality.antialias { MSAA_SAMPLES } else { 1 };
        let resources = tiles::create_tile_resources(&device, format, sample_count);
        // 1x1 transparent stand-in until the logo decodes
        let (_, blank_view) =
            helpers::create_rgba_texture(&device, &queue, "logo_placeholder", 1, 1, &[0, 0, 0, 0]);
        let bind_group = tiles::create_bind_group(&device, &resources, &blank_view);
        let targets = Targets::new(&device, format, width, height, sample_count);

        log::info!(
            "[gpu] ready: {}x{} format={:?} msaa={} shadows={} edges={}",
            width,
            height,
            format,
            sample_count,
            quality.shadows,
            quality.edge_lines
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            resources,
            bind_group,
            targets,
            sample_count,
            shadows: quality.shadows,
            edge_lines: quality.edge_lines,
            tile_size: quality.tile_size,
            has_logo: false,
        })
    }

    /// Bind decoded logo pixels (RGBA8, row-major, no padding).
    pub fn set_logo(&mut self, width: u32, height: u32, pixels: &[u8]) {
        if width == 0 || height == 0 || pixels.len() != (width * height * 4) as usize {
            log::warn!("[gpu] ignoring logo with inconsistent size {}x{}", width, height);
            return;
        }
        let (_, view) =
            helpers::create_rgba_texture(&self.device, &self.queue, "logo", width, height, pixels);
        self.bind_group = tiles::create_bind_group(&self.device, &self.resources, &view);
        self.has_logo = true;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.targets = Targets::new(
            &self.device,
            self.config.format,
            width,
            height,
            self.sample_count,
        );
    }

    pub fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    pub fn render(&mut self, camera: &Camera, instances: &[TileInstance; 4]) -> Result<(), wgpu::SurfaceError> {
        let globals = Globals::new(camera.view_proj(), self.tile_size, self.has_logo);
        self.queue
            .write_buffer(&self.resources.globals_buffer, 0, bytemuck::bytes_of(&globals));
        let packed: [InstanceRaw; 4] =
            std::array::from_fn(|i| InstanceRaw::pack(&instances[i], self.tile_size));
        self.queue
            .write_buffer(&self.resources.instance_buffer, 0, bytemuck::cast_slice(&packed));

        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.surface.configure(&self.device, &self.config);
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let (color_view, resolve_target) = match &self.targets.msaa_view {
            Some(msaa) => (msaa, Some(&view)),
            None => (&view, None),
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("tiles_encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tiles_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let res = &self.resources;
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.set_vertex_buffer(1, res.instance_buffer.slice(..));

            pass.set_vertex_buffer(0, res.cube_vertices.slice(..));
            pass.set_index_buffer(res.cube_indices.slice(..), wgpu::IndexFormat::Uint16);
            if self.shadows {
                // front face only: one layer of shadow per tile
                pass.set_pipeline(&res.shadow_pipeline);
                pass.draw_indexed(0..6, 0, 0..4);
            }
            pass.set_pipeline(&res.tile_pipeline);
            pass.draw_indexed(0..res.cube_index_count, 0, 0..4);

            if self.edge_lines {
                pass.set_pipeline(&res.edge_pipeline);
                pass.set_vertex_buffer(0, res.edge_vertices.slice(..));
                pass.set_index_buffer(res.edge_indices.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..res.edge_index_count, 0, 0..4);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
