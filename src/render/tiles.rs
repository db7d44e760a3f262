use super::helpers::{self, Vertex};
use crate::core::constants::*;
use crate::core::scene::TileInstance;
use glam::{Mat4, Vec3};
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) light_dir: [f32; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) point_light: [f32; 4],
    pub(crate) shadow: [f32; 4],
    pub(crate) flags: [f32; 4],
}

impl Globals {
    pub(crate) fn new(view_proj: Mat4, tile_size: f32, has_logo: bool) -> Self {
        let key = Vec3::from(KEY_LIGHT_POSITION);
        let dir = (-key).normalize();
        let back = -tile_size * TILE_DEPTH_RATIO / 2.0;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            light_dir: [dir.x, dir.y, dir.z, 0.0],
            ambient: [
                AMBIENT_INTENSITY,
                AMBIENT_INTENSITY,
                AMBIENT_INTENSITY,
                if has_logo { 1.0 } else { 0.0 },
            ],
            point_light: [
                POINT_LIGHT_POSITION[0],
                POINT_LIGHT_POSITION[1],
                POINT_LIGHT_POSITION[2],
                POINT_LIGHT_INTENSITY,
            ],
            shadow: [back - SHADOW_PLANE_GAP, SHADOW_OPACITY, 0.0, 0.0],
            flags: [FACE_OPACITY, EDGE_ALPHA, FACE_INSET, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    center_scale: [f32; 4],
    extent: [f32; 4],
    base_color: [f32; 4],
    emissive: [f32; 4],
    uv_rect: [f32; 4],
}

impl InstanceRaw {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    pub(crate) fn pack(inst: &TileInstance, tile_size: f32) -> Self {
        let c = inst.center;
        let [r, g, b] = inst.base_color;
        let [er, eg, eb] = inst.emissive;
        Self {
            center_scale: [c.x, c.y, c.z, inst.scale],
            extent: [tile_size / 2.0, tile_size * TILE_DEPTH_RATIO / 2.0, 0.0, 0.0],
            base_color: [r, g, b, 1.0],
            emissive: [er, eg, eb, 0.0],
            uv_rect: inst.uv_rect,
        }
    }
}

pub(crate) struct TileResources {
    pub(crate) tile_pipeline: wgpu::RenderPipeline,
    pub(crate) shadow_pipeline: wgpu::RenderPipeline,
    pub(crate) edge_pipeline: wgpu::RenderPipeline,
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) globals_buffer: wgpu::Buffer,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) cube_vertices: wgpu::Buffer,
    pub(crate) cube_indices: wgpu::Buffer,
    pub(crate) cube_index_count: u32,
    pub(crate) edge_vertices: wgpu::Buffer,
    pub(crate) edge_indices: wgpu::Buffer,
    pub(crate) edge_index_count: u32,
}

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

pub(crate) fn create_tile_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
) -> TileResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("tiles_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::TILES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("tiles_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("tiles_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let buffers = [Vertex::layout(), InstanceRaw::layout()];
    let depth = |write: bool, compare: wgpu::CompareFunction| wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: write,
        depth_compare: compare,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    };

    let tile_pipeline = helpers::make_mesh_pipeline(
        device,
        &pl,
        &shader,
        "tile_pipeline",
        ("vs_tile", "fs_tile"),
        &buffers,
        wgpu::PrimitiveState {
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth(true, wgpu::CompareFunction::Less),
        color_format,
        Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
        sample_count,
    );
    let shadow_pipeline = helpers::make_mesh_pipeline(
        device,
        &pl,
        &shader,
        "shadow_pipeline",
        ("vs_shadow", "fs_shadow"),
        &buffers,
        wgpu::PrimitiveState::default(),
        depth(false, wgpu::CompareFunction::LessEqual),
        color_format,
        Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
        sample_count,
    );
    let edge_pipeline = helpers::make_mesh_pipeline(
        device,
        &pl,
        &shader,
        "edge_pipeline",
        ("vs_edge", "fs_edge"),
        &buffers,
        wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            ..Default::default()
        },
        depth(false, wgpu::CompareFunction::LessEqual),
        color_format,
        Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
        sample_count,
    );

    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("logo_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("tiles_globals"),
        size: std::mem::size_of::<Globals>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("tiles_instances"),
        size: (std::mem::size_of::<InstanceRaw>() * 4) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let (verts, idx) = helpers::cube_mesh();
    let cube_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube_vertices"),
        contents: bytemuck::cast_slice(&verts),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let cube_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube_indices"),
        contents: bytemuck::cast_slice(&idx),
        usage: wgpu::BufferUsages::INDEX,
    });
    let (edge_verts, edge_idx) = helpers::cube_edges();
    let edge_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("edge_vertices"),
        contents: bytemuck::cast_slice(&edge_verts),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let edge_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("edge_indices"),
        contents: bytemuck::cast_slice(&edge_idx),
        usage: wgpu::BufferUsages::INDEX,
    });

    TileResources {
        tile_pipeline,
        shadow_pipeline,
        edge_pipeline,
        bgl,
        sampler,
        globals_buffer,
        instance_buffer,
        cube_vertices,
        cube_indices,
        cube_index_count: idx.len() as u32,
        edge_vertices,
        edge_indices,
        edge_index_count: edge_idx.len() as u32,
    }
}

pub(crate) fn create_bind_group(
    device: &wgpu::Device,
    res: &TileResources,
    logo_view: &wgpu::TextureView,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("tiles_bg"),
        layout: &res.bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: res.globals_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(logo_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&res.sampler),
            },
        ],
    })
}
