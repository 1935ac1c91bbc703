//! A renderer of one-pixel wide lines.
//!
//! The lines of a frame are uploaded at once and drawn with a single `LineList` draw
//! call.

use crate::camera::Camera3d;
use crate::color::{self, Color};
use crate::context::Context;
use crate::renderer::Renderer3d;
use crate::scene::Wireframe;
use bytemuck::{Pod, Zeroable};
use glamx::Mat4;

/// Shader source for lines.
pub static LINE_SHADER_SRC: &str = include_str!("../builtin/lines3d.wgsl");

/// A line endpoint, laid out like the `VertexInput` of lines3d.wgsl.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub(crate) struct LineVertex {
    position: [f32; 3],
    color: [f32; 4],
}

impl LineVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];
}

/// Laid out like the `ViewUniforms` of lines3d.wgsl.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct ViewUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
}

/// The line endpoints of the next frame.
///
/// Holds at most one wireframe: queuing a new one replaces whatever a skipped frame
/// left behind.
#[derive(Clone, Debug, Default)]
pub(crate) struct LineBatch {
    vertices: Vec<LineVertex>,
}

impl LineBatch {
    /// Replaces the batch with both endpoints of every edge of `wireframe`, in
    /// edge-table order, moved by `transform`.
    pub fn set_wireframe(&mut self, wireframe: &Wireframe, transform: Mat4, color: Color) {
        let color = color::to_array(color);
        self.vertices.clear();
        self.vertices.extend(wireframe.segments().flat_map(|(a, b)| {
            [a, b].map(|p| LineVertex {
                position: transform.transform_point3(p).into(),
                color,
            })
        }));
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn clear(&mut self) {
        self.vertices.clear()
    }
}

/// Draws a wireframe as a list of lines.
pub struct LineRenderer3d {
    pipeline: wgpu::RenderPipeline,
    view_uniforms: wgpu::Buffer,
    view_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    batch: LineBatch,
}

impl Default for LineRenderer3d {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRenderer3d {
    /// Creates the line pipeline.
    ///
    /// The window must be open: the pipeline targets its surface format.
    pub fn new() -> LineRenderer3d {
        let ctxt = Context::get();
        let device = &ctxt.device;

        let view_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("line_view_layout"),
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

        let view_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("line_view_uniforms"),
            size: std::mem::size_of::<ViewUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Written in place every frame, so the bind group never goes stale.
        let view_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("line_view_bind_group"),
            layout: &view_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: view_uniforms.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("line_shader"),
            source: wgpu::ShaderSource::Wgsl(LINE_SHADER_SRC.into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("line_pipeline_layout"),
            bind_group_layouts: &[&view_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("line_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &LineVertex::ATTRIBUTES,
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(ctxt.surface_format.into())],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: Context::DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        // Room for the whole bus (780 endpoints) from the first frame on.
        let vertex_capacity = 1024;

        LineRenderer3d {
            pipeline,
            view_uniforms,
            view_bind_group,
            vertex_buffer: vertex_buffer(device, vertex_capacity),
            vertex_capacity,
            batch: LineBatch::default(),
        }
    }

    /// Sets the wireframe, moved by `transform`, drawn by the next [`render`].
    ///
    /// Only the last wireframe given before a render is drawn.
    ///
    /// [`render`]: Renderer3d::render
    pub fn draw_wireframe(&mut self, wireframe: &Wireframe, transform: Mat4, color: Color) {
        self.batch.set_wireframe(wireframe, transform, color);
    }
}

fn vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("line_vertex_buffer"),
        size: (std::mem::size_of::<LineVertex>() * capacity) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl Renderer3d for LineRenderer3d {
    fn render(&mut self, camera: &dyn Camera3d, render_pass: &mut wgpu::RenderPass<'_>) {
        let count = self.batch.vertices().len();
        if count == 0 {
            return;
        }

        let ctxt = Context::get();
        let (view, proj) = camera.view_transform_pair();
        let uniforms = ViewUniforms {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
        };
        ctxt.queue
            .write_buffer(&self.view_uniforms, 0, bytemuck::bytes_of(&uniforms));

        if count > self.vertex_capacity {
            self.vertex_capacity = count.next_power_of_two();
            self.vertex_buffer = vertex_buffer(&ctxt.device, self.vertex_capacity);
        }
        ctxt.queue.write_buffer(
            &self.vertex_buffer,
            0,
            bytemuck::cast_slice(self.batch.vertices()),
        );

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.view_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..count as u32, 0..1);

        self.batch.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{assemble_bus, WireframeBuilder};
    use glamx::Vec3;

    fn triangle() -> Wireframe {
        let mut builder = WireframeBuilder::new();
        builder.append_vertices(vec![Vec3::X, Vec3::Y, Vec3::Z]);
        builder.append_edges(&[[0, 1], [1, 2], [2, 0]]);
        builder.build()
    }

    fn positions(batch: &LineBatch) -> Vec<[f32; 3]> {
        batch.vertices().iter().map(|v| v.position).collect()
    }

    #[test]
    fn two_endpoints_per_edge_in_table_order() {
        let mut batch = LineBatch::default();
        batch.set_wireframe(&triangle(), Mat4::IDENTITY, color::RED);

        assert_eq!(
            positions(&batch),
            vec![
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
                [0.0, 0.0, 1.0],
                [1.0, 0.0, 0.0],
            ]
        );
        assert!(batch.vertices().iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn endpoints_are_moved_by_the_transform() {
        let mut batch = LineBatch::default();
        let transform = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
        batch.set_wireframe(&triangle(), transform, color::RED);

        assert_eq!(batch.vertices()[0].position, [1.0, 0.0, -5.0]);
        assert_eq!(batch.vertices()[3].position, [0.0, 0.0, -4.0]);
    }

    #[test]
    fn an_undrawn_frame_is_replaced_by_the_next_one() {
        let bus = assemble_bus();
        let quarter_turn = Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2);

        let mut batch = LineBatch::default();
        batch.set_wireframe(&bus, Mat4::IDENTITY, color::RED);
        batch.set_wireframe(&bus, quarter_turn, color::RED);
        assert_eq!(batch.vertices().len(), 2 * bus.edges().len());

        let mut latest = LineBatch::default();
        latest.set_wireframe(&bus, quarter_turn, color::RED);
        assert_eq!(batch.vertices(), latest.vertices());

        batch.clear();
        assert!(batch.vertices().is_empty());
    }

    #[test]
    fn vertex_layout_matches_the_shader() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 28);
        assert_eq!(LineVertex::ATTRIBUTES[1].offset, 12);
        assert_eq!(std::mem::size_of::<ViewUniforms>(), 128);
        assert!(LINE_SHADER_SRC.contains("fn vs_main"));
        assert!(LINE_SHADER_SRC.contains("fn fs_main"));
    }
}
