//! Renderer-agnostic marker geometry for an evaluated skeleton.
//!
//! Each joint contributes a small axis marker (its center plus a tick along
//! ± each local axis) and one line per parent→child link. The output is a
//! plain vertex/index list drawn as line segments; GPU upload is a consumer
//! concern.

use crate::Skeleton;
use glam::Vec3;
use std::collections::VecDeque;

/// Vertices emitted per joint marker: the center plus one tick endpoint on
/// ± each local axis.
pub const VERTICES_PER_JOINT: usize = 7;

/// Half-length of each axis tick, in world units.
pub const MARKER_RADIUS: f32 = 0.05;

const CENTER_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const X_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
const Y_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
const Z_COLOR: [f32; 3] = [0.0, 0.0, 1.0];

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Line-list geometry for one skeleton: `total_nodes * 7` vertices indexed
/// by each joint's `vertex_slot`, and `total_nodes * 6 + total_links * 2`
/// indices (three axis lines per joint, one line per link).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}

pub fn build_draw_list(skeleton: &Skeleton) -> DrawList {
    let data = &skeleton.data;
    let mut out = DrawList {
        vertices: vec![Vertex::default(); data.total_nodes * VERTICES_PER_JOINT],
        indices: Vec::with_capacity(data.total_nodes * 6 + data.total_links * 2),
    };

    let ticks: [(Vec3, [f32; 3]); VERTICES_PER_JOINT] = [
        (Vec3::ZERO, CENTER_COLOR),
        (Vec3::new(MARKER_RADIUS, 0.0, 0.0), X_COLOR),
        (Vec3::new(-MARKER_RADIUS, 0.0, 0.0), X_COLOR),
        (Vec3::new(0.0, MARKER_RADIUS, 0.0), Y_COLOR),
        (Vec3::new(0.0, -MARKER_RADIUS, 0.0), Y_COLOR),
        (Vec3::new(0.0, 0.0, MARKER_RADIUS), Z_COLOR),
        (Vec3::new(0.0, 0.0, -MARKER_RADIUS), Z_COLOR),
    ];

    // Same breadth-first order as the placement pass, so emission order and
    // vertex slots agree.
    let mut queue = VecDeque::new();
    for &root in &data.roots {
        queue.push_back(root);
        while let Some(index) = queue.pop_front() {
            let joint = &data.joints[index];
            let Some(pose) = skeleton.pose(index) else {
                continue;
            };

            let slot = joint.vertex_slot;
            for (k, (tick, color)) in ticks.iter().enumerate() {
                out.vertices[slot + k] = Vertex {
                    position: (pose.world_position + pose.world_rotation * *tick).to_array(),
                    color: *color,
                };
            }

            // Star: the six tick endpoints pair into three axis lines.
            for k in 1..VERTICES_PER_JOINT {
                out.indices.push((slot + k) as u32);
            }

            // Link line from this joint's center to each child's center.
            for &child in &joint.children {
                out.indices.push(slot as u32);
                out.indices.push(data.joints[child].vertex_slot as u32);
                queue.push_back(child);
            }
        }
    }

    out
}
