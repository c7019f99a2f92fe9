//! Tessellation for the static geometry layers.

use std::f32::consts::{PI, TAU};

use scene_core::GeometryShape;

pub struct MeshData {
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

pub fn build(shape: GeometryShape) -> MeshData {
    match shape {
        GeometryShape::Sphere { radius, squash_y } => uv_sphere(radius, squash_y, 32, 16),
        GeometryShape::Ring {
            inner_radius,
            outer_radius,
        } => flat_ring(inner_radius, outer_radius, 128),
    }
}

fn uv_sphere(radius: f32, squash_y: f32, slices: u32, stacks: u32) -> MeshData {
    let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
    for stack in 0..=stacks {
        let phi = PI * stack as f32 / stacks as f32;
        let y = phi.cos() * radius * squash_y;
        let ring = phi.sin() * radius;
        for slice in 0..=slices {
            let theta = TAU * slice as f32 / slices as f32;
            vertices.push([ring * theta.cos(), y, ring * theta.sin()]);
        }
    }
    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
    let stride = slices + 1;
    for stack in 0..stacks {
        for slice in 0..slices {
            let a = stack * stride + slice;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    MeshData { vertices, indices }
}

fn flat_ring(inner_radius: f32, outer_radius: f32, segments: u32) -> MeshData {
    let mut vertices = Vec::with_capacity(((segments + 1) * 2) as usize);
    for segment in 0..=segments {
        let theta = TAU * segment as f32 / segments as f32;
        let (sin, cos) = theta.sin_cos();
        vertices.push([inner_radius * cos, 0.0, inner_radius * sin]);
        vertices.push([outer_radius * cos, 0.0, outer_radius * sin]);
    }
    let mut indices = Vec::with_capacity((segments * 6) as usize);
    for segment in 0..segments {
        let a = segment * 2;
        indices.extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
    }
    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_indices_stay_in_bounds() {
        let mesh = uv_sphere(1.0, 1.0, 32, 16);
        let max = *mesh.indices.iter().max().unwrap();
        assert!((max as usize) < mesh.vertices.len());
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn ring_lies_in_plane() {
        let mesh = flat_ring(1.0, 2.0, 64);
        assert!(mesh.vertices.iter().all(|v| v[1] == 0.0));
        let max = *mesh.indices.iter().max().unwrap();
        assert!((max as usize) < mesh.vertices.len());
    }
}
