//! WGSL sources shared with the rendering front-ends.
//!
//! Both pipelines use the same uniform block layout: projection matrix,
//! premultiplied view*model matrix, and a vec4 whose rgb is the section tint
//! (points) or mesh color, and whose w is the material point scale (points)
//! or opacity (meshes).

pub const POINTS_WGSL: &str = r#"
struct Uniforms {
    proj: mat4x4<f32>,
    view_model: mat4x4<f32>,
    tint: vec4<f32>,
};

@group(0) @binding(0) var<uniform> u: Uniforms;

struct VsIn {
    @location(0) corner: vec2<f32>,
    @location(1) position: vec3<f32>,
    @location(2) size: f32,
    @location(3) color: vec4<f32>,
};

struct VsOut {
    @builtin(position) clip: vec4<f32>,
    @location(0) color: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

@vertex
fn vs_points(in: VsIn) -> VsOut {
    var out: VsOut;
    var view_pos = u.view_model * vec4<f32>(in.position, 1.0);
    let extent = in.size * u.tint.w;
    view_pos = vec4<f32>(view_pos.xy + in.corner * extent, view_pos.zw);
    out.clip = u.proj * view_pos;
    out.color = in.color.rgb * u.tint.rgb;
    out.uv = in.corner;
    return out;
}

@fragment
fn fs_points(in: VsOut) -> @location(0) vec4<f32> {
    // soft round particle: gaussian core with a hard outer edge
    let d = length(in.uv) * 2.0;
    let falloff = exp(-d * d * 3.0) * (1.0 - smoothstep(0.8, 1.0, d));
    return vec4<f32>(in.color * falloff, 1.0);
}
"#;

pub const MESH_WGSL: &str = r#"
struct Uniforms {
    proj: mat4x4<f32>,
    view_model: mat4x4<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0) var<uniform> u: Uniforms;

@vertex
fn vs_mesh(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return u.proj * u.view_model * vec4<f32>(position, 1.0);
}

@fragment
fn fs_mesh() -> @location(0) vec4<f32> {
    // additive pipeline: opacity premultiplies the contribution
    return vec4<f32>(u.color.rgb * u.color.a, 1.0);
}
"#;
