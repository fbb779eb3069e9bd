/// WGSL shader for instanced cubes. Alpha comes from the instance color, so
/// the same shader serves placed cubes and the translucent preview.
pub const CUBE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) normal: vec3<f32>,
    @location(1) color: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * model * vec4<f32>(vertex.position, 1.0);
    // Uniform scale only, so the model matrix keeps normals perpendicular.
    out.normal = normalize((model * vec4<f32>(vertex.normal, 0.0)).xyz);
    out.color = instance.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let light_dir = normalize(vec3<f32>(0.4, 1.0, 0.3));
    let lighting = 0.45 + max(dot(in.normal, light_dir), 0.0) * 0.55;
    return vec4<f32>(in.color.rgb * lighting, in.color.a);
}
"#;

/// WGSL shader for the ground grid. Lines fade out with horizontal distance
/// from the camera.
pub const GRID_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

const FADE_START: f32 = 150.0;
const FADE_END: f32 = 450.0;

struct GridVertex {
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
};

struct GridOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_xz: vec2<f32>,
    @location(1) color: vec4<f32>,
};

@vertex
fn vs_grid(vertex: GridVertex) -> GridOutput {
    var out: GridOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(vertex.position, 1.0);
    out.world_xz = vertex.position.xz;
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_grid(in: GridOutput) -> @location(0) vec4<f32> {
    let distance = length(in.world_xz - uniforms.camera_pos.xz);
    let fade = 1.0 - smoothstep(FADE_START, FADE_END, distance);
    return vec4<f32>(in.color.rgb, in.color.a * fade);
}
"#;
