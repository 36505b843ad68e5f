//! WGSL reserved-word sets.
//!
//! Process-wide constants. Lookups are linear over short slices, which is fast enough for the
//! per-match checks the scanners perform.

/// Reserved keywords.
pub const KEYWORDS: &[&str] = &[
    "fn",
    "var",
    "let",
    "const",
    "struct",
    "if",
    "else",
    "for",
    "while",
    "loop",
    "return",
    "break",
    "continue",
    "discard",
    "switch",
    "case",
    "default",
    "true",
    "false",
    "override",
    "enable",
    "requires",
    "diagnostic",
    "alias",
    "continuing",
    "fallthrough",
];

/// Built-in type names.
pub const BUILTIN_TYPES: &[&str] = &[
    "bool",
    "i32",
    "u32",
    "f32",
    "f16",
    "vec2",
    "vec3",
    "vec4",
    "vec2i",
    "vec3i",
    "vec4i",
    "vec2u",
    "vec3u",
    "vec4u",
    "vec2f",
    "vec3f",
    "vec4f",
    "vec2h",
    "vec3h",
    "vec4h",
    "mat2x2",
    "mat2x3",
    "mat2x4",
    "mat3x2",
    "mat3x3",
    "mat3x4",
    "mat4x2",
    "mat4x3",
    "mat4x4",
    "mat2x2f",
    "mat2x3f",
    "mat2x4f",
    "mat3x2f",
    "mat3x3f",
    "mat3x4f",
    "mat4x2f",
    "mat4x3f",
    "mat4x4f",
    "mat2x2h",
    "mat2x3h",
    "mat2x4h",
    "mat3x2h",
    "mat3x3h",
    "mat3x4h",
    "mat4x2h",
    "mat4x3h",
    "mat4x4h",
    "array",
    "ptr",
    "atomic",
    "sampler",
    "sampler_comparison",
    "texture_1d",
    "texture_2d",
    "texture_2d_array",
    "texture_3d",
    "texture_cube",
    "texture_cube_array",
    "texture_multisampled_2d",
    "texture_storage_1d",
    "texture_storage_2d",
    "texture_storage_2d_array",
    "texture_storage_3d",
    "texture_depth_2d",
    "texture_depth_2d_array",
    "texture_depth_cube",
    "texture_depth_cube_array",
    "texture_depth_multisampled_2d",
    "texture_external",
];

/// Shader stage attributes.
pub const STAGE_ATTRIBUTES: &[&str] = &["vertex", "fragment", "compute"];

/// Built-in value names usable as attributes.
pub const BUILTIN_ATTRIBUTES: &[&str] = &[
    "position",
    "vertex_index",
    "instance_index",
    "front_facing",
    "frag_depth",
    "local_invocation_id",
    "local_invocation_index",
    "global_invocation_id",
    "workgroup_id",
    "num_workgroups",
    "sample_index",
    "sample_mask",
];

/// Attributes that describe layout, bindings and interface placement.
pub const STRUCTURAL_ATTRIBUTES: &[&str] = &[
    "binding",
    "group",
    "location",
    "builtin",
    "interpolate",
    "invariant",
    "workgroup_size",
    "size",
    "align",
];

/// Keywords that begin a statement which must end with `;`.
pub const STATEMENT_KEYWORDS: &[&str] = &[
    "var", "let", "const", "return", "break", "continue", "discard",
];

/// Returns `true` for a reserved keyword.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Returns `true` for a built-in type name.
pub fn is_builtin_type(word: &str) -> bool {
    BUILTIN_TYPES.contains(&word)
}

/// Returns `true` if `@name` is a recognized attribute: stage, built-in value or structural.
pub fn is_known_attribute(name: &str) -> bool {
    STAGE_ATTRIBUTES.contains(&name)
        || BUILTIN_ATTRIBUTES.contains(&name)
        || STRUCTURAL_ATTRIBUTES.contains(&name)
}
