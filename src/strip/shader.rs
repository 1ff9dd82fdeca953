//! Heuristic for strings that probably hold shader source
//!
//! Graphics code frequently embeds GLSL in triple-quoted strings, which
//! look exactly like docstrings to the statement tracker. A keyword count
//! keeps them apart: ordinary documentation rarely mentions two of these.

const SHADER_KEYWORDS: &[&str] = &[
    "void main",
    "gl_fragcolor",
    "gl_fragcoord",
    "gl_position",
    "sampler2d",
    "uniform",
    "varying",
    "#version",
    "precision mediump float",
    "vec2",
    "vec3",
    "vec4",
    "mat3",
    "mat4",
];

const SCORE_THRESHOLD: usize = 2;

/// Case-insensitive substring scoring against the keyword list
pub fn looks_like_shader(text: &str) -> bool {
    let snippet = text.to_lowercase();
    let score = SHADER_KEYWORDS
        .iter()
        .filter(|keyword| snippet.contains(*keyword))
        .count();
    score >= SCORE_THRESHOLD
}
