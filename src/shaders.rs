//! GLSL sources for the two-stage program. The fragment constants define the
//! visual texture and must stay exactly as written; `pattern.rs` mirrors the
//! formulas in Rust for host-side testing.

/// Pass-through vertex stage. `vUv` remaps clip space to [0,1] for
/// interpolation; the fragment stage derives its own coordinate from
/// `gl_FragCoord` instead but the varying is produced for completeness.
pub const VERTEX_SHADER: &str = r#"
attribute vec4 position;
varying vec2 vUv;

void main() {
  vUv = position.xy * 0.5 + 0.5;
  gl_Position = position;
}
"#;

pub const FRAGMENT_SHADER: &str = r#"
precision mediump float;

uniform float time;
uniform vec2 resolution;
uniform vec2 mouse;

varying vec2 vUv;

void main() {
    vec2 st = gl_FragCoord.xy / resolution;
    vec2 p = -1.0 + 2.0 * st;

    float a = time * 40.0;
    float d, e, f, g = 1.0 / 12.0, h, i, r, q;
    e = 20.0 * (p.x * 0.5 + 0.5);
    f = 20.0 * (p.y * 0.5 + 0.5);
    i = 100.0 + sin(e * g + a / 150.0) * 20.0;
    d = 100.0 + cos(f * g / 2.0) * 18.0 + cos(e * g) * 7.0;
    r = sqrt(pow(abs(i - e), 2.0) + pow(abs(d - f), 2.0));
    q = f / r;
    e = (r * cos(q)) - a / 2.0;
    f = (r * sin(q)) - a / 2.0;
    d = sin(e * g) * 176.0 + sin(e * g) * 164.0 + r;
    h = ((f + d) + a / 2.0) * g;
    i = cos(h + r * p.x / 1.3) * (e + e + a) + cos(q * g * 6.0) * (r + h / 3.0);
    h = sin(f * g) * 144.0 - sin(e * g) * 212.0 * p.x;
    h = (h + (f - e) * q + sin(r - (a + h) / 7.0) * 10.0 + i / 4.0) * g;

    float complexShape = i + sin(time * 0.5) * 0.5;

    float mouseDist = length(mouse - st) * 5.0;
    float pulse = sin(mouseDist * 3.0 + time * 1.5) * 0.2 + 0.8;

    float wavePattern = sin(p.x * 25.0 + time * 0.6) * 0.5 + cos(p.y * 15.0 + time * 0.8) * 0.5;
    float finalPattern = complexShape + wavePattern * 0.4;

    vec3 color = vec3(
        (finalPattern / 2.0 + d / 10.0) * pulse,
        (finalPattern / 1.8 + d / 14.0) * 0.9,
        finalPattern * 0.8 + pulse * 0.1
    );

    color.r += sin(time * 0.5) * 0.2;
    color.g += cos(time * 0.3) * 0.2;
    color.b += sin(time * 0.7) * 0.2;

    color = clamp(color, 0.0, 1.0);

    gl_FragColor = vec4(color, 1.0);
}
"#;
