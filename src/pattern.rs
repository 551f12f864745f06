//! Pure-Rust mirror of the fragment stage in `shaders.rs`, formula for
//! formula in f32, so the pattern's behaviour can be checked on the host
//! without a GPU. Local names (`a`, `d`, `e`, `f`, ...) intentionally match
//! the GLSL.

use crate::frame::Pointer;

/// Low-amplitude per-channel offsets added after the base color.
pub fn channel_offsets(time: f32) -> [f32; 3] {
    [
        (time * 0.5).sin() * 0.2,
        (time * 0.3).cos() * 0.2,
        (time * 0.7).sin() * 0.2,
    ]
}

/// Evaluates one fragment. `st` is the normalized screen coordinate in
/// [0,1]². Returns RGBA with each color channel clamped to [0,1] and alpha
/// fixed at 1.
#[allow(unused_assignments)] // the GLSL leaves the last `h` unread too
pub fn eval_fragment(time: f32, mouse: Pointer, st: [f32; 2]) -> [f32; 4] {
    let p = [-1.0 + 2.0 * st[0], -1.0 + 2.0 * st[1]];

    let a = time * 40.0;
    let g = 1.0 / 12.0;
    let mut e = 20.0 * (p[0] * 0.5 + 0.5);
    let mut f = 20.0 * (p[1] * 0.5 + 0.5);
    let mut i = 100.0 + (e * g + a / 150.0).sin() * 20.0;
    let mut d = 100.0 + (f * g / 2.0).cos() * 18.0 + (e * g).cos() * 7.0;
    let r = ((i - e).abs().powf(2.0) + (d - f).abs().powf(2.0)).sqrt();
    let q = f / r;
    e = (r * q.cos()) - a / 2.0;
    f = (r * q.sin()) - a / 2.0;
    d = (e * g).sin() * 176.0 + (e * g).sin() * 164.0 + r;
    let mut h = ((f + d) + a / 2.0) * g;
    i = (h + r * p[0] / 1.3).cos() * (e + e + a) + (q * g * 6.0).cos() * (r + h / 3.0);
    h = (f * g).sin() * 144.0 - (e * g).sin() * 212.0 * p[0];
    h = (h + (f - e) * q + (r - (a + h) / 7.0).sin() * 10.0 + i / 4.0) * g;

    let complex_shape = i + (time * 0.5).sin() * 0.5;

    let mouse_dist = (mouse.x - st[0]).hypot(mouse.y - st[1]) * 5.0;
    let pulse = (mouse_dist * 3.0 + time * 1.5).sin() * 0.2 + 0.8;

    let wave_pattern = (p[0] * 25.0 + time * 0.6).sin() * 0.5 + (p[1] * 15.0 + time * 0.8).cos() * 0.5;
    let final_pattern = complex_shape + wave_pattern * 0.4;

    let mut color = [
        (final_pattern / 2.0 + d / 10.0) * pulse,
        (final_pattern / 1.8 + d / 14.0) * 0.9,
        final_pattern * 0.8 + pulse * 0.1,
    ];

    let offsets = channel_offsets(time);
    for (c, o) in color.iter_mut().zip(offsets) {
        *c = (*c + o).clamp(0.0, 1.0);
    }

    [color[0], color[1], color[2], 1.0]
}
