//! Per-frame state shared between the browser event layer and the render
//! loop: pointer position, drawable dimensions, and the frame clock. All of
//! it is plain data so it can be exercised by host-side `cargo test`.

/// Normalized pointer position, origin bottom-left.
///
/// Single writer (the `mousemove` listener), single reader (the frame
/// callback); both run on the same thread so no synchronisation is needed
/// beyond `Cell` interior mutability at the call site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Default for Pointer {
    /// Centre of the viewport, used until the first move event arrives.
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

impl Pointer {
    /// Normalizes client-pixel coordinates against the viewport size.
    /// Pixel y grows downward, normalized y grows upward (y=0 px maps to 1.0).
    pub fn from_client(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> Self {
        Self {
            x: (client_x / viewport_w).clamp(0.0, 1.0) as f32,
            y: (1.0 - client_y / viewport_h).clamp(0.0, 1.0) as f32,
        }
    }
}

/// Pixel dimensions of the drawable buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Truncates the (possibly fractional) CSS viewport size to backing-store
    /// pixels. Idempotent: feeding the same viewport twice yields the same
    /// dimensions.
    pub fn from_viewport(viewport_w: f64, viewport_h: f64) -> Self {
        Self {
            width: viewport_w as u32,
            height: viewport_h as u32,
        }
    }
}

/// Converts `requestAnimationFrame` timestamps (ms, arbitrary epoch) into
/// elapsed seconds starting at 0.0 on the first tick.
#[derive(Default)]
pub struct FrameClock {
    epoch_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let epoch = *self.epoch_ms.get_or_insert(now_ms);
        ((now_ms - epoch) * 0.001) as f32
    }
}

/// The three shader inputs fed once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    /// Seconds since the first frame.
    pub time: f32,
    /// Drawable buffer size in pixels.
    pub resolution: [f32; 2],
    /// Normalized pointer position.
    pub mouse: Pointer,
}

/// Runs one iteration of the render loop: advances the clock, assembles the
/// uniform values and hands them to `draw`, which clears and issues the draw
/// call. Factored out of the wasm layer so the loop can be driven by
/// simulated refresh callbacks in tests.
pub fn run_frame(
    clock: &mut FrameClock,
    size: SurfaceSize,
    pointer: Pointer,
    now_ms: f64,
    draw: &mut dyn FnMut(&FrameInputs),
) {
    let inputs = FrameInputs {
        time: clock.tick(now_ms),
        resolution: [size.width as f32, size.height as f32],
        mouse: pointer,
    };
    draw(&inputs);
}
