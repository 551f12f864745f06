use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlShader,
};

use crate::frame::{run_frame, FrameClock, Pointer, SurfaceSize};
use crate::shaders::{FRAGMENT_SHADER, VERTEX_SHADER};

// Quad spanning clip space, drawn as a triangle fan.
const QUAD: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0];

/// Start the render loop: build the program, upload the quad, wire resize
/// and pointer listeners, then kick off the self-rescheduling frame callback.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or("WebGL2 not supported")?
        .dyn_into()?;

    let program = link_program(
        &gl,
        &compile_shader(&gl, GL::VERTEX_SHADER, VERTEX_SHADER)?,
        &compile_shader(&gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER)?,
    )?;
    gl.use_program(Some(&program));

    upload_quad(&gl, &program);

    let time_loc = gl.get_uniform_location(&program, "time");
    let resolution_loc = gl.get_uniform_location(&program, "resolution");
    let mouse_loc = gl.get_uniform_location(&program, "mouse");

    // Size the drawable to the viewport now and on every resize.
    fit_viewport(&gl, &canvas);
    let resize_closure = {
        let gl = gl.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            fit_viewport(&gl, &canvas);
        }) as Box<dyn FnMut()>)
    };
    window()
        .unwrap()
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Pointer state: written by the mousemove listener, read once per frame.
    let pointer = Rc::new(Cell::new(Pointer::default()));
    let mouse_closure = {
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            let win = window().unwrap();
            let w = win.inner_width().unwrap().as_f64().unwrap();
            let h = win.inner_height().unwrap().as_f64().unwrap();
            pointer.set(Pointer::from_client(
                event.client_x() as f64,
                event.client_y() as f64,
                w,
                h,
            ));
        }) as Box<dyn FnMut(web_sys::MouseEvent)>)
    };
    window()
        .unwrap()
        .add_event_listener_with_callback("mousemove", mouse_closure.as_ref().unchecked_ref())?;
    mouse_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut clock = FrameClock::new();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let size = SurfaceSize {
            width: gl.drawing_buffer_width() as u32,
            height: gl.drawing_buffer_height() as u32,
        };
        run_frame(&mut clock, size, pointer.get(), now_ms, &mut |inputs| {
            gl.uniform1f(time_loc.as_ref(), inputs.time);
            gl.uniform2f(
                resolution_loc.as_ref(),
                inputs.resolution[0],
                inputs.resolution[1],
            );
            gl.uniform2f(mouse_loc.as_ref(), inputs.mouse.x, inputs.mouse.y);

            gl.clear(GL::COLOR_BUFFER_BIT);
            gl.draw_arrays(GL::TRIANGLE_FAN, 0, 4);
        });

        // schedule next
        window()
            .unwrap()
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .unwrap();
    }) as Box<dyn FnMut(f64)>));

    window()
        .unwrap()
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;

    Ok(())
}

/// Match the canvas backing store to the viewport and reset the GL viewport
/// rect. Best-effort and idempotent.
fn fit_viewport(gl: &GL, canvas: &HtmlCanvasElement) {
    let win = window().unwrap();
    let w = win.inner_width().unwrap().as_f64().unwrap();
    let h = win.inner_height().unwrap().as_f64().unwrap();
    let size = SurfaceSize::from_viewport(w, h);
    canvas.set_width(size.width);
    canvas.set_height(size.height);
    gl.viewport(0, 0, size.width as i32, size.height as i32);
}

/// Compile one shader stage; a driver rejection aborts startup with the
/// driver's diagnostic.
fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl
        .create_shader(kind)
        .ok_or("unable to create shader object")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        Err(JsValue::from_str(
            &gl.get_shader_info_log(&shader)
                .unwrap_or_else(|| "unknown shader compile error".into()),
        ))
    }
}

fn link_program(
    gl: &GL,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, JsValue> {
    let program = gl.create_program().ok_or("unable to create program")?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        Err(JsValue::from_str(
            &gl.get_program_info_log(&program)
                .unwrap_or_else(|| "unknown program link error".into()),
        ))
    }
}

/// Upload the static quad once and bind its `position` attribute.
fn upload_quad(gl: &GL, program: &WebGlProgram) {
    let buffer = gl.create_buffer();
    gl.bind_buffer(GL::ARRAY_BUFFER, buffer.as_ref());
    gl.buffer_data_with_array_buffer_view(
        GL::ARRAY_BUFFER,
        &js_sys::Float32Array::from(QUAD.as_slice()),
        GL::STATIC_DRAW,
    );

    let position = gl.get_attrib_location(program, "position") as u32;
    gl.enable_vertex_attrib_array(position);
    gl.vertex_attrib_pointer_with_i32(position, 2, GL::FLOAT, false, 0, 0);
}
