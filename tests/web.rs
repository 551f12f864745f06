#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn webgl2_context_is_available() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();

    let ctx = canvas
        .get_context("webgl2")
        .expect("getContext threw")
        .expect("WebGL2 not supported");

    assert!(ctx.dyn_into::<web_sys::WebGl2RenderingContext>().is_ok());
}

#[wasm_bindgen_test]
fn canvas_resize_updates_drawing_buffer() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();

    canvas.set_width(640);
    canvas.set_height(480);

    let gl = canvas
        .get_context("webgl2")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::WebGl2RenderingContext>()
        .unwrap();

    assert_eq!(gl.drawing_buffer_width(), 640);
    assert_eq!(gl.drawing_buffer_height(), 480);
}
