use wasm_bindgen::JsValue;
use web_sys as web;

pub fn print() {
    let (text, styles) = doug_core::banner::console_banner();
    let args = js_sys::Array::new();
    args.push(&JsValue::from_str(&text));
    for style in &styles {
        args.push(&JsValue::from_str(style));
    }
    web::console::log(&args);
}
