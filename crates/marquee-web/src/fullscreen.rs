//! Fullscreen request with vendor fallbacks
//!
//! Engines disagree on the method name, so the request walks the standard
//! API followed by the three vendor-prefixed variants and invokes the first
//! one the element actually has. A miss everywhere is reported as
//! [`Error::FullscreenUnsupported`]; the caller decides whether to surface
//! it (the default player logs and moves on).

use js_sys::{Function, Reflect};
use marquee_core::{Error, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlVideoElement;

/// Method names in preference order
const REQUEST_METHODS: [&str; 4] = [
    "requestFullscreen",
    "webkitRequestFullscreen",
    "mozRequestFullScreen",
    "msRequestFullscreen",
];

/// Ask the element to enter fullscreen
pub fn request(element: &HtmlVideoElement) -> Result<()> {
    let target: &JsValue = element.as_ref();
    for name in REQUEST_METHODS {
        if let Some(method) = lookup(target, name) {
            return method
                .call0(target)
                .map(|_| ())
                .map_err(|err| Error::Playback(format!("{name} rejected: {err:?}")));
        }
    }
    Err(Error::FullscreenUnsupported)
}

fn lookup(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}
