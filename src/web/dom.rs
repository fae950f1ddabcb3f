// dom.rs - Window, document and event helpers
//
// Lookups return WebError instead of panicking. Listeners live as long as the
// page, so their closures are leaked.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::error::WebError;

pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

pub fn document() -> Result<Document, WebError> {
    window()?.document().ok_or(WebError::NoDocument)
}

/// Element by id, cast to the expected type
pub fn element<T: JsCast>(id: &str) -> Result<T, WebError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| WebError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| WebError::WrongElement(id.to_string()))
}

/// Attach a click handler for the lifetime of the page
pub fn on_click(id: &str, f: impl FnMut() + 'static) -> Result<(), WebError> {
    let el: HtmlElement = element(id)?;
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    el.set_onclick(Some(cb.as_ref().unchecked_ref()));
    cb.forget();
    Ok(())
}

pub fn on_window(event: &str, f: impl FnMut(web_sys::Event) + 'static) -> Result<(), WebError> {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
    window()?
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(WebError::js)?;
    cb.forget();
    Ok(())
}

pub fn on_document(event: &str, f: impl FnMut(web_sys::Event) + 'static) -> Result<(), WebError> {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
    document()?
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(WebError::js)?;
    cb.forget();
    Ok(())
}

pub fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<i32, WebError> {
    window()?
        .request_animation_frame(f.as_ref().unchecked_ref())
        .map_err(WebError::js)
}
