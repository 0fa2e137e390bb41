use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::error::SetupError;
use crate::starfield::SharedStarfield;

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

pub fn get_canvas(id: &str) -> Result<HtmlCanvasElement, SetupError> {
    let document = window()?.document().ok_or(SetupError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::CanvasMissing(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SetupError::NotACanvas(id.to_string()))
}

pub fn get_canvas_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SetupError> {
    canvas
        .get_context("2d")?
        .ok_or(SetupError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SetupError::ContextUnavailable)
}

/// Inner size of the browser window in CSS pixels.
pub fn window_size() -> Result<(f64, f64), SetupError> {
    let window = window()?;
    let w = dimension("innerWidth", window.inner_width()?.as_f64())?;
    let h = dimension("innerHeight", window.inner_height()?.as_f64())?;
    Ok((w, h))
}

fn dimension(name: &str, value: Option<f64>) -> Result<f64, SetupError> {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(v) => Err(SetupError::Js(format!("{} is {}", name, v))),
        None => Err(SetupError::Js(format!("{} is not a number", name))),
    }
}

/// Fits the canvas to the window and tells the starfield about the new bounds.
pub fn resize(canvas: &HtmlCanvasElement, starfield: &SharedStarfield) -> Result<(f64, f64), SetupError> {
    let (w, h) = window_size()?;
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    starfield.borrow_mut().resize(w, h);
    Ok((w, h))
}

pub fn setup_resize_handler(canvas: HtmlCanvasElement, starfield: SharedStarfield) -> Result<(), SetupError> {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        match resize(&canvas, &starfield) {
            Ok((w, h)) => log::debug!("canvas resized to {}x{}", w, h),
            Err(e) => log::warn!("resize failed: {}", e),
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    window()?.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_accepts_size() {
        assert_eq!(dimension("innerWidth", Some(1280.0)).unwrap(), 1280.0);
        assert_eq!(dimension("innerHeight", Some(0.0)).unwrap(), 0.0);
    }

    #[test]
    fn test_dimension_rejects_non_number() {
        let err = dimension("innerWidth", None).unwrap_err();
        assert_eq!(err.to_string(), "js error: innerWidth is not a number");
    }

    #[test]
    fn test_dimension_rejects_nan_and_negative() {
        assert!(matches!(dimension("innerHeight", Some(f64::NAN)), Err(SetupError::Js(_))));
        assert!(matches!(dimension("innerHeight", Some(-1.0)), Err(SetupError::Js(_))));
    }
}
