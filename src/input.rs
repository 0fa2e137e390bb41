use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::error::SetupError;
use crate::starfield::SharedStarfield;

/// Records the latest pointer position in client coordinates. No clamping;
/// the pointer may sit outside the canvas.
pub fn setup_input(canvas: &HtmlCanvasElement, starfield: SharedStarfield) -> Result<(), SetupError> {
    let mousemove = Closure::wrap(Box::new(move |e: MouseEvent| {
        starfield
            .borrow_mut()
            .set_pointer(e.client_x() as f64, e.client_y() as f64);
    }) as Box<dyn FnMut(MouseEvent)>);
    canvas.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
    mousemove.forget();
    Ok(())
}
