use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::constants::{StarfieldConfig, CANVAS_ID};
use crate::error::SetupError;
use crate::random::JsRandom;
use crate::starfield::{SharedStarfield, Starfield};
use crate::{canvas, input, render_loop};

fn setup() -> Result<(), SetupError> {
    let canvas = canvas::get_canvas(CANVAS_ID)?;
    let ctx = canvas::get_canvas_context(&canvas)?;

    let (w, h) = canvas::window_size()?;
    let starfield: SharedStarfield = Rc::new(RefCell::new(Starfield::new(
        StarfieldConfig::default(),
        w,
        h,
        &mut JsRandom,
    )));

    canvas::resize(&canvas, &starfield)?;
    canvas::setup_resize_handler(canvas.clone(), starfield.clone())?;
    input::setup_input(&canvas, starfield.clone())?;
    {
        let s = starfield.borrow();
        let (w, h) = s.bounds();
        log::info!("starfield running: {} stars on {}x{}", s.stars().len(), w, h);
    }
    render_loop::start_render_loop(starfield, ctx);
    Ok(())
}

#[component]
pub fn App() -> impl IntoView {
    // Setup canvas once mounted
    Effect::new(move |_| {
        if let Err(e) = setup() {
            log::error!("starfield setup failed: {}", e);
        }
    });

    view! {
        <canvas id=CANVAS_ID></canvas>
    }
}
