use gloo_timers::callback::Interval;
use web_sys::CanvasRenderingContext2d;

use crate::constants::FRAME_INTERVAL_MS;
use crate::random::JsRandom;
use crate::starfield::SharedStarfield;

/// Ticks the starfield every `FRAME_INTERVAL_MS` for the life of the page.
pub fn start_render_loop(starfield: SharedStarfield, ctx: CanvasRenderingContext2d) {
    let mut rng = JsRandom;
    let interval = Interval::new(FRAME_INTERVAL_MS, move || {
        let mut s = starfield.borrow_mut();
        let stats = s.tick(&ctx, &mut rng);
        if stats.respawned > 0 {
            log::debug!(
                "{} star(s) respawned, {} rising, {} line(s), shade {:.1}",
                stats.respawned,
                stats.rising,
                stats.lines,
                s.background_shade()
            );
        }
    });
    // Leak the interval to keep it alive
    std::mem::forget(interval);
}
