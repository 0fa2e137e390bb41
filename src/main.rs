mod app;
mod constants;
mod error;
mod geometry;
mod random;
mod star;
mod surface;
mod starfield;
mod canvas;
mod input;
mod render_loop;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    leptos::mount::mount_to_body(app::App);
}
