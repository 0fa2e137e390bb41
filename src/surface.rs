use web_sys::CanvasRenderingContext2d;

/// The drawing primitives the starfield needs. Implemented for the browser
/// 2D context; tests record calls instead. There is no clear: earlier frames
/// stay on the canvas.
pub trait Surface {
    /// White filled circle at `alpha` opacity.
    fn fill_circle(&self, x: f64, y: f64, radius: f64, alpha: f64);
    /// White line of `width`.
    fn stroke_line(&self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64);
}

impl Surface for CanvasRenderingContext2d {
    fn fill_circle(&self, x: f64, y: f64, radius: f64, alpha: f64) {
        self.set_fill_style_str(&format!("rgba(255, 255, 255, {})", alpha));
        self.begin_path();
        let _ = self.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.fill();
    }

    fn stroke_line(&self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64) {
        self.set_stroke_style_str("rgb(255,255,255)");
        self.set_line_width(width);
        self.begin_path();
        self.move_to(x1, y1);
        self.line_to(x2, y2);
        self.stroke();
    }
}
