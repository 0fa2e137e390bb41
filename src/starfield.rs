use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::StarfieldConfig;
use crate::geometry::dist;
use crate::random::RandomSource;
use crate::star::{Star, StarEvent, Twinkle};
use crate::surface::Surface;

/// Counts from one tick, for debug logging.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub lines: usize,
    pub respawned: usize,
    /// Stars brightening after the tick.
    pub rising: usize,
}

pub struct Starfield {
    config: StarfieldConfig,
    stars: Vec<Star>,
    time: f64,
    pointer: Option<(f64, f64)>,
    width: f64,
    height: f64,
}

pub type SharedStarfield = Rc<RefCell<Starfield>>;

impl Starfield {
    pub fn new(config: StarfieldConfig, w: f64, h: f64, rng: &mut impl RandomSource) -> Self {
        let stars = (0..config.star_count)
            .map(|_| Star::new(w, h, &config, rng))
            .collect();
        Self {
            config,
            stars,
            time: 0.0,
            pointer: None,
            width: w,
            height: h,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    /// New canvas size. Only affects where stars respawn.
    pub fn resize(&mut self, w: f64, h: f64) {
        self.width = w;
        self.height = h;
    }

    /// Grey level derived from the phase accumulator. Not drawn anywhere.
    pub fn background_shade(&self) -> f64 {
        self.time.sin() * 50.0 + 10.0
    }

    /// Whether the star at `index` connects to the pointer this frame.
    fn links_to_pointer(&self, index: usize, star: &Star) -> Option<(f64, f64)> {
        if index % 2 != 0 {
            return None;
        }
        let (px, py) = self.pointer?;
        (dist(star.x, star.y, px, py) < self.config.line_distance).then_some((px, py))
    }

    pub fn tick(&mut self, surface: &impl Surface, rng: &mut impl RandomSource) -> FrameStats {
        let mut stats = FrameStats::default();
        self.time += self.config.time_step;

        for i in 0..self.stars.len() {
            let star = &mut self.stars[i];
            surface.fill_circle(star.x, star.y, self.config.star_radius, star.brightness);
            if star.update(self.width, self.height, rng) == StarEvent::Respawned {
                stats.respawned += 1;
            }

            let star = &self.stars[i];
            if star.twinkle() == Twinkle::Rising {
                stats.rising += 1;
            }
            if let Some((px, py)) = self.links_to_pointer(i, star) {
                surface.stroke_line(star.x, star.y, px, py, self.config.line_width);
                stats.lines += 1;
            }
        }
        stats
    }
}
