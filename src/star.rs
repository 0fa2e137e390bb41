use crate::constants::StarfieldConfig;
use crate::random::RandomSource;

/// Direction a star's brightness is moving. Encoded by the sign of
/// [`Star::increment`]; this is only a named view of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Twinkle {
    Rising,
    Falling,
}

/// What happened to a star during one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarEvent {
    /// Brightness moved without crossing a bound.
    Drifted,
    /// Brightness reached 1; the star now fades.
    Peaked,
    /// Brightness reached 0; the star moved and now brightens.
    Respawned,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub brightness: f64,
    pub increment: f64,
}

impl Star {
    pub fn new(w: f64, h: f64, config: &StarfieldConfig, rng: &mut impl RandomSource) -> Self {
        let x = rng.next_f64() * w;
        let y = rng.next_f64() * h;
        let brightness = rng.next_f64();
        let mut increment = rng.range(config.min_increment, config.max_increment);
        if rng.coin() {
            increment = -increment;
        }
        Self { x, y, brightness, increment }
    }

    pub fn twinkle(&self) -> Twinkle {
        if self.increment > 0.0 {
            Twinkle::Rising
        } else {
            Twinkle::Falling
        }
    }

    /// Steps brightness by one increment. At the top the star starts fading;
    /// at the bottom it is moved to a random spot inside `w`×`h` and starts
    /// brightening again.
    pub fn update(&mut self, w: f64, h: f64, rng: &mut impl RandomSource) -> StarEvent {
        self.brightness += self.increment;

        if self.brightness >= 1.0 {
            self.increment = -self.increment.abs();
            StarEvent::Peaked
        } else if self.brightness <= 0.0 {
            self.increment = self.increment.abs();
            self.respawn(w, h, rng);
            StarEvent::Respawned
        } else {
            StarEvent::Drifted
        }
    }

    fn respawn(&mut self, w: f64, h: f64, rng: &mut impl RandomSource) {
        self.x = rng.next_f64() * w;
        self.y = rng.next_f64() * h;
    }
}
