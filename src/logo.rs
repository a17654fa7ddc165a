//! Logo compositions built from the drawing primitives.
//!
//! Compositions are reproducible: the scattered dots come from a SHA-256
//! counter stream keyed by [`LogoConfig::seed`], so the same config always
//! yields the same pixels.

use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canvas::Canvas;
use crate::color::{Color, RAINBOW};
use crate::error::{Error, Result};
use crate::geometry::{cc, rect};
use crate::shapes::FilledCircle;

/// Reference size the composition's radii are expressed in.
const BASE_SIZE: f64 = 300.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Width and height of the square canvas
    pub size: u32,
    /// Number of scattered rainbow dots
    pub dots: usize,
    /// Seed for the dot positions, radii and colors
    pub seed: u64,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            size: 300,
            dots: 1000,
            seed: 0,
        }
    }
}

impl LogoConfig {
    fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > i32::MAX as u32 {
            return Err(Error::ConfigError(format!(
                "logo size must be between 1 and {}, got {}",
                i32::MAX,
                self.size
            )));
        }
        Ok(())
    }
}

/// Deterministic pseudo-random values derived from a seed.
struct SeedStream {
    seed: u64,
    counter: u64,
}

impl SeedStream {
    fn new(seed: u64) -> Self {
        Self { seed, counter: 0 }
    }

    fn next_u64(&mut self) -> u64 {
        let mut hasher = Sha256::new();
        hasher.update(self.seed.to_le_bytes());
        hasher.update(self.counter.to_le_bytes());
        self.counter += 1;
        let digest = hasher.finalize();
        let mut word = [0u8; 8];
        word.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(word)
    }

    /// Uniform in `0..n`; `n` must be non-zero.
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Concentric black and white rings, scattered rainbow dots, a rainbow
/// center, a transparent cut-out around the edges and a black round frame.
pub fn amazing_logo(cfg: &LogoConfig) -> Result<Canvas> {
    cfg.validate()?;
    let size = cfg.size as i32;
    let scale = f64::from(size) / BASE_SIZE;
    let mid = size / 2;
    let mut canvas = Canvas::new(rect(0, 0, size, size));

    for i in (1..=size).rev() {
        let ring = if i % 2 == 0 { Color::BLACK } else { Color::WHITE };
        canvas.draw_filled_circle(cc(mid, mid, f64::from(i)), &[ring])?;
    }

    let mut rng = SeedStream::new(cfg.seed);
    for _ in 0..cfg.dots {
        let x = rng.below(cfg.size as u64) as i32;
        let y = rng.below(cfg.size as u64) as i32;
        let r = 1.0 + rng.unit() * 5.0;
        let color = RAINBOW[rng.below(RAINBOW.len() as u64) as usize];
        canvas.draw_filled_circle(cc(x, y, r), &[color])?;
    }

    let center_rings = ((50.0 * scale).round() as i32).max(1);
    for (k, i) in (1..=center_rings).rev().enumerate() {
        canvas.draw_filled_circle(cc(mid, mid, f64::from(i)), &[RAINBOW[k % RAINBOW.len()]])?;
    }

    canvas.draw_circle(cc(mid, mid, 200.0 * scale), 100.0 * scale, &[Color::TRANSPARENT])?;
    canvas.draw_circle(cc(mid, mid, 145.0 * scale), 10.0 * scale, &[Color::BLACK])?;

    debug!(
        "amazing_logo: {}x{} with {} dots (seed {})",
        size, size, cfg.dots, cfg.seed
    );
    Ok(canvas)
}

/// A disk filled in a single pass, cycling through the rainbow pixel by pixel.
pub fn rainbow_disc(size: u32) -> Result<Canvas> {
    LogoConfig {
        size,
        ..Default::default()
    }
    .validate()?;
    let size = size as i32;
    let mid = size / 2;
    let mut canvas = Canvas::new(rect(0, 0, size, size));
    canvas.fill_where(&FilledCircle(cc(mid, mid, f64::from(mid))), &RAINBOW)?;
    Ok(canvas)
}
