//! Random colors, either uniform in RGB or drawn in HSL within bounds.
use std::fmt;

use rand::RngCore;
use tracing::info;

use crate::{error::RandgenError, sample};

pub const MAX_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// hue in degrees, saturation and lightness in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// convert a color from HSL to RGB
///
/// `h` is taken modulo 360, `s` and `l` are clamped to `[0, 1]`.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0);
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb {
        r: channel(r1),
        g: channel(g1),
        b: channel(b1),
    }
}

/// convert a color from RGB to HSL
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    Hsl { h, s, l }
}

/// a generated color, with all its usual representations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub rgb: Rgb,
    pub hsl: Hsl,
}

impl Color {
    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{}", hex::encode([self.rgb.r, self.rgb.g, self.rgb.b]))
    }

    /// `rgb(r, g, b)`
    pub fn css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b)
    }

    /// `hsl(h, s%, l%)`, rounded to integers
    pub fn css_hsl(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hsl.h.round() as u32 % 360,
            (self.hsl.s * 100.0).round() as u32,
            (self.hsl.l * 100.0).round() as u32
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.hex(), self.css_rgb(), self.css_hsl())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// every channel uniform in `[0, 255]`
    Rgb,
    /// hue uniform in `[0, 359]`, saturation and lightness uniform within
    /// percentage bounds
    Hsl {
        saturation: (u8, u8),
        lightness: (u8, u8),
    },
}

impl ColorMode {
    pub fn pastel() -> Self {
        Self::Hsl {
            saturation: (60, 90),
            lightness: (75, 90),
        }
    }

    pub fn vivid() -> Self {
        Self::Hsl {
            saturation: (80, 100),
            lightness: (45, 55),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorConfig {
    pub count: usize,
    pub mode: ColorMode,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            count: 1,
            mode: ColorMode::Rgb,
        }
    }
}

impl ColorConfig {
    pub fn validate(&self) -> Result<(), RandgenError> {
        RandgenError::check_bounds("count", self.count, 1, MAX_COUNT as i64)?;
        if let ColorMode::Hsl {
            saturation,
            lightness,
        } = self.mode
        {
            for (key, (min, max)) in [("saturation", saturation), ("lightness", lightness)] {
                sample::range_size(min as i64, max as i64)?;
                RandgenError::check_bounds(key, max, 0, 100)?;
            }
        }
        Ok(())
    }
}

fn generate_one(mode: ColorMode, rng: &mut impl RngCore) -> Result<Color, RandgenError> {
    match mode {
        ColorMode::Rgb => {
            let channels = sample::draw_many(0, 255, 3, rng)?;
            let rgb = Rgb {
                r: channels[0] as u8,
                g: channels[1] as u8,
                b: channels[2] as u8,
            };
            Ok(Color {
                rgb,
                hsl: rgb_to_hsl(rgb),
            })
        }
        ColorMode::Hsl {
            saturation,
            lightness,
        } => {
            let hsl = Hsl {
                h: sample::draw(0, 359, rng)? as f64,
                s: sample::draw(saturation.0 as i64, saturation.1 as i64, rng)? as f64 / 100.0,
                l: sample::draw(lightness.0 as i64, lightness.1 as i64, rng)? as f64 / 100.0,
            };
            Ok(Color {
                rgb: hsl_to_rgb(hsl),
                hsl,
            })
        }
    }
}

/// `config.count` colors
pub fn generate(config: &ColorConfig, rng: &mut impl RngCore) -> Result<Vec<Color>, RandgenError> {
    config.validate()?;
    info!("generating {} colors ({:?})", config.count, config.mode);

    (0..config.count)
        .map(|_| generate_one(config.mode, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::error::RandgenError;

    use super::{generate, hsl_to_rgb, rgb_to_hsl, Color, ColorConfig, ColorMode, Hsl, Rgb};

    #[test]
    fn hsl_conversion() {
        let cases = vec![
            ((0.0, 1.0, 0.5), (255, 0, 0)),
            ((120.0, 1.0, 0.5), (0, 255, 0)),
            ((240.0, 1.0, 0.5), (0, 0, 255)),
            ((60.0, 1.0, 0.5), (255, 255, 0)),
            ((0.0, 0.0, 1.0), (255, 255, 255)),
            ((0.0, 0.0, 0.0), (0, 0, 0)),
            ((210.0, 0.5, 0.25), (32, 64, 96)),
            ((360.0, 1.0, 0.5), (255, 0, 0)),
        ];

        for ((h, s, l), (r, g, b)) in cases {
            assert_eq!(
                hsl_to_rgb(Hsl { h, s, l }),
                Rgb { r, g, b },
                "hsl({}, {}, {})",
                h,
                s,
                l
            );
        }
    }

    #[test]
    fn rgb_hsl_rgb_is_stable() {
        for rgb in [
            Rgb { r: 12, g: 200, b: 77 },
            Rgb { r: 255, g: 128, b: 0 },
            Rgb { r: 90, g: 90, b: 90 },
        ] {
            assert_eq!(hsl_to_rgb(rgb_to_hsl(rgb)), rgb);
        }
    }

    #[test]
    fn formatting() {
        let rgb = Rgb { r: 255, g: 0, b: 10 };
        let color = Color {
            rgb,
            hsl: rgb_to_hsl(rgb),
        };
        assert_eq!(color.hex(), "#ff000a");
        assert_eq!(color.css_rgb(), "rgb(255, 0, 10)");
        assert_eq!(color.css_hsl(), "hsl(358, 100%, 50%)");
    }

    #[test]
    fn generated_colors_respect_bounds() {
        let rng = &mut StdRng::seed_from_u64(0);

        let config = ColorConfig {
            count: 100,
            mode: ColorMode::pastel(),
        };
        for color in generate(&config, rng).unwrap() {
            assert!((0.6..=0.9).contains(&color.hsl.s));
            assert!((0.75..=0.9).contains(&color.hsl.l));
            assert_eq!(color.hex().len(), 7);
        }

        assert_eq!(generate(&ColorConfig::default(), rng).unwrap().len(), 1);

        let config = ColorConfig {
            count: 1,
            mode: ColorMode::Hsl {
                saturation: (90, 10),
                lightness: (0, 100),
            },
        };
        assert_eq!(
            generate(&config, rng),
            Err(RandgenError::InvalidRange { min: 90, max: 10 })
        );

        let config = ColorConfig {
            count: 1,
            mode: ColorMode::Hsl {
                saturation: (0, 100),
                lightness: (0, 120),
            },
        };
        assert!(matches!(
            generate(&config, rng),
            Err(RandgenError::OutOfBounds { found: 120, .. })
        ));
    }
}
