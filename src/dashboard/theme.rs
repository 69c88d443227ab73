//! Local theme state. Never sent to or derived from the server.

use std::fmt;

pub const MAX_HUE: u16 = 360;
pub const DEFAULT_PRIMARY_HUE: u16 = 255;
pub const DEFAULT_SECONDARY_HUE: u16 = 222;

const ACCENT_SATURATION: f64 = 0.7;
const PRIMARY_LIGHTNESS: f64 = 0.6;
const SECONDARY_LIGHTNESS: f64 = 0.5;

/// Hue in degrees, always within 0..=360.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hue(u16);

impl Hue {
    pub fn new(degrees: i64) -> Hue {
        Hue(degrees.clamp(0, MAX_HUE as i64) as u16)
    }

    pub fn degrees(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// `saturation` and `lightness` are fractions in 0.0..=1.0.
pub fn hsl_to_rgb(hue: Hue, saturation: f64, lightness: f64) -> Rgb {
    let h = (hue.degrees() % MAX_HUE) as f64 / 60.0;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accents {
    pub primary: Rgb,
    pub secondary: Rgb,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    primary_hue: Hue,
    secondary_hue: Hue,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            primary_hue: Hue(DEFAULT_PRIMARY_HUE),
            secondary_hue: Hue(DEFAULT_SECONDARY_HUE),
        }
    }
}

impl Theme {
    pub fn primary_hue(&self) -> Hue {
        self.primary_hue
    }

    pub fn secondary_hue(&self) -> Hue {
        self.secondary_hue
    }

    /// Returns the stored (clamped) value.
    pub fn set_primary_hue(&mut self, degrees: i64) -> Hue {
        self.primary_hue = Hue::new(degrees);
        self.primary_hue
    }

    /// Returns the stored (clamped) value.
    pub fn set_secondary_hue(&mut self, degrees: i64) -> Hue {
        self.secondary_hue = Hue::new(degrees);
        self.secondary_hue
    }

    /// Accent colors derived from the current hues.
    pub fn accents(&self) -> Accents {
        Accents {
            primary: hsl_to_rgb(self.primary_hue, ACCENT_SATURATION, PRIMARY_LIGHTNESS),
            secondary: hsl_to_rgb(self.secondary_hue, ACCENT_SATURATION, SECONDARY_LIGHTNESS),
        }
    }
}
