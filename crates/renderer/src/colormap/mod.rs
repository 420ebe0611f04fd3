//! Named colormaps.
//!
//! A [`Colormap`] is a 256-entry lookup table mapping a normalized value in
//! `[0, 1]` to an RGB color. Tables are built from one of two descriptions:
//!
//! - **Segments**: per-channel piecewise-linear breakpoints `(x, y0, y1)`,
//!   the form used by matplotlib's `jet`, `hot` and `gray`.
//! - **Stops**: positioned colors interpolated in RGB or HSV.
//!
//! Colormaps are looked up by name through a [`ColormapRegistry`].

mod builtin;
mod file;
mod registry;

pub use file::{ColorStop, ColormapDefinition, ColormapFile};
pub use registry::ColormapRegistry;

use serde::{Deserialize, Serialize};

/// Number of entries in every lookup table.
pub const LUT_SIZE: usize = 256;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self { r, g, b })
    }

    fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

/// Color space used to interpolate between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    #[default]
    Rgb,
    /// Hue takes the shorter way around the color wheel.
    Hsv,
}

/// One channel breakpoint: at `x` the channel jumps from `below` to `above`.
pub type Segment = (f32, f32, f32);

/// A colormap lookup table with a color for non-finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    name: String,
    lut: Vec<[f32; 3]>,
    /// RGBA used for NaN and infinite inputs.
    bad: [f32; 4],
}

impl Colormap {
    /// Build from per-channel segment data.
    ///
    /// Each channel's breakpoints must start at `x = 0`, end at `x = 1` and
    /// increase monotonically.
    pub fn from_segments(
        name: impl Into<String>,
        red: &[Segment],
        green: &[Segment],
        blue: &[Segment],
    ) -> Result<Self, String> {
        let r = segment_channel(red)?;
        let g = segment_channel(green)?;
        let b = segment_channel(blue)?;

        let lut = (0..LUT_SIZE).map(|i| [r[i], g[i], b[i]]).collect();
        Ok(Self::from_lut(name, lut))
    }

    /// Build from positioned color stops.
    ///
    /// Positions outside the first/last stop take the nearest stop's color.
    pub fn from_stops(
        name: impl Into<String>,
        stops: &[(f32, Color)],
        interpolation: Interpolation,
    ) -> Result<Self, String> {
        if stops.is_empty() {
            return Err("at least one color stop is required".to_string());
        }
        if stops.iter().any(|(pos, _)| !pos.is_finite()) {
            return Err("stop positions must be finite".to_string());
        }

        let mut stops = stops.to_vec();
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));

        let lut = (0..LUT_SIZE)
            .map(|i| {
                let position = i as f32 / (LUT_SIZE - 1) as f32;
                stop_color(&stops, position, interpolation)
            })
            .collect();
        Ok(Self::from_lut(name, lut))
    }

    /// Build from colors spread evenly over `[0, 1]`, interpolated in RGB.
    pub fn from_samples(name: impl Into<String>, samples: &[[f32; 3]]) -> Result<Self, String> {
        if samples.is_empty() {
            return Err("at least one sample is required".to_string());
        }
        let last = (samples.len().max(2) - 1) as f32;
        let lut = (0..LUT_SIZE)
            .map(|i| {
                let t = i as f32 / (LUT_SIZE - 1) as f32 * last;
                let idx = (t.floor() as usize).min(samples.len().saturating_sub(2));
                let frac = (t - idx as f32).clamp(0.0, 1.0);
                let lo = samples[idx];
                let hi = samples[(idx + 1).min(samples.len() - 1)];
                lerp3(lo, hi, frac)
            })
            .collect();
        Ok(Self::from_lut(name, lut))
    }

    fn from_lut(name: impl Into<String>, lut: Vec<[f32; 3]>) -> Self {
        Self {
            name: name.into(),
            lut,
            bad: [0.0, 0.0, 0.0, 0.0],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lookup table, index 0 for the low end.
    pub fn lut(&self) -> &[[f32; 3]] {
        &self.lut
    }

    /// RGBA for non-finite inputs (transparent black).
    pub fn bad_color(&self) -> [f32; 4] {
        self.bad
    }

    /// Color for a normalized value.
    ///
    /// Values are bucketed into the table the way matplotlib does
    /// (`floor(t * N)`); values below 0 or above 1 take the end colors.
    /// Returns `None` for NaN so callers can apply [`Colormap::bad_color`].
    pub fn sample(&self, t: f64) -> Option<[f32; 3]> {
        if t.is_nan() {
            return None;
        }
        let n = self.lut.len();
        let idx = (t * n as f64).floor();
        let idx = if idx < 0.0 {
            0
        } else {
            (idx as usize).min(n - 1)
        };
        Some(self.lut[idx])
    }

    /// The same table back to front, named `<name>_r`.
    pub fn reversed(&self) -> Self {
        let mut lut = self.lut.clone();
        lut.reverse();
        Self {
            name: format!("{}_r", self.name),
            lut,
            bad: self.bad,
        }
    }
}

/// Linear interpolation of one channel from segment breakpoints.
fn segment_channel(segments: &[Segment]) -> Result<Vec<f32>, String> {
    if segments.len() < 2 {
        return Err("segment data needs at least two breakpoints".to_string());
    }
    let first = segments[0].0;
    let last = segments[segments.len() - 1].0;
    if first != 0.0 || last != 1.0 {
        return Err("segment breakpoints must start at 0 and end at 1".to_string());
    }
    if segments.windows(2).any(|w| w[1].0 < w[0].0) {
        return Err("segment breakpoints must be increasing".to_string());
    }

    let mut lut = vec![0.0f32; LUT_SIZE];
    lut[0] = segments[0].2;
    lut[LUT_SIZE - 1] = segments[segments.len() - 1].1;

    for (i, slot) in lut.iter_mut().enumerate().take(LUT_SIZE - 1).skip(1) {
        let x = i as f32 / (LUT_SIZE - 1) as f32;
        // First breakpoint at or after x
        let hi = segments.iter().position(|s| s.0 >= x).unwrap_or(segments.len() - 1);
        let hi = hi.max(1);
        let (x0, _, y_from) = segments[hi - 1];
        let (x1, y_to, _) = segments[hi];
        let span = x1 - x0;
        let t = if span > 0.0 { (x - x0) / span } else { 0.0 };
        *slot = (y_from + t * (y_to - y_from)).clamp(0.0, 1.0);
    }

    Ok(lut)
}

fn stop_color(stops: &[(f32, Color)], position: f32, interpolation: Interpolation) -> [f32; 3] {
    let first = stops[0];
    let last = stops[stops.len() - 1];

    if position <= first.0 {
        return first.1.to_unit();
    }
    if position >= last.0 {
        return last.1.to_unit();
    }

    // First stop strictly after position
    let hi = stops
        .iter()
        .position(|(pos, _)| *pos > position)
        .unwrap_or(stops.len() - 1);
    let (lo_pos, lo_color) = stops[hi - 1];
    let (hi_pos, hi_color) = stops[hi];
    let span = hi_pos - lo_pos;
    let t = if span > 0.0 { (position - lo_pos) / span } else { 0.0 };

    match interpolation {
        Interpolation::Rgb => lerp3(lo_color.to_unit(), hi_color.to_unit(), t),
        Interpolation::Hsv => {
            let [h0, s0, v0] = rgb_to_hsv(lo_color.to_unit());
            let [h1, s1, v1] = rgb_to_hsv(hi_color.to_unit());
            let diff = h1 - h0;
            let mut hue = if diff > 0.5 {
                h0 - t * (1.0 - diff)
            } else if diff < -0.5 {
                h0 + t * (1.0 + diff)
            } else {
                h0 + t * diff
            };
            if hue < 0.0 {
                hue += 1.0;
            } else if hue >= 1.0 {
                hue -= 1.0;
            }
            hsv_to_rgb([hue, s0 + t * (s1 - s0), v0 + t * (v1 - v0)])
        }
    }
}

fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// RGB to HSV, all components in `[0, 1]`. Grays get hue 0.
fn rgb_to_hsv([r, g, b]: [f32; 3]) -> [f32; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta <= f32::EPSILON {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };
    let saturation = if max <= 0.0 { 0.0 } else { delta / max };

    [hue, saturation, max]
}

fn hsv_to_rgb([h, s, v]: [f32; 3]) -> [f32; 3] {
    let h6 = (h.rem_euclid(1.0)) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u32 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
