// color.rs - Temperature to color
//
// Piecewise empirical black-body fit (input in Kelvin, scaled by 1/100),
// channels clamped to [0, 255] and then dimmed below 2200 K.
// The fit is meant for roughly 1000 K - 40000 K; outside that range the
// clamping still yields a valid color.

/// Below this temperature the sphere fades toward black
pub const FULL_BRIGHTNESS_K: f64 = 2200.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        (
            self.r.clamp(0.0, 255.0) as u8,
            self.g.clamp(0.0, 255.0) as u8,
            self.b.clamp(0.0, 255.0) as u8,
        )
    }

    /// CSS color string, unrounded like the canvas accepts it
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::ops::Mul<f64> for Color {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Self { r: self.r * s, g: self.g * s, b: self.b * s }
    }
}

/// Clamped black-body channels before luminance scaling
pub fn blackbody_chroma(t_kelvin: f64) -> Color {
    if !t_kelvin.is_finite() || t_kelvin <= 0.0 {
        return Color::BLACK;
    }

    let t = t_kelvin / 100.0;
    let (r, g, b) = if t <= 66.0 {
        let g = 99.4708025861 * t.ln() - 161.1195681661;
        let b = if t <= 19.0 {
            0.0
        } else {
            138.5177312231 * (t - 10.0).ln() - 305.0447927307
        };
        (255.0, g, b)
    } else {
        let r = 329.698727446 * (t - 60.0).powf(-0.1332047592);
        let g = 288.1221695283 * (t - 60.0).powf(-0.0755148492);
        (r, g, 255.0)
    };

    Color::new(channel(r), channel(g), channel(b))
}

/// Brightness factor in [0, 1]
pub fn luminance(t_kelvin: f64) -> f64 {
    if !t_kelvin.is_finite() || t_kelvin <= 0.0 {
        return 0.0;
    }
    (t_kelvin / FULL_BRIGHTNESS_K).min(1.0)
}

pub fn color_for_temperature(t_kelvin: f64) -> Color {
    blackbody_chroma(t_kelvin) * luminance(t_kelvin)
}

// max/min (not clamp) so NaN lands on 0
#[inline]
fn channel(v: f64) -> f64 {
    v.max(0.0).min(255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn in_range(c: Color) -> bool {
        c.channels().iter().all(|v| (0.0..=255.0).contains(v))
    }

    #[test]
    fn channels_stay_in_range() {
        let mut t = 0.5;
        while t <= 50_000.0 {
            let c = color_for_temperature(t);
            assert!(in_range(c), "{t} K gave {c:?}");
            t *= 1.07;
        }
        assert!(in_range(color_for_temperature(50_000.0)));
    }

    #[test]
    fn color_is_chroma_times_luminance() {
        for t in [50.0, 800.0, 1500.0, 2200.0, 6500.0, 12_000.0] {
            let c = color_for_temperature(t);
            let base = blackbody_chroma(t) * luminance(t);
            assert_relative_eq!(c.r, base.r);
            assert_relative_eq!(c.g, base.g);
            assert_relative_eq!(c.b, base.b);
        }
    }

    #[test]
    fn luminance_is_monotone_and_capped() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let l = luminance(i as f64 * 50.0);
            assert!(l >= prev);
            assert!(l <= 1.0);
            prev = l;
        }
        assert_eq!(luminance(FULL_BRIGHTNESS_K), 1.0);
        assert_eq!(luminance(1e6), 1.0);
    }

    #[test]
    fn warm_and_cool_branches() {
        // Candle light: full red, no blue
        let c = blackbody_chroma(1500.0);
        assert_eq!(c.r, 255.0);
        assert_eq!(c.b, 0.0);
        assert!(c.g > 0.0 && c.g < 255.0);

        // Hot star: full blue, red below max
        let c = blackbody_chroma(20_000.0);
        assert_eq!(c.b, 255.0);
        assert!(c.r < 255.0);
    }

    #[test]
    fn cold_sphere_is_dim_red() {
        // 101 K: green fit is negative and clamps to zero
        let c = color_for_temperature(101.0);
        assert_relative_eq!(c.r, 255.0 * 101.0 / 2200.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn degenerate_temperatures_are_black() {
        assert_eq!(color_for_temperature(0.0), Color::BLACK);
        assert_eq!(color_for_temperature(-40.0), Color::BLACK);
        assert_eq!(color_for_temperature(f64::NAN), Color::BLACK);
        assert_eq!(color_for_temperature(f64::INFINITY), Color::BLACK);
    }

    #[test]
    fn css_and_rgb_forms() {
        let c = Color::new(255.0, 12.5, 0.0);
        assert_eq!(c.to_css(), "rgb(255, 12.5, 0)");
        assert_eq!(c.to_rgb(), (255, 12, 0));
    }
}
