//! Numeric conversions between hub ranges and protocol ranges.
//!
//! Hub brightness is 0–255, protocol brightness is a 0–100 percentage.
//! Hub color temperature is in mireds, the protocol speaks kelvin.
//! Hub volume is a 0.0–1.0 level, the protocol speaks 0–100.

/// A value fell outside the range a conversion accepts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("{name} {value} is outside {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{name} must be non-zero")]
    Zero { name: &'static str },
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ConversionError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ConversionError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}

/// Clamp a percentage into `0..=100`.
#[must_use]
pub fn clamp_percent(value: i64) -> i64 {
    value.clamp(0, 100)
}

/// Hub brightness (0–255) to a protocol percentage, half rounding up.
#[must_use]
pub fn brightness_to_percent(brightness: f64) -> i64 {
    clamp_percent(round_to_i64(brightness / 255.0 * 100.0))
}

/// Protocol percentage to hub brightness (0–255).
#[must_use]
pub fn percent_to_brightness(percent: i64) -> i64 {
    #[allow(clippy::cast_precision_loss)]
    let pct = clamp_percent(percent) as f64;
    round_to_i64(pct * 255.0 / 100.0)
}

/// Current hub brightness shifted by a percentage delta, clamped to `0..=100`.
#[must_use]
pub fn adjust_brightness_percent(brightness: f64, delta: i64) -> i64 {
    clamp_percent(brightness_to_percent(brightness).saturating_add(delta))
}

/// Convert kelvin to mireds.
///
/// # Errors
///
/// Returns [`ConversionError::Zero`] for a zero or negative temperature.
pub fn kelvin_to_mired(kelvin: i64) -> Result<i64, ConversionError> {
    if kelvin <= 0 {
        return Err(ConversionError::Zero { name: "colorTemperatureInKelvin" });
    }
    #[allow(clippy::cast_precision_loss)]
    let kelvin = kelvin as f64;
    Ok(round_to_i64(1_000_000.0 / kelvin))
}

/// Convert mireds to kelvin.
///
/// # Errors
///
/// Returns [`ConversionError::Zero`] for a zero or negative value.
pub fn mired_to_kelvin(mired: f64) -> Result<i64, ConversionError> {
    if mired <= 0.0 {
        return Err(ConversionError::Zero { name: "color_temp" });
    }
    Ok(round_to_i64(1_000_000.0 / mired))
}

/// Convert a hue/saturation/brightness triple to RGB channels.
///
/// Hue is in degrees (0–360), saturation and brightness in `0.0..=1.0`.
/// Channels are truncated, not rounded.
///
/// # Errors
///
/// Returns [`ConversionError::OutOfRange`] when any component is outside its range.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Result<[u8; 3], ConversionError> {
    let hue = check_range("hue", hue, 0.0, 360.0)?;
    let s = check_range("saturation", saturation, 0.0, 1.0)?;
    let v = check_range("brightness", brightness, 0.0, 1.0)?;

    let channel = |x: f64| (x * 255.0) as u8;
    if s == 0.0 {
        let c = channel(v);
        return Ok([c, c, c]);
    }

    let h = hue / 60.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (sector as u8) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Ok([channel(r), channel(g), channel(b)])
}

/// Protocol volume (0–100) to a hub volume level, two decimals.
#[must_use]
pub fn volume_percent_to_level(percent: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let pct = clamp_percent(percent) as f64;
    pct / 100.0
}

/// Hub volume level to a protocol volume (0–100).
#[must_use]
pub fn volume_level_to_percent(level: f64) -> i64 {
    clamp_percent(round_to_i64(level * 100.0))
}

/// Current hub volume level shifted by a percentage delta, clamped.
#[must_use]
pub fn adjust_volume_level(level: f64, delta: i64) -> f64 {
    volume_percent_to_level(volume_level_to_percent(level).saturating_add(delta))
}

/// Fan speed names mapped onto evenly spaced percentage steps.
///
/// With `n` speeds, the speed at position `i` (1-based) reports
/// `i * 100 / n` percent; a percentage `p > 0` selects step `ceil(p * n / 100)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedSteps {
    speeds: Vec<String>,
}

/// Name of the fan speed meaning "stopped".
pub const SPEED_OFF: &str = "off";

impl Default for SpeedSteps {
    fn default() -> Self {
        Self::new(["low", "medium", "high"])
    }
}

impl SpeedSteps {
    /// Build steps from a hub `speed_list`; the `off` entry is skipped.
    ///
    /// An empty list yields the default low/medium/high table.
    #[must_use]
    pub fn new<I, S>(speeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let speeds: Vec<String> = speeds
            .into_iter()
            .map(Into::into)
            .filter(|s| s != SPEED_OFF)
            .collect();
        if speeds.is_empty() {
            return Self::default();
        }
        Self { speeds }
    }

    /// Percentage reported for a named speed, `None` when unknown.
    #[must_use]
    pub fn percentage_of(&self, speed: &str) -> Option<i64> {
        if speed == SPEED_OFF {
            return Some(0);
        }
        let n = i64::try_from(self.speeds.len()).ok()?;
        let position = self.speeds.iter().position(|s| s == speed)?;
        let i = i64::try_from(position).ok()? + 1;
        Some(i * 100 / n)
    }

    /// Speed name selected by a percentage.
    #[must_use]
    pub fn speed_for(&self, percentage: i64) -> &str {
        let p = clamp_percent(percentage);
        if p == 0 {
            return SPEED_OFF;
        }
        let n = i64::try_from(self.speeds.len()).unwrap_or(i64::MAX);
        let step = (p * n + 99) / 100;
        usize::try_from(step - 1)
            .ok()
            .and_then(|idx| self.speeds.get(idx))
            .map_or(SPEED_OFF, String::as_str)
    }
}
