//! Operational Design Domain snapshot.
//!
//! A read-only numeric view of the environmental conditions a run is
//! validated under. The environment collaborator produces one of these per
//! frame; the core never interprets it beyond the kinematic derating in
//! [`OddSnapshot::speed_factor`].

use serde::{Deserialize, Serialize};

/// Overall weather condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Clear,
    Rain,
    Snow,
    Fog,
}

/// One named environmental parameter with its declared range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OddParam {
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
}

impl OddParam {
    /// Create a parameter, clamping the value into the declared range.
    pub fn new(value: f64, lower: f64, upper: f64) -> Self {
        Self {
            value: value.clamp(lower, upper),
            lower,
            upper,
        }
    }

    /// Position of the value within its range, in `[0, 1]`.
    pub fn normalized(&self) -> f64 {
        if self.upper > self.lower {
            (self.value - self.lower) / (self.upper - self.lower)
        } else {
            0.0
        }
    }
}

/// Numeric snapshot of the ODD parameters the planner consumes.
///
/// Ranges follow the ODD declaration: wind speed 0-40 m/s, precipitation
/// rates 0-150 mm/h, luminosity 0-12000 lux, particulate intensity 0-100.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OddSnapshot {
    pub weather: Weather,
    pub wind_speed: OddParam,
    pub rainfall_rate: OddParam,
    pub snowfall_rate: OddParam,
    pub luminosity: OddParam,
    pub particulate_type: String,
    pub particulate_intensity: OddParam,
}

impl Default for OddSnapshot {
    fn default() -> Self {
        Self::clear()
    }
}

impl OddSnapshot {
    /// Clear daytime conditions.
    pub fn clear() -> Self {
        Self {
            weather: Weather::Clear,
            wind_speed: OddParam::new(0.0, 0.0, 40.0),
            rainfall_rate: OddParam::new(0.0, 0.0, 150.0),
            snowfall_rate: OddParam::new(0.0, 0.0, 150.0),
            luminosity: OddParam::new(10_000.0, 0.0, 12_000.0),
            particulate_type: "none".to_string(),
            particulate_intensity: OddParam::new(0.0, 0.0, 100.0),
        }
    }

    /// Moderate rainfall.
    pub fn rain() -> Self {
        Self {
            weather: Weather::Rain,
            rainfall_rate: OddParam::new(7.5, 0.0, 150.0),
            luminosity: OddParam::new(6_000.0, 0.0, 12_000.0),
            ..Self::clear()
        }
    }

    /// Moderate snowfall.
    pub fn snow() -> Self {
        Self {
            weather: Weather::Snow,
            snowfall_rate: OddParam::new(5.0, 0.0, 150.0),
            luminosity: OddParam::new(4_000.0, 0.0, 12_000.0),
            ..Self::clear()
        }
    }

    /// Dense fog.
    pub fn fog() -> Self {
        Self {
            weather: Weather::Fog,
            particulate_type: "fog".to_string(),
            particulate_intensity: OddParam::new(60.0, 0.0, 100.0),
            luminosity: OddParam::new(2_000.0, 0.0, 12_000.0),
            ..Self::clear()
        }
    }

    /// Resolve a weather name; unknown names mean clear conditions.
    pub fn from_weather_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "rain" => Self::rain(),
            "snow" => Self::snow(),
            "fog" => Self::fog(),
            _ => Self::clear(),
        }
    }

    /// Speed derating multiplier applied by strategies to their step
    /// length: 1.0 in the clear, 0.75 in rain, 0.5 in snow or fog.
    pub fn speed_factor(&self) -> f64 {
        match self.weather {
            Weather::Clear => 1.0,
            Weather::Rain => 0.75,
            Weather::Snow | Weather::Fog => 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_clamps_into_range() {
        let p = OddParam::new(500.0, 0.0, 100.0);
        assert_eq!(p.value, 100.0);
        let q = OddParam::new(-3.0, 0.0, 100.0);
        assert_eq!(q.value, 0.0);
    }

    #[test]
    fn test_param_normalized() {
        let p = OddParam::new(30.0, 0.0, 120.0);
        assert!((p.normalized() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_speed_factors() {
        assert_eq!(OddSnapshot::clear().speed_factor(), 1.0);
        assert_eq!(OddSnapshot::rain().speed_factor(), 0.75);
        assert_eq!(OddSnapshot::snow().speed_factor(), 0.5);
        assert_eq!(OddSnapshot::fog().speed_factor(), 0.5);
    }

    #[test]
    fn test_weather_name_fallback() {
        assert_eq!(OddSnapshot::from_weather_name("Rain").weather, Weather::Rain);
        assert_eq!(
            OddSnapshot::from_weather_name("hurricane").weather,
            Weather::Clear
        );
    }
}
