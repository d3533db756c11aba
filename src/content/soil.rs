//! Soil readings and health scoring

use crate::i18n::{Language, TextKey};
use std::fmt;

/// Editable soil readings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoilData {
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    /// Percent
    pub moisture: f64,
}

impl Default for SoilData {
    fn default() -> Self {
        Self {
            ph: 6.5,
            nitrogen: 75.0,
            phosphorus: 60.0,
            potassium: 80.0,
            moisture: 45.0,
        }
    }
}

/// One editable reading
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoilField {
    Ph,
    Nitrogen,
    Phosphorus,
    Potassium,
    Moisture,
}

impl SoilField {
    pub const ALL: [SoilField; 5] = [
        SoilField::Ph,
        SoilField::Nitrogen,
        SoilField::Phosphorus,
        SoilField::Potassium,
        SoilField::Moisture,
    ];

    pub fn label_key(&self) -> TextKey {
        match self {
            SoilField::Ph => TextKey::SoilPh,
            SoilField::Nitrogen => TextKey::Nitrogen,
            SoilField::Phosphorus => TextKey::Phosphorus,
            SoilField::Potassium => TextKey::Potassium,
            SoilField::Moisture => TextKey::Moisture,
        }
    }

    /// Slider range for the field
    pub fn range(&self) -> std::ops::RangeInclusive<f64> {
        match self {
            SoilField::Ph => 0.0..=14.0,
            _ => 0.0..=100.0,
        }
    }
}

impl SoilData {
    pub fn get(&self, field: SoilField) -> f64 {
        match field {
            SoilField::Ph => self.ph,
            SoilField::Nitrogen => self.nitrogen,
            SoilField::Phosphorus => self.phosphorus,
            SoilField::Potassium => self.potassium,
            SoilField::Moisture => self.moisture,
        }
    }

    pub fn get_mut(&mut self, field: SoilField) -> &mut f64 {
        match field {
            SoilField::Ph => &mut self.ph,
            SoilField::Nitrogen => &mut self.nitrogen,
            SoilField::Phosphorus => &mut self.phosphorus,
            SoilField::Potassium => &mut self.potassium,
            SoilField::Moisture => &mut self.moisture,
        }
    }

    /// Overall score in 0..=100, the rounded mean of five factor scores
    pub fn score(&self) -> u32 {
        let total = ph_score(self.ph)
            + nutrient_score(self.nitrogen)
            + nutrient_score(self.phosphorus)
            + nutrient_score(self.potassium)
            + moisture_score(self.moisture);
        (total as f64 / 5.0).round() as u32
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus::from_score(self.score())
    }

    /// Status of a single reading; pH has no per-field status
    pub fn field_status(&self, field: SoilField) -> Option<HealthStatus> {
        match field {
            SoilField::Ph => None,
            SoilField::Moisture => Some(HealthStatus::from_thresholds(self.moisture, [60.0, 40.0, 20.0])),
            other => Some(HealthStatus::from_thresholds(self.get(other), [80.0, 60.0, 40.0])),
        }
    }
}

fn ph_score(ph: f64) -> u32 {
    if (6.0..=7.5).contains(&ph) {
        100
    } else if (5.5..6.0).contains(&ph) || (ph > 7.5 && ph <= 8.0) {
        75
    } else if (5.0..5.5).contains(&ph) || (ph > 8.0 && ph <= 8.5) {
        50
    } else {
        25
    }
}

fn nutrient_score(value: f64) -> u32 {
    if value >= 80.0 {
        100
    } else if value >= 60.0 {
        75
    } else if value >= 40.0 {
        50
    } else {
        25
    }
}

fn moisture_score(moisture: f64) -> u32 {
    if (40.0..=70.0).contains(&moisture) {
        100
    } else if (30.0..40.0).contains(&moisture) || (moisture > 70.0 && moisture <= 80.0) {
        75
    } else if (20.0..30.0).contains(&moisture) || (moisture > 80.0 && moisture <= 90.0) {
        50
    } else {
        25
    }
}

/// Four-level health rating
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthStatus {
    pub fn from_score(score: u32) -> Self {
        match score {
            85.. => HealthStatus::Excellent,
            65..=84 => HealthStatus::Good,
            45..=64 => HealthStatus::Fair,
            _ => HealthStatus::Poor,
        }
    }

    /// `[excellent, good, fair]` lower bounds
    fn from_thresholds(value: f64, thresholds: [f64; 3]) -> Self {
        if value >= thresholds[0] {
            HealthStatus::Excellent
        } else if value >= thresholds[1] {
            HealthStatus::Good
        } else if value >= thresholds[2] {
            HealthStatus::Fair
        } else {
            HealthStatus::Poor
        }
    }

    pub fn label_key(&self) -> TextKey {
        match self {
            HealthStatus::Excellent => TextKey::Excellent,
            HealthStatus::Good => TextKey::Good,
            HealthStatus::Fair => TextKey::Fair,
            HealthStatus::Poor => TextKey::Poor,
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        crate::i18n::t(language, self.label_key())
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(Language::En))
    }
}

/// Number spoken into a field: every character except digits and dots is
/// dropped, then the longest leading decimal is read
pub fn parse_spoken_number(transcript: &str) -> Option<f64> {
    let digits: String = transcript
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in digits.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + 1;
    }
    digits[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_score() {
        // pH 100, N 75, P 75, K 100, moisture 100
        let data = SoilData::default();
        assert_eq!(data.score(), 90);
        assert_eq!(data.health(), HealthStatus::Excellent);
    }

    #[test]
    fn test_ph_bands() {
        assert_eq!(ph_score(6.0), 100);
        assert_eq!(ph_score(7.5), 100);
        assert_eq!(ph_score(5.7), 75);
        assert_eq!(ph_score(8.0), 75);
        assert_eq!(ph_score(5.2), 50);
        assert_eq!(ph_score(8.5), 50);
        assert_eq!(ph_score(4.0), 25);
        assert_eq!(ph_score(9.0), 25);
    }

    #[test]
    fn test_poor_soil() {
        let data = SoilData {
            ph: 4.0,
            nitrogen: 10.0,
            phosphorus: 10.0,
            potassium: 10.0,
            moisture: 5.0,
        };
        assert_eq!(data.score(), 25);
        assert_eq!(data.health(), HealthStatus::Poor);
    }

    #[test]
    fn test_status_boundaries() {
        assert_eq!(HealthStatus::from_score(85), HealthStatus::Excellent);
        assert_eq!(HealthStatus::from_score(84), HealthStatus::Good);
        assert_eq!(HealthStatus::from_score(65), HealthStatus::Good);
        assert_eq!(HealthStatus::from_score(64), HealthStatus::Fair);
        assert_eq!(HealthStatus::from_score(45), HealthStatus::Fair);
        assert_eq!(HealthStatus::from_score(44), HealthStatus::Poor);
    }

    #[test]
    fn test_field_status_thresholds() {
        let data = SoilData::default();
        assert_eq!(data.field_status(SoilField::Ph), None);
        assert_eq!(data.field_status(SoilField::Nitrogen), Some(HealthStatus::Good));
        assert_eq!(data.field_status(SoilField::Potassium), Some(HealthStatus::Excellent));
        assert_eq!(data.field_status(SoilField::Moisture), Some(HealthStatus::Good));
    }

    #[test]
    fn test_parse_spoken_number() {
        assert_eq!(parse_spoken_number("six point 6.8"), Some(6.8));
        assert_eq!(parse_spoken_number("about 72 percent"), Some(72.0));
        assert_eq!(parse_spoken_number("6.5.1"), Some(6.5));
        assert_eq!(parse_spoken_number("seven"), None);
        assert_eq!(parse_spoken_number("."), None);
    }

    #[test]
    fn test_field_accessors() {
        let mut data = SoilData::default();
        *data.get_mut(SoilField::Moisture) = 55.0;
        assert_eq!(data.get(SoilField::Moisture), 55.0);
        assert_eq!(SoilField::Ph.label_key(), TextKey::SoilPh);
    }
}
