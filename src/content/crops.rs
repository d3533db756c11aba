//! Recommended crops for the region

use std::fmt;

/// Relative level used for water need and market demand
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::Medium => write!(f, "Medium"),
            Level::High => write!(f, "High"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CropRecommendation {
    pub name: &'static str,
    pub local_name: &'static str,
    pub season: &'static str,
    pub water_need: Level,
    pub duration: &'static str,
    /// Quintal per acre
    pub expected_yield: &'static str,
    pub market_demand: Level,
    pub soil_type: &'static str,
    pub description: &'static str,
}

impl CropRecommendation {
    /// Text read out by the crop's speaker button
    pub fn spoken_details(&self) -> String {
        format!(
            "{}, Local name {}. {}. Water requirement: {}. Duration: {}. Expected yield: {}. Market demand: {}.",
            self.name,
            self.local_name,
            self.description,
            self.water_need,
            self.duration,
            self.expected_yield,
            self.market_demand
        )
    }

    pub fn spoken_more(&self) -> String {
        format!("More details about {}: {}", self.name, self.description)
    }
}

pub fn recommendations() -> Vec<CropRecommendation> {
    vec![
        CropRecommendation {
            name: "Rice",
            local_name: "వరిధాన్యం",
            season: "Kharif",
            water_need: Level::High,
            duration: "120-150 days",
            expected_yield: "25-30 quintal/acre",
            market_demand: Level::High,
            soil_type: "Clay loam",
            description: "Staple food crop with high market demand",
        },
        CropRecommendation {
            name: "Cotton",
            local_name: "పత్తి",
            season: "Kharif",
            water_need: Level::Medium,
            duration: "180-200 days",
            expected_yield: "15-20 quintal/acre",
            market_demand: Level::High,
            soil_type: "Black soil",
            description: "High value cash crop suitable for your region",
        },
        CropRecommendation {
            name: "Maize",
            local_name: "మొక్కజొన్న",
            season: "Kharif/Rabi",
            water_need: Level::Medium,
            duration: "90-120 days",
            expected_yield: "20-25 quintal/acre",
            market_demand: Level::Medium,
            soil_type: "Well-drained",
            description: "Versatile crop with good market price",
        },
        CropRecommendation {
            name: "Groundnut",
            local_name: "వేరుశెనగ",
            season: "Kharif",
            water_need: Level::Low,
            duration: "100-130 days",
            expected_yield: "12-18 quintal/acre",
            market_demand: Level::High,
            soil_type: "Sandy loam",
            description: "Oil seed crop with steady demand",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_crops() {
        let crops = recommendations();
        assert_eq!(crops.len(), 4);
        assert_eq!(crops[3].name, "Groundnut");
        assert_eq!(crops[3].water_need, Level::Low);
    }

    #[test]
    fn test_spoken_details() {
        let rice = &recommendations()[0];
        assert_eq!(
            rice.spoken_details(),
            "Rice, Local name వరిధాన్యం. Staple food crop with high market demand. \
             Water requirement: High. Duration: 120-150 days. Expected yield: 25-30 quintal/acre. \
             Market demand: High."
        );
    }
}
