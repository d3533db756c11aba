//! The farmer's own farm

#[derive(Clone, Debug, PartialEq)]
pub struct Weather {
    /// Degrees celsius
    pub temperature: i32,
    /// Percent
    pub humidity: u32,
    /// km/h
    pub wind_speed: u32,
    pub condition: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FarmOverview {
    pub name: &'static str,
    pub location: &'static str,
    pub area: &'static str,
    /// Percent
    pub soil_health: u32,
    pub crop_count: usize,
    pub last_watered: &'static str,
    pub next_harvest: &'static str,
    pub weather: Weather,
}

impl FarmOverview {
    pub fn spoken_summary(&self) -> String {
        format!(
            "Farm Summary: {} covers {} with {} different crops. Soil health is at {} percent. \
             Weather today: {} with {} degrees celsius.",
            self.name,
            self.area,
            self.crop_count,
            self.soil_health,
            self.weather.condition,
            self.weather.temperature
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthStage {
    Growing,
    Flowering,
    Maturity,
}

impl GrowthStage {
    pub fn label(&self) -> &'static str {
        match self {
            GrowthStage::Growing => "Growing",
            GrowthStage::Flowering => "Flowering",
            GrowthStage::Maturity => "Maturity",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldCrop {
    pub name: &'static str,
    pub local_name: &'static str,
    pub area: &'static str,
    pub stage: GrowthStage,
    /// Percent
    pub health: u32,
}

impl FieldCrop {
    pub fn spoken_details(&self) -> String {
        format!(
            "{} occupies {}, currently in {} stage with {} percent health status.",
            self.name,
            self.area,
            self.stage.label(),
            self.health
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Soil,
    Fertilizer,
    Irrigation,
    Pest,
    Planting,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Soil => "soil",
            ActivityKind::Fertilizer => "fertilizer",
            ActivityKind::Irrigation => "irrigation",
            ActivityKind::Pest => "pest",
            ActivityKind::Planting => "planting",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub description: &'static str,
    pub when: &'static str,
    pub kind: ActivityKind,
}

pub fn overview() -> FarmOverview {
    FarmOverview {
        name: "Green Valley Farm",
        location: "Warangal, Telangana",
        area: "5.2 acres",
        soil_health: 78,
        crop_count: 3,
        last_watered: "2 days ago",
        next_harvest: "45 days",
        weather: Weather {
            temperature: 28,
            humidity: 65,
            wind_speed: 12,
            condition: "Partly Cloudy",
        },
    }
}

pub fn field_crops() -> Vec<FieldCrop> {
    vec![
        FieldCrop {
            name: "Rice",
            local_name: "వరిధాన్యం",
            area: "2.5 acres",
            stage: GrowthStage::Growing,
            health: 85,
        },
        FieldCrop {
            name: "Cotton",
            local_name: "పత్తి",
            area: "2.0 acres",
            stage: GrowthStage::Flowering,
            health: 92,
        },
        FieldCrop {
            name: "Maize",
            local_name: "మొక్కజొన్న",
            area: "0.7 acres",
            stage: GrowthStage::Maturity,
            health: 88,
        },
    ]
}

pub fn recent_activities() -> Vec<Activity> {
    vec![
        Activity {
            description: "Soil pH testing completed",
            when: "2 days ago",
            kind: ActivityKind::Soil,
        },
        Activity {
            description: "Fertilizer application - Urea 50kg",
            when: "5 days ago",
            kind: ActivityKind::Fertilizer,
        },
        Activity {
            description: "Irrigation system maintenance",
            when: "1 week ago",
            kind: ActivityKind::Irrigation,
        },
        Activity {
            description: "Pest monitoring - No issues found",
            when: "1 week ago",
            kind: ActivityKind::Pest,
        },
        Activity {
            description: "Cotton seeds planted in Field B",
            when: "2 weeks ago",
            kind: ActivityKind::Planting,
        },
    ]
}
