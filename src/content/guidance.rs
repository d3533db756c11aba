//! Actionable farming tips

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Watering,
    Pest,
    Fertilizer,
    Weather,
    Harvest,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Watering => "Irrigation",
            Category::Pest => "Pest Control",
            Category::Fertilizer => "Fertilization",
            Category::Weather => "Weather",
            Category::Harvest => "Harvest",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuidanceItem {
    pub title: &'static str,
    pub category: Category,
    pub priority: Priority,
    pub description: &'static str,
    pub action: &'static str,
    pub timeframe: &'static str,
}

impl GuidanceItem {
    pub fn spoken_details(&self) -> String {
        format!(
            "{}. Priority: {}. {} Action needed: {}. Timeframe: {}.",
            self.title, self.priority, self.description, self.action, self.timeframe
        )
    }

    pub fn spoken_completed(&self) -> String {
        format!("Mark {} as completed", self.title)
    }

    pub fn spoken_reminder(&self) -> String {
        format!("Set reminder for {}", self.title)
    }
}

/// Number of items with the given priority
pub fn count_by_priority(items: &[GuidanceItem], priority: Priority) -> usize {
    items.iter().filter(|i| i.priority == priority).count()
}

pub fn items() -> Vec<GuidanceItem> {
    vec![
        GuidanceItem {
            title: "Irrigation Schedule",
            category: Category::Watering,
            priority: Priority::High,
            description: "Based on soil moisture levels, your crops need watering within next 24 hours.",
            action: "Apply 25mm water irrigation to rice fields",
            timeframe: "Next 24 hours",
        },
        GuidanceItem {
            title: "Pest Alert",
            category: Category::Pest,
            priority: Priority::High,
            description: "Brown plant hopper detected in nearby fields. Take preventive measures.",
            action: "Spray neem-based pesticide on rice crops",
            timeframe: "Immediate",
        },
        GuidanceItem {
            title: "Fertilizer Application",
            category: Category::Fertilizer,
            priority: Priority::Medium,
            description: "Nitrogen levels are decreasing. Consider applying urea fertilizer.",
            action: "Apply 50kg urea per acre",
            timeframe: "Within 3 days",
        },
        GuidanceItem {
            title: "Weather Advisory",
            category: Category::Weather,
            priority: Priority::Medium,
            description: "Light rainfall expected in next 2 days. Adjust irrigation schedule.",
            action: "Reduce watering frequency",
            timeframe: "Next 2 days",
        },
        GuidanceItem {
            title: "Harvest Timing",
            category: Category::Harvest,
            priority: Priority::Low,
            description: "Your cotton crop will be ready for harvest in 2-3 weeks.",
            action: "Prepare harvesting equipment and labor",
            timeframe: "2-3 weeks",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_counts() {
        let all = items();
        assert_eq!(count_by_priority(&all, Priority::High), 2);
        assert_eq!(count_by_priority(&all, Priority::Medium), 2);
        assert_eq!(count_by_priority(&all, Priority::Low), 1);
    }

    #[test]
    fn test_spoken_details() {
        let pest = &items()[1];
        assert_eq!(
            pest.spoken_details(),
            "Pest Alert. Priority: high. Brown plant hopper detected in nearby fields. \
             Take preventive measures. Action needed: Spray neem-based pesticide on rice crops. \
             Timeframe: Immediate."
        );
        assert_eq!(pest.spoken_reminder(), "Set reminder for Pest Alert");
        assert_eq!(pest.category.label(), "Pest Control");
    }
}
