// File: crates/dashboard/src/pages/dashboard.rs
// Summary: Overview page: stat cards, 7-day trend, top locations and recent activity.

use chart_core::sample::{from_static, max_value};
use chart_core::{Chart, Sample};

use crate::format::{number, percent_of};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overview {
    pub total_usage: f64,
    pub daily_usage: f64,
    pub water_quality: f64,
    pub system_health: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardColor {
    Blue,
    Green,
    Cyan,
    Purple,
}

impl CardColor {
    pub fn class(self) -> &'static str {
        match self {
            CardColor::Blue => "stat-blue",
            CardColor::Green => "stat-green",
            CardColor::Cyan => "stat-cyan",
            CardColor::Purple => "stat-purple",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub trend: &'static str,
    pub color: CardColor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub name: String,
    pub usage: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityStatus {
    Alert,
    Ok,
    Done,
}

impl ActivityStatus {
    pub fn label(self) -> &'static str {
        match self {
            ActivityStatus::Alert => "⚠️ Alert",
            ActivityStatus::Ok => "✓ OK",
            ActivityStatus::Done => "✓ Done",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ActivityStatus::Alert => "status warning",
            ActivityStatus::Ok => "status normal",
            ActivityStatus::Done => "status success",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub time: &'static str,
    pub location: &'static str,
    pub event: &'static str,
    pub usage: u32,
    pub status: ActivityStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub overview: Overview,
    pub trend: Vec<Sample>,
    pub locations: Vec<Location>,
    pub activity: Vec<Activity>,
}

impl DashboardState {
    pub fn seed() -> Self {
        let locations = [("Building A", 450.0), ("Building B", 380.0), ("Building C", 320.0), ("Outdoor Area", 280.0)]
            .into_iter()
            .map(|(name, usage)| Location { name: name.to_string(), usage })
            .collect();

        Self {
            overview: Overview { total_usage: 2450.0, daily_usage: 245.5, water_quality: 92.0, system_health: 98.0 },
            trend: from_static(&[
                ("Mon", 210.0),
                ("Tue", 220.0),
                ("Wed", 205.0),
                ("Thu", 240.0),
                ("Fri", 245.0),
                ("Sat", 230.0),
                ("Sun", 245.0),
            ]),
            locations,
            activity: vec![
                Activity { time: "2:45 PM", location: "Building A", event: "High usage detected", usage: 125, status: ActivityStatus::Alert },
                Activity { time: "2:30 PM", location: "Building C", event: "Normal operation", usage: 45, status: ActivityStatus::Ok },
                Activity { time: "2:15 PM", location: "Outdoor Area", event: "Maintenance complete", usage: 0, status: ActivityStatus::Done },
                Activity { time: "2:00 PM", location: "Building B", event: "Normal operation", usage: 78, status: ActivityStatus::Ok },
            ],
        }
    }

    pub fn stat_cards(&self) -> [StatCard; 4] {
        let o = &self.overview;
        [
            StatCard { title: "Total Usage (L)", value: number(o.total_usage), icon: "📊", trend: "+12%", color: CardColor::Blue },
            StatCard { title: "Daily Average (L)", value: number(o.daily_usage), icon: "📈", trend: "+5%", color: CardColor::Green },
            StatCard { title: "Water Quality (%)", value: number(o.water_quality), icon: "💧", trend: "+2%", color: CardColor::Cyan },
            StatCard { title: "System Health (%)", value: number(o.system_health), icon: "⚙️", trend: "Stable", color: CardColor::Purple },
        ]
    }

    pub fn trend_chart(&self) -> Chart {
        Chart::line(self.trend.clone()).with_title("Usage Trend (7 Days)")
    }

    /// Progress fill of a location bar: its share of the busiest location, in percent.
    pub fn location_fill(&self, location: &Location) -> f64 {
        let busiest = self.locations.iter().map(|l| l.usage).reduce(f64::max).unwrap_or(0.0);
        percent_of(location.usage, busiest)
    }

    /// Highest reading of the week, if any.
    pub fn peak_day(&self) -> Option<f64> {
        max_value(&self.trend)
    }
}
