// File: crates/dashboard/src/pages/usage.rs
// Summary: Usage monitor page: zone selection, time range, hourly bar chart, statistics and breakdown.

use chart_core::sample::from_static;
use chart_core::{Chart, Sample};
use tracing::warn;

use crate::format::{clock_12h, fixed, number, percent_of};
use crate::store::Reducer;

/// Liters used on a typical day; the denominator of the hourly breakdown.
pub const DAILY_TOTAL: f64 = 245.5;
pub const EFFICIENCY_RATE: f64 = 92.0;
/// Above this hourly reading a row is flagged High.
pub const HIGH_THRESHOLD: f64 = 70.0;
/// Below this hourly reading a row is flagged Low.
pub const LOW_THRESHOLD: f64 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    pub id: &'static str,
    pub name: &'static str,
    pub usage: f64,
    pub units: &'static str,
}

impl Zone {
    pub fn usage_label(&self) -> String {
        format!("{}{}", number(self.usage), self.units)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeRange {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [TimeRange::Day, TimeRange::Week, TimeRange::Month, TimeRange::Year];

    pub fn value(self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Day => "Today",
            TimeRange::Week => "This Week",
            TimeRange::Month => "This Month",
            TimeRange::Year => "This Year",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    High,
    Normal,
    Low,
}

impl Level {
    pub fn of(usage: f64) -> Self {
        if usage > HIGH_THRESHOLD {
            Level::High
        } else if usage < LOW_THRESHOLD {
            Level::Low
        } else {
            Level::Normal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::High => "⬆️ High",
            Level::Normal => "→ Normal",
            Level::Low => "⬇️ Low",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Level::High => "badge high",
            Level::Normal => "badge normal",
            Level::Low => "badge low",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HourlyRow {
    pub time: String,
    pub usage: f64,
    /// Share of [`DAILY_TOTAL`], one decimal, without the `%` sign.
    pub share: String,
    pub level: Level,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UsageStats {
    pub peak: Option<(String, f64)>,
    pub low: Option<(String, f64)>,
    pub average_per_hour: f64,
    pub daily_total: f64,
    pub efficiency: f64,
}

impl UsageStats {
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let at = |entry: &Option<(String, f64)>| match entry {
            Some((label, v)) => format!("{}L at {}", number(*v), clock_12h(label)),
            None => "-".to_string(),
        };
        vec![
            ("Peak Usage:", at(&self.peak)),
            ("Low Usage:", at(&self.low)),
            ("Average Usage:", format!("{}L per hour", fixed(self.average_per_hour, 1))),
            ("Total Daily:", format!("{}L", number(self.daily_total))),
            ("Efficiency Rate:", format!("{}%", number(self.efficiency))),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UsageState {
    pub zones: Vec<Zone>,
    pub selected_zone: String,
    pub time_range: TimeRange,
    pub hourly: Vec<Sample>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UsageAction {
    SelectZone(String),
    SetTimeRange(TimeRange),
}

impl UsageState {
    pub fn seed() -> Self {
        let zone = |id, name, usage| Zone { id, name, usage, units: "L" };
        Self {
            zones: vec![
                zone("all", "All Zones", 2450.0),
                zone("building-a", "Building A", 450.0),
                zone("building-b", "Building B", 380.0),
                zone("building-c", "Building C", 320.0),
                zone("outdoor", "Outdoor Area", 280.0),
                zone("irrigation", "Irrigation System", 620.0),
            ],
            selected_zone: "all".to_string(),
            time_range: TimeRange::default(),
            hourly: from_static(&[
                ("00:00", 10.0),
                ("04:00", 5.0),
                ("08:00", 45.0),
                ("12:00", 78.0),
                ("16:00", 65.0),
                ("20:00", 58.0),
                ("23:00", 15.0),
            ]),
        }
    }

    pub fn selected(&self) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == self.selected_zone)
    }

    pub fn hourly_chart(&self) -> Chart {
        Chart::bar(self.hourly.clone()).with_title("Hourly Usage Pattern")
    }

    pub fn stats(&self) -> UsageStats {
        let entry = |s: &Sample| (s.label().to_string(), s.value());
        // Ties keep the earliest hour.
        let peak = self.hourly.iter().fold(None::<&Sample>, |best, s| match best {
            Some(b) if b.value() >= s.value() => Some(b),
            _ => Some(s),
        });
        let low = self.hourly.iter().fold(None::<&Sample>, |best, s| match best {
            Some(b) if b.value() <= s.value() => Some(b),
            _ => Some(s),
        });
        let average_per_hour = if self.hourly.is_empty() {
            0.0
        } else {
            self.hourly.iter().map(Sample::value).sum::<f64>() / self.hourly.len() as f64
        };
        UsageStats {
            peak: peak.map(entry),
            low: low.map(entry),
            average_per_hour,
            daily_total: DAILY_TOTAL,
            efficiency: EFFICIENCY_RATE,
        }
    }

    pub fn breakdown(&self) -> Vec<HourlyRow> {
        self.hourly
            .iter()
            .map(|s| HourlyRow {
                time: s.label().to_string(),
                usage: s.value(),
                share: fixed(percent_of(s.value(), DAILY_TOTAL), 1),
                level: Level::of(s.value()),
            })
            .collect()
    }
}

impl Reducer for UsageState {
    type Action = UsageAction;

    fn reduce(&self, action: UsageAction) -> Self {
        match action {
            UsageAction::SelectZone(id) => {
                if self.zones.iter().any(|z| z.id == id) {
                    Self { selected_zone: id, ..self.clone() }
                } else {
                    warn!(zone = %id, "ignoring unknown zone");
                    self.clone()
                }
            }
            UsageAction::SetTimeRange(time_range) => Self { time_range, ..self.clone() },
        }
    }
}
