// File: crates/dashboard/src/pages/reports.rs
// Summary: Reports page: monthly trend, quick stats, templates, export format, zone shares,
// compliance status and recent reports.

use chart_core::sample::from_static;
use chart_core::{Chart, Sample};
use chrono::{NaiveDate, TimeDelta};
use tracing::warn;

use crate::format::{number, relative_age, report_period, thousands};
use crate::store::Reducer;

pub const OVERALL_EFFICIENCY: f64 = 91.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ReportTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub generated: TimeDelta,
    pub size_mb: f64,
}

impl ReportTemplate {
    /// "2 days ago • 2.4 MB"
    pub fn meta(&self) -> String {
        format!("{} • {} MB", relative_age(self.generated), number(self.size_mb))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Pdf,
    Csv,
    Excel,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Pdf, ExportFormat::Csv, ExportFormat::Excel];

    pub fn value(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "excel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF Format",
            ExportFormat::Csv => "CSV Format",
            ExportFormat::Excel => "Excel Format",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.value() == value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZoneShare {
    pub name: &'static str,
    pub percent: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplianceStatus {
    Pass,
    Warning,
}

impl ComplianceStatus {
    pub fn icon(self) -> &'static str {
        match self {
            ComplianceStatus::Pass => "✓",
            ComplianceStatus::Warning => "!",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ComplianceStatus::Pass => "compliance-item pass",
            ComplianceStatus::Warning => "compliance-item warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComplianceItem {
    pub title: &'static str,
    pub detail: &'static str,
    pub status: ComplianceStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReportPeriod {
    Dates { start: NaiveDate, end: NaiveDate },
    Scan(&'static str),
}

impl ReportPeriod {
    fn dates(start: (i32, u32, u32), end: (i32, u32, u32)) -> Self {
        match (
            NaiveDate::from_ymd_opt(start.0, start.1, start.2),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2),
        ) {
            (Some(start), Some(end)) => ReportPeriod::Dates { start, end },
            _ => ReportPeriod::Scan("Unknown period"),
        }
    }

    pub fn label(&self) -> String {
        match self {
            ReportPeriod::Dates { start, end } => report_period(*start, *end),
            ReportPeriod::Scan(text) => text.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecentReport {
    pub name: &'static str,
    pub generated: TimeDelta,
    pub period: ReportPeriod,
    pub size_mb: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuickStats {
    pub total: f64,
    pub average: f64,
    pub peak: Option<(String, f64)>,
    pub lowest: Option<(String, f64)>,
    pub efficiency: f64,
}

impl QuickStats {
    pub fn from_samples(samples: &[Sample]) -> Self {
        let total: f64 = samples.iter().map(Sample::value).sum();
        let average = if samples.is_empty() { 0.0 } else { total / samples.len() as f64 };
        let entry = |s: &Sample| (s.label().to_string(), s.value());
        let peak = samples.iter().reduce(|a, b| if b.value() > a.value() { b } else { a }).map(entry);
        let lowest = samples.iter().reduce(|a, b| if b.value() < a.value() { b } else { a }).map(entry);
        Self { total, average, peak, lowest, efficiency: OVERALL_EFFICIENCY }
    }

    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let month = |entry: &Option<(String, f64)>| match entry {
            Some((label, v)) => format!("{} L ({})", thousands(*v), label),
            None => "-".to_string(),
        };
        vec![
            ("Total Usage (6 months)", format!("{} L", thousands(self.total))),
            ("Average Monthly", format!("{} L", thousands(self.average))),
            ("Peak Month", month(&self.peak)),
            ("Lowest Month", month(&self.lowest)),
            ("Overall Efficiency", format!("{}%", number(self.efficiency))),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportsState {
    pub monthly: Vec<Sample>,
    pub templates: Vec<ReportTemplate>,
    pub selected: &'static str,
    pub export_format: ExportFormat,
    pub zones: Vec<ZoneShare>,
    pub compliance: Vec<ComplianceItem>,
    pub recent: Vec<RecentReport>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportsAction {
    SelectReport(String),
    SetExportFormat(ExportFormat),
}

impl ReportsState {
    pub fn seed() -> Self {
        Self {
            monthly: from_static(&[
                ("Jan", 7200.0),
                ("Feb", 6800.0),
                ("Mar", 7500.0),
                ("Apr", 6200.0),
                ("May", 8100.0),
                ("Jun", 9200.0),
            ]),
            templates: vec![
                ReportTemplate {
                    id: "monthly",
                    title: "Monthly Usage Report",
                    description: "Comprehensive monthly water consumption analysis",
                    generated: TimeDelta::days(2),
                    size_mb: 2.4,
                },
                ReportTemplate {
                    id: "quarterly",
                    title: "Quarterly Performance Report",
                    description: "Quarterly trends and efficiency metrics",
                    generated: TimeDelta::weeks(1),
                    size_mb: 3.1,
                },
                ReportTemplate {
                    id: "annual",
                    title: "Annual Summary Report",
                    description: "Year-to-date comprehensive analysis",
                    generated: TimeDelta::days(30),
                    size_mb: 5.8,
                },
                ReportTemplate {
                    id: "leak",
                    title: "Leak Detection Report",
                    description: "Anomalies and potential leak locations",
                    generated: TimeDelta::days(5),
                    size_mb: 1.2,
                },
            ],
            selected: "monthly",
            export_format: ExportFormat::default(),
            zones: vec![
                ZoneShare { name: "Building A", percent: 35.0 },
                ZoneShare { name: "Building B", percent: 28.0 },
                ZoneShare { name: "Building C", percent: 22.0 },
                ZoneShare { name: "Irrigation", percent: 15.0 },
            ],
            compliance: vec![
                ComplianceItem { title: "Usage Limits", detail: "Within allocated limits", status: ComplianceStatus::Pass },
                ComplianceItem { title: "Quality Standards", detail: "All tests passed", status: ComplianceStatus::Pass },
                ComplianceItem { title: "Maintenance Schedule", detail: "On track", status: ComplianceStatus::Pass },
                ComplianceItem { title: "Peak Usage", detail: "Monitor June patterns", status: ComplianceStatus::Warning },
            ],
            recent: vec![
                RecentReport {
                    name: "June Monthly Report",
                    generated: TimeDelta::days(2),
                    period: ReportPeriod::dates((2025, 6, 1), (2025, 6, 30)),
                    size_mb: 2.4,
                },
                RecentReport {
                    name: "Q2 Quarterly Report",
                    generated: TimeDelta::weeks(1),
                    period: ReportPeriod::dates((2025, 4, 1), (2025, 6, 30)),
                    size_mb: 3.1,
                },
                RecentReport {
                    name: "May Monthly Report",
                    generated: TimeDelta::days(30),
                    period: ReportPeriod::dates((2025, 5, 1), (2025, 5, 31)),
                    size_mb: 2.2,
                },
                RecentReport {
                    name: "Leak Detection Report",
                    generated: TimeDelta::days(5),
                    period: ReportPeriod::Scan("System-wide Scan"),
                    size_mb: 1.2,
                },
            ],
        }
    }

    pub fn quick_stats(&self) -> QuickStats {
        QuickStats::from_samples(&self.monthly)
    }

    pub fn trend_chart(&self) -> Chart {
        Chart::line(self.monthly.clone()).with_title("Usage Trends (Last 6 Months)")
    }

    pub fn selected_template(&self) -> Option<&ReportTemplate> {
        self.templates.iter().find(|t| t.id == self.selected)
    }
}

impl Reducer for ReportsState {
    type Action = ReportsAction;

    fn reduce(&self, action: ReportsAction) -> Self {
        match action {
            ReportsAction::SelectReport(id) => match self.templates.iter().find(|t| t.id == id) {
                Some(t) => Self { selected: t.id, ..self.clone() },
                None => {
                    warn!(report = %id, "ignoring unknown report template");
                    self.clone()
                }
            },
            ReportsAction::SetExportFormat(export_format) => Self { export_format, ..self.clone() },
        }
    }
}
