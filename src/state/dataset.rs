//! Battle dataset loading and normalization.
//!
//! The source file is a JSON array exported from a shapefile table, so the
//! field names carry their column type suffixes (`"Year1,N,10,0"`).

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::core::time::{Interval, TimePoint};

/// Commanders whose presence is recorded on each event.
pub const TRACKED_ARTIFACTS: [&str; 1] = ["Napoleon Bonaparte"];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse battle dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read battle dataset from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One row as it appears in the source file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBattle {
    #[serde(rename = "Battle,C,254", default)]
    pub battle: String,
    #[serde(rename = "Longitude,N,24,15", default)]
    pub longitude: f64,
    #[serde(rename = "Latitude,N,24,15", default)]
    pub latitude: f64,
    #[serde(rename = "Dead_or_Wo,C,254", default)]
    pub casualties: Option<String>,
    #[serde(rename = "Day1,N,10,0", default)]
    pub day1: f64,
    #[serde(rename = "Month1,N,10,0", default)]
    pub month1: f64,
    #[serde(rename = "Year1,N,10,0", default)]
    pub year1: f64,
    #[serde(rename = "Day2,N,10,0", default)]
    pub day2: f64,
    #[serde(rename = "Month2,N,10,0", default)]
    pub month2: f64,
    #[serde(rename = "Year2,N,10,0", default)]
    pub year2: f64,
    #[serde(rename = "French Com,C,254", default)]
    pub french_commanders: Option<String>,
    #[serde(rename = "Allied Com,C,254", default)]
    pub allied_commanders: Option<String>,
}

/// A normalized event, as consumed by the calendar and marker views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: Uuid,
    pub battle: String,
    /// (longitude, latitude)
    pub position: (f64, f64),
    /// Casualty count used as the marker radius, 0 when unknown.
    pub radius: u32,
    pub date1: NaiveDate,
    pub date2: NaiveDate,
    pub duration_days: i64,
    pub artifacts: Vec<String>,
}

impl EventRecord {
    pub fn start(&self) -> TimePoint {
        self.date1.into()
    }

    pub fn end(&self) -> TimePoint {
        self.date2.into()
    }

    pub fn has_artifact(&self, name: &str) -> bool {
        self.artifacts.iter().any(|a| a == name)
    }
}

fn calendar_date(year: f64, month: f64, day: f64) -> Option<NaiveDate> {
    if !year.is_finite() || !month.is_finite() || !day.is_finite() || month < 1.0 || day < 1.0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year.round() as i32, month.round() as u32, day.round() as u32)
}

impl RawBattle {
    /// Normalize the row. `None` when the start date is not a calendar date.
    pub fn normalize(&self) -> Option<EventRecord> {
        let date1 = calendar_date(self.year1, self.month1, self.day1)?;
        // A zero second year marks a single-day event.
        let date2 = if self.year2 == 0.0 {
            date1
        } else {
            calendar_date(self.year2, self.month2, self.day2)?
        };
        let date2 = date2.max(date1);

        let radius = self
            .casualties
            .as_deref()
            .and_then(|text| text.trim().parse::<u32>().ok())
            .unwrap_or(0);

        let french = self.french_commanders.as_deref().unwrap_or_default();
        let artifacts = TRACKED_ARTIFACTS
            .iter()
            .filter(|name| french.contains(*name))
            .map(|name| name.to_string())
            .collect();

        Some(EventRecord {
            id: Uuid::new_v4(),
            battle: self.battle.trim().to_string(),
            position: (self.longitude, self.latitude),
            radius,
            date1,
            date2,
            duration_days: (date2 - date1).num_days(),
            artifacts,
        })
    }
}

/// Parse and normalize a dataset file body, skipping rows without usable
/// dates. Records keep the file order.
pub fn parse_dataset(json: &str) -> Result<Vec<EventRecord>, DatasetError> {
    let rows: Vec<RawBattle> = serde_json::from_str(json)?;
    let mut records = Vec::with_capacity(rows.len());
    for row in &rows {
        match row.normalize() {
            Some(record) => records.push(record),
            None => tracing::warn!(
                target: "battle_timeline::dataset",
                battle = %row.battle,
                year = row.year1,
                month = row.month1,
                day = row.day1,
                "dataset.record_skipped"
            ),
        }
    }
    Ok(records)
}

/// Read the dataset once. There is no retry; callers fall back to an empty
/// dataset on error.
pub async fn load_dataset(path: &Path) -> Result<Vec<EventRecord>, DatasetError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let records = parse_dataset(&json)?;
    tracing::info!(
        target: "battle_timeline::dataset",
        path = %path.display(),
        records = records.len(),
        "dataset.loaded"
    );
    Ok(records)
}

/// `[min(date1), max(date2)]` over all records, `None` for an empty dataset.
pub fn dataset_interval(records: &[EventRecord]) -> Option<Interval> {
    let start = records.iter().map(|r| r.date1).min()?;
    let end = records.iter().map(|r| r.date2).max()?;
    Some(Interval::from_dates(start, end))
}

/// Paris, (longitude, latitude). Every artifact route starts here.
pub const ROUTE_ORIGIN: (f64, f64) = (2.349014, 48.864716);

/// Positions of the battles carrying `name`, in dataset order, after
/// [`ROUTE_ORIGIN`].
pub fn artifact_route(records: &[EventRecord], name: &str) -> Vec<(f64, f64)> {
    std::iter::once(ROUTE_ORIGIN)
        .chain(records.iter().filter(|r| r.has_artifact(name)).map(|r| r.position))
        .collect()
}
