//! Traceability data model.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Progress of a single supply-chain stage.
///
/// Stages move `Pending -> InProgress -> Completed`, but that progression is
/// driven by whoever produced the payload; nothing in this crate advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraceStatus {
    Completed,
    InProgress,
    Pending,
}

impl TraceStatus {
    /// Read a status as it appears in scan payloads. Matching is exact and
    /// case-sensitive.
    ///
    /// `"current"` is the spelling the mock product service uses for the
    /// active stage. Anything unrecognized is treated as pending.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "completed" => TraceStatus::Completed,
            "in-progress" | "in_progress" | "current" => TraceStatus::InProgress,
            _ => TraceStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TraceStatus::Completed => "completed",
            TraceStatus::InProgress => "in-progress",
            TraceStatus::Pending => "pending",
        }
    }

    /// Display quality implied by this status.
    pub fn quality(&self) -> StageQuality {
        match self {
            TraceStatus::Completed => StageQuality::Excellent,
            TraceStatus::InProgress => StageQuality::Good,
            TraceStatus::Pending => StageQuality::Pending,
        }
    }
}

impl fmt::Display for TraceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality badge shown next to a stage. Always derived from [`TraceStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageQuality {
    Excellent,
    Good,
    Pending,
}

impl StageQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageQuality::Excellent => "excellent",
            StageQuality::Good => "good",
            StageQuality::Pending => "pending",
        }
    }
}

impl fmt::Display for StageQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a product's journey.
///
/// Built only by the converter, so `derived_quality` always matches `status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStage {
    pub sequence_number: usize,
    pub stage_name: String,
    pub date: String,
    pub location: String,
    pub status: TraceStatus,
    pub derived_quality: StageQuality,
    pub icon: String,
    /// Random placeholder token. Not a digest of anything.
    pub blockchain_hash: String,
    pub details: String,
    pub temperature: String,
    pub humidity: String,
    pub responsible: String,
}

/// A traceable product instance with its supply-chain timeline.
///
/// The timeline is never empty and is fixed once the trace is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTrace {
    pub id: String,
    pub name: String,
    pub farmer_name: String,
    pub origin_location: String,
    pub harvest_date: String,
    pub quality_score: u8,
    pub certifications: BTreeSet<String>,
    pub batch_id: String,
    pub estimated_shelf_life: String,
    pub carbon_footprint: String,
    pub(crate) timeline: Vec<TraceStage>,
}

impl ProductTrace {
    pub fn timeline(&self) -> &[TraceStage] {
        &self.timeline
    }

    /// The stage currently in progress, if any.
    pub fn current_stage(&self) -> Option<&TraceStage> {
        self.timeline
            .iter()
            .find(|stage| stage.status == TraceStatus::InProgress)
    }

    pub fn completed_count(&self) -> usize {
        self.timeline
            .iter()
            .filter(|stage| stage.status == TraceStatus::Completed)
            .count()
    }

    /// Share of completed stages, 0-100.
    pub fn progress_percent(&self) -> u8 {
        if self.timeline.is_empty() {
            return 0;
        }
        ((self.completed_count() * 100) / self.timeline.len()) as u8
    }
}
