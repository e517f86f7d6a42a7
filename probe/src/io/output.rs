use narrowphase::io::ext_repr::{ExtCircleBoxManifest, ExtCollisionResult, ExtPairManifest};
use serde::Serialize;

use crate::config::ProbeConfig;

/// Report written for every query file
#[derive(Serialize, Clone, Debug)]
pub struct ProbeReport {
    pub config: ProbeConfig,
    pub summary: ReportSummary,
    pub queries: Vec<QueryReport>,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct ReportSummary {
    pub n_queries: usize,
    pub n_colliding: usize,
    pub n_rejected: usize,
    pub n_failed_verification: usize,
}

impl ReportSummary {
    pub fn new(reports: &[QueryReport]) -> Self {
        reports.iter().fold(
            ReportSummary {
                n_queries: reports.len(),
                ..Default::default()
            },
            |mut summary, report| {
                match &report.outcome {
                    QueryOutcome::Evaluated(e) => {
                        summary.n_colliding += e.result.collision() as usize;
                        summary.n_failed_verification += !e.verification.passed() as usize;
                    }
                    QueryOutcome::Rejected { .. } => summary.n_rejected += 1,
                }
                summary
            },
        )
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct QueryReport {
    pub id: String,
    #[serde(flatten)]
    pub outcome: QueryOutcome,
}

#[derive(Serialize, Clone, Debug)]
#[serde(untagged)]
pub enum QueryOutcome {
    Evaluated(EvaluatedPair),
    /// One of the shapes was malformed, holds the message of the error
    Rejected { error: String },
}

#[derive(Serialize, Clone, Debug)]
pub struct EvaluatedPair {
    #[serde(flatten)]
    pub result: PairResult,
    #[serde(skip_serializing_if = "Verification::is_empty")]
    pub verification: Verification,
}

/// Outcome of the collision test, with a manifest for the pairings that have a generator
#[derive(Serialize, Clone, Debug)]
#[serde(untagged)]
pub enum PairResult {
    Bool { collision: bool },
    Pair(ExtCollisionResult<ExtPairManifest>),
    CircleBox(ExtCollisionResult<ExtCircleBoxManifest>),
}

impl PairResult {
    pub fn collision(&self) -> bool {
        match self {
            PairResult::Bool { collision } => *collision,
            PairResult::Pair(r) => r.collision,
            PairResult::CircleBox(r) => r.collision,
        }
    }
}

/// Outcome of the enabled checks, `None` if a check was disabled or does not apply to the pairing
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Verification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separated: Option<bool>,
}

impl Verification {
    pub fn is_empty(&self) -> bool {
        self.consistent.is_none() && self.separated.is_none()
    }

    pub fn passed(&self) -> bool {
        self.consistent != Some(false) && self.separated != Some(false)
    }
}
