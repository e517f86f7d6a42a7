use itertools::Itertools;
use log::{debug, error, info, warn};
use narrowphase::collision::{CircleBoxManifest, PairManifest};
use narrowphase::error::{InvalidParameter, Operation};
use narrowphase::geometry::geo_traits::{CollidesWith, Separation};
use narrowphase::io::export::export_result;
use narrowphase::io::import::{import_box, import_capsule, import_circle};
use narrowphase::query;

use crate::config::ProbeConfig;
use crate::io::ext_query::{ExtPair, ExtQuery, ExtQueryFile};
use crate::io::output::{
    EvaluatedPair, PairResult, ProbeReport, QueryOutcome, QueryReport, ReportSummary,
    Verification,
};

/// Evaluates every query of the file in order.
/// Malformed queries are recorded in the report and do not stop the run.
pub fn evaluate_all(query_file: &ExtQueryFile, config: &ProbeConfig) -> ProbeReport {
    let queries = query_file
        .queries
        .iter()
        .map(|q| evaluate(q, config))
        .collect_vec();
    let summary = ReportSummary::new(&queries);

    info!(
        "[EVAL] {} queries evaluated ({}), {} colliding, {} rejected",
        summary.n_queries,
        query_file
            .queries
            .iter()
            .counts_by(|q| q.pair.kind())
            .into_iter()
            .sorted()
            .map(|(kind, n)| format!("{n}x {kind}"))
            .join(", "),
        summary.n_colliding,
        summary.n_rejected,
    );
    if summary.n_failed_verification > 0 {
        let failed = queries
            .iter()
            .filter(|r| match &r.outcome {
                QueryOutcome::Evaluated(e) => !e.verification.passed(),
                QueryOutcome::Rejected { .. } => false,
            })
            .map(|r| &r.id)
            .join(", ");
        warn!("[EVAL] verification failed for: {failed}");
    }

    ProbeReport {
        config: *config,
        summary,
        queries,
    }
}

pub fn evaluate(query: &ExtQuery, config: &ProbeConfig) -> QueryReport {
    let outcome = match evaluate_pair(&query.pair, config) {
        Ok(evaluated) => {
            debug!(
                "[EVAL] {} ({}): collision: {}, {:?}",
                query.id,
                query.pair.kind(),
                evaluated.result.collision(),
                evaluated.verification
            );
            QueryOutcome::Evaluated(evaluated)
        }
        Err(err) => {
            error!("[EVAL] {}: {err}", query.id);
            QueryOutcome::Rejected {
                error: err.to_string(),
            }
        }
    };
    QueryReport {
        id: query.id.clone(),
        outcome,
    }
}

fn evaluate_pair(pair: &ExtPair, config: &ProbeConfig) -> Result<EvaluatedPair, InvalidParameter> {
    let tolerance = config.separation_tolerance;
    match pair {
        ExtPair::CircleCircle { left, right } => {
            let collision = query::bool_circle_to_circle(left, right)?;
            let result = query::mani_circle_to_circle(left, right)?;
            let separated = match (config.verify_separation, result.manifest()) {
                (true, Some(m)) => {
                    let invalid = InvalidParameter::raised_by(Operation::ManiCircleToCircle);
                    let left = import_circle(left).map_err(&invalid)?;
                    let right = import_circle(right).map_err(&invalid)?;
                    let moved = left.translated(m.left_distance);
                    Some(closes_gap(&moved, &right, |m: PairManifest| m.left_distance.length(), tolerance))
                }
                _ => None,
            };
            Ok(EvaluatedPair {
                verification: Verification {
                    consistent: config.verify_consistency.then_some(collision == result.collision()),
                    separated,
                },
                result: PairResult::Pair(export_result(result)),
            })
        }
        ExtPair::BoxBox { left, right } => {
            let collision = query::bool_box_to_box(left, right)?;
            let result = query::mani_box_to_box(left, right)?;
            let separated = match (config.verify_separation, result.manifest()) {
                (true, Some(m)) => {
                    let invalid = InvalidParameter::raised_by(Operation::ManiBoxToBox);
                    let left = import_box(left).map_err(&invalid)?;
                    let right = import_box(right).map_err(&invalid)?;
                    let moved = left.translated(m.left_distance);
                    Some(closes_gap(&moved, &right, |m: PairManifest| m.left_distance.length(), tolerance))
                }
                _ => None,
            };
            Ok(EvaluatedPair {
                verification: Verification {
                    consistent: config.verify_consistency.then_some(collision == result.collision()),
                    separated,
                },
                result: PairResult::Pair(export_result(result)),
            })
        }
        ExtPair::CircleBox { circle, aabox } => {
            let collision = query::bool_circle_to_box(circle, aabox)?;
            let result = query::mani_circle_to_box(circle, aabox)?;
            let separated = match (config.verify_separation, result.manifest()) {
                (true, Some(m)) => {
                    let invalid = InvalidParameter::raised_by(Operation::ManiCircleToBox);
                    let circle = import_circle(circle).map_err(&invalid)?;
                    let aabox = import_box(aabox).map_err(&invalid)?;
                    let moved = circle.translated(m.circle_distance);
                    Some(closes_gap(&moved, &aabox, |m: CircleBoxManifest| m.circle_distance.length(), tolerance))
                }
                _ => None,
            };
            Ok(EvaluatedPair {
                verification: Verification {
                    consistent: config.verify_consistency.then_some(collision == result.collision()),
                    separated,
                },
                result: PairResult::CircleBox(export_result(result)),
            })
        }
        ExtPair::CapsuleCapsule { left, right } => {
            let collision = query::bool_capsule_to_capsule(left, right)?;
            //without a manifest generator, the predicate is checked against itself in reverse order
            let consistent = match config.verify_consistency {
                true => Some(collision == query::bool_capsule_to_capsule(right, left)?),
                false => None,
            };
            Ok(EvaluatedPair {
                verification: Verification {
                    consistent,
                    separated: None,
                },
                result: PairResult::Bool { collision },
            })
        }
        ExtPair::CapsuleCircle { capsule, circle } => {
            let collision = query::bool_capsule_to_circle(capsule, circle)?;
            //checked against the circle side of the pairing
            let consistent = match config.verify_consistency {
                true => {
                    let invalid = InvalidParameter::raised_by(Operation::BoolCapsuleToCircle);
                    let capsule = import_capsule(capsule).map_err(&invalid)?;
                    let circle = import_circle(circle).map_err(&invalid)?;
                    Some(circle.collides_with(&capsule) == collision)
                }
                false => None,
            };
            Ok(EvaluatedPair {
                verification: Verification {
                    consistent,
                    separated: None,
                },
                result: PairResult::Bool { collision },
            })
        }
    }
}

/// Whether `moved` no longer penetrates `other` deeper than `tolerance`
fn closes_gap<S, T>(
    moved: &S,
    other: &T,
    depth: impl FnOnce(S::Manifest) -> f32,
    tolerance: f32,
) -> bool
where
    S: Separation<T>,
{
    let residual = moved.separation(other).into_manifest().map_or(0.0, depth);
    residual <= tolerance
}
