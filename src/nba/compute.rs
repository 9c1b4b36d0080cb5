//! Expected-points reduction over shooting splits and free throws.
//!
//! Undefined inputs are handled here and nowhere else: a missing attempt
//! count or percentage contributes zero, and only a total with no defined
//! inputs at all is reported as [`XptError::InsufficientData`].

use serde::Serialize;

use crate::error::{Result, XptError};
use crate::nba::types::{GameLogRow, ShotSplitRow};


const TWO_POINT_VALUE: f64 = 2.0;
const THREE_POINT_VALUE: f64 = 3.0;

fn defined_pct(pct: Option<f64>) -> f64 {
    pct.filter(|p| p.is_finite() && *p >= 0.0).unwrap_or(0.0)
}

fn defined_attempts(attempts: Option<f64>) -> Option<f64> {
    attempts.filter(|a| a.is_finite())
}

/// `attempts × pct × value`. Non-positive attempts contribute exactly zero,
/// whatever the percentage.
fn weighted_points(attempts: Option<f64>, pct: Option<f64>, value: f64) -> f64 {
    match defined_attempts(attempts) {
        Some(a) if a > 0.0 => a * defined_pct(pct) * value,
        _ => 0.0,
    }
}

pub fn two_point_points(attempts: Option<f64>, pct: Option<f64>) -> f64 {
    weighted_points(attempts, pct, TWO_POINT_VALUE)
}

pub fn three_point_points(attempts: Option<f64>, pct: Option<f64>) -> f64 {
    weighted_points(attempts, pct, THREE_POINT_VALUE)
}

/// One defender-distance bucket after joining attempts to percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketContribution {
    pub bucket: String,
    pub fg2a: Option<f64>,
    pub fg2_pct: Option<f64>,
    pub fg3a: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub fg2_points: f64,
    pub fg3_points: f64,
}

impl BucketContribution {
    fn new(attempts: &ShotSplitRow, fg2_pct: Option<f64>, fg3_pct: Option<f64>) -> Self {
        Self {
            bucket: attempts.bucket.clone(),
            fg2a: attempts.fg2a,
            fg2_pct,
            fg3a: attempts.fg3a,
            fg3_pct,
            fg2_points: two_point_points(attempts.fg2a, fg2_pct),
            fg3_points: three_point_points(attempts.fg3a, fg3_pct),
        }
    }

    pub fn points(&self) -> f64 {
        self.fg2_points + self.fg3_points
    }

    fn has_defined_attempts(&self) -> bool {
        defined_attempts(self.fg2a).is_some() || defined_attempts(self.fg3a).is_some()
    }
}

fn same_bucket(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Pair each attempts row with the baseline percentages of the same bucket.
///
/// A bucket absent from the baseline keeps undefined percentages.
pub fn blend_with_baseline(
    attempts: &[ShotSplitRow],
    baseline: &[ShotSplitRow],
) -> Vec<BucketContribution> {
    attempts
        .iter()
        .map(|row| {
            let base = baseline.iter().find(|b| same_bucket(&b.bucket, &row.bucket));
            BucketContribution::new(
                row,
                base.and_then(|b| b.fg2_pct),
                base.and_then(|b| b.fg3_pct),
            )
        })
        .collect()
}

/// Free-throw attempts and make percentage feeding the reduction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FreeThrowRecord {
    pub attempts: Option<f64>,
    pub pct: Option<f64>,
}

impl FreeThrowRecord {
    /// That game's own attempts and percentage.
    pub fn single_game(row: &GameLogRow) -> Self {
        Self {
            attempts: row.fta,
            pct: row.ft_pct,
        }
    }

    /// Season aggregate: attempts summed over every game, percentage the
    /// mean of the defined per-game percentages of games with at least one
    /// attempt. A game without attempts never moves the percentage.
    pub fn season(rows: &[GameLogRow]) -> Self {
        let attempts: Vec<f64> = rows.iter().filter_map(|r| defined_attempts(r.fta)).collect();
        let pcts: Vec<f64> = rows
            .iter()
            .filter(|r| defined_attempts(r.fta).is_some_and(|a| a > 0.0))
            .filter_map(|r| r.ft_pct.filter(|p| p.is_finite()))
            .collect();

        Self {
            attempts: (!attempts.is_empty()).then(|| attempts.iter().sum()),
            pct: (!pcts.is_empty()).then(|| pcts.iter().sum::<f64>() / pcts.len() as f64),
        }
    }

    pub fn expected_points(&self) -> f64 {
        weighted_points(self.attempts, self.pct, 1.0)
    }
}

/// Every term of an xPT computation, plus the floored score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XptBreakdown {
    pub buckets: Vec<BucketContribution>,
    pub field_goal_points: f64,
    pub free_throws: FreeThrowRecord,
    pub free_throw_points: f64,
    pub total: f64,
    pub xpt: i64,
}

/// Sum the bucket and free-throw terms and floor the total once.
pub fn compute_breakdown(
    buckets: Vec<BucketContribution>,
    free_throws: FreeThrowRecord,
) -> Result<XptBreakdown> {
    let any_defined = buckets.iter().any(BucketContribution::has_defined_attempts)
        || defined_attempts(free_throws.attempts).is_some();
    if !any_defined {
        return Err(XptError::InsufficientData);
    }

    let field_goal_points: f64 = buckets.iter().map(BucketContribution::points).sum();
    let free_throw_points = free_throws.expected_points();
    let total = field_goal_points + free_throw_points;
    if !total.is_finite() {
        return Err(XptError::InsufficientData);
    }

    Ok(XptBreakdown {
        buckets,
        field_goal_points,
        free_throws,
        free_throw_points,
        total,
        xpt: total.floor() as i64,
    })
}
