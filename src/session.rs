use crate::consts::{FALLBACK_RATING, RATING_MAX, RATING_MIN};
use crate::dataset::{format_seed, Dataset, SeedCell};
use crate::error::{GaugeError, GaugeResult};
use crate::table::CellValue;
use std::collections::HashMap;
use tracing::debug;

/// (opportunity, differentiator) -> rating in [RATING_MIN, RATING_MAX].
pub type RatingStore = HashMap<(String, String), i64>;

/// One session's mutable ratings plus the diagnostic notes produced while
/// deriving them.
///
/// Construction IS initialization: defaults are derived exactly once, in
/// opportunities-outer / differentiators-inner order, and the store is
/// never regenerated behind the caller's back. `reset` is the only way to
/// re-derive, and it reproduces the original ratings and notes for an
/// unchanged dataset.
#[derive(Debug, Clone)]
pub struct RatingSession {
    ratings: RatingStore,
    notes: Vec<String>,
    opportunities: Vec<String>,
    differentiators: Vec<String>,
}

impl RatingSession {
    pub fn initialize(dataset: &Dataset) -> RatingSession {
        let mut session = RatingSession {
            ratings: HashMap::new(),
            notes: Vec::new(),
            opportunities: dataset.opportunities().to_vec(),
            differentiators: dataset.differentiators().to_vec(),
        };
        session.derive_defaults(dataset);
        session
    }

    /// Discards every edit and re-derives defaults from the dataset.
    pub fn reset(&mut self, dataset: &Dataset) {
        self.ratings.clear();
        self.notes.clear();
        self.opportunities = dataset.opportunities().to_vec();
        self.differentiators = dataset.differentiators().to_vec();
        self.derive_defaults(dataset);
    }

    fn derive_defaults(&mut self, dataset: &Dataset) {
        for name in dataset.ignored_columns() {
            self.notes
                .push(format!("excluded reserved column '{}'", name));
        }

        for opportunity in dataset.opportunities() {
            for differentiator in dataset.differentiators() {
                let (rating, note) = derive_default(dataset, opportunity, differentiator);
                if let Some(note) = note {
                    self.notes.push(note);
                }
                self.ratings
                    .insert((opportunity.clone(), differentiator.clone()), rating);
            }
        }

        debug!(
            "Derived {} default ratings ({} notes).",
            self.ratings.len(),
            self.notes.len()
        );
    }

    /// Sets one rating. Out-of-range and unknown pairs are rejected here,
    /// at the boundary; clamping is only ever the initializer's job.
    pub fn set_rating(
        &mut self,
        opportunity: &str,
        differentiator: &str,
        value: i64,
    ) -> GaugeResult<()> {
        if !(RATING_MIN..=RATING_MAX).contains(&value) {
            return Err(GaugeError::Validation(format!(
                "rating {} for '{}' / '{}' is outside {}..={}",
                value, opportunity, differentiator, RATING_MIN, RATING_MAX
            )));
        }
        match self
            .ratings
            .get_mut(&(opportunity.to_string(), differentiator.to_string()))
        {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(GaugeError::Validation(format!(
                "no slider exists for '{}' / '{}'",
                opportunity, differentiator
            ))),
        }
    }

    pub fn rating(&self, opportunity: &str, differentiator: &str) -> Option<i64> {
        self.ratings
            .get(&(opportunity.to_string(), differentiator.to_string()))
            .copied()
    }

    pub fn store(&self) -> &RatingStore {
        &self.ratings
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn opportunities(&self) -> &[String] {
        &self.opportunities
    }

    pub fn differentiators(&self) -> &[String] {
        &self.differentiators
    }
}

/// Derives the default rating for one pair, returning the rating and an
/// optional diagnostic note. Always lands in [RATING_MIN, RATING_MAX].
fn derive_default(
    dataset: &Dataset,
    opportunity: &str,
    differentiator: &str,
) -> (i64, Option<String>) {
    match dataset.seed_cell(opportunity, differentiator) {
        SeedCell::ColumnMissing => (
            FALLBACK_RATING,
            Some(format!(
                "column '{}' not found; using fallback {} for '{}'",
                differentiator, FALLBACK_RATING, opportunity
            )),
        ),
        SeedCell::OpportunityMissing => (
            FALLBACK_RATING,
            Some(format!(
                "opportunity '{}' not found; using fallback {} for '{}'",
                opportunity, FALLBACK_RATING, differentiator
            )),
        ),
        SeedCell::Value(CellValue::Empty) => (
            FALLBACK_RATING,
            Some(format!(
                "missing value for '{}' / '{}'; using fallback {}",
                opportunity, differentiator, FALLBACK_RATING
            )),
        ),
        SeedCell::Value(CellValue::Text(raw)) => (
            FALLBACK_RATING,
            Some(format!(
                "non-numeric value '{}' for '{}' / '{}'; using fallback {}",
                raw, opportunity, differentiator, FALLBACK_RATING
            )),
        ),
        SeedCell::Value(CellValue::Number(n)) => {
            let rounded = round_half_even(*n);
            let clamped = rounded.clamp(RATING_MIN, RATING_MAX);
            if clamped != rounded {
                (
                    clamped,
                    Some(format!(
                        "clamped '{}' / '{}' from {} to {}",
                        opportunity,
                        differentiator,
                        format_seed(*n),
                        clamped
                    )),
                )
            } else {
                (clamped, None)
            }
        }
    }
}

/// Rounds to the nearest integer with ties to even (2.5 -> 2, 3.5 -> 4).
/// `f64::round` is half-away-from-zero, which would disagree on ties.
pub fn round_half_even(value: f64) -> i64 {
    let floor = value.floor();
    let frac = value - floor;
    let below = floor as i64;
    if frac > 0.5 {
        below + 1
    } else if frac < 0.5 {
        below
    } else if below % 2 == 0 {
        below
    } else {
        below + 1
    }
}
