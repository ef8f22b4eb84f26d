use crate::reports;
use clap::Args;
use oppgauge::dataset::Dataset;
use oppgauge::error::{GaugeError, GaugeResult};
use oppgauge::ranking;
use oppgauge::session::RatingSession;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    /// Rating override, "Opportunity:Differentiator=N" with N in 1..=5.
    /// Repeatable; applied in order before totals are computed.
    #[arg(long = "set", value_name = "OPP:DIFF=N")]
    pub set: Vec<String>,

    /// Print the diagnostic notes recorded while deriving defaults.
    #[arg(long, default_value_t = false)]
    pub notes: bool,
}

pub fn run(args: RankArgs, dataset: &Dataset) -> GaugeResult<()> {
    let mut session = RatingSession::initialize(dataset);

    for raw in &args.set {
        let (opportunity, differentiator, value) = parse_override(raw)?;
        session.set_rating(&opportunity, &differentiator, value)?;
        info!("Set '{}' / '{}' = {}", opportunity, differentiator, value);
    }

    if args.notes {
        reports::print_notes(session.notes());
    }

    let totals = ranking::aggregate_totals(
        session.store(),
        session.opportunities(),
        session.differentiators(),
    );
    let ranked = ranking::rank(totals);

    reports::print_ranking(&ranked, session.differentiators().len());
    reports::print_bar_chart(&ranked);

    Ok(())
}

/// Splits "Opportunity:Differentiator=N". The value is taken after the
/// last '='; the differentiator after the last ':' before it, so
/// opportunity names may themselves contain ':'.
fn parse_override(raw: &str) -> GaugeResult<(String, String, i64)> {
    let (pair, value_str) = raw
        .rsplit_once('=')
        .ok_or_else(|| bad_override(raw, "missing '='"))?;
    let (opportunity, differentiator) = pair
        .rsplit_once(':')
        .ok_or_else(|| bad_override(raw, "missing ':'"))?;
    let value: i64 = value_str
        .trim()
        .parse()
        .map_err(|_| bad_override(raw, "value is not an integer"))?;

    if opportunity.trim().is_empty() || differentiator.trim().is_empty() {
        return Err(bad_override(raw, "empty opportunity or differentiator"));
    }

    Ok((
        opportunity.trim().to_string(),
        differentiator.trim().to_string(),
        value,
    ))
}

fn bad_override(raw: &str, why: &str) -> GaugeError {
    GaugeError::Validation(format!(
        "bad --set '{}' ({}); expected \"Opportunity:Differentiator=N\"",
        raw, why
    ))
}
