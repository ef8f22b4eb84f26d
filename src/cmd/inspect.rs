use crate::reports;
use clap::Args;
use oppgauge::dataset::Dataset;
use oppgauge::error::GaugeResult;
use oppgauge::session::RatingSession;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Also print the grid of derived default ratings.
    #[arg(long, default_value_t = false)]
    pub defaults: bool,
}

pub fn run(args: InspectArgs, dataset: &Dataset) -> GaugeResult<()> {
    reports::print_dataset_summary(dataset);

    let session = RatingSession::initialize(dataset);
    reports::print_notes(session.notes());

    if args.defaults {
        reports::print_rating_grid(&session);
    }

    Ok(())
}
