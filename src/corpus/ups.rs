//! Guaranteed-scheme corpus tracking
//!
//! Maintains two parallel corpora. Before the switch date only the notional
//! benchmark compounds at the guaranteed rate while the individual corpus
//! mirrors the NPS corpus as a reference snapshot. From the switch date
//! onward both receive the scheme contribution and compound at the
//! guaranteed rate, so they diverge only through the one-time seed
//! difference at the switch point.

use log::debug;

use crate::assumptions::Assumptions;
use crate::params::SchemeParameters;
use crate::timeline::SalaryTimeline;

/// Fills `benchmark_corpus` and `individual_corpus` on every record.
/// Requires `nps_corpus` to be populated first.
pub struct UpsCorpusTracker<'a> {
    assumptions: &'a Assumptions,
    params: &'a SchemeParameters,
}

impl<'a> UpsCorpusTracker<'a> {
    pub fn new(assumptions: &'a Assumptions, params: &'a SchemeParameters) -> Self {
        Self { assumptions, params }
    }

    /// Run the fold, writing both corpora into each record in place.
    pub fn accumulate(&self, timeline: &mut SalaryTimeline) {
        let monthly_rate = self.params.guaranteed_monthly_rate();
        let ups_rate = self.assumptions.contributions.ups_rate;
        let switch_date = self.params.switch_date;

        let mut benchmark = 0.0;
        let mut individual = 0.0;
        for record in timeline.records.iter_mut() {
            let contribution = record.gross_salary * ups_rate;
            if record.date() <= switch_date {
                benchmark = (benchmark + contribution) * (1.0 + monthly_rate);
                individual = record.nps_corpus;
            } else {
                benchmark = (benchmark + contribution) * (1.0 + monthly_rate);
                individual = (individual + contribution) * (1.0 + monthly_rate);
            }
            record.benchmark_corpus = benchmark;
            record.individual_corpus = individual;
        }

        debug!("tracked UPS corpora over {} months", timeline.len());
    }
}
