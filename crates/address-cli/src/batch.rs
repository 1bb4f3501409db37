//! Batch validation of address lists

use address_core::{AddressInput, RuleBasedValidator};
use address_types::{BatchJob, BatchSummary, ValidationReport};
use chrono::Utc;

/// Reports and totals of one batch run
pub struct BatchOutcome {
    pub reports: Vec<ValidationReport>,
    pub summary: BatchSummary,
}

/// Validates address lines under an explicit job context
pub struct BatchRunner<'a> {
    validator: &'a RuleBasedValidator,
    job: BatchJob,
}

impl<'a> BatchRunner<'a> {
    pub fn new(validator: &'a RuleBasedValidator) -> Self {
        Self {
            validator,
            job: BatchJob::new(validator.country().code()),
        }
    }

    pub fn job(&self) -> &BatchJob {
        &self.job
    }

    /// Validate every line; blank lines are counted as skipped
    pub fn run<I, S>(&self, lines: I) -> BatchOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        log::info!("Starting batch {} for {}", self.job.job_id, self.job.country);

        let mut summary = BatchSummary::new(&self.job);
        let mut reports = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            match AddressInput::new(line.as_ref()) {
                Ok(input) => {
                    let report = self.validator.report(&input);
                    summary.record(&report.result);
                    reports.push(report);
                }
                Err(e) => {
                    log::debug!("Skipping line {}: {}", index + 1, e);
                    summary.record_skipped();
                }
            }
        }

        let elapsed = Utc::now() - self.job.started_at;
        summary.duration_ms = elapsed
            .num_microseconds()
            .map(|us| us as f64 / 1000.0)
            .unwrap_or_else(|| elapsed.num_milliseconds() as f64);

        log::info!(
            "Batch {} finished: {} processed, {} valid, {} skipped, average score {:.1}",
            self.job.job_id,
            summary.processed,
            summary.valid,
            summary.skipped,
            summary.average_score
        );

        BatchOutcome { reports, summary }
    }
}
