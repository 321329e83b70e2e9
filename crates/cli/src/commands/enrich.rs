use std::path::Path;

use roomwise_core::batch::enrich::enrich_csv;

use crate::commands::{rng_for, CommandResult};

const COMMAND: &str = "enrich";

pub fn run(input: &Path, output: &Path, seed: Option<u64>) -> CommandResult {
    let mut rng = rng_for(seed);
    match enrich_csv(input, output, &mut rng) {
        Ok(summary) => CommandResult::success(
            COMMAND,
            format!(
                "enriched {} of {} rows into {} (dropped {} untitled; positive={} neutral={} negative={})",
                summary.written_rows,
                summary.input_rows,
                output.display(),
                summary.dropped_rows,
                summary.positive,
                summary.neutral,
                summary.negative
            ),
        ),
        Err(error) => CommandResult::from_application_error(COMMAND, error),
    }
}
