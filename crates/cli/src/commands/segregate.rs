use std::path::Path;

use roomwise_core::batch::segregate::segregate_csv;

use crate::commands::CommandResult;

const COMMAND: &str = "segregate";

pub fn run(input: &Path, output_dir: &Path) -> CommandResult {
    match segregate_csv(input, output_dir) {
        Ok(summary) => {
            let counts: Vec<String> =
                summary.files.iter().map(|file| format!("{}={}", file.room, file.rows)).collect();
            CommandResult::success(
                COMMAND,
                format!(
                    "wrote {} rows into {} room files under {} ({})",
                    summary.input_rows,
                    summary.files.len(),
                    output_dir.display(),
                    counts.join(", ")
                ),
            )
        }
        Err(error) => CommandResult::from_application_error(COMMAND, error),
    }
}
