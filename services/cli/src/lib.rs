mod cli;
mod render;

use contact_triage::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
