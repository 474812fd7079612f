mod cli;
mod demo;
mod quiz;
mod render;

use career_fit::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
