mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use module_buddy::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
