mod cli;
mod infra;
mod render;
mod routes;
mod server;

pub use routes::signals_router;

use crate::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
