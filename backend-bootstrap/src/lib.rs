pub mod context;
pub mod lifecycle;
pub mod telemetry;

pub use lifecycle::run_standalone;

pub async fn run() -> anyhow::Result<()> {
    run_standalone().await
}
