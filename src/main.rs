use std::sync::Arc;

use grubdash::{service, telemetry, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::setup_tracing();

    let config = Config::from_env();
    let seed = config.load_seed()?;
    info!(
        dishes = seed.dishes.len(),
        orders = seed.orders.len(),
        "loaded seed data"
    );

    let service = Arc::new(service::seeded(seed));
    grubdash::http::serve(service, &config.addr).await?;
    Ok(())
}
