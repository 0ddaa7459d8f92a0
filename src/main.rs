//! EcoNeighbor demo walkthrough
//!
//! Drives one dashboard session through all three panels and logs the
//! derived statistics after each step.

use econeighbor::dashboard::{DashboardEngine, DashboardResult, Tab};
use econeighbor::waste::WasteCategory;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "econeighbor=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("EcoNeighbor Dashboard v{}", env!("CARGO_PKG_VERSION"));

    let engine = DashboardEngine::new();

    demo_air(&engine).await?;
    demo_resources(&engine).await?;
    demo_waste(&engine).await?;

    tracing::info!("Walkthrough complete");
    Ok(())
}

async fn demo_air(engine: &DashboardEngine) -> DashboardResult<()> {
    engine.set_active_tab(Tab::Air).await;
    let snapshot = engine.air_snapshot().await;

    tracing::info!(
        "Air quality: city average AQI {} ({}), {} areas monitored, {} alert(s)",
        snapshot.average_aqi,
        snapshot.average_band,
        snapshot.neighborhoods.len(),
        snapshot.alert_count
    );

    if let Some(cleanest) = &snapshot.cleanest {
        tracing::info!("Cleanest area: {} (AQI {})", cleanest.name, cleanest.aqi);
    }

    // Inspect the worst reading on the map
    if let Some(worst) = snapshot.neighborhoods.iter().max_by_key(|n| n.aqi) {
        let snapshot = engine.select_neighborhood(worst.id).await?;
        if let Some(detail) = snapshot.selected {
            tracing::info!("{}: AQI {} - {}", detail.name, detail.aqi, detail.advisory);
        }
    }

    Ok(())
}

async fn demo_resources(engine: &DashboardEngine) -> DashboardResult<()> {
    engine.set_active_tab(Tab::Resources).await;

    // Complete every energy habit
    let habit_ids: Vec<u32> = engine
        .resources_snapshot()
        .await
        .habits
        .iter()
        .filter(|h| h.category == econeighbor::HabitCategory::Energy)
        .map(|h| h.id)
        .collect();

    let mut last = None;
    for id in habit_ids {
        last = Some(engine.toggle_habit(id).await?);
    }

    if let Some(snapshot) = last {
        tracing::info!(
            "Eco score {}% (energy {}%, water {}%) after {} habit(s)",
            snapshot.overall_score,
            snapshot.energy_score,
            snapshot.water_score,
            snapshot.completed_count
        );
    }

    Ok(())
}

async fn demo_waste(engine: &DashboardEngine) -> DashboardResult<()> {
    engine.set_active_tab(Tab::Waste).await;

    // Look up battery disposal
    let snapshot = engine.set_search_query("batter").await;
    tracing::info!("Search 'batter': {} item(s)", snapshot.items.len());

    if let Some(item) = snapshot.items.first() {
        let snapshot = engine.select_item(item.id).await?;
        if let Some(detail) = &snapshot.selected {
            tracing::info!("{} -> {}: {}", detail.name, detail.bin, detail.tip);
        }
        tracing::info!("Eco points after inspection: {}", snapshot.points);
    }

    // Browse one category
    engine.set_search_query("").await;
    let snapshot = engine
        .set_category_filter(Some(WasteCategory::Hazardous))
        .await;
    tracing::info!("Hazardous items: {}", snapshot.items.len());

    // Claim everything the ledger allows
    let claimable: Vec<u32> = snapshot
        .rewards
        .iter()
        .filter(|r| r.status == econeighbor::RewardStatus::Claimable)
        .map(|r| r.id)
        .collect();
    for id in claimable {
        let (outcome, _) = engine.claim_reward(id).await?;
        tracing::info!("Claimed reward {}: {:?}", id, outcome);
    }

    let snapshot = engine.waste_snapshot().await;
    tracing::info!(
        "Rewards: {}/{} claimed, {} points, {} day streak",
        snapshot.rewards_claimed,
        snapshot.rewards_total,
        snapshot.points,
        snapshot.streak
    );

    Ok(())
}
