//! EcoNeighbor interactive terminal client
//!
//! Run with: cargo run --bin econeighbor-cli
//!
//! Drives one in-process dashboard session from the terminal. Commands map
//! one-to-one onto the intent events:
//!
//! ```text
//! tab <air|resources|waste>   switch panel
//! air                         show the air quality panel
//! select <id>                 select a neighborhood
//! habits                      show the habit checklist and scores
//! toggle <id>                 flip a habit
//! waste                       show the waste guide under current filters
//! search <text>               set the search query (empty to clear)
//! filter [category]           set or clear the category filter
//! inspect <id>                open an item's detail view (+2 points)
//! clear                       close the detail view
//! claim <id>                  attempt a reward claim
//! quit                        exit
//! ```

use std::io::{self, BufRead, Write};

use econeighbor::dashboard::{DashboardEngine, Tab};
use econeighbor::waste::RewardStatus;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "econeighbor=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("EcoNeighbor v{} - type 'help' for commands", env!("CARGO_PKG_VERSION"));

    let engine = DashboardEngine::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let arg = parts.next().unwrap_or("").trim();

        match command {
            "" => {}
            "help" => print_help(),
            "tab" => match parse_tab(arg) {
                Some(tab) => {
                    engine.set_active_tab(tab).await;
                    println!("Active tab: {}", tab.label());
                }
                None => println!("Usage: tab <air|resources|waste>"),
            },
            "air" => show_air(&engine).await,
            "select" => match arg.parse() {
                Ok(id) => match engine.select_neighborhood(id).await {
                    Ok(snapshot) => {
                        if let Some(detail) = snapshot.selected {
                            println!(
                                "{} - AQI {} ({})\n  {}",
                                detail.name, detail.aqi, detail.band_label, detail.advisory
                            );
                        }
                    }
                    Err(e) => println!("{}", e),
                },
                Err(_) => println!("Usage: select <id>"),
            },
            "habits" => show_habits(&engine).await,
            "toggle" => match arg.parse() {
                Ok(id) => match engine.toggle_habit(id).await {
                    Ok(snapshot) => println!(
                        "Eco score {}% (energy {}%, water {}%)",
                        snapshot.overall_score, snapshot.energy_score, snapshot.water_score
                    ),
                    Err(e) => println!("{}", e),
                },
                Err(_) => println!("Usage: toggle <id>"),
            },
            "waste" => show_waste(&engine).await,
            "search" => {
                let snapshot = engine.set_search_query(arg).await;
                println!("{} item(s) match", snapshot.items.len());
            }
            "filter" => {
                if arg.is_empty() {
                    engine.set_category_filter(None).await;
                    println!("Category filter cleared");
                } else {
                    match parse_category(arg) {
                        Some(category) => {
                            let snapshot = engine.set_category_filter(Some(category)).await;
                            println!("{} item(s) in {}", snapshot.items.len(), category.label());
                        }
                        None => println!("Usage: filter [organic|recyclable|hazardous|general]"),
                    }
                }
            }
            "inspect" => match arg.parse() {
                Ok(id) => match engine.select_item(id).await {
                    Ok(snapshot) => {
                        if let Some(detail) = &snapshot.selected {
                            println!(
                                "{} {} -> {}\n  {}",
                                detail.icon, detail.name, detail.bin, detail.tip
                            );
                        }
                        println!("+2 points for checking! Total: {} pts", snapshot.points);
                    }
                    Err(e) => println!("{}", e),
                },
                Err(_) => println!("Usage: inspect <id>"),
            },
            "clear" => {
                engine.clear_item().await;
                println!("Detail view closed");
            }
            "claim" => match arg.parse() {
                Ok(id) => match engine.claim_reward(id).await {
                    Ok((outcome, snapshot)) => println!(
                        "{:?} - {}/{} rewards claimed",
                        outcome, snapshot.rewards_claimed, snapshot.rewards_total
                    ),
                    Err(e) => println!("{}", e),
                },
                Err(_) => println!("Usage: claim <id>"),
            },
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'; type 'help'", other),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  tab <air|resources|waste>   switch panel");
    println!("  air                         show the air quality panel");
    println!("  select <id>                 select a neighborhood");
    println!("  habits                      show the habit checklist and scores");
    println!("  toggle <id>                 flip a habit");
    println!("  waste                       show the waste guide");
    println!("  search <text>               set the search query");
    println!("  filter [category]           set or clear the category filter");
    println!("  inspect <id>                open an item's detail view");
    println!("  clear                       close the detail view");
    println!("  claim <id>                  attempt a reward claim");
    println!("  quit                        exit");
}

fn parse_tab(s: &str) -> Option<Tab> {
    match s.to_lowercase().as_str() {
        "air" => Some(Tab::Air),
        "resources" => Some(Tab::Resources),
        "waste" => Some(Tab::Waste),
        _ => None,
    }
}

fn parse_category(s: &str) -> Option<econeighbor::WasteCategory> {
    use econeighbor::WasteCategory::{General, Hazardous, Organic, Recyclable};
    match s.to_lowercase().as_str() {
        "organic" => Some(Organic),
        "recyclable" => Some(Recyclable),
        "hazardous" => Some(Hazardous),
        "general" => Some(General),
        _ => None,
    }
}

async fn show_air(engine: &DashboardEngine) {
    let snapshot = engine.air_snapshot().await;
    println!(
        "City average AQI {} ({}) - {} alert(s)",
        snapshot.average_aqi, snapshot.average_band, snapshot.alert_count
    );
    for n in &snapshot.neighborhoods {
        let marker = if snapshot.selected.as_ref().map(|s| s.id) == Some(n.id) {
            "*"
        } else {
            " "
        };
        println!("{} [{}] {:<16} AQI {:>3} ({})", marker, n.id, n.name, n.aqi, n.band);
    }
}

async fn show_habits(engine: &DashboardEngine) {
    let snapshot = engine.resources_snapshot().await;
    println!(
        "Eco score {}% (energy {}%, water {}%)",
        snapshot.overall_score, snapshot.energy_score, snapshot.water_score
    );
    for h in &snapshot.habits {
        let check = if h.completed { "x" } else { " " };
        println!(
            "  [{}] ({}) {:<44} +{} pts [{}]",
            check, h.id, h.label, h.points, h.category
        );
    }
}

async fn show_waste(engine: &DashboardEngine) {
    let snapshot = engine.waste_snapshot().await;
    println!(
        "{} pts | {} day streak | {}/{} rewards",
        snapshot.points, snapshot.streak, snapshot.rewards_claimed, snapshot.rewards_total
    );

    if snapshot.items.is_empty() {
        println!("No items found. Try a different search term.");
    } else {
        for item in &snapshot.items {
            println!("  ({}) {} {:<18} {}", item.id, item.icon, item.name, item.bin);
        }
    }

    println!("Rewards:");
    for reward in &snapshot.rewards {
        let status = match reward.status {
            RewardStatus::Claimed => "claimed".to_string(),
            RewardStatus::Claimable => "claimable!".to_string(),
            RewardStatus::Unclaimed => format!("{} pts needed", reward.threshold),
        };
        println!("  ({}) {:<18} {}", reward.id, reward.title, status);
    }
}
