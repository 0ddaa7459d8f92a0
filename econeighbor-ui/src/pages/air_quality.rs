//! Air quality page
//!
//! Map of neighborhood AQI markers with summary stats, the selected-area
//! detail card, and the classification legend.

use leptos::*;

use crate::api;
use crate::components::{Loading, StatCard};
use crate::state::global::{AirSnapshot, GlobalState};

/// Marker/badge color class for a band name
fn band_color(band: &str) -> &'static str {
    match band {
        "good" => "bg-green-500",
        "moderate" => "bg-yellow-500",
        "unhealthy" => "bg-orange-500",
        _ => "bg-red-600",
    }
}

/// Air quality page component
#[component]
pub fn AirQuality() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let error = state.error;
    let snapshot = create_rw_signal(None::<AirSnapshot>);

    // Fetch the panel on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_air().await {
                Ok(s) => snapshot.set(Some(s)),
                Err(e) => error.set(Some(format!("Failed to load air quality: {}", e))),
            }
        });
    });

    let select = move |id: u32| {
        spawn_local(async move {
            match api::select_neighborhood(id).await {
                Ok(s) => snapshot.set(Some(s)),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="space-y-6">
            {move || match snapshot.get() {
                None => view! { <Loading /> }.into_view(),
                Some(s) => {
                    let cleanest_name = s
                        .cleanest
                        .as_ref()
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| "—".to_string());
                    let cleanest_aqi = s
                        .cleanest
                        .as_ref()
                        .map(|c| format!("AQI {}", c.aqi))
                        .unwrap_or_default();
                    let average = s.average_aqi.to_string();
                    let average_band = s.average_band.clone();
                    let alerts = s.alert_count.to_string();

                    view! {
                        // Header stats
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <StatCard
                                icon="🌬️"
                                label="City Average AQI"
                                value=Signal::derive(move || average.clone())
                                hint=Signal::derive(move || average_band.clone())
                            />
                            <StatCard
                                icon="✅"
                                label="Cleanest Area"
                                value=Signal::derive(move || cleanest_name.clone())
                                hint=Signal::derive(move || cleanest_aqi.clone())
                            />
                            <StatCard
                                icon="⚠️"
                                label="Active Alerts"
                                value=Signal::derive(move || alerts.clone())
                            />
                        </div>

                        // Interactive map
                        <div class="bg-white rounded-lg shadow border border-gray-200 overflow-hidden">
                            <div class="p-4 border-b border-gray-200">
                                <h3 class="font-semibold">"📍 Neighborhood Air Quality Map"</h3>
                            </div>

                            <div class="relative h-[400px] bg-gray-50">
                                {s.neighborhoods.iter().map(|n| {
                                    let id = n.id;
                                    let selected = s.selected.as_ref().map(|sel| sel.id) == Some(id);
                                    let ring = if selected { "ring-4 ring-emerald-300" } else { "" };
                                    view! {
                                        <button
                                            on:click=move |_| select(id)
                                            style=format!("left: {}%; top: {}%;", n.lng_pct, n.lat_pct)
                                            class="absolute -translate-x-1/2 -translate-y-1/2"
                                        >
                                            <div class=format!(
                                                "flex items-center justify-center w-12 h-12 rounded-full \
                                                 text-white shadow-lg {} {}",
                                                band_color(&n.band), ring
                                            )>
                                                <span class="text-sm font-bold">{n.aqi}</span>
                                            </div>
                                            <div class="mt-1 text-xs font-medium text-center">
                                                {n.name.clone()}
                                            </div>
                                        </button>
                                    }
                                }).collect_view()}
                            </div>

                            // Selected area details
                            {s.selected.as_ref().map(|detail| view! {
                                <div class="p-4 border-t border-gray-200 bg-gray-50">
                                    <div class="flex items-start justify-between gap-4">
                                        <div>
                                            <h4 class="font-semibold text-lg">{detail.name.clone()}</h4>
                                            <div class="flex items-center gap-2 mt-1">
                                                <span class=format!(
                                                    "px-2 py-0.5 rounded-full text-xs font-medium text-white {}",
                                                    band_color(&detail.band)
                                                )>
                                                    {detail.band_label.clone()}
                                                </span>
                                                <span class="text-sm text-gray-500">
                                                    {format!("AQI: {}", detail.aqi)}
                                                </span>
                                            </div>
                                        </div>
                                        <p class="text-sm text-gray-500 max-w-xs text-right">
                                            {detail.advisory.clone()}
                                        </p>
                                    </div>
                                </div>
                            })}
                        </div>

                        // AQI legend
                        <div class="flex flex-wrap items-center justify-center gap-4 text-sm">
                            <LegendEntry color="bg-green-500" label="Good (0-50)" />
                            <LegendEntry color="bg-yellow-500" label="Moderate (51-100)" />
                            <LegendEntry color="bg-orange-500" label="Unhealthy (101-150)" />
                            <LegendEntry color="bg-red-600" label="Hazardous (150+)" />
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

/// One entry in the AQI legend
#[component]
fn LegendEntry(color: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <div class=format!("w-4 h-4 rounded-full {}", color) />
            <span>{label}</span>
        </div>
    }
}
