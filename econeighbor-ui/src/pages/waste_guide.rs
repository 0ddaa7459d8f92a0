//! Waste guide page
//!
//! Ledger stats, search and category filters over the item grid, the item
//! detail dialog, and the rewards section.

use leptos::*;

use crate::api;
use crate::components::{Loading, StatCard};
use crate::state::global::{GlobalState, WasteSnapshot};

/// Badge color class for a waste category name
fn category_color(category: &str) -> &'static str {
    match category {
        "organic" => "bg-green-600",
        "recyclable" => "bg-blue-600",
        "hazardous" => "bg-red-600",
        _ => "bg-gray-600",
    }
}

/// Waste guide page component
#[component]
pub fn WasteGuide() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let error = state.error;
    let points = state.points;
    let streak = state.streak;
    let snapshot = create_rw_signal(None::<WasteSnapshot>);

    // Every server response refreshes the panel and the global ledger
    let apply = move |s: WasteSnapshot| {
        points.set(s.points);
        streak.set(s.streak);
        snapshot.set(Some(s));
    };

    // Fetch the panel on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_waste().await {
                Ok(s) => apply(s),
                Err(e) => error.set(Some(format!("Failed to load waste guide: {}", e))),
            }
        });
    });

    let search = move |query: String| {
        spawn_local(async move {
            match api::set_search(&query).await {
                Ok(s) => apply(s),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let filter = move |category: Option<String>| {
        spawn_local(async move {
            match api::set_filter(category.as_deref()).await {
                Ok(s) => apply(s),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let inspect = move |id: u32| {
        spawn_local(async move {
            match api::inspect_item(id).await {
                Ok(s) => apply(s),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let close_detail = move |_| {
        spawn_local(async move {
            match api::clear_selection().await {
                Ok(s) => apply(s),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let claim = move |id: u32| {
        spawn_local(async move {
            match api::claim_reward(id).await {
                Ok(response) => apply(response.snapshot),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="space-y-6">
            {move || match snapshot.get() {
                None => view! { <Loading /> }.into_view(),
                Some(s) => {
                    let rewards_ratio = format!("{}/{}", s.rewards_claimed, s.rewards_total);
                    let points_text = s.points.to_string();
                    let streak_text = format!("{} 🔥", s.streak);
                    let active_filter = s.category_filter.clone();

                    view! {
                        // Ledger stats
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <StatCard
                                icon="⭐"
                                label="Your Eco Points"
                                value=Signal::derive(move || points_text.clone())
                            />
                            <StatCard
                                icon="🏆"
                                label="Day Streak"
                                value=Signal::derive(move || streak_text.clone())
                            />
                            <StatCard
                                icon="🎁"
                                label="Rewards Earned"
                                value=Signal::derive(move || rewards_ratio.clone())
                            />
                        </div>

                        // Catalog with search and filters
                        <div class="bg-white rounded-lg shadow border border-gray-200">
                            <div class="p-4 border-b border-gray-200">
                                <h3 class="font-semibold">"🗑️ Smart Waste Guide"</h3>
                                <p class="text-sm text-gray-500 mt-1">
                                    "Search for any item to learn how to dispose of it correctly"
                                </p>
                            </div>

                            <div class="p-4 border-b border-gray-200">
                                <input
                                    type="text"
                                    prop:value=s.search_query.clone()
                                    on:input=move |ev| search(event_target_value(&ev))
                                    placeholder="Search for an item (e.g., plastic bottle, battery)..."
                                    class="w-full px-4 py-3 rounded-lg border border-gray-300 bg-gray-50 \
                                           focus:outline-none focus:ring-2 focus:ring-emerald-400"
                                />

                                // Category filter chips
                                <div class="flex flex-wrap gap-2 mt-4">
                                    {
                                        let all_chip = if active_filter.is_none() {
                                            "bg-emerald-600 text-white"
                                        } else {
                                            "bg-gray-100 text-gray-500 hover:bg-gray-200"
                                        };
                                        view! {
                                            <button
                                                on:click=move |_| filter(None)
                                                class=format!(
                                                    "px-3 py-1.5 rounded-full text-sm font-medium transition-all {}",
                                                    all_chip
                                                )
                                            >
                                                "All"
                                            </button>
                                        }
                                    }
                                    {s.categories.iter().map(|info| {
                                        let name = info.category.clone();
                                        let chip_name = name.clone();
                                        let chip = if active_filter.as_deref() == Some(name.as_str()) {
                                            format!("{} text-white", category_color(&name))
                                        } else {
                                            "bg-gray-100 text-gray-500 hover:bg-gray-200".to_string()
                                        };
                                        view! {
                                            <button
                                                on:click=move |_| filter(Some(chip_name.clone()))
                                                class=format!(
                                                    "px-3 py-1.5 rounded-full text-sm font-medium transition-all {}",
                                                    chip
                                                )
                                            >
                                                {info.label.clone()}
                                            </button>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>

                            // Item grid
                            <div class="p-4">
                                {if s.items.is_empty() {
                                    view! {
                                        <div class="text-center py-12">
                                            <div class="text-4xl mb-4">"🔍"</div>
                                            <p class="text-gray-500">
                                                "No items found. Try a different search term."
                                            </p>
                                        </div>
                                    }.into_view()
                                } else {
                                    view! {
                                        <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-3">
                                            {s.items.iter().map(|item| {
                                                let id = item.id;
                                                view! {
                                                    <button
                                                        on:click=move |_| inspect(id)
                                                        class="flex flex-col items-center gap-2 p-4 rounded-lg \
                                                               bg-gray-50 border border-gray-200 \
                                                               hover:border-emerald-400 hover:shadow-md transition-all"
                                                    >
                                                        <span class="text-3xl">{item.icon.clone()}</span>
                                                        <span class="text-sm font-medium text-center">
                                                            {item.name.clone()}
                                                        </span>
                                                        <span class=format!(
                                                            "text-xs px-2 py-0.5 rounded-full text-white {}",
                                                            category_color(&item.category)
                                                        )>
                                                            {item.bin.clone()}
                                                        </span>
                                                    </button>
                                                }
                                            }).collect_view()}
                                        </div>
                                    }.into_view()
                                }}
                            </div>
                        </div>

                        // Item detail dialog
                        {s.selected.as_ref().map(|detail| {
                            let total = s.points;
                            view! {
                                <div class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4">
                                    <div class="bg-white rounded-xl shadow-lg max-w-md w-full p-6">
                                        <div class="flex items-start justify-between mb-4">
                                            <div class="flex items-center gap-3">
                                                <span class="text-4xl">{detail.icon.clone()}</span>
                                                <div>
                                                    <h3 class="font-semibold text-lg">{detail.name.clone()}</h3>
                                                    <span class="text-sm text-gray-500">
                                                        {detail.category_label.clone()}
                                                    </span>
                                                </div>
                                            </div>
                                            <button
                                                on:click=close_detail
                                                class="p-2 rounded-full hover:bg-gray-100"
                                            >
                                                "✕"
                                            </button>
                                        </div>

                                        <div class=format!(
                                            "rounded-lg p-4 mb-4 text-white {}",
                                            category_color(&detail.category)
                                        )>
                                            <p class="font-medium">
                                                {format!("Dispose in: {}", detail.bin)}
                                            </p>
                                            <p class="text-sm opacity-90 mt-1">
                                                {detail.category_description.clone()}
                                            </p>
                                        </div>

                                        <div class="bg-gray-50 rounded-lg p-4">
                                            <h4 class="font-medium mb-2">"🌿 Eco Tip"</h4>
                                            <p class="text-sm text-gray-600">{detail.tip.clone()}</p>
                                        </div>

                                        <div class="flex items-center justify-between mt-4 pt-4 border-t border-gray-200">
                                            <span class="text-sm text-gray-500">"+2 points for checking!"</span>
                                            <span class="text-sm font-medium text-emerald-600">
                                                {format!("Total: {} pts", total)}
                                            </span>
                                        </div>
                                    </div>
                                </div>
                            }
                        })}

                        // Rewards
                        <div class="bg-white rounded-lg shadow border border-gray-200">
                            <div class="p-4 border-b border-gray-200">
                                <h3 class="font-semibold">"🏆 Rewards & Achievements"</h3>
                            </div>
                            <div class="p-4 space-y-3">
                                {s.rewards.iter().map(|reward| {
                                    let id = reward.id;
                                    let row = match reward.status.as_str() {
                                        "claimed" => "bg-emerald-50 border-emerald-200",
                                        "claimable" => "bg-amber-50 border-amber-200",
                                        _ => "bg-gray-50 border-gray-200",
                                    };
                                    let action = match reward.status.as_str() {
                                        "claimed" => view! {
                                            <span class="text-sm font-medium text-emerald-600">"✓ Claimed"</span>
                                        }.into_view(),
                                        "claimable" => view! {
                                            <button
                                                on:click=move |_| claim(id)
                                                class="px-4 py-2 rounded-lg bg-emerald-600 text-white \
                                                       text-sm font-medium hover:bg-emerald-700"
                                            >
                                                "Claim ›"
                                            </button>
                                        }.into_view(),
                                        _ => view! {
                                            <span class="text-sm text-gray-500">
                                                {format!("{} pts", reward.threshold)}
                                            </span>
                                        }.into_view(),
                                    };
                                    view! {
                                        <div class=format!(
                                            "flex items-center gap-4 p-4 rounded-lg border transition-all {}",
                                            row
                                        )>
                                            <div class="p-3 rounded-xl bg-white text-xl">"🏅"</div>
                                            <div class="flex-1">
                                                <h4 class="font-medium">{reward.title.clone()}</h4>
                                                <p class="text-sm text-gray-500">
                                                    {reward.description.clone()}
                                                </p>
                                            </div>
                                            {action}
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
