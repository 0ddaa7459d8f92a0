//! Resources page
//!
//! Eco score card, the energy/water habit checklists, and the static
//! saving tips.

use leptos::*;

use crate::api;
use crate::components::Loading;
use crate::state::global::{GlobalState, Habit, ResourcesSnapshot};

/// Resources page component
#[component]
pub fn Resources() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let error = state.error;
    let snapshot = create_rw_signal(None::<ResourcesSnapshot>);

    // Fetch the panel on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_resources().await {
                Ok(s) => snapshot.set(Some(s)),
                Err(e) => error.set(Some(format!("Failed to load resources: {}", e))),
            }
        });
    });

    let toggle = move |id: u32| {
        spawn_local(async move {
            match api::toggle_habit(id).await {
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
                    let energy: Vec<Habit> =
                        s.habits.iter().filter(|h| h.category == "energy").cloned().collect();
                    let water: Vec<Habit> =
                        s.habits.iter().filter(|h| h.category == "water").cloned().collect();

                    view! {
                        // Eco score card
                        <div class="bg-emerald-700 rounded-xl p-6 text-white shadow-lg">
                            <div class="flex items-center justify-between">
                                <div>
                                    <h3 class="text-lg font-medium opacity-90">"Your Eco Score"</h3>
                                    <p class="text-sm opacity-75 mt-1">
                                        "Complete daily habits to boost your score"
                                    </p>
                                </div>
                                <div class="text-5xl font-bold">{format!("{}%", s.overall_score)}</div>
                            </div>

                            <div class="grid grid-cols-2 gap-4 mt-6">
                                <div class="bg-white/10 rounded-lg p-3">
                                    <div class="text-sm opacity-90">"⚡ Energy Score"</div>
                                    <div class="text-2xl font-bold mt-1">
                                        {format!("{}%", s.energy_score)}
                                    </div>
                                </div>
                                <div class="bg-white/10 rounded-lg p-3">
                                    <div class="text-sm opacity-90">"💧 Water Score"</div>
                                    <div class="text-2xl font-bold mt-1">
                                        {format!("{}%", s.water_score)}
                                    </div>
                                </div>
                            </div>
                        </div>

                        // Habit checklists
                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                            <HabitList title="⚡ Energy Saving Habits" habits=energy on_toggle=toggle />
                            <HabitList title="💧 Water Saving Habits" habits=water on_toggle=toggle />
                        </div>

                        // Saving tips
                        <div class="bg-white rounded-lg shadow border border-gray-200">
                            <div class="p-4 border-b border-gray-200">
                                <h3 class="font-semibold">"🌿 Smart Saving Tips"</h3>
                            </div>
                            <div class="p-4 grid grid-cols-1 md:grid-cols-2 gap-4">
                                {s.tips.iter().map(|tip| view! {
                                    <div class="p-4 rounded-lg bg-gray-50 border border-gray-200">
                                        <div class="flex items-start justify-between mb-2">
                                            <h4 class="font-medium">{tip.title.clone()}</h4>
                                            <span class="text-xs font-medium px-2 py-0.5 rounded-full bg-emerald-100 text-emerald-700">
                                                {tip.category.clone()}
                                            </span>
                                        </div>
                                        <p class="text-sm text-gray-500 mb-2">{tip.description.clone()}</p>
                                        <div class="text-sm font-medium text-emerald-600">
                                            {format!("Save {}", tip.savings)}
                                        </div>
                                    </div>
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

/// One category's habit checklist
#[component]
fn HabitList<F>(title: &'static str, habits: Vec<Habit>, on_toggle: F) -> impl IntoView
where
    F: Fn(u32) + Copy + 'static,
{
    view! {
        <div class="bg-white rounded-lg shadow border border-gray-200">
            <div class="p-4 border-b border-gray-200">
                <h3 class="font-semibold">{title}</h3>
            </div>
            <div class="p-4 space-y-3">
                {habits.into_iter().map(|habit| {
                    let id = habit.id;
                    let row = if habit.completed {
                        "bg-emerald-50 border-emerald-200"
                    } else {
                        "bg-gray-50 border-gray-200 hover:border-emerald-300"
                    };
                    let check = if habit.completed {
                        "bg-emerald-600 border-emerald-600 text-white"
                    } else {
                        "border-gray-400"
                    };
                    let label = if habit.completed {
                        "line-through opacity-60"
                    } else {
                        ""
                    };
                    view! {
                        <button
                            on:click=move |_| on_toggle(id)
                            class=format!(
                                "w-full flex items-center gap-3 p-3 rounded-lg border transition-all {}",
                                row
                            )
                        >
                            <div class=format!(
                                "flex items-center justify-center w-6 h-6 rounded-full border-2 {}",
                                check
                            )>
                                {habit.completed.then(|| "✓")}
                            </div>
                            <span class=format!("flex-1 text-left text-sm {}", label)>
                                {habit.label.clone()}
                            </span>
                            <span class="text-xs font-medium text-emerald-600">
                                {format!("+{} pts", habit.points)}
                            </span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
