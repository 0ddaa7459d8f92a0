//! Stat card component
//!
//! Small summary cards used in the header row of every panel.

use leptos::*;

/// Summary stat card with an icon, label, and value
#[component]
pub fn StatCard(
    /// Emoji or glyph shown in the badge
    icon: &'static str,
    /// Short label above the value
    #[prop(into)]
    label: String,
    /// The stat value, re-rendered reactively
    #[prop(into)]
    value: Signal<String>,
    /// Optional small suffix next to the value
    #[prop(optional, into)]
    hint: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-6 shadow border border-gray-200">
            <div class="flex items-center gap-3">
                <div class="p-3 rounded-xl bg-emerald-50 text-2xl">{icon}</div>
                <div>
                    <p class="text-sm text-gray-500">{label}</p>
                    <p class="text-3xl font-bold">
                        {move || value.get()}
                        {hint.map(|h| view! {
                            <span class="text-sm font-medium text-gray-500 ml-2">
                                {move || h.get()}
                            </span>
                        })}
                    </p>
                </div>
            </div>
        </div>
    }
}
