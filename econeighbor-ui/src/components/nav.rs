//! Navigation component
//!
//! Header bar with the brand and the three panel tabs. Route changes are
//! reported to the server session so the shell state stays in sync.

use leptos::*;
use leptos_router::*;

use crate::api;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let location = use_location();

    // Report tab switches to the server session
    create_effect(move |_| {
        let tab = match location.pathname.get().as_str() {
            "/resources" => "resources",
            "/waste" => "waste",
            _ => "air",
        };
        spawn_local(async move {
            if let Err(e) = api::set_active_tab(tab).await {
                web_sys::console::warn_1(&format!("Failed to switch tab: {}", e).into());
            }
        });
    });

    view! {
        <nav class="border-b border-emerald-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🌿"</span>
                        <span class="text-xl font-bold text-white">"EcoNeighbor"</span>
                    </A>

                    // Panel tabs
                    <div class="flex items-center space-x-1">
                        <TabLink href="/" label="Air Quality" icon="🌬️" />
                        <TabLink href="/resources" label="Resources" icon="⚡" />
                        <TabLink href="/waste" label="Waste Guide" icon="🗑️" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual tab link
#[component]
fn TabLink(href: &'static str, label: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-emerald-100 hover:text-white hover:bg-emerald-700 transition-colors"
            active_class="bg-emerald-700 text-white"
        >
            <span class="mr-1">{icon}</span>
            <span class="hidden sm:inline">{label}</span>
        </A>
    }
}
