//! App root component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{AirQuality, Resources, WasteGuide};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 text-gray-900 flex flex-col">
                // Hero header with navigation
                <header class="bg-emerald-800 text-white">
                    <Nav />
                    <div class="container mx-auto px-4 py-8 text-center">
                        <h1 class="text-3xl md:text-5xl font-bold mb-4">
                            "Live Sustainably, Impact Locally"
                        </h1>
                        <p class="text-lg opacity-80 max-w-2xl mx-auto">
                            "Monitor air quality, save resources, and reduce waste - all from \
                             your neighborhood."
                        </p>
                    </div>
                </header>

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=AirQuality />
                        <Route path="/resources" view=Resources />
                        <Route path="/waste" view=WasteGuide />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with the running ledger
                <Footer />

                // Error toast
                <ErrorToast />
            </div>
        </Router>
    }
}

/// Footer showing the brand line and the current eco points
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white border-t border-gray-200 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="flex items-center space-x-2">
                    <span>"🌿"</span>
                    <span class="font-semibold">"EcoNeighbor"</span>
                    <span class="text-gray-500">"— Making sustainability local"</span>
                </div>

                <div class="text-gray-500">
                    {move || {
                        let points = state.points.get();
                        if points > 0 {
                            format!("{} eco points", points)
                        } else {
                            String::new()
                        }
                    }}
                </div>
            </div>
        </footer>
    }
}

/// Dismissable error toast fed by the global error signal
#[component]
fn ErrorToast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let error = state.error;

    view! {
        {move || {
            error.get().map(|message| view! {
                <div class="fixed bottom-16 right-4 bg-red-600 text-white rounded-lg shadow-lg \
                            px-4 py-3 flex items-center gap-3 z-50">
                    <span class="text-sm">{message}</span>
                    <button
                        on:click=move |_| error.set(None)
                        class="text-white/80 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>
            })
        }}
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg \
                       font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
