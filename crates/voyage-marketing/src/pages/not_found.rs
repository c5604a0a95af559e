//! Fallback for unknown paths

use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    tracing::debug!("Rendering not-found page");

    view! {
        <section class="py-32 bg-gray-50">
            <div class="max-w-3xl mx-auto px-4 text-center">
                <h1 class="text-5xl font-bold text-gray-900 mb-4">"Lost your way?"</h1>
                <p class="text-xl text-gray-600 mb-8">
                    "This page isn't on the itinerary."
                </p>
                <a href="/" class="inline-block bg-purple-600 text-white px-8 py-4 rounded-xl font-semibold hover:bg-purple-700 transition">
                    "Back to VoyageAI"
                </a>
            </div>
        </section>
    }
}
