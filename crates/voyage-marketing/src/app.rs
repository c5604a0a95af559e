//! Main application component

use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::*;
use crate::pages::*;
use crate::components::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="VoyageAI - Your Personal AI Travel Agent"/>
        <Meta
            name="description"
            content="VoyageAI crafts personalized travel experiences in seconds and books everything instantly."
        />
        <Router>
            <div class="min-h-screen bg-white">
                <MarketingNav/>
                <main>
                    <Routes>
                        <Route path="/" view=LandingPage/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
