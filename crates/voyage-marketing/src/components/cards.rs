//! Card components for the landing page
//!
//! Cards inside a tracked section fade in with their section, staggered by
//! `delay`.

use leptos::*;
use voyage_core::PageSection;

use super::icon::{Icon, StarRating};
use crate::reveal::use_reveal;

#[component]
pub fn FeatureCard(
    /// Markup from [`super::icon::icons`]
    icon: &'static str,
    /// Size and colour classes of the icon
    icon_class: &'static str,
    badge: &'static str,
    title: &'static str,
    description: &'static str,
    delay: u32,
) -> impl IntoView {
    let reveal = use_reveal();

    view! {
        <div class=move || format!(
            "bg-white p-8 rounded-2xl shadow-lg hover:shadow-xl transition-all duration-500 hover:scale-105 hover:-translate-y-2 {}",
            reveal.class(PageSection::Features, delay)
        )>
            <div class=format!("{} p-3 rounded-xl w-fit mb-4 transition-transform duration-300", badge)>
                <Icon name=icon class=icon_class/>
            </div>
            <h3 class="text-2xl font-bold text-gray-900 mb-3">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn StepCard(
    number: &'static str,
    badge: &'static str,
    title: &'static str,
    description: &'static str,
    delay: u32,
) -> impl IntoView {
    let reveal = use_reveal();

    view! {
        <div class=move || format!(
            "text-center transition-all duration-800 {}",
            reveal.class(PageSection::HowItWorks, delay)
        )>
            <div class=format!(
                "{} text-white text-2xl font-bold w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-6 hover:scale-110 transition-transform duration-300 hover:shadow-lg",
                badge
            )>
                {number}
            </div>
            <h3 class="text-2xl font-bold text-gray-900 mb-4">{title}</h3>
            <p class="text-gray-600 text-lg">{description}</p>
        </div>
    }
}

#[component]
pub fn TestimonialCard(
    quote: &'static str,
    author: &'static str,
    role: &'static str,
    initials: &'static str,
    /// Background and text classes for the initials avatar
    avatar: &'static str,
    delay: u32,
) -> impl IntoView {
    let reveal = use_reveal();

    view! {
        <div class=move || format!(
            "bg-white p-8 rounded-2xl shadow-lg hover:shadow-xl transition-all duration-500 hover:scale-105 hover:-translate-y-2 {}",
            reveal.class(PageSection::Testimonials, delay)
        )>
            <StarRating/>
            <p class="text-gray-700 text-lg mb-6">"\""{quote}"\""</p>
            <div class="flex items-center">
                <div class=format!("{} w-12 h-12 rounded-full flex items-center justify-center mr-4", avatar)>
                    <span class="font-bold">{initials}</span>
                </div>
                <div>
                    <p class="font-semibold text-gray-900">{author}</p>
                    <p class="text-gray-600">{role}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn TrustBadge(icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <Icon name=icon class="h-8 w-8 hover:scale-110 transition-transform duration-300"/>
        <span class="text-lg font-semibold">{label}</span>
    }
}

#[component]
pub fn SectionHeading(
    section: PageSection,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    let reveal = use_reveal();

    view! {
        <div class=move || format!(
            "text-center mb-16 transition-all duration-1000 {}",
            reveal.class(section, 0)
        )>
            <h2 class="text-4xl font-bold text-gray-900 mb-4">{title}</h2>
            <p class="text-xl text-gray-600 max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}
