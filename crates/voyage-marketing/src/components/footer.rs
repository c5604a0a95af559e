//! Site footer

use leptos::*;

use super::icon::{icons, Icon};

const PRODUCT_LINKS: [&str; 4] = ["Features", "How It Works", "Pricing", "API"];
const COMPANY_LINKS: [&str; 4] = ["About Us", "Careers", "Privacy Policy", "Terms of Service"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-4 gap-8">
                    <div class="md:col-span-2">
                        <div class="flex items-center mb-4">
                            <Icon name=icons::GLOBE class="h-8 w-8 text-purple-400"/>
                            <span class="ml-2 text-2xl font-bold">"VoyageAI"</span>
                        </div>
                        <p class="text-gray-400 mb-6 max-w-md">
                            "The world's most intelligent travel planning platform. "
                            "Powered by AI, designed for modern travelers."
                        </p>
                        <div class="flex space-x-4 items-center">
                            <div class="bg-gray-800 p-2 rounded-lg">
                                <Icon name=icons::SHIELD class="h-5 w-5 text-purple-400"/>
                            </div>
                            <span class="text-sm text-gray-400">"SOC 2 Type II Certified"</span>
                        </div>
                    </div>

                    <FooterColumn title="Product" links=&PRODUCT_LINKS/>
                    <FooterColumn title="Company" links=&COMPANY_LINKS/>
                </div>

                <div class="border-t border-gray-800 mt-12 pt-8 text-center">
                    <p class="text-gray-400">
                        "© 2025 VoyageAI. All rights reserved. "
                        "Making travel planning effortless, one trip at a time."
                    </p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(title: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-lg font-semibold mb-4">{title}</h4>
            <ul class="space-y-2 text-gray-400">
                {links.iter().map(|label| view! {
                    <li><a href="#" class="hover:text-white transition-colors">{*label}</a></li>
                }).collect_view()}
            </ul>
        </div>
    }
}
