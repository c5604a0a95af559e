//! Marketing navigation component

use leptos::*;
use voyage_core::MenuState;

use super::icon::{icons, CloseIcon, Icon, MenuIcon};

const NAV_LINKS: [(&str, &str); 3] = [
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#testimonials", "Reviews"),
];

#[component]
pub fn MarketingNav() -> impl IntoView {
    let (menu, set_menu) = create_signal(MenuState::default());
    let is_open = move || menu.get().is_open();
    let close_menu = move |_: ev::MouseEvent| set_menu.update(|menu| *menu = menu.close());

    view! {
        <nav class="bg-white shadow-sm border-b border-gray-100 animate-slideDown">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    // Logo
                    <a href="/" class="flex items-center">
                        <Icon name=icons::GLOBE class="h-8 w-8 text-purple-600 animate-spin-slow"/>
                        <span class="ml-2 text-2xl font-bold text-gray-900">"VoyageAI"</span>
                    </a>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS.into_iter().map(|(href, label)| view! {
                            <a href=href class="text-gray-600 hover:text-gray-900 transition-all duration-300 hover:scale-105">
                                {label}
                            </a>
                        }).collect_view()}
                        <button class="bg-purple-600 text-white px-6 py-2 rounded-lg hover:bg-purple-700 transition-all duration-300 hover:scale-105 hover:shadow-lg transform active:scale-95">
                            "Get Started"
                        </button>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden">
                        <button
                            class="text-gray-600 hover:text-gray-900 focus:outline-none focus:text-gray-900 transition-all duration-300 hover:scale-110"
                            aria-label="Toggle navigation"
                            on:click=move |_| set_menu.update(|menu| *menu = menu.toggle())
                        >
                            <Show when=is_open fallback=|| view! { <MenuIcon/> }>
                                <CloseIcon/>
                            </Show>
                        </button>
                    </div>
                </div>

                // Mobile menu
                <Show when=is_open>
                    <div class="md:hidden animate-slideDown">
                        <div class="px-2 pt-2 pb-3 space-y-1 bg-white border-t border-gray-100">
                            {NAV_LINKS.into_iter().map(|(href, label)| view! {
                                <a
                                    href=href
                                    on:click=close_menu
                                    class="block px-3 py-2 text-gray-600 hover:text-gray-900 hover:bg-gray-50 rounded-md transition-all duration-300 hover:translate-x-2"
                                >
                                    {label}
                                </a>
                            }).collect_view()}
                            <button
                                on:click=close_menu
                                class="w-full text-left px-3 py-2 bg-purple-600 text-white rounded-md hover:bg-purple-700 transition-all duration-300 hover:scale-105 mt-2"
                            >
                                "Get Started"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
