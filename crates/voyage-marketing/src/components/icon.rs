//! Inline SVG icons
//!
//! Outline icons are stored as the inner markup of a 24x24 stroked SVG and
//! rendered through [`Icon`].

use leptos::*;

pub mod icons {
    pub const GLOBE: &str = r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#;
    pub const CLOCK: &str = r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#;
    pub const ZAP: &str = r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#;
    pub const MAP_PIN: &str = r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#;
    pub const CREDIT_CARD: &str = r#"<rect width="20" height="14" x="2" y="5" rx="2"/><line x1="2" x2="22" y1="10" y2="10"/>"#;
    pub const SHIELD: &str = r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#;
    pub const HEADPHONES: &str = r#"<path d="M3 14h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a9 9 0 0 1 18 0v7a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3"/>"#;
    pub const STAR: &str = r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#;
    pub const USERS: &str = r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#;

    pub const ALL: [&str; 9] = [
        GLOBE,
        CLOCK,
        ZAP,
        MAP_PIN,
        CREDIT_CARD,
        SHIELD,
        HEADPHONES,
        STAR,
        USERS,
    ];
}

#[component]
pub fn Icon(name: &'static str, #[prop(default = "h-6 w-6")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            inner_html=name
        ></svg>
    }
}

#[component]
pub fn MenuIcon() -> impl IntoView {
    view! {
        <svg class="h-6 w-6 animate-fadeIn" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
        </svg>
    }
}

#[component]
pub fn CloseIcon() -> impl IntoView {
    view! {
        <svg class="h-6 w-6 animate-fadeIn" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
        </svg>
    }
}

#[component]
pub fn ChevronRightIcon(#[prop(default = "h-5 w-5")] size: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("ml-2 {} group-hover:translate-x-1 transition-transform duration-300", size)
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7"/>
        </svg>
    }
}

/// Five filled stars
#[component]
pub fn StarRating() -> impl IntoView {
    view! {
        <div class="flex items-center mb-4">
            {(0..5).map(|_| view! {
                <Icon
                    name=icons::STAR
                    class="h-5 w-5 text-yellow-400 fill-current hover:scale-125 transition-transform duration-200"
                />
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::icons;

    #[test]
    fn test_icon_markup_is_svg_children() {
        for markup in icons::ALL {
            assert!(markup.starts_with('<'));
            assert!(markup.ends_with("/>"));
            assert!(!markup.contains("<svg"));
        }
    }
}
