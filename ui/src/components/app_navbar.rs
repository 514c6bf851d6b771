use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// If a builder is registered, `AppNavbar` renders its own nav from the
/// supplied links; otherwise it falls back to any raw `children` passed.
///
/// Wiring for a platform crate (web/desktop/mobile):
/// 1. Define functions returning `Link { to: Route::..., class: "navbar__link" }`.
/// 2. Call `ui::components::app_navbar::register_nav(builder)` at the top of
///    the root `App()`.
/// 3. Use `AppNavbar {}` with no manual nav link children.
pub struct NavBuilder {
    // Each closure returns a Link (or element styled as a nav link) whose
    // children are exactly the label string passed in.
    pub home: fn(label: &str) -> Element,
    pub dashboard: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)("Home");
        let dashboard = (b.dashboard)("Dashboard");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {dashboard}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-mark", "Tallyview" }
                    }
                    span { class: "navbar__brand-subtitle", "Presidential results, year by year" }
                }

                // Navigation (internal builder or legacy children)
                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
