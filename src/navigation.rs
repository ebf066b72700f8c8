//! This file defines the bottom tab bar shown on every page.

use maud::{Markup, html};

use crate::{
    icon::{IconKind, icon},
    view_state::Tab,
};

/// A link in the tab bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link {
    url: &'static str,
    title: &'static str,
    icon: IconKind,
    is_current: bool,
}

pub struct TabBar {
    links: Vec<Link>,
}

impl TabBar {
    /// Get the tab bar with `current_tab` highlighted.
    pub fn new(current_tab: Tab) -> TabBar {
        let links = Tab::ALL
            .into_iter()
            .map(|tab| Link {
                url: tab.endpoint(),
                title: tab.title(),
                icon: tab.icon(),
                is_current: tab == current_tab,
            })
            .collect();

        TabBar { links }
    }

    pub fn into_html(self) -> Markup {
        let link_class = |is_current: bool| -> &'static str {
            if is_current {
                "flex flex-col items-center gap-1 text-cyan-400 scale-110 transition-all duration-300"
            } else {
                "flex flex-col items-center gap-1 text-gray-400 hover:text-gray-200 transition-all duration-300"
            }
        };

        html!(
            nav
                class="fixed bottom-0 left-0 right-0 z-40 border-t border-gray-700/60
                bg-gray-950/90 backdrop-blur p-4"
            {
                ul class="flex justify-around items-center max-w-md mx-auto" aria-label="Primary"
                {
                    @for link in self.links {
                        li {
                            a
                                href=(link.url)
                                class=(link_class(link.is_current))
                                aria-current=[link.is_current.then_some("page")]
                            {
                                (icon(link.icon, "h-6 w-6"))
                                span class="text-xs font-medium" { (link.title) }
                            }
                        }
                    }
                }
            }
        )
    }
}
