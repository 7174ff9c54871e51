use dioxus::prelude::*;

use crate::components::icons::SpinnerIcon;

/// Pass-through wrapper: renders its children and, while `active`, covers
/// them with a spinner layer that blocks pointer interaction. Carries no
/// state of its own.
#[component]
pub fn LoadingOverlay(#[props(default = false)] active: bool, children: Element) -> Element {
    rsx! {
        div { class: "relative",
            {children}
            if active {
                div { class: "vl-loading-overlay absolute inset-0 z-10 bg-zinc-950/50 flex items-center justify-center rounded-md",
                    SpinnerIcon {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_app() -> Element {
        rsx! {
            LoadingOverlay { active: false,
                p { "ready" }
            }
        }
    }

    fn busy_app() -> Element {
        rsx! {
            LoadingOverlay { active: true,
                p { "working" }
            }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_children_render_without_overlay_when_idle() {
        let html = render(idle_app);
        assert!(html.contains("ready"));
        assert!(!html.contains("vl-loading-overlay"));
    }

    #[test]
    fn test_active_overlay_covers_children() {
        let html = render(busy_app);
        assert!(html.contains("working"));
        assert!(html.contains("vl-loading-overlay"));
    }
}
