use dioxus::prelude::*;

use crate::components::icons::confirm_icon;
use crate::confirm::{ConfirmButton, ConfirmHost};

/// Renders the host's pending confirmation prompt, if any. Mount this
/// once near the root, next to the `ConfirmHost` provider; clicking the
/// backdrop or the cancel button closes the prompt without running the
/// confirm callback.
#[component]
pub fn ConfirmOutlet() -> Element {
    let host = use_context::<ConfirmHost>();

    let Some(request) = host.pending() else {
        return rsx! {};
    };
    let options = request.options;

    let icon = confirm_icon(options.icon);
    let panel_style = format!("width: {}px", options.width);

    let mut ok_class = String::from("px-4 py-2 rounded-md text-sm font-medium transition-all");
    if options.ok_button.danger {
        ok_class.push_str(" bg-red-600 hover:bg-red-700");
    } else {
        ok_class.push_str(" bg-zinc-100 hover:bg-white text-zinc-900");
    }
    if options.ok_button.disabled {
        ok_class.push_str(" opacity-50 cursor-not-allowed");
    }
    if let Some(extra) = &options.ok_button.class {
        ok_class.push(' ');
        ok_class.push_str(extra);
    }

    let ok_disabled = options.ok_button.disabled;
    let focus_ok = options.auto_focus == Some(ConfirmButton::Ok);
    let focus_cancel = options.auto_focus == Some(ConfirmButton::Cancel);

    rsx! {
        div {
            class: "vl-confirm-backdrop fixed text-zinc-100 inset-0 bg-black/60 backdrop-blur-sm flex items-center justify-center p-4 z-50",
            onclick: move |_| consume_context::<ConfirmHost>().resolve(ConfirmButton::Cancel),

            div {
                class: "bg-zinc-900 border border-zinc-800 rounded-lg shadow-2xl max-w-full",
                style: "{panel_style}",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "p-6 flex items-start gap-3",
                    span { class: "text-amber-400 shrink-0", {icon} }
                    div { class: "space-y-2",
                        h2 { class: "text-lg font-semibold", "{options.title}" }
                        p { class: "text-sm text-zinc-300", "{options.content}" }
                    }
                }

                div { class: "p-6 pt-0 flex gap-3 justify-end",
                    button {
                        class: "px-4 py-2 bg-zinc-800 hover:bg-zinc-700 border border-zinc-700 rounded-md text-sm font-medium transition-all",
                        autofocus: focus_cancel,
                        onclick: move |_| consume_context::<ConfirmHost>().resolve(ConfirmButton::Cancel),
                        "{options.cancel_text}"
                    }
                    button {
                        class: "{ok_class}",
                        autofocus: focus_ok,
                        disabled: ok_disabled,
                        onclick: move |_| consume_context::<ConfirmHost>().resolve(ConfirmButton::Ok),
                        "{options.ok_text}"
                    }
                }
            }
        }
    }
}
