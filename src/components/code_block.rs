use dioxus::prelude::*;
use dioxus_sdk::clipboard::use_clipboard;

use crate::components::icons::{CheckIcon, CopyIcon};
use crate::components::loading_overlay::LoadingOverlay;
use crate::highlight::{split_lines, token_classes, HighlightContext};

/// Renders `code` as lines of classified token spans. Tokenization comes
/// from the `HighlightContext` provided at the app root; rendering
/// without one is a hard failure.
///
/// The copy control always copies the original `code` string, never the
/// tokenized output.
#[component]
pub fn CodeBlock(
    code: String,
    #[props(default = false)] copyable: bool,
    #[props(default = false)] inline: bool,
    #[props(default = false)] loading: bool,
    #[props(default = false)] show_line_numbers: bool,
    max_height: Option<u32>,
) -> Element {
    let highlight = use_context::<HighlightContext>();

    let line_class = if inline {
        "vl-code-line"
    } else {
        "vl-code-line block"
    };

    let mut lines = Vec::new();
    for (line_idx, line) in split_lines(&code).into_iter().enumerate() {
        let tokens = highlight.tokenizer.line_tokens(line);
        let number = line_idx + 1;

        lines.push(rsx! {
            span { key: "{line_idx}", class: "{line_class}",
                if show_line_numbers {
                    span {
                        class: "vl-code-line-number select-none inline-block min-w-6 mr-3 text-right text-zinc-500",
                        "{number}"
                    }
                }
                {tokens.into_iter().enumerate().map(|(token_idx, token)| {
                    let classes = token_classes(&token.category);
                    rsx! {
                        span { key: "{token_idx}", class: "{classes}", "{token.value}" }
                    }
                })}
            }
        });
    }

    let block_class = if inline {
        "vl-code-block vl-code-block-inline inline font-mono text-sm whitespace-pre"
    } else {
        "vl-code-block relative font-mono text-sm leading-6 whitespace-pre text-zinc-100 bg-zinc-900 border border-zinc-800 rounded-md p-3"
    };
    let wrap_class = if inline {
        "vl-code-wrap inline"
    } else {
        "vl-code-wrap overflow-auto"
    };
    let wrap_style = if inline {
        None
    } else {
        max_height.map(|height| format!("max-height: {}px", height))
    };

    rsx! {
        LoadingOverlay { active: loading,
            div { class: "{block_class}",
                if copyable {
                    CopyButton { text: code.clone() }
                }
                div { class: "{wrap_class}", style: wrap_style,
                    {lines.into_iter()}
                }
            }
        }
    }
}

#[component]
fn CopyButton(text: String) -> Element {
    let mut clipboard = use_clipboard();
    let mut copied = use_signal(|| false);

    let payload = text.clone();
    let copy = move |_| {
        match clipboard.set(payload.clone()) {
            Ok(()) => {
                copied.set(true);
                spawn(async move {
                    tokio::time::sleep(tokio::time::Duration::from_secs(2)).await;
                    copied.set(false);
                });
            }
            Err(e) => tracing::warn!("could not copy to clipboard: {:?}", e),
        }
    };

    rsx! {
        button {
            class: "vl-copy-button absolute top-2 right-2 z-10 p-1.5 rounded-md text-zinc-400 hover:text-zinc-100 hover:bg-zinc-800 transition-all",
            onclick: copy,
            span { class: "sr-only", "{text}" }
            if copied() {
                CheckIcon {}
            } else {
                CopyIcon {}
            }
        }
    }
}
