use dioxus::prelude::*;

/// Body text used when neither the factory config nor the caller supplies
/// a message.
pub const GENERIC_DELETE_WARNING: &str =
    "This will be permanently deleted, please confirm you want to delete it.";

/// Prompt panel width, in pixels, unless overridden.
pub const DEFAULT_CONFIRM_WIDTH: u32 = 464;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfirmIcon {
    Warning,
    Trash,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfirmButton {
    Ok,
    Cancel,
}

/// Presentation options for the confirm button.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonOptions {
    pub danger: bool,
    pub disabled: bool,
    pub class: Option<String>,
}

/// Caller overrides, shallow-merged over the factory defaults. The
/// confirm callback and the ok button's danger flag are deliberately not
/// part of this surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalOverrides {
    pub title: Option<String>,
    pub content: Option<String>,
    pub icon: Option<ConfirmIcon>,
    pub ok_text: Option<String>,
    pub cancel_text: Option<String>,
    pub width: Option<u32>,
    pub auto_focus: Option<ConfirmButton>,
    pub ok_button: Option<ButtonOptions>,
}

/// Fully resolved prompt options, as rendered by `ConfirmOutlet`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmOptions {
    pub title: String,
    pub content: String,
    pub icon: ConfirmIcon,
    pub ok_text: String,
    pub cancel_text: String,
    pub width: u32,
    pub auto_focus: Option<ConfirmButton>,
    pub ok_button: ButtonOptions,
}

/// One open prompt: what to show, and what to run if it is confirmed.
/// Lives only while the prompt is open.
#[derive(Clone, PartialEq)]
pub struct ConfirmRequest {
    pub options: ConfirmOptions,
    pub on_ok: EventHandler,
}

/// Dialog host state: at most one pending confirmation, owned app-wide.
/// Provide this at the root with `use_context_provider` and render
/// `ConfirmOutlet` once near it; triggers reach the host through
/// `consume_context` from their handlers.
#[derive(Clone, Copy)]
pub struct ConfirmHost {
    pending: Signal<Option<ConfirmRequest>>,
}

impl ConfirmHost {
    pub fn new() -> Self {
        Self {
            pending: Signal::new(None),
        }
    }

    /// Open a prompt. Fire-and-forget for the caller: the request is
    /// stored and the outlet takes it from here. An unresolved prompt is
    /// replaced, so each activation shows exactly one.
    pub fn confirm(&mut self, options: ConfirmOptions, on_ok: EventHandler) {
        self.pending.set(Some(ConfirmRequest { options, on_ok }));
    }

    /// Close the prompt. `Ok` runs the registered callback with no
    /// arguments; `Cancel` runs nothing. A no-op when nothing is pending.
    pub fn resolve(&mut self, button: ConfirmButton) {
        let request = self.pending.write().take();
        if let Some(request) = request {
            if button == ConfirmButton::Ok {
                request.on_ok.call(());
            }
        }
    }

    pub fn pending(&self) -> Option<ConfirmRequest> {
        self.pending.read().clone()
    }
}
