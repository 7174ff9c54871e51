use dioxus::prelude::*;

use crate::components::icons::confirm_icon;
use crate::confirm::{
    ConfirmHost, ConfirmIcon, ConfirmOptions, ModalOverrides, DEFAULT_CONFIRM_WIDTH,
    GENERIC_DELETE_WARNING,
};

pub const THREAD_DELETE_WARNING: &str =
    "This will permanently delete all results history in this thread, please confirm you want to delete it.";

/// Fixed at factory-construction time and shared by every component the
/// factory produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteModalConfig {
    /// Icon rendered on the trigger. The prompt keeps its warning icon
    /// regardless; only `modal_props` can change that one.
    pub icon: Option<ConfirmIcon>,
    /// Subject of the synthesized question, "Are you sure you want to
    /// delete this {item_name}?". May be empty.
    pub item_name: String,
    /// Prompt body. Falls back to the generic deletion warning.
    pub content: Option<String>,
}

/// Props accepted by components produced by [`make_delete_modal`].
#[derive(Props, Clone, PartialEq)]
pub struct DeleteModalProps {
    /// Consumed here so it never reaches the trigger. The prompt body is
    /// controlled by the factory config and `modal_props`.
    pub content: Option<String>,
    #[props(default)]
    pub modal_props: ModalOverrides,
    pub on_confirm: EventHandler,
    #[props(default)]
    pub disabled: bool,
    pub class: Option<String>,
    pub style: Option<String>,
}

/// Props forwarded to the trigger component.
#[derive(Props, Clone, PartialEq)]
pub struct DeleteTriggerProps {
    pub icon: Option<ConfirmIcon>,
    #[props(default)]
    pub disabled: bool,
    pub class: Option<String>,
    pub style: Option<String>,
    pub onclick: EventHandler,
}

/// Resolves the prompt options for one activation: factory config first,
/// caller overrides shallow-merged on top. The ok button stays a danger
/// action even when the caller's button options say otherwise; their
/// remaining button options are kept.
pub fn build_confirm_options(
    config: &DeleteModalConfig,
    overrides: &ModalOverrides,
) -> ConfirmOptions {
    let mut ok_button = overrides.ok_button.clone().unwrap_or_default();
    ok_button.danger = true;

    ConfirmOptions {
        title: overrides.title.clone().unwrap_or_else(|| {
            format!("Are you sure you want to delete this {}?", config.item_name)
        }),
        content: overrides
            .content
            .clone()
            .or_else(|| config.content.clone())
            .unwrap_or_else(|| GENERIC_DELETE_WARNING.to_string()),
        icon: overrides.icon.unwrap_or(ConfirmIcon::Warning),
        ok_text: overrides
            .ok_text
            .clone()
            .unwrap_or_else(|| "Delete".to_string()),
        cancel_text: overrides
            .cancel_text
            .clone()
            .unwrap_or_else(|| "Cancel".to_string()),
        width: overrides.width.unwrap_or(DEFAULT_CONFIRM_WIDTH),
        auto_focus: overrides.auto_focus,
        ok_button,
    }
}

/// Builds a delete-confirmation component around `trigger`. The produced
/// component renders the trigger; activating it opens a confirmation
/// prompt on the ambient [`ConfirmHost`], and `on_confirm` runs only
/// after an explicit confirm.
pub fn make_delete_modal(
    trigger: fn(DeleteTriggerProps) -> Element,
    config: DeleteModalConfig,
) -> impl Fn(DeleteModalProps) -> Element + Clone + 'static {
    move |props: DeleteModalProps| {
        let options = build_confirm_options(&config, &props.modal_props);
        let on_confirm = props.on_confirm;
        let onclick = EventHandler::new(move |_| {
            consume_context::<ConfirmHost>().confirm(options.clone(), on_confirm);
        });

        trigger(DeleteTriggerProps {
            icon: config.icon,
            disabled: props.disabled,
            class: props.class.clone(),
            style: props.style.clone(),
            onclick,
        })
    }
}

/// Text-link trigger used when the caller has nothing better. Colored as
/// a destructive action unless `disabled`, which changes styling only;
/// the click still fires.
#[allow(non_snake_case)]
pub fn DefaultDeleteTrigger(props: DeleteTriggerProps) -> Element {
    let DeleteTriggerProps {
        icon,
        disabled,
        class,
        style,
        onclick,
    } = props;

    let color = if disabled {
        ""
    } else {
        "text-red-400 hover:text-red-300 cursor-pointer"
    };
    let extra = class.unwrap_or_default();

    rsx! {
        a {
            class: "vl-delete-trigger inline-flex items-center gap-2 text-sm {color} {extra}",
            style: style,
            onclick: move |_| onclick.call(()),
            {icon.map(confirm_icon)}
            "Delete"
        }
    }
}

/// Stock delete affordance: default trigger, warning icon, generic text.
#[allow(non_snake_case)]
pub fn DeleteModal(props: DeleteModalProps) -> Element {
    make_delete_modal(DefaultDeleteTrigger, DeleteModalConfig::default())(props)
}

/// Thread deletion, preconfigured: trash icon and a thread-specific
/// warning, built through the same factory.
#[allow(non_snake_case)]
pub fn DeleteThreadModal(props: DeleteModalProps) -> Element {
    make_delete_modal(
        DefaultDeleteTrigger,
        DeleteModalConfig {
            icon: Some(ConfirmIcon::Trash),
            item_name: "thread".to_string(),
            content: Some(THREAD_DELETE_WARNING.to_string()),
        },
    )(props)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::confirm::{ButtonOptions, ConfirmButton};

    #[test]
    fn test_defaults_resolve_to_generic_prompt() {
        let options = build_confirm_options(&DeleteModalConfig::default(), &Default::default());
        assert_eq!(options.title, "Are you sure you want to delete this ?");
        assert_eq!(options.content, GENERIC_DELETE_WARNING);
        assert_eq!(options.icon, ConfirmIcon::Warning);
        assert_eq!(options.ok_text, "Delete");
        assert_eq!(options.cancel_text, "Cancel");
        assert_eq!(options.width, DEFAULT_CONFIRM_WIDTH);
        assert_eq!(options.auto_focus, None);
        assert!(options.ok_button.danger);
    }

    #[test]
    fn test_item_name_feeds_the_title() {
        let config = DeleteModalConfig {
            item_name: "thread".to_string(),
            ..Default::default()
        };
        let options = build_confirm_options(&config, &Default::default());
        assert_eq!(options.title, "Are you sure you want to delete this thread?");
    }

    #[test]
    fn test_overrides_shallow_merge_over_config() {
        let config = DeleteModalConfig {
            item_name: "thread".to_string(),
            content: Some("config text".to_string()),
            ..Default::default()
        };
        let overrides = ModalOverrides {
            title: Some("Remove?".to_string()),
            content: Some("override text".to_string()),
            icon: Some(ConfirmIcon::Trash),
            ok_text: Some("Remove".to_string()),
            cancel_text: Some("Keep".to_string()),
            width: Some(520),
            auto_focus: Some(ConfirmButton::Cancel),
            ok_button: None,
        };

        let options = build_confirm_options(&config, &overrides);
        assert_eq!(options.title, "Remove?");
        assert_eq!(options.content, "override text");
        assert_eq!(options.icon, ConfirmIcon::Trash);
        assert_eq!(options.ok_text, "Remove");
        assert_eq!(options.cancel_text, "Keep");
        assert_eq!(options.width, 520);
        assert_eq!(options.auto_focus, Some(ConfirmButton::Cancel));
    }

    #[test]
    fn test_config_content_loses_only_to_an_override() {
        let config = DeleteModalConfig {
            content: Some("config text".to_string()),
            ..Default::default()
        };
        let options = build_confirm_options(&config, &Default::default());
        assert_eq!(options.content, "config text");
    }

    #[test]
    fn test_config_icon_stays_on_the_trigger() {
        let config = DeleteModalConfig {
            icon: Some(ConfirmIcon::Trash),
            ..Default::default()
        };
        let options = build_confirm_options(&config, &Default::default());
        assert_eq!(options.icon, ConfirmIcon::Warning);
    }

    #[test]
    fn test_danger_cannot_be_overridden_but_the_rest_survives() {
        let overrides = ModalOverrides {
            ok_button: Some(ButtonOptions {
                danger: false,
                disabled: true,
                class: Some("wide".to_string()),
            }),
            ..Default::default()
        };

        let options = build_confirm_options(&DeleteModalConfig::default(), &overrides);
        assert!(options.ok_button.danger);
        assert!(options.ok_button.disabled);
        assert_eq!(options.ok_button.class.as_deref(), Some("wide"));
    }

    thread_local! {
        static CONFIRM_CALLS: Cell<usize> = Cell::new(0);
    }

    fn counting_handler() -> EventHandler {
        EventHandler::new(|_| CONFIRM_CALLS.with(|c| c.set(c.get() + 1)))
    }

    // Stands in for a user click: fires the forwarded handler on render.
    fn probe_trigger(props: DeleteTriggerProps) -> Element {
        props.onclick.call(());
        rsx! { "trigger" }
    }

    fn thread_props(on_confirm: EventHandler) -> DeleteModalProps {
        DeleteModalProps {
            content: None,
            modal_props: ModalOverrides::default(),
            on_confirm,
            disabled: false,
            class: None,
            style: None,
        }
    }

    fn activate_then_ok() -> Element {
        let mut host = use_context_provider(ConfirmHost::new);

        let dm = make_delete_modal(
            probe_trigger,
            DeleteModalConfig {
                icon: Some(ConfirmIcon::Trash),
                item_name: "thread".to_string(),
                content: Some(THREAD_DELETE_WARNING.to_string()),
            },
        );
        let body = dm(thread_props(counting_handler()));

        let pending = host.pending().expect("activation opened a prompt");
        assert_eq!(
            pending.options.title,
            "Are you sure you want to delete this thread?"
        );
        assert_eq!(pending.options.content, THREAD_DELETE_WARNING);
        assert_eq!(pending.options.icon, ConfirmIcon::Warning);
        assert!(pending.options.ok_button.danger);

        host.resolve(ConfirmButton::Ok);
        assert!(host.pending().is_none());

        body
    }

    fn activate_then_cancel() -> Element {
        let mut host = use_context_provider(ConfirmHost::new);

        let dm = make_delete_modal(probe_trigger, DeleteModalConfig::default());
        let body = dm(thread_props(counting_handler()));

        assert!(host.pending().is_some());
        host.resolve(ConfirmButton::Cancel);
        assert!(host.pending().is_none());

        body
    }

    fn activate_twice() -> Element {
        let mut host = use_context_provider(ConfirmHost::new);

        let dm = make_delete_modal(probe_trigger, DeleteModalConfig::default());
        let first = dm(thread_props(counting_handler()));
        let second = dm(thread_props(counting_handler()));

        assert!(host.pending().is_some());
        host.resolve(ConfirmButton::Ok);
        assert!(host.pending().is_none());

        rsx! {
            {first}
            {second}
        }
    }

    fn run(app: fn() -> Element) {
        CONFIRM_CALLS.with(|c| c.set(0));
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }

    #[test]
    fn test_confirming_runs_the_callback_once() {
        run(activate_then_ok);
        assert_eq!(CONFIRM_CALLS.with(|c| c.get()), 1);
    }

    #[test]
    fn test_cancelling_runs_nothing() {
        run(activate_then_cancel);
        assert_eq!(CONFIRM_CALLS.with(|c| c.get()), 0);
    }

    #[test]
    fn test_one_pending_prompt_no_matter_how_many_triggers() {
        run(activate_twice);
        assert_eq!(CONFIRM_CALLS.with(|c| c.get()), 1);
    }

    fn default_trigger_app() -> Element {
        use_context_provider(ConfirmHost::new);
        rsx! {
            DeleteModal { on_confirm: EventHandler::new(|_| {}) }
        }
    }

    fn disabled_trigger_app() -> Element {
        use_context_provider(ConfirmHost::new);
        rsx! {
            DeleteModal { disabled: true, on_confirm: EventHandler::new(|_| {}) }
        }
    }

    fn thread_modal_app() -> Element {
        use_context_provider(ConfirmHost::new);
        rsx! {
            DeleteThreadModal { on_confirm: EventHandler::new(|_| {}) }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_default_trigger_is_a_destructive_text_link() {
        let html = render(default_trigger_app);
        assert!(html.contains("vl-delete-trigger"));
        assert!(html.contains("Delete"));
        assert!(html.contains("text-red-400"));
    }

    #[test]
    fn test_disabled_trigger_drops_the_destructive_color() {
        let html = render(disabled_trigger_app);
        assert!(html.contains("vl-delete-trigger"));
        assert!(!html.contains("text-red-400"));
    }

    #[test]
    fn test_thread_modal_shows_the_trash_icon() {
        let html = render(thread_modal_app);
        assert!(html.contains("M19 7l-.867"));
    }
}
