mod code_block;
pub use code_block::CodeBlock;

mod confirm_outlet;
pub use confirm_outlet::ConfirmOutlet;

mod delete_modal;
pub use delete_modal::{
    build_confirm_options, make_delete_modal, DefaultDeleteTrigger, DeleteModal,
    DeleteModalConfig, DeleteModalProps, DeleteThreadModal, DeleteTriggerProps,
    THREAD_DELETE_WARNING,
};

mod icons;
pub use icons::{confirm_icon, CheckIcon, CopyIcon, SpinnerIcon, TrashIcon, WarningIcon};

mod loading_overlay;
pub use loading_overlay::LoadingOverlay;

mod theme_style;
pub use theme_style::ThemeStyle;
