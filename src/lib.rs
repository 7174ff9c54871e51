/// Vellum UI - Dioxus components for rendering highlighted code and
/// guarding destructive actions behind confirmation prompts.
///
/// Tokenization and theming are injected through `highlight::HighlightContext`;
/// confirmation prompts run through a single app-wide `confirm::ConfirmHost`.
pub mod components;
pub mod confirm;
pub mod highlight;
