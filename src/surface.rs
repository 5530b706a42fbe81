//! UI seams: text prompts and fire-and-forget notifications.
//!
//! The host application owns the actual widgets; the session only needs
//! these two capabilities. Prompting happens strictly before the engine
//! runs — a cancelled prompt means the engine is simply not invoked.

/// Collects a line of text from the user.
pub trait PromptSurface {
    /// Show `label` and return the submitted text, or `None` on cancel
    /// (explicit cancel action or closing without submission).
    fn prompt_for_text(&mut self, label: &str) -> Option<String>;
}

/// Receives transient status and error messages.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Notifier that drops every message. Useful for headless embedders.
#[derive(Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _message: &str) {}
}

/// Prompt that always cancels. Useful where no interactive surface exists.
#[derive(Default)]
pub struct NoPrompt;

impl PromptSurface for NoPrompt {
    fn prompt_for_text(&mut self, _label: &str) -> Option<String> {
        None
    }
}
