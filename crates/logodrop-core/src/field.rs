//! The host form field that receives the resolved URL.

/// A writable text field owned by the surrounding form.
///
/// The widget reads it once at initialization to seed the preview and
/// writes it after a successful upload. Implementations must notify the
/// field's listeners on [`set_value`](Self::set_value) (the browser
/// equivalent of dispatching `input` and `change` events).
pub trait BoundField {
    /// Current field contents.
    fn value(&self) -> String;

    /// Replace the field contents and notify listeners.
    fn set_value(&mut self, value: &str);
}

/// Plain in-memory field, for hosts that keep form state in a `String`.
impl BoundField for String {
    fn value(&self) -> String {
        self.clone()
    }

    fn set_value(&mut self, value: &str) {
        value.clone_into(self);
    }
}

/// The text the "copy link" action should place on the clipboard.
///
/// Returns `None` when the field is blank, in which case the action is
/// skipped silently.
#[must_use]
pub fn copy_target(field: &impl BoundField) -> Option<String> {
    let value = field.value();
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
