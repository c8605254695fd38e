//! Dioxus-signal binding for the host form field.

use dioxus::prelude::*;
use logodrop_core::BoundField;

/// A form field held in a `Signal<String>` owned by the host component.
///
/// Writing the signal re-renders every reader (the `input` side); the
/// optional `on_change` handler is called afterwards with the new value
/// (the `change` side).
#[derive(Clone, Copy)]
pub struct SignalField {
    value: Signal<String>,
    on_change: Option<EventHandler<String>>,
}

impl SignalField {
    /// Bind to `value`, optionally reporting writes to `on_change`.
    #[must_use]
    pub const fn new(value: Signal<String>, on_change: Option<EventHandler<String>>) -> Self {
        Self { value, on_change }
    }
}

impl BoundField for SignalField {
    fn value(&self) -> String {
        self.value.peek().clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value.set(value.to_owned());
        if let Some(handler) = self.on_change {
            handler.call(value.to_owned());
        }
    }
}
