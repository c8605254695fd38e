use dioxus::prelude::*;
use logodrop_core::WidgetConfig;
use logodrop_io::{LogoUploader, NotificationArea};

/// Id of an optional `<script type="application/json">` element holding a
/// JSON [`WidgetConfig`].
const CONFIG_ELEMENT_ID: &str = "logodrop-config";

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(app);
}

/// Read the widget configuration embedded in the host page.
///
/// Falls back to the defaults when the element is absent or its JSON is
/// invalid.
fn load_config() -> WidgetConfig {
    let Some(text) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return WidgetConfig::default();
    };
    WidgetConfig::from_json(&text).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid widget config; using defaults");
        WidgetConfig::default()
    })
}

/// Root application component.
///
/// A minimal metadata form: a logo URL text field bound to the upload
/// widget, and a save button that records the field value.
fn app() -> Element {
    let mut logo_url = use_signal(String::new);
    let mut saved = use_signal(|| Option::<String>::None);
    let mut dirty = use_signal(|| false);
    let config = use_hook(load_config);

    let on_change = move |url: String| {
        tracing::debug!(%url, "logo field changed");
        dirty.set(true);
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        saved.set(Some(logo_url.peek().clone()));
        dirty.set(false);
    };

    rsx! {
        NotificationArea {
            main { class: "metadata-page",
                h1 { "Metadata" }

                form { class: "metadata-form", onsubmit: on_submit,
                    div { class: "metadata-input-group",
                        label { r#for: "metaLogo", "Logo" }
                        input {
                            id: "metaLogo",
                            r#type: "text",
                            placeholder: "https://example.com/logo.png",
                            value: "{logo_url}",
                            oninput: move |evt| {
                                logo_url.set(evt.value());
                                dirty.set(true);
                            },
                        }
                        LogoUploader {
                            field: logo_url,
                            on_change: on_change,
                            config: config,
                        }
                    }

                    button { r#type: "submit", "Update metadata" }
                }

                if dirty() {
                    p { class: "metadata-status", "Unsaved changes" }
                } else if let Some(ref url) = saved() {
                    p { class: "metadata-status", "Saved logo: {url}" }
                }
            }
        }
    }
}
