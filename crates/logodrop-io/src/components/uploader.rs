//! Logo upload widget: file picker, preview, copy button, save hint.

use std::rc::Rc;

use dioxus::prelude::*;
use logodrop_core::controller::SAVE_HINT;
use logodrop_core::{FileCandidate, UploadController, UploadResult, WidgetConfig};

use crate::client::UploadClient;
use crate::clipboard;
use crate::components::notifications::ToastNotifier;
use crate::field::SignalField;
use crate::preview::render_local_preview;
use crate::styles;

/// Known image extensions and their MIME types, used when the browser
/// does not report a type for the selected file.
const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
];

/// MIME type for a filename's image extension, if recognized.
fn mime_for_extension(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    IMAGE_EXTENSIONS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, mime)| *mime)
}

/// Props for the [`LogoUploader`] component.
#[derive(Props, Clone, PartialEq)]
pub struct LogoUploaderProps {
    /// The host form's URL field. Read once on mount, written after a
    /// successful upload.
    field: Signal<String>,
    /// Called with the new URL after the field is written.
    on_change: Option<EventHandler<String>>,
    /// Validation and endpoint settings.
    #[props(default)]
    config: WidgetConfig,
}

/// Single-image upload widget bound to a form field.
///
/// Selecting a file validates it, shows a local preview immediately, and
/// uploads it in the background. A successful upload writes the resolved
/// URL into `field`, swaps the preview to that URL, and shows a reminder
/// to save the form. Status messages go to the enclosing
/// [`NotificationArea`](super::NotificationArea), if any.
#[component]
pub fn LogoUploader(props: LogoUploaderProps) -> Element {
    let field = props.field;
    let on_change = props.on_change;
    let notifier = try_use_context::<ToastNotifier>();
    let mut controller = use_signal(|| UploadController::new(props.config.policy.clone()));
    let client = use_hook(|| Rc::new(UploadClient::for_current_page(props.config.upload.clone())));

    // Mount is the host's readiness signal: install styles and seed the
    // preview from whatever the field already holds.
    use_hook(move || {
        if let Err(e) = styles::ensure_installed() {
            tracing::debug!(error = %e, "skipping stylesheet installation");
        }
        controller.write().initialize(&*field.peek());
    });

    let handle_files = move |evt: FormEvent| {
        let client = Rc::clone(&client);
        async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            let name = file.name();
            let mime = file
                .content_type()
                .filter(|m| !m.is_empty())
                .or_else(|| mime_for_extension(&name).map(str::to_owned))
                .unwrap_or_default();

            // Validate the picker's metadata so a rejected file is never read.
            let declared = FileCandidate::declared(name, mime, file.size());
            let Ok(ticket) = controller.write().select(&declared, &notifier) else {
                return;
            };

            let candidate = match file.read_bytes().await {
                Ok(bytes) => Rc::new(declared.with_bytes(bytes.to_vec())),
                Err(e) => {
                    let mut bound = SignalField::new(field, on_change);
                    let failed = UploadResult::failure(format!("could not read file: {e}"));
                    controller
                        .write()
                        .apply_upload(ticket, failed, &mut bound, &notifier);
                    return;
                }
            };

            // The preview is cosmetic and must not gate the upload.
            let preview_file = Rc::clone(&candidate);
            spawn(async move {
                let uri = render_local_preview(&preview_file).await;
                controller.write().apply_local_preview(ticket, uri);
            });

            let result = client.upload(&candidate).await;
            let mut bound = SignalField::new(field, on_change);
            controller
                .write()
                .apply_upload(ticket, result, &mut bound, &notifier);
        }
    };

    let handle_copy = move |_| async move {
        let current = field.peek().clone();
        clipboard::copy_field_url(&current, &notifier).await;
    };

    let state = controller.read();
    let preview_src = state.preview().src().map(str::to_owned);
    let hint_visible = state.save_hint_visible();
    let limit = state.policy().limit_label();
    let accept = format!("{}*", state.policy().allowed_type_prefix);
    drop(state);

    rsx! {
        div { class: "logodrop-uploader",
            p { class: "logodrop-tip", "Upload an image no larger than {limit}" }

            div { class: "logodrop-preview",
                if let Some(ref src) = preview_src {
                    img { src: "{src}", alt: "Logo preview" }
                }
            }

            div { class: "logodrop-actions",
                label { class: "logodrop-button",
                    input {
                        r#type: "file",
                        accept: "{accept}",
                        class: "logodrop-hidden",
                        onchange: handle_files,
                    }
                    "Upload logo"
                }
                button {
                    r#type: "button",
                    class: "logodrop-button",
                    onclick: handle_copy,
                    "Copy link"
                }
            }

            if hint_visible {
                div { class: "logodrop-hint", "{SAVE_HINT}" }
            }
        }
    }
}
