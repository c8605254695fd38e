//! Upload widget state machine.
//!
//! [`UploadController`] is sans-IO: it never reads files or touches the
//! network. The host drives it in three steps per selected file:
//!
//! 1. [`select`](UploadController::select) validates the file and, if
//!    accepted, hands back an [`UploadTicket`].
//! 2. The host starts the local preview and the upload as independent
//!    tasks.
//! 3. Each task reports back with its ticket via
//!    [`apply_local_preview`](UploadController::apply_local_preview) and
//!    [`apply_upload`](UploadController::apply_upload), in whatever order
//!    they finish.
//!
//! Tickets carry a generation counter. Selecting a new file supersedes
//! the previous attempt, and anything reported for a superseded ticket
//! is dropped, so a slow stale response can never overwrite a newer one.

use std::fmt;

use crate::field::BoundField;
use crate::notify::{NotificationKind, Notifier};
use crate::policy::{ValidationError, ValidationPolicy};
use crate::preview::PreviewState;
use crate::types::{FileCandidate, UploadResult};

/// Shown while an upload is in flight.
pub const UPLOADING_MESSAGE: &str = "Uploading image...";

/// Shown when an upload succeeds.
pub const SUCCESS_MESSAGE: &str = "Image uploaded";

/// Persistent reminder that the form still has to be saved.
pub const SAVE_HINT: &str = "Image uploaded. Save the form to keep the change.";

/// Identifies one upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UploadTicket(u64);

impl fmt::Display for UploadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the controller is in its select/upload cycle.
///
/// Validation happens synchronously inside
/// [`select`](UploadController::select), so there is no observable
/// `Validating` phase, and a rejected file returns straight to an
/// interactive phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a file.
    Idle,
    /// The attempt identified by the ticket is in flight.
    Uploading(UploadTicket),
    /// The last attempt succeeded and was written to the field. Not
    /// sticky: a new selection starts the cycle again.
    Applied,
}

/// What [`UploadController::apply_upload`] did with a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The URL was written to the field and shown as the preview.
    Committed(String),
    /// The upload failed; field and preview were left untouched.
    Failed(String),
    /// The ticket was superseded by a newer selection; ignored.
    Stale,
}

/// Owns the widget's preview state and reconciles upload results with the
/// bound form field.
#[derive(Debug, Clone)]
pub struct UploadController {
    policy: ValidationPolicy,
    preview: PreviewState,
    phase: Phase,
    generation: u64,
    committed: Option<UploadTicket>,
    save_hint_visible: bool,
    initialized: bool,
}

impl Default for UploadController {
    fn default() -> Self {
        Self::new(ValidationPolicy::default())
    }
}

impl UploadController {
    /// Create an idle controller with an empty preview.
    #[must_use]
    pub const fn new(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            preview: PreviewState::Empty,
            phase: Phase::Idle,
            generation: 0,
            committed: None,
            save_hint_visible: false,
            initialized: false,
        }
    }

    /// Seed the preview from the bound field's existing value.
    ///
    /// Runs once; later calls are no-ops. A non-blank field value becomes
    /// a [`PreviewState::RemotePreview`] without any network access.
    pub fn initialize(&mut self, field: &impl BoundField) -> &PreviewState {
        if !self.initialized {
            self.initialized = true;
            let existing = field.value();
            let existing = existing.trim();
            if !existing.is_empty() {
                tracing::debug!(url = existing, "seeding preview from bound field");
                self.preview = PreviewState::RemotePreview(existing.to_owned());
            }
        }
        &self.preview
    }

    /// Validate a newly selected file and start an upload attempt.
    ///
    /// On success, notifies that the upload is in progress and returns the
    /// ticket the host must pass back with the preview and upload results.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] when the file violates the policy.
    /// The error is also reported through `notifier`; the preview, the
    /// field, and any in-flight attempt are left as they were.
    pub fn select(
        &mut self,
        file: &FileCandidate,
        notifier: &impl Notifier,
    ) -> Result<UploadTicket, ValidationError> {
        if let Err(err) = self.policy.validate(file) {
            tracing::debug!(file = %file.name, size = file.size, %err, "file rejected");
            notifier.notify(&format!("Image rejected: {err}"), NotificationKind::Error);
            if self.phase == Phase::Applied {
                self.phase = Phase::Idle;
            }
            return Err(err);
        }

        self.generation += 1;
        let ticket = UploadTicket(self.generation);
        self.phase = Phase::Uploading(ticket);
        tracing::debug!(%ticket, file = %file.name, size = file.size, "upload started");
        notifier.notify(UPLOADING_MESSAGE, NotificationKind::Info);
        Ok(ticket)
    }

    /// Show the locally rendered preview for `ticket`.
    ///
    /// Ignored (returns `false`) when the ticket has been superseded or its
    /// upload already committed a remote URL.
    pub fn apply_local_preview(&mut self, ticket: UploadTicket, data_uri: String) -> bool {
        if !self.is_current(ticket) || self.committed == Some(ticket) {
            tracing::debug!(%ticket, "dropping late local preview");
            return false;
        }
        self.preview = PreviewState::LocalPreview(data_uri);
        true
    }

    /// Reconcile the upload result for `ticket`.
    ///
    /// On success the URL is written to `field`, shown as the preview, and
    /// the save hint becomes visible. On failure only an error notification
    /// is produced; a local preview that is already showing stays.
    pub fn apply_upload(
        &mut self,
        ticket: UploadTicket,
        result: UploadResult,
        field: &mut impl BoundField,
        notifier: &impl Notifier,
    ) -> UploadOutcome {
        if !self.is_current(ticket) {
            tracing::debug!(%ticket, current = self.generation, "dropping stale upload result");
            return UploadOutcome::Stale;
        }

        match result {
            UploadResult::Success { url } => {
                field.set_value(&url);
                self.preview = PreviewState::RemotePreview(url.clone());
                self.committed = Some(ticket);
                self.phase = Phase::Applied;
                self.save_hint_visible = true;
                tracing::info!(%ticket, %url, "upload applied");
                notifier.notify(SUCCESS_MESSAGE, NotificationKind::Success);
                UploadOutcome::Committed(url)
            }
            UploadResult::Failure { reason } => {
                self.phase = Phase::Idle;
                tracing::warn!(%ticket, %reason, "upload failed");
                notifier.notify(&format!("Upload failed: {reason}"), NotificationKind::Error);
                UploadOutcome::Failed(reason)
            }
        }
    }

    /// The validation policy in force.
    #[must_use]
    pub const fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// What the preview surface should display.
    #[must_use]
    pub const fn preview(&self) -> &PreviewState {
        &self.preview
    }

    /// Current phase of the select/upload cycle.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether an upload is in flight.
    #[must_use]
    pub const fn is_uploading(&self) -> bool {
        matches!(self.phase, Phase::Uploading(_))
    }

    /// Whether the persistent "save the form" hint should be shown.
    #[must_use]
    pub const fn save_hint_visible(&self) -> bool {
        self.save_hint_visible
    }

    const fn is_current(&self, ticket: UploadTicket) -> bool {
        ticket.0 == self.generation
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(String, NotificationKind)>>);

    impl Recorder {
        fn kinds(&self) -> Vec<NotificationKind> {
            self.0.borrow().iter().map(|(_, k)| *k).collect()
        }

        fn last(&self) -> Option<(String, NotificationKind)> {
            self.0.borrow().last().cloned()
        }
    }

    impl Notifier for Recorder {
        fn notify(&self, message: &str, kind: NotificationKind) {
            self.0.borrow_mut().push((message.to_owned(), kind));
        }
    }

    /// Field that counts writes, standing in for input/change listeners.
    #[derive(Default)]
    struct CountingField {
        value: String,
        writes: usize,
    }

    impl BoundField for CountingField {
        fn value(&self) -> String {
            self.value.clone()
        }

        fn set_value(&mut self, value: &str) {
            self.value = value.to_owned();
            self.writes += 1;
        }
    }

    fn png(size: usize) -> FileCandidate {
        FileCandidate::new("logo.png", "image/png", vec![0; size])
    }

    fn success(url: &str) -> UploadResult {
        UploadResult::Success { url: url.into() }
    }

    #[test]
    fn seeds_remote_preview_from_existing_field() {
        let mut controller = UploadController::default();
        let field = String::from("https://x/logo.png");
        assert_eq!(
            controller.initialize(&field),
            &PreviewState::RemotePreview("https://x/logo.png".into())
        );
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn blank_field_leaves_preview_empty() {
        let mut controller = UploadController::default();
        assert_eq!(controller.initialize(&String::from("  ")), &PreviewState::Empty);
    }

    #[test]
    fn initialize_runs_once() {
        let mut controller = UploadController::default();
        controller.initialize(&String::from("/a.png"));
        controller.initialize(&String::from("/b.png"));
        assert_eq!(
            controller.preview(),
            &PreviewState::RemotePreview("/a.png".into())
        );
    }

    #[test]
    fn oversize_file_is_rejected_without_ticket() {
        let mut controller = UploadController::default();
        let notifier = Recorder::default();

        let err = controller.select(&png(2_000_000), &notifier).unwrap_err();

        assert!(matches!(err, ValidationError::TooLarge { .. }));
        assert_eq!(notifier.kinds(), [NotificationKind::Error]);
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.preview(), &PreviewState::Empty);
    }

    #[test]
    fn declared_size_is_rejected_before_contents_are_read() {
        let mut controller = UploadController::default();
        let notifier = Recorder::default();
        let file = FileCandidate::declared("huge.png", "image/png", 2_147_483_648);

        let err = controller.select(&file, &notifier).unwrap_err();

        assert!(matches!(
            err,
            ValidationError::TooLarge {
                size: 2_147_483_648,
                ..
            }
        ));
        assert_eq!(notifier.kinds(), [NotificationKind::Error]);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn declared_file_within_limit_gets_a_ticket() {
        let mut controller = UploadController::default();
        let notifier = Recorder::default();
        let file = FileCandidate::declared("logo.png", "image/png", 500_000);

        let ticket = controller.select(&file, &notifier).unwrap();

        assert_eq!(controller.phase(), Phase::Uploading(ticket));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let mut controller = UploadController::default();
        let notifier = Recorder::default();
        let file = FileCandidate::new("notes.txt", "text/plain", vec![0; 10]);

        assert!(controller.select(&file, &notifier).is_err());
        assert_eq!(notifier.kinds(), [NotificationKind::Error]);
    }

    #[test]
    fn accepted_file_notifies_info_and_starts_upload() {
        let mut controller = UploadController::default();
        let notifier = Recorder::default();

        let ticket = controller.select(&png(500_000), &notifier).unwrap();

        assert_eq!(controller.phase(), Phase::Uploading(ticket));
        assert!(controller.is_uploading());
        assert_eq!(
            notifier.last(),
            Some((UPLOADING_MESSAGE.to_owned(), NotificationKind::Info))
        );
    }

    #[test]
    fn success_commits_url_preview_and_hint() {
        let mut controller = UploadController::default();
        let notifier = Recorder::default();
        let mut field = CountingField::default();

        let ticket = controller.select(&png(500_000), &notifier).unwrap();
        controller.apply_local_preview(ticket, "data:image/png;base64,AA==".into());
        let outcome = controller.apply_upload(
            ticket,
            success("/uploads/logo.png"),
            &mut field,
            &notifier,
        );

        assert_eq!(outcome, UploadOutcome::Committed("/uploads/logo.png".into()));
        assert_eq!(field.value, "/uploads/logo.png");
        assert_eq!(field.writes, 1);
        assert_eq!(
            controller.preview(),
            &PreviewState::RemotePreview("/uploads/logo.png".into())
        );
        assert_eq!(controller.phase(), Phase::Applied);
        assert!(controller.save_hint_visible());
        assert_eq!(notifier.last().map(|(_, k)| k), Some(NotificationKind::Success));
    }

    #[test]
    fn failure_keeps_field_and_local_preview() {
        let mut controller = UploadController::default();
        let notifier = Recorder::default();
        let mut field = CountingField {
            value: "/uploads/old.png".into(),
            writes: 0,
        };

        let ticket = controller.select(&png(10), &notifier).unwrap();
        controller.apply_local_preview(ticket, "data:image/png;base64,AA==".into());
        let outcome = controller.apply_upload(
            ticket,
            UploadResult::failure("HTTP 500"),
            &mut field,
            &notifier,
        );

        assert_eq!(outcome, UploadOutcome::Failed("HTTP 500".into()));
        assert_eq!(field.value, "/uploads/old.png");
        assert_eq!(field.writes, 0);
        assert_eq!(
            controller.preview(),
            &PreviewState::LocalPreview("data:image/png;base64,AA==".into())
        );
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(!controller.save_hint_visible());
        let (message, kind) = notifier.last().unwrap();
        assert_eq!(kind, NotificationKind::Error);
        assert!(message.contains("HTTP 500"), "{message}");
    }

    #[test]
    fn success_overwrites_preview_even_before_local_preview() {
        let mut controller = UploadController::default();
        let notifier = Recorder::default();
        let mut field = String::new();

        let ticket = controller.select(&png(10), &notifier).unwrap();
        controller.apply_upload(ticket, success("/u/a.png"), &mut field, &notifier);

        // The local read finishing afterwards must not replace the remote URL.
        assert!(!controller.apply_local_preview(ticket, "data:image/png;base64,".into()));
        assert_eq!(
            controller.preview(),
            &PreviewState::RemotePreview("/u/a.png".into())
        );
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut controller = UploadController::default();
        let notifier = Recorder::default();
        let mut field = String::new();

        let first = controller.select(&png(10), &notifier).unwrap();
        let second = controller.select(&png(20), &notifier).unwrap();
        assert_ne!(first, second);

        let notifications_before = notifier.0.borrow().len();
        let outcome = controller.apply_upload(first, success("/u/old.png"), &mut field, &notifier);

        assert_eq!(outcome, UploadOutcome::Stale);
        assert_eq!(field, "");
        assert_eq!(notifier.0.borrow().len(), notifications_before);
        assert!(!controller.apply_local_preview(first, "data:,".into()));

        controller.apply_upload(second, success("/u/new.png"), &mut field, &notifier);
        assert_eq!(field, "/u/new.png");
    }

    #[test]
    fn applied_is_not_sticky() {
        let mut controller = UploadController::default();
        let notifier = Recorder::default();
        let mut field = String::new();

        let first = controller.select(&png(10), &notifier).unwrap();
        controller.apply_upload(first, success("/u/1.png"), &mut field, &notifier);
        assert_eq!(controller.phase(), Phase::Applied);

        let second = controller.select(&png(10), &notifier).unwrap();
        assert_eq!(controller.phase(), Phase::Uploading(second));
        controller.apply_upload(second, success("/u/2.png"), &mut field, &notifier);
        assert_eq!(field, "/u/2.png");
    }

    #[test]
    fn rejection_does_not_supersede_in_flight_upload() {
        let mut controller = UploadController::default();
        let notifier = Recorder::default();
        let mut field = String::new();

        let ticket = controller.select(&png(10), &notifier).unwrap();
        assert!(controller.select(&png(2_000_000), &notifier).is_err());
        assert_eq!(controller.phase(), Phase::Uploading(ticket));

        let outcome = controller.apply_upload(ticket, success("/u/a.png"), &mut field, &notifier);
        assert_eq!(outcome, UploadOutcome::Committed("/u/a.png".into()));
    }

    #[test]
    fn works_without_a_notifier() {
        let mut controller = UploadController::default();
        let none: Option<Recorder> = None;
        let mut field = String::new();

        let ticket = controller.select(&png(10), &none).unwrap();
        controller.apply_upload(ticket, success("/u/a.png"), &mut field, &none);
        assert_eq!(field, "/u/a.png");
    }
}
