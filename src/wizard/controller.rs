use std::time::Duration;

use crate::editor::session::{EditorOpts, EditorSession};
use crate::foundation::error::CardResult;
use crate::gateway::{CredentialValidator, SummarizationGateway};
use crate::i18n::{Locale, Notice};
use crate::source::descriptor::SourceDescriptor;
use crate::source::intake::{ImagesIntake, SearchIntake, Submission, VideoIntake};
use crate::summary::model::Summary;
use crate::wizard::state::{StepKind, WizardStep};

/// Wizard settings.
#[derive(Clone, Debug, PartialEq)]
pub struct WizardOpts {
    /// How long the image-generation screen shows before the editor opens.
    pub image_generation_delay: Duration,
    pub locale: Locale,
    pub editor: EditorOpts,
}

impl Default for WizardOpts {
    fn default() -> Self {
        Self {
            image_generation_delay: Duration::from_millis(1500),
            locale: Locale::default(),
            editor: EditorOpts::default(),
        }
    }
}

/// Tagged inputs to the step reducer.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum WizardAction {
    CredentialAccepted,
    CredentialRejected(Notice),
    IntakeRejected(Notice),
    Submit(Submission),
    SummaryReady(Summary),
    SummaryFailed(Notice),
    ConfirmReview,
    Tick(Duration),
    Back,
    Restart,
}

impl WizardAction {
    fn name(&self) -> &'static str {
        match self {
            WizardAction::CredentialAccepted => "credential_accepted",
            WizardAction::CredentialRejected(_) => "credential_rejected",
            WizardAction::IntakeRejected(_) => "intake_rejected",
            WizardAction::Submit(_) => "submit",
            WizardAction::SummaryReady(_) => "summary_ready",
            WizardAction::SummaryFailed(_) => "summary_failed",
            WizardAction::ConfirmReview => "confirm_review",
            WizardAction::Tick(_) => "tick",
            WizardAction::Back => "back",
            WizardAction::Restart => "restart",
        }
    }
}

/// Result of one dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The step is now `to` (possibly the same step with new data).
    Applied { from: StepKind, to: StepKind },
    /// The action is not allowed in `step`; nothing changed.
    Rejected { step: StepKind, action: &'static str },
}

impl Transition {
    pub fn is_applied(self) -> bool {
        matches!(self, Transition::Applied { .. })
    }
}

/// Owns the wizard state; every change goes through [`WizardController::dispatch`].
#[derive(Debug)]
pub struct WizardController {
    step: WizardStep,
    opts: WizardOpts,
}

/// Mutable view of the result editor: the session plus the summary it edits.
pub struct Workspace<'a> {
    pub summary: &'a mut Summary,
    pub source: &'a SourceDescriptor,
    pub editor: &'a mut EditorSession,
}

impl WizardController {
    /// Start at INTAKE, or at CREDENTIAL_CHECK when no usable credential is present.
    pub fn new(opts: WizardOpts, has_credential: bool) -> Self {
        let step = if has_credential {
            WizardStep::fresh_intake()
        } else {
            WizardStep::CredentialCheck { notice: None }
        };
        Self { step, opts }
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    pub fn kind(&self) -> StepKind {
        self.step.kind()
    }

    pub fn opts(&self) -> &WizardOpts {
        &self.opts
    }

    /// Notice for the current step, translated.
    pub fn notice_text(&self) -> Option<&'static str> {
        self.step.notice().map(|n| n.text(self.opts.locale))
    }

    /// Apply `action` to the current step.
    ///
    /// Only the named transitions call this, after they have done whatever checking their
    /// action needs (credential trial call, intake validation, gateway await).
    pub(crate) fn dispatch(&mut self, action: WizardAction) -> Transition {
        let from = self.step.kind();
        let name = action.name();
        let current = std::mem::replace(&mut self.step, WizardStep::fresh_intake());
        match reduce(current, action, &self.opts) {
            Ok(next) => {
                self.step = next;
                let to = self.step.kind();
                tracing::debug!(?from, ?to, action = name, "wizard transition");
                Transition::Applied { from, to }
            }
            Err(unchanged) => {
                self.step = unchanged;
                tracing::warn!(step = ?from, action = name, "wizard action rejected");
                Transition::Rejected { step: from, action: name }
            }
        }
    }

    /// Check `credential` with a trial call; INTAKE follows on success.
    #[tracing::instrument(skip_all)]
    pub async fn submit_credential(
        &mut self,
        validator: &dyn CredentialValidator,
        credential: &str,
    ) -> Transition {
        if self.kind() != StepKind::CredentialCheck {
            return self.dispatch(WizardAction::CredentialAccepted);
        }
        if credential.trim().is_empty() {
            return self.dispatch(WizardAction::CredentialRejected(Notice::CredentialMissing));
        }
        if validator.validate(credential).await {
            self.dispatch(WizardAction::CredentialAccepted)
        } else {
            self.dispatch(WizardAction::CredentialRejected(Notice::CredentialRejected))
        }
    }

    /// INTAKE → PROCESSING with an already validated submission.
    pub fn submit(&mut self, submission: Submission) -> Transition {
        self.dispatch(WizardAction::Submit(submission))
    }

    fn submit_result(&mut self, result: CardResult<Submission>) -> Transition {
        match result {
            Ok(s) => self.submit(s),
            Err(e) => self.dispatch(WizardAction::IntakeRejected(e.notice())),
        }
    }

    pub fn submit_video(&mut self, intake: &VideoIntake) -> Transition {
        self.submit_result(intake.submit())
    }

    pub fn submit_images(&mut self, intake: &ImagesIntake) -> Transition {
        self.submit_result(intake.submit())
    }

    pub fn submit_search(&mut self, intake: &SearchIntake) -> Transition {
        self.submit_result(intake.submit())
    }

    /// Await the summarization call: REVIEW on success, INTAKE with a notice on any failure.
    #[tracing::instrument(skip_all)]
    pub async fn run_processing(&mut self, gateway: &dyn SummarizationGateway) -> Transition {
        let WizardStep::Processing { submission } = &self.step else {
            return self.dispatch(WizardAction::SummaryFailed(Notice::SummarizeFailed));
        };
        let (raw_text, kind) = (submission.raw_text().to_string(), submission.kind());

        match gateway.summarize(&raw_text, kind).await {
            Ok(summary) => self.dispatch(WizardAction::SummaryReady(summary)),
            Err(e) => {
                tracing::warn!(error = %e, "summarization failed");
                self.dispatch(WizardAction::SummaryFailed(e.notice()))
            }
        }
    }

    /// Editable summary, only while reviewing.
    pub fn review_summary_mut(&mut self) -> Option<&mut Summary> {
        match &mut self.step {
            WizardStep::Review { summary, .. } => Some(summary),
            _ => None,
        }
    }

    /// Rejected while the edited summary has no key points or no quotes.
    pub fn confirm_review(&mut self) -> Transition {
        self.dispatch(WizardAction::ConfirmReview)
    }

    /// Advance the image-generation screen clock.
    pub fn tick(&mut self, elapsed: Duration) -> Transition {
        self.dispatch(WizardAction::Tick(elapsed))
    }

    /// Sleep out the rest of the image-generation screen, then open the editor.
    pub async fn wait_image_generation(&mut self) -> Transition {
        let remaining = match &self.step {
            WizardStep::ImageGeneration { elapsed, .. } => {
                self.opts.image_generation_delay.saturating_sub(*elapsed)
            }
            _ => Duration::ZERO,
        };
        if !remaining.is_zero() {
            tokio::time::sleep(remaining).await;
        }
        self.tick(remaining)
    }

    pub fn back(&mut self) -> Transition {
        self.dispatch(WizardAction::Back)
    }

    pub fn restart(&mut self) -> Transition {
        self.dispatch(WizardAction::Restart)
    }

    pub fn workspace(&mut self) -> Option<Workspace<'_>> {
        match &mut self.step {
            WizardStep::ResultEditor {
                source,
                summary,
                editor,
            } => Some(Workspace {
                summary,
                source,
                editor,
            }),
            _ => None,
        }
    }
}

/// Pure step reducer. `Err` hands the unchanged step back.
fn reduce(
    step: WizardStep,
    action: WizardAction,
    opts: &WizardOpts,
) -> Result<WizardStep, WizardStep> {
    use WizardAction as A;
    use WizardStep as S;

    let next = match (step, action) {
        (S::CredentialCheck { .. }, A::CredentialAccepted) => S::fresh_intake(),
        (S::CredentialCheck { .. }, A::CredentialRejected(n)) => S::CredentialCheck { notice: Some(n) },

        (S::Intake { .. }, A::Submit(submission)) => S::Processing { submission },
        (S::Intake { draft, .. }, A::IntakeRejected(n)) => S::Intake {
            draft,
            notice: Some(n),
        },

        (S::Processing { submission }, A::SummaryReady(summary)) => match summary.validate() {
            Ok(()) => S::Review {
                source: submission.into_source(),
                summary,
            },
            Err(e) => {
                tracing::warn!(error = %e, "summary is incomplete");
                S::Intake {
                    draft: Some(submission.into_source()),
                    notice: Some(Notice::SummarizeFailed),
                }
            }
        },
        (S::Processing { submission }, A::SummaryFailed(n)) => S::Intake {
            draft: Some(submission.into_source()),
            notice: Some(n),
        },

        (S::Review { source, summary }, A::ConfirmReview) => {
            if summary.validate().is_err() {
                return Err(S::Review { source, summary });
            }
            S::ImageGeneration {
                source,
                summary,
                elapsed: Duration::ZERO,
            }
        }
        (S::Review { source, .. }, A::Back) => S::Intake {
            draft: Some(source),
            notice: None,
        },

        (
            S::ImageGeneration {
                source,
                summary,
                elapsed,
            },
            A::Tick(dt),
        ) => {
            let elapsed = elapsed.saturating_add(dt);
            if elapsed >= opts.image_generation_delay {
                let editor = EditorSession::new(source.kind(), opts.editor.clone());
                S::ResultEditor {
                    source,
                    summary,
                    editor: Box::new(editor),
                }
            } else {
                S::ImageGeneration {
                    source,
                    summary,
                    elapsed,
                }
            }
        }

        (S::ResultEditor { source, summary, .. }, A::Back) => S::Review { source, summary },
        (S::ResultEditor { .. }, A::Restart) => S::fresh_intake(),

        (step, _) => return Err(step),
    };
    Ok(next)
}

#[cfg(test)]
#[path = "../../tests/unit/wizard/controller.rs"]
mod tests;
