use std::time::Duration;

use crate::editor::session::EditorSession;
use crate::i18n::Notice;
use crate::source::descriptor::SourceDescriptor;
use crate::source::intake::Submission;
use crate::summary::model::Summary;

/// Discriminant of [`WizardStep`], in flow order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepKind {
    CredentialCheck,
    Intake,
    Processing,
    Review,
    ImageGeneration,
    ResultEditor,
}

/// The active wizard step with exactly the data that step needs.
///
/// Steps after PROCESSING carry the source and summary by value, so a review or editor step
/// without a summary cannot be built.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "step", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardStep {
    CredentialCheck {
        notice: Option<Notice>,
    },
    Intake {
        /// Previous source, kept when the user comes back from review or a failed call.
        draft: Option<SourceDescriptor>,
        notice: Option<Notice>,
    },
    Processing {
        submission: Submission,
    },
    Review {
        source: SourceDescriptor,
        summary: Summary,
    },
    ImageGeneration {
        source: SourceDescriptor,
        summary: Summary,
        elapsed: Duration,
    },
    ResultEditor {
        source: SourceDescriptor,
        summary: Summary,
        editor: Box<EditorSession>,
    },
}

impl WizardStep {
    pub fn kind(&self) -> StepKind {
        match self {
            WizardStep::CredentialCheck { .. } => StepKind::CredentialCheck,
            WizardStep::Intake { .. } => StepKind::Intake,
            WizardStep::Processing { .. } => StepKind::Processing,
            WizardStep::Review { .. } => StepKind::Review,
            WizardStep::ImageGeneration { .. } => StepKind::ImageGeneration,
            WizardStep::ResultEditor { .. } => StepKind::ResultEditor,
        }
    }

    pub(crate) fn fresh_intake() -> Self {
        WizardStep::Intake {
            draft: None,
            notice: None,
        }
    }

    pub fn summary(&self) -> Option<&Summary> {
        match self {
            WizardStep::Review { summary, .. }
            | WizardStep::ImageGeneration { summary, .. }
            | WizardStep::ResultEditor { summary, .. } => Some(summary),
            _ => None,
        }
    }

    pub fn source(&self) -> Option<&SourceDescriptor> {
        match self {
            WizardStep::Processing { submission } => Some(submission.source()),
            WizardStep::Review { source, .. }
            | WizardStep::ImageGeneration { source, .. }
            | WizardStep::ResultEditor { source, .. } => Some(source),
            WizardStep::Intake { draft, .. } => draft.as_ref(),
            WizardStep::CredentialCheck { .. } => None,
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        match self {
            WizardStep::CredentialCheck { notice } | WizardStep::Intake { notice, .. } => *notice,
            _ => None,
        }
    }

    /// `true` while a network call is pending and navigation is blocked.
    pub fn is_blocking(&self) -> bool {
        matches!(self, WizardStep::Processing { .. })
    }
}
