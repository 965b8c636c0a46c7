use std::sync::Mutex;

use async_trait::async_trait;

use super::*;
use crate::foundation::error::CardError;
use crate::source::descriptor::{ImageRef, SourceKind};
use crate::summary::model::GoldenQuote;

struct Scripted(Mutex<Vec<CardResult<Summary>>>);

impl Scripted {
    fn new(replies: Vec<CardResult<Summary>>) -> Self {
        Self(Mutex::new(replies))
    }
}

#[async_trait]
impl SummarizationGateway for Scripted {
    async fn summarize(&self, _raw_text: &str, _kind: SourceKind) -> CardResult<Summary> {
        self.0.lock().unwrap().remove(0)
    }
}

struct Accepts(&'static str);

#[async_trait]
impl CredentialValidator for Accepts {
    async fn validate(&self, credential: &str) -> bool {
        credential == self.0
    }
}

fn summary() -> Summary {
    Summary {
        title: "T".into(),
        core_idea: "C".into(),
        key_points: vec!["k1".into(), "k2".into()],
        golden_quotes: vec![GoldenQuote::new("q", "")],
        supplementary_image_urls: None,
    }
}

fn images_intake() -> ImagesIntake {
    ImagesIntake::new(vec![ImageRef::new("A"), ImageRef::new("B")], "x")
}

fn wizard() -> WizardController {
    WizardController::new(WizardOpts::default(), true)
}

async fn at_review(w: &mut WizardController) {
    assert!(w.submit_images(&images_intake()).is_applied());
    let gw = Scripted::new(vec![Ok(summary())]);
    assert!(w.run_processing(&gw).await.is_applied());
    assert_eq!(w.kind(), StepKind::Review);
}

#[test]
fn starts_at_credential_check_without_credential() {
    let w = WizardController::new(WizardOpts::default(), false);
    assert_eq!(w.kind(), StepKind::CredentialCheck);
    assert_eq!(wizard().kind(), StepKind::Intake);
}

#[tokio::test]
async fn credential_check_gates_intake() {
    let mut w = WizardController::new(WizardOpts::default(), false);
    let v = Accepts("good");

    w.submit_credential(&v, "  ").await;
    assert_eq!(w.kind(), StepKind::CredentialCheck);
    assert_eq!(w.step().notice(), Some(Notice::CredentialMissing));

    w.submit_credential(&v, "bad").await;
    assert_eq!(w.step().notice(), Some(Notice::CredentialRejected));

    let t = w.submit_credential(&v, "good").await;
    assert_eq!(
        t,
        Transition::Applied {
            from: StepKind::CredentialCheck,
            to: StepKind::Intake
        }
    );
    assert_eq!(w.step().notice(), None);
}

#[test]
fn invalid_intake_stays_with_notice() {
    let mut w = wizard();
    let t = w.submit_images(&ImagesIntake::new(vec![], "  "));
    assert!(t.is_applied());
    assert_eq!(w.kind(), StepKind::Intake);
    assert_eq!(w.step().notice(), Some(Notice::ImagesInputMissing));
    assert_eq!(
        w.notice_text(),
        Some(Notice::ImagesInputMissing.text(Locale::En))
    );
}

#[test]
fn search_without_selection_never_reaches_processing() {
    let mut w = wizard();
    let mut intake = SearchIntake::new("rust", Default::default());
    intake.set_results(vec![]);
    w.submit_search(&intake);
    assert_eq!(w.kind(), StepKind::Intake);
    assert_eq!(w.step().notice(), Some(Notice::SearchSelectionMissing));
}

#[tokio::test]
async fn success_moves_to_review_with_summary() {
    let mut w = wizard();
    assert!(w.submit_video(&VideoIntake::new("a talk")).is_applied());
    assert_eq!(w.kind(), StepKind::Processing);
    assert!(w.step().is_blocking());

    let gw = Scripted::new(vec![Ok(summary())]);
    w.run_processing(&gw).await;
    assert_eq!(w.kind(), StepKind::Review);
    assert_eq!(w.step().summary(), Some(&summary()));
    assert_eq!(w.step().source().map(|s| s.kind()), Some(SourceKind::Video));
}

#[tokio::test]
async fn failure_returns_to_intake_without_summary() {
    let mut w = wizard();
    w.submit_images(&images_intake());
    let gw = Scripted::new(vec![Err(CardError::gateway("boom"))]);
    w.run_processing(&gw).await;

    assert_eq!(w.kind(), StepKind::Intake);
    assert!(w.step().summary().is_none());
    assert_eq!(w.step().notice(), Some(Notice::SummarizeFailed));
    assert_eq!(
        w.step().source().map(|s| s.kind()),
        Some(SourceKind::Images)
    );
}

#[tokio::test]
async fn incomplete_summary_is_a_failure() {
    let mut w = wizard();
    w.submit_images(&images_intake());
    let mut empty = summary();
    empty.key_points.clear();
    let gw = Scripted::new(vec![Ok(empty)]);
    w.run_processing(&gw).await;
    assert_eq!(w.kind(), StepKind::Intake);
    assert!(w.step().summary().is_none());
}

#[tokio::test]
async fn rejected_credential_during_processing_surfaces_notice() {
    let mut w = wizard();
    w.submit_images(&images_intake());
    let gw = Scripted::new(vec![Err(CardError::credential("401"))]);
    w.run_processing(&gw).await;
    assert_eq!(w.step().notice(), Some(Notice::CredentialRejected));
}

#[tokio::test]
async fn review_edits_carry_into_editor() {
    let mut w = wizard();
    at_review(&mut w).await;
    w.review_summary_mut().unwrap().title = "Edited".into();

    assert!(w.confirm_review().is_applied());
    assert_eq!(w.kind(), StepKind::ImageGeneration);
    assert!(w.review_summary_mut().is_none());

    w.tick(Duration::from_millis(1000));
    assert_eq!(w.kind(), StepKind::ImageGeneration);
    w.tick(Duration::from_millis(500));
    assert_eq!(w.kind(), StepKind::ResultEditor);

    let ws = w.workspace().unwrap();
    assert_eq!(ws.summary.title, "Edited");
    assert_eq!(ws.editor.shuffle_policy(), crate::template::slots::ShufflePolicy::ClearUploads);
}

#[tokio::test(start_paused = true)]
async fn wait_image_generation_opens_editor() {
    let mut w = wizard();
    at_review(&mut w).await;
    w.confirm_review();
    let t = w.wait_image_generation().await;
    assert_eq!(
        t,
        Transition::Applied {
            from: StepKind::ImageGeneration,
            to: StepKind::ResultEditor
        }
    );
}

#[tokio::test]
async fn back_and_restart() {
    let mut w = wizard();
    at_review(&mut w).await;
    w.back();
    assert_eq!(w.kind(), StepKind::Intake);
    assert!(w.step().summary().is_none());
    assert!(w.step().source().is_some());

    at_review(&mut w).await;
    w.confirm_review();
    w.tick(Duration::from_secs(2));
    w.back();
    assert_eq!(w.kind(), StepKind::Review);
    assert!(w.step().summary().is_some());

    w.confirm_review();
    w.tick(Duration::from_secs(2));
    w.restart();
    assert_eq!(w.step(), &WizardStep::fresh_intake());
}

#[tokio::test]
async fn illegal_actions_are_rejected_unchanged() {
    let mut w = wizard();
    assert_eq!(
        w.confirm_review(),
        Transition::Rejected {
            step: StepKind::Intake,
            action: "confirm_review"
        }
    );
    assert!(!w.restart().is_applied());
    assert!(!w.back().is_applied());
    assert!(w.workspace().is_none());

    w.submit_images(&images_intake());
    assert!(!w.back().is_applied());
    assert!(!w.submit_images(&images_intake()).is_applied());
    assert_eq!(w.kind(), StepKind::Processing);

    let gw = Scripted::new(vec![Ok(summary())]);
    w.run_processing(&gw).await;
    assert!(!w.run_processing(&gw).await.is_applied());
    assert_eq!(w.kind(), StepKind::Review);
}

fn incomplete() -> Summary {
    Summary {
        key_points: vec![],
        golden_quotes: vec![],
        ..summary()
    }
}

#[test]
fn reducer_refuses_incomplete_summary() {
    let mut w = wizard();
    w.submit_images(&images_intake());

    let t = w.dispatch(WizardAction::SummaryReady(incomplete()));
    assert_eq!(
        t,
        Transition::Applied {
            from: StepKind::Processing,
            to: StepKind::Intake
        }
    );
    assert!(w.step().summary().is_none());
    assert_eq!(w.step().notice(), Some(Notice::SummarizeFailed));
    assert_eq!(w.step().source().map(|s| s.kind()), Some(SourceKind::Images));
}

#[tokio::test]
async fn credential_step_only_opens_through_the_validator() {
    let mut w = WizardController::new(WizardOpts::default(), false);
    let v = Accepts("good");

    assert!(!w.submit_images(&images_intake()).is_applied());
    assert!(!w.confirm_review().is_applied());
    w.submit_credential(&v, "guess").await;
    assert_eq!(w.kind(), StepKind::CredentialCheck);
    assert!(!w.submit_images(&images_intake()).is_applied());
    assert_eq!(w.kind(), StepKind::CredentialCheck);
}

#[tokio::test]
async fn confirm_refuses_summary_emptied_during_review() {
    let mut w = wizard();
    at_review(&mut w).await;
    w.review_summary_mut().unwrap().golden_quotes.clear();

    assert_eq!(
        w.confirm_review(),
        Transition::Rejected {
            step: StepKind::Review,
            action: "confirm_review"
        }
    );
    assert_eq!(w.kind(), StepKind::Review);
    assert!(w.step().summary().unwrap().golden_quotes.is_empty());

    w.review_summary_mut()
        .unwrap()
        .golden_quotes
        .push(GoldenQuote::new("back", ""));
    assert!(w.confirm_review().is_applied());
}
