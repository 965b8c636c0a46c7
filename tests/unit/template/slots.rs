use super::*;
use crate::summary::model::GoldenQuote;

fn summary() -> Summary {
    Summary {
        title: "T".into(),
        core_idea: "C".into(),
        key_points: vec!["k".into()],
        golden_quotes: vec![GoldenQuote::new("q", "")],
        supplementary_image_urls: None,
    }
}

fn images(refs: &[&str]) -> SourceDescriptor {
    SourceDescriptor::Images {
        images: refs.iter().map(|r| ImageRef::new(*r)).collect(),
        caption: String::new(),
    }
}

#[test]
fn resolution_order_is_upload_then_default_then_placeholder() {
    let src = images(&["A", "B"]);
    let sum = summary();
    let mut board = SlotBoard::new(1);

    assert_eq!(
        board.resolve(SlotId::Hero, &src, &sum),
        ResolvedImage::SourceDefault {
            image: ImageRef::new("A")
        }
    );
    assert_eq!(
        board.resolve(SlotId::Secondary, &src, &sum),
        ResolvedImage::SourceDefault {
            image: ImageRef::new("B")
        }
    );
    assert!(matches!(
        board.resolve(SlotId::Tertiary, &src, &sum),
        ResolvedImage::Placeholder { .. }
    ));

    board.upload(SlotId::Hero, ImageRef::new("U"));
    assert_eq!(
        board.resolve(SlotId::Hero, &src, &sum),
        ResolvedImage::Uploaded {
            image: ImageRef::new("U")
        }
    );
}

#[test]
fn refresh_clears_upload_before_reseeding() {
    let src = images(&["A"]);
    let sum = summary();
    let mut rng = Rng64::new(7);
    let mut board = SlotBoard::new(1);
    board.upload(SlotId::Hero, ImageRef::new("U"));
    let seed = board.state(SlotId::Hero).seed;

    board.refresh(SlotId::Hero, &mut rng);
    assert_eq!(board.state(SlotId::Hero).seed, seed);
    assert_eq!(
        board.resolve(SlotId::Hero, &src, &sum),
        ResolvedImage::SourceDefault {
            image: ImageRef::new("A")
        }
    );

    board.refresh(SlotId::Hero, &mut rng);
    assert_ne!(board.state(SlotId::Hero).seed, seed);
    assert!(matches!(
        board.resolve(SlotId::Hero, &src, &sum),
        ResolvedImage::Placeholder { .. }
    ));
}

#[test]
fn shuffle_changes_every_slot_without_uploads() {
    let src = images(&["A", "B"]);
    let sum = summary();
    let mut rng = Rng64::new(3);
    let mut board = SlotBoard::new(9);
    let before: Vec<_> = SlotId::ALL
        .iter()
        .map(|s| board.resolve(*s, &src, &sum))
        .collect();
    board.shuffle(ShufflePolicy::KeepUploads, &mut rng);
    for (slot, old) in SlotId::ALL.iter().zip(before) {
        assert_ne!(board.resolve(*slot, &src, &sum), old, "{slot:?}");
    }
}

#[test]
fn shuffle_policy_decides_upload_fate() {
    let mut rng = Rng64::new(3);
    let mut keep = SlotBoard::new(0);
    keep.upload(SlotId::Hero, ImageRef::new("U"));
    let untouched = keep.state(SlotId::Hero).clone();
    keep.shuffle(ShufflePolicy::KeepUploads, &mut rng);
    assert_eq!(keep.state(SlotId::Hero), &untouched);

    let mut clear = SlotBoard::new(0);
    clear.upload(SlotId::Hero, ImageRef::new("U"));
    clear.shuffle(ShufflePolicy::ClearUploads, &mut rng);
    assert_eq!(clear.state(SlotId::Hero).upload, None);
}

#[test]
fn default_policy_per_kind() {
    assert_eq!(
        ShufflePolicy::for_kind(SourceKind::Images),
        ShufflePolicy::ClearUploads
    );
    assert_eq!(
        ShufflePolicy::for_kind(SourceKind::Video),
        ShufflePolicy::KeepUploads
    );
    assert_eq!(
        ShufflePolicy::for_kind(SourceKind::Search),
        ShufflePolicy::KeepUploads
    );
}

#[test]
fn slot_names_round_trip() {
    for slot in SlotId::ALL {
        assert_eq!(SlotId::parse(slot.name()), Some(slot));
    }
    assert_eq!(SlotId::parse("nope"), None);
}
