use super::*;
use crate::summary::model::GoldenQuote;

fn summary_with_images(urls: Option<Vec<String>>) -> Summary {
    Summary {
        title: "T".to_string(),
        core_idea: "C".to_string(),
        key_points: vec!["k".to_string()],
        golden_quotes: vec![GoldenQuote::new("q", "")],
        supplementary_image_urls: urls,
    }
}

#[test]
fn images_default_follows_upload_order() {
    let src = SourceDescriptor::Images {
        images: vec![ImageRef::new("a.png"), ImageRef::new("b.png")],
        caption: "x".to_string(),
    };
    let s = summary_with_images(None);
    assert_eq!(src.default_image(0, &s), Some(ImageRef::new("a.png")));
    assert_eq!(src.default_image(1, &s), Some(ImageRef::new("b.png")));
    assert_eq!(src.default_image(2, &s), None);
}

#[test]
fn video_default_is_thumbnail_for_primary_only() {
    let src = SourceDescriptor::Video {
        description: "d".to_string(),
        media: None,
        thumbnail: Some(ImageRef::new("thumb.jpg")),
    };
    let s = summary_with_images(None);
    assert_eq!(src.default_image(0, &s), Some(ImageRef::new("thumb.jpg")));
    assert_eq!(src.default_image(1, &s), None);
}

#[test]
fn search_default_uses_supplementary_images() {
    let src = SourceDescriptor::Search {
        query: "q".to_string(),
        provider: SearchProvider::Web,
        selected_ids: BTreeSet::from(["1".to_string()]),
    };
    let s = summary_with_images(Some(vec!["https://img/1.jpg".to_string()]));
    assert_eq!(
        src.default_image(0, &s),
        Some(ImageRef::new("https://img/1.jpg"))
    );
    assert_eq!(src.default_image(1, &s), None);
}

#[test]
fn remote_and_data_refs_are_detected() {
    assert!(ImageRef::new("https://x/y.png").is_remote());
    assert!(ImageRef::new("http://x/y.png").is_remote());
    assert!(!ImageRef::new("photos/y.png").is_remote());
    assert!(ImageRef::new("data:image/png;base64,AAAA").is_data_uri());
}

#[test]
fn descriptor_is_tagged_by_kind() {
    let src = SourceDescriptor::Images {
        images: vec![ImageRef::new("a.png")],
        caption: String::new(),
    };
    let v = serde_json::to_value(&src).unwrap();
    assert_eq!(v["kind"], "IMAGES");
    assert_eq!(v["images"][0], "a.png");
    let back: SourceDescriptor = serde_json::from_value(v).unwrap();
    assert_eq!(back.kind(), SourceKind::Images);
}
