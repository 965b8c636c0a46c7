use super::*;

fn sample() -> Summary {
    Summary {
        title: "T".to_string(),
        core_idea: "C".to_string(),
        key_points: vec!["k1".to_string(), "k2".to_string(), "k3".to_string()],
        golden_quotes: vec![GoldenQuote::new("q1", "00:10")],
        supplementary_image_urls: None,
    }
}

#[test]
fn wire_format_is_camel_case() {
    let v = serde_json::to_value(sample()).unwrap();
    assert_eq!(v["coreIdea"], "C");
    assert_eq!(v["keyPoints"][2], "k3");
    assert_eq!(v["goldenQuotes"][0]["timestampLabel"], "00:10");
    assert!(v.get("supplementaryImageUrls").is_none());
}

#[test]
fn validate_requires_points_and_quotes() {
    sample().validate().unwrap();

    let mut s = sample();
    s.key_points.clear();
    assert!(s.validate().is_err());

    let mut s = sample();
    s.golden_quotes.clear();
    assert!(s.validate().is_err());
}

#[test]
fn set_text_addresses_each_field() {
    let mut s = sample();
    s.set_text(TextPath::Title, "New").unwrap();
    s.set_text(TextPath::CoreIdea, "Idea").unwrap();
    s.set_text(TextPath::KeyPoint(1), "second").unwrap();
    s.set_text(TextPath::Quote(0), "said").unwrap();
    assert_eq!(s.title, "New");
    assert_eq!(s.core_idea, "Idea");
    assert_eq!(s.key_points[1], "second");
    assert_eq!(s.golden_quotes[0].text, "said");
    assert_eq!(s.golden_quotes[0].timestamp_label, "00:10");

    assert!(s.set_text(TextPath::KeyPoint(9), "x").is_err());
    assert!(s.set_text(TextPath::Quote(1), "x").is_err());
}

#[test]
fn shuffle_changes_order_but_keeps_items() {
    let mut s = sample();
    let mut rng = Rng64::new(11);
    s.shuffle_key_points(&mut rng);
    assert_ne!(s.key_points, sample().key_points);
    let mut sorted = s.key_points.clone();
    sorted.sort();
    assert_eq!(sorted, sample().key_points);
}

#[test]
fn shuffle_of_single_point_is_noop() {
    let mut s = sample();
    s.key_points.truncate(1);
    s.shuffle_key_points(&mut Rng64::new(1));
    assert_eq!(s.key_points, vec!["k1".to_string()]);
}

#[test]
fn first_points_caps_at_length() {
    let s = sample();
    assert_eq!(s.first_points(2).len(), 2);
    assert_eq!(s.first_points(10).len(), 3);
}
