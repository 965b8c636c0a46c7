use super::*;

const OK: &str = r#"{
  "title": "T",
  "coreIdea": "C",
  "keyPoints": ["k1", "k2"],
  "goldenQuotes": [{"text": "q1", "timestampLabel": "00:10"}]
}"#;

#[test]
fn strips_json_fence() {
    let fenced = format!("```json\n{OK}\n```");
    assert_eq!(strip_code_fences(&fenced), OK.trim());
    let bare = format!("  ```\n{OK}\n```  ");
    assert_eq!(strip_code_fences(&bare), OK.trim());
    assert_eq!(strip_code_fences("  {}  "), "{}");
}

#[test]
fn strips_single_line_fence_and_prose_lead_in() {
    let inline = format!("```json {}```", OK.trim());
    assert_eq!(strip_code_fences(&inline), OK.trim());
    let led = format!("Here you go:\n```json\n{OK}\n```\nEnjoy!");
    assert_eq!(strip_code_fences(&led), OK.trim());
    let inner = r#"{"title": "use ```x``` here"}"#;
    assert_eq!(strip_code_fences(inner), inner);
}

#[test]
fn parses_single_line_and_introduced_fences() {
    for reply in [
        format!("```json {}```", OK.trim()),
        format!("```JSON\n{OK}```"),
        format!("Here you go:\n```json\n{OK}\n```"),
        format!("Sure! ```{}```", OK.trim()),
    ] {
        let s = parse_summary_response(&reply).unwrap();
        assert_eq!(s.title, "T");
    }
}

#[test]
fn parses_fenced_summary() {
    let s = parse_summary_response(&format!("```json\n{OK}\n```")).unwrap();
    assert_eq!(s.title, "T");
    assert_eq!(s.key_points.len(), 2);
    assert_eq!(s.golden_quotes[0].timestamp_label, "00:10");
}

#[test]
fn rejects_malformed_payloads() {
    for bad in [
        "",
        "```json\n```",
        "not json",
        "[1, 2]",
        r#"{"title": "T"}"#,
        r#"{"title":"T","coreIdea":"C","keyPoints":[],"goldenQuotes":[{"text":"q"}]}"#,
        r#"{"title":"T","coreIdea":"C","keyPoints":["k"],"goldenQuotes":[]}"#,
    ] {
        let err = parse_summary_response(bad).unwrap_err();
        assert!(matches!(err, CardError::Gateway(_)), "{bad:?} -> {err}");
    }
}

#[test]
fn search_accepts_array_and_results_object() {
    let arr = r#"[{"id":"a","title":"A","snippet":"s","url":"u","sourceLabel":"web"}]"#;
    assert_eq!(parse_search_response(arr).len(), 1);

    let obj = r#"```json
{"results":[{"id":1,"title":"A"},{"title":"B"},{"id":"dup","title":"C"},{"id":"dup","title":"D"}]}
```"#;
    let results = parse_search_response(obj);
    let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "r1", "dup"]);
}

#[test]
fn search_failure_is_empty_list() {
    assert!(parse_search_response("oops").is_empty());
    assert!(parse_search_response(r#"{"items": []}"#).is_empty());
    assert!(parse_search_response(r#"[{"id":"x","title":"  "}]"#).is_empty());
}
