use super::*;

fn sans(size: f64) -> FontSpec {
    FontSpec::new(FontFamily::Sans, size)
}

#[test]
fn short_text_is_one_line() {
    let lines = wrap("hello world", &sans(10.0), 1000.0, None);
    assert_eq!(lines, vec!["hello world"]);
}

#[test]
fn lines_fit_the_frame() {
    let font = sans(20.0);
    let text = "the quick brown fox jumps over the lazy dog ".repeat(6);
    for l in wrap(&text, &font, 180.0, None) {
        assert!(l.chars().count() == 1 || measure(&l, &font) <= 180.0 + 0.5, "{l:?}");
    }
}

#[test]
fn wrapped_lines_keep_every_word() {
    let text = "alpha beta gamma delta epsilon zeta eta theta";
    let lines = wrap(text, &sans(18.0), 120.0, None);
    assert_eq!(lines.join(" "), text);
}

#[test]
fn long_word_is_split_by_character() {
    let font = FontSpec::new(FontFamily::Mono, 10.0);
    let word = "abcdefghijklmnopqrstuvwxyz";
    let lines = wrap(word, &font, 30.0, None);
    assert_eq!(lines.concat(), word);
    if measure(word, &font) > 30.0 {
        assert!(lines.len() > 1);
    }
}

#[test]
fn max_lines_truncates_with_ellipsis() {
    let font = sans(16.0);
    let text = "one two three four five six seven eight nine ten ".repeat(4);
    let full = wrap(&text, &font, 80.0, None);
    let capped = wrap(&text, &font, 80.0, Some(2));
    if full.len() > 2 {
        assert_eq!(capped.len(), 2);
        assert!(capped[1].ends_with('…'));
        assert!(measure(&capped[1], &font) <= 80.0 + 0.5);
        assert_eq!(capped[0], full[0]);
    } else {
        assert_eq!(capped, full);
    }
}

#[test]
fn newlines_are_hard_breaks() {
    let lines = wrap("a\nb", &sans(10.0), 1000.0, None);
    assert_eq!(lines, vec!["a", "b"]);
}

#[test]
fn missing_fonts_dir_registers_nothing() {
    assert_eq!(
        register_fonts_dir(Path::new("/definitely/not/a/fonts/dir")),
        0
    );
}
