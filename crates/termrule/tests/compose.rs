//! End-to-end composition scenarios.

use termrule::{Position, Rule, RuleError, Width};

const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[test]
fn default_rule_spans_the_terminal() {
    let expected = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
        .saturating_sub(1);

    let line = Rule::new().compose().unwrap();
    assert_eq!(line.chars().count(), expected);
    assert!(line.chars().all(|c| c == '-'));
}

#[test]
fn explicit_width_overrides_ambient() {
    let line = Rule::new().width(Width::Columns(30)).compose().unwrap();
    assert_eq!(line, "-".repeat(30));
}

#[test]
fn left_caption_with_pad() {
    let line = Rule::new()
        .caption("Hello")
        .position(Position::Left)
        .pad(2)
        .width(50)
        .compose()
        .unwrap();
    assert!(line.starts_with("-- Hello "));
    assert_eq!(line.len(), 50);
}

#[test]
fn right_caption_with_pad() {
    let line = Rule::new()
        .caption("Hello")
        .position(Position::Right)
        .pad(5)
        .width(50)
        .compose()
        .unwrap();
    assert!(line.ends_with(" Hello -----"));
    assert_eq!(line.len(), 50);
}

#[test]
fn center_caption_splits_odd_remainder_to_the_right() {
    // " Hello " is 7 printable columns; 43 fill columns split 21/22.
    let line = Rule::new().caption("Hello").width(50).compose().unwrap();
    assert_eq!(line, format!("{} Hello {}", "-".repeat(21), "-".repeat(22)));
}

#[test]
fn center_caption_splits_even_remainder_equally() {
    let line = Rule::new().caption("Hello").width(51).compose().unwrap();
    assert_eq!(line, format!("{} Hello {}", "-".repeat(22), "-".repeat(22)));
}

#[test]
fn center_caption_appears_exactly_once() {
    let line = Rule::new().caption("Hello").width(50).compose().unwrap();
    assert_eq!(line.matches("Hello").count(), 1);
    assert!(line.starts_with('-'));
    assert!(line.ends_with('-'));
}

#[test]
fn overflow_returns_the_block_unfilled() {
    let caption = "a caption far wider than the rule";
    let line = Rule::new().caption(caption).width(10).compose().unwrap();
    assert_eq!(line, format!(" {caption} "));
}

#[test]
fn styled_overflow_keeps_codes_and_gains_no_fill() {
    let caption = "a caption far wider than the rule";
    let line = Rule::new()
        .caption(caption)
        .style("cyan")
        .width(10)
        .compose()
        .unwrap();
    assert_eq!(line, format!("{CYAN} {CYAN}{caption}{RESET} {RESET}"));
}

#[test]
fn zero_width_always_composes_empty() {
    let line = Rule::new()
        .caption("Hello")
        .style("purple")
        .width(0)
        .compose()
        .unwrap();
    assert_eq!(line, "");
}

#[test]
fn empty_fill_string_yields_no_fill() {
    let line = Rule::new().fill("").width(40).compose().unwrap();
    assert_eq!(line, "");

    // A captioned rule with no fill character comes out shorter than the
    // target width; the missing fill runs are simply empty.
    let line = Rule::new().caption("Hi").fill("").width(40).compose().unwrap();
    assert_eq!(line, " Hi ");
}

#[test]
fn multi_character_fill_uses_first_character() {
    let line = Rule::new().fill("=~").width(8).compose().unwrap();
    assert_eq!(line, "========");
}

#[test]
fn styled_caption_brackets_caption_only() {
    let line = Rule::new()
        .caption("Hello")
        .style("cyan+bold")
        .width(50)
        .compose()
        .unwrap();
    assert!(line.contains(&format!("{CYAN}{BOLD}Hello{RESET}")));
    assert!(line.starts_with('-'));
    assert!(line.ends_with('-'));
    assert_eq!(console::measure_text_width(&line), 50);
}

#[test]
fn invalid_style_fails_naming_the_token() {
    let err = Rule::new()
        .caption("Hello")
        .style("purple")
        .width(50)
        .compose()
        .unwrap_err();
    assert!(err.to_string().contains("purple"));
    assert!(matches!(err, RuleError::InvalidStyleToken(t) if t == "purple"));
}

#[test]
fn compose_is_pure() {
    let rule = Rule::new().caption("same").style("green").width(44);
    assert_eq!(rule.compose().unwrap(), rule.compose().unwrap());
}
