//! Behavioural tests for managed block editing

use pretty_assertions::assert_eq;
use rstest::rstest;
use skills_blocks::{EndOfLineStyle, ManagedBlock, Markers, apply};

const START: &str = "<!-- AGENT-SKILL:START project-management-with-beads -->";
const END: &str = "<!-- AGENT-SKILL:END project-management-with-beads -->";
const POINTER: &str = "Use skill at: .agent-skills/project-management-with-beads/SKILL.md";

fn beads_block() -> ManagedBlock {
    Markers::new("AGENT-SKILL", "project-management-with-beads").block(POINTER)
}

fn rendered_lf() -> String {
    format!("{START}\n{POINTER}\n{END}\n")
}

fn rendered_crlf() -> String {
    format!("{START}\r\n{POINTER}\r\n{END}\r\n")
}

#[test]
fn empty_document_is_exactly_the_block() {
    assert_eq!(apply("", &beads_block()), rendered_lf());
}

#[rstest]
#[case("# Project\n\nSome prose.\n", "")]
#[case("# Project\n\nSome prose.", "\n")]
#[case("ends with cr\r", "")]
fn append_on_absence(#[case] original: &str, #[case] separator: &str) {
    let result = apply(original, &beads_block());
    assert_eq!(result, format!("{original}{separator}{}", rendered_lf()));
}

#[test]
fn unmanaged_prose_without_trailing_newline_gets_exactly_one() {
    let original = "Follow the contributing guide.";
    let result = apply(original, &beads_block());
    assert_eq!(
        result,
        format!("Follow the contributing guide.\n{}", rendered_lf())
    );
}

#[test]
fn crlf_document_keeps_crlf() {
    let original = "# Agents\r\n\r\nBe nice.";
    let result = apply(original, &beads_block());
    assert_eq!(result, format!("# Agents\r\n\r\nBe nice.\r\n{}", rendered_crlf()));
    assert_eq!(EndOfLineStyle::detect(&result), EndOfLineStyle::Crlf);
    assert!(!result.replace("\r\n", "").contains('\n'));
}

#[test]
fn existing_block_is_replaced_in_place() {
    let original = format!("intro\n{START}\nstale pointer\nmore stale\n{END}\noutro\n");
    let result = apply(&original, &beads_block());
    assert_eq!(result, format!("intro\n{}outro\n", rendered_lf()));
}

#[test]
fn existing_crlf_block_is_replaced_with_crlf() {
    let original = format!("intro\r\n{START}\r\nold\r\n{END}\r\noutro\r\n");
    let result = apply(&original, &beads_block());
    assert_eq!(result, format!("intro\r\n{}outro\r\n", rendered_crlf()));
}

#[test]
fn end_marker_without_line_break_gets_one() {
    let original = format!("{START}\nold\n{END}");
    assert_eq!(apply(&original, &beads_block()), rendered_lf());
}

#[test]
fn trailing_blank_lines_after_block_are_preserved() {
    let original = format!("{START}\nold\n{END}\n\n\n## Next section\n");
    let result = apply(&original, &beads_block());
    assert_eq!(result, format!("{}\n\n## Next section\n", rendered_lf()));
}

#[test]
fn only_first_pair_is_replaced() {
    let original = format!("{START}\none\n{END}\nmiddle\n{START}\ntwo\n{END}\n");
    let result = apply(&original, &beads_block());
    assert_eq!(
        result,
        format!("{}middle\n{START}\ntwo\n{END}\n", rendered_lf())
    );
}

#[test]
fn lone_start_marker_appends() {
    let original = format!("mentions {START} in prose\n");
    let result = apply(&original, &beads_block());
    assert_eq!(result, format!("{original}{}", rendered_lf()));
}

#[test]
fn lone_end_marker_appends() {
    let original = format!("{END}\n");
    let result = apply(&original, &beads_block());
    assert_eq!(result, format!("{original}{}", rendered_lf()));
}

#[test]
fn reversed_markers_append() {
    let original = format!("{END}\n{START}\n");
    let result = apply(&original, &beads_block());
    assert_eq!(result, format!("{original}{}", rendered_lf()));
}

#[test]
fn payload_is_opaque() {
    let block = Markers::new("AGENT-SKILL", "x").block("*not* <b>parsed</b>\n  at all");
    let result = apply("", &block);
    assert!(result.contains("*not* <b>parsed</b>\n  at all"));
}

#[test]
fn repeated_apply_is_byte_identical() {
    for original in ["", "prose", "prose\n", "a\r\nb", "x\n\n"] {
        let once = apply(original, &beads_block());
        let twice = apply(&once, &beads_block());
        assert_eq!(once, twice, "not idempotent for {original:?}");
    }
}
