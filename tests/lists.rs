mod common;

use common::Para;
use html_wml::{Options, convert_html};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn convert(html: &str) -> String {
    convert_html(html, &Options::default())
}

#[test]
fn nested_items_are_one_level_deeper() {
    let xml = convert("<ul><li>A<ol><li>A1</li><li>A2</li></ol></li><li>B</li></ul>");
    assert_eq!(
        common::paragraphs(&xml),
        vec![
            Para::item("A", 0, 2),
            Para::item("A1", 1, 1),
            Para::item("A2", 1, 1),
            Para::item("B", 0, 2),
            Para::plain(""),
        ]
    );
}

#[test]
fn every_block_gets_its_own_numbering_id() {
    let xml = convert(
        "<ul><li>a<ul><li>a1</li></ul></li><li>b<ul><li>b1</li></ul></li></ul>\
         <ol><li>c<ol><li>c1<ul><li>c2</li></ul></li></ol></li></ol>",
    );
    let mut ids = common::num_ids(&xml);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    assert_eq!(
        common::paragraphs(&xml)
            .into_iter()
            .filter(|p| p.numbering.is_some())
            .collect::<Vec<_>>(),
        vec![
            Para::item("a", 0, 3),
            Para::item("a1", 1, 1),
            Para::item("b", 0, 3),
            Para::item("b1", 1, 2),
            Para::item("c", 0, 6),
            Para::item("c1", 1, 5),
            Para::item("c2", 2, 4),
        ]
    );
}

#[test]
fn each_top_level_list_is_followed_by_one_separator() {
    let xml = convert("<ul><li>a</li></ul><ol><li>b</li></ol>");
    assert_eq!(
        common::paragraphs(&xml),
        vec![
            Para::item("a", 0, 1),
            Para::plain(""),
            Para::item("b", 0, 2),
            Para::plain(""),
        ]
    );
}

#[test]
fn nested_lists_add_no_separator() {
    let xml = convert("<ul><li>a<ul><li>b</li></ul></li><li>c</li></ul>");
    let plain = common::paragraphs(&xml)
        .into_iter()
        .filter(|p| p.numbering.is_none())
        .count();
    assert_eq!(plain, 1);
}

#[test]
fn item_text_is_trimmed() {
    let xml = convert("<ul>\n  <li>\n    spaced out\n  </li>\n</ul>");
    assert_eq!(
        common::paragraphs(&xml),
        vec![Para::item("spaced out", 0, 1), Para::plain("")]
    );
}

#[test]
fn text_following_a_nested_list_stays_at_the_parent_level() {
    let xml = convert("<ol><li>before<ul><li>inner</li></ul>after</li></ol>");
    assert_eq!(
        common::paragraphs(&xml),
        vec![
            Para::item("before", 0, 2),
            Para::item("inner", 1, 1),
            Para::item("after", 0, 2),
            Para::plain(""),
        ]
    );
}

#[test]
fn list_nested_without_an_item() {
    let xml = convert("<ul><li>a</li><ul><li>b</li></ul><li>c</li></ul>");
    assert_eq!(
        common::paragraphs(&xml),
        vec![
            Para::item("a", 0, 2),
            Para::item("b", 1, 1),
            Para::item("c", 0, 2),
            Para::plain(""),
        ]
    );
}

#[test]
fn empty_items_still_produce_paragraphs() {
    let xml = convert("<ul><li></li><li>x</li></ul>");
    assert_eq!(
        common::paragraphs(&xml),
        vec![Para::item("", 0, 1), Para::item("x", 0, 1), Para::plain("")]
    );
}

#[test]
fn breaks_inside_items_split_the_item() {
    let xml = convert("<ul><li>line one<br>line two</li></ul>");
    assert_eq!(
        common::paragraphs(&xml),
        vec![
            Para::item("line one", 0, 1),
            Para::plain("line two"),
            Para::plain(""),
        ]
    );
}

#[test]
fn deep_nesting_is_clamped_to_level_eight() {
    let _ = env_logger::try_init();
    let html = format!("{}deep{}", "<ol><li>".repeat(12), "</li></ol>".repeat(12));
    let paras = common::paragraphs(&convert(&html));
    assert_eq!(paras[0], Para::item("deep", 8, 1));
}

#[test]
fn numbering_restarts_for_each_conversion() {
    let options = Options::default();
    let first = convert_html("<ul><li>a</li></ul>", &options);
    let second = convert_html("<ul><li>a</li></ul>", &options);
    assert_eq!(first, second);
    assert_eq!(common::num_ids(&second), vec![1]);
}

#[test]
fn unterminated_lists_are_resolved_in_linear_time() {
    let _ = env_logger::try_init();
    let html = "<ul>x".repeat(50_000);
    let t0 = Instant::now();
    let xml = convert(&html);
    let elapsed = t0.elapsed();
    assert!(!xml.contains("ListParagraph"));
    assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
}

#[test]
fn unterminated_items_are_resolved_in_linear_time() {
    let html = format!("<ol>{}<li>done</li></ol>", "<li>x".repeat(50_000));
    let t0 = Instant::now();
    let xml = convert(&html);
    let elapsed = t0.elapsed();
    assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
    assert_eq!(common::num_ids(&xml), vec![1]);
}
