#![allow(dead_code)]

use std::path::PathBuf;

pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

#[derive(Debug, PartialEq)]
pub struct Para {
    pub text: String,
    /// (ilvl, numId) for list paragraphs
    pub numbering: Option<(u32, u32)>,
}

impl Para {
    pub fn plain(text: &str) -> Para {
        Para {
            text: text.to_string(),
            numbering: None,
        }
    }

    pub fn item(text: &str, level: u32, num_id: u32) -> Para {
        Para {
            text: text.to_string(),
            numbering: Some((level, num_id)),
        }
    }
}

fn wml<'a>(node: roxmltree::Node<'a, 'a>, name: &str) -> Option<roxmltree::Node<'a, 'a>> {
    node.children()
        .find(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(WML_NS))
}

fn val(node: roxmltree::Node) -> Option<u32> {
    node.attribute((WML_NS, "val")).and_then(|v| v.parse().ok())
}

/// Wrap a converted fragment in a namespaced `w:body` so it parses on its own.
pub fn body(fragment: &str) -> String {
    format!("<w:body xmlns:w=\"{WML_NS}\">{fragment}</w:body>")
}

/// Parse a converted fragment, panicking with the fragment if it is not well-formed.
pub fn with_body<T>(fragment: &str, f: impl FnOnce(roxmltree::Node) -> T) -> T {
    let xml = body(fragment);
    let doc = roxmltree::Document::parse(&xml)
        .unwrap_or_else(|e| panic!("output is not well-formed XML ({e}):\n{fragment}"));
    f(doc.root_element())
}

pub fn paragraphs(fragment: &str) -> Vec<Para> {
    with_body(fragment, |body| {
        body.children()
            .filter(|n| n.is_element())
            .map(|p| {
                assert_eq!(p.tag_name().name(), "p", "unexpected body child in:\n{fragment}");
                let numbering = wml(p, "pPr").and_then(|ppr| wml(ppr, "numPr")).map(|num| {
                    let level = wml(num, "ilvl").and_then(val).expect("w:ilvl");
                    let id = wml(num, "numId").and_then(val).expect("w:numId");
                    (level, id)
                });
                let text = p
                    .descendants()
                    .filter(|n| n.tag_name().name() == "t" && n.tag_name().namespace() == Some(WML_NS))
                    .filter_map(|t| t.text())
                    .collect();
                Para { text, numbering }
            })
            .collect()
    })
}

/// Every `w:t` must carry `xml:space="preserve"`.
pub fn all_text_preserved(fragment: &str) -> bool {
    with_body(fragment, |body| {
        body.descendants()
            .filter(|n| n.tag_name().name() == "t" && n.tag_name().namespace() == Some(WML_NS))
            .all(|t| t.attribute((XML_NS, "space")) == Some("preserve"))
    })
}

pub fn num_ids(fragment: &str) -> Vec<u32> {
    paragraphs(fragment)
        .into_iter()
        .filter_map(|p| p.numbering.map(|(_, id)| id))
        .collect()
}

/// Output directory for tests that write files: tests/output/<name>/
pub fn output_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("tests/output").join(name);
    std::fs::create_dir_all(&dir).expect("create output dir");
    dir
}
