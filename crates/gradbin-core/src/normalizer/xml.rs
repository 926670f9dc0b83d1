//! XML path.
//!
//! Accepted schema (every part optional):
//!
//! ```xml
//! <root>
//!   <colorSequence>
//!     <keypoint time="0.0" color="#112233"/>
//!   </colorSequence>
//!   <propsColors>
//!     <prop name="border">#445566</prop>
//!   </propsColors>
//!   <firstColor>#000000</firstColor>
//!   <lastColor>#FFFFFF</lastColor>
//! </root>
//! ```
//!
//! Keypoints and props are matched as direct children of their container,
//! wherever that container sits in the tree. Element names are compared by
//! local name.

use roxmltree::{Document, Node, ParsingOptions};

use super::{non_empty_trimmed, parse_float_prefix, token_or};
use crate::{
    error::NormalizeError,
    types::{sort_by_time, DEFAULT_COLOR, DEFAULT_PROP_NAME},
    GradientDocument, Keypoint, PropColor,
};

/// Parse an XML payload into a [`GradientDocument`].
pub fn parse(raw: &str) -> Result<GradientDocument, NormalizeError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let dom = Document::parse_with_options(raw, options)?;

    let mut color_sequence: Vec<Keypoint> = children_of(&dom, "colorSequence", "keypoint")
        .map(|kp| Keypoint {
            time: kp.attribute("time").and_then(parse_float_prefix).unwrap_or(0.0),
            color: token_or(kp.attribute("color"), DEFAULT_COLOR),
        })
        .collect();

    let props_colors = children_of(&dom, "propsColors", "prop")
        .map(|prop| PropColor {
            name: token_or(prop.attribute("name"), DEFAULT_PROP_NAME),
            color: non_empty_trimmed(&text_content(prop)).unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        })
        .collect();

    sort_by_time(&mut color_sequence);

    Ok(GradientDocument {
        color_sequence,
        props_colors,
        first_color: first_text(&dom, "firstColor"),
        last_color: first_text(&dom, "lastColor"),
    })
}

/// Elements named `child` whose parent element is named `parent`, in
/// document order.
fn children_of<'a, 'input>(
    dom: &'a Document<'input>,
    parent: &'a str,
    child: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    dom.descendants().filter(move |n| {
        n.is_element()
            && n.tag_name().name() == child
            && n.parent_element().is_some_and(|p| p.tag_name().name() == parent)
    })
}

/// Trimmed text of the first element named `name`, or `None` when it is
/// missing or blank.
fn first_text(dom: &Document<'_>, name: &str) -> Option<String> {
    dom.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == name)
        .and_then(|n| non_empty_trimmed(&text_content(n)))
}

/// Concatenated text of every descendant text node.
fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
