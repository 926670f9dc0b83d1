//! Test builders: fluent constructors for gradient documents and their
//! XML/JSON payload forms.
//!
//! These are for readability in assertions; they panic instead of returning
//! `Result`.

use gradbin_core::{GradientDocument, Keypoint, PropColor};

/// Fluent builder for [`GradientDocument`] fixtures.
///
/// ```rust
/// let doc = GradientDocumentBuilder::new()
///     .stop(0.0, "#000")
///     .stop(1.0, "#FFF")
///     .prop("border", "#445566")
///     .first("#000")
///     .build();
/// ```
#[derive(Debug, Default, Clone)]
pub struct GradientDocumentBuilder {
    doc: GradientDocument,
}

impl GradientDocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(mut self, time: f64, color: &str) -> Self {
        self.doc.color_sequence.push(Keypoint::new(time, color));
        self
    }

    pub fn prop(mut self, name: &str, color: &str) -> Self {
        self.doc.props_colors.push(PropColor::new(name, color));
        self
    }

    pub fn first(mut self, color: &str) -> Self {
        self.doc.first_color = Some(color.to_string());
        self
    }

    pub fn last(mut self, color: &str) -> Self {
        self.doc.last_color = Some(color.to_string());
        self
    }

    pub fn build(self) -> GradientDocument {
        self.doc
    }

    /// The same document written in the `<root>` XML schema, stops in the
    /// order they were added.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<root>\n  <colorSequence>\n");
        for kp in &self.doc.color_sequence {
            xml.push_str(&format!(
                "    <keypoint time=\"{}\" color=\"{}\"/>\n",
                kp.time, kp.color
            ));
        }
        xml.push_str("  </colorSequence>\n  <propsColors>\n");
        for p in &self.doc.props_colors {
            xml.push_str(&format!("    <prop name=\"{}\">{}</prop>\n", p.name, p.color));
        }
        xml.push_str("  </propsColors>\n");
        if let Some(c) = &self.doc.first_color {
            xml.push_str(&format!("  <firstColor>{c}</firstColor>\n"));
        }
        if let Some(c) = &self.doc.last_color {
            xml.push_str(&format!("  <lastColor>{c}</lastColor>\n"));
        }
        xml.push_str("</root>");
        xml
    }

    /// The same document as compact JSON text.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.doc).expect("documents always serialize")
    }
}

/// Wrap a payload in a JSONBin v3 response envelope.
pub fn envelope(payload: &str) -> String {
    serde_json::json!({
        "record": { "name": "fixture", "gradientData": payload },
        "metadata": { "id": "65a1b2c3d4e5f6a7b8c9d0e1", "private": false }
    })
    .to_string()
}
