//! Static payload corpora used across harnesses.

/// The canonical XML example: out-of-order stops, two props, both end colours.
pub const XML_FULL: &str = r##"<root>
  <colorSequence>
    <keypoint time="1.0" color="#FFFFFF"/>
    <keypoint time="0.0" color="#112233"/>
    <keypoint time="0.5" color="#888888"/>
  </colorSequence>
  <propsColors>
    <prop name="border">#445566</prop>
    <prop name="shadow">  #00000080  </prop>
  </propsColors>
  <firstColor>#000000</firstColor>
  <lastColor> #FFFFFF </lastColor>
</root>"##;

/// The same gradient as [`XML_FULL`], written as JSON.
pub const JSON_FULL: &str = r##"{
  "colorSequence": [
    {"time": 1, "color": "#FFFFFF"},
    {"time": 0, "color": "#112233"},
    {"time": 0.5, "color": "#888888"}
  ],
  "propsColors": [
    {"name": "border", "color": "#445566"},
    {"name": "shadow", "color": "#00000080"}
  ],
  "firstColor": "#000000",
  "lastColor": "#FFFFFF"
}"##;

/// Payloads that parse but carry nothing to render.
pub const EMPTY_GRADIENTS: &[&str] = &[
    "<root></root>",
    "<root><colorSequence/></root>",
    "{}",
    r#"{"colorSequence": []}"#,
    r#"{"colorSequence": null, "propsColors": 0}"#,
];

/// Malformed payloads of either kind.
pub const MALFORMED: &[&str] = &[
    "<root><colorSequence>",
    "<root><keypoint time=\"0\" color=\"#000\"></root>",
    "{\"colorSequence\": [",
    "not json at all",
    "",
];

/// XML with defaults exercised: missing attributes, empty prop text and a
/// non-numeric time.
pub const XML_DEFAULTS: &str = r##"<root>
  <colorSequence>
    <keypoint time="0.7"/>
    <keypoint color="#123456"/>
    <keypoint time="abc" color=""/>
  </colorSequence>
  <propsColors>
    <prop>#ABCDEF</prop>
    <prop name="empty"></prop>
  </propsColors>
  <firstColor>   </firstColor>
</root>"##;
