//! Domain-specific assertion macros for gradbin harnesses.
//!
//! These wrap `pretty_assertions` and say which document invariant broke.

/// Assert that a document's `colorSequence` is ordered by `time`.
///
/// ```rust
/// assert_sorted!(doc);
/// ```
#[macro_export]
macro_rules! assert_sorted {
    ($doc:expr) => {{
        let doc: &gradbin_core::GradientDocument = &$doc;
        let times: Vec<f64> = doc.color_sequence.iter().map(|kp| kp.time).collect();
        if let Some(i) = times.windows(2).position(|w| w[0] > w[1]) {
            panic!(
                "assert_sorted! failed: time[{}] = {} > time[{}] = {}\n  times: {:?}",
                i,
                times[i],
                i + 1,
                times[i + 1],
                times
            );
        }
    }};
}

/// Assert the `(time, color)` pairs of a document, in order.
///
/// ```rust
/// assert_keypoints!(doc, [(0.0, "#000"), (1.0, "#FFF")]);
/// ```
#[macro_export]
macro_rules! assert_keypoints {
    ($doc:expr, [$(($time:expr, $color:expr)),* $(,)?]) => {{
        let doc: &gradbin_core::GradientDocument = &$doc;
        let actual: Vec<(f64, &str)> = doc
            .color_sequence
            .iter()
            .map(|kp| (kp.time, kp.color.as_str()))
            .collect();
        let expected: Vec<(f64, &str)> = vec![$(($time as f64, $color)),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_keypoints! failed");
    }};
}

/// Assert the `(name, color)` pairs of a document, in order.
#[macro_export]
macro_rules! assert_props {
    ($doc:expr, [$(($name:expr, $color:expr)),* $(,)?]) => {{
        let doc: &gradbin_core::GradientDocument = &$doc;
        let actual: Vec<(&str, &str)> = doc
            .props_colors
            .iter()
            .map(|p| (p.name.as_str(), p.color.as_str()))
            .collect();
        let expected: Vec<(&str, &str)> = vec![$(($name, $color)),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_props! failed");
    }};
}

/// Assert the descriptor a load produced.
///
/// ```rust
/// assert_descriptor!(loaded, "linear-gradient(to right, #000 0%)");
/// ```
#[macro_export]
macro_rules! assert_descriptor {
    ($loaded:expr, $expected:expr) => {{
        let loaded: &gradbin::Loaded = &$loaded;
        match loaded.rendering.descriptor() {
            Some(actual) => pretty_assertions::assert_eq!(actual, $expected),
            None => panic!(
                "assert_descriptor! failed: nothing to render\n  document: {:?}",
                loaded.document
            ),
        }
    }};
}
