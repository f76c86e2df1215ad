//! Class occurrence statistics for frequency charts.

use std::collections::BTreeSet;

use super::graph::IfcModel;

/// Distinct classes present in the model, optionally limited to subtypes of
/// `parent`.
#[must_use]
pub fn present_classes(model: &IfcModel, parent: Option<&str>) -> BTreeSet<String> {
    model
        .entities()
        .filter(|e| parent.is_none_or(|p| model.entity_is_a(e, p)))
        .map(|e| model.class_of(e).to_string())
        .collect()
}

/// `(class, occurrences)` sorted by count descending, then class name.
///
/// Occurrences are subtype-inclusive, so an abstract-looking class such as
/// `IfcWall` also counts its `IfcWallStandardCase` instances. Only counts
/// strictly greater than `higher_than` are kept.
#[must_use]
pub fn class_frequency(
    model: &IfcModel,
    parent: Option<&str>,
    higher_than: Option<usize>,
) -> Vec<(String, usize)> {
    let mut occurrences: Vec<(String, usize)> = present_classes(model, parent)
        .into_iter()
        .map(|class| {
            let count = model.by_type(&class).len();
            (class, count)
        })
        .filter(|(_, count)| higher_than.is_none_or(|min| *count > min))
        .collect();

    occurrences.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    occurrences
}
