//! Property payloads returned by a 3D viewer for a picked entity.
//!
//! The viewer answers with `{id, props: [...]}` where each element of
//! `props` is a property or quantity set as the viewer's own IFC API
//! serialises it: `{expressID, Name: {value}, HasProperties | Quantities}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// Payload of one pick in the viewer.
#[derive(Debug, Clone, Deserialize)]
pub struct PickPayload {
    pub id: u64,
    #[serde(default)]
    pub props: Vec<Json>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerItem {
    pub name: String,
    pub value: Json,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerSet {
    pub name: String,
    pub data: Vec<ViewerItem>,
}

/// Groups the picked entity's sets by express id.
///
/// Sets whose name contains `Qto` read their `Quantities`, sets whose name
/// contains `Pset` read `HasProperties`; other sets are skipped. Each item's
/// value is the `value` of its first key containing `Value`, or `""`.
#[must_use]
pub fn format_viewer_psets(payload: &PickPayload) -> BTreeMap<u64, ViewerSet> {
    let mut sets: BTreeMap<u64, ViewerSet> = BTreeMap::new();

    for set in &payload.props {
        let Some(name) = set.pointer("/Name/value").and_then(Json::as_str) else {
            continue;
        };
        let Some(express_id) = set.get("expressID").and_then(Json::as_u64) else {
            continue;
        };

        let items_key = if name.contains("Qto") {
            "Quantities"
        } else if name.contains("Pset") {
            "HasProperties"
        } else {
            continue;
        };
        let Some(items) = set.get(items_key).and_then(Json::as_array) else {
            continue;
        };

        for item in items {
            let entry = sets.entry(express_id).or_insert_with(|| ViewerSet {
                name: name.to_string(),
                data: Vec::new(),
            });
            entry.data.push(ViewerItem {
                name: item
                    .pointer("/Name/value")
                    .and_then(Json::as_str)
                    .unwrap_or_default()
                    .to_string(),
                value: item_value(item),
            });
        }
    }

    sets
}

/// The last field whose key contains `Value`, in payload order, so a bounded
/// property reports `SetPointValue` over its bounds.
fn item_value(item: &Json) -> Json {
    item.as_object()
        .and_then(|fields| {
            fields
                .iter()
                .rev()
                .find(|(key, _)| key.contains("Value"))
                .map(|(_, field)| field.get("value").cloned().unwrap_or(Json::Null))
        })
        .unwrap_or_else(|| Json::String(String::new()))
}
