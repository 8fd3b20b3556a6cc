use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::sheet::ScoreSheet;
use crate::Scale;

/// One rendered option within a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptionView {
    pub value: i32,
    pub label: String,
    pub selected: bool,
}

/// One rendered radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldView {
    pub key: String,
    pub name: String,
    pub options: Vec<OptionView>,
}

/// Everything a rendering surface needs to draw one scale's calculator
/// panel: the fields with their current selections, plus the live total,
/// severity label, and EMR summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleForm {
    pub id: String,
    pub name: String,
    pub note: Option<String>,
    pub fields: Vec<FieldView>,
    pub total: i32,
    pub severity: String,
    pub summary: String,
}

/// Project a scale and its sheet into a view. Pure: the caller decides how
/// to draw it.
pub fn form_view(scale: &dyn Scale, sheet: &ScoreSheet) -> ScaleForm {
    let fields = scale
        .items()
        .iter()
        .enumerate()
        .map(|(item_index, item)| FieldView {
            key: item.key.clone(),
            name: item.name.clone(),
            options: item
                .options
                .iter()
                .enumerate()
                .map(|(option_index, option)| OptionView {
                    value: option.value,
                    label: option.label.clone(),
                    selected: sheet.selection(item_index) == Some(option_index),
                })
                .collect(),
        })
        .collect();

    ScaleForm {
        id: scale.id().to_string(),
        name: scale.name().to_string(),
        note: scale.note().map(String::from),
        fields,
        total: sheet.total(scale),
        severity: sheet.severity(scale).to_string(),
        summary: sheet.summary(scale),
    }
}
