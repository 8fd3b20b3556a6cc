use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One selectable grade of an item: an integer score and the clinical
/// descriptor shown next to the radio button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreOption {
    pub value: i32,
    pub label: String,
}

impl ScoreOption {
    pub fn new(value: i32, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// A graded item within a scale: one radio group of mutually exclusive
/// options. The first declared option is the form's default selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Stable group key (e.g. "ciwa-tremor").
    pub key: String,
    /// Display name used in forms and summary breakdowns.
    pub name: String,
    pub options: Vec<ScoreOption>,
}

impl Item {
    pub fn new(key: impl Into<String>, name: impl Into<String>, options: Vec<ScoreOption>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            options,
        }
    }
}

/// Options valued 0, 1, 2, ... in declaration order, one per label.
pub fn graded_options(labels: &[&str]) -> Vec<ScoreOption> {
    labels
        .iter()
        .enumerate()
        .map(|(value, label)| ScoreOption::new(value as i32, *label))
        .collect()
}

/// Options valued 0..=max. Anchored points carry their clinical descriptor;
/// the unanchored points in between are labeled with the bare number, as on
/// the printed form.
pub fn anchored_options(max: i32, anchors: &[(i32, &str)]) -> Vec<ScoreOption> {
    (0..=max)
        .map(|value| {
            let label = anchors
                .iter()
                .find(|(anchor, _)| *anchor == value)
                .map(|(_, label)| (*label).to_string())
                .unwrap_or_else(|| value.to_string());
            ScoreOption { value, label }
        })
        .collect()
}
