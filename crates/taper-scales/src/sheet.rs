use taper_core::text::strip_markup;

use crate::error::ScaleError;
use crate::Scale;

/// Selection state for one scale: the chosen option index per item, in item
/// declaration order.
///
/// A fresh sheet mirrors the form's default-checked radios: every item
/// starts on its first declared option. A cleared item contributes zero to
/// the total and is left out of the summary breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSheet {
    selected: Vec<Option<usize>>,
}

impl ScoreSheet {
    /// Fresh sheet with every item on its first declared option. An item
    /// with no options starts unselected.
    pub fn new(scale: &dyn Scale) -> Self {
        let selected = scale
            .items()
            .iter()
            .map(|item| if item.options.is_empty() { None } else { Some(0) })
            .collect();
        Self { selected }
    }

    /// Number of item slots on the sheet.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The selected option index for an item, if any.
    pub fn selection(&self, item_index: usize) -> Option<usize> {
        self.selected.get(item_index).copied().flatten()
    }

    /// Select an option for an item, radio-group style: whatever was
    /// selected for that item before is replaced.
    pub fn select(
        &mut self,
        scale: &dyn Scale,
        item_index: usize,
        option_index: usize,
    ) -> Result<(), ScaleError> {
        let item = scale
            .items()
            .get(item_index)
            .ok_or_else(|| ScaleError::NoSuchItem {
                scale_id: scale.id().to_string(),
                index: item_index,
            })?;
        if option_index >= item.options.len() {
            return Err(ScaleError::NoSuchOption {
                item_key: item.key.clone(),
                index: option_index,
            });
        }
        let slot = self
            .selected
            .get_mut(item_index)
            .ok_or_else(|| ScaleError::NoSuchItem {
                scale_id: scale.id().to_string(),
                index: item_index,
            })?;
        *slot = Some(option_index);
        Ok(())
    }

    /// Clear an item's selection outright. Out-of-range indices are a no-op.
    pub fn clear(&mut self, item_index: usize) {
        if let Some(slot) = self.selected.get_mut(item_index) {
            *slot = None;
        }
    }

    /// Return every item to its first declared option.
    pub fn reset(&mut self, scale: &dyn Scale) {
        *self = ScoreSheet::new(scale);
    }

    /// Total score: the sum of the selected option values. Unselected items
    /// contribute zero.
    pub fn total(&self, scale: &dyn Scale) -> i32 {
        scale
            .items()
            .iter()
            .zip(&self.selected)
            .map(|(item, slot)| {
                slot.and_then(|i| item.options.get(i))
                    .map(|option| option.value)
                    .unwrap_or(0)
            })
            .sum()
    }

    /// Severity label for the current total.
    pub fn severity(&self, scale: &dyn Scale) -> &'static str {
        scale.severity(self.total(scale))
    }

    /// EMR-ready text block: headline with total and severity, then one
    /// breakdown line per selected item, in item declaration order. Option
    /// labels have display markup stripped.
    pub fn summary(&self, scale: &dyn Scale) -> String {
        let total = self.total(scale);
        let mut summary = format!(
            "{} assessed. Total score: {} ({}).\nBreakdown:\n",
            scale.name(),
            total,
            scale.severity(total),
        );
        for (item, slot) in scale.items().iter().zip(&self.selected) {
            if let Some(option) = slot.and_then(|i| item.options.get(i)) {
                summary.push_str(&format!(
                    "- {}: {}\n",
                    item.name,
                    strip_markup(&option.label)
                ));
            }
        }
        summary.trim_end().to_string()
    }
}
