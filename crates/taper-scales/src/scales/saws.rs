use crate::scoring::{graded_options, Item};
use crate::Scale;

/// SAWS: Short Alcohol Withdrawal Scale.
/// 10 self-rated symptoms, each graded none/mild/moderate/severe (0–3).
/// Total 0–30.
pub struct Saws;

impl Scale for Saws {
    fn id(&self) -> &str {
        "saws"
    }

    fn name(&self) -> &str {
        "SAWS"
    }

    fn note(&self) -> Option<&str> {
        Some("Completed by the patient, rating each symptom over the past 24 hours.")
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let symptoms = [
                ("saws-anxious", "Anxious"),
                ("saws-sleep", "Sleep disturbance"),
                ("saws-memory", "Memory problems"),
                ("saws-nausea", "Nausea"),
                ("saws-restless", "Restless"),
                ("saws-tremor", "Tremor (shakes)"),
                ("saws-confused", "Feeling confused"),
                ("saws-sweating", "Sweating"),
                ("saws-miserable", "Miserable"),
                ("saws-heart", "Heart pounding"),
            ];

            symptoms
                .iter()
                .map(|(key, name)| {
                    Item::new(
                        *key,
                        *name,
                        graded_options(&["None", "Mild", "Moderate", "Severe"]),
                    )
                })
                .collect()
        });
        &ITEMS
    }

    fn severity(&self, total: i32) -> &'static str {
        if total == 0 {
            "None"
        } else if total <= 5 {
            "Mild"
        } else if total <= 12 {
            "Moderate"
        } else {
            "Severe"
        }
    }
}
