use crate::scoring::{graded_options, Item};
use crate::Scale;

/// CIWA-B: Clinical Institute Withdrawal Assessment for Benzodiazepines.
/// 10 items, each rated 0–4. Total 0–40.
pub struct CiwaB;

impl Scale for CiwaB {
    fn id(&self) -> &str {
        "ciwa-b"
    }

    fn name(&self) -> &str {
        "CIWA-B"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            vec![
                Item::new(
                    "ciwab-nausea",
                    "Nausea and Vomiting",
                    graded_options(&[
                        "None",
                        "Mild nausea, no vomiting",
                        "Intermittent nausea",
                        "Frequent nausea with dry heaves",
                        "Constant nausea with vomiting",
                    ]),
                ),
                Item::new(
                    "ciwab-tremor",
                    "Tremor",
                    graded_options(&[
                        "No tremor",
                        "Not visible, but can be felt in the fingers",
                        "Visible with arms extended",
                        "Marked with arms extended",
                        "Severe, even with arms not extended",
                    ]),
                ),
                Item::new(
                    "ciwab-sweats",
                    "Diaphoresis (Sweating)",
                    graded_options(&[
                        "No sweating visible",
                        "Palms moist",
                        "Beads of sweat on forehead",
                        "Sweating of face and chest",
                        "Drenching sweats",
                    ]),
                ),
                Item::new(
                    "ciwab-anxiety",
                    "Anxiety",
                    graded_options(&[
                        "No anxiety, at ease",
                        "Mildly anxious",
                        "Moderately anxious",
                        "Markedly anxious",
                        "Equivalent to acute panic",
                    ]),
                ),
                Item::new(
                    "ciwab-agitation",
                    "Agitation",
                    graded_options(&[
                        "Normal activity",
                        "Somewhat more than normal activity",
                        "Moderately fidgety and restless",
                        "Marked restlessness, cannot sit still",
                        "Paces or thrashes about constantly",
                    ]),
                ),
                Item::new(
                    "ciwab-tactile",
                    "Tactile Disturbances",
                    graded_options(&[
                        "None",
                        "Mild itching or pins and needles",
                        "Moderate itching, pins and needles or numbness",
                        "Marked burning or numbness",
                        "Continuous tactile hallucinations",
                    ]),
                ),
                Item::new(
                    "ciwab-auditory",
                    "Auditory Disturbances",
                    graded_options(&[
                        "Not present",
                        "Mildly sensitive to sounds",
                        "Moderately sensitive to sounds",
                        "Markedly sensitive, or transient hallucinations",
                        "Continuous auditory hallucinations",
                    ]),
                ),
                Item::new(
                    "ciwab-visual",
                    "Visual Disturbances",
                    graded_options(&[
                        "Not present",
                        "Mildly sensitive to light",
                        "Moderately sensitive to light",
                        "Markedly sensitive, or transient hallucinations",
                        "Continuous visual hallucinations",
                    ]),
                ),
                Item::new(
                    "ciwab-headache",
                    "Headache",
                    graded_options(&[
                        "Not present",
                        "Mild",
                        "Moderate",
                        "Severe",
                        "Extremely severe",
                    ]),
                ),
                Item::new(
                    "ciwab-orientation",
                    "Clouding of Sensorium (Orientation)",
                    graded_options(&[
                        "Oriented, clear sensorium",
                        "Uncertain about the date",
                        "Disoriented for date by no more than 2 calendar days",
                        "Disoriented for date by more than 2 calendar days",
                        "Disoriented for place or person",
                    ]),
                ),
            ]
        });
        &ITEMS
    }

    fn severity(&self, total: i32) -> &'static str {
        if total < 10 {
            "Mild withdrawal"
        } else if total <= 20 {
            "Moderate withdrawal"
        } else {
            "Severe withdrawal"
        }
    }
}
