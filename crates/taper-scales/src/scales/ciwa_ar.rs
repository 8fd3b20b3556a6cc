use crate::scoring::{anchored_options, graded_options, Item};
use crate::Scale;

/// CIWA-Ar: Clinical Institute Withdrawal Assessment for Alcohol, revised.
/// 10 items; nine rated 0–7, orientation 0–4. Total 0–67. On the printed
/// form only some points of the 0–7 items carry descriptors, so the
/// in-between grades are plain numbers here too.
pub struct CiwaAr;

impl Scale for CiwaAr {
    fn id(&self) -> &str {
        "ciwa-ar"
    }

    fn name(&self) -> &str {
        "CIWA-Ar"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            vec![
                Item::new(
                    "ciwa-nausea",
                    "Nausea & Vomiting",
                    anchored_options(
                        7,
                        &[
                            (0, "No nausea and no vomiting"),
                            (1, "Mild nausea with no vomiting"),
                            (4, "Intermittent nausea with dry heaves"),
                            (7, "Constant nausea, frequent dry heaves and vomiting"),
                        ],
                    ),
                ),
                Item::new(
                    "ciwa-tremor",
                    "Tremor",
                    anchored_options(
                        7,
                        &[
                            (0, "No tremor"),
                            (1, "Not visible, but can be felt fingertip to fingertip"),
                            (4, "Moderate, with patient's arms extended"),
                            (7, "Severe, even with arms not extended"),
                        ],
                    ),
                ),
                Item::new(
                    "ciwa-sweats",
                    "Paroxysmal Sweats",
                    anchored_options(
                        7,
                        &[
                            (0, "No sweat visible"),
                            (1, "Barely perceptible sweating, palms moist"),
                            (4, "Beads of sweat obvious on forehead"),
                            (7, "Drenching sweats"),
                        ],
                    ),
                ),
                Item::new(
                    "ciwa-anxiety",
                    "Anxiety",
                    anchored_options(
                        7,
                        &[
                            (0, "No anxiety, at ease"),
                            (1, "Mildly anxious"),
                            (4, "Moderately anxious, or guarded, so anxiety is inferred"),
                            (
                                7,
                                "Equivalent to acute panic states as seen in severe delirium or acute schizophrenic reactions",
                            ),
                        ],
                    ),
                ),
                Item::new(
                    "ciwa-agitation",
                    "Agitation",
                    anchored_options(
                        7,
                        &[
                            (0, "Normal activity"),
                            (1, "Somewhat more than normal activity"),
                            (4, "Moderately fidgety and restless"),
                            (
                                7,
                                "Paces back and forth during most of the interview, or constantly thrashes about",
                            ),
                        ],
                    ),
                ),
                Item::new(
                    "ciwa-tactile",
                    "Tactile Disturbances",
                    graded_options(&[
                        "None",
                        "Very mild itching, pins and needles, burning or numbness",
                        "Mild itching, pins and needles, burning or numbness",
                        "Moderate itching, pins and needles, burning or numbness",
                        "Moderately severe hallucinations",
                        "Severe hallucinations",
                        "Extremely severe hallucinations",
                        "Continuous hallucinations",
                    ]),
                ),
                Item::new(
                    "ciwa-auditory",
                    "Auditory Disturbances",
                    graded_options(&[
                        "Not present",
                        "Very mild harshness or ability to frighten",
                        "Mild harshness or ability to frighten",
                        "Moderate harshness or ability to frighten",
                        "Moderately severe hallucinations",
                        "Severe hallucinations",
                        "Extremely severe hallucinations",
                        "Continuous hallucinations",
                    ]),
                ),
                Item::new(
                    "ciwa-visual",
                    "Visual Disturbances",
                    graded_options(&[
                        "Not present",
                        "Very mild sensitivity",
                        "Mild sensitivity",
                        "Moderate sensitivity",
                        "Moderately severe hallucinations",
                        "Severe hallucinations",
                        "Extremely severe hallucinations",
                        "Continuous hallucinations",
                    ]),
                ),
                Item::new(
                    "ciwa-headache",
                    "Headache",
                    graded_options(&[
                        "Not present",
                        "Very mild",
                        "Mild",
                        "Moderate",
                        "Moderately severe",
                        "Severe",
                        "Very severe",
                        "Extremely severe",
                    ]),
                ),
                Item::new(
                    "ciwa-orientation",
                    "Orientation",
                    graded_options(&[
                        "Oriented and can do serial additions",
                        "Cannot do serial additions or is uncertain about the date",
                        "Disoriented for date by no more than 2 calendar days",
                        "Disoriented for date by more than 2 calendar days",
                        "Disoriented for place and/or person",
                    ]),
                ),
            ]
        });
        &ITEMS
    }

    fn severity(&self, total: i32) -> &'static str {
        if total < 10 {
            "Mild withdrawal"
        } else if total <= 18 {
            "Moderate withdrawal"
        } else {
            "Severe withdrawal"
        }
    }
}
