use crate::scoring::{graded_options, Item};
use crate::Scale;

/// AWS: Alcohol Withdrawal Scale.
/// 7 observer-rated items (tremor 0–3, the rest 0–4). Total 0–27.
pub struct Aws;

impl Scale for Aws {
    fn id(&self) -> &str {
        "aws"
    }

    fn name(&self) -> &str {
        "AWS"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            vec![
                Item::new(
                    "aws-perspiration",
                    "Perspiration",
                    graded_options(&[
                        "No abnormal sweating",
                        "Moist skin",
                        "Localised beads of sweat",
                        "Whole body wet from perspiration",
                        "Profuse maximal sweating, clothes and linen are wet",
                    ]),
                ),
                Item::new(
                    "aws-tremor",
                    "Tremor",
                    graded_options(&[
                        "No tremor",
                        "Slight tremor",
                        "Constant slight tremor of upper extremities",
                        "Constant marked tremor of extremities",
                    ]),
                ),
                Item::new(
                    "aws-anxiety",
                    "Anxiety",
                    graded_options(&[
                        "No apprehension or anxiety",
                        "Slight apprehension",
                        "Apprehension or understandable fear",
                        "Anxiety occasionally accentuated to a state of panic",
                        "Constant panic-like anxiety",
                    ]),
                ),
                Item::new(
                    "aws-agitation",
                    "Agitation",
                    graded_options(&[
                        "Rests normally during the day, no signs of restlessness",
                        "Slight restlessness, cannot sit or lie still",
                        "Moves constantly, looks tense, wants to get out of bed",
                        "Constantly restless, gets out of bed for no obvious reason",
                        "Maximally restless, aggressive, ignores requests to stay in bed",
                    ]),
                ),
                Item::new(
                    "aws-temp",
                    "Axilla temperature",
                    graded_options(&[
                        "37.0°C or below",
                        "37.1°C to 37.5°C",
                        "37.6°C to 38.0°C",
                        "38.1°C to 38.5°C",
                        "38.6°C or above",
                    ]),
                ),
                Item::new(
                    "aws-hallucinations",
                    "Hallucinations",
                    graded_options(&[
                        "No evidence of hallucinations",
                        "Distortions of real objects, aware that these are not real",
                        "Appearance of totally new objects or perceptions, aware these are not real",
                        "Believes the hallucinations are real, but still oriented in place and person",
                        "Believes self to be in a totally non-existent environment, preoccupied, cannot be diverted",
                    ]),
                ),
                Item::new(
                    "aws-orientation",
                    "Orientation",
                    graded_options(&[
                        "Fully oriented in time, place and person",
                        "Oriented in person, but not sure where they are or what time it is",
                        "Oriented in person, but disoriented in time and place",
                        "Doubtful personal orientation, disoriented in time and place",
                        "Disoriented in time, place and person, no meaningful contact can be made",
                    ]),
                ),
            ]
        });
        &ITEMS
    }

    fn severity(&self, total: i32) -> &'static str {
        if total <= 4 {
            "Mild withdrawal"
        } else if total <= 14 {
            "Moderate withdrawal"
        } else {
            "Severe withdrawal"
        }
    }
}
