use crate::scoring::{Item, ScoreOption};
use crate::Scale;

/// COWS: Clinical Opiate Withdrawal Scale.
/// 11 observer-rated items. Point values are irregular (an item may jump
/// from 1 to 3), matching the published score sheet. Total 0–48.
pub struct Cows;

impl Scale for Cows {
    fn id(&self) -> &str {
        "cows"
    }

    fn name(&self) -> &str {
        "COWS"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            vec![
                Item::new(
                    "cows-pulse",
                    "Resting Pulse Rate",
                    vec![
                        ScoreOption::new(0, "Pulse rate 80 or below"),
                        ScoreOption::new(1, "Pulse rate 81-100"),
                        ScoreOption::new(2, "Pulse rate 101-120"),
                        ScoreOption::new(4, "Pulse rate greater than 120"),
                    ],
                ),
                Item::new(
                    "cows-sweating",
                    "Sweating",
                    vec![
                        ScoreOption::new(0, "No report of chills or flushing"),
                        ScoreOption::new(1, "Subjective report of chills or flushing"),
                        ScoreOption::new(2, "Flushed or observable moistness on face"),
                        ScoreOption::new(3, "Beads of sweat on brow or face"),
                        ScoreOption::new(4, "Sweat streaming off face"),
                    ],
                ),
                Item::new(
                    "cows-restless",
                    "Restlessness",
                    vec![
                        ScoreOption::new(0, "Able to sit still"),
                        ScoreOption::new(1, "Reports difficulty sitting still, but is able to do so"),
                        ScoreOption::new(3, "Frequent shifting or extraneous movements of legs or arms"),
                        ScoreOption::new(5, "Unable to sit still for more than a few seconds"),
                    ],
                ),
                Item::new(
                    "cows-pupil",
                    "Pupil size",
                    vec![
                        ScoreOption::new(0, "Pupils pinned or normal size for room light"),
                        ScoreOption::new(1, "Pupils possibly larger than normal for room light"),
                        ScoreOption::new(2, "Pupils moderately dilated"),
                        ScoreOption::new(5, "Pupils so dilated that only the rim of the iris is visible"),
                    ],
                ),
                Item::new(
                    "cows-aches",
                    "Bone or joint aches",
                    vec![
                        ScoreOption::new(0, "Not present"),
                        ScoreOption::new(1, "Mild diffuse discomfort"),
                        ScoreOption::new(2, "Patient reports severe diffuse aching of joints or muscles"),
                        ScoreOption::new(4, "Patient is rubbing joints or muscles and is unable to sit still because of discomfort"),
                    ],
                ),
                Item::new(
                    "cows-nose",
                    "Runny nose or tearing",
                    vec![
                        ScoreOption::new(0, "Not present"),
                        ScoreOption::new(1, "Nasal stuffiness or unusually moist eyes"),
                        ScoreOption::new(2, "Nose running or tearing"),
                        ScoreOption::new(4, "Nose constantly running or tears streaming down cheeks"),
                    ],
                ),
                Item::new(
                    "cows-gi",
                    "GI Upset",
                    vec![
                        ScoreOption::new(0, "No GI symptoms"),
                        ScoreOption::new(1, "Stomach cramps"),
                        ScoreOption::new(2, "Nausea or loose stool"),
                        ScoreOption::new(3, "Vomiting or diarrhoea"),
                        ScoreOption::new(5, "Multiple episodes of diarrhoea or vomiting"),
                    ],
                ),
                Item::new(
                    "cows-tremor",
                    "Tremor",
                    vec![
                        ScoreOption::new(0, "No tremor"),
                        ScoreOption::new(1, "Tremor can be felt, but not observed"),
                        ScoreOption::new(2, "Slight tremor observable"),
                        ScoreOption::new(4, "Gross tremor or muscle twitching"),
                    ],
                ),
                Item::new(
                    "cows-yawning",
                    "Yawning",
                    vec![
                        ScoreOption::new(0, "No yawning"),
                        ScoreOption::new(1, "Yawning once or twice during assessment"),
                        ScoreOption::new(2, "Yawning three or more times during assessment"),
                        ScoreOption::new(4, "Yawning several times per minute"),
                    ],
                ),
                Item::new(
                    "cows-anxiety",
                    "Anxiety or irritability",
                    vec![
                        ScoreOption::new(0, "None"),
                        ScoreOption::new(1, "Patient reports increasing irritability or anxiousness"),
                        ScoreOption::new(2, "Patient obviously irritable or anxious"),
                        ScoreOption::new(4, "Patient so irritable or anxious that participation in the assessment is difficult"),
                    ],
                ),
                Item::new(
                    "cows-skin",
                    "Gooseflesh skin",
                    vec![
                        ScoreOption::new(0, "Skin is smooth"),
                        ScoreOption::new(3, "Piloerection of skin can be felt or hairs standing up on arms"),
                        ScoreOption::new(5, "Prominent piloerection"),
                    ],
                ),
            ]
        });
        &ITEMS
    }

    fn severity(&self, total: i32) -> &'static str {
        if total <= 4 {
            "Minimal Withdrawal"
        } else if total <= 12 {
            "Mild Withdrawal"
        } else if total <= 24 {
            "Moderate Withdrawal"
        } else if total <= 36 {
            "Moderately Severe"
        } else {
            "Severe Withdrawal"
        }
    }
}
