use crate::scoring::{anchored_options, Item};
use crate::Scale;

/// CWS: Cannabis Withdrawal Scale.
/// 19 symptoms, each rated 0 ("Not at all") to 10 ("Extremely") for the
/// past 24 hours. A monitoring scale: daily totals are compared across the
/// withdrawal episode rather than banded into severity levels.
pub struct NswCws;

impl Scale for NswCws {
    fn id(&self) -> &str {
        "nsw-cws"
    }

    fn name(&self) -> &str {
        "Cannabis Withdrawal Scale"
    }

    fn note(&self) -> Option<&str> {
        Some("Rate each symptom for the past 24 hours. There are no severity cut-offs; track the daily total over the episode.")
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let symptoms = [
                ("nsw-cws-craving", "Craving for marijuana"),
                ("nsw-cws-appetite", "Decreased appetite"),
                ("nsw-cws-sleep", "Sleep difficulty"),
                ("nsw-cws-aggression", "Increased aggression"),
                ("nsw-cws-anger", "Increased anger"),
                ("nsw-cws-irritability", "Increased irritability"),
                ("nsw-cws-nervousness", "Increased nervousness"),
                ("nsw-cws-restlessness", "Restlessness"),
                ("nsw-cws-dreams", "Strange/vivid dreams"),
                ("nsw-cws-nausea", "Nausea"),
                ("nsw-cws-stomach", "Stomach ache"),
                ("nsw-cws-shakiness", "Shakiness/tremors"),
                ("nsw-cws-sweating", "Sweating"),
                ("nsw-cws-headache", "Headache"),
                ("nsw-cws-depressed", "Depressed mood"),
                ("nsw-cws-chills", "Chills"),
                ("nsw-cws-tension", "Physical tension"),
                ("nsw-cws-yawning", "Yawning"),
                ("nsw-cws-runnynose", "Runny nose"),
            ];

            symptoms
                .iter()
                .map(|(key, name)| {
                    Item::new(
                        *key,
                        *name,
                        anchored_options(10, &[(0, "Not at all"), (10, "Extremely")]),
                    )
                })
                .collect()
        });
        &ITEMS
    }

    fn severity(&self, _total: i32) -> &'static str {
        // Monitoring scale, no defined severity bands.
        "N/A"
    }
}
