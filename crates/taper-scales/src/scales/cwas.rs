use crate::scoring::{graded_options, Item};
use crate::Scale;

/// CWAS: Cannabis Withdrawal Assessment Scale.
/// 27 symptoms, each graded none/mild/moderate/severe (0–3). Like the CWS
/// this is a monitoring scale with no defined severity bands.
pub struct Cwas;

impl Scale for Cwas {
    fn id(&self) -> &str {
        "cwas"
    }

    fn name(&self) -> &str {
        "Cannabis Withdrawal Assessment Scale"
    }

    fn note(&self) -> Option<&str> {
        Some("Grade each symptom over the past 24 hours. Track the daily total over the episode.")
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let symptoms = [
                ("cwas-craving", "Craving for marijuana"),
                ("cwas-appetite", "Decreased appetite"),
                ("cwas-sleep", "Sleep difficulty"),
                ("cwas-aggression", "Increased aggression"),
                ("cwas-anger", "Increased anger"),
                ("cwas-irritability", "Irritability"),
                ("cwas-dreams", "Strange dreams"),
                ("cwas-restlessness", "Restlessness"),
                ("cwas-chills", "Chills"),
                ("cwas-feverish", "Feverish feeling"),
                ("cwas-stuffy-nose", "Stuffy nose"),
                ("cwas-nausea", "Nausea"),
                ("cwas-diarrhoea", "Diarrhoea"),
                ("cwas-hot-flashes", "Hot flashes"),
                ("cwas-dizziness", "Dizziness"),
                ("cwas-sweating", "Sweating"),
                ("cwas-hiccups", "Hiccups"),
                ("cwas-yawning", "Yawning"),
                ("cwas-headaches", "Headaches"),
                ("cwas-shakiness", "Shakiness"),
                ("cwas-muscle-spasms", "Muscle spasms"),
                ("cwas-stomach-pains", "Stomach pains"),
                ("cwas-fatigue", "Fatigue"),
                ("cwas-depressed", "Depressed mood"),
                ("cwas-concentrating", "Difficulty concentrating"),
                ("cwas-nervousness", "Nervousness"),
                ("cwas-violent-outbursts", "Violent outbursts"),
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

    fn severity(&self, _total: i32) -> &'static str {
        "N/A"
    }
}
