use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::benzo::{Benzodiazepine, PrnGuidance, Regimen, ScheduleEntry};

/// Display lines for one regimen, ready for any rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegimenView {
    pub title: String,
    pub schedule: Vec<String>,
    pub prn: Vec<String>,
}

/// Format a regimen the way the dosing chart reads.
pub fn regimen_view(drug: Benzodiazepine, regimen: &Regimen) -> RegimenView {
    let name = drug.name();

    let schedule = regimen
        .schedule
        .iter()
        .map(|entry| match entry {
            ScheduleEntry::Dose {
                day,
                dose_mg,
                frequency,
            } => format!("Day {day}: {name} {dose_mg}mg {}", frequency.code()),
            ScheduleEntry::Loading { dose_mg, ceiling_mg } => format!(
                "Loading Dose: {name} {dose_mg}mg hourly until sedated or total dose reaches {ceiling_mg}mg."
            ),
            ScheduleEntry::Note { text } => text.clone(),
        })
        .collect();

    let prn = match &regimen.prn {
        PrnGuidance::Rules { rules } => rules
            .iter()
            .map(|rule| {
                format!(
                    "CIWA {}-{}: extra {name} {}mg prn",
                    rule.ciwa_lo, rule.ciwa_hi, rule.extra_mg
                )
            })
            .collect(),
        PrnGuidance::Notes { notes } => notes.clone(),
    };

    RegimenView {
        title: regimen.title.clone(),
        schedule,
        prn,
    }
}
