use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::view::{regimen_view, RegimenView};

/// Benzodiazepine used for the taper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Benzodiazepine {
    #[default]
    Diazepam,
    Oxazepam,
}

impl Benzodiazepine {
    pub fn name(&self) -> &'static str {
        match self {
            Benzodiazepine::Diazepam => "Diazepam",
            Benzodiazepine::Oxazepam => "Oxazepam",
        }
    }

    /// Multiplier applied to the diazepam-milligram base schedule. Oxazepam
    /// is charted at three times the diazepam dose.
    pub fn dose_factor(&self) -> u32 {
        match self {
            Benzodiazepine::Diazepam => 1,
            Benzodiazepine::Oxazepam => 3,
        }
    }
}

/// Withdrawal severity tier, chosen from the measured CIWA-Ar score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityTier {
    #[default]
    Mild,
    Moderate,
    Severe,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 3] = [
        SeverityTier::Mild,
        SeverityTier::Moderate,
        SeverityTier::Severe,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SeverityTier::Mild => "Mild-Moderate (CIWA 10-15)",
            SeverityTier::Moderate => "Moderate-Severe (CIWA 15-20)",
            SeverityTier::Severe => "Severe (CIWA > 20)",
        }
    }
}

/// Dosing frequency, as abbreviated on the drug chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    Qid,
    Tds,
    Bd,
    Nocte,
}

impl Frequency {
    pub fn code(&self) -> &'static str {
        match self {
            Frequency::Qid => "qid",
            Frequency::Tds => "tds",
            Frequency::Bd => "bd",
            Frequency::Nocte => "nocte",
        }
    }
}

/// One line of a taper schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ScheduleEntry {
    /// A scheduled dose on a numbered day.
    Dose {
        day: u32,
        dose_mg: u32,
        frequency: Frequency,
    },
    /// Hourly dosing until sedation or the ceiling total is reached.
    Loading { dose_mg: u32, ceiling_mg: u32 },
    /// Free-text instruction.
    Note { text: String },
}

/// A threshold-triggered supplemental dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrnRule {
    pub ciwa_lo: u32,
    pub ciwa_hi: u32,
    pub extra_mg: u32,
}

/// PRN guidance for a tier: dose rules keyed to CIWA bands, or free-text
/// management notes for the severe tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum PrnGuidance {
    Rules { rules: Vec<PrnRule> },
    Notes { notes: Vec<String> },
}

/// A complete taper regimen for one drug at one severity tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Regimen {
    pub title: String,
    pub schedule: Vec<ScheduleEntry>,
    pub prn: PrnGuidance,
}

/// Build the regimen for a drug and severity tier. Doses are derived from
/// the diazepam-milligram base through the drug's dose factor, so the two
/// drugs can never drift apart.
pub fn regimen(drug: Benzodiazepine, tier: SeverityTier) -> Regimen {
    let f = drug.dose_factor();
    let (schedule, prn) = match tier {
        SeverityTier::Mild => (
            vec![
                dose(1, 10 * f, Frequency::Qid),
                dose(2, 10 * f, Frequency::Tds),
                dose(3, 10 * f, Frequency::Bd),
                dose(4, 5 * f, Frequency::Bd),
                dose(5, 5 * f, Frequency::Nocte),
            ],
            escalation_rules(f),
        ),
        SeverityTier::Moderate => (
            vec![
                dose(1, 20 * f, Frequency::Qid),
                dose(2, 15 * f, Frequency::Qid),
                dose(3, 10 * f, Frequency::Qid),
                dose(4, 10 * f, Frequency::Tds),
                dose(5, 5 * f, Frequency::Tds),
                dose(6, 5 * f, Frequency::Bd),
            ],
            escalation_rules(f),
        ),
        SeverityTier::Severe => (
            vec![
                ScheduleEntry::Loading {
                    dose_mg: 20 * f,
                    ceiling_mg: 80 * f,
                },
                ScheduleEntry::Note {
                    text: "Then commence Moderate-Severe schedule.".to_string(),
                },
            ],
            PrnGuidance::Notes {
                notes: vec![
                    "Manage in HDU.".to_string(),
                    // The review threshold is in diazepam-equivalent
                    // milligrams whichever drug is dispensed.
                    "Review if total > 80mg diazepam equivalent.".to_string(),
                ],
            },
        ),
    };

    Regimen {
        title: tier.title().to_string(),
        schedule,
        prn,
    }
}

/// Last-chosen drug and tier, as on the guidelines page. Opens on the
/// diazepam mild-moderate regimen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegimenSelection {
    pub drug: Benzodiazepine,
    pub tier: SeverityTier,
}

impl RegimenSelection {
    pub fn select_drug(&mut self, drug: Benzodiazepine) {
        self.drug = drug;
    }

    pub fn select_tier(&mut self, tier: SeverityTier) {
        self.tier = tier;
    }

    pub fn regimen(&self) -> Regimen {
        regimen(self.drug, self.tier)
    }

    pub fn view(&self) -> RegimenView {
        regimen_view(self.drug, &self.regimen())
    }
}

fn dose(day: u32, dose_mg: u32, frequency: Frequency) -> ScheduleEntry {
    ScheduleEntry::Dose {
        day,
        dose_mg,
        frequency,
    }
}

fn escalation_rules(factor: u32) -> PrnGuidance {
    PrnGuidance::Rules {
        rules: vec![
            PrnRule {
                ciwa_lo: 10,
                ciwa_hi: 15,
                extra_mg: 10 * factor,
            },
            PrnRule {
                ciwa_lo: 15,
                ciwa_hi: 20,
                extra_mg: 20 * factor,
            },
        ],
    }
}
