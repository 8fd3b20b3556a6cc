//! Alcohol-withdrawal management pathway.
//!
//! Stratifies by average recent daily standard-drink intake (≤ 7, 8-14,
//! ≥ 15), past history of seizures / delirium tremens / complex withdrawal,
//! and psychosocial support, terminating in eight recommendation outcomes
//! ranging from supportive treatment to Base-Hospital-only admission.

use taper_core::page::Page;

use crate::error::FlowchartError;
use crate::graph::{AnswerOption, Flowchart, FlowchartNode};

const SEIZURE_HISTORY_PROMPT: &str =
    "Does the patient have a past history of seizures, delirium tremens, or complex withdrawal?";

/// Build the alcohol-withdrawal flowchart. Validation runs on every call;
/// load it once at startup and keep it for the life of the process.
pub fn alcohol_withdrawal() -> Result<Flowchart, FlowchartError> {
    let nodes = vec![
        FlowchartNode::question(
            "start",
            "Start",
            "How is the patient being referred?",
            vec![AnswerOption::new(
                "GP, D&A, Other LHD Service, or Self-Referral",
                "intake_assessment",
            )],
        ),
        FlowchartNode::question(
            "intake_assessment",
            "Assessment",
            "Proceed with intake and a comprehensive assessment. Does the patient require \
             withdrawal management?",
            vec![
                AnswerOption::new("Yes, withdrawal is required", "ask_std_drinks"),
                AnswerOption::new("No, withdrawal is not required", "refer_psychosocial"),
            ],
        ),
        FlowchartNode::outcome(
            "refer_psychosocial",
            "Referral",
            "Patient does not require withdrawal management.\n\nRefer to Addiction Medicine / \
             psychosocial team as appropriate.",
        )
        .with_emr_summary(
            "Patient assessed and does not require withdrawal management. Referred to Addiction \
             Medicine / psychosocial team for ongoing support.",
        ),
        FlowchartNode::question(
            "ask_std_drinks",
            "Alcohol Intake",
            "What is the patient's average recent daily standard drink (std) intake?",
            vec![
                AnswerOption::new("≤ 7 Standard Drinks daily", "ask_seizure_history_under8"),
                AnswerOption::new("8-14 Standard Drinks daily", "ask_seizure_history_8to14"),
                AnswerOption::new("≥ 15 Standard Drinks daily", "ask_seizure_history_15plus"),
            ],
        ),
        FlowchartNode::question(
            "ask_seizure_history_under8",
            "Seizure History (≤ 7)",
            SEIZURE_HISTORY_PROMPT,
            vec![
                AnswerOption::new("No past history", "outcome_supportive_care_under8"),
                AnswerOption::new("Yes, has a past history", "outcome_admit_dh_under8"),
            ],
        ),
        FlowchartNode::outcome(
            "outcome_supportive_care_under8",
            "Supportive Care",
            "Patient has no past history of severe withdrawal.\n\nRecommendation: Supportive \
             treatment.",
        )
        .with_emr_summary(
            "Patient consuming ≤ 7 standard drinks daily with no history of complex withdrawal. \
             Plan: Supportive treatment.",
        ),
        FlowchartNode::outcome(
            "outcome_admit_dh_under8",
            "Consider Admission (≤ 7)",
            "Patient has a past history of severe withdrawal.\n\nRecommendation: Consider \
             admission to district hospital / MPS / outpatient detox unit for monitoring.",
        )
        .with_emr_summary(
            "Patient consuming ≤ 7 standard drinks daily but has a history of complex \
             withdrawal. Plan: Consider admission to district hospital / MPS / outpatient detox \
             unit for monitored withdrawal.",
        )
        .with_guideline_link(Page::InpatientGuidelines),
        FlowchartNode::question(
            "ask_seizure_history_8to14",
            "Seizure History (8-14)",
            SEIZURE_HISTORY_PROMPT,
            vec![
                AnswerOption::new("No past history", "ask_psychosocial_8to14"),
                AnswerOption::new("Yes, has a past history", "outcome_consider_base_8to14"),
            ],
        ),
        FlowchartNode::question(
            "ask_psychosocial_8to14",
            "Psychosocial (8-14)",
            "What is the patient's psychosocial situation?",
            vec![
                AnswerOption::new(
                    "Good psychosocial support / No alcohol in house",
                    "outcome_ambulatory_detox",
                ),
                AnswerOption::new(
                    "Poor support / Lives alone / Failed outpatient attempts",
                    "outcome_admit_dh_8to14",
                ),
            ],
        ),
        FlowchartNode::outcome(
            "outcome_ambulatory_detox",
            "Ambulatory Detox",
            "Patient has good psychosocial support.\n\nRecommendation: Ambulatory Detox.",
        )
        .with_emr_summary(
            "Patient consuming 8-14 standard drinks daily with no complex withdrawal history \
             and good psychosocial support. Plan: Ambulatory Detox.",
        )
        .with_ambulatory_guideline_link(Page::AmbulatoryGuidelines),
        FlowchartNode::outcome(
            "outcome_admit_dh_8to14",
            "Admission (8-14)",
            "Patient has poor psychosocial support or has failed previous outpatient attempts.\
             \n\nRecommendation: Admission to district hospital / MPS / outpatient detox unit.",
        )
        .with_emr_summary(
            "Patient consuming 8-14 standard drinks daily with poor psychosocial support. Plan: \
             Admission to district hospital / MPS / outpatient detox unit.",
        )
        .with_guideline_link(Page::InpatientGuidelines),
        FlowchartNode::outcome(
            "outcome_consider_base_8to14",
            "Consider General Hospital (8-14)",
            "Patient has a past history of severe withdrawal.\n\nRecommendation: Can consider \
             admission to district hospital / MPS / outpatient detox unit, but Base Hospital is \
             safer.",
        )
        .with_emr_summary(
            "Patient consuming 8-14 std drinks with a history of complex withdrawal. Plan: \
             Admission is recommended; Base Hospital is the safer option over district hospital \
             / MPS / outpatient detox unit.",
        )
        .with_guideline_link(Page::InpatientGuidelines),
        FlowchartNode::question(
            "ask_seizure_history_15plus",
            "Seizure History (≥ 15)",
            SEIZURE_HISTORY_PROMPT,
            vec![
                AnswerOption::new("No past history", "outcome_consider_base_15plus"),
                AnswerOption::new("Yes, has a past history", "outcome_base_only_15plus"),
            ],
        ),
        FlowchartNode::outcome(
            "outcome_consider_base_15plus",
            "Consider General (≥ 15)",
            "Patient has no history of severe withdrawal but intake is high.\n\n\
             Recommendation: Consider General Hospital admission.",
        )
        .with_emr_summary(
            "Patient consuming 15+ standard drinks daily. Plan: Consider Base Hospital \
             admission due to high level of use.",
        )
        .with_guideline_link(Page::InpatientGuidelines),
        FlowchartNode::outcome(
            "outcome_base_only_15plus",
            "General Hospital Admission Only",
            "Patient has a history of severe withdrawal and high intake.\n\nRecommendation: For \
             General Hospital admission only.",
        )
        .with_emr_summary(
            "Patient consuming 15+ standard drinks daily with a history of complex withdrawal. \
             Plan: For Base Hospital admission only.",
        )
        .with_guideline_link(Page::InpatientGuidelines),
    ];

    Flowchart::new("start", nodes)
}
