use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use taper_core::page::Page;

use crate::error::FlowchartError;

/// One selectable answer on a question node.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    /// Id of the node this answer leads to.
    pub next: String,
}

impl AnswerOption {
    pub fn new(label: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            next: next.into(),
        }
    }
}

/// What a node does: ask the clinician a question, or deliver a terminal
/// recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum NodeBody {
    Question {
        options: Vec<AnswerOption>,
    },
    Outcome {
        /// Plain-text clinical note for copy-paste into an EMR.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        emr_summary: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        guideline_link: Option<Page>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        ambulatory_guideline_link: Option<Page>,
    },
}

/// A single step in a decision tree.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FlowchartNode {
    pub id: String,
    /// Short label used for breadcrumbs.
    pub title: String,
    /// Display text for the step.
    pub prompt: String,
    pub body: NodeBody,
}

impl FlowchartNode {
    pub fn question(
        id: impl Into<String>,
        title: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prompt: prompt.into(),
            body: NodeBody::Question { options },
        }
    }

    pub fn outcome(
        id: impl Into<String>,
        title: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prompt: prompt.into(),
            body: NodeBody::Outcome {
                emr_summary: None,
                guideline_link: None,
                ambulatory_guideline_link: None,
            },
        }
    }

    /// Attach an EMR summary. No effect on question nodes.
    pub fn with_emr_summary(mut self, summary: impl Into<String>) -> Self {
        if let NodeBody::Outcome { emr_summary, .. } = &mut self.body {
            *emr_summary = Some(summary.into());
        }
        self
    }

    /// Link an outcome to the inpatient guideline page. No effect on
    /// question nodes.
    pub fn with_guideline_link(mut self, page: Page) -> Self {
        if let NodeBody::Outcome { guideline_link, .. } = &mut self.body {
            *guideline_link = Some(page);
        }
        self
    }

    /// Link an outcome to the ambulatory guideline page. No effect on
    /// question nodes.
    pub fn with_ambulatory_guideline_link(mut self, page: Page) -> Self {
        if let NodeBody::Outcome {
            ambulatory_guideline_link,
            ..
        } = &mut self.body
        {
            *ambulatory_guideline_link = Some(page);
        }
        self
    }
}

/// An immutable decision tree: nodes keyed by id, with a designated start
/// node. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Flowchart {
    start: String,
    nodes: HashMap<String, FlowchartNode>,
}

impl Flowchart {
    /// Build and validate a flowchart.
    ///
    /// A duplicate node id, an unknown start node, a question with no
    /// options, or an answer pointing at a missing node is a configuration
    /// error: the whole table is refused here rather than failing
    /// mid-session. After this returns `Ok`, every answer target resolves.
    pub fn new(
        start: impl Into<String>,
        nodes: Vec<FlowchartNode>,
    ) -> Result<Self, FlowchartError> {
        let start = start.into();
        let mut table = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if table.contains_key(&node.id) {
                return Err(FlowchartError::DuplicateNode(node.id));
            }
            table.insert(node.id.clone(), node);
        }

        if !table.contains_key(&start) {
            return Err(FlowchartError::UnknownStart(start));
        }

        for node in table.values() {
            if let NodeBody::Question { options } = &node.body {
                if options.is_empty() {
                    return Err(FlowchartError::EmptyQuestion(node.id.clone()));
                }
                for option in options {
                    if !table.contains_key(&option.next) {
                        return Err(FlowchartError::DanglingReference {
                            node: node.id.clone(),
                            label: option.label.clone(),
                            target: option.next.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self { start, nodes: table })
    }

    pub fn start_id(&self) -> &str {
        &self.start
    }

    pub fn node(&self, id: &str) -> Option<&FlowchartNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
