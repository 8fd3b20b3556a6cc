//! Pure history → view-model rendering.
//!
//! [`render`] derives everything a rendering surface needs from the current
//! navigation history and the node table: breadcrumbs, the prompt, the
//! step's controls. It has no side effects; copying an EMR summary or
//! following a guideline action is the shell's job, through the collaborator
//! seams in `taper-core`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use taper_core::page::Page;

use crate::error::FlowchartError;
use crate::graph::{Flowchart, NodeBody};
use crate::nav::Navigation;

/// One clickable breadcrumb: the node's short title plus the history index
/// a jump must target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Breadcrumb {
    pub index: usize,
    pub title: String,
}

/// A navigation action rendered on an outcome step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuidelineAction {
    pub label: String,
    pub page: Page,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum StepBody {
    /// One actionable control per option, in declaration order. Selecting
    /// option `i` maps to `Navigation::advance(_, i)`.
    Question { options: Vec<String> },
    /// Terminal recommendation. The EMR summary, when present, is rendered
    /// read-only with a copy action.
    Outcome {
        emr_summary: Option<String>,
        actions: Vec<GuidelineAction>,
    },
}

/// Everything needed to draw the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StepView {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub prompt: String,
    pub body: StepBody,
    /// False exactly when the history holds only the start node.
    pub can_go_back: bool,
}

/// Render the current step as a pure function of the history.
///
/// Fails only if a history id is absent from the table, which cannot happen
/// for a navigation driven through this flowchart's own transitions.
pub fn render(flowchart: &Flowchart, nav: &Navigation) -> Result<StepView, FlowchartError> {
    let mut breadcrumbs = Vec::with_capacity(nav.len());
    for (index, id) in nav.history().iter().enumerate() {
        let node = flowchart
            .node(id)
            .ok_or_else(|| FlowchartError::UnknownNode(id.clone()))?;
        breadcrumbs.push(Breadcrumb {
            index,
            title: node.title.clone(),
        });
    }

    let current = flowchart
        .node(nav.current())
        .ok_or_else(|| FlowchartError::UnknownNode(nav.current().to_string()))?;

    let body = match &current.body {
        NodeBody::Question { options } => StepBody::Question {
            options: options.iter().map(|o| o.label.clone()).collect(),
        },
        NodeBody::Outcome {
            emr_summary,
            guideline_link,
            ambulatory_guideline_link,
        } => {
            let mut actions = Vec::new();
            if let Some(page) = guideline_link {
                actions.push(GuidelineAction {
                    label: "View Inpatient Guidelines".to_string(),
                    page: *page,
                });
            }
            if let Some(page) = ambulatory_guideline_link {
                actions.push(GuidelineAction {
                    label: "View Ambulatory Detox Guidelines".to_string(),
                    page: *page,
                });
            }
            StepBody::Outcome {
                emr_summary: emr_summary.clone(),
                actions,
            }
        }
    };

    Ok(StepView {
        breadcrumbs,
        prompt: current.prompt.clone(),
        body,
        can_go_back: nav.len() > 1,
    })
}
