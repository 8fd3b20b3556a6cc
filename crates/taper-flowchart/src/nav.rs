use crate::error::FlowchartError;
use crate::graph::{Flowchart, NodeBody};

/// The path taken through a flowchart. The first entry is always the start
/// node, the last is the current node, and the history is never empty.
///
/// This is a finite-history stack machine, not an undo log: advancing after
/// `go_back` or `jump_to` discards the truncated tail for good. There is no
/// redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    history: Vec<String>,
}

impl Navigation {
    /// Begin a fresh session at the flowchart's start node.
    pub fn start(flowchart: &Flowchart) -> Self {
        Self {
            history: vec![flowchart.start_id().to_string()],
        }
    }

    /// Id of the current node (the last history entry).
    pub fn current(&self) -> &str {
        // History is non-empty from construction onward.
        self.history.last().map(String::as_str).unwrap_or_default()
    }

    /// The full path, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Choose an option on the current question node and move to its target.
    ///
    /// Errors if the current node is an outcome, the option index is out of
    /// range, or the navigation belongs to a different flowchart. Dangling
    /// targets cannot occur: [`Flowchart::new`] refuses tables containing
    /// them.
    pub fn advance(
        &mut self,
        flowchart: &Flowchart,
        option_index: usize,
    ) -> Result<(), FlowchartError> {
        let node = flowchart
            .node(self.current())
            .ok_or_else(|| FlowchartError::UnknownNode(self.current().to_string()))?;

        let NodeBody::Question { options } = &node.body else {
            return Err(FlowchartError::NotAQuestion(node.id.clone()));
        };

        let option = options
            .get(option_index)
            .ok_or_else(|| FlowchartError::NoSuchOption {
                node: node.id.clone(),
                index: option_index,
            })?;

        self.history.push(option.next.clone());
        Ok(())
    }

    /// Step back one node. No-op when already at the start node.
    pub fn go_back(&mut self) {
        if self.history.len() > 1 {
            self.history.pop();
        }
    }

    /// Jump back to the breadcrumb at `index`, discarding everything after
    /// it. An out-of-range index is a no-op.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.history.len() {
            self.history.truncate(index + 1);
        }
    }

    /// Reset to the start node, as if the flowchart page were re-entered.
    pub fn restart(&mut self, flowchart: &Flowchart) {
        self.history.clear();
        self.history.push(flowchart.start_id().to_string());
    }
}
