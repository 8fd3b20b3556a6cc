use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowchartError {
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    #[error("start node '{0}' is not in the table")]
    UnknownStart(String),

    #[error("question node '{0}' has no options")]
    EmptyQuestion(String),

    #[error("node '{node}' option '{label}' points at missing node '{target}'")]
    DanglingReference {
        node: String,
        label: String,
        target: String,
    },

    #[error("node '{0}' is not in the table")]
    UnknownNode(String),

    #[error("node '{node}' has no option at index {index}")]
    NoSuchOption { node: String, index: usize },

    #[error("node '{0}' is an outcome, not a question")]
    NotAQuestion(String),
}
