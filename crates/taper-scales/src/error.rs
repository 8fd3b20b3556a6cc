use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("scale '{scale_id}' has no item at index {index}")]
    NoSuchItem { scale_id: String, index: usize },

    #[error("item '{item_key}' has no option at index {index}")]
    NoSuchOption { item_key: String, index: usize },
}
