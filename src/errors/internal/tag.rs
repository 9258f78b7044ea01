use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("Tag already exists: {name}")]
    DuplicateName { name: String },

    #[error("Tag not found: {tag_id}")]
    TagNotFound { tag_id: i32 },

    #[error("Tag name must contain at least one non-whitespace character")]
    EmptyName,
}
