use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoggleError>;

#[derive(Debug, Error)]
pub enum BoggleError {
    /// A die was constructed from an empty list of faces
    #[error("a die must have at least 1 face")]
    NoFaces,

    #[error("face {face} is out of range for a die with {faces} faces")]
    FaceOutOfRange { face: usize, faces: usize },

    /// The word list could not be read at startup
    #[error("dictionary {path} is missing or unreadable")]
    DictionaryMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the dice have not been rolled yet")]
    NotRolled,

    #[error("die {index} cannot be selected: {reason}")]
    IllegalSelection { index: usize, reason: &'static str },

    #[error("no word has been assembled")]
    EmptyWord,
}
