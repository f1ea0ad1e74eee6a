use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("expected \"{expected}\" at token {position}")]
    ExpectedToken {
        expected: &'static str,
        position: usize,
    },

    #[error("unrecognized channel \"{name}\" at token {position}")]
    UnrecognizedChannel { name: String, position: usize },

    #[error("unexpected token \"{found}\" at token {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("token stream ended at token {position}")]
    UnexpectedEof { position: usize },

    #[error("invalid number \"{value}\" at token {position}")]
    InvalidNumber { value: String, position: usize },

    #[error("motion data ends at token {position} but the file has {total} tokens")]
    TrailingData { position: usize, total: usize },

    #[error("failed to parse mesh: {message}")]
    MeshParse { message: String },
}
