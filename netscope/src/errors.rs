use std::io;

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("No vertex with id {0}")]
    UndefinedVertex(String),

    #[error("Malformed edge on line {line}: expected two whitespace separated tokens, got {content:?}")]
    MalformedInput { line: usize, content: String },

    #[error("{algorithm} did not converge after {iterations} iterations (residual {residual})")]
    NonConvergence {
        algorithm: &'static str,
        iterations: usize,
        residual: f64,
    },

    #[error("Invalid value for parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("IO operation failed")]
    IOError {
        #[from]
        source: io::Error,
    },
}

impl GraphError {
    pub(crate) fn undefined_vertex<V: std::fmt::Debug>(v: &V) -> Self {
        GraphError::UndefinedVertex(format!("{v:?}"))
    }
}
