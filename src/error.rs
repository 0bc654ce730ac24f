use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("couldn't read file {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read failed at line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected a non-negative integer, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: group sum overflowed")]
    SumOverflow { line: usize },

    #[error("sum of the top {k} groups overflowed")]
    TopSumOverflow { k: usize },

    #[error("asked for the top {requested} groups but only {available} exist")]
    InsufficientGroups { requested: usize, available: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
