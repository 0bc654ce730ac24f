pub mod aggregator;
pub mod error;
pub mod parser;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub use aggregator::{GroupSums, GroupedTopKAggregator, ParsePolicy};
pub use error::{Error, Result};

/// Opens `path` for line-by-line reading. `-` means stdin.
///
/// The file is opened here, before any line is read, so a missing file is reported on its own.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(std::io::stdin().lock()));
    }

    let not_found = |source: std::io::Error| Error::FileNotFound {
        path: path.to_owned(),
        source,
    };

    let file = File::open(path).map_err(not_found)?;
    // Directories open fine on unix and only fail on the first read.
    if file.metadata().map_err(not_found)?.is_dir() {
        return Err(not_found(std::io::Error::new(
            std::io::ErrorKind::Other,
            "is a directory",
        )));
    }
    Ok(Box::new(BufReader::new(file)))
}

pub fn read_groups(path: &Path, policy: ParsePolicy) -> Result<GroupSums> {
    let input = open_input(path)?;
    GroupedTopKAggregator::aggregate_lines(input.lines(), policy)
}

/// The two puzzle answers: the biggest group, and the combined size of the biggest `k`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Answers {
    pub max: u64,
    pub top_sum: u64,
}

impl Answers {
    pub fn from_groups(groups: &GroupSums, k: usize) -> Result<Answers> {
        // Check the bigger request first so the error names it.
        let top_sum = groups.top_sum(k)?;
        let max = groups.max()?;
        Ok(Answers { max, top_sum })
    }
}

impl std::fmt::Display for Answers {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(fmt, "Answer 1: {}", self.max)?;
        write!(fmt, "Answer 2: {}", self.top_sum)
    }
}
