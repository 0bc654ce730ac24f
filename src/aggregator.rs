use std::cmp::Reverse;

use itertools::Itertools;
use log::{debug, info, trace, warn};

use crate::error::{Error, Result};
use crate::parser::{parse_line, Line};

/// What to do with a non-empty line that isn't a number.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum ParsePolicy {
    #[default]
    Strict,
    /// Skip the line with a warning. It doesn't contribute to any group.
    Lenient,
}

/// Sums runs of numeric lines, starting a new group at every blank line.
///
/// Feed it lines with [`ingest`](Self::ingest), then call
/// [`finalize`](Self::finalize) to close the last group and get the sums back.
#[derive(Debug, Default)]
pub struct GroupedTopKAggregator {
    policy: ParsePolicy,
    sums: Vec<u64>,
    acc: u64,
    // Set once a number has been added to `acc` since the last separator. Keeps a trailing blank
    // line from producing an extra empty group at the end.
    open: bool,
    line: usize,
}

impl GroupedTopKAggregator {
    pub fn new(policy: ParsePolicy) -> Self {
        GroupedTopKAggregator {
            policy,
            ..Default::default()
        }
    }

    pub fn ingest(&mut self, line: &str) -> Result<()> {
        self.line += 1;

        match parse_line(line) {
            Ok(Line::Separator) => self.close(),
            Ok(Line::Number(n)) => {
                trace!("line {}: {}", self.line, n);
                self.acc = self
                    .acc
                    .checked_add(n)
                    .ok_or(Error::SumOverflow { line: self.line })?;
                self.open = true;
            }
            Err(_) => match self.policy {
                ParsePolicy::Strict => {
                    return Err(Error::MalformedLine {
                        line: self.line,
                        content: line.to_owned(),
                    })
                }
                ParsePolicy::Lenient => {
                    warn!("skipping line {}: {:?} is not a number", self.line, line)
                }
            },
        }

        Ok(())
    }

    fn close(&mut self) {
        debug!("group {} closed with sum {}", self.sums.len() + 1, self.acc);
        self.sums.push(self.acc);
        self.acc = 0;
        self.open = false;
    }

    /// Number of lines ingested so far.
    pub fn lines_seen(&self) -> usize {
        self.line
    }

    pub fn finalize(mut self) -> GroupSums {
        if self.open {
            self.close();
        }

        let sums = GroupSums { sums: self.sums };
        info!("{} groups over {} lines", sums.len(), self.line);
        sums
    }

    /// Runs a whole line stream through a fresh aggregator.
    pub fn aggregate_lines<I, S>(lines: I, policy: ParsePolicy) -> Result<GroupSums>
    where
        I: IntoIterator<Item = std::io::Result<S>>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .try_fold(Self::new(policy), |mut agg, item| {
                let s = item.map_err(|source| Error::Io {
                    line: agg.lines_seen() + 1,
                    source,
                })?;
                agg.ingest(s.as_ref())?;
                Ok(agg)
            })
            .map(Self::finalize)
    }

    pub fn aggregate_str(input: &str, policy: ParsePolicy) -> Result<GroupSums> {
        Self::aggregate_lines(input.lines().map(Ok), policy)
    }
}

/// Finished group sums, in input order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct GroupSums {
    sums: Vec<u64>,
}

impl GroupSums {
    pub fn as_slice(&self) -> &[u64] {
        &self.sums
    }

    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    /// The `k` largest sums, largest first. Equal sums are all kept.
    pub fn top_k(&self, k: usize) -> Result<Vec<u64>> {
        if k > self.sums.len() {
            return Err(Error::InsufficientGroups {
                requested: k,
                available: self.sums.len(),
            });
        }

        Ok(self
            .sums
            .iter()
            .copied()
            .map(Reverse)
            .k_smallest(k)
            .map(|Reverse(n)| n)
            .collect())
    }

    pub fn max(&self) -> Result<u64> {
        self.top_k(1).map(|v| v[0])
    }

    pub fn top_sum(&self, k: usize) -> Result<u64> {
        let top = self.top_k(k)?;
        top.into_iter()
            .try_fold(0u64, u64::checked_add)
            .ok_or(Error::TopSumOverflow { k })
    }
}

impl From<Vec<u64>> for GroupSums {
    fn from(sums: Vec<u64>) -> GroupSums {
        GroupSums { sums }
    }
}
