//! Line-oriented queries: `N`, `N M1 M2 ...` or `0 M`.

use crate::drive::{DriveStats, Strategy};
use crate::error::{Error, Result};
use crate::length::LengthPrinter;
use crate::picker::Picker;
use crate::printer::Printer;
use std::io::Write;
use std::str::FromStr;

/// Usage banner printed before reading a query.
pub const USAGE: &str = "\
Input: N [M1 M2 ...]
  N            print the N'th look-and-say term
  N M1 M2 ...  print the digits at 1-based positions M1, M2, ... of term N
  0 M          print the length of term M";

/// What to compute, and which sink reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Print the whole term.
    Full(usize),
    /// Print the digits at the given 1-based positions of term `n`.
    Pick { n: usize, positions: Vec<u64> },
    /// Print only the length of the term.
    Length(usize),
}

impl Query {
    /// Parses `N`, `N M1 M2 ...` or `0 M`.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let n: usize = match tokens.next() {
            Some(token) => parse_number(token)?,
            None => return Err(Error::Query("empty input".into())),
        };
        let rest: Vec<u64> = tokens.map(parse_number::<u64>).collect::<Result<_>>()?;

        if n == 0 {
            return match rest.as_slice() {
                [m] => usize::try_from(*m)
                    .map(Query::Length)
                    .map_err(|_| Error::Query(format!("term {m} is out of range"))),
                _ => Err(Error::Query(
                    "length mode takes exactly one term: `0 M`".into(),
                )),
            };
        }

        if rest.is_empty() {
            Ok(Query::Full(n))
        } else {
            Ok(Query::Pick { n, positions: rest })
        }
    }

    /// The term whose pipeline answers this query.
    pub fn term(&self) -> usize {
        match self {
            Query::Full(n) | Query::Pick { n, .. } | Query::Length(n) => *n,
        }
    }

    /// Runs the query with `strategy`, writing the sink's report to `out`.
    pub fn execute<W: Write>(&self, strategy: Strategy, out: W) -> Result<(W, DriveStats)> {
        match self {
            Query::Full(n) => {
                let (sink, stats) = strategy.execute(*n, Printer::new(out))?;
                Ok((sink.into_inner(), stats))
            }
            Query::Pick { n, positions } => {
                let picker = Picker::new(out, positions.iter().copied())?;
                let (sink, stats) = strategy.execute(*n, picker)?;
                Ok((sink.into_inner(), stats))
            }
            Query::Length(n) => {
                let (sink, stats) = strategy.execute(*n, LengthPrinter::new(out))?;
                Ok((sink.into_inner(), stats))
            }
        }
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Query::parse(s)
    }
}

fn parse_number<T: FromStr>(token: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| Error::Query(format!("expected a non-negative integer, found {token:?}")))
}
