//! Stack and queue operation tracers
//!
//! Both take an ordered list of operations and apply them to one structure
//! that persists across the whole list.  An operation on an empty structure
//! (`pop`, `peek`, `dequeue`, `front`) is recorded as an event and leaves the
//! structure untouched; it does not end the trace.
//!
//! Operations can be parsed from text, e.g. `"push 10"` or `"dequeue"`, and a
//! whole list from a comma-separated string with [`parse_ops`].

pub mod queue;
pub mod stack;

use crate::error::TraceError;
use std::str::FromStr;

/// Parse `"push 10, pop, peek"` into operations
///
/// Empty entries are skipped, so a trailing comma is harmless.
pub fn parse_ops<O>(input: &str) -> Result<Vec<O>, TraceError>
where
    O: FromStr<Err = TraceError>,
{
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

/// Split `"push 10"` into its lowercased verb and optional argument
pub(crate) fn split_op(input: &str) -> (String, Option<&str>) {
    let mut parts = input.trim().splitn(2, char::is_whitespace);
    let verb = parts.next().unwrap_or_default().to_ascii_lowercase();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());
    (verb, arg)
}

pub(crate) fn parse_arg<T: FromStr>(input: &str, arg: Option<&str>) -> Result<T, TraceError> {
    let arg = arg.ok_or_else(|| TraceError::InvalidOperation {
        input: input.to_string(),
        reason: "missing value".to_string(),
    })?;
    arg.parse().map_err(|_| TraceError::InvalidOperation {
        input: input.to_string(),
        reason: format!("'{}' is not a valid value", arg),
    })
}

pub(crate) fn reject_arg(input: &str, arg: Option<&str>) -> Result<(), TraceError> {
    match arg {
        None => Ok(()),
        Some(_) => Err(TraceError::InvalidOperation {
            input: input.to_string(),
            reason: "operation takes no value".to_string(),
        }),
    }
}

/// Position as reported in snapshots, `-1` when there is none
pub(crate) fn position(len: usize, index: usize) -> isize {
    if len == 0 {
        -1
    } else {
        index as isize
    }
}

#[cfg(test)]
mod tests {
    use super::stack::StackOp;
    use super::*;

    #[test]
    fn test_parse_list() {
        let ops: Vec<StackOp<i32>> = parse_ops("push 10, pop,PEEK,").unwrap();
        assert_eq!(ops, vec![StackOp::Push(10), StackOp::Pop, StackOp::Peek]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_ops::<StackOp<i32>>("push").is_err());
        assert!(parse_ops::<StackOp<i32>>("push x").is_err());
        assert!(parse_ops::<StackOp<i32>>("pop 3").is_err());
        assert!(parse_ops::<StackOp<i32>>("shove 3").is_err());
    }
}
