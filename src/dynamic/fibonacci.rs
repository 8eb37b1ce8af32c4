//! Fibonacci numbers, traced two ways
//!
//! `F(0) = 0`, `F(1) = F(2) = 1`.  Values are `u64`, so `F(93)` is the largest
//! that can be computed; anything past it fails with
//! [`TraceError::ArithmeticOverflow`] rather than wrapping.

use crate::error::TraceError;
use crate::snapshot::{Recorder, Trace, TraceEvent};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableEvent {
    Initialization,
    Calculating,
    Calculated,
    Completed,
}

impl TraceEvent for TableEvent {
    fn is_terminal(self) -> bool {
        matches!(self, TableEvent::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableState {
    pub n: u32,
    pub dp_table: BTreeMap<u32, u64>,
    pub current_calculation: Option<u32>,
    pub result: Option<u64>,
}

/// Bottom-up: seed the base cases, then fill `F(3)..=F(n)` in order
pub fn trace_table(n: u32) -> Result<Trace<TableEvent, TableState>, TraceError> {
    let mut rec = Recorder::new("fibonacci_table");
    let mut dp: BTreeMap<u32, u64> = BTreeMap::new();

    let state = |dp: &BTreeMap<u32, u64>, current: Option<u32>, result: Option<u64>| TableState {
        n,
        dp_table: dp.clone(),
        current_calculation: current,
        result,
    };

    let description = match n {
        0 => {
            dp.insert(0, 0);
            "Initializing base case: F(0) = 0".to_string()
        }
        1 => {
            dp.insert(1, 1);
            "Initializing base case: F(1) = 1".to_string()
        }
        _ => {
            dp.insert(1, 1);
            dp.insert(2, 1);
            "Initializing base cases: F(1) = 1, F(2) = 1".to_string()
        }
    };
    rec.record(TableEvent::Initialization, description, state(&dp, None, None));

    for i in 3..=n {
        rec.record(
            TableEvent::Calculating,
            format!("Calculating F({}) = F({}) + F({})", i, i - 1, i - 2),
            state(&dp, Some(i), None),
        );
        let a = dp[&(i - 1)];
        let b = dp[&(i - 2)];
        let value = a
            .checked_add(b)
            .ok_or_else(|| TraceError::ArithmeticOverflow {
                operation: format!("F({})", i),
            })?;
        dp.insert(i, value);
        rec.record(
            TableEvent::Calculated,
            format!("F({}) = {} + {} = {}", i, a, b, value),
            state(&dp, Some(i), Some(value)),
        );
    }

    let result = dp.get(&n).copied().unwrap_or_default();
    Ok(rec.finish(
        TableEvent::Completed,
        format!("Fibonacci calculation completed: F({}) = {}", n, result),
        state(&dp, None, Some(result)),
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoEvent {
    FunctionCall,
    BaseCase,
    Memoized,
    RecursiveCall,
    Computed,
    Completed,
}

impl TraceEvent for MemoEvent {
    fn is_terminal(self) -> bool {
        matches!(self, MemoEvent::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoState {
    pub n: u32,
    /// Argument of the call this snapshot belongs to
    pub call: u32,
    pub memo: BTreeMap<u32, u64>,
    pub depth: usize,
    pub result: Option<u64>,
}

struct Memo {
    n: u32,
    memo: BTreeMap<u32, u64>,
    rec: Recorder<MemoEvent, MemoState>,
}

impl Memo {
    fn record(
        &mut self,
        event: MemoEvent,
        call: u32,
        depth: usize,
        result: Option<u64>,
        message: String,
    ) {
        let state = MemoState {
            n: self.n,
            call,
            memo: self.memo.clone(),
            depth,
            result,
        };
        self.rec
            .record(event, format!("{}{}", "  ".repeat(depth), message), state);
    }

    fn fib(&mut self, k: u32, depth: usize) -> Result<u64, TraceError> {
        self.record(MemoEvent::FunctionCall, k, depth, None, format!("Calling F({})", k));

        if k == 0 {
            self.record(MemoEvent::BaseCase, k, depth, Some(0), "Base case: F(0) = 0".into());
            return Ok(0);
        }
        if k <= 2 {
            self.memo.insert(k, 1);
            self.record(
                MemoEvent::BaseCase,
                k,
                depth,
                Some(1),
                format!("Base case: F({}) = 1", k),
            );
            return Ok(1);
        }
        if let Some(&known) = self.memo.get(&k) {
            self.record(
                MemoEvent::Memoized,
                k,
                depth,
                Some(known),
                format!("Found in memo: F({}) = {}", k, known),
            );
            return Ok(known);
        }

        self.record(
            MemoEvent::RecursiveCall,
            k,
            depth,
            None,
            format!("Computing F({}) = F({}) + F({})", k, k - 1, k - 2),
        );
        let a = self.fib(k - 1, depth + 1)?;
        let b = self.fib(k - 2, depth + 1)?;
        let value = a
            .checked_add(b)
            .ok_or_else(|| TraceError::ArithmeticOverflow {
                operation: format!("F({})", k),
            })?;
        self.memo.insert(k, value);
        self.record(
            MemoEvent::Computed,
            k,
            depth,
            Some(value),
            format!("F({}) = {} + {} = {}", k, a, b, value),
        );
        Ok(value)
    }
}

/// Top-down recursion with a memo table; every call is a step
pub fn trace_memoized(n: u32) -> Result<Trace<MemoEvent, MemoState>, TraceError> {
    let mut memo = Memo {
        n,
        memo: BTreeMap::new(),
        rec: Recorder::new("fibonacci_memoized"),
    };
    let result = memo.fib(n, 0)?;

    let state = MemoState {
        n,
        call: n,
        memo: memo.memo,
        depth: 0,
        result: Some(result),
    };
    Ok(memo.rec.finish(
        MemoEvent::Completed,
        format!("Fibonacci calculation completed: F({}) = {}", n, result),
        state,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values() {
        let trace = trace_table(10).unwrap();
        assert_eq!(trace.last().state.result, Some(55));
        assert_eq!(trace.count(TableEvent::Calculated), 8);
    }

    #[test]
    fn test_table_small_n() {
        for (n, expected) in [(0, 0), (1, 1), (2, 1)] {
            let trace = trace_table(n).unwrap();
            assert_eq!(trace.len(), 2);
            assert_eq!(trace.last().state.result, Some(expected));
        }
    }

    #[test]
    fn test_table_overflow() {
        assert!(trace_table(93).is_ok());
        assert!(matches!(
            trace_table(94),
            Err(TraceError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn test_memo_hits() {
        let trace = trace_memoized(6).unwrap();
        assert_eq!(trace.last().state.result, Some(8));
        // F(6) recurses down the left spine; each right-hand F(k-2) for k > 4
        // is answered from the memo
        assert_eq!(trace.count(MemoEvent::Memoized), 2);
        assert_eq!(trace.count(MemoEvent::Computed), 4);
    }

    #[test]
    fn test_memo_depth_indents_description() {
        let trace = trace_memoized(3).unwrap();
        let deepest = trace.iter().max_by_key(|s| s.state.depth).unwrap();
        assert_eq!(deepest.state.depth, 1);
        assert!(deepest.description.starts_with("  "));
    }

    #[test]
    fn test_memo_zero() {
        let trace = trace_memoized(0).unwrap();
        let events: Vec<_> = trace.events().collect();
        assert_eq!(
            events,
            vec![MemoEvent::FunctionCall, MemoEvent::BaseCase, MemoEvent::Completed]
        );
    }
}
