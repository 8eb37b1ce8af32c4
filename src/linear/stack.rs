//! Stack (LIFO) operation tracer

use super::{parse_arg, position, reject_arg, split_op};
use crate::error::TraceError;
use crate::snapshot::{Element, Recorder, Trace, TraceEvent};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "op", content = "value")]
pub enum StackOp<T> {
    Push(T),
    Pop,
    Peek,
}

impl<T: FromStr> FromStr for StackOp<T> {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, arg) = split_op(s);
        match verb.as_str() {
            "push" => Ok(StackOp::Push(parse_arg(s, arg)?)),
            "pop" => reject_arg(s, arg).map(|_| StackOp::Pop),
            "peek" | "top" => reject_arg(s, arg).map(|_| StackOp::Peek),
            _ => Err(TraceError::InvalidOperation {
                input: s.to_string(),
                reason: "expected push, pop or peek".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StackEvent {
    Initial,
    PushStart,
    PushComplete,
    PopStart,
    PopComplete,
    Peek,
    PeekEmpty,
    Underflow,
    Complete,
}

impl TraceEvent for StackEvent {
    fn is_terminal(self) -> bool {
        matches!(self, StackEvent::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackState<T> {
    /// Bottom to top
    pub stack: Vec<T>,
    pub value: Option<T>,
    pub top: isize,
    pub size: usize,
}

pub fn trace<T: Element>(ops: &[StackOp<T>]) -> Trace<StackEvent, StackState<T>> {
    let mut rec = Recorder::new("stack");
    let mut stack: Vec<T> = Vec::new();

    let state = |stack: &[T], value: Option<&T>| StackState {
        stack: stack.to_vec(),
        value: value.cloned(),
        top: position(stack.len(), stack.len().saturating_sub(1)),
        size: stack.len(),
    };

    rec.record(
        StackEvent::Initial,
        "Empty stack - LIFO (Last In, First Out) data structure",
        state(&stack, None),
    );

    for op in ops {
        match op {
            StackOp::Push(value) => {
                rec.record(
                    StackEvent::PushStart,
                    format!("Pushing {} onto stack", value),
                    state(&stack, Some(value)),
                );
                stack.push(value.clone());
                rec.record(
                    StackEvent::PushComplete,
                    format!("{} pushed successfully. New top: {}", value, value),
                    state(&stack, Some(value)),
                );
            }
            StackOp::Pop => {
                let Some(top) = stack.last().cloned() else {
                    rec.record(
                        StackEvent::Underflow,
                        "Cannot pop from empty stack (Stack Underflow)",
                        state(&stack, None),
                    );
                    continue;
                };
                rec.record(
                    StackEvent::PopStart,
                    format!("Popping top element {} from stack", top),
                    state(&stack, Some(&top)),
                );
                stack.pop();
                let new_top = stack
                    .last()
                    .map_or_else(|| "None".to_string(), ToString::to_string);
                rec.record(
                    StackEvent::PopComplete,
                    format!("{} popped successfully. New top: {}", top, new_top),
                    state(&stack, Some(&top)),
                );
            }
            StackOp::Peek => match stack.last() {
                Some(top) => rec.record(
                    StackEvent::Peek,
                    format!("Top element is {} (peek operation)", top),
                    state(&stack, Some(top)),
                ),
                None => rec.record(
                    StackEvent::PeekEmpty,
                    "Cannot peek empty stack",
                    state(&stack, None),
                ),
            },
        }
    }

    rec.finish(
        StackEvent::Complete,
        format!("Processed {} operations; stack size {}", ops.len(), stack.len()),
        state(&stack, None),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let trace = trace(&[StackOp::Push(1), StackOp::Push(2), StackOp::Pop]);
        let popped: Vec<_> = trace
            .iter()
            .filter(|s| s.event == StackEvent::PopComplete)
            .map(|s| s.state.value)
            .collect();
        assert_eq!(popped, vec![Some(2)]);
        assert_eq!(trace.last().state.stack, vec![1]);
        assert_eq!(trace.last().state.top, 0);
    }

    #[test]
    fn test_empty_structure_events_do_not_mutate() {
        let trace = trace::<i32>(&[StackOp::Peek, StackOp::Pop]);
        let events: Vec<_> = trace.events().collect();
        assert_eq!(
            events,
            vec![
                StackEvent::Initial,
                StackEvent::PeekEmpty,
                StackEvent::Underflow,
                StackEvent::Complete
            ]
        );
        assert!(trace.iter().all(|s| s.state.size == 0 && s.state.top == -1));
    }

    #[test]
    fn test_no_operations() {
        let trace = trace::<i32>(&[]);
        assert_eq!(trace.len(), 2);
    }
}
