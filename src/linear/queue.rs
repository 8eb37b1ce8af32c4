//! Queue (FIFO) operation tracer

use super::{parse_arg, position, reject_arg, split_op};
use crate::error::TraceError;
use crate::snapshot::{Element, Recorder, Trace, TraceEvent};
use serde::Serialize;
use std::collections::VecDeque;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "op", content = "value")]
pub enum QueueOp<T> {
    Enqueue(T),
    Dequeue,
    Front,
}

impl<T: FromStr> FromStr for QueueOp<T> {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, arg) = split_op(s);
        match verb.as_str() {
            "enqueue" => Ok(QueueOp::Enqueue(parse_arg(s, arg)?)),
            "dequeue" => reject_arg(s, arg).map(|_| QueueOp::Dequeue),
            "front" | "peek" => reject_arg(s, arg).map(|_| QueueOp::Front),
            _ => Err(TraceError::InvalidOperation {
                input: s.to_string(),
                reason: "expected enqueue, dequeue or front".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueEvent {
    Initial,
    EnqueueStart,
    EnqueueComplete,
    DequeueStart,
    DequeueComplete,
    Front,
    FrontEmpty,
    Underflow,
    Complete,
}

impl TraceEvent for QueueEvent {
    fn is_terminal(self) -> bool {
        matches!(self, QueueEvent::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueState<T> {
    /// Front to rear
    pub queue: Vec<T>,
    pub value: Option<T>,
    pub front: isize,
    pub rear: isize,
    pub size: usize,
}

pub fn trace<T: Element>(ops: &[QueueOp<T>]) -> Trace<QueueEvent, QueueState<T>> {
    let mut rec = Recorder::new("queue");
    let mut queue: VecDeque<T> = VecDeque::new();

    let state = |queue: &VecDeque<T>, value: Option<&T>| QueueState {
        queue: queue.iter().cloned().collect(),
        value: value.cloned(),
        front: position(queue.len(), 0),
        rear: position(queue.len(), queue.len().saturating_sub(1)),
        size: queue.len(),
    };

    rec.record(
        QueueEvent::Initial,
        "Empty queue - FIFO (First In, First Out) data structure",
        state(&queue, None),
    );

    for op in ops {
        match op {
            QueueOp::Enqueue(value) => {
                rec.record(
                    QueueEvent::EnqueueStart,
                    format!("Enqueuing {} to rear of queue", value),
                    state(&queue, Some(value)),
                );
                queue.push_back(value.clone());
                rec.record(
                    QueueEvent::EnqueueComplete,
                    format!("{} enqueued successfully. New rear: {}", value, value),
                    state(&queue, Some(value)),
                );
            }
            QueueOp::Dequeue => {
                let Some(front) = queue.front().cloned() else {
                    rec.record(
                        QueueEvent::Underflow,
                        "Cannot dequeue from empty queue (Queue Underflow)",
                        state(&queue, None),
                    );
                    continue;
                };
                rec.record(
                    QueueEvent::DequeueStart,
                    format!("Dequeuing front element {} from queue", front),
                    state(&queue, Some(&front)),
                );
                queue.pop_front();
                let new_front = queue
                    .front()
                    .map_or_else(|| "None".to_string(), ToString::to_string);
                rec.record(
                    QueueEvent::DequeueComplete,
                    format!("{} dequeued successfully. New front: {}", front, new_front),
                    state(&queue, Some(&front)),
                );
            }
            QueueOp::Front => match queue.front() {
                Some(front) => rec.record(
                    QueueEvent::Front,
                    format!("Front element is {}", front),
                    state(&queue, Some(front)),
                ),
                None => rec.record(
                    QueueEvent::FrontEmpty,
                    "Cannot get front of empty queue",
                    state(&queue, None),
                ),
            },
        }
    }

    rec.finish(
        QueueEvent::Complete,
        format!("Processed {} operations; queue size {}", ops.len(), queue.len()),
        state(&queue, None),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let ops = [
            QueueOp::Enqueue(1),
            QueueOp::Enqueue(2),
            QueueOp::Dequeue,
            QueueOp::Front,
        ];
        let trace = trace(&ops);
        let front = trace
            .iter()
            .find(|s| s.event == QueueEvent::Front)
            .and_then(|s| s.state.value);
        assert_eq!(front, Some(2));
        let last = &trace.last().state;
        assert_eq!(last.queue, vec![2]);
        assert_eq!((last.front, last.rear), (0, 0));
    }

    #[test]
    fn test_dequeue_empty_is_underflow() {
        let trace = trace::<i32>(&[QueueOp::Dequeue, QueueOp::Front]);
        assert_eq!(trace.count(QueueEvent::Underflow), 1);
        assert_eq!(trace.count(QueueEvent::FrontEmpty), 1);
        assert_eq!(trace.last().state.rear, -1);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Enqueue 7".parse::<QueueOp<i32>>(), Ok(QueueOp::Enqueue(7)));
        assert_eq!("front".parse::<QueueOp<i32>>(), Ok(QueueOp::Front));
    }
}
