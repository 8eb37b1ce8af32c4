//! Radix sort tracer (least significant digit first, base 10)
//!
//! Only defined over non-negative integers.  A pass runs for every decimal
//! position while `max / 10^position > 0`; each pass scatters the array into
//! ten buckets and gathers them back in bucket order 0 through 9.

use crate::snapshot::{Recorder, Trace, TraceEvent};
use serde::Serialize;

const BASE: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RadixEvent {
    Initial,
    DigitStart,
    PlaceInBucket,
    BucketsFilled,
    CollectFromBucket,
    DigitComplete,
    Complete,
}

impl TraceEvent for RadixEvent {
    fn is_terminal(self) -> bool {
        matches!(self, RadixEvent::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadixState {
    pub array: Vec<u64>,
    /// 1-based digit position of the current pass, 0 outside passes
    pub digit_position: u32,
    pub buckets: Vec<Vec<u64>>,
    /// Bucket being written to or drained
    pub current_digit: Option<u64>,
    pub current_value: Option<u64>,
    pub max_digits: u32,
}

fn empty_buckets() -> Vec<Vec<u64>> {
    vec![Vec::new(); BASE as usize]
}

/// Number of decimal digits needed to print `value`
pub fn digit_count(mut value: u64) -> u32 {
    let mut digits = 1;
    while value >= BASE {
        value /= BASE;
        digits += 1;
    }
    digits
}

pub fn trace(values: &[u64]) -> Trace<RadixEvent, RadixState> {
    let mut array = values.to_vec();
    let mut rec = Recorder::new("radix_sort");
    let max = array.iter().copied().max().unwrap_or(0);
    let max_digits = digit_count(max);

    let state = |array: &[u64], digit_position: u32, buckets: Vec<Vec<u64>>| RadixState {
        array: array.to_vec(),
        digit_position,
        buckets,
        current_digit: None,
        current_value: None,
        max_digits,
    };

    rec.record(
        RadixEvent::Initial,
        format!("Starting radix sort. Maximum number: {}", max),
        state(&array, 0, empty_buckets()),
    );

    let mut exp: u64 = 1;
    let mut position: u32 = 1;

    while max / exp > 0 {
        rec.record(
            RadixEvent::DigitStart,
            format!("Processing digit position {} (10^{})", position, position - 1),
            state(&array, position, empty_buckets()),
        );

        let mut buckets = empty_buckets();
        for &value in &array {
            let digit = (value / exp) % BASE;
            buckets[digit as usize].push(value);
            rec.record(
                RadixEvent::PlaceInBucket,
                format!(
                    "Placing {} in bucket {} (digit at position {} is {})",
                    value, digit, position, digit
                ),
                RadixState {
                    current_digit: Some(digit),
                    current_value: Some(value),
                    ..state(&array, position, buckets.clone())
                },
            );
        }

        rec.record(
            RadixEvent::BucketsFilled,
            format!(
                "All numbers placed in buckets by digit position {}",
                position
            ),
            state(&array, position, buckets.clone()),
        );

        let mut collected = Vec::with_capacity(array.len());
        for (digit, bucket) in buckets.iter().enumerate() {
            for &value in bucket {
                collected.push(value);
                rec.record(
                    RadixEvent::CollectFromBucket,
                    format!("Collecting {} from bucket {}", value, digit),
                    RadixState {
                        current_digit: Some(digit as u64),
                        current_value: Some(value),
                        ..state(&collected, position, buckets.clone())
                    },
                );
            }
        }
        array = collected;

        rec.record(
            RadixEvent::DigitComplete,
            format!("Digit position {} processing complete", position),
            state(&array, position, empty_buckets()),
        );

        // 10^20 overflows u64, and every digit of max has been consumed by then
        match exp.checked_mul(BASE) {
            Some(next) => exp = next,
            None => break,
        }
        position += 1;
    }

    rec.finish(
        RadixEvent::Complete,
        "Radix sort completed! Array is now sorted",
        state(&array, 0, empty_buckets()),
    )
}
