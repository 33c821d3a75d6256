//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Integer arithmetic progressions

/// Lazy arithmetic progression from `start` (inclusive) to `stop` (exclusive)
#[derive(PartialEq, Clone, Debug)]
pub struct StepRange {
    next: i64,
    step: i64,
    remaining: u64,
}

/// Range with step `1`, or `-1` when `stop < start`
pub fn range(start: i64, stop: i64) -> StepRange {
    range_step(start, stop, 0)
}

/// Range with explicit step. A step of `0` picks the direction like [`range`].
pub fn range_step(start: i64, stop: i64, step: i64) -> StepRange {
    let step = if step != 0 {
        step
    } else if stop < start {
        -1
    } else {
        1
    };
    // ceil((stop - start) / step), at least 0
    let span = stop as i128 - start as i128;
    let step_wide = step as i128;
    let mut count = span / step_wide;
    if span % step_wide != 0 && (span < 0) == (step_wide < 0) {
        count += 1;
    }
    StepRange {
        next: start,
        step,
        remaining: count.max(0) as u64,
    }
}

impl StepRange {
    /// Number of remaining values
    pub fn count_values(&self) -> u64 {
        self.remaining
    }
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
    /// First remaining value
    pub fn first(&self) -> Option<i64> {
        if self.remaining > 0 {
            Some(self.next)
        } else {
            None
        }
    }
}

impl Iterator for StepRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += self.step;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining <= usize::MAX as u64 {
            (self.remaining as usize, Some(self.remaining as usize))
        } else {
            (usize::MAX, None)
        }
    }
}

#[test]
fn test_range() {
    assert_eq!(range(0, 3).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(range(3, 6).collect::<Vec<_>>(), vec![3, 4, 5]);
    assert_eq!(range(3, 0).collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(range_step(6, 3, -1).collect::<Vec<_>>(), vec![6, 5, 4]);
    assert_eq!(range_step(0, 10, 3).collect::<Vec<_>>(), vec![0, 3, 6, 9]);
    assert_eq!(range_step(0, 3, -1).count(), 0);
    assert!(range(5, 5).is_empty());
}

#[test]
fn test_range_lazy() {
    let mut r = range(0, 1 << 40);
    assert_eq!(r.count_values(), 1 << 40);
    assert_eq!(r.first(), Some(0));
    assert_eq!(r.next(), Some(0));
    assert_eq!(r.next(), Some(1));
    assert_eq!(r.count_values(), (1 << 40) - 2);
}
