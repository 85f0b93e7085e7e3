//! Hand-written test double for [`NoiseSource`].
//!
//! [`MockNoiseSource`] stands in for a real strategy wherever a consumer's
//! output must be exact: its intensity is always `0.0` and every sample is
//! scripted by the test.  It counts calls so tests can assert how often the
//! consumer sampled.
//!
//! ```
//! use clatter_noise::prelude::*;
//!
//! let noise = MockNoiseSource::returning(2.5);
//! assert_eq!(noise.apply(10.0), 12.5);
//! assert_eq!(noise.call_count(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::source::NoiseSource;

/// Scripted noise source with a fixed intensity of `0.0`.
///
/// Samples come from, in order:
/// 1. the queued script ([`with_sequence`](Self::with_sequence),
///    [`push`](Self::push)), one value per call, nothing skipped;
/// 2. the repeat value ([`returning`](Self::returning),
///    [`then_repeat`](Self::then_repeat)) once the script is empty;
/// 3. `0.0`, logged as a warning, when neither is left.
#[derive(Debug, Clone, Default)]
pub struct MockNoiseSource {
    script: RefCell<VecDeque<f32>>,
    repeat: Option<f32>,
    calls: Cell<usize>,
}

impl MockNoiseSource {
    /// Intensity reported by every mock.
    pub const INTENSITY: f64 = 0.0;

    /// A mock with nothing scripted; every call returns `0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock returning `value` on every call.
    pub fn returning(value: f32) -> Self {
        Self::new().then_repeat(value)
    }

    /// A mock returning `values` in call order.
    pub fn with_sequence(values: impl IntoIterator<Item = f32>) -> Self {
        Self {
            script: RefCell::new(values.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Value returned once the script runs out.
    #[must_use]
    pub fn then_repeat(mut self, value: f32) -> Self {
        self.repeat = Some(value);
        self
    }

    /// Queue one more scripted value.
    pub fn push(&self, value: f32) {
        self.script.borrow_mut().push_back(value);
    }

    /// Number of `sample()` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }

    /// Scripted values not yet returned.
    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }

    /// `true` when the next call would fall back to `0.0`.
    pub fn is_exhausted(&self) -> bool {
        self.repeat.is_none() && self.script.borrow().is_empty()
    }
}

impl NoiseSource for MockNoiseSource {
    fn intensity(&self) -> f64 {
        Self::INTENSITY
    }

    fn sample(&self) -> f32 {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if let Some(value) = self.script.borrow_mut().pop_front() {
            return value;
        }
        self.repeat.unwrap_or_else(|| {
            tracing::warn!(call, "mock noise source sampled with nothing scripted; returning 0.0");
            0.0
        })
    }

    fn is_stateful(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_is_always_zero() {
        assert!(MockNoiseSource::new().intensity() == 0.0);
        assert!(MockNoiseSource::returning(7.0).intensity() == 0.0);
        assert!(MockNoiseSource::with_sequence([1.0]).intensity() == 0.0);
    }

    #[test]
    fn sequence_returned_in_call_order() {
        let values = [0.1, -0.2, 0.3, 4.0, -5.5];
        let noise = MockNoiseSource::with_sequence(values);
        for (n, expected) in values.iter().enumerate() {
            assert_eq!(noise.call_count(), n);
            assert!((noise.sample() - expected).abs() < f32::EPSILON);
        }
        assert_eq!(noise.call_count(), values.len());
        assert_eq!(noise.remaining(), 0);
    }

    #[test]
    fn constant_value_repeats() {
        let noise = MockNoiseSource::returning(2.5);
        for _ in 0..10 {
            assert!((noise.sample() - 2.5).abs() < f32::EPSILON);
        }
        assert_eq!(noise.call_count(), 10);
        assert!(!noise.is_exhausted());
    }

    #[test]
    fn composes_exactly_with_clean_signal() {
        let noise = MockNoiseSource::returning(2.5);
        assert!(noise.apply(10.0) == 12.5);
    }

    #[test]
    fn exhausted_sequence_falls_back_to_zero() {
        let noise = MockNoiseSource::with_sequence([1.0]);
        assert!(!noise.is_exhausted());
        assert!((noise.sample() - 1.0).abs() < f32::EPSILON);
        assert!(noise.is_exhausted());
        assert!(noise.sample() == 0.0);
        assert!(noise.sample() == 0.0);
        assert_eq!(noise.call_count(), 3);
    }

    #[test]
    fn sequence_then_repeat() {
        let noise = MockNoiseSource::with_sequence([1.0, 2.0]).then_repeat(9.0);
        let got: Vec<f32> = (0..4).map(|_| noise.sample()).collect();
        assert_eq!(got, vec![1.0, 2.0, 9.0, 9.0]);
    }

    #[test]
    fn push_through_shared_reference() {
        let noise = MockNoiseSource::new();
        let shared = &noise;
        shared.push(0.75);
        shared.push(-0.75);
        assert_eq!(noise.remaining(), 2);
        assert!((noise.sample() - 0.75).abs() < f32::EPSILON);
        assert!((noise.sample() + 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn unscripted_mock_returns_zero() {
        let noise = MockNoiseSource::new();
        assert!(noise.is_exhausted());
        assert!(noise.sample() == 0.0);
        assert_eq!(noise.call_count(), 1);
    }

    fn assert_send<T: Send>() {}

    #[test]
    fn mock_noise_source_is_send() {
        assert_send::<MockNoiseSource>();
    }
}
