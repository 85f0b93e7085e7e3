//! `mockall` mocks of clatter traits.
//!
//! [`MockNoise`] is the expectation-based counterpart of the hand-written
//! [`MockNoiseSource`](clatter_noise::mock::MockNoiseSource): use it when a
//! test must assert the exact number of `sample()` calls and fail on any
//! unexpected one.  `apply` and `is_stateful` keep their trait defaults, so
//! `apply` goes through the mocked `sample`.

use clatter_noise::source::NoiseSource;
use mockall::mock;

mock! {
    pub Noise {}

    impl NoiseSource for Noise {
        fn intensity(&self) -> f64;
        fn sample(&self) -> f32;
    }
}

/// A [`MockNoise`] whose intensity is `0.0`, like every test double.
///
/// Callers add `sample()` expectations themselves.
pub fn zero_intensity_mock() -> MockNoise {
    let mut mock = MockNoise::new();
    mock.expect_intensity().return_const(0.0);
    mock
}

/// A [`MockNoise`] with intensity `0.0` that returns `value` exactly `times`
/// times.
pub fn returning_mock(value: f32, times: usize) -> MockNoise {
    let mut mock = zero_intensity_mock();
    mock.expect_sample().times(times).return_const(value);
    mock
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;

    #[test]
    fn zero_intensity_mock_reports_zero() {
        let mock = zero_intensity_mock();
        assert!(mock.intensity() == 0.0);
    }

    #[test]
    fn returning_mock_counts_calls() {
        let mut mock = returning_mock(2.5, 2);
        assert!(mock.sample() == 2.5);
        assert!(mock.apply(10.0) == 12.5);
        mock.checkpoint();
    }

    #[test]
    #[should_panic(expected = "No matching expectation found")]
    fn unexpected_sample_panics() {
        let mock = zero_intensity_mock();
        mock.sample();
    }

    #[test]
    fn sequenced_returns() {
        let mut mock = MockNoise::new();
        let mut seq = Sequence::new();
        for value in [0.1_f32, 0.2, 0.3] {
            mock.expect_sample()
                .times(1)
                .in_sequence(&mut seq)
                .return_const(value);
        }
        let got: Vec<f32> = (0..3).map(|_| mock.sample()).collect();
        assert_eq!(got, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn default_is_stateful_kept() {
        let mock = MockNoise::new();
        assert!(!mock.is_stateful());
    }
}
