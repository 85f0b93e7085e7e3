//! Additive composition of noise sources.

use std::fmt;

use crate::source::{BoxedNoise, NoiseSource, finite_or_zero};

/// Additive chain: samples each member once and sums the results.
///
/// The chain's intensity is the sum of its members' intensities, computed
/// once at construction.  An empty chain behaves like
/// [`ZeroNoise`](crate::zero::ZeroNoise).
pub struct ChainNoise {
    intensity: f64,
    members: Vec<BoxedNoise>,
}

impl ChainNoise {
    pub fn new(members: Vec<BoxedNoise>) -> Self {
        let intensity: f64 = members.iter().map(|m| m.intensity()).sum();
        tracing::debug!(intensity, members = members.len(), "chain noise source");
        Self { intensity, members }
    }

    pub fn members(&self) -> &[BoxedNoise] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl NoiseSource for ChainNoise {
    fn intensity(&self) -> f64 {
        self.intensity
    }

    fn sample(&self) -> f32 {
        let total: f64 = self
            .members
            .iter()
            .map(|m| f64::from(m.sample()))
            .sum();
        finite_or_zero(total)
    }

    fn is_stateful(&self) -> bool {
        self.members.iter().any(|m| m.is_stateful())
    }

    fn reset(&self) {
        for member in &self.members {
            member.reset();
        }
    }
}

impl fmt::Debug for ChainNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainNoise")
            .field("intensity", &self.intensity)
            .field("members", &self.members.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bias::BiasNoise;
    use crate::gaussian::GaussianNoise;
    use crate::mock::MockNoiseSource;
    use crate::zero::ZeroNoise;

    #[test]
    fn chain_sums_members() {
        let chain = ChainNoise::new(vec![
            Box::new(MockNoiseSource::returning(1.0)),
            Box::new(MockNoiseSource::returning(2.0)),
        ]);
        assert!((chain.sample() - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn each_member_sampled_once_per_draw() {
        let chain = ChainNoise::new(vec![
            Box::new(MockNoiseSource::with_sequence([0.5, 0.25])),
            Box::new(MockNoiseSource::with_sequence([1.0, 2.0])),
        ]);
        assert!((chain.sample() - 1.5).abs() < f32::EPSILON);
        assert!((chain.sample() - 2.25).abs() < f32::EPSILON);
    }

    #[test]
    fn intensity_is_sum_of_members() {
        let chain = ChainNoise::new(vec![
            Box::new(GaussianNoise::seeded(0.1, 1)),
            Box::new(BiasNoise::seeded(0.4, 2)),
        ]);
        assert!((chain.intensity() - 0.5).abs() < 1e-12);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn empty_chain_is_silent() {
        let chain = ChainNoise::new(Vec::new());
        assert!(chain.is_empty());
        assert!(chain.sample() == 0.0);
        assert!(chain.intensity() == 0.0);
        assert!(!chain.is_stateful());
    }

    #[test]
    fn stateful_if_any_member_stateful() {
        let stateful = ChainNoise::new(vec![
            Box::new(ZeroNoise::new(0.0)),
            Box::new(GaussianNoise::seeded(1.0, 3)),
        ]);
        assert!(stateful.is_stateful());

        let stateless = ChainNoise::new(vec![Box::new(ZeroNoise::new(0.0))]);
        assert!(!stateless.is_stateful());
    }

    #[test]
    fn reset_redraws_member_bias() {
        let chain = ChainNoise::new(vec![
            Box::new(ZeroNoise::new(0.0)),
            Box::new(BiasNoise::seeded(10.0, 4)),
        ]);
        let before = chain.sample();
        assert!((chain.sample() - before).abs() < f32::EPSILON);
        chain.reset();
        let after = chain.sample();
        assert!((after - before).abs() > f32::EPSILON);
        assert!((chain.sample() - after).abs() < f32::EPSILON);
    }

    #[test]
    fn overflowing_sum_maps_to_zero() {
        let chain = ChainNoise::new(vec![
            Box::new(MockNoiseSource::returning(f32::MAX)),
            Box::new(MockNoiseSource::returning(f32::MAX)),
        ]);
        assert!(chain.sample() == 0.0);
    }

    #[test]
    fn debug_reports_member_count() {
        let chain = ChainNoise::new(vec![Box::new(ZeroNoise::new(0.0))]);
        assert_eq!(
            format!("{chain:?}"),
            "ChainNoise { intensity: 0.0, members: 1 }"
        );
    }

    fn assert_send<T: Send>() {}

    #[test]
    fn chain_noise_is_send() {
        assert_send::<ChainNoise>();
    }
}
