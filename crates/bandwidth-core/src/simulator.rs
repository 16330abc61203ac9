//! Fake-data generator for the channel rates.
//!
//! Every tick redraws each channel independently from one uniform
//! distribution over `[min_rate, max_rate]`. The generator is owned by the
//! simulator and seeded once; by default from OS entropy, so runs differ.

use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::channel::{Channel, SimulationParams};
use crate::error::{Error, Result};

/// Owns the channels and the generator that drives them.
pub struct Simulator<R = StdRng> {
    channels: Vec<Channel>,
    dist: Uniform<f64>,
    rng: R,
    ticks: u64,
}

impl Simulator<StdRng> {
    /// Create a simulator seeded from the operating system.
    pub fn new(params: SimulationParams) -> Result<Self> {
        Self::with_rng(params, StdRng::from_os_rng())
    }
}

impl<R: Rng> Simulator<R> {
    /// Create a simulator driven by the given generator.
    ///
    /// Channels receive their first draw here, so a freshly built simulator
    /// already satisfies the rate bounds.
    pub fn with_rng(params: SimulationParams, mut rng: R) -> Result<Self> {
        let dist = Uniform::new_inclusive(params.min_rate(), params.max_rate())
            .map_err(|e| Error::InvalidParameters(e.to_string()))?;
        let channels = (0..params.channel_count())
            .map(|i| Channel::new(i, dist.sample(&mut rng)))
            .collect();

        log::debug!(
            "simulator: {} channels, rates in [{}, {}] B/s",
            params.channel_count(),
            params.min_rate(),
            params.max_rate()
        );

        Ok(Self {
            channels,
            dist,
            rng,
            ticks: 0,
        })
    }

    /// Redraw every channel's rate.
    pub fn tick(&mut self) {
        for channel in &mut self.channels {
            channel.set_rate(self.dist.sample(&mut self.rng));
        }
        self.ticks += 1;
    }

    /// Channels in creation (= display) order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Ordered snapshot of the current rates.
    pub fn rates(&self) -> Vec<f64> {
        self.channels.iter().map(Channel::rate).collect()
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_bounds(params: &SimulationParams, rate: f64) -> bool {
        (params.min_rate()..=params.max_rate()).contains(&rate)
    }

    fn seeded(params: SimulationParams) -> Simulator<StdRng> {
        Simulator::with_rng(params, StdRng::seed_from_u64(42)).unwrap()
    }

    #[test]
    fn creates_one_channel_per_count_in_order() {
        let sim = seeded(SimulationParams::default());
        let ids: Vec<&str> = sim.channels().iter().map(Channel::id).collect();
        assert_eq!(ids, ["Conn-1", "Conn-2", "Conn-3", "Conn-4", "Conn-5"]);
    }

    #[test]
    fn rates_stay_in_bounds_across_ticks() {
        let params = SimulationParams::default();
        let mut sim = seeded(params);
        for _ in 0..500 {
            sim.tick();
            for rate in sim.rates() {
                assert!(in_bounds(&params, rate), "rate {rate} escaped bounds");
            }
        }
    }

    #[test]
    fn initial_rates_already_in_bounds() {
        let params = SimulationParams::new(8, 10.0, 11.0).unwrap();
        let sim = seeded(params);
        assert_eq!(sim.ticks(), 0);
        assert!(sim.rates().iter().all(|&r| in_bounds(&params, r)));
    }

    #[test]
    fn tick_changes_rates_and_counts() {
        let mut sim = seeded(SimulationParams::default());
        let before = sim.rates();
        sim.tick();
        sim.tick();
        assert_eq!(sim.ticks(), 2);
        assert_ne!(before, sim.rates());
    }

    #[test]
    fn channels_draw_independently() {
        let mut sim = seeded(SimulationParams::new(16, 0.0, 1.0).unwrap());
        sim.tick();
        let rates = sim.rates();
        let first = rates[0];
        assert!(rates.iter().any(|&r| r != first));
    }

    #[test]
    fn same_seed_reproduces_sequence() {
        let mut a = seeded(SimulationParams::default());
        let mut b = seeded(SimulationParams::default());
        for _ in 0..10 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.rates(), b.rates());
    }

    #[test]
    fn os_seeded_simulator_builds() {
        let mut sim = Simulator::new(SimulationParams::default()).unwrap();
        sim.tick();
        assert_eq!(sim.channels().len(), 5);
    }
}
