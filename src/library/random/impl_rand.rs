use crate::library::random::interface::RandomSource;
use rand::distr::{Distribution, Uniform};

pub struct RandomSourceRand {
    unit: Uniform<f32>,
}

impl RandomSourceRand {
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let unit = Uniform::new(0.0, 1.0)?;
        Ok(Self { unit })
    }
}

impl RandomSource for RandomSourceRand {
    fn next_unit(&self) -> f32 {
        self.unit.sample(&mut rand::rng())
    }
}
