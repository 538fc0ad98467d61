use crate::library::random::interface::RandomSource;
use std::sync::Mutex;

/// Replays `values` in order, wrapping around at the end.
pub struct RandomSourceFake {
    values: Vec<f32>,
    cursor: Mutex<usize>,
}

impl RandomSourceFake {
    pub fn new(values: Vec<f32>) -> Self {
        Self {
            values,
            cursor: Mutex::new(0),
        }
    }
}

impl RandomSource for RandomSourceFake {
    fn next_unit(&self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let mut cursor = match self.cursor.lock() {
            Ok(cursor) => cursor,
            Err(poisoned) => poisoned.into_inner(),
        };
        let value = self.values[*cursor % self.values.len()];
        *cursor += 1;
        value
    }
}
