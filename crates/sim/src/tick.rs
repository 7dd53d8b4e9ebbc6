/// Fixed-timestep accumulator. Wall-clock time goes in, a whole number of simulation
/// steps comes out. Backlog beyond `max_substeps` is dropped so a long stall does not
/// replay seconds of simulation in one display frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TickDriver {
    step: f64,
    max_substeps: u32,
    accumulator: f64,
    total_ticks: u64,
}

// Absorbs float error so 1/60 s added sixty times yields sixty steps.
const EPSILON: f64 = 1.0e-9;

impl TickDriver {
    pub fn new(hz: f32, max_substeps: u32) -> Self {
        let hz = if hz.is_finite() && hz > 0.0 { hz as f64 } else { 60.0 };
        Self {
            step: 1.0 / hz,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
            total_ticks: 0,
        }
    }

    /// Add `elapsed_secs` and return how many steps to run now.
    pub fn advance(&mut self, elapsed_secs: f64) -> u32 {
        if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            self.accumulator += elapsed_secs;
        }
        let mut steps = 0;
        while self.accumulator + EPSILON >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_substeps && self.accumulator + EPSILON >= self.step {
            self.accumulator = 0.0;
        }
        self.accumulator = self.accumulator.max(0.0);
        self.total_ticks += steps as u64;
        steps
    }

    pub fn step_secs(&self) -> f64 {
        self.step
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Simulated time covered by the steps handed out so far.
    pub fn elapsed_secs(&self) -> f64 {
        self.total_ticks as f64 * self.step
    }
}
