/// Energy of the folding system recorded once per simulation step.
///
/// Index `i` holds the energy after step `i`. Plateaus (repeated values) are expected
/// while the annealing schedule rejects moves, and an empty trajectory is a valid,
/// if degenerate, input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyTrajectory {
    values: Vec<f64>,
}

/// Convergence indicators derived from a non-empty [`EnergyTrajectory`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySummary {
    pub steps: usize,
    pub initial: f64,
    pub final_energy: f64,
    pub minimum: f64,
    /// First step at which `minimum` was reached.
    pub minimum_step: usize,
}

impl EnergyTrajectory {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Yields `(step, energy)` pairs in step order.
    pub fn steps(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values.iter().copied().enumerate()
    }

    pub fn summary(&self) -> Option<EnergySummary> {
        let (&initial, &final_energy) = (self.values.first()?, self.values.last()?);
        let (minimum_step, minimum) = self.steps().fold((0, initial), |best, (step, e)| {
            if e < best.1 { (step, e) } else { best }
        });

        Some(EnergySummary {
            steps: self.values.len(),
            initial,
            final_energy,
            minimum,
            minimum_step,
        })
    }
}

impl From<Vec<f64>> for EnergyTrajectory {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_enumerated_in_insertion_order() {
        let trajectory = EnergyTrajectory::new(vec![-10.0, -12.5, -12.5, -15.0]);
        let steps: Vec<_> = trajectory.steps().collect();
        assert_eq!(steps, vec![(0, -10.0), (1, -12.5), (2, -12.5), (3, -15.0)]);
    }

    #[test]
    fn summary_of_empty_trajectory_is_none() {
        assert!(EnergyTrajectory::default().summary().is_none());
    }

    #[test]
    fn summary_reports_first_step_reaching_the_minimum() {
        let trajectory = EnergyTrajectory::new(vec![0.0, -3.0, -5.0, -5.0, -4.0]);
        let summary = trajectory.summary().unwrap();

        assert_eq!(summary.steps, 5);
        assert_eq!(summary.initial, 0.0);
        assert_eq!(summary.final_energy, -4.0);
        assert_eq!(summary.minimum, -5.0);
        assert_eq!(summary.minimum_step, 2);
    }

    #[test]
    fn summary_of_single_step_uses_that_step_everywhere() {
        let summary = EnergyTrajectory::new(vec![-7.0]).summary().unwrap();
        assert_eq!(summary.steps, 1);
        assert_eq!(summary.initial, -7.0);
        assert_eq!(summary.final_energy, -7.0);
        assert_eq!(summary.minimum_step, 0);
    }
}
