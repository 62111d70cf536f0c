//! Q-table implementation for temporal difference learning

use std::collections::HashMap;

use crate::{
    grid::{Action, GridEnvironment},
    types::{Coordinate, DiscountFactor, LearningRate},
};

/// Q-table mapping (state, action) pairs to Q-values.
///
/// States are grid coordinates; every coordinate in the environment's
/// domain gets a zeroed entry per action at construction. Entries are
/// updated in place and never removed.
///
/// Looking up a coordinate outside the domain is a contract violation and
/// panics: the agent's position is always a domain coordinate, so an
/// unknown state means a caller bug, not a recoverable condition.
#[derive(Debug, Clone)]
pub struct QTable {
    q_values: HashMap<Coordinate, [f64; Action::COUNT]>,
    /// Learning rate α
    learning_rate: LearningRate,
    /// Discount factor γ
    discount_factor: DiscountFactor,
}

impl QTable {
    /// Create a Q-table with one zeroed entry per (state, action) pair in
    /// the environment's grid domain.
    pub fn new(
        environment: &GridEnvironment,
        learning_rate: LearningRate,
        discount_factor: DiscountFactor,
    ) -> Self {
        let q_values = environment
            .states()
            .map(|state| (state, [0.0; Action::COUNT]))
            .collect();
        Self {
            q_values,
            learning_rate,
            discount_factor,
        }
    }

    fn entries(&self, state: Coordinate) -> &[f64; Action::COUNT] {
        self.q_values
            .get(&state)
            .unwrap_or_else(|| panic!("no action values for state {state}"))
    }

    /// Get the Q-value for a state-action pair.
    ///
    /// # Panics
    ///
    /// Panics if `state` is outside the grid domain.
    pub fn get(&self, state: Coordinate, action: Action) -> f64 {
        self.entries(state)[action.index()]
    }

    /// Set the Q-value for a state-action pair.
    ///
    /// # Panics
    ///
    /// Panics if `state` is outside the grid domain.
    pub fn set(&mut self, state: Coordinate, action: Action, value: f64) {
        self.q_values
            .get_mut(&state)
            .unwrap_or_else(|| panic!("no action values for state {state}"))[action.index()] =
            value;
    }

    /// Maximum Q-value over all actions in a state.
    ///
    /// # Panics
    ///
    /// Panics if `state` is outside the grid domain.
    pub fn max_value(&self, state: Coordinate) -> f64 {
        self.entries(state)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Select the greedy action (highest Q-value) for a state.
    ///
    /// Ties resolve to the earliest action in [`Action::ALL`] order, so a
    /// freshly zeroed state always yields `Up`.
    ///
    /// # Panics
    ///
    /// Panics if `state` is outside the grid domain.
    pub fn greedy_action(&self, state: Coordinate) -> Action {
        let entries = self.entries(state);
        let mut best = Action::ALL[0];
        for action in &Action::ALL[1..] {
            if entries[action.index()] > entries[best.index()] {
                best = *action;
            }
        }
        best
    }

    /// Q-learning update: off-policy TD control.
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') − Q(s,a)]
    ///
    /// The update is applied at `state` (the pre-transition position) and
    /// bootstraps from `next_state` (the post-transition position) — also
    /// when the two are equal because the move was rejected.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the grid domain.
    pub fn q_learning_update(
        &mut self,
        state: Coordinate,
        action: Action,
        reward: f64,
        next_state: Coordinate,
    ) {
        let current_q = self.get(state, action);
        let max_next_q = self.max_value(next_state);
        let td_target = reward + self.discount_factor.value() * max_next_q;
        let td_error = td_target - current_q;
        let new_q = current_q + self.learning_rate.value() * td_error;
        self.set(state, action, new_q);
    }

    /// The learning rate in effect.
    pub fn learning_rate(&self) -> LearningRate {
        self.learning_rate
    }

    /// The discount factor in effect.
    pub fn discount_factor(&self) -> DiscountFactor {
        self.discount_factor
    }

    /// Number of states with stored action values.
    pub fn state_count(&self) -> usize {
        self.q_values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridEnvironment;

    const MAZE: &str = "#.##\n#  #\n#  *\n####";

    fn table(learning_rate: f64, discount_factor: f64) -> QTable {
        let environment = GridEnvironment::parse(MAZE).unwrap();
        QTable::new(
            &environment,
            LearningRate::new(learning_rate).unwrap(),
            DiscountFactor::new(discount_factor).unwrap(),
        )
    }

    #[test]
    fn test_initialization_zeroes_the_whole_domain() {
        let environment = GridEnvironment::parse(MAZE).unwrap();
        let qtable = table(0.5, 0.9);
        assert_eq!(qtable.state_count(), environment.state_count());
        for state in environment.states() {
            for action in Action::ALL {
                assert_eq!(qtable.get(state, action), 0.0);
            }
        }
    }

    #[test]
    fn test_set_get() {
        let mut qtable = table(0.5, 0.9);
        let state = Coordinate::new(1, 1);
        qtable.set(state, Action::Right, 1.5);
        assert_eq!(qtable.get(state, Action::Right), 1.5);
        assert_eq!(qtable.get(state, Action::Left), 0.0);
    }

    #[test]
    fn test_max_value() {
        let mut qtable = table(0.5, 0.9);
        let state = Coordinate::new(1, 1);
        qtable.set(state, Action::Up, 0.5);
        qtable.set(state, Action::Down, 1.5);
        qtable.set(state, Action::Left, -0.8);
        assert_eq!(qtable.max_value(state), 1.5);
    }

    #[test]
    fn test_greedy_action() {
        let mut qtable = table(0.5, 0.9);
        let state = Coordinate::new(1, 1);
        qtable.set(state, Action::Down, 1.5);
        qtable.set(state, Action::Right, 0.8);
        assert_eq!(qtable.greedy_action(state), Action::Down);
    }

    #[test]
    fn test_greedy_tie_breaks_to_first_in_order() {
        let qtable = table(0.5, 0.9);
        assert_eq!(qtable.greedy_action(Coordinate::new(1, 1)), Action::Up);

        let mut qtable = table(0.5, 0.9);
        let state = Coordinate::new(1, 2);
        qtable.set(state, Action::Down, 2.0);
        qtable.set(state, Action::Right, 2.0);
        assert_eq!(qtable.greedy_action(state), Action::Down);
    }

    #[test]
    fn test_q_learning_update() {
        let mut qtable = table(0.5, 0.9);
        let state = Coordinate::new(1, 1);
        let next_state = Coordinate::new(2, 1);
        qtable.set(next_state, Action::Right, 2.0);

        qtable.q_learning_update(state, Action::Down, 0.0, next_state);

        // Q(s,Down) = 0.0 + 0.5 * (0.0 + 0.9 * 2.0 - 0.0) = 0.9
        assert!((qtable.get(state, Action::Down) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_full_step_size_discards_old_estimate() {
        let mut qtable = table(1.0, 0.5);
        let state = Coordinate::new(1, 1);
        let next_state = Coordinate::new(1, 2);
        qtable.set(state, Action::Right, 7.0);
        qtable.set(next_state, Action::Down, 4.0);

        qtable.q_learning_update(state, Action::Right, -2.0, next_state);

        // With α = 1 the old estimate is gone: r + γ max Q(s') = -2 + 0.5 * 4
        assert!((qtable.get(state, Action::Right) - 0.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "no action values")]
    fn test_unknown_state_panics() {
        let qtable = table(0.5, 0.9);
        qtable.get(Coordinate::new(99, 99), Action::Up);
    }
}
