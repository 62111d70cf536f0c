//! Greedy Q-learning agent
//!
//! The agent owns its position, its cumulative score, and the action-value
//! table. It is deliberately exploration-free: action selection is always
//! greedy over the current estimates. Epsilon-greedy exploration would be a
//! documented extension, not a fix.

use crate::{
    grid::{Action, GridEnvironment, Transition},
    q_learning::q_table::QTable,
    types::{Coordinate, DiscountFactor, LearningRate},
};

/// Q-learning agent (off-policy TD control).
///
/// Consumes [`Transition`](crate::grid::Transition) outcomes produced by
/// the environment to update its value table and track its state. The
/// driving loop lives outside the agent: callers alternate
/// [`select_best_action`](Self::select_best_action),
/// [`GridEnvironment::attempt`], and
/// [`apply_transition`](Self::apply_transition), and supply their own
/// termination policy and step cap.
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    q_table: QTable,
    position: Coordinate,
    start: Coordinate,
    score: f64,
}

impl QLearningAgent {
    /// Create an agent at the environment's start cell with a zeroed value
    /// table over the environment's grid domain.
    pub fn new(
        environment: &GridEnvironment,
        learning_rate: LearningRate,
        discount_factor: DiscountFactor,
    ) -> Self {
        Self {
            q_table: QTable::new(environment, learning_rate, discount_factor),
            position: environment.start(),
            start: environment.start(),
            score: 0.0,
        }
    }

    /// Current position.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Cumulative score: the sum of all rewards received so far.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// The learned action-value table.
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Select the greedy action for the current position.
    ///
    /// Ties resolve to the first action in Up, Down, Left, Right order.
    pub fn select_best_action(&self) -> Action {
        self.q_table.greedy_action(self.position)
    }

    /// Apply a transition outcome: learn, then move.
    ///
    /// Performs the one-step Q-learning update at the current position for
    /// `action`, bootstrapping from the transition's resulting position
    /// (which equals the current position when the move was rejected, and
    /// still contributes a valid bootstrap target). Then adopts the
    /// resulting position and accumulates the reward into the score.
    pub fn apply_transition(&mut self, action: Action, transition: Transition) {
        self.q_table
            .q_learning_update(self.position, action, transition.reward, transition.position);
        self.position = transition.position;
        self.score += transition.reward;
    }

    /// Return to the start cell for a new episode.
    ///
    /// Learned values and the cumulative score are kept; only the position
    /// resets.
    pub fn restart(&mut self) {
        self.position = self.start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridEnvironment;

    const MAZE: &str = "#.##\n#  #\n#  *\n####";

    fn agent(learning_rate: f64, discount_factor: f64) -> (GridEnvironment, QLearningAgent) {
        let environment = GridEnvironment::parse(MAZE).unwrap();
        let agent = QLearningAgent::new(
            &environment,
            LearningRate::new(learning_rate).unwrap(),
            DiscountFactor::new(discount_factor).unwrap(),
        );
        (environment, agent)
    }

    #[test]
    fn test_new_agent_starts_at_start_with_zero_score() {
        let (environment, agent) = agent(0.5, 0.9);
        assert_eq!(agent.position(), environment.start());
        assert_eq!(agent.score(), 0.0);
        assert_eq!(agent.q_table().state_count(), environment.state_count());
    }

    #[test]
    fn test_fresh_agent_selects_up() {
        // All estimates are zero, so the tie-break decides.
        let (_, agent) = agent(0.5, 0.9);
        assert_eq!(agent.select_best_action(), Action::Up);
    }

    #[test]
    fn test_apply_transition_updates_table_position_and_score() {
        let (environment, mut agent) = agent(1.0, 0.5);
        let from = agent.position();

        let transition = environment.attempt(from, Action::Down);
        agent.apply_transition(Action::Down, transition);

        assert_eq!(agent.position(), transition.position);
        assert_eq!(agent.score(), transition.reward);
        // α = 1: the entry is exactly r + γ max Q(s'), and Q(s') is all
        // zeros, so it equals the step reward.
        assert_eq!(
            agent.q_table().get(from, Action::Down),
            environment.rewards().step
        );
    }

    #[test]
    fn test_rejected_move_updates_the_origin_entry() {
        let (environment, mut agent) = agent(1.0, 0.5);
        let from = agent.position();

        let transition = environment.attempt(from, Action::Up);
        assert!(!transition.moved);
        agent.apply_transition(Action::Up, transition);

        assert_eq!(agent.position(), from);
        assert_eq!(
            agent.q_table().get(from, Action::Up),
            environment.rewards().out_of_bounds
        );
        assert_eq!(agent.score(), environment.rewards().out_of_bounds);
    }

    #[test]
    fn test_restart_keeps_table_and_score() {
        let (environment, mut agent) = agent(1.0, 0.5);
        let transition = environment.attempt(agent.position(), Action::Down);
        agent.apply_transition(Action::Down, transition);
        let score = agent.score();

        agent.restart();
        assert_eq!(agent.position(), environment.start());
        assert_eq!(agent.score(), score);
        assert_eq!(
            agent.q_table().get(environment.start(), Action::Down),
            environment.rewards().step
        );
    }
}
