//! Greedy policy extraction and rendering

use crate::{
    grid::{Action, CellKind, GridEnvironment},
    q_learning::QTable,
    types::Coordinate,
};

/// Extract the greedy policy for every state in the grid domain.
///
/// Returns (state, action) pairs in row-major order. Ties resolve the same
/// way action selection does: toward the first action in Up, Down, Left,
/// Right order. Entries exist for every domain state, including walls and
/// the goal, whose actions are never exercised by the agent.
pub fn extract_policy(
    environment: &GridEnvironment,
    q_table: &QTable,
) -> Vec<(Coordinate, Action)> {
    let mut states: Vec<Coordinate> = environment.states().collect();
    states.sort();
    states
        .into_iter()
        .map(|state| (state, q_table.greedy_action(state)))
        .collect()
}

/// Render the learned policy as an ASCII map.
///
/// Walls and the goal keep their maze symbols; every cell the agent can
/// stand on shows the arrow of its greedy action. Coordinates outside a
/// ragged row render as spaces.
pub fn render_policy(environment: &GridEnvironment, q_table: &QTable) -> String {
    let (rows, cols) = environment.dimensions();
    let mut rendered = String::with_capacity(rows * (cols + 1));

    for row in 0..rows {
        let mut line = String::with_capacity(cols);
        for col in 0..cols {
            let coordinate = Coordinate::new(row, col);
            let symbol = match environment.cell(coordinate) {
                None => ' ',
                Some(CellKind::Wall) => CellKind::Wall.symbol(),
                Some(CellKind::Goal) => CellKind::Goal.symbol(),
                Some(CellKind::Start) | Some(CellKind::Open) => {
                    q_table.greedy_action(coordinate).arrow()
                }
            };
            line.push(symbol);
        }
        rendered.push_str(line.trim_end());
        rendered.push('\n');
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DiscountFactor, LearningRate};

    const MAZE: &str = "#.##\n#  #\n#  *\n####";

    fn fresh_table(environment: &GridEnvironment) -> QTable {
        QTable::new(
            environment,
            LearningRate::new(1.0).unwrap(),
            DiscountFactor::new(0.5).unwrap(),
        )
    }

    #[test]
    fn test_extract_policy_covers_domain_in_order() {
        let environment = GridEnvironment::parse(MAZE).unwrap();
        let q_table = fresh_table(&environment);

        let policy = extract_policy(&environment, &q_table);
        assert_eq!(policy.len(), environment.state_count());
        assert!(policy.windows(2).all(|pair| pair[0].0 < pair[1].0));
        // Zeroed table: every state ties, so every entry is Up.
        assert!(policy.iter().all(|(_, action)| *action == Action::Up));
    }

    #[test]
    fn test_render_marks_walls_goal_and_arrows() {
        let environment = GridEnvironment::parse(MAZE).unwrap();
        let mut q_table = fresh_table(&environment);
        q_table.set(Coordinate::new(2, 2), Action::Right, 10.0);

        let rendered = render_policy(&environment, &q_table);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["#^##", "#^^#", "#^>*", "####"]);
    }
}
