//! Integration tests for maze parsing and transition semantics

use qmaze::{Action, CellKind, Coordinate, Error, GridEnvironment, RewardTable};

const SMALL_MAZE: &str = "#.##\n#  #\n#  *\n####";

const DEMO_MAZE: &str = "
    #.########
    #  #     #
    #  #  #  #
    #     #  #
    #  ##### #
    #  #     *
    ##########
";

#[test]
fn parses_the_demo_maze() {
    let environment = GridEnvironment::parse(DEMO_MAZE).unwrap();
    assert_eq!(environment.start(), Coordinate::new(0, 1));
    assert_eq!(environment.goal(), Coordinate::new(5, 9));
    assert_eq!(environment.dimensions(), (7, 10));
    assert_eq!(environment.state_count(), 70);
}

#[test]
fn classifies_every_symbol() {
    let environment = GridEnvironment::parse(SMALL_MAZE).unwrap();
    assert_eq!(
        environment.cell(Coordinate::new(0, 0)),
        Some(CellKind::Wall)
    );
    assert_eq!(
        environment.cell(Coordinate::new(0, 1)),
        Some(CellKind::Start)
    );
    assert_eq!(
        environment.cell(Coordinate::new(1, 1)),
        Some(CellKind::Open)
    );
    assert_eq!(
        environment.cell(Coordinate::new(2, 3)),
        Some(CellKind::Goal)
    );
    assert_eq!(environment.cell(Coordinate::new(9, 9)), None);
}

#[test]
fn ragged_rows_leave_missing_coordinates_outside_the_domain() {
    let environment = GridEnvironment::parse("#.\n#x#\n*").unwrap();
    assert!(environment.contains(Coordinate::new(1, 2)));
    assert!(!environment.contains(Coordinate::new(0, 2)));
    assert!(!environment.contains(Coordinate::new(2, 1)));
    // 'x' has no reserved meaning and is open floor
    assert_eq!(
        environment.cell(Coordinate::new(1, 1)),
        Some(CellKind::Open)
    );
}

#[test]
fn construction_requires_exactly_one_start_and_goal() {
    assert!(matches!(
        GridEnvironment::parse("###\n# *"),
        Err(Error::MissingStart)
    ));
    assert!(matches!(
        GridEnvironment::parse("#.#\n#  "),
        Err(Error::MissingGoal)
    ));
    assert!(matches!(
        GridEnvironment::parse(".. *"),
        Err(Error::DuplicateStart {
            first,
            second,
        }) if first == Coordinate::new(0, 0) && second == Coordinate::new(0, 1)
    ));
    assert!(matches!(
        GridEnvironment::parse("#.#\n*l*"),
        Err(Error::DuplicateGoal { .. })
    ));
}

#[test]
fn moving_into_walls_or_start_never_changes_position() {
    let environment = GridEnvironment::parse(SMALL_MAZE).unwrap();
    let rewards = environment.rewards();

    let cases = [
        (Coordinate::new(1, 1), Action::Left),  // wall
        (Coordinate::new(1, 1), Action::Up),    // start cell
        (Coordinate::new(2, 1), Action::Down),  // wall
    ];
    for (position, action) in cases {
        let transition = environment.attempt(position, action);
        assert_eq!(transition.position, position);
        assert_eq!(transition.reward, rewards.blocked);
        assert!(!transition.moved);
    }
}

#[test]
fn moving_outside_the_domain_never_changes_position() {
    let environment = GridEnvironment::parse(SMALL_MAZE).unwrap();
    let rewards = environment.rewards();

    // Row -1 does not exist
    let above = environment.attempt(environment.start(), Action::Up);
    assert_eq!(above.position, environment.start());
    assert_eq!(above.reward, rewards.out_of_bounds);
    assert!(!above.moved);

    // Column 4 does not exist
    let beside = environment.attempt(Coordinate::new(1, 3), Action::Right);
    assert_eq!(beside.position, Coordinate::new(1, 3));
    assert_eq!(beside.reward, rewards.out_of_bounds);
}

#[test]
fn moving_onto_the_goal_rewards_and_relocates() {
    let environment = GridEnvironment::parse(SMALL_MAZE).unwrap();
    let transition = environment.attempt(Coordinate::new(2, 2), Action::Right);
    assert_eq!(transition.position, environment.goal());
    assert_eq!(transition.reward, environment.rewards().goal);
    assert!(transition.moved);
}

#[test]
fn attempt_is_pure_and_repeatable() {
    let rewards = RewardTable {
        out_of_bounds: -9.0,
        blocked: -3.0,
        goal: 5.0,
        step: -0.5,
    };
    let environment = GridEnvironment::parse_with_rewards(SMALL_MAZE, rewards).unwrap();

    for position in environment.states() {
        for action in Action::ALL {
            let first = environment.attempt(position, action);
            let second = environment.attempt(position, action);
            assert_eq!(first, second);
        }
    }
}
