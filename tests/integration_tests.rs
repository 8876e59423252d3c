//! Integration tests for the session state machine

use blockfall::core::{FixedSequence, GameSession, LockedCells, SpeedConfig};
use blockfall::types::{Color, Command, Phase, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

fn play(session: &mut GameSession<FixedSequence>, commands: &[Command]) {
    for &command in commands {
        session.enqueue(command);
    }
    session.advance(0);
}

fn moves(command: Command, n: usize) -> Vec<Command> {
    vec![command; n]
}

#[test]
fn test_game_lifecycle() {
    let mut session = GameSession::new(12345);
    assert_eq!(session.phase(), Phase::Playing);
    assert!(session.current_is_valid());

    // Nothing falls until a full interval has passed.
    let y = session.current_piece().y;
    for _ in 0..31 {
        session.advance(16);
    }
    assert_eq!(session.current_piece().y, y);
    session.advance(16);
    assert_eq!(session.current_piece().y, y + 1);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        Command::MoveLeft,
        Command::Rotate,
        Command::HardDrop,
        Command::MoveRight,
        Command::MoveRight,
        Command::HardDrop,
        Command::SoftDrop,
    ];

    let mut a = GameSession::new(77);
    let mut b = GameSession::new(77);
    for &command in script.iter().cycle().take(60) {
        a.enqueue(command);
        b.enqueue(command);
        a.advance(16);
        b.advance(16);
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_single_line_clear() {
    let mut locked = LockedCells::new();
    for x in 0..6 {
        locked.insert((x, 19), Color::GREY);
    }
    let mut session =
        GameSession::with_generator(FixedSequence::repeat(ShapeKind::I)).with_locked_cells(locked);

    let mut script = moves(Command::MoveRight, 2);
    script.push(Command::HardDrop);
    play(&mut session, &script);

    assert_eq!(session.score(), 100);
    assert_eq!(session.lines_cleared(), 1);
    assert!(session.locked_cells().is_empty());
}

#[test]
fn test_four_line_clear() {
    let mut locked = LockedCells::new();
    for y in 16..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 - 1 {
            locked.insert((x, y), Color::GREY);
        }
    }
    let mut session =
        GameSession::with_generator(FixedSequence::repeat(ShapeKind::I)).with_locked_cells(locked);

    let mut script = vec![Command::Rotate];
    script.extend(moves(Command::MoveRight, 4));
    script.push(Command::HardDrop);
    play(&mut session, &script);

    assert_eq!(session.score(), 800);
    assert_eq!(session.lines_cleared(), 4);
    assert!(session.locked_cells().is_empty());
    assert_eq!(session.phase(), Phase::Playing);
}

#[test]
fn test_lock_above_top_ends_game() {
    let tower: LockedCells = (2..BOARD_HEIGHT as i8)
        .map(|y| ((5, y), Color::GREY))
        .collect();
    let mut session = GameSession::with_generator(FixedSequence::repeat(ShapeKind::I))
        .with_locked_cells(tower.clone());

    play(&mut session, &[Command::Rotate, Command::HardDrop]);

    assert_eq!(session.phase(), Phase::GameOver);
    assert_eq!(session.locked_cells(), &tower);
    assert!(session.take_last_event().is_some_and(|e| e.overflow));
}

#[test]
fn test_next_piece_that_cannot_spawn_ends_game() {
    let tower: LockedCells = (3..BOARD_HEIGHT as i8)
        .map(|y| ((5, y), Color::GREY))
        .collect();
    let mut session = GameSession::with_generator(FixedSequence::repeat(ShapeKind::O))
        .with_locked_cells(tower.clone());

    session.advance(500);

    assert_eq!(session.phase(), Phase::GameOver);
    assert!(!session.current_is_valid());
    // Nothing was overwritten: tower plus the four blocks that landed on it.
    assert_eq!(session.locked_cells().len(), tower.len() + 4);
    assert!(tower
        .keys()
        .all(|cell| session.locked_cells().get(cell) == Some(&Color::GREY)));
}

#[test]
fn test_rotation_kicks_off_right_wall() {
    let mut session = GameSession::with_generator(FixedSequence::repeat(ShapeKind::I));

    let mut script = vec![Command::Rotate];
    script.extend(moves(Command::MoveRight, 4));
    play(&mut session, &script);
    assert_eq!(session.current_piece().x, 9);

    // Horizontal again would span 7..=10; the -1 kick fits.
    play(&mut session, &[Command::Rotate]);
    let piece = session.current_piece();
    assert_eq!((piece.rotation, piece.x), (2, 8));
    assert!(session.current_is_valid());
    assert!(session
        .current_cells()
        .iter()
        .all(|&(x, _)| (0..BOARD_WIDTH as i8).contains(&x)));
}

#[test]
fn test_reset_after_game_over() {
    let mut locked = LockedCells::new();
    locked.insert((0, 0), Color::GREY);
    let mut session =
        GameSession::with_generator(FixedSequence::repeat(ShapeKind::T)).with_locked_cells(locked);

    session.advance(16);
    assert_eq!(session.phase(), Phase::GameOver);

    // Only Reset gets through.
    play(&mut session, &[Command::MoveLeft, Command::HardDrop]);
    assert_eq!(session.phase(), Phase::GameOver);

    play(&mut session, &[Command::Reset]);
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.score(), 0);
    assert_eq!(session.lines_cleared(), 0);
    assert!(session.locked_cells().is_empty());
    assert_eq!(session.fall_interval_ms(), 500);
}

/// Five O pieces side by side fill rows 18 and 19.
fn clear_two_rows_with_o(session: &mut GameSession<FixedSequence>) {
    let placements: [(Command, usize); 5] = [
        (Command::MoveLeft, 5),
        (Command::MoveLeft, 3),
        (Command::MoveLeft, 1),
        (Command::MoveRight, 1),
        (Command::MoveRight, 3),
    ];
    for (direction, steps) in placements {
        let mut script = moves(direction, steps);
        script.push(Command::HardDrop);
        play(session, &script);
    }
}

#[test]
fn test_fall_speed_increases_with_lines() {
    let mut session = GameSession::with_generator(FixedSequence::repeat(ShapeKind::O));
    let mut intervals = vec![session.fall_interval_ms()];

    for round in 1..=50u32 {
        clear_two_rows_with_o(&mut session);
        assert_eq!(session.lines_cleared(), round * 2);
        assert!(session.locked_cells().is_empty());
        intervals.push(session.fall_interval_ms());
    }

    assert_eq!(session.score(), 50 * 300);
    assert!(intervals.windows(2).all(|w| w[1] <= w[0]));
    let decrements = intervals.windows(2).filter(|w| w[1] < w[0]).count();
    assert!(decrements >= 5);
    assert_eq!(*intervals.last().unwrap(), 100);
}

#[test]
fn test_custom_speed_config() {
    let speed = SpeedConfig {
        base_ms: 300,
        step_ms: 100,
        floor_ms: 50,
        lines_per_step: 2,
    };
    let mut session =
        GameSession::with_config(FixedSequence::repeat(ShapeKind::O), speed);
    assert_eq!(session.fall_interval_ms(), 300);

    clear_two_rows_with_o(&mut session);
    assert_eq!(session.fall_interval_ms(), 200);
    clear_two_rows_with_o(&mut session);
    clear_two_rows_with_o(&mut session);
    assert_eq!(session.fall_interval_ms(), 50);
}

#[test]
fn test_gravity_lands_and_locks_piece() {
    let mut session = GameSession::with_generator(FixedSequence::repeat(ShapeKind::O));

    // O spawns with its bottom on row 2; 17 drops reach the floor, one more locks.
    for _ in 0..18 {
        session.advance(500);
    }
    assert_eq!(session.locked_cells().len(), 4);
    for cell in [(5, 18), (6, 18), (5, 19), (6, 19)] {
        assert_eq!(session.locked_cells().get(&cell), Some(&Color::YELLOW));
    }
}
