//! Session module - the game state machine
//!
//! Ties the board, pieces, collision rules, line clears and scoring into a
//! tick-driven session. The caller queues discrete [`Command`]s and calls
//! [`GameSession::advance`] once per frame with the elapsed milliseconds.
//!
//! One tick runs, in order:
//! 1. gravity: the fall timer advances; when it reaches the fall interval the
//!    current piece tries to drop one row, and a failed drop requests a lock
//! 2. every queued command, in arrival order
//! 3. the pending lock, if any (overflow check, write cells, clear rows,
//!    score, promote the next piece, recompute speed, spawn check)
//! 4. the stack-height check, which runs whether or not a lock happened

use std::mem;

use crate::board::{Board, LockedCells};
use crate::collision::{attempt_rotate, attempt_translate, hard_drop, is_valid_placement};
use crate::line_clear::clear_full_rows;
use crate::piece::Piece;
use crate::rng::{PieceGenerator, UniformPieces};
use crate::scoring::{line_clear_score, SpeedConfig};
use crate::shapes::ShapeOffsets;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, PreviewSnapshot};
use crate::types::{Color, Command, Coord, Phase};

/// What happened the last time a piece tried to lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Blocks written into the locked-cell map (0 on overflow)
    pub cells_locked: u8,
    pub lines_cleared: u32,
    pub points: u32,
    /// The piece stuck out above the top row and ended the game
    pub overflow: bool,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession<G = UniformPieces> {
    generator: G,
    speed: SpeedConfig,
    locked: LockedCells,
    current: Piece,
    next: Piece,
    score: u32,
    lines: u32,
    fall_timer_ms: u32,
    fall_interval_ms: u32,
    phase: Phase,
    pending_lock: bool,
    commands: Vec<Command>,
    last_event: Option<LockEvent>,
    /// Monotonic game counter (increments on reset)
    episode_id: u32,
}

impl GameSession<UniformPieces> {
    /// Create a new session drawing pieces uniformly from a seeded RNG
    pub fn new(seed: u32) -> Self {
        Self::with_generator(UniformPieces::new(seed))
    }
}

impl Default for GameSession<UniformPieces> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<G: PieceGenerator> GameSession<G> {
    pub fn with_generator(generator: G) -> Self {
        Self::with_config(generator, SpeedConfig::default())
    }

    pub fn with_config(mut generator: G, speed: SpeedConfig) -> Self {
        let current = Piece::new(generator.next_kind());
        let next = Piece::new(generator.next_kind());
        Self {
            generator,
            speed,
            locked: LockedCells::new(),
            current,
            next,
            score: 0,
            lines: 0,
            fall_timer_ms: 0,
            fall_interval_ms: speed.fall_interval_ms(0),
            phase: Phase::Playing,
            pending_lock: false,
            commands: Vec::new(),
            last_event: None,
            episode_id: 0,
        }
    }

    /// Start from a prepared stack instead of an empty board
    pub fn with_locked_cells(mut self, locked: LockedCells) -> Self {
        self.locked = locked;
        self
    }

    /// Queue a command for the next [`advance`](Self::advance)
    pub fn enqueue(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn pending_commands(&self) -> &[Command] {
        &self.commands
    }

    /// Run one tick with `dt_ms` elapsed since the previous one
    pub fn advance(&mut self, dt_ms: u32) {
        let commands = mem::take(&mut self.commands);

        if self.phase == Phase::Playing {
            self.apply_gravity(dt_ms);
        }

        for command in commands {
            self.apply_command(command);
        }

        if self.phase != Phase::Playing {
            return;
        }

        if self.pending_lock {
            self.lock_current();
        }

        if self.phase == Phase::Playing && self.stack_reached_top() {
            self.phase = Phase::GameOver;
        }
    }

    /// Apply a single command right away
    ///
    /// Returns whether the command took effect. A lock requested by a
    /// failed soft drop or a hard drop resolves at the end of the next
    /// [`advance`](Self::advance). In `GameOver` everything except
    /// `Reset` is ignored.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::Reset => {
                self.reset();
                true
            }
            _ if self.phase == Phase::GameOver => false,
            Command::MoveLeft => attempt_translate(&mut self.current, -1, 0, &self.locked),
            Command::MoveRight => attempt_translate(&mut self.current, 1, 0, &self.locked),
            Command::SoftDrop => {
                let moved = attempt_translate(&mut self.current, 0, 1, &self.locked);
                if !moved {
                    self.pending_lock = true;
                }
                moved
            }
            Command::Rotate => attempt_rotate(&mut self.current, &self.locked),
            Command::HardDrop => {
                hard_drop(&mut self.current, &self.locked);
                self.pending_lock = true;
                true
            }
        }
    }

    /// Replace the whole session with a fresh game
    ///
    /// The generator keeps its stream, so the next game gets new pieces.
    pub fn reset(&mut self) {
        let current = Piece::new(self.generator.next_kind());
        let next = Piece::new(self.generator.next_kind());

        self.locked.clear();
        self.current = current;
        self.next = next;
        self.score = 0;
        self.lines = 0;
        self.fall_timer_ms = 0;
        self.fall_interval_ms = self.speed.fall_interval_ms(0);
        self.phase = Phase::Playing;
        self.pending_lock = false;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    fn apply_gravity(&mut self, dt_ms: u32) {
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(dt_ms);
        if self.fall_timer_ms < self.fall_interval_ms {
            return;
        }
        self.fall_timer_ms = 0;
        if !attempt_translate(&mut self.current, 0, 1, &self.locked) {
            self.pending_lock = true;
        }
    }

    /// Lock the current piece, clear rows and bring in the next piece
    fn lock_current(&mut self) {
        self.pending_lock = false;

        let cells = self.current.occupied_cells();
        if Self::overflows(&cells) {
            self.phase = Phase::GameOver;
            self.last_event = Some(LockEvent {
                cells_locked: 0,
                lines_cleared: 0,
                points: 0,
                overflow: true,
            });
            return;
        }

        let color = self.current.color();
        for cell in cells {
            self.locked.insert(cell, color);
        }

        let cleared = clear_full_rows(&mut self.locked);
        let points = line_clear_score(cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared as u32);

        self.current = self.next;
        self.next = Piece::new(self.generator.next_kind());
        self.fall_interval_ms = self.speed.fall_interval_ms(self.lines);

        self.last_event = Some(LockEvent {
            cells_locked: cells.len() as u8,
            lines_cleared: cleared as u32,
            points,
            overflow: false,
        });

        if self.spawn_blocked() {
            self.phase = Phase::GameOver;
        }
    }

    /// The freshly promoted piece overlaps the stack at its spawn point
    fn spawn_blocked(&self) -> bool {
        !is_valid_placement(&self.current, &self.locked)
    }

    /// A locking piece with any block above the visible top
    fn overflows(cells: &[Coord]) -> bool {
        cells.iter().any(|&(_, y)| y < 0)
    }

    /// Any locked block on the top row or above
    fn stack_reached_top(&self) -> bool {
        self.locked.keys().any(|&(_, y)| y <= 0)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn speed_config(&self) -> &SpeedConfig {
        &self.speed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn locked_cells(&self) -> &LockedCells {
        &self.locked
    }

    /// Dense view of the locked cells (rebuilt on every call)
    pub fn board(&self) -> Board {
        Board::build_from(&self.locked)
    }

    pub fn current_piece(&self) -> Piece {
        self.current
    }

    pub fn current_cells(&self) -> [Coord; 4] {
        self.current.occupied_cells()
    }

    pub fn current_color(&self) -> Color {
        self.current.color()
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    pub fn next_offsets(&self) -> ShapeOffsets {
        self.next.offsets()
    }

    pub fn next_color(&self) -> Color {
        self.next.color()
    }

    /// Check if the current piece sits in a legal position
    pub fn current_is_valid(&self) -> bool {
        is_valid_placement(&self.current, &self.locked)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board().write_grid(&mut out.board);
        out.current = ActiveSnapshot::from(self.current);
        out.next = PreviewSnapshot::from(self.next);
        out.score = self.score;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
        out.phase = self.phase;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
