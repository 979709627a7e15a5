use crate::config::MazeConfig;
use crate::error::Result;
use crate::generators::{new_generator, GeneratorKind};
use crate::grids::{Direction, Position, WallGrid};
use crate::navigator::{self, MoveResult};
use log::{info, trace};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Regenerating,
}

/// What a move did, so the caller can decide what to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEvent {
    Blocked,
    Moved { from: Position, to: Position },
    /// The exit was reached and maze number `maze` replaced the old one.
    Regenerated { maze: usize },
}

pub struct GameSession<R> {
    grid: WallGrid,
    rng: R,
    generator_kind: GeneratorKind,
    state: GameState,
    mazes: usize,
}

impl<R: Rng> GameSession<R> {
    pub fn new(config: &MazeConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let mut session = Self {
            grid: WallGrid::with_dims(config.columns, config.rows)?,
            rng,
            generator_kind: GeneratorKind::default(),
            state: GameState::Regenerating,
            mazes: 0,
        };
        session.regenerate()?;

        Ok(session)
    }

    #[inline]
    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    #[inline]
    pub fn player(&self) -> Position {
        self.grid.player
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of mazes generated so far, including the first one.
    #[inline]
    pub fn mazes(&self) -> usize {
        self.mazes
    }

    pub fn handle_move(&mut self, direction: Direction) -> Result<MoveEvent> {
        match navigator::attempt_move(&mut self.grid, direction)? {
            MoveResult::Blocked => {
                trace!("move {:?} from {} blocked", direction, self.grid.player);
                Ok(MoveEvent::Blocked)
            }
            MoveResult::Moved { from, to } => Ok(MoveEvent::Moved { from, to }),
            MoveResult::ReachedExit { .. } => {
                self.regenerate()?;
                Ok(MoveEvent::Regenerated { maze: self.mazes })
            }
        }
    }

    /// Throws the current maze away and carves a new one in place.
    pub fn regenerate(&mut self) -> Result<()> {
        self.state = GameState::Regenerating;

        self.grid.reset();
        new_generator(self.generator_kind, &mut self.grid, &mut self.rng)?.generate_maze()?;
        self.grid.player = Position::ORIGIN;
        self.mazes += 1;

        info!("maze {} ready ({})", self.mazes, self.grid.dims());
        self.state = GameState::Playing;

        Ok(())
    }
}
