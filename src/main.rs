use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use swipe_maze::gesture::{direction_from_char, direction_from_drag};
use swipe_maze::layout::Layout;
use swipe_maze::renderer;
use swipe_maze::{Direction, GameSession, MazeConfig, MoveEvent};

const HELP: &str = "arrows / wasd / hjkl or drag to move, q to quit";

fn main() -> Result<()> {
    env_logger::init();

    let config = MazeConfig::from_env().context("reading maze configuration")?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = GameSession::new(&config, rng).context("generating the first maze")?;
    let layout = renderer::text_layout(session.grid().dims())?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("entering raw mode")?;

    let result = with_screen(&mut stdout, |out| run(&mut session, &layout, out));
    let raw = terminal::disable_raw_mode().context("leaving raw mode");

    result.and(raw)
}

/// Runs `body` on the alternate screen and always tries to leave it again,
/// including when entering it failed half way.
fn with_screen<W, F>(out: &mut W, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> Result<()>,
{
    let result = execute!(out, terminal::EnterAlternateScreen, EnableMouseCapture, cursor::Hide)
        .context("setting up the screen")
        .and_then(|_| body(out));

    let restored = execute!(
        out,
        DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )
    .context("restoring the screen");

    result.and(restored)
}

enum Input {
    Move(Direction),
    Quit,
    Ignored,
}

fn run<W: Write>(session: &mut GameSession<StdRng>, layout: &Layout, out: &mut W) -> Result<()> {
    let mut status = String::from(HELP);

    loop {
        draw(session, &status, out)?;

        let input = match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => key_input(key),
            Event::Mouse(mouse) => mouse_input(session, layout, mouse),
            _ => Input::Ignored,
        };

        let direction = match input {
            Input::Move(direction) => direction,
            Input::Quit => return Ok(()),
            Input::Ignored => continue,
        };

        status = match session.handle_move(direction)? {
            MoveEvent::Regenerated { maze } => format!("escaped! now on maze #{}", maze),
            MoveEvent::Blocked => String::from("bump"),
            MoveEvent::Moved { .. } => String::from(HELP),
        };
    }
}

fn key_input(key: KeyEvent) -> Input {
    let direction = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Input::Quit,
        KeyCode::Char('q') | KeyCode::Esc => return Input::Quit,
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Char(c) => direction_from_char(c),
        _ => None,
    };

    direction.map_or(Input::Ignored, Input::Move)
}

// a held button keeps producing drags, each one a cell past the player moves it again
fn mouse_input(session: &GameSession<StdRng>, layout: &Layout, mouse: MouseEvent) -> Input {
    match mouse.kind {
        MouseEventKind::Drag(_) => {
            let (x, y) = renderer::surface_point(layout, mouse.column, mouse.row);
            direction_from_drag(layout, session.player(), x, y).map_or(Input::Ignored, Input::Move)
        }
        _ => Input::Ignored,
    }
}

fn draw<W: Write>(session: &GameSession<StdRng>, status: &str, out: &mut W) -> Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    // raw mode does not translate \n, move the cursor by hand
    for line in renderer::render(session.grid()).lines() {
        queue!(out, Print(line), cursor::MoveToNextLine(1))?;
    }
    queue!(
        out,
        cursor::MoveToNextLine(1),
        Print(format!("maze #{}  {}", session.mazes(), status))
    )?;

    out.flush()?;
    Ok(())
}
