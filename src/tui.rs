//! Full-screen terminal front end.
//!
//! Implements [`GameInterface`] with Ratatui. The layout is a vertical
//! stack: title, gallows, round panel, message line, key help. Input is a
//! one-letter buffer submitted with Enter; once a round ends, `n` starts
//! the next one and Esc leaves.

use crate::gallows;
use crate::game_state::Status;
use crate::session::{GameInterface, PlayerAction, RoundSnapshot};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const WIN_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LOSS_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Yellow);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    RoundOver,
}

/// Groups render parameters so drawing does not borrow the whole interface.
struct RenderContext<'a> {
    state: TuiState,
    input: &'a str,
    round: Option<&'a RoundSnapshot>,
    revealed: Option<&'a str>,
    message: &'a str,
    error_message: &'a str,
}

pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    input: String,
    round: Option<RoundSnapshot>,
    revealed: Option<String>,
    message: String,
    error_message: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state: TuiState::EnteringGuess,
            input: String::new(),
            round: None,
            revealed: None,
            message: String::new(),
            error_message: String::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            state: self.state,
            input: &self.input,
            round: self.round.as_ref(),
            revealed: self.revealed.as_deref(),
            message: &self.message,
            error_message: &self.error_message,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(11), // Gallows
                Constraint::Min(7),     // Round panel
                Constraint::Length(3),  // Message line
                Constraint::Length(3),  // Key help
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_gallows(f, chunks[1], ctx.round);
        Self::render_round(f, chunks[2], ctx);
        Self::render_message(f, chunks[3], ctx);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("PROVERBIAL HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_gallows(f: &mut Frame, area: Rect, round: Option<&RoundSnapshot>) {
        let penalty_count = round.map_or(0, |r| r.penalty_count);
        let paragraph = Paragraph::new(gallows::stage(penalty_count))
            .block(Block::default().borders(Borders::ALL).title("Gallows"));
        f.render_widget(paragraph, area);
    }

    fn render_round(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some(round) = ctx.round {
            lines.push(Line::from(vec![
                Span::raw("Proverb:  "),
                Span::styled(round.masked.clone(), HEADER_STYLE),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(format!(
                "Wrong guesses ({} of {}): {}",
                round.penalty_count,
                round.max_penalty,
                letters_line(&round.wrong_letters)
            )));
        }

        if let Some(proverb) = ctx.revealed {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw("The proverb was: "),
                Span::styled(proverb.to_string(), HEADER_STYLE),
            ]));
        } else if ctx.state == TuiState::EnteringGuess {
            lines.push(Line::from(""));
            lines.push(Line::from(format!("Your guess: {}", ctx.input)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Round"))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_message(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let (text, style) = if !ctx.error_message.is_empty() {
            (ctx.error_message, ERROR_STYLE)
        } else if !ctx.message.is_empty() {
            let style = match ctx.round.map(|r| r.status) {
                Some(Status::Won) => WIN_STYLE,
                Some(Status::Lost) => LOSS_STYLE,
                _ => MESSAGE_STYLE,
            };
            (ctx.message, style)
        } else {
            ("", MESSAGE_STYLE)
        };

        let paragraph = Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type a letter | ENTER: Guess | ESC: Quit",
            TuiState::RoundOver => "N: New proverb | ESC: Quit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<PlayerAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        match event {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                if Self::has_modifier_keys(&key) {
                    debug_log!("handle_input() - Ignoring modified key: {:?}", key);
                    return Ok(None);
                }
                match self.state {
                    TuiState::EnteringGuess => Ok(self.handle_guess_input(key)),
                    TuiState::RoundOver => Ok(Self::handle_round_over_input(key)),
                }
            }
            _ => {
                debug_log!("handle_input() - Ignoring event: {:?}", event);
                Ok(None)
            }
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<PlayerAction> {
        match key.code {
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, exiting");
                Some(PlayerAction::Exit)
            }
            KeyCode::Enter if !self.input.is_empty() => {
                let guess = std::mem::take(&mut self.input);
                self.message.clear();
                self.error_message.clear();
                info_log!("handle_guess_input() - Submitting '{}'", guess);
                Some(PlayerAction::Guess(guess))
            }
            KeyCode::Enter => {
                self.error_message = "Type a letter first.".to_string();
                None
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            // One letter at a time: typing replaces the buffer.
            KeyCode::Char(c) if !c.is_control() => {
                self.error_message.clear();
                self.input.clear();
                self.input.push(c);
                None
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }

    fn handle_round_over_input(key: KeyEvent) -> Option<PlayerAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(PlayerAction::NewGame),
            KeyCode::Esc => Some(PlayerAction::Exit),
            _ => None,
        }
    }
}

fn letters_line(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl GameInterface for TuiInterface {
    fn show_round(&mut self, round: &RoundSnapshot) {
        self.round = Some(round.clone());
        self.revealed = None;
        self.state = TuiState::EnteringGuess;
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<PlayerAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, exiting");
                return Some(PlayerAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error {}, exiting", e);
                    return Some(PlayerAction::Exit);
                }
            }
        }
    }

    fn show_rejected_guess(&mut self) {
        self.error_message = "Pick a single letter of the alphabet.".to_string();
        self.draw_or_log();
    }

    fn show_already_correct(&mut self) {
        self.message = "That letter is already revealed. No penalty.".to_string();
        self.draw_or_log();
    }

    fn show_already_wrong(&mut self) {
        self.message = "You already tried that letter. It cost another chance.".to_string();
        self.draw_or_log();
    }

    fn show_game_over(&mut self, round: &RoundSnapshot, proverb: &str) {
        self.round = Some(round.clone());
        self.revealed = Some(proverb.to_string());
        self.state = TuiState::RoundOver;
        self.input.clear();
        self.error_message.clear();
        self.message = match round.status {
            Status::Won => "You guessed the proverb. You won!".to_string(),
            Status::Lost => "The hangman is finished. You lost.".to_string(),
            Status::InProgress => String::new(),
        };
        self.draw_or_log();
    }

    fn show_farewell(&mut self) {
        info_log!("show_farewell() - Session over");
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
