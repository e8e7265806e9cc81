use std::{cmp, io, thread, time::Duration};

use anyhow::{Context, Result};
use bingo90_core::{
    models::{NumberToken, GRID_COLUMNS, GRID_ROWS, TOKEN_COUNT},
    DispatchOutcome, DrawRecord, DrawSource, GameEvent, GameSession, NameEntry, SessionHost,
    SessionState,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::{
    sync::mpsc,
    task,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{block_font, speech::Speaker};

const INPUT_POLL: Duration = Duration::from_millis(250);
const WINDOW_TITLE: &str = "Number Grid Game";
const MIN_WIDTH: u16 = 64;
const MIN_HEIGHT: u16 = 32;
const MAX_NAME_LEN: usize = 40;
const RECENT_DRAWS: usize = 8;

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    muted: Color,
    cell_fg: Color,
    cell_bg: Color,
    drawn_bg: Color,
    cursor_bg: Color,
    score: Color,
    remaining: Color,
    generate: Color,
    auto_start: Color,
    auto_stop: Color,
    reset: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            muted: Color::DarkGray,
            cell_fg: Color::White,
            cell_bg: Color::Rgb(76, 175, 80),
            drawn_bg: Color::Rgb(250, 64, 50),
            cursor_bg: Color::Rgb(54, 124, 57),
            score: Color::Rgb(76, 175, 80),
            remaining: Color::Rgb(255, 87, 34),
            generate: Color::Rgb(33, 150, 243),
            auto_start: Color::Rgb(255, 152, 0),
            auto_stop: Color::Rgb(244, 67, 54),
            reset: Color::Rgb(139, 195, 74),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct NamePromptModal {
    input: String,
    cursor: usize,
}

impl NamePromptModal {
    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(index, _)| index)
            .unwrap_or(self.input.len())
    }

    fn len(&self) -> usize {
        self.input.chars().count()
    }

    fn move_cursor(&mut self, delta: isize) {
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, self.len() as isize) as usize;
    }

    fn move_home(&mut self) {
        self.cursor = 0;
    }

    fn move_end(&mut self) {
        self.cursor = self.len();
    }

    fn insert(&mut self, ch: char) {
        if ch.is_control() || self.len() >= MAX_NAME_LEN {
            return;
        }
        let index = self.byte_index();
        self.input.insert(index, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let index = self.byte_index();
        self.input.remove(index);
    }

    fn delete(&mut self) {
        if self.cursor < self.len() {
            let index = self.byte_index();
            self.input.remove(index);
        }
    }
}

#[derive(Clone, Copy)]
enum Overlay<'a> {
    None,
    NamePrompt(&'a NamePromptModal),
    Message { title: &'a str, text: &'a str },
}

/// What the grid and labels currently show.
///
/// Updated incrementally by the session through [`SessionHost`] while a draw
/// is in progress, then resynchronised from the session after every event.
#[derive(Debug, Clone)]
struct BoardView {
    drawn: [bool; TOKEN_COUNT as usize],
    last: Option<NumberToken>,
    remaining: usize,
    state: SessionState,
    recent: Vec<DrawRecord>,
    winner: Option<String>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            drawn: [false; TOKEN_COUNT as usize],
            last: None,
            remaining: usize::from(TOKEN_COUNT),
            state: SessionState::Idle,
            recent: Vec::new(),
            winner: None,
        }
    }
}

impl BoardView {
    fn is_drawn(&self, token: NumberToken) -> bool {
        self.drawn[token.index()]
    }

    fn mark(&mut self, token: NumberToken) {
        self.drawn[token.index()] = true;
        self.last = Some(token);
        self.remaining = self.drawn.iter().filter(|drawn| !**drawn).count();
        if self.remaining == 0 {
            self.state = SessionState::Complete;
        }
    }

    fn sync(&mut self, session: &GameSession) {
        for token in NumberToken::all() {
            self.drawn[token.index()] = session.pool().is_drawn(token);
        }
        self.last = session.last_drawn();
        self.remaining = session.remaining();
        self.state = session.state();
        self.recent = session
            .history()
            .iter()
            .rev()
            .take(RECENT_DRAWS)
            .cloned()
            .collect();
        self.winner = session.winner().map(str::to_string);
    }
}

struct UiState {
    cursor: (usize, usize),
    status: String,
    should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            cursor: (0, 0),
            status: "Ready".to_string(),
            should_quit: false,
        }
    }
}

impl UiState {
    fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    fn move_cursor(&mut self, row_delta: isize, col_delta: isize) {
        let (row, col) = self.cursor;
        let row = (row as isize + row_delta).clamp(0, GRID_ROWS as isize - 1) as usize;
        let col = (col as isize + col_delta).clamp(0, GRID_COLUMNS as isize - 1) as usize;
        self.cursor = (row, col);
    }

    fn selected(&self) -> Option<NumberToken> {
        NumberToken::at(self.cursor.0, self.cursor.1)
    }
}

/// The terminal side of a game: grid display, speech, and dialogs.
struct TerminalHost {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    events: mpsc::Receiver<Event>,
    speaker: Speaker,
    theme: Theme,
    view: BoardView,
    ui: UiState,
}

impl TerminalHost {
    fn render(&mut self, overlay: Overlay<'_>) -> Result<()> {
        let theme = &self.theme;
        let view = &self.view;
        let ui = &self.ui;
        self.terminal
            .draw(|frame| draw_screen(frame, theme, view, ui, overlay))
            .context("failed to draw frame")?;
        Ok(())
    }

    /// Wait for the next terminal event from inside a blocking dialog.
    fn wait_for_event(&mut self) -> Option<Event> {
        let events = &mut self.events;
        let event = task::block_in_place(|| events.blocking_recv());
        if event.is_none() {
            self.ui.should_quit = true;
        }
        event
    }

    fn report(&mut self, outcome: &DispatchOutcome) {
        match outcome {
            DispatchOutcome::Drawn(record) if record.remaining == 0 => {
                let message = match self.view.winner.as_deref() {
                    Some(name) => format!("All numbers drawn. Winner: {name}. Press r to play again"),
                    None => "All numbers drawn. Press r to play again".to_string(),
                };
                self.ui.set_status(message);
            }
            DispatchOutcome::Drawn(record) => self.ui.set_status(format!(
                "Drew {} ({}), {} remaining",
                record.token,
                source_label(record.source),
                record.remaining
            )),
            DispatchOutcome::Ignored(err) => self.ui.set_status(format!("Ignored: {err}")),
            DispatchOutcome::AutoDraw(true) => self.ui.set_status("Auto-generate started"),
            DispatchOutcome::AutoDraw(false) => self.ui.set_status("Auto-generate stopped"),
            DispatchOutcome::Reset => {
                self.ui.set_status("New game: all 90 numbers are back in play")
            }
            DispatchOutcome::Unchanged => {}
        }
    }
}

impl SessionHost for TerminalHost {
    fn cell_drawn(&mut self, token: NumberToken) {
        self.view.mark(token);
    }

    fn cells_reset(&mut self) {
        self.view = BoardView::default();
    }

    fn announce(&mut self, token: NumberToken) -> Result<()> {
        self.ui.set_status(format!("Announcing {token}…"));
        self.render(Overlay::None)?;
        let speaker = &self.speaker;
        task::block_in_place(|| speaker.speak(&token.to_string()))
    }

    fn request_name(&mut self) -> NameEntry {
        let mut prompt = NamePromptModal::default();
        loop {
            if let Err(err) = self.render(Overlay::NamePrompt(&prompt)) {
                warn!(?err, "Failed to draw name prompt");
                return NameEntry::cancelled();
            }
            let Some(event) = self.wait_for_event() else {
                return NameEntry::cancelled();
            };
            let Event::Key(key) = event else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => return NameEntry::cancelled(),
                KeyCode::Enter => return NameEntry::confirmed(prompt.input),
                KeyCode::Left => prompt.move_cursor(-1),
                KeyCode::Right => prompt.move_cursor(1),
                KeyCode::Home => prompt.move_home(),
                KeyCode::End => prompt.move_end(),
                KeyCode::Backspace => prompt.backspace(),
                KeyCode::Delete => prompt.delete(),
                KeyCode::Char(ch) => {
                    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                        prompt.insert(ch);
                    }
                }
                _ => {}
            }
        }
    }

    fn congratulate(&mut self, name: &str) {
        let text = format!("Congratulations, {name}! You are the winner!");
        loop {
            let overlay = Overlay::Message {
                title: "Congratulations!",
                text: &text,
            };
            if let Err(err) = self.render(overlay) {
                warn!(?err, "Failed to draw congratulation");
                return;
            }
            match self.wait_for_event() {
                None => return,
                Some(Event::Key(key))
                    if key.kind == KeyEventKind::Press
                        && matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) =>
                {
                    return
                }
                Some(_) => {}
            }
        }
    }
}

/// Terminal application driving one [`GameSession`].
pub struct BingoApp {
    session: GameSession,
    speaker: Speaker,
    auto_draw_interval: Duration,
}

impl BingoApp {
    pub fn new(session: GameSession, speaker: Speaker, auto_draw_interval: Duration) -> Self {
        Self {
            session,
            speaker,
            auto_draw_interval,
        }
    }

    pub async fn run(self) -> Result<()> {
        let Self {
            mut session,
            speaker,
            auto_draw_interval,
        } = self;

        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, event_rx) = mpsc::channel::<Event>(128);
        spawn_input_thread(event_tx);

        let mut host = TerminalHost {
            terminal,
            events: event_rx,
            speaker,
            theme: Theme::default(),
            view: BoardView::default(),
            ui: UiState::default(),
        };
        host.view.sync(&session);
        host.ui
            .set_status("Press g to draw a number or a to start auto-generate");
        info!(interval_ms = auto_draw_interval.as_millis() as u64, "Game started");

        let result = event_loop(&mut session, &mut host, auto_draw_interval).await;
        restore_terminal(&mut host.terminal)?;
        info!(remaining = session.remaining(), "Game closed");
        result
    }
}

async fn event_loop(
    session: &mut GameSession,
    host: &mut TerminalHost,
    auto_draw_interval: Duration,
) -> Result<()> {
    let mut ticker = time::interval(auto_draw_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        host.render(Overlay::None)?;
        if host.ui.should_quit {
            break;
        }

        let auto_draw = session.auto_draw_active();
        let input = tokio::select! {
            maybe_event = host.events.recv() => match maybe_event {
                Some(event) => Some(event),
                None => break,
            },
            _ = ticker.tick(), if auto_draw => None,
        };

        let outcome = match input {
            Some(event) => handle_input(session, host, event),
            None => Some(session.dispatch(GameEvent::TimerTick, host)),
        };
        if let Some(outcome) = outcome {
            if outcome == DispatchOutcome::AutoDraw(true) {
                ticker.reset();
            }
            host.view.sync(session);
            host.report(&outcome);
        }
    }

    Ok(())
}

fn handle_input(
    session: &mut GameSession,
    host: &mut TerminalHost,
    event: Event,
) -> Option<DispatchOutcome> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(session, host, key),
        _ => None,
    }
}

fn handle_key(
    session: &mut GameSession,
    host: &mut TerminalHost,
    key: KeyEvent,
) -> Option<DispatchOutcome> {
    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        host.ui.should_quit = true;
        return None;
    }

    let complete = session.state() == SessionState::Complete;
    let event = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            host.ui.should_quit = true;
            return None;
        }
        KeyCode::Left | KeyCode::Char('h') => {
            host.ui.move_cursor(0, -1);
            return None;
        }
        KeyCode::Right | KeyCode::Char('l') => {
            host.ui.move_cursor(0, 1);
            return None;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            host.ui.move_cursor(-1, 0);
            return None;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            host.ui.move_cursor(1, 0);
            return None;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let token = host.ui.selected()?;
            // Drawn cells are disabled and never reach the session.
            if host.view.is_drawn(token) {
                host.ui.set_status(format!("{token} is already drawn"));
                return None;
            }
            GameEvent::CellActivated(token)
        }
        KeyCode::Char('g') | KeyCode::Char('a') if complete => {
            host.ui
                .set_status("All numbers have been drawn. Press r to reset");
            return None;
        }
        KeyCode::Char('g') => GameEvent::GenerateRequested,
        KeyCode::Char('a') => GameEvent::AutoStartRequested,
        KeyCode::Char('s') => GameEvent::AutoStopRequested,
        KeyCode::Char('r') => GameEvent::ResetRequested,
        _ => return None,
    };

    debug!(?event, "Dispatching");
    Some(session.dispatch(event, host))
}

fn source_label(source: DrawSource) -> &'static str {
    match source {
        DrawSource::Cell => "picked",
        DrawSource::Generate => "generated",
        DrawSource::Auto => "auto",
    }
}

fn state_label(state: SessionState) -> &'static str {
    match state {
        SessionState::Idle => "Idle",
        SessionState::AutoDrawing => "Auto-generating",
        SessionState::Complete => "Complete",
    }
}

fn draw_screen(
    frame: &mut Frame,
    theme: &Theme,
    view: &BoardView,
    ui: &UiState,
    overlay: Overlay<'_>,
) {
    let area = frame.size();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let message = format!(
            "Terminal too small ({}x{}); resize to at least {MIN_WIDTH}x{MIN_HEIGHT}",
            area.width, area.height
        );
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(block_font::HEIGHT as u16 + 2),
            Constraint::Length(GRID_ROWS as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[3]);

    render_header(frame, rows[0], theme, view);
    render_grid(frame, rows[1], theme, view, ui);
    render_controls(frame, rows[2], theme, view);
    render_recent(frame, bottom[0], theme, view);
    render_status(frame, bottom[1], ui);

    match overlay {
        Overlay::None => {}
        Overlay::NamePrompt(prompt) => render_name_prompt(frame, theme, prompt),
        Overlay::Message { title, text } => render_message(frame, theme, title, text),
    }
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme, view: &BoardView) {
    let block = Block::default().borders(Borders::ALL).title(WINDOW_TITLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(inner);

    let banner_text = view
        .last
        .map(|token| token.to_string())
        .unwrap_or_else(|| "-".to_string());
    let banner: Vec<Line> = block_font::render(&banner_text)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(theme.score))))
        .collect();
    frame.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        columns[0],
    );

    let current = view.last.map(NumberToken::value).unwrap_or(0);
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Current Token : {current}"),
            Style::default().fg(theme.score).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Tokens Remaining: {}", view.remaining),
            Style::default()
                .fg(theme.remaining)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("State: ", Style::default().fg(theme.muted)),
            Span::raw(state_label(view.state)),
        ]),
    ];
    if let Some(winner) = view.winner.as_deref() {
        lines.push(Line::from(vec![
            Span::styled("Winner: ", Style::default().fg(theme.muted)),
            Span::styled(winner.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), columns[1]);
}

fn render_grid(frame: &mut Frame, area: Rect, theme: &Theme, view: &BoardView, ui: &UiState) {
    let selected = ui.selected();
    let lines: Vec<Line> = (0..GRID_ROWS)
        .map(|row| {
            let mut spans = Vec::with_capacity(GRID_COLUMNS * 2);
            for col in 0..GRID_COLUMNS {
                let Some(token) = NumberToken::at(row, col) else {
                    continue;
                };
                let mut style = if view.is_drawn(token) {
                    Style::default().fg(theme.cell_fg).bg(theme.drawn_bg)
                } else {
                    Style::default().fg(theme.cell_fg).bg(theme.cell_bg)
                };
                if Some(token) == view.last {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if Some(token) == selected {
                    style = style.bg(theme.cursor_bg).add_modifier(Modifier::REVERSED);
                }
                if col > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!(" {:>2} ", token.value()), style));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Numbers"))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_controls(frame: &mut Frame, area: Rect, theme: &Theme, view: &BoardView) {
    let complete = view.state == SessionState::Complete;
    let button = |key: &str, label: &str, color: Color, enabled: bool| {
        let style = if enabled {
            Style::default().fg(theme.primary_fg).bg(color)
        } else {
            Style::default().fg(theme.muted)
        };
        vec![
            Span::styled(format!(" {key} "), style.add_modifier(Modifier::BOLD)),
            Span::styled(format!("{label} "), style),
            Span::raw("  "),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(button("g", "Generate number", theme.generate, !complete));
    spans.extend(button(
        "a",
        "Start Auto-Generate",
        theme.auto_start,
        !complete && view.state != SessionState::AutoDrawing,
    ));
    spans.extend(button(
        "s",
        "Stop Auto-Generate",
        theme.auto_stop,
        view.state == SessionState::AutoDrawing,
    ));
    spans.extend(button("r", "Reset Game", theme.reset, true));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Controls"))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_recent(frame: &mut Frame, area: Rect, theme: &Theme, view: &BoardView) {
    let items: Vec<ListItem> = if view.recent.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No numbers drawn yet",
            Style::default().fg(theme.muted),
        )))]
    } else {
        view.recent
            .iter()
            .map(|record| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>2}", record.token.value()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  {:<9}", source_label(record.source))),
                    Span::styled(
                        record.drawn_at.format("%H:%M:%S").to_string(),
                        Style::default().fg(theme.muted),
                    ),
                ]))
            })
            .collect()
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Recent draws"));
    frame.render_widget(list, area);
}

fn render_status(frame: &mut Frame, area: Rect, ui: &UiState) {
    let help = "arrows move  enter pick  q quit";
    let paragraph = Paragraph::new(vec![Line::from(ui.status.clone()), Line::from(""), Line::from(help)])
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_name_prompt(frame: &mut Frame, theme: &Theme, prompt: &NamePromptModal) {
    let frame_area = frame.size();
    let width = cmp::max(cmp::min(50_u16, frame_area.width.saturating_sub(4)), 24_u16);
    let area = centered_rect(width, 7, frame_area);
    frame.render_widget(Clear, area);

    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(theme.score)),
        Span::raw(prompt.input.clone()),
    ]);
    let helper = Line::from(vec![
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ok  "),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" cancel"),
    ]);
    let paragraph = Paragraph::new(vec![
        Line::from("Please enter your name:"),
        input_line,
        Line::from(""),
        helper,
    ])
    .block(Block::default().borders(Borders::ALL).title("Enter Your Name"))
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);

    let cursor_x = (area.x + 3 + prompt.cursor as u16).min(area.x + area.width.saturating_sub(2));
    frame.set_cursor(cursor_x, area.y + 2);
}

fn render_message(frame: &mut Frame, theme: &Theme, title: &str, text: &str) {
    let frame_area = frame.size();
    let width = cmp::min(text.chars().count() as u16 + 6, frame_area.width.saturating_sub(4));
    let area = centered_rect(width, 6, frame_area);
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(theme.score).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default().add_modifier(Modifier::REVERSED),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).title(title.to_string()))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<Event>) {
    thread::spawn(move || loop {
        match event::poll(INPUT_POLL) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(evt).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.is_closed() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}
