use std::{io, thread, time::Duration};

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use handicap_core::{
    calc::HandicapSource,
    config::AppConfig,
    course::{CourseDataStore, DatasetStatus, HoleCount, TeeConfiguration},
    models::{CourseData, CourseRating, HandicapIndex, Par, PlayerInput, SlopeRating},
    service,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

const TICK_RATE: Duration = Duration::from_millis(250);
const MAX_FIELD_LEN: usize = 8;

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    accent: Color,
    muted: Color,
    success: Color,
    warning: Color,
    danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    General,
    Singles,
    Foursomes,
    Course,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::General, Tab::Singles, Tab::Foursomes, Tab::Course];

    fn title(self) -> &'static str {
        match self {
            Tab::General => "Course Handicap",
            Tab::Singles => "Singles Match",
            Tab::Foursomes => "Foursomes Match",
            Tab::Course => "Course Table",
        }
    }

    fn position(self) -> usize {
        Tab::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    fn step(self, delta: isize) -> Tab {
        let len = Tab::ALL.len() as isize;
        let next = (self.position() as isize + delta).rem_euclid(len);
        Tab::ALL[next as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Decimal,
    Integer,
}

/// Single-line numeric input with a cursor.
#[derive(Debug, Clone)]
struct NumericField {
    label: &'static str,
    kind: FieldKind,
    input: String,
    cursor: usize,
}

impl NumericField {
    fn new(label: &'static str, kind: FieldKind, default: &str) -> Self {
        Self {
            label,
            kind,
            input: default.to_string(),
            cursor: default.len(),
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.input.len() as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, len) as usize;
    }

    fn move_home(&mut self) {
        self.cursor = 0;
    }

    fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Insert a character if the field accepts it. Returns whether it was inserted.
    fn insert(&mut self, ch: char) -> bool {
        let ch = if ch == ',' { '.' } else { ch };
        let accepted = match ch {
            '0'..='9' => true,
            '-' => self.cursor == 0 && !self.input.starts_with('-'),
            '.' => self.kind == FieldKind::Decimal && !self.input.contains('.'),
            _ => false,
        };
        if !accepted || self.input.len() >= MAX_FIELD_LEN {
            return false;
        }
        self.input.insert(self.cursor, ch);
        self.cursor += 1;
        true
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.input.remove(self.cursor);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.input.len() {
            self.input.remove(self.cursor);
        }
    }

    fn decimal(&self) -> Result<f64> {
        self.input
            .trim()
            .parse::<f64>()
            .map_err(|_| anyhow!("{} is not a number", self.label))
    }

    fn integer(&self) -> Result<i32> {
        self.input
            .trim()
            .parse::<i32>()
            .map_err(|_| anyhow!("{} must be a whole number", self.label))
    }

    fn render(&self, focused: bool, theme: &Theme) -> Line<'static> {
        if focused {
            let (before, after) = self.input.split_at(self.cursor);
            Line::from(vec![
                Span::styled(
                    format!("▶ {:<24}", self.label),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(before.to_string()),
                Span::styled("▏", Style::default().fg(theme.accent)),
                Span::raw(after.to_string()),
            ])
        } else {
            Line::from(vec![
                Span::styled(
                    format!("  {:<24}", self.label),
                    Style::default().fg(theme.primary_fg),
                ),
                Span::raw(self.input.clone()),
            ])
        }
    }
}

#[derive(Debug, Clone)]
struct FormState {
    fields: Vec<NumericField>,
    focus: usize,
    output: Vec<String>,
    error: Option<String>,
}

impl FormState {
    fn new(fields: Vec<NumericField>) -> Self {
        Self {
            fields,
            focus: 0,
            output: Vec::new(),
            error: None,
        }
    }

    fn general() -> Self {
        Self::new(vec![
            NumericField::new("Handicap index", FieldKind::Decimal, "18.0"),
            NumericField::new("Slope rating", FieldKind::Integer, "125"),
            NumericField::new("Course rating", FieldKind::Decimal, "71.0"),
            NumericField::new("Par", FieldKind::Integer, "72"),
        ])
    }

    fn singles() -> Self {
        Self::new(vec![
            NumericField::new("Index player 1", FieldKind::Decimal, "10.0"),
            NumericField::new("Index player 2", FieldKind::Decimal, "20.5"),
            NumericField::new("Slope rating", FieldKind::Integer, "130"),
            NumericField::new("Course rating", FieldKind::Decimal, "72.1"),
            NumericField::new("Par", FieldKind::Integer, "72"),
        ])
    }

    fn foursomes() -> Self {
        Self::new(vec![
            NumericField::new("Index player A (team 1)", FieldKind::Decimal, "8.0"),
            NumericField::new("Index player B (team 1)", FieldKind::Decimal, "15.0"),
            NumericField::new("Index player C (team 2)", FieldKind::Decimal, "12.0"),
            NumericField::new("Index player D (team 2)", FieldKind::Decimal, "22.0"),
            NumericField::new("Slope rating", FieldKind::Integer, "128"),
            NumericField::new("Course rating", FieldKind::Decimal, "71.5"),
            NumericField::new("Par", FieldKind::Integer, "72"),
        ])
    }

    fn course() -> Self {
        Self::new(vec![NumericField::new(
            "Handicap index",
            FieldKind::Decimal,
            "18.0",
        )])
    }

    fn move_focus(&mut self, delta: isize) {
        if self.fields.is_empty() {
            return;
        }
        let len = self.fields.len() as isize;
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
    }

    fn focused_mut(&mut self) -> Option<&mut NumericField> {
        self.fields.get_mut(self.focus)
    }

    fn field(&self, idx: usize) -> Result<&NumericField> {
        self.fields
            .get(idx)
            .ok_or_else(|| anyhow!("form field {idx} missing"))
    }

    fn course_data(&self, first: usize) -> Result<CourseData> {
        Ok(CourseData::new(
            self.field(first)?.integer()?,
            self.field(first + 1)?.decimal()?,
            self.field(first + 2)?.integer()?,
        )?)
    }

    fn index(&self, idx: usize) -> Result<HandicapIndex> {
        Ok(HandicapIndex::new(self.field(idx)?.decimal()?)?)
    }
}

/// Category and tee choices offered by the loaded dataset.
#[derive(Debug, Clone, Default)]
struct CourseSelection {
    categories: Vec<String>,
    category: usize,
    tees: Vec<String>,
    tee: usize,
}

impl CourseSelection {
    fn current_category(&self) -> Option<&str> {
        self.categories.get(self.category).map(String::as_str)
    }

    fn current_tee(&self) -> Option<&str> {
        self.tees.get(self.tee).map(String::as_str)
    }
}

enum AppEvent {
    Input(Event),
    Tick,
}

/// Terminal front end for the handicap calculator.
pub struct HandicapApp {
    store: CourseDataStore,
    tab: Tab,
    general: FormState,
    singles: FormState,
    foursomes: FormState,
    course: FormState,
    selection: CourseSelection,
    status: String,
    dataset_notice: Option<String>,
    should_quit: bool,
    theme: Theme,
}

impl HandicapApp {
    pub fn new(store: CourseDataStore, config: &AppConfig) -> Self {
        let mut app = Self {
            store,
            tab: Tab::General,
            general: FormState::general(),
            singles: FormState::singles(),
            foursomes: FormState::foursomes(),
            course: FormState::course(),
            selection: CourseSelection::default(),
            status: "Ready".to_string(),
            dataset_notice: None,
            should_quit: false,
            theme: Theme::default(),
        };
        app.init_dataset(config.default_category.as_deref());
        app
    }

    fn init_dataset(&mut self, preferred_category: Option<&str>) {
        let report = self.store.report();
        match &report.status {
            DatasetStatus::Ready => {
                let loaded_at = report.loaded_at.with_timezone(&Local).format("%H:%M:%S");
                self.status = format!(
                    "Loaded course data for {} ({} layouts) at {loaded_at}",
                    report.dataset.club,
                    report.dataset.variants.len()
                );
                if !report.issues.is_empty() {
                    self.dataset_notice = Some(skipped_entries_notice(report.issues.len()));
                }
                self.selection.categories = report
                    .dataset
                    .categories()
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                if let Some(preferred) = preferred_category {
                    match self
                        .selection
                        .categories
                        .iter()
                        .position(|category| category == preferred)
                    {
                        Some(idx) => self.selection.category = idx,
                        None => warn!(category = preferred, "Configured category not in dataset"),
                    }
                }
                self.refresh_tees();
            }
            DatasetStatus::Unavailable(_) | DatasetStatus::InvalidFormat(_) => {
                let message = report
                    .error()
                    .map(|err| err.to_string())
                    .unwrap_or_default();
                self.dataset_notice = Some(format!(
                    "{message}. Manual entry is still available."
                ));
                self.status = "Course table disabled".to_string();
            }
        }
    }

    fn refresh_tees(&mut self) {
        let report = self.store.report();
        self.selection.tees = self
            .selection
            .current_category()
            .map(|category| {
                report
                    .dataset
                    .category_tee_colors(category)
                    .into_iter()
                    .collect()
            })
            .unwrap_or_default();
        self.selection.tee = 0;
    }

    fn cycle_category(&mut self, delta: isize) {
        let len = self.selection.categories.len() as isize;
        if len == 0 {
            self.status = "No categories available".to_string();
            return;
        }
        self.selection.category =
            (self.selection.category as isize + delta).rem_euclid(len) as usize;
        self.refresh_tees();
        self.course.output.clear();
        self.course.error = None;
    }

    fn cycle_tee(&mut self, delta: isize) {
        let len = self.selection.tees.len() as isize;
        if len == 0 {
            self.status = "No tees available for this category".to_string();
            return;
        }
        self.selection.tee = (self.selection.tee as isize + delta).rem_euclid(len) as usize;
        self.course.output.clear();
        self.course.error = None;
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx);

        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.should_quit {
                break;
            }
            match event_rx.recv().await {
                Some(AppEvent::Input(Event::Key(key))) => self.handle_key(key),
                Some(AppEvent::Input(_)) | Some(AppEvent::Tick) => {}
                None => break,
            }
        }

        restore_terminal(&mut terminal)?;
        Ok(())
    }

    fn form(&self, tab: Tab) -> &FormState {
        match tab {
            Tab::General => &self.general,
            Tab::Singles => &self.singles,
            Tab::Foursomes => &self.foursomes,
            Tab::Course => &self.course,
        }
    }

    fn form_mut(&mut self, tab: Tab) -> &mut FormState {
        match tab {
            Tab::General => &mut self.general,
            Tab::Singles => &mut self.singles,
            Tab::Foursomes => &mut self.foursomes,
            Tab::Course => &mut self.course,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let tab = self.tab;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.tab = tab.step(1),
            KeyCode::BackTab => self.tab = tab.step(-1),
            KeyCode::F(n @ 1..=4) => self.tab = Tab::ALL[n as usize - 1],
            KeyCode::Up => self.form_mut(tab).move_focus(-1),
            KeyCode::Down => self.form_mut(tab).move_focus(1),
            KeyCode::Enter => self.calculate(),
            KeyCode::Char('c') if tab == Tab::Course => self.cycle_category(1),
            KeyCode::Char('C') if tab == Tab::Course => self.cycle_category(-1),
            KeyCode::Char('t') if tab == Tab::Course => self.cycle_tee(1),
            KeyCode::Char('T') if tab == Tab::Course => self.cycle_tee(-1),
            code => {
                if let Some(field) = self.form_mut(tab).focused_mut() {
                    match code {
                        KeyCode::Left => field.move_cursor(-1),
                        KeyCode::Right => field.move_cursor(1),
                        KeyCode::Home => field.move_home(),
                        KeyCode::End => field.move_end(),
                        KeyCode::Backspace => field.backspace(),
                        KeyCode::Delete => field.delete(),
                        KeyCode::Char(ch) => {
                            field.insert(ch);
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    fn calculate(&mut self) {
        let tab = self.tab;
        let outcome = match tab {
            Tab::General => self.calculate_general(),
            Tab::Singles => self.calculate_singles(),
            Tab::Foursomes => self.calculate_foursomes(),
            Tab::Course => self.calculate_course(),
        };
        match outcome {
            Ok(lines) => {
                let form = self.form_mut(tab);
                form.output = lines;
                form.error = None;
                self.status = format!("{} calculated", tab.title());
            }
            Err(err) => {
                debug!(tab = tab.title(), %err, "Calculation rejected");
                let form = self.form_mut(tab);
                form.output.clear();
                form.error = Some(err.to_string());
                self.status = format!("Error: {err}");
            }
        }
    }

    fn calculate_general(&self) -> Result<Vec<String>> {
        let form = &self.general;
        let index = form.index(0)?;
        let course = form.course_data(1)?;
        let result = service::general_course_handicap(index, course);
        info!(
            index = index.value(),
            ch18 = result.course_handicap_18,
            ch9 = result.course_handicap_9,
            "Course handicap calculated"
        );
        Ok(vec![
            format!("18-hole course handicap: {}", result.course_handicap_18),
            format!("9-hole course handicap:  {}", result.course_handicap_9),
            String::new(),
            "For 9 holes, enter the slope, rating and par of the nine holes played.".to_string(),
        ])
    }

    fn calculate_singles(&self) -> Result<Vec<String>> {
        let form = &self.singles;
        let player1 = form.index(0)?;
        let player2 = form.index(1)?;
        let tee = TeeConfiguration::formula_only(form.course_data(2)?);
        let result = service::singles_match(player1, player2, &tee, HoleCount::Eighteen);
        info!(
            ch1 = result.handicaps.0,
            ch2 = result.handicaps.1,
            allowance = result.allowance,
            "Singles allowance calculated"
        );
        Ok(vec![
            format!("Course handicap player 1: {}", result.handicaps.0),
            format!("Course handicap player 2: {}", result.handicaps.1),
            format!("Strokes given: {}", result.allowance),
            String::new(),
            result.describe(),
        ])
    }

    fn calculate_foursomes(&self) -> Result<Vec<String>> {
        let form = &self.foursomes;
        let team1 = [form.index(0)?, form.index(1)?];
        let team2 = [form.index(2)?, form.index(3)?];
        let tee = TeeConfiguration::formula_only(form.course_data(4)?);
        let result = service::foursomes_match(team1, team2, &tee, HoleCount::Eighteen);
        let (label1, label2) = result.team_index_labels();
        info!(
            team1 = %label1,
            team2 = %label2,
            allowance = result.allowance,
            "Foursomes allowance calculated"
        );
        Ok(vec![
            format!("Team index team 1: {label1}"),
            format!("Team index team 2: {label2}"),
            format!("Team course handicap team 1: {}", result.handicaps.0),
            format!("Team course handicap team 2: {}", result.handicaps.1),
            format!("Strokes given: {}", result.allowance),
            String::new(),
            result.describe(),
        ])
    }

    fn calculate_course(&self) -> Result<Vec<String>> {
        let report = self.store.report();
        let dataset = report.require_dataset()?;
        let input = PlayerInput {
            index: self.course.index(0)?,
            category: self.selection.current_category().map(str::to_string),
            tee: self.selection.current_tee().map(str::to_string),
        };
        let result = service::table_lookup(dataset, &input)?;

        let mut lines = vec![format!(
            "{} · {} · {} · index {}",
            dataset.club, result.category, result.tee_color, input.index
        )];
        match result.eighteen {
            Some(resolved) => {
                let origin = match resolved.source {
                    HandicapSource::Table => "handicap table",
                    HandicapSource::Formula => "formula",
                };
                lines.push(format!(
                    "18-hole course handicap: {} ({origin})",
                    resolved.value
                ));
            }
            None => lines.push("18-hole course: tee not offered".to_string()),
        }
        match result.nine {
            Some(nine) => {
                lines.push(format!(
                    "9-hole course handicap:  {} (formula)",
                    nine.course_handicap
                ));
                if let Some(table) = nine.table_value.filter(|v| *v != nine.course_handicap) {
                    lines.push(format!("9-hole table lists {table} (informational only)"));
                }
            }
            None => lines.push("9-hole course: tee not offered".to_string()),
        }
        Ok(lines)
    }

    fn draw(&mut self, frame: &mut Frame) {
        let size = frame.size();
        let mut constraints = vec![Constraint::Length(3)];
        if self.dataset_notice.is_some() {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Min(8));
        constraints.push(Constraint::Length(4));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(size);

        let mut chunk_iter = chunks.iter().copied();
        let tabs_chunk = chunk_iter.next().unwrap_or(size);
        let notice_chunk = if self.dataset_notice.is_some() {
            chunk_iter.next()
        } else {
            None
        };
        let body_chunk = chunk_iter.next().unwrap_or(size);
        let status_chunk = chunk_iter.next().unwrap_or(size);

        self.render_tabs(frame, tabs_chunk);
        if let (Some(notice), Some(area)) = (self.dataset_notice.as_ref(), notice_chunk) {
            self.render_notice(frame, area, notice);
        }

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(body_chunk);
        self.render_form(frame, body[0]);
        self.render_output(frame, body[1]);
        self.render_status(frame, status_chunk);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(idx, tab)| Line::from(format!("F{} {}", idx + 1, tab.title())))
            .collect();
        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Handicap Calculator"),
            )
            .select(self.tab.position())
            .style(Style::default().fg(self.theme.muted))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn render_notice(&self, frame: &mut Frame, area: Rect, notice: &str) {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(self.theme.warning),
        )))
        .block(Block::default().borders(Borders::ALL).title("Course Data"))
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let form = self.form(self.tab);
        let mut lines = Vec::new();
        if self.tab == Tab::Course {
            let category = self.selection.current_category().unwrap_or("-");
            let tee = self.selection.current_tee().unwrap_or("-");
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<24}", "Category [c]"),
                    Style::default().fg(self.theme.primary_fg),
                ),
                Span::styled(
                    format!("◀ {category} ▶"),
                    Style::default().fg(self.theme.accent),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<24}", "Tee [t]"),
                    Style::default().fg(self.theme.primary_fg),
                ),
                Span::styled(format!("◀ {tee} ▶"), Style::default().fg(self.theme.accent)),
            ]));
            lines.push(Line::from(""));
        }
        lines.extend(
            form.fields
                .iter()
                .enumerate()
                .map(|(idx, field)| field.render(idx == form.focus, &self.theme)),
        );

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.tab.title()),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_output(&self, frame: &mut Frame, area: Rect) {
        let form = self.form(self.tab);
        let lines: Vec<Line> = if let Some(error) = &form.error {
            vec![Line::from(Span::styled(
                error.clone(),
                Style::default().fg(self.theme.danger),
            ))]
        } else if form.output.is_empty() {
            vec![Line::from(Span::styled(
                "Press Enter to calculate.",
                Style::default().fg(self.theme.muted),
            ))]
        } else {
            form.output
                .iter()
                .enumerate()
                .map(|(idx, text)| {
                    let style = if idx == form.output.len() - 1 {
                        Style::default()
                            .fg(self.theme.success)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(self.theme.primary_fg)
                    };
                    Line::from(Span::styled(text.clone(), style))
                })
                .collect()
        };

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Result"))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Status");
        let mut help =
            "Tab/F1-F4 switch view • ↑/↓ field • Enter calculate • q quit".to_string();
        if self.tab == Tab::Course {
            help.push_str(" • c/t cycle category/tee");
        }
        let paragraph = Paragraph::new(vec![
            Line::from(self.status.clone()),
            Line::from(Span::styled(help, Style::default().fg(self.theme.muted))),
        ])
        .block(block)
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

/// Banner for entries dropped at load. 9-hole tees are held to the 18-hole ranges too.
fn skipped_entries_notice(count: usize) -> String {
    format!(
        "{count} dataset entries were skipped. Every tee, 9-hole included, needs SR {}-{}, \
         CR {}-{} and Par {}-{}; see the log for details.",
        SlopeRating::MIN,
        SlopeRating::MAX,
        CourseRating::MIN,
        CourseRating::MAX,
        Par::MIN,
        Par::MAX
    )
}
