//! Viewer state and event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use hashbench_charts::ChartKind;
use hashbench_core::aggregator::AggregatedSummary;

use crate::chart::render_chart;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::table::render_table;

/// Interactive chart viewer over a finished summary.
pub struct ChartViewer {
    summary: AggregatedSummary,
    trials: usize,
    /// Index into [`ChartKind::ALL`].
    selected: usize,
    /// Whether the viewer should close.
    pub should_quit: bool,
}

impl ChartViewer {
    #[must_use]
    pub fn new(summary: AggregatedSummary, trials: usize) -> Self {
        Self {
            summary,
            trials,
            selected: 0,
            should_quit: false,
        }
    }

    /// Chart currently on screen.
    #[must_use]
    pub fn selected_kind(&self) -> ChartKind {
        ChartKind::ALL[self.selected]
    }

    pub fn handle_key_action(&mut self, action: KeyAction) {
        let count = ChartKind::ALL.len();
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextChart => self.selected = (self.selected + 1) % count,
            KeyAction::PrevChart => self.selected = (self.selected + count - 1) % count,
            KeyAction::Select(index) if index < count => self.selected = index,
            KeyAction::Select(_) | KeyAction::None => {}
        }
    }

    /// Split the screen into (header, chart, table, footer).
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(2),
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(outer[1]);

        (outer[0], body[0], body[1], outer[2])
    }

    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, chart_area, table_area, footer_area) =
            Self::compute_layout(frame.area());
        let kind = self.selected_kind();

        render_header(frame, header_area, self.selected, self.trials);
        render_chart(frame, chart_area, &self.summary, kind, self.trials);
        render_table(frame, table_area, &self.summary, kind);
        render_footer(frame, footer_area);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the viewer until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let action = map_key(key);
                        tracing::debug!(?action, "key");
                        self.handle_key_action(action);
                    }
                }
            }
        }
        Ok(())
    }
}
