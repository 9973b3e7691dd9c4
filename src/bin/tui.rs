use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use duottt::{view::BannerKind, view::CellView, Error, Mark, TicTacToe, View};
use sodium as na;
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

// No tracing subscriber here: stdout belongs to the terminal UI.
fn main() -> io::Result<()> {
    let ctx = na::SodiumCtx::new();

    let (kb_input, game) = ctx.transaction(|| {
        let kb_input: na::StreamSink<String> = ctx.new_stream_sink();
        let game = TicTacToe::new(&ctx, &kb_input.stream());
        (kb_input, game)
    });

    let TicTacToe {
        view, last_error, ..
    } = game;
    let ui = Ui { view, last_error };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, &ui, &kb_input);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    ui: &Ui,
    kb_input: &na::StreamSink<String>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui.draw(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char(c) => kb_input.send(c.to_string()),
                _ => {}
            }
        }
    }
}

struct Ui {
    view: na::Cell<View>,
    last_error: na::Cell<Option<Error>>,
}

impl Ui {
    fn draw<B: Backend>(&self, f: &mut Frame<B>) {
        let view = self.view.sample();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .margin(2)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)].as_ref())
            .split(f.size());
        let block = Block::default().title("Board").borders(Borders::ALL);
        self.draw_board(f, &view, block.inner(chunks[0]));
        f.render_widget(block, chunks[0]);

        let block = Block::default().title("Game Info").borders(Borders::ALL);
        self.draw_info(f, &view, block.inner(chunks[1]));
        f.render_widget(block, chunks[1]);
    }

    fn draw_board<B: Backend>(&self, f: &mut Frame<B>, view: &View, area: Rect) {
        let thirds = [
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ];
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(thirds.as_ref())
            .split(area);

        for (row, row_area) in rows.iter().enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .horizontal_margin(1)
                .constraints(thirds.as_ref())
                .split(*row_area);
            for (col, cell_area) in columns.iter().enumerate() {
                let index = row * 3 + col;
                f.render_widget(render_cell(index, &view.cells[index]), *cell_area);
            }
        }
    }

    fn draw_info<B: Backend>(&self, f: &mut Frame<B>, view: &View, area: Rect) {
        let banner_style = match view.banner.kind {
            BannerKind::XTurn => Style::default().fg(Color::Cyan),
            BannerKind::OTurn => Style::default().fg(Color::Magenta),
            BannerKind::WinnerX => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            BannerKind::WinnerO => {
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
            }
            BannerKind::Draw => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        };

        let mut lines = vec![
            Spans::from(Span::styled(view.banner.text.clone(), banner_style)),
            Spans::from(""),
        ];
        if let Some(err) = self.last_error.sample() {
            lines.push(Spans::from(Span::styled(
                err.to_string(),
                Style::default().fg(Color::Red),
            )));
            lines.push(Spans::from(""));
        }
        if view.input_enabled {
            lines.push(Spans::from("1-9: place a mark"));
        }
        lines.push(Spans::from("r: restart"));
        lines.push(Spans::from("q: quit"));

        f.render_widget(Paragraph::new(lines), area);
    }
}

fn render_cell(index: usize, cell: &CellView) -> Paragraph<'static> {
    let mut style = match cell.mark {
        Some(Mark::X) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Some(Mark::O) => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };
    let mut border_style = Style::default();
    if cell.winning {
        style = style.bg(Color::Green);
        border_style = border_style.fg(Color::Green);
    } else if cell.draw {
        border_style = border_style.fg(Color::Yellow);
    } else if cell.disabled {
        border_style = border_style.fg(Color::DarkGray);
    }

    let text = match cell.mark {
        Some(mark) => mark.to_string(),
        None if cell.disabled => String::new(),
        None => (index + 1).to_string(),
    };

    Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
}
