use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Action;
use crate::domain::models::Conversation;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::TextArea;
use crate::domain::services::AppState;

fn render_sidebar<B: Backend>(app_state: &AppState<'_>, frame: &mut Frame<B>, rect: Rect) {
    let active_name = Conversation::derive_name(&app_state.sessions.active.messages);
    let mut lines = vec![
        Line::from(Span::styled(
            active_name,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if app_state.sessions.archive.is_empty() {
        lines.push(Line::from("No previous chats yet."));
    } else {
        for (idx, conversation) in app_state.sessions.archive.iter().enumerate() {
            let mut style = Style::default();
            if idx == app_state.sidebar_index {
                style = style.add_modifier(Modifier::REVERSED);
            }

            lines.push(Line::from(Span::styled(
                conversation.name.to_string(),
                style,
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Chat History")),
        rect,
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut textarea = TextArea::default();
    let loading = Loading::default();

    #[cfg(feature = "dev")]
    {
        let test_str = "A logistics customer wants to predict delivery delays across 3000 daily routes using historical GPS traces and weather data.";
        for char in test_str.chars() {
            textarea.input(Input {
                key: Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
    }

    loop {
        terminal.draw(|frame| {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Max(26), Constraint::Min(1)])
                .split(frame.size());

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(1), Constraint::Max(4)])
                .split(columns[1]);

            render_sidebar(app_state, frame, columns[0]);

            if layout[0].width != app_state.last_known_width
                || layout[0].height != app_state.last_known_height
            {
                app_state.set_rect(layout[0]);
            }

            app_state
                .bubble_list
                .render(frame, layout[0], app_state.scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[0].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            if app_state.waiting_for_backend {
                loading.render(frame, layout[1]);
            } else {
                frame.render_widget(textarea.widget(), layout[1]);
            }
        })?;

        // While a query is in flight only service events are processed, so a
        // second submission cannot start and the in-flight one cannot be
        // cancelled.
        if app_state.waiting_for_backend {
            let event = rx.recv().await;
            if event.is_none() {
                continue;
            }

            match event.unwrap() {
                Event::ChatReply(reply) => {
                    app_state.handle_reply(reply);
                }
            }

            continue;
        }

        match crossterm::event::read()?.into() {
            Input { key: Key::Down, .. } => {
                app_state.scroll.down();
            }
            Input { key: Key::Up, .. } => {
                app_state.scroll.up();
            }
            Input {
                key: Key::Char('d'),
                ctrl: true,
                ..
            } => {
                app_state.scroll.down_page();
            }
            Input {
                key: Key::Char('u'),
                ctrl: true,
                ..
            } => {
                app_state.scroll.up_page();
            }
            Input {
                key: Key::Char('n'),
                ctrl: true,
                ..
            } => {
                app_state.start_new_chat();
            }
            Input {
                key: Key::Char('p'),
                ctrl: true,
                ..
            } => {
                app_state.sidebar_cycle();
            }
            Input {
                key: Key::Char('o'),
                ctrl: true,
                ..
            } => {
                app_state.open_selected();
            }
            Input {
                key: Key::Char('c'),
                ctrl: true,
                ..
            } => {
                break;
            }
            Input {
                key: Key::Enter, ..
            } => {
                let input_str = &textarea.lines().join("\n");
                if input_str.is_empty() {
                    continue;
                }

                textarea = TextArea::default();
                let prompt = app_state.submit_query(input_str);
                tx.send(Action::SubmitQuery(prompt))?;
            }
            input => {
                textarea.input(input);
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;
    let mut app_state = AppState::new();

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
