use std::io;
use std::sync::Arc;

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
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::GatewayBox;
use crate::domain::models::Loading;
use crate::domain::models::SlashCommand;
use crate::domain::models::SourceStatus;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::infrastructure::gateway::http::HttpGateway;

fn source_list_items(app_state: &AppState) -> Vec<ListItem<'static>> {
    return app_state
        .connections
        .sources()
        .iter()
        .map(|source| {
            let (marker, color) = match &source.status {
                SourceStatus::Disconnected => ("○", Color::DarkGray),
                SourceStatus::Connecting => ("◌", Color::Blue),
                SourceStatus::Connected { .. } => ("●", Color::Green),
                SourceStatus::Error => ("✗", Color::Red),
            };

            let mut label = format!("{marker} {name} ({id})", name = source.name, id = source.id);
            if let SourceStatus::Connected { data_points, .. } = &source.status {
                label = format!("{label} · {data_points} pts");
            }

            return ListItem::new(Line::from(Span::styled(
                label,
                Style::default().fg(color),
            )));
        })
        .collect::<Vec<ListItem<'static>>>();
}

fn render<B: Backend>(
    frame: &mut Frame<B>,
    app_state: &mut AppState,
    textarea: &tui_textarea::TextArea<'_>,
    loading: &Loading,
) {
    let mut area = frame.size();

    if app_state.connections.demo_mode {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Max(1), Constraint::Min(1)])
            .split(area);

        frame.render_widget(
            Paragraph::new("Backend not available. Using demo mode.")
                .style(Style::default().fg(Color::Yellow)),
            rows[0],
        );
        area = rows[1];
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(34), Constraint::Min(1)])
        .split(area);

    frame.render_widget(
        List::new(source_list_items(app_state))
            .block(Block::default().borders(Borders::ALL).title("Data Sources")),
        columns[0],
    );

    let chat_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(1), Constraint::Max(4)])
        .split(columns[1]);

    if chat_rows[0].width != app_state.last_known_width
        || chat_rows[0].height != app_state.last_known_height
    {
        app_state.set_rect(chat_rows[0]);
    }

    app_state
        .message_list
        .render(frame, chat_rows[0], app_state.scroll.position);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        chat_rows[0].inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut app_state.scroll.scrollbar_state,
    );

    if app_state.chat.is_waiting() {
        loading.render(frame, chat_rows[1]);
    } else {
        frame.render_widget(textarea.widget(), chat_rows[1]);
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut textarea = TextArea::default();
    let loading = Loading::default();

    loop {
        terminal.draw(|frame| {
            render(frame, app_state, &textarea, &loading);
        })?;

        match events.next().await? {
            Event::KeyboardCTRLC() => break,
            Event::KeyboardEnter() => {
                let input_str = &textarea.lines().join("\n");
                if input_str.trim().is_empty() {
                    continue;
                }

                if let Some(command) = SlashCommand::parse(input_str) {
                    textarea = TextArea::default();
                    if app_state.handle_slash_command(&command, &tx)? {
                        break;
                    }
                    continue;
                }

                if app_state.chat.is_waiting() {
                    continue;
                }

                textarea = TextArea::default();
                app_state.send_chat(input_str, &tx)?;
            }
            Event::KeyboardCTRLR() => {
                if app_state.chat.is_waiting() {
                    continue;
                }

                if let Some(last_text) = app_state.chat.last_user_text() {
                    app_state.send_chat(&last_text, &tx)?;
                }
            }
            Event::KeyboardCharInput(input) => {
                if !app_state.chat.is_waiting() {
                    textarea.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                if !app_state.chat.is_waiting() {
                    textarea.insert_str(&text.replace('\r', "\n"));
                }
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UITick() => {}
            event => {
                app_state.apply_event(event);
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
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let gateway: GatewayBox = Arc::new(HttpGateway::default());
    let mut app_state = AppState::new(&gateway).await;
    let mut events = EventsService::new(rx);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, tx, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
