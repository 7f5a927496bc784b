use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use crate::Theme;
use crate::command::Command;
use crate::config::{GlobalAction, KeyResolver};
use crate::showcase::users::User;
use crate::showcase::{InputShowcase, TableShowcase};
use crate::tui::{Event, Tui};
use crate::ui::{
    Component, EventResult, HelpEvent, HelpOverlay, KeybindingSection, STATUS_BAR_HEIGHT, Screen,
    StatusBar, TAB_BAR_HEIGHT, TabBar,
};

const FRAME_RATE: f64 = 30.0;
const TICK_RATE: f64 = 8.0;

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Tab {
    #[default]
    Input,
    Table,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::Input, Self::Table];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Input => "InputField",
            Self::Table => "DataTable",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Input => 0,
            Self::Table => 1,
        }
    }

    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct App {
    tab: Tab,
    input: InputShowcase,
    table: TableShowcase,
    help: Option<HelpOverlay>,
    tab_bar: TabBar,
    status_bar: StatusBar,
    theme: Theme,
    resolver: Arc<KeyResolver>,
    should_quit: bool,
    should_suspend: bool,
    command_tx: UnboundedSender<Command>,
    command_rx: UnboundedReceiver<Command>,
}

impl App {
    pub fn new(
        users: Vec<User>,
        source: Option<PathBuf>,
        resolver: Arc<KeyResolver>,
        theme: Theme,
        tab: Tab,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        Self {
            tab,
            input: InputShowcase::new(resolver.clone()),
            table: TableShowcase::new(users, source, resolver.clone()),
            help: None,
            tab_bar: TabBar::new(Tab::ALL.iter().map(|t| t.title()).collect()),
            status_bar: StatusBar::new(resolver.clone()),
            theme,
            resolver,
            should_quit: false,
            should_suspend: false,
            command_tx,
            command_rx,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new(FRAME_RATE, TICK_RATE)?;
        tui.enter()?;

        loop {
            self.handle_events(&mut tui).await?;
            self.handle_commands(&mut tui)?;
            if self.should_suspend {
                tui.suspend()?;
                self.command_tx.send(Command::Resume)?;
                self.command_tx.send(Command::ClearScreen)?;
                tui.resume()?;
            } else if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        info!("Exiting");
        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        let Some(event) = tui.next_event().await else {
            return Ok(());
        };

        match event {
            Event::Quit => self.command_tx.send(Command::Quit)?,
            Event::Tick => self.command_tx.send(Command::Tick)?,
            Event::Render => self.command_tx.send(Command::Render)?,
            Event::Resize(width, height) => self.command_tx.send(Command::Resize(width, height))?,
            Event::Key(key) => self.handle_key_event(key)?,
            Event::Error(message) => error!("Terminal event error: {message}"),
            Event::Init => {}
        }
        Ok(())
    }

    fn active_screen(&mut self) -> &mut dyn Screen {
        match self.tab {
            Tab::Input => &mut self.input,
            Tab::Table => &mut self.table,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> color_eyre::Result<()> {
        if let Some(help) = &mut self.help {
            if let EventResult::Event(HelpEvent::Close) = help.handle_key(key)? {
                self.command_tx.send(Command::CloseHelp)?;
            }
            return Ok(());
        }

        if self.active_screen().handle_key(key)?.is_consumed() {
            return Ok(());
        }

        let command = if self.resolver.matches_global(&key, GlobalAction::Quit) {
            Command::Quit
        } else if self.resolver.matches_global(&key, GlobalAction::Help) {
            Command::ShowHelp
        } else if self.resolver.matches_global(&key, GlobalAction::Theme) {
            Command::ToggleTheme
        } else if self.resolver.matches_global(&key, GlobalAction::NextTab) {
            Command::SelectTab(self.tab.next())
        } else if self.resolver.matches_global(&key, GlobalAction::PrevTab) {
            Command::SelectTab(self.tab.prev())
        } else if key.code == KeyCode::Char('z') && key.modifiers.contains(KeyModifiers::CONTROL) {
            Command::Suspend
        } else {
            return Ok(());
        };
        self.command_tx.send(command)?;
        Ok(())
    }

    fn handle_commands(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        while let Ok(command) = self.command_rx.try_recv() {
            match command {
                Command::ClearScreen => tui.clear()?,
                Command::Resize(width, height) => {
                    tui.resize(Rect::new(0, 0, width, height))?;
                    tui.draw(|frame| self.draw(frame))?;
                }
                Command::Render => {
                    tui.draw(|frame| self.draw(frame))?;
                }
                command => self.update(command),
            }
        }
        Ok(())
    }

    fn update(&mut self, command: Command) {
        if !matches!(command, Command::Tick) {
            debug!("Handling command: {:?}", command);
        }

        match command {
            Command::Tick => {
                self.input.handle_tick();
                self.table.handle_tick();
            }
            Command::Quit => self.should_quit = true,
            Command::Suspend => self.should_suspend = true,
            Command::Resume => self.should_suspend = false,
            Command::ShowHelp => self.help = Some(HelpOverlay::new(self.help_sections())),
            Command::CloseHelp => self.help = None,
            Command::ToggleTheme => {
                self.theme = self.theme.toggled();
                info!(theme = self.theme.name, "Switched theme");
            }
            Command::SelectTab(tab) => {
                self.tab = tab;
                self.help = None;
            }
            Command::Render | Command::Resize(..) | Command::ClearScreen => {}
        }
    }

    fn help_sections(&mut self) -> Vec<KeybindingSection> {
        let page = self.active_screen().keybindings();
        vec![
            KeybindingSection::new(self.tab.title(), page),
            KeybindingSection::new("Global", self.status_bar.global_keybindings()),
        ]
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        let theme = self.theme;
        self.tab_bar.render(frame, header, &theme, self.tab.index());

        let body = body.inner(ratatui::layout::Margin::new(1, 0));
        self.active_screen().render(frame, body, &theme);

        let keybindings = self.active_screen().keybindings();
        self.status_bar
            .render_with_keybindings(frame, footer, &theme, &keybindings);

        if let Some(help) = &mut self.help {
            help.render(frame, area, &theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::users::sample_users;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(
            sample_users(),
            None,
            Arc::new(KeyResolver::default()),
            Theme::default(),
            Tab::default(),
        )
    }

    fn press(app: &mut App, key: KeyEvent) {
        app.handle_key_event(key).unwrap();
        while let Ok(command) = app.command_rx.try_recv() {
            app.update(command);
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_tab_order_wraps() {
        assert_eq!(Tab::Input.next(), Tab::Table);
        assert_eq!(Tab::Table.next(), Tab::Input);
        assert_eq!(Tab::Input.prev(), Tab::Table);
    }

    #[test]
    fn test_focused_field_keeps_plain_characters() {
        let mut app = app();
        press(&mut app, plain(KeyCode::Char('q')));
        assert!(!app.should_quit);

        press(&mut app, ctrl('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_switch_tabs_and_quit_from_table() {
        let mut app = app();
        press(&mut app, ctrl('n'));
        assert_eq!(app.tab, Tab::Table);
        assert!(screen_text(&mut app).contains("Alice Johnson"));

        press(&mut app, plain(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        press(&mut app, plain(KeyCode::F(1)));
        assert!(app.help.is_some());
        assert!(screen_text(&mut app).contains("Global"));

        press(&mut app, ctrl('n'));
        assert_eq!(app.tab, Tab::Input);

        press(&mut app, plain(KeyCode::Esc));
        assert!(app.help.is_none());
    }

    #[test]
    fn test_theme_toggle_is_app_state() {
        let mut app = app();
        let before = app.theme.appearance;
        press(&mut app, plain(KeyCode::F(2)));
        assert_ne!(app.theme.appearance, before);
        assert!(screen_text(&mut app).contains(app.theme.name));
    }
}
