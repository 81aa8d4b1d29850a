use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glimpse_core::{Browser, ErrorKind, LOADING_STATUS};
use ratatui::{Terminal, backend::Backend, text::Text};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::{
    input::InputField,
    view::{self, ContentMetrics, ViewSnap},
};

const USAGE_HINT: &str = "Enter: load • Tab: switch focus • ↑/↓ PgUp/PgDn: scroll • Ctrl-C: quit";

/// Region receiving key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Url,
    Content,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Submit(String),
    Quit,
}

/// The view controller: the browsing session plus widget state.
pub struct App {
    browser: Browser,
    runtime: Runtime,

    // ui state
    input: InputField,
    focus: Focus,
    content: Text<'static>,
    scroll: u16,
    metrics: ContentMetrics,
    pending: Option<String>,
}

impl App {
    pub fn new(mut browser: Browser, runtime: Runtime) -> Self {
        browser.set_status(USAGE_HINT);
        Self {
            browser,
            runtime,
            input: InputField::default(),
            focus: Focus::Url,
            content: Text::default(),
            scroll: 0,
            metrics: ContentMetrics::default(),
            pending: None,
        }
    }

    /// Fills the URL field and loads it once the UI is up.
    pub fn open_on_start(&mut self, url: &str) {
        self.input.set_text(url);
        self.pending = Some(url.to_string());
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        if let Some(url) = self.pending.take() {
            self.submit(terminal, &url)?;
        }

        loop {
            self.draw(terminal)?;
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match self.handle_key(key) {
                    Some(Action::Quit) => break,
                    Some(Action::Submit(input)) => self.submit(terminal, &input)?,
                    None => {}
                }
            }
        }

        Ok(())
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let snap = ViewSnap {
            url: self.input.text(),
            caret_col: self.input.caret_col(),
            content: &self.content,
            scroll: self.scroll,
            status: self.browser.status(),
            focus: self.focus,
        };

        let mut metrics = ContentMetrics::default();
        terminal.draw(|frame| metrics = view::render(frame, &snap))?;

        self.metrics = metrics;
        self.scroll = self.scroll.min(self.max_scroll());
        Ok(())
    }

    /// Shows the loading status, then blocks until the page is loaded or failed.
    fn submit<B: Backend>(&mut self, terminal: &mut Terminal<B>, input: &str) -> Result<()> {
        self.browser.set_status(LOADING_STATUS);
        self.draw(terminal)?;
        self.load(input);
        Ok(())
    }

    /// Runs the fetch on the UI thread.
    ///
    /// Fetch failures only touch the status line. Successful loads and parse
    /// failures replace the content pane and scroll it back to the top.
    pub fn load(&mut self, input: &str) {
        let result = self.runtime.block_on(self.browser.load(input));

        let content_changed = match &result {
            Ok(()) => true,
            Err(err) => err.kind() == ErrorKind::Parse,
        };
        if content_changed {
            self.content = view::to_text(self.browser.display());
            self.scroll = 0;
        }

        if let Err(err) = result {
            debug!(%input, error = %err, "load finished with error");
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                return Some(Action::Quit);
            }
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
                self.focus = match self.focus {
                    Focus::Url => Focus::Content,
                    Focus::Content => Focus::Url,
                };
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Url => self.handle_url_key(key),
            Focus::Content => {
                self.handle_content_key(key);
                None
            }
        }
    }

    fn handle_url_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => return Some(Action::Submit(self.input.text().to_string())),
            KeyCode::Left => self.input.left(),
            KeyCode::Right => self.input.right(),
            KeyCode::Home => self.input.home(),
            KeyCode::End => self.input.end(),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Esc => self.input.clear(),
            KeyCode::Char(ch) => self.input.insert(ch),
            _ => {}
        }
        None
    }

    fn handle_content_key(&mut self, key: KeyEvent) {
        let page = i32::from(self.metrics.height.max(1));
        match key.code {
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::PageDown => self.scroll_by(page),
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = next as u16;
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.metrics.lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }
}
