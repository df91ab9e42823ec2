//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components. Search
//! state lives in the [`SearchPipeline`]; the App only moves requests between
//! the pipeline and the fetch runner and keeps the views in step.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_key_hints, draw_status_bar, DetailComponent, HelpDialog, NavBar,
    QuitDialog, ResultsComponent, SearchBar, StatusBarContext,
};
use crate::model::modal::{Modal, ModalStack};
use crate::model::{Focus, Shortcut, UiStatus};
use crate::pipeline::SearchPipeline;
use crate::services::{FetchRunner, PendingRequest};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const WELCOME: &str = "Search for a recipe by name, or browse with F2-F4.";

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Output state and request bookkeeping
    pub pipeline: SearchPipeline,

    /// Runs requests on the async runtime
    runner: FetchRunner,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Area that receives keys
    pub focus: Focus,

    /// One-off startup notice, e.g. an unreadable config file
    pub notice: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub search_bar: SearchBar,
    pub nav_bar: NavBar,
    pub results: ResultsComponent,
    pub detail: DetailComponent,
    pub help_dialog: HelpDialog,
    pub quit_dialog: QuitDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(runner: FetchRunner) -> App {
        App {
            should_quit: false,
            pipeline: SearchPipeline::new(),
            runner,
            modals: ModalStack::new(),
            focus: Focus::Input,
            notice: None,
            search_bar: SearchBar::new(),
            nav_bar: NavBar::new(),
            results: ResultsComponent::new(),
            detail: DetailComponent::new(),
            help_dialog: HelpDialog::default(),
            quit_dialog: QuitDialog::default(),
        }
    }

    pub fn with_notice(mut self, notice: Option<String>) -> App {
        self.notice = notice;
        self
    }

    fn start(&mut self, request: Option<PendingRequest>) {
        if let Some(request) = request {
            self.notice = None;
            self.runner.spawn(request);
        }
        self.settle_focus();
    }

    /// Apply finished requests and bring the views in line with the new status
    fn drain_completions(&mut self) {
        let completions = self.runner.poll();
        if completions.is_empty() {
            return;
        }
        for completion in completions {
            self.pipeline.complete(completion);
        }

        match self.pipeline.status() {
            UiStatus::Showing(recipes) => {
                self.results.reset(recipes.len());
                if self.focus == Focus::Detail {
                    self.focus = Focus::Results;
                }
            }
            UiStatus::ShowingDetail(recipe) => {
                self.detail.set_recipe(recipe);
                self.focus = Focus::Detail;
            }
            _ => {}
        }
        self.settle_focus();
    }

    /// Keep focus off the detail panel unless one is on screen
    fn settle_focus(&mut self) {
        if self.focus == Focus::Detail && self.pipeline.status().detail().is_none() {
            self.detail.clear();
            self.focus = if self.pipeline.status().cards().is_empty() {
                Focus::Input
            } else {
                Focus::Results
            };
        }
        self.search_bar.focused = self.focus == Focus::Input;
    }

    fn open_card(&mut self, index: usize) {
        let Some(id) = self
            .pipeline
            .status()
            .cards()
            .get(index)
            .map(|recipe| recipe.id.clone())
        else {
            return;
        };
        self.results.selected = index;
        let request = self.pipeline.select_card(&id);
        self.start(request);
    }

    /// Keys that work everywhere outside a modal
    fn global_key_action(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::F(1) => Some(Action::OpenHelp),
            KeyCode::F(n) => Shortcut::from_function_key(n).map(navigate),
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => c
                .to_digit(10)
                .and_then(|digit| Shortcut::from_function_key(digit as u8 + 1))
                .map(navigate),
            _ => None,
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }

    fn draw_body(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.pipeline.status() {
            UiStatus::Showing(recipes) => {
                self.results
                    .render(frame, area, recipes, self.focus == Focus::Results);
            }
            UiStatus::ShowingDetail(_) => self.detail.draw(frame, area)?,
            UiStatus::Idle if !self.pipeline.is_loading() => {
                let welcome = Paragraph::new(vec![
                    Line::from(""),
                    Line::styled(
                        WELCOME,
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    )
                    .centered(),
                ]);
                frame.render_widget(welcome, area);
            }
            // Message states only use the status bar
            _ => {}
        }
        Ok(())
    }
}

fn navigate(shortcut: Shortcut) -> Action {
    Action::Navigate(shortcut.id().to_string())
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        if let Some(action) = self.global_key_action(key) {
            return Ok(Some(action));
        }

        match self.focus {
            Focus::Input => self.search_bar.handle_key_event(key),
            Focus::Results => self.results.handle_key_event(key),
            Focus::Detail => self.detail.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }

        if let Some(action) = self.nav_bar.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }

        match (self.focus, mouse.kind) {
            (Focus::Detail, MouseEventKind::ScrollDown) => Ok(Some(Action::ScrollDown)),
            (Focus::Detail, MouseEventKind::ScrollUp) => Ok(Some(Action::ScrollUp)),
            _ if matches!(self.pipeline.status(), UiStatus::Showing(_)) => {
                self.results.handle_mouse_event(mouse)
            }
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => self.drain_completions(),
            Action::ForceQuit => {
                tracing::info!("quitting");
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Input Field (delegate to SearchBar)
            // ─────────────────────────────────────────────────────────────────
            Action::InputChar(_)
            | Action::InputBackspace
            | Action::InputDelete
            | Action::InputClear
            | Action::CursorLeft
            | Action::CursorRight
            | Action::CursorHome
            | Action::CursorEnd => return self.search_bar.update(action),

            // ─────────────────────────────────────────────────────────────────
            // Triggering Actions
            // ─────────────────────────────────────────────────────────────────
            Action::Submit => {
                let input = self.search_bar.read();
                let request = self.pipeline.submit(&input);
                self.start(request);
            }
            Action::Navigate(id) => {
                let request = self.pipeline.navigate(&id);
                self.start(request);
            }
            Action::OpenCard(index) => self.open_card(index),
            Action::OpenSelected => self.open_card(self.results.selected),

            // ─────────────────────────────────────────────────────────────────
            // Focus & Grid Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::FocusInput => {
                self.focus = Focus::Input;
                self.settle_focus();
            }
            Action::FocusResults => {
                if !self.pipeline.status().cards().is_empty() {
                    self.focus = Focus::Results;
                    self.settle_focus();
                }
            }
            Action::CardLeft | Action::CardRight | Action::CardUp | Action::CardDown => {
                return self.results.update(action);
            }

            // ─────────────────────────────────────────────────────────────────
            // Detail Panel
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                return self.detail.update(action);
            }
            Action::CloseDetail => {
                self.pipeline.close_detail();
                self.settle_focus();
            }

            // ─────────────────────────────────────────────────────────────────
            // Status & Modals
            // ─────────────────────────────────────────────────────────────────
            Action::DismissStatus => {
                self.notice = None;
                self.pipeline.dismiss();
            }
            Action::OpenQuitDialog => {
                self.quit_dialog.loading = self.pipeline.is_loading();
                self.modals.open(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.open(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        self.search_bar.draw(frame, layout.search)?;
        self.nav_bar.draw(frame, layout.nav)?;

        let ctx = StatusBarContext {
            status: self.pipeline.status(),
            loading: self.pipeline.is_loading(),
            last_response_at: self.pipeline.last_response_at(),
            notice: self.notice.as_deref(),
        };
        draw_status_bar(frame, layout.status, &ctx);

        self.draw_body(frame, layout.body)?;
        draw_key_hints(frame, layout.hints, self.focus);

        let modals: Vec<Modal> = self.modals.iter().cloned().collect();
        for modal in &modals {
            self.draw_modal(frame, area, modal)?;
        }
        Ok(())
    }
}
