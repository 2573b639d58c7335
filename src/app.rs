//! Application state and core logic

use crate::config::FolioConfig;
use crate::contact::{ContactMessage, ContactSender, SendError, SimulatedSender};
use crate::platform::is_shortcut;
use crate::state::{
    is_mobile, page_row, viewport_height, AppState, ContactField, ContactForm, Debouncer,
    FormError, HotspotTarget, LoaderState, Mode, Section, Throttle,
};
use crate::ui::layout::{back_to_top_hit, menu_hit, navbar_hit, NavbarHit};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Scroll spy runs at most this often
const SCROLL_SPY_INTERVAL: Duration = Duration::from_millis(100);
/// Quiet period before a resize is acted on
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);
/// Rows moved by PageUp/PageDown
const PAGE_STEP: u16 = 10;
/// Rows moved per mouse wheel notch
const WHEEL_STEP: u16 = 3;

/// Main application struct
pub struct App {
    /// Page state
    pub state: AppState,
    /// Contact form controller
    pub contact: ContactForm,
    /// Delivers contact messages
    sender: Arc<dyn ContactSender>,
    /// Outcomes of finished deliveries, drained on every tick
    settled_tx: mpsc::UnboundedSender<Result<(), SendError>>,
    settled_rx: mpsc::UnboundedReceiver<Result<(), SendError>>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Loading screen state (None once finished)
    pub loader: Option<LoaderState>,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Address shown in the contact section
    pub contact_email: String,
    scroll_spy: Throttle,
    resize: Debouncer,
}

impl App {
    /// Create an App that delivers through the simulated sender
    pub fn new(config: &FolioConfig) -> Result<Self> {
        let sender = SimulatedSender::new(config.submit_delay(), config.simulate_failure());
        Self::with_sender(config, Arc::new(sender))
    }

    /// Create an App with a specific sender
    pub fn with_sender(config: &FolioConfig, sender: Arc<dyn ContactSender>) -> Result<Self> {
        let now = Instant::now();
        let contact = ContactForm::with_contact_rules()?;
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();

        let mut state = AppState::new(now);
        let loader = if config.skip_loader() {
            state.hero.start(now);
            None
        } else {
            Some(LoaderState::new(now))
        };

        Ok(Self {
            state,
            contact,
            sender,
            settled_tx,
            settled_rx,
            quit: false,
            copy_message: None,
            loader,
            terminal_size: None,
            contact_email: config.contact_email().to_string(),
            scroll_spy: Throttle::new(SCROLL_SPY_INTERVAL),
            resize: Debouncer::new(RESIZE_DEBOUNCE),
        })
    }

    /// Check if the loading screen is showing
    pub fn in_loader(&self) -> bool {
        self.loader.is_some()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the next frame needs a fast redraw
    pub fn is_animating(&self, now: Instant) -> bool {
        self.in_loader()
            || self.contact.is_submitting()
            || self.resize.is_pending()
            || self.state.reveal.is_animating(now)
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn viewport_height(&self) -> u16 {
        viewport_height(self.terminal_size.map(|(h, _)| h).unwrap_or(24))
    }

    fn terminal_width(&self) -> u16 {
        self.terminal_size.map(|(_, w)| w).unwrap_or(80)
    }

    /// Advance every timer to `now`
    pub fn tick(&mut self, now: Instant) {
        let loader_done = self
            .loader
            .as_mut()
            .map(|loader| {
                loader.update(now);
                loader.is_complete()
            })
            .unwrap_or(false);
        if loader_done {
            self.loader = None;
            self.state.hero.start(now);
            tracing::debug!("loader finished");
        }

        self.state.typewriter.tick(now);
        self.state.gallery.tick(now);

        while let Ok(result) = self.settled_rx.try_recv() {
            self.contact.settle(result, now);
        }
        self.contact.tick(now);

        if self.resize.fire(now) {
            let width = self.terminal_width();
            self.state.nav.on_resize(width);
        }

        if !self.in_loader() {
            let viewport = self.viewport_height();
            self.state.observe_viewport(viewport, now);
        }
    }

    /// Terminal was resized
    pub fn on_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.terminal_size = Some((height, width));
        self.resize.call(now);
    }

    /// Scroll position changed; run the throttled scroll spy
    fn on_scroll(&mut self, now: Instant) {
        if self.scroll_spy.allow(now) {
            self.state
                .nav
                .update_from_scroll(self.state.scroll, &self.state.layout.sections);
        }
    }

    fn go_to(&mut self, section: Section) {
        let viewport = self.viewport_height();
        self.state.go_to(section, viewport);
    }

    /// Handle keyboard input
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.copy_message = None;

        if let Some(ref mut loader) = self.loader {
            loader.skip();
            return Ok(());
        }

        match self.state.mode {
            Mode::Browse => self.handle_browse_key(key).await,
            Mode::EditForm => self.handle_form_key(key).await,
        }
    }

    /// Handle keys while scrolling the page
    async fn handle_browse_key(&mut self, key: KeyEvent) -> Result<()> {
        let now = Instant::now();
        let viewport = self.viewport_height();

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.scroll_down(1, viewport);
                self.on_scroll(now);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.scroll_up(1);
                self.on_scroll(now);
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.state.scroll_down(PAGE_STEP, viewport);
                self.on_scroll(now);
            }
            KeyCode::PageUp => {
                self.state.scroll_up(PAGE_STEP);
                self.on_scroll(now);
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.state.scroll = 0;
                self.on_scroll(now);
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.state.scroll = self.state.layout.max_scroll(viewport);
                self.on_scroll(now);
            }
            KeyCode::Char('t') if self.state.back_to_top_visible() => {
                self.state.scroll = 0;
                self.on_scroll(now);
            }
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(section) = Section::from_shortcut(c) {
                    self.go_to(section);
                }
            }
            KeyCode::Char('m') if is_mobile(self.terminal_width()) => {
                self.state.nav.toggle_menu();
            }
            KeyCode::Char(']') => self.state.tabs.next(),
            KeyCode::Char('[') => self.state.tabs.prev(),
            KeyCode::Char('f') => self.state.gallery.cycle(now),
            KeyCode::Char('c') => self.enter_form(None),
            KeyCode::Enter if self.state.nav.active == Section::Contact => self.enter_form(None),
            KeyCode::Char('y') => self.copy_email()?,
            KeyCode::Esc => {
                if self.state.nav.menu_open {
                    self.state.nav.close_menu();
                } else {
                    self.state.dismiss_error();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys while editing the contact form
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let shortcut = is_shortcut(key.modifiers);

        match key.code {
            KeyCode::Esc => self.leave_form(),
            KeyCode::Tab | KeyCode::Down => self.contact.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.contact.focus_prev(),
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Enter => {
                if self.contact.state().submit_focused() {
                    self.submit();
                } else if self.contact.state().focused() == Some(ContactField::Message) {
                    self.contact.input_char('\n');
                } else {
                    self.contact.focus_next();
                }
            }
            KeyCode::Left => self.contact.cycle_choice(false),
            KeyCode::Right => self.contact.cycle_choice(true),
            KeyCode::Backspace => self.contact.backspace(),
            KeyCode::Char(c) if !shortcut => {
                self.contact.input_char(c);
            }
            _ => {}
        }
        Ok(())
    }

    /// Switch to form editing, optionally focusing a specific field
    fn enter_form(&mut self, field: Option<ContactField>) {
        if self.state.mode == Mode::Browse {
            self.go_to(Section::Contact);
            self.state.mode = Mode::EditForm;
        }
        if let Some(field) = field {
            if self.contact.state().focused() != Some(field) {
                self.contact.blur_focused();
                self.contact.state_mut().focus(field);
            }
        }
    }

    /// Back to browsing; the focused field loses focus
    fn leave_form(&mut self) {
        self.contact.blur_focused();
        self.state.mode = Mode::Browse;
    }

    /// Validate and, if valid, start delivery in the background
    fn submit(&mut self) {
        match self.contact.on_submit() {
            Ok(message) => self.spawn_send(message),
            Err(FormError::Validation(errors)) => {
                tracing::debug!(
                    fields = ?errors.iter().map(|e| e.field.name()).collect::<Vec<_>>(),
                    "contact form has errors"
                );
            }
            Err(e) => tracing::debug!("submit not started: {e}"),
        }
    }

    /// Run the sender on its own task; the outcome always comes back over
    /// the settle channel, even if the send task panics
    fn spawn_send(&self, message: ContactMessage) {
        let sender = Arc::clone(&self.sender);
        let settled = self.settled_tx.clone();

        tokio::spawn(async move {
            let send = tokio::spawn(async move { sender.send(message).await });
            let result = match send.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("contact send task failed: {e}");
                    Err(SendError::Transport(format!("send task failed: {e}")))
                }
            };
            if settled.send(result).is_err() {
                tracing::warn!("app closed before contact delivery settled");
            }
        });
    }

    fn copy_email(&mut self) -> Result<()> {
        let email = self.contact_email.clone();
        self.copy_to_clipboard(&email)?;
        self.copy_message = Some(format!("Copied {email}"));
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Handle mouse events
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let now = Instant::now();

        if let Some(ref mut loader) = self.loader {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                loader.skip();
            }
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => {
                let viewport = self.viewport_height();
                self.state.scroll_down(WHEEL_STEP, viewport);
                self.on_scroll(now);
            }
            MouseEventKind::ScrollUp => {
                self.state.scroll_up(WHEEL_STEP);
                self.on_scroll(now);
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row, now),
            _ => {}
        }
        Ok(())
    }

    fn handle_click(&mut self, col: u16, row: u16, now: Instant) {
        self.copy_message = None;
        let (height, width) = self.terminal_size.unwrap_or((24, 80));

        if self.state.nav.menu_open {
            if let Some(section) = menu_hit(width, row, col) {
                self.go_to(section);
                return;
            }
        }

        match navbar_hit(width, row, col) {
            Some(NavbarHit::Link(section)) => {
                self.go_to(section);
                return;
            }
            Some(NavbarHit::Menu) => {
                self.state.nav.toggle_menu();
                return;
            }
            None => {}
        }

        if self.state.back_to_top_visible() && back_to_top_hit(width, height, row, col) {
            self.state.scroll = 0;
            self.on_scroll(now);
            return;
        }

        let Some(target_row) = page_row(row, self.state.scroll, height) else {
            return;
        };
        match self.state.layout.hit(target_row, col) {
            Some(HotspotTarget::Tab(tab)) => self.state.tabs.open(tab),
            Some(HotspotTarget::Filter(filter)) => self.state.gallery.apply(filter, now),
            Some(HotspotTarget::Field(field)) => self.enter_form(Some(field)),
            Some(HotspotTarget::Submit) => {
                self.enter_form(None);
                self.submit();
            }
            None => {
                if self.state.mode == Mode::EditForm {
                    self.leave_form();
                }
            }
        }
    }
}
