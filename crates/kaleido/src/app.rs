use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use kaleido_config::Config;
use kaleido_core::ViewportSize;
use kaleido_pattern::{KaleidoscopeState, ResizeSignal};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Poll timeout between frames.
    frame_interval: Duration,
    /// Terminal size notifications, fed from crossterm resize events.
    signal: Rc<ResizeSignal>,
    /// The mounted component, if any.
    kaleidoscope: Option<KaleidoscopeState>,
    /// When the component was mounted; the origin of its animation clock.
    mounted_at: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config) -> Self {
        Self {
            running: false,
            frame_interval: config.frame_interval(),
            signal: ResizeSignal::new(ViewportSize::default()),
            kaleidoscope: None,
            mounted_at: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.signal.emit(ViewportSize::from_cells(size.width, size.height));
        self.mount();

        self.running = true;
        while self.running {
            let elapsed_ms = self.elapsed_ms();
            terminal.draw(|frame| self.render(frame, elapsed_ms))?;
            self.handle_crossterm_events()?;
        }

        self.unmount();
        Ok(())
    }

    /// Mount the kaleidoscope and restart its clock.
    fn mount(&mut self) {
        self.kaleidoscope = Some(KaleidoscopeState::mount(&self.signal));
        self.mounted_at = Instant::now();
        info!("kaleidoscope mounted");
    }

    /// Tear the kaleidoscope down, releasing its resize subscription.
    fn unmount(&mut self) {
        if self.kaleidoscope.take().is_some() {
            info!("kaleidoscope unmounted");
        }
    }

    fn elapsed_ms(&self) -> u64 {
        self.mounted_at.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame, elapsed_ms: u64) {
        if let Some(kaleidoscope) = &mut self.kaleidoscope {
            kaleidoscope.render(frame, elapsed_ms);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the frame interval as timeout so animation keeps running.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.frame_interval)? {
            self.on_event(event::read()?);
        }
        Ok(())
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Resize(cols, rows) => {
                debug!(cols, rows, "terminal resized");
                self.signal.emit(ViewportSize::from_cells(cols, rows));
            }
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
