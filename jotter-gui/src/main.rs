use std::sync::Arc;

use iced::{Element, Task, Theme, application};
use jotter_lib::config::CoreConfig;
use parking_lot::RwLock;
use tracing::{Level, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::notes_page::{self, NotesPage},
    config::{Cfg, GuiConfig},
};

pub mod components;
pub mod config;
pub mod icons;

fn main() -> iced::Result {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set up logging: {e}");
    }

    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    NotesPage(notes_page::Message),
}

struct App {
    title: String,
    cfg: Cfg,
    // Components
    notes_page: NotesPage,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let cfg = Arc::new(RwLock::new(GuiConfig::load()));
        let core = CoreConfig::load().unwrap_or_else(|e| {
            warn!("Falling back to the default configuration: {e}");
            CoreConfig::default()
        });

        let (notes_page, notes_page_task) = NotesPage::new(cfg.clone(), core);

        (
            Self {
                title: "Jotter".into(),
                cfg,
                notes_page,
            },
            notes_page_task.map(Message::NotesPage),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NotesPage(message) => {
                let filter_changed = matches!(message, notes_page::Message::FilterSelected(_));
                let task = self.notes_page.update(message).map(Message::NotesPage);

                // Remember the selected filter across sessions
                if filter_changed && let Err(e) = self.cfg.read().save() {
                    warn!("Failed to save GUI configuration: {e}");
                }

                task
            }
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        self.notes_page.view().map(Message::NotesPage)
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.cfg.read().theme()
    }
}
