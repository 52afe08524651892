use iced::{
    Alignment, Element,
    Length::Fill,
    Task, Theme,
    widget::{Column, Row, button, checkbox, column, container, row, scrollable, text},
};
use jotter_lib::{Note, NoteId, Notebook, Result, StatusFilter, config::CoreConfig};
use tokio::task::spawn_blocking;
use tracing::error;

use crate::{
    components::{
        note_form::{self, NoteForm},
        notes_page::state::{FormMode, PageState},
    },
    config::Cfg,
    icons::icon,
};

pub mod state;

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(std::result::Result<Notebook, String>),
    AddPressed,
    EditPressed(NoteId),
    DeletePressed(NoteId),
    StatusToggled(NoteId),
    FilterSelected(StatusFilter),
    // Components
    Form(note_form::Message),
}

pub enum State {
    Loading,
    Error(String),
    Loaded(Notebook),
}

pub struct NotesPage {
    cfg: Cfg,
    state: State,
    page: PageState,
    // Components
    form: NoteForm,
}

impl NotesPage {
    pub fn new(cfg: Cfg, core: CoreConfig) -> (Self, Task<Message>) {
        let filter = cfg.read().notes.filter;

        (
            Self {
                cfg,
                state: State::Loading,
                page: PageState::new(filter),
                form: NoteForm::new(),
            },
            open_notebook(core),
        )
    }

    /// Build a page around an already opened [`Notebook`].
    pub fn with_notebook(cfg: Cfg, notebook: Notebook) -> Self {
        let filter = cfg.read().notes.filter;

        Self {
            cfg,
            state: State::Loaded(notebook),
            page: PageState::new(filter),
            form: NoteForm::new(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(Ok(notebook)) => self.state = State::Loaded(notebook),
            Message::Loaded(Err(e)) => {
                error!("Failed to open notebook: {e}");
                self.state = State::Error(e);
            }
            Message::AddPressed => {
                self.form = NoteForm::new();
                self.page.open_add();
            }
            Message::EditPressed(id) => {
                if let State::Loaded(notebook) = &self.state
                    && let Some(note) = notebook.get(&id)
                {
                    self.form = NoteForm::edit(note.content());
                    self.page.open_edit(id);
                }
            }
            Message::DeletePressed(id) => {
                if let State::Loaded(notebook) = &mut self.state {
                    log_failure(notebook.remove(&id));
                }
                if self.page.editing() == Some(&id) {
                    self.page.close_form();
                }
            }
            Message::StatusToggled(id) => {
                if let State::Loaded(notebook) = &mut self.state {
                    log_failure(notebook.toggle_status(&id));
                }
            }
            Message::FilterSelected(filter) => {
                self.page.set_filter(filter);
                self.cfg.write().notes.filter = filter;
            }
            Message::Form(message) => match self.form.update(message) {
                note_form::Action::None => {}
                note_form::Action::Submit(content) => self.submit(content),
                note_form::Action::Cancel => self.page.close_form(),
            },
        }

        Task::none()
    }

    fn submit(&mut self, content: String) {
        let State::Loaded(notebook) = &mut self.state else {
            return;
        };

        match self.page.form() {
            FormMode::Adding => log_failure(notebook.add(content)),
            FormMode::Editing(id) => log_failure(notebook.update(id, content)),
            FormMode::Closed => {}
        }

        self.page.close_form();
    }

    /// Notes that pass the selected status filter
    pub fn visible_notes(&self) -> Vec<&Note> {
        match &self.state {
            State::Loaded(notebook) => notebook.filtered(self.page.filter()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let notebook = match &self.state {
            State::Loading => return column![text("Loading notes...")].into(),
            State::Error(e) => return column![text(e)].into(),
            State::Loaded(notebook) => notebook,
        };

        let mut content = column![text("My Notes").size(36)].spacing(24).max_width(896);

        if self.page.show_add_button() {
            content = content.push(
                button(
                    row![icon("add"), text("Add new note")]
                        .spacing(8)
                        .align_y(Alignment::Center),
                )
                .width(Fill)
                .padding(16)
                .style(button::primary)
                .on_press(Message::AddPressed),
            );
        }

        if *self.page.form() != FormMode::Closed {
            content = content.push(self.form.view().map(Message::Form));
        }

        content = content.push(filter_bar(self.page.filter()));

        let notes = self.visible_notes();
        content = content.push(if notebook.is_empty() {
            empty_placeholder("No notes yet. Start by adding your first note!")
        } else if notes.is_empty() {
            empty_placeholder("No notes match this filter.")
        } else {
            scrollable(Column::with_children(notes.into_iter().map(note_row)).spacing(16)).into()
        });

        container(content).center_x(Fill).padding(32).into()
    }
}

fn open_notebook(core: CoreConfig) -> Task<Message> {
    Task::perform(
        async {
            spawn_blocking(move || Notebook::from_config(&core).map_err(|e| e.to_string()))
                .await
                .unwrap_or_else(|e| Err(e.to_string()))
        },
        Message::Loaded,
    )
}

/// Storage failures don't interrupt the page, they only get logged.
fn log_failure<T>(result: Result<T>) {
    if let Err(e) = result {
        error!("Failed to persist notes: {e}");
    }
}

fn filter_bar(selected: StatusFilter) -> Element<'static, Message> {
    Row::with_children(StatusFilter::all().map(|filter| {
        let label = match filter {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Approved => "Approved",
        };

        button(text(label))
            .style(move |theme: &Theme, status| {
                if filter == selected {
                    button::primary(theme, status)
                } else {
                    button::secondary(theme, status)
                }
            })
            .on_press(Message::FilterSelected(filter))
            .into()
    }))
    .spacing(8)
    .into()
}

fn empty_placeholder(message: &str) -> Element<'_, Message> {
    container(text(message).size(18))
        .padding(48)
        .center_x(Fill)
        .style(container::rounded_box)
        .into()
}

fn note_row(note: &Note) -> Element<'_, Message> {
    let id = note.id().clone();
    let approved = note.is_approved();

    container(
        row![
            checkbox(approved).on_toggle({
                let id = id.clone();
                move |_| Message::StatusToggled(id.clone())
            }),
            text(note.content().as_str())
                .width(Fill)
                .style(move |theme: &Theme| {
                    if approved {
                        text::success(theme)
                    } else {
                        text::Style::default()
                    }
                }),
            button(icon("edit"))
                .style(button::text)
                .on_press(Message::EditPressed(id.clone())),
            button(icon("delete"))
                .style(button::text)
                .on_press(Message::DeletePressed(id)),
        ]
        .spacing(16)
        .align_y(Alignment::Start),
    )
    .padding(24)
    .width(Fill)
    .style(move |theme: &Theme| note_style(theme, approved))
    .into()
}

fn note_style(theme: &Theme, approved: bool) -> container::Style {
    let base = container::bordered_box(theme);

    if approved {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.success.weak.color.into()),
            border: base.border.color(palette.success.base.color),
            ..base
        }
    } else {
        base
    }
}
