use iced::{
    Element,
    Length::Fill,
    Theme,
    widget::{button, column, container, progress_bar, row, text, text_input},
};
use jotter_lib::{Draft, draft::MAX_LENGTH};

#[derive(Debug, Clone)]
pub enum Message {
    ContentChanged(String),
    SavePressed,
    CancelPressed,
}

/// Action used for communicating with the parent component
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Submit(String),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Add,
    Edit,
}

pub struct NoteForm {
    kind: FormKind,
    draft: Draft,
}

impl NoteForm {
    /// An empty form for writing a new note
    pub fn new() -> Self {
        Self {
            kind: FormKind::Add,
            draft: Draft::default(),
        }
    }

    /// A form pre-filled with an existing note's content
    pub fn edit(content: &str) -> Self {
        Self {
            kind: FormKind::Edit,
            draft: Draft::new(content),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        self.draft.content()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::ContentChanged(content) => {
                self.draft.set_content(content);
                Action::None
            }
            Message::SavePressed => match self.draft.submit() {
                Some(content) => Action::Submit(content),
                None => Action::None,
            },
            Message::CancelPressed => match self.kind {
                FormKind::Edit => Action::Cancel,
                // Only edit forms offer a way out
                FormKind::Add => Action::None,
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let valid = self.draft.is_valid();
        let (title, save_label) = match self.kind {
            FormKind::Add => ("Add a New Note", "Save Note"),
            FormKind::Edit => ("Edit Note", "Update Note"),
        };

        let mut buttons = row![
            button(text(save_label))
                .width(Fill)
                .padding(12)
                .style(button::primary)
                .on_press_maybe(valid.then_some(Message::SavePressed))
        ]
        .spacing(12);

        if self.kind == FormKind::Edit {
            buttons = buttons.push(
                button(text("Cancel"))
                    .padding(12)
                    .style(button::secondary)
                    .on_press(Message::CancelPressed),
            );
        }

        container(
            column![
                text(title).size(24),
                text_input("Write your note here...", self.draft.content())
                    .on_input(Message::ContentChanged)
                    .padding(12),
                text(format!(
                    "{} / {MAX_LENGTH} characters",
                    self.draft.char_count()
                ))
                .size(14),
                progress_bar(0.0..=100.0, self.draft.progress()).style(move |theme: &Theme| {
                    if valid {
                        progress_bar::success(theme)
                    } else {
                        progress_bar::danger(theme)
                    }
                }),
                buttons,
            ]
            .spacing(16),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box)
        .into()
    }
}

impl Default for NoteForm {
    fn default() -> Self {
        Self::new()
    }
}
