use jotter_lib::{NoteId, StatusFilter};

/// Which form, if any, the page is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Closed,
    Adding,
    Editing(NoteId),
}

/// View state of the notes page. Only changed through the methods below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    form: FormMode,
    filter: StatusFilter,
}

impl PageState {
    pub fn new(filter: StatusFilter) -> Self {
        Self {
            form: FormMode::Closed,
            filter,
        }
    }

    pub fn form(&self) -> &FormMode {
        &self.form
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn editing(&self) -> Option<&NoteId> {
        match &self.form {
            FormMode::Editing(id) => Some(id),
            _ => None,
        }
    }

    /// The add button is hidden while either form is open
    pub fn show_add_button(&self) -> bool {
        self.form == FormMode::Closed
    }

    pub fn open_add(&mut self) {
        self.form = FormMode::Adding;
    }

    pub fn open_edit(&mut self, id: NoteId) {
        self.form = FormMode::Editing(id);
    }

    pub fn close_form(&mut self) {
        self.form = FormMode::Closed;
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }
}
