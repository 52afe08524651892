pub mod note_form;
pub mod notes_page;
