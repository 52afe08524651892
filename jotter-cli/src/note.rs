use clap::Subcommand;
use colored::Colorize;
use jotter_lib::{Error, Note, NoteId, Notebook, Result, StatusFilter, draft::validate};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, newest first
    List {
        /// Only show notes with this status
        #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
        filter: StatusFilter,
    },
    /// Add a new note
    Add { content: String },
    /// Replace the content of a note
    Edit { id: String, content: String },
    /// Delete a note
    Delete { id: String },
    /// Flip a note between pending and approved
    Toggle { id: String },
}

pub fn handle(notebook: &mut Notebook, cmd: &Command) -> Result<()> {
    match cmd {
        Command::List { filter } => {
            let mut notes = notebook.filtered(*filter).peekable();
            if notes.peek().is_none() {
                println!("No notes yet. Start by adding your first note!");
            }
            for note in notes {
                println!("{}", format_note(note));
            }
        }
        Command::Add { content } => {
            validate(content)?;
            let id = notebook.add(content.clone())?;
            println!("{id}");
        }
        Command::Edit { id, content } => {
            validate(content)?;
            let id = NoteId::from(id.as_str());
            if !notebook.update(&id, content.clone())? {
                return Err(Error::NotFound(id));
            }
        }
        Command::Delete { id } => {
            let id = NoteId::from(id.as_str());
            if !notebook.remove(&id)? {
                return Err(Error::NotFound(id));
            }
        }
        Command::Toggle { id } => {
            let id = NoteId::from(id.as_str());
            match notebook.toggle_status(&id)? {
                Some(status) => println!("{id} is now {status}"),
                None => return Err(Error::NotFound(id)),
            }
        }
    }

    Ok(())
}

fn format_note(note: &Note) -> String {
    let marker = if note.is_approved() {
        "[x]".green()
    } else {
        "[ ]".normal()
    };

    format!(
        "{marker} {} {}",
        note.id().to_string().dimmed(),
        note.content()
    )
}

#[cfg(test)]
mod test {
    use jotter_lib::{Error, MemoryStorage, NoteId, Notebook};

    use crate::note::{Command, format_note, handle};

    fn notebook() -> Notebook {
        Notebook::open(MemoryStorage::new(), "myNotes")
    }

    #[test]
    fn test_add_rejects_short_content() {
        let mut notebook = notebook();

        let result = handle(
            &mut notebook,
            &Command::Add {
                content: "short".into(),
            },
        );

        assert!(matches!(result, Err(Error::ContentLength { .. })));
        assert!(notebook.is_empty());
    }

    #[test]
    fn test_add_then_toggle() {
        let mut notebook = notebook();

        handle(
            &mut notebook,
            &Command::Add {
                content: "n".repeat(60),
            },
        )
        .unwrap();
        let id = notebook.notes().first().unwrap().id().to_string();

        handle(&mut notebook, &Command::Toggle { id }).unwrap();

        assert!(notebook.notes().first().unwrap().is_approved());
    }

    #[test]
    fn test_unknown_id() {
        let mut notebook = notebook();

        assert!(matches!(
            handle(&mut notebook, &Command::Delete { id: "7".into() }),
            Err(Error::NotFound(id)) if id == NoteId::from("7")
        ));
        assert!(matches!(
            handle(
                &mut notebook,
                &Command::Edit {
                    id: "7".into(),
                    content: "e".repeat(50)
                }
            ),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_format_note() {
        colored::control::set_override(false);
        let mut notebook = notebook();
        let id = notebook.add("hello").unwrap();
        notebook.toggle_status(&id).unwrap();

        let line = format_note(notebook.get(&id).unwrap());

        assert_eq!(line, format!("[x] {id} hello"));
    }
}
