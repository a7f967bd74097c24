use std::io::{self, Write};

use crate::{
    controller::{events::UiEvent, form::FormState, user_list::UserRow},
    ui::input::HELP_TEXT,
};

/// Writes backend events as plain text.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "{HELP_TEXT}")?;
        self.out.flush()
    }

    pub fn apply(&mut self, event: &UiEvent) -> io::Result<()> {
        match event {
            UiEvent::RowsRendered(rows) => self.write_rows(rows)?,
            UiEvent::ErrorShown(message) => writeln!(self.out, "error: {message}")?,
            UiEvent::ErrorCleared => {}
            UiEvent::FormShown(form) => self.write_form(form)?,
            UiEvent::FormHidden => writeln!(self.out, "(form closed)")?,
            UiEvent::Notice(message) => writeln!(self.out, "{message}")?,
        }
        self.out.flush()
    }

    fn write_rows(&mut self, rows: &[UserRow]) -> io::Result<()> {
        writeln!(self.out, "users ({}):", rows.len())?;
        for row in rows {
            match &row.id {
                Some(id) => writeln!(self.out, "  {}  [edit {id}] [delete {id}]", row.label)?,
                None => writeln!(self.out, "  {}", row.label)?,
            }
        }
        Ok(())
    }

    fn write_form(&mut self, form: &FormState) -> io::Result<()> {
        let fields = &form.fields;
        writeln!(self.out, "== {} ==", form.title())?;
        writeln!(self.out, "  id:         {}", fields.id)?;
        writeln!(self.out, "  firstName:  {}", fields.first_name)?;
        writeln!(self.out, "  lastName:   {}", fields.last_name)?;
        writeln!(self.out, "  email:      {}", fields.email)?;
        writeln!(self.out, "  department: {}", fields.department)?;
        writeln!(self.out, "use 'set <field> <value>', then 'submit' or 'cancel'")
    }
}
