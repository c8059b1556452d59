pub mod context;
pub mod contact_commands;

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::book::ContactBook;
use crate::error::BookResult;
use crate::validation;
use context::Session;

pub const MENU: &str = "1. Add Contact\n2. View Contacts\n3. Search Contact\n4. Delete Contact\n5. Exit";
const MENU_OPTIONS: u8 = 5;

/// Run the interactive menu on stdin/stdout against `data_file`.
pub fn run(data_file: &Path) -> BookResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let _session = run_with(data_file, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Load the book from `data_file`, drive the menu from `input` until the
/// user exits or input ends, then save. Returns the final book and output.
pub fn run_with<R: BufRead, W: Write>(
    data_file: &Path,
    input: R,
    output: W,
) -> BookResult<(ContactBook, W)> {
    let mut session = Session::new(ContactBook::new(), data_file.to_path_buf(), input, output);
    load(&mut session)?;
    menu_loop(&mut session)?;
    contact_commands::save(&mut session)?;
    Ok(session.into_parts())
}

fn load<R: BufRead, W: Write>(session: &mut Session<R, W>) -> BookResult<()> {
    let path = session.data_file.clone();
    let report = session.book.load_from_file(&path)?;
    for row in &report.skipped {
        session.say(&format!("Invalid line in file: {:?}", row.fields))?;
    }
    if !report.file_found {
        session.say("Couldn't find older data file.")?;
    }
    Ok(())
}

fn menu_loop<R: BufRead, W: Write>(session: &mut Session<R, W>) -> BookResult<()> {
    loop {
        session.say(MENU)?;
        let input = match session.read_line("")? {
            Some(s) => s,
            None => break,
        };

        let choice = match validation::menu_choice(&input, MENU_OPTIONS) {
            Ok(n) => n,
            Err(_) => {
                session.say("Invalid choice. Please enter a number between 1-5.")?;
                continue;
            }
        };

        match choice {
            1 => contact_commands::add(session)?,
            2 => contact_commands::view(session)?,
            3 => contact_commands::search(session)?,
            4 => contact_commands::delete(session)?,
            _ => break,
        }
    }
    Ok(())
}
