use std::io::{BufRead, Write};

use tracing::info;

use crate::book::CONTACT_NOT_FOUND;
use crate::cli::context::Session;
use crate::error::BookResult;
use crate::validation::{self, ReplaceChoice};

pub fn add<R: BufRead, W: Write>(session: &mut Session<R, W>) -> BookResult<()> {
    let name = match session.prompt("Enter Name:")? {
        Some(s) => s,
        None => return Ok(()),
    };

    if session.book.contains(&name) {
        let answer = match session.read_line("Name already exist. Replace? enter 1, cancel? enter 2:")? {
            Some(s) => s,
            None => return Ok(()),
        };
        match validation::replace_choice(&answer) {
            Ok(ReplaceChoice::Replace) => {}
            Ok(ReplaceChoice::Cancel) => return session.say("Addition canceled."),
            Err(_) => return session.say("Invalid choice. Canceled addition."),
        }
    }

    let phone = match session.prompt("Enter phone:")? {
        Some(s) => s,
        None => return Ok(()),
    };
    let email = match session.prompt("Enter Email:")? {
        Some(s) => s,
        None => return Ok(()),
    };

    match session.book.add_contact(&name, &phone, &email) {
        Some(_) => session.say("Contact was replaced."),
        None => session.say("Contact added."),
    }
}

pub fn view<R: BufRead, W: Write>(session: &mut Session<R, W>) -> BookResult<()> {
    let listing = session.book.view_content();
    session.say(&listing)
}

pub fn search<R: BufRead, W: Write>(session: &mut Session<R, W>) -> BookResult<()> {
    let name = match session.read_line("Name to search:")? {
        Some(s) => s,
        None => return Ok(()),
    };
    let result = session.book.search_contact(&name);
    session.say(&result)
}

pub fn delete<R: BufRead, W: Write>(session: &mut Session<R, W>) -> BookResult<()> {
    let name = match session.read_line("Name to delete:")? {
        Some(s) => s,
        None => return Ok(()),
    };
    match session.book.delete_contact(&name) {
        Some(_) => session.say("Contact deleted."),
        None => session.say(CONTACT_NOT_FOUND),
    }
}

/// Persist the book to the configured file.
pub fn save<R: BufRead, W: Write>(session: &mut Session<R, W>) -> BookResult<()> {
    session.book.save_to_file(&session.data_file)?;
    info!(
        path = %session.data_file.display(),
        contacts = session.book.len(),
        "saved contact book"
    );
    Ok(())
}
