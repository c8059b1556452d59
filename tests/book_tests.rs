use contact_book::book::{CONTACT_NOT_FOUND, EMPTY_BOOK};
use contact_book::*;

fn setup() -> ContactBook {
    let mut book = ContactBook::new();
    book.add_contact("John", "123", "john@email.com");
    book
}

// ==========================================================================
// ADD TESTS
// ==========================================================================

#[test]
fn add_new_contact() {
    let book = setup();
    let contact = book.get("John").unwrap();
    assert_eq!(contact.name, "John");
    assert_eq!(contact.phone, "123");
    assert_eq!(contact.email, "john@email.com");
    assert_eq!(book.len(), 1);
}

#[test]
fn add_existing_contact_replaces_details() {
    let mut book = setup();
    let previous = book.add_contact("John", "999", "replace@email.com");

    assert_eq!(previous.unwrap().phone, "123");
    let contact = book.get("John").unwrap();
    assert_eq!(contact.name, "John");
    assert_eq!(contact.phone, "999");
    assert_eq!(contact.email, "replace@email.com");
    assert_eq!(book.len(), 1);
}

#[test]
fn replacing_keeps_position() {
    let mut book = setup();
    book.add_contact("Ron", "456", "ron@email.com");
    book.add_contact("John", "999", "replace@email.com");

    let names: Vec<&str> = book.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["John", "Ron"]);
}

#[test]
fn add_accepts_empty_fields() {
    let mut book = ContactBook::new();
    assert!(book.add_contact("", "", "").is_none());
    assert!(book.contains(""));
}

// ==========================================================================
// SEARCH TESTS
// ==========================================================================

#[test]
fn search_existing_contact() {
    let book = setup();
    assert_eq!(
        book.search_contact("John"),
        "Name: John, Phone: 123, Email: john@email.com."
    );
}

#[test]
fn search_nonexistent_contact() {
    let book = setup();
    assert_eq!(book.search_contact("Ron"), "Contact doesn't exist.");
}

#[test]
fn search_is_exact_match() {
    let book = setup();
    assert_eq!(book.search_contact("john"), CONTACT_NOT_FOUND);
    assert_eq!(book.search_contact("Jo"), CONTACT_NOT_FOUND);
}

// ==========================================================================
// DELETE TESTS
// ==========================================================================

#[test]
fn delete_existing_contact() {
    let mut book = setup();
    let removed = book.delete_contact("John");
    assert_eq!(removed.unwrap().name, "John");
    assert_eq!(book.search_contact("John"), CONTACT_NOT_FOUND);
    assert!(book.is_empty());
}

#[test]
fn delete_nonexistent_contact_leaves_book_unchanged() {
    let mut book = setup();
    assert!(book.delete_contact("Ron").is_none());
    assert_eq!(book.len(), 1);
    assert_eq!(
        book.search_contact("John"),
        "Name: John, Phone: 123, Email: john@email.com."
    );
}

#[test]
fn delete_twice_is_idempotent() {
    let mut book = setup();
    assert!(book.delete_contact("John").is_some());
    assert!(book.delete_contact("John").is_none());
    assert!(book.is_empty());
}

#[test]
fn delete_from_middle_keeps_lookup_consistent() {
    let mut book = ContactBook::new();
    book.add_contact("A", "1", "a@x");
    book.add_contact("B", "2", "b@x");
    book.add_contact("C", "3", "c@x");

    book.delete_contact("A");
    assert_eq!(book.get("C").unwrap().phone, "3");

    book.add_contact("C", "33", "c@y");
    let names: Vec<&str> = book.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["B", "C"]);
    assert_eq!(book.get("C").unwrap().phone, "33");
}

// ==========================================================================
// RENDERING TESTS
// ==========================================================================

#[test]
fn empty_book_renders_placeholder() {
    let mut book = setup();
    book.delete_contact("John");
    assert_eq!(book.to_string(), "No contacts yet.");
    assert_eq!(book.view_content(), EMPTY_BOOK);
}

#[test]
fn single_contact_rendering() {
    let book = setup();
    assert_eq!(
        book.view_content(),
        "1. Name: John, Phone: 123, Email: john@email.com.\n"
    );
}

#[test]
fn rendering_numbers_in_insertion_order() {
    let mut book = setup();
    book.add_contact("Ron", "456", "ron@email.com");
    assert_eq!(
        book.to_string(),
        "1. Name: John, Phone: 123, Email: john@email.com.\n\
         2. Name: Ron, Phone: 456, Email: ron@email.com.\n"
    );
}
