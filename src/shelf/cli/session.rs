//! Login gate and main menu loop.
//!
//! All prompting and re-prompting lives here; the stores only ever see
//! complete, already-validated requests.

use super::console::Console;
use super::print;
use shelf::catalog::CatalogStore;
use shelf::credentials::CredentialStore;
use shelf::error::Result;
use shelf::store::StorageBackend;
use std::io::{BufRead, Write};

/// Run the login/register gate. Returns whether the user got in.
pub fn authenticate<R, W, B>(
    console: &mut Console<R, W>,
    users: &mut CredentialStore<B>,
) -> Result<bool>
where
    R: BufRead,
    W: Write,
    B: StorageBackend,
{
    console.clear()?;
    print::heading(console, "Welcome to the Book Manager!")?;
    console.line("Login or Register:")?;
    console.line("1. Login")?;
    console.line("2. Register")?;

    let Some(choice) = console.prompt("Choose an option: ")? else {
        return Ok(false);
    };

    match choice.trim() {
        "1" => login(console, users),
        "2" => register(console, users),
        _ => Ok(false),
    }
}

fn login<R, W, B>(console: &mut Console<R, W>, users: &CredentialStore<B>) -> Result<bool>
where
    R: BufRead,
    W: Write,
    B: StorageBackend,
{
    let Some(username) = console.prompt("Username: ")? else {
        return Ok(false);
    };
    let Some(password) = console.prompt("Password: ")? else {
        return Ok(false);
    };

    if users.login(&username, &password) {
        return Ok(true);
    }
    print::error(console, "Invalid username or password.")?;
    Ok(false)
}

/// Keep asking until a registration goes through. A taken username only
/// re-prompts for the username; a mismatched confirmation starts over.
fn register<R, W, B>(console: &mut Console<R, W>, users: &mut CredentialStore<B>) -> Result<bool>
where
    R: BufRead,
    W: Write,
    B: StorageBackend,
{
    loop {
        let Some(mut username) = console.prompt("Choose a username: ")? else {
            return Ok(false);
        };
        let Some(password) = console.prompt("Choose a password: ")? else {
            return Ok(false);
        };
        let Some(confirm) = console.prompt("Confirm your password: ")? else {
            return Ok(false);
        };

        if password != confirm {
            print::error(console, "Passwords do not match. Please try again.")?;
            continue;
        }

        while users.is_username_taken(&username) {
            print::warning(console, "Username already exists. Please choose another one.")?;
            match console.prompt("Choose a username: ")? {
                Some(next) => username = next,
                None => return Ok(false),
            }
        }

        if users.register(&username, &password, &confirm)? {
            print::success(console, "User registered successfully.")?;
            return Ok(true);
        }
    }
}

/// The book menu. Returns when the user exits or input runs out.
pub fn run_menu<R, W, B>(console: &mut Console<R, W>, catalog: &mut CatalogStore<B>) -> Result<()>
where
    R: BufRead,
    W: Write,
    B: StorageBackend,
{
    loop {
        console.clear()?;
        print::heading(console, "Book Management System")?;
        console.line("1. Add a new book")?;
        console.line("2. View all books")?;
        console.line("3. Search for a book by title or author")?;
        console.line("4. Exit")?;

        let Some(choice) = console.prompt("Please select an option (1-4): ")? else {
            return Ok(());
        };

        match choice.trim() {
            "1" => add_book(console, catalog)?,
            "2" => view_all(console, catalog)?,
            "3" => search(console, catalog)?,
            "4" => {
                console.line("Exiting the application.")?;
                return Ok(());
            }
            _ => print::error(console, "Invalid choice. Please try again.")?,
        }
        console.pause()?;
    }
}

fn add_book<R, W, B>(console: &mut Console<R, W>, catalog: &mut CatalogStore<B>) -> Result<()>
where
    R: BufRead,
    W: Write,
    B: StorageBackend,
{
    console.clear()?;
    print::heading(console, "Add a New Book")?;

    let Some(title) = console.prompt("Enter book title: ")? else {
        return Ok(());
    };
    let title = title.trim();
    if title.is_empty() {
        print::error(console, "Title cannot be empty.")?;
        return Ok(());
    }

    let Some(author) = console.prompt("Enter author name: ")? else {
        return Ok(());
    };
    let author = author.trim();
    if author.is_empty() {
        print::error(console, "Author cannot be empty.")?;
        return Ok(());
    }

    let mut label = "Enter year of publication: ";
    let year = loop {
        let Some(raw) = console.prompt(label)? else {
            return Ok(());
        };
        match parse_year(&raw) {
            Some(year) => break year,
            None => label = "Invalid input. Please enter a valid year: ",
        }
    };

    catalog.add_book(title, author, year)?;
    print::success(console, "Book added successfully.")?;
    Ok(())
}

fn view_all<R, W, B>(console: &mut Console<R, W>, catalog: &CatalogStore<B>) -> Result<()>
where
    R: BufRead,
    W: Write,
    B: StorageBackend,
{
    let books = catalog.list_all();
    if books.is_empty() {
        console.line("No books available.")?;
        return Ok(());
    }
    print::print_books(console, books)?;
    Ok(())
}

fn search<R, W, B>(console: &mut Console<R, W>, catalog: &CatalogStore<B>) -> Result<()>
where
    R: BufRead,
    W: Write,
    B: StorageBackend,
{
    console.clear()?;
    print::heading(console, "Search for a Book by Title or Author")?;

    let Some(query) = console.prompt("Enter title or author to search: ")? else {
        return Ok(());
    };
    let query = query.trim();
    if query.is_empty() {
        print::error(console, "Search query cannot be empty.")?;
        return Ok(());
    }

    let found = catalog.search(query);
    if found.is_empty() {
        console.line("No books found with that title or author.")?;
        return Ok(());
    }
    print::print_books(console, found)?;
    Ok(())
}

/// A publication year must be a positive integer.
fn parse_year(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|year| *year > 0)
}
