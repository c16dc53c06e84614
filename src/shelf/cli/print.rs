use super::console::Console;
use colored::Colorize;
use shelf::model::Book;
use std::io::{self, BufRead, Write};

pub(super) fn success<R, W>(console: &mut Console<R, W>, msg: &str) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    console.line(msg.green())
}

pub(super) fn warning<R, W>(console: &mut Console<R, W>, msg: &str) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    console.line(msg.yellow())
}

pub(super) fn error<R, W>(console: &mut Console<R, W>, msg: &str) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    console.line(msg.red())
}

pub(super) fn heading<R, W>(console: &mut Console<R, W>, msg: &str) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    console.line(msg.bold())
}

/// One block per book, separated by blank lines.
pub(super) fn print_books<'a, R, W, I>(console: &mut Console<R, W>, books: I) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    I: IntoIterator<Item = &'a Book>,
{
    for book in books {
        console.line(format!("{} {}", "Title:".dimmed(), book.title.bold()))?;
        console.line(format!("{} {}", "Author:".dimmed(), book.author))?;
        console.line(format!(
            "{} {}",
            "Year of Publication:".dimmed(),
            book.year_of_publication
        ))?;
        console.blank()?;
    }
    Ok(())
}
