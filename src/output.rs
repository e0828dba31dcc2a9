//! Terminal output for the CLI

use crate::corpus::Boundary;
use crate::query::SearchResult;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print a search result: a colored header naming the title and the spans
/// it was cut from, then the document text
pub fn print_search_result(result: &SearchResult, color: bool, heading: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if heading {
        match &result.title {
            Some(title) => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
                write!(stdout, "{}", title)?;
                stdout.reset()?;
            }
            None => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(stdout, "no title matches {:?}", result.query)?;
                stdout.reset()?;
            }
        }

        if !result.boundaries.is_empty() {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(stdout, " {}", format_boundaries(&result.boundaries))?;
            stdout.reset()?;
        }
        writeln!(stdout)?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(stdout, "--")?;
        stdout.reset()?;
    }

    write!(stdout, "{}", result.text)?;
    if !result.text.ends_with('\n') {
        writeln!(stdout)?;
    }

    Ok(())
}

/// Print catalog titles, one per line, with their document position
pub fn print_titles(titles: &[String]) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    for (position, title) in titles.iter().enumerate() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{:>3}", position + 1)?;
        stdout.reset()?;
        writeln!(stdout, "  {}", title)?;
    }

    Ok(())
}

/// `[start..end)` spans joined with `+`
fn format_boundaries(boundaries: &[Boundary]) -> String {
    boundaries
        .iter()
        .map(|b| format!("[{}..{})", b.start, b.end))
        .collect::<Vec<_>>()
        .join("+")
}
