use std::io::{self, BufRead, Write};

/// Line-oriented prompt I/O over any reader/writer pair.
///
/// `interactive` is true only when attached to a real terminal; it turns on
/// screen clearing and the pause after each action.
pub struct Console<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
        }
    }

    /// Print `label` without a newline and read one line.
    /// Returns `None` at end of input. The trailing newline is stripped.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn line(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.interactive {
            ::console::Term::stdout().clear_screen()?;
        }
        Ok(())
    }

    pub fn pause(&mut self) -> io::Result<()> {
        if self.interactive {
            self.prompt("Press Enter to continue...")?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
