//! The interactive browse loop of dirpeek.
//!
//! Each iteration re-lists the current directory, renders it with the menu,
//! reads exactly one command and applies it. Filesystem and input errors are
//! reported inline and the loop carries on; only a broken output stream ends it early.
//!
//! The loop is generic over its input and output so it can be driven by in-memory buffers.

use crate::app::commands::{Command, parse_number};
use crate::app::nav::NavState;
use crate::config::Config;
use crate::core::{Formatter, PreviewOutcome, preview_file};
use crate::ui::{render_listing, render_menu};
use crate::utils::os_string_from_input;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Whether the loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The browser: navigation state plus the console it talks to.
pub struct Browser<R, W> {
    config: Config,
    formatter: Formatter,
    nav: NavState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Browser<R, W> {
    pub fn new(config: Config, start_dir: PathBuf, input: R, output: W) -> Self {
        let formatter = config.formatter();
        Self {
            config,
            formatter,
            nav: NavState::new(start_dir),
            input,
            output,
        }
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    /// Gives back the output sink, consuming the browser.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the loop until the exit command or the end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n==== File Explorer ====")?;
        while self.step()? == Flow::Continue {}
        writeln!(self.output, "\nExiting File Explorer. Goodbye!")?;
        self.output.flush()
    }

    /// One render/command cycle.
    pub fn step(&mut self) -> io::Result<Flow> {
        if let Err(e) = self.nav.refresh(&self.formatter) {
            writeln!(self.output, "Error listing directory: {}", e)?;
        }
        render_listing(
            &mut self.output,
            self.nav.current_dir(),
            self.nav.entries(),
            &self.formatter,
        )?;
        render_menu(&mut self.output)?;

        let Some(line) = self.read_line()? else {
            return Ok(Flow::Exit);
        };
        let Some(choice) = parse_number::<i64>(&String::from_utf8_lossy(&line)) else {
            return self.reject("Invalid input: expected a number.");
        };
        let Some(command) = Command::from_choice(choice) else {
            return self.reject("Unknown choice.");
        };

        tracing::debug!(?command, dir = %self.nav.current_dir().display(), "command");
        match command {
            Command::Open => self.open_dir(),
            Command::View => self.view_file(),
            Command::Up => {
                self.nav.go_up();
                Ok(Flow::Continue)
            }
            Command::ChangeDir => self.change_dir(),
            Command::Refresh => Ok(Flow::Continue),
            Command::Exit => Ok(Flow::Exit),
        }
    }

    fn open_dir(&mut self) -> io::Result<Flow> {
        let Some(index) = self.prompt_index("Enter item # to open (directory): ")? else {
            return Ok(Flow::Exit);
        };
        match index {
            Some(idx) if self.nav.open(idx) => Ok(Flow::Continue),
            Some(_) => self.reject("Invalid directory selection."),
            None => self.reject("Invalid input: expected a number."),
        }
    }

    fn view_file(&mut self) -> io::Result<Flow> {
        let Some(index) = self.prompt_index("Enter item # to view (file): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(idx) = index else {
            return self.reject("Invalid input: expected a number.");
        };
        let Some(path) = self.nav.file_at(idx).map(|e| e.path().to_path_buf()) else {
            return self.reject("Invalid file selection.");
        };

        let outcome = preview_file(&path, self.config.preview_options(), &mut self.output)?;
        if let PreviewOutcome::Shown { lines, truncated } = &outcome {
            tracing::debug!(file = %path.display(), lines, truncated, "previewed");
        }
        self.pause()
    }

    fn change_dir(&mut self) -> io::Result<Flow> {
        write!(self.output, "Enter path: ")?;
        self.output.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(Flow::Exit);
        };
        match self.nav.change_dir(os_string_from_input(&line)) {
            Ok(()) => Ok(Flow::Continue),
            Err(target) => {
                let msg = format!("Not a directory: {}", target.display());
                self.reject(&msg)
            }
        }
    }

    /// Prompts for an entry number.
    /// Outer `None` means the input ended, inner `None` means the line was not a number.
    fn prompt_index(&mut self, prompt: &str) -> io::Result<Option<Option<usize>>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .map(|line| parse_number::<usize>(&String::from_utf8_lossy(&line))))
    }

    /// Reports an invalid selection and waits for acknowledgment.
    fn reject(&mut self, msg: &str) -> io::Result<Flow> {
        writeln!(self.output, "{}", msg)?;
        self.pause()
    }

    fn pause(&mut self) -> io::Result<Flow> {
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            Some(_) => Flow::Continue,
            None => Flow::Exit,
        })
    }

    /// Reads one raw line without its line terminator. `None` at end of input.
    ///
    /// Bytes are not required to be UTF-8; each prompt decides how to interpret them.
    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        Ok(Some(line))
    }
}
