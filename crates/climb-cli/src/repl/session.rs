use std::io::{BufRead, Write};

use climb_core::{
    Attempt, AttemptStyle, Climb, ClimbDate, ClimbStore, ClimbType, CoreError, GradeScale,
    Performance, Stars,
};

use super::help::{BANNER, help_text};
use super::prompt::Prompter;
use super::verb::Verb;
use crate::bootstrap::Settings;
use crate::output;

/// Whether the loop keeps reading commands after the current one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

macro_rules! or_quit {
    ($answer:expr) => {
        match $answer? {
            Some(value) => value,
            None => return Ok(Flow::Quit),
        }
    };
}

/// One interactive run over a borrowed store.
///
/// The caller owns the store, loads it before the session and saves it after
/// [`Session::run`] returns.
pub struct Session<'a, R, W> {
    store: &'a mut ClimbStore,
    prompt: Prompter<R, W>,
    settings: &'a Settings,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub const fn new(
        store: &'a mut ClimbStore,
        input: R,
        output: W,
        settings: &'a Settings,
    ) -> Self {
        Self {
            store,
            prompt: Prompter::new(input, output),
            settings,
        }
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        if self.settings.show_banner {
            self.prompt.say(BANNER)?;
            self.prompt.say(help_text())?;
        }

        while let Some(line) = self.prompt.ask("> ")? {
            if self.execute(&line)? == Flow::Quit {
                break;
            }
        }
        tracing::debug!(climbs = self.store.len(), "session finished");
        Ok(())
    }

    /// Execute one command line.
    pub fn execute(&mut self, line: &str) -> anyhow::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let Some(verb) = Verb::parse(line) else {
            self.prompt.say(format_args!("invalid input: `{}`", line.trim()))?;
            return Ok(Flow::Continue);
        };

        tracing::debug!(%verb, "command");
        match verb {
            Verb::Quit => Ok(Flow::Quit),
            Verb::Help => {
                self.prompt.say(help_text())?;
                Ok(Flow::Continue)
            }
            Verb::AddClimb => self.add_climb(),
            Verb::AddAttempt => self.add_attempt(),
            Verb::RemoveClimb => self.remove_climb(),
            Verb::Flush => self.flush(),
            Verb::Print => self.print(),
        }
    }

    fn ask_key(&mut self) -> anyhow::Result<Option<(String, String)>> {
        let Some(name) = self.prompt.ask_until("  > name: ", |s| key_field("name", s))? else {
            return Ok(None);
        };
        let Some(location) = self
            .prompt
            .ask_until("  > location: ", |s| key_field("location", s))?
        else {
            return Ok(None);
        };
        Ok(Some((name, location)))
    }

    fn ask_comments(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.prompt.ask_until("  > comments: ", |s| {
            Climb::check_text_field("comments", s).map(|()| s.to_string())
        })?)
    }

    fn add_climb(&mut self) -> anyhow::Result<Flow> {
        let (name, location) = or_quit!(self.ask_key());
        if self.store.exists(&name, &location) {
            let err = CoreError::DuplicateKey { name, location };
            tracing::warn!(%err, "add climb rejected");
            self.prompt.say(err)?;
            return Ok(Flow::Continue);
        }

        let climb_type: ClimbType = or_quit!(self.prompt.ask_until(
            "  > type: [b]oulder, [s]port, [tr] top rope, [t]rad: ",
            str::parse::<ClimbType>,
        ));
        let scale = GradeScale::for_type(climb_type);
        let grade_label = format!("  > grade: {}: ", scale.hint());
        let grade = or_quit!(self
            .prompt
            .ask_until(&grade_label, |s| Climb::parse_grade(climb_type, s)));
        let stars: Stars = or_quit!(
            self.prompt.ask_until("  > stars: [0-4]: ", str::parse::<Stars>)
        );
        let comments = or_quit!(self.ask_comments());

        let climb = Climb::from_parts(name, location, climb_type, grade, stars, comments)?;
        if let Err(err) = self.store.insert(climb) {
            tracing::warn!(%err, "add climb rejected");
            self.prompt.say(err)?;
        }
        Ok(Flow::Continue)
    }

    fn add_attempt(&mut self) -> anyhow::Result<Flow> {
        let (name, location) = or_quit!(self.ask_key());
        let index = match self.store.require(&name, &location) {
            Ok(index) => index,
            Err(err) => {
                tracing::warn!(%err, "add attempt rejected");
                self.prompt.say(err)?;
                return Ok(Flow::Continue);
            }
        };

        let year = or_quit!(self.prompt.ask_until("  > year: ", ClimbDate::parse_year));
        let month = or_quit!(self.prompt.ask_until("  > month: ", ClimbDate::parse_month));
        let day = or_quit!(self.prompt.ask_until("  > day: ", ClimbDate::parse_day));
        let style: AttemptStyle = or_quit!(self.prompt.ask_until(
            "  > style: [l]ead, [t]op rope, [s]olo: ",
            str::parse::<AttemptStyle>,
        ));
        let performance: Performance = or_quit!(self.prompt.ask_until(
            "  > performance: [fe]ll, [fl]ash, [h]ung, [o]nsight, [r]edpoint, [s]end: ",
            str::parse::<Performance>,
        ));
        let comments = or_quit!(self.ask_comments());

        let date = ClimbDate::new(year, month, day)?;
        let attempt = Attempt::new(date, style, performance, comments)?;
        if let Err(err) = self.store.append_attempt(index, attempt) {
            tracing::warn!(%err, "add attempt rejected");
            self.prompt.say(err)?;
        }
        Ok(Flow::Continue)
    }

    fn remove_climb(&mut self) -> anyhow::Result<Flow> {
        let (name, location) = or_quit!(self.ask_key());
        let index = match self.store.require(&name, &location) {
            Ok(index) => index,
            Err(err) => {
                tracing::warn!(%err, "remove climb rejected");
                self.prompt.say(err)?;
                return Ok(Flow::Continue);
            }
        };

        self.prompt.say(format_args!(
            "this will permanently erase `{name}` at `{location}`"
        ))?;
        if self.confirmed()? {
            let removed = self.store.remove_at(index)?;
            self.prompt.say(format_args!(
                "`{}` at `{}` erased",
                removed.name(),
                removed.location()
            ))?;
        }
        Ok(Flow::Continue)
    }

    fn flush(&mut self) -> anyhow::Result<Flow> {
        self.prompt.say("this will permanently erase all climbs")?;
        if self.confirmed()? {
            let count = self.store.len();
            self.store.clear();
            tracing::info!(count, "store flushed");
            self.prompt.say("all climbs erased")?;
        }
        Ok(Flow::Continue)
    }

    fn print(&mut self) -> anyhow::Result<Flow> {
        let rendered = output::render_climbs(
            self.store,
            self.settings.print_format,
            self.settings.term_width,
        )?;
        self.prompt.say(rendered)?;
        Ok(Flow::Continue)
    }

    fn confirmed(&mut self) -> anyhow::Result<bool> {
        if !self.settings.confirm_destructive {
            return Ok(true);
        }
        Ok(self.prompt.confirm()?)
    }
}

fn key_field(field: &str, input: &str) -> Result<String, CoreError> {
    if input.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Climb::check_text_field(field, input)?;
    Ok(input.to_string())
}
