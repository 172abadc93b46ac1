use std::fmt;

/// A command typed at the `>` prompt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verb {
    Quit,
    Help,
    AddClimb,
    AddAttempt,
    RemoveClimb,
    Flush,
    Print,
}

impl Verb {
    pub const ALL: [Self; 7] = [
        Self::Quit,
        Self::Help,
        Self::AddClimb,
        Self::AddAttempt,
        Self::RemoveClimb,
        Self::Flush,
        Self::Print,
    ];

    /// Accepted spellings. The first is the canonical one.
    #[must_use]
    pub const fn spellings(self) -> &'static [&'static str] {
        match self {
            Self::Quit => &["quit", "q"],
            Self::Help => &["help", "h"],
            Self::AddClimb => &["add climb"],
            Self::AddAttempt => &["add attempt"],
            Self::RemoveClimb => &["remove climb"],
            Self::Flush => &["flush"],
            Self::Print => &["print"],
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Quit => "quit the application",
            Self::Help => "show this help message",
            Self::AddClimb => "add a climb",
            Self::AddAttempt => "add a climb attempt",
            Self::RemoveClimb => "remove a climb",
            Self::Flush => "flush the log, remove all climbs",
            Self::Print => "print all climbs",
        }
    }

    /// Match user input case-insensitively, ignoring extra whitespace
    /// between and around words.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ");
        Self::ALL.into_iter().find(|verb| {
            verb.spellings()
                .iter()
                .any(|spelling| spelling.eq_ignore_ascii_case(&normalized))
        })
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spellings()[0])
    }
}
