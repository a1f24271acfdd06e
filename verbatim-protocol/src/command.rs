//! Console command grammar
//!
//! One command per line: a two-letter mnemonic, case-insensitive, with an
//! optional decimal argument directly appended (`PW25`). Malformed numerics
//! are reported as errors, never coerced; range checking is the session
//! core's job.

/// A decoded console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `PS`: start a work session
    Start,
    /// `PP`: pause the countdown
    Pause,
    /// `PR`: resume a paused countdown
    Resume,
    /// `PX`: reset and leave pomodoro mode
    Reset,
    /// `PWnn`: work session length in minutes
    SetWorkMinutes(u16),
    /// `PBnn`: short break length in minutes
    SetShortBreakMinutes(u16),
    /// `PLnn`: long break length in minutes
    SetLongBreakMinutes(u16),
    /// `PTn`: color theme index
    SetTheme(usize),
}

/// Why a console line failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Blank line
    Empty,
    /// Mnemonic not in the grammar
    Unknown,
    /// Mnemonic requires an argument and none was given
    MissingArgument,
    /// Argument present but not a plain decimal number
    BadArgument,
}

/// Parse one console line into a [`Command`].
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }
    if line.len() < 2 || !line.is_char_boundary(2) {
        return Err(ParseError::Unknown);
    }

    let (mnemonic, rest) = line.split_at(2);
    let mut code = [0u8; 2];
    for (slot, byte) in code.iter_mut().zip(mnemonic.bytes()) {
        *slot = byte.to_ascii_uppercase();
    }

    match &code {
        b"PS" => bare(Command::Start, rest),
        b"PP" => bare(Command::Pause, rest),
        b"PR" => bare(Command::Resume, rest),
        b"PX" => bare(Command::Reset, rest),
        b"PW" => Ok(Command::SetWorkMinutes(number(rest)?)),
        b"PB" => Ok(Command::SetShortBreakMinutes(number(rest)?)),
        b"PL" => Ok(Command::SetLongBreakMinutes(number(rest)?)),
        b"PT" => Ok(Command::SetTheme(number(rest)? as usize)),
        _ => Err(ParseError::Unknown),
    }
}

fn bare(command: Command, rest: &str) -> Result<Command, ParseError> {
    if rest.trim().is_empty() {
        Ok(command)
    } else {
        Err(ParseError::BadArgument)
    }
}

fn number(rest: &str) -> Result<u16, ParseError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(ParseError::MissingArgument);
    }
    rest.parse().map_err(|_| ParseError::BadArgument)
}
