// collects the board size and game mode from the player before the game starts
// size goes to size.txt, mode goes to mode.txt, one integer per file
use colored::Colorize;
use std::fs;
use std::io;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const SIZE_FILE: &str = "size.txt";
const MODE_FILE: &str = "mode.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Easy = 1,
    Hard = 2,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Easy, GameMode::Hard];

    pub const fn id(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::Easy => "Easy",
            GameMode::Hard => "Hard",
        }
    }
}

/// What counts as an acceptable integer for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPolicy {
    Range { min: u32, max: u32 },
    OneOf(&'static [u32]),
}

impl InputPolicy {
    pub const BOARD_SIZE: InputPolicy = InputPolicy::Range { min: 4, max: 10 };
    pub const GAME_MODE: InputPolicy = InputPolicy::OneOf(&[1, 2]);

    pub fn accepts(&self, value: u32) -> bool {
        match self {
            InputPolicy::Range { min, max } => value >= *min && value <= *max,
            InputPolicy::OneOf(allowed) => allowed.contains(&value),
        }
    }
}

// a line is only worth parsing if it is all digits
// anything else (letters, '.', '-', spaces, empty line) means reprompt
fn is_well_formed(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

/// Reads lines until one parses to an integer the policy accepts, printing
/// `retry_message` after every rejected attempt. Only fails if the input
/// stream itself fails (EOF before an acceptable line counts as failure).
pub fn read_validated<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    policy: InputPolicy,
    retry_message: &str,
) -> io::Result<u32> {
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a value",
            ));
        }
        let line = line.trim_end_matches(['\r', '\n']);

        if is_well_formed(line) {
            // digit strings too long for u32 fail the parse and fall through
            if let Ok(value) = line.parse::<u32>() {
                if policy.accepts(value) {
                    return Ok(value);
                }
            }
        }

        writeln!(output, "{}", retry_message.red())?;
        output.flush()?;
    }
}

/// Writes the accepted integer as a single decimal line, replacing any
/// previous contents of the file.
pub fn write_value(path: &Path, value: u32) -> io::Result<()> {
    fs::write(path, format!("{}\n", value))
}

#[derive(Debug, Clone)]
pub struct SetupPrompt {
    size_file: PathBuf,
    mode_file: PathBuf,
}

impl SetupPrompt {
    pub fn new() -> Self {
        SetupPrompt {
            size_file: PathBuf::from(SIZE_FILE),
            mode_file: PathBuf::from(MODE_FILE),
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        self.run_with(&mut input, &mut output)
    }

    // size is always asked before mode
    fn run_with<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> anyhow::Result<()> {
        use anyhow::Context;

        writeln!(output, "Enter your desired board size:")?;
        writeln!(output, "(Number must be between 4 and 10)")?;
        output.flush()?;
        let size = read_validated(
            input,
            output,
            InputPolicy::BOARD_SIZE,
            "Invalid entry. Enter an integer between 4 and 10:",
        )?;
        write_value(&self.size_file, size)
            .with_context(|| format!("cannot write {}", self.size_file.display()))?;

        writeln!(output, "Select a game mode:")?;
        for mode in GameMode::ALL {
            writeln!(output, "{}. {}", mode.id(), mode.label())?;
        }
        output.flush()?;
        let mode = read_validated(
            input,
            output,
            InputPolicy::GAME_MODE,
            "Invalid entry. Enter either 1 (for easy mode) or 2 (for hard mode):",
        )?;
        write_value(&self.mode_file, mode)
            .with_context(|| format!("cannot write {}", self.mode_file.display()))?;

        Ok(())
    }
}

impl Default for SetupPrompt {
    fn default() -> Self {
        SetupPrompt::new()
    }
}
