extern crate ansi_term;
extern crate clap;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::{Colour, Style};
use clap::Parser;
use golden::error;
use golden::lang::Error;
use golden::mach::{Event, InputKind, Output, Runtime, Warning};
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io::{BufRead, ErrorKind, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const FILE_NAME: &str = "maumivu.au";
const PREFIX_WIDTH: usize = 12;
const CYCLES: usize = 5000;

/// Interpreter for The Golden.
#[derive(Parser, Debug)]
#[command(name = "golden", version)]
pub struct Config {
    /// Directory holding maumivu.au, or the path of the file itself
    path: Option<String>,
    /// Run this program text instead of a file (also `-`)
    #[arg(short, long, conflicts_with = "path", allow_hyphen_values = true)]
    code: Option<String>,
    /// Print the raw code, the commands and the final memory
    #[arg(long)]
    debug: bool,
    /// Like --debug, also print the jump table and every executed command
    #[arg(long)]
    debug_heavy: bool,
    /// Silence every warning
    #[arg(long)]
    disable_warnings: bool,
    /// Silence the warning for moving left of the first cell
    #[arg(long)]
    disable_too_left_pointer_warning: bool,
    /// Plain output without colors
    #[arg(long)]
    no_ansi: bool,
}

impl Config {
    fn from_args() -> Config {
        // A lone `-` introduces program text.
        let args = std::env::args().map(|arg| if arg == "-" { "--code".to_string() } else { arg });
        Config::parse_from(args)
    }

    fn debug(&self) -> bool {
        self.debug || self.debug_heavy
    }

    fn warns(&self, warning: Warning) -> bool {
        if self.disable_warnings {
            return false;
        }
        match warning {
            Warning::TooLeftPointer => !self.disable_too_left_pointer_warning,
        }
    }
}

pub fn main() {
    let config = Config::from_args();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    match main_loop(&config, interrupted) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

fn main_loop(config: &Config, interrupted: Arc<AtomicBool>) -> std::io::Result<bool> {
    let mut session = Session {
        config,
        console: Console::new(!config.no_ansi)?,
        runtime: Runtime::default(),
        interrupted,
    };
    session.runtime.set_tron(config.debug_heavy);
    if let Some(code) = &config.code {
        return session.run("<code>", code);
    }
    match &config.path {
        Some(path) => {
            let path = program_path(path);
            match load(&path) {
                Ok(text) => session.run(&path.to_string_lossy(), &text),
                Err(error) => {
                    session.console.report(Level::Error, &error.to_string())?;
                    Ok(false)
                }
            }
        }
        None => session.interactive(),
    }
}

struct Session<'a> {
    config: &'a Config,
    console: Console,
    runtime: Runtime,
    interrupted: Arc<AtomicBool>,
}

impl<'a> Session<'a> {
    fn interactive(&mut self) -> std::io::Result<bool> {
        loop {
            let line = match self.console.read_command()? {
                Line::Text(line) => line,
                Line::Interrupt | Line::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.run("<input>", &line)?;
        }
        Ok(true)
    }

    /// Compile and run one program. Returns `false` when it failed.
    fn run(&mut self, source: &str, text: &str) -> std::io::Result<bool> {
        let debug = self.config.debug();
        if debug {
            self.console.report(Level::Debug, &format!("Raw code: {:?}", text))?;
        }
        self.interrupted.store(false, Ordering::SeqCst);
        self.runtime.run_str(source, text);
        if debug && self.runtime.is_running() {
            let program = self.runtime.program();
            let commands = format!("Commands: {}", program);
            self.console.report(Level::Debug, &commands)?;
            if self.config.debug_heavy {
                let jumps = format!("Jumps: {}", program.link());
                let positions: Vec<String> = program
                    .link()
                    .unmatched()
                    .iter()
                    .map(|addr| program.position(*addr).to_string())
                    .collect();
                self.console.report(Level::HeavyDebug, &jumps)?;
                if !positions.is_empty() {
                    let text = format!("Unmatched brackets at {}", positions.join(", "));
                    self.console.report(Level::HeavyDebug, &text)?;
                }
            }
        }
        let success = self.drive()?;
        self.console.finish_line()?;
        if debug {
            let global = format!("Global memory: {}", self.runtime.global());
            let local = format!("Local memory: {}", self.runtime.local());
            self.console.report(Level::Debug, &global)?;
            self.console.report(Level::Debug, &local)?;
        }
        Ok(success)
    }

    fn drive(&mut self) -> std::io::Result<bool> {
        let mut success = true;
        loop {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                self.runtime.interrupt();
            }
            match self.runtime.execute(CYCLES) {
                Event::Stopped => break,
                Event::Running => {}
                Event::Print(output) => self.console.print(&output)?,
                Event::Warning(warning) => {
                    if self.config.warns(warning) {
                        let text = format!(
                            "{} (you can use the --disable-warnings flag to disable all warnings or --disable-{}-warning to disable this particular warning)",
                            warning,
                            warning.name()
                        );
                        self.console.report(Level::Warning, &text)?;
                    }
                }
                Event::Trace(addr) => {
                    let program = self.runtime.program();
                    if let Some(instruction) = program.instruction(addr) {
                        let text = format!(
                            "{} {} | {} | {}",
                            program.position(addr),
                            instruction,
                            self.runtime.global(),
                            self.runtime.local()
                        );
                        self.console.report(Level::HeavyDebug, &text)?;
                    }
                }
                Event::Input(kind) => self.input(kind)?,
                Event::Errors(errors) => {
                    success = false;
                    for error in errors.iter() {
                        self.console.report(Level::Error, &error.to_string())?;
                    }
                }
            }
        }
        Ok(success)
    }

    fn input(&mut self, kind: InputKind) -> std::io::Result<()> {
        self.console.finish_line()?;
        let prompt = match kind {
            InputKind::Number => "# ",
            InputKind::Char => "? ",
        };
        match self.console.read_input(prompt)? {
            Line::Text(line) => {
                self.runtime.enter(&line);
            }
            Line::Interrupt | Line::Eof => self.runtime.interrupt(),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Level {
    Error,
    Warning,
    Debug,
    HeavyDebug,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Debug => "DEBUG",
            Level::HeavyDebug => "HEAVY DEBUG",
        }
    }

    fn style(self) -> Style {
        match self {
            Level::Error => Colour::Fixed(9).bold(),
            Level::Warning => Colour::Fixed(11).normal(),
            Level::Debug => Colour::Fixed(12).normal(),
            Level::HeavyDebug => Colour::Blue.normal(),
        }
    }
}

enum Line {
    Text(String),
    Interrupt,
    Eof,
}

struct Terminal {
    command: Interface<DefaultTerminal>,
    input: Interface<DefaultTerminal>,
}

/// Line editing when both ends are a terminal, plain stdin and stdout
/// otherwise.
struct Console {
    terminal: Option<Terminal>,
    ansi: bool,
    mid_line: bool,
}

impl Console {
    fn new(ansi: bool) -> std::io::Result<Console> {
        let tty = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
        let terminal = if tty {
            let command = Interface::new("golden")?;
            command.set_prompt("> ")?;
            let input = Interface::new("input")?;
            input.set_report_signal(Signal::Interrupt, true);
            Some(Terminal { command, input })
        } else {
            None
        };
        Ok(Console {
            terminal,
            ansi: ansi && tty,
            mid_line: false,
        })
    }

    fn write(&self, args: std::fmt::Arguments) -> std::io::Result<()> {
        match &self.terminal {
            Some(terminal) => terminal.command.write_fmt(args),
            None => {
                let mut stdout = std::io::stdout();
                stdout.write_fmt(args)?;
                stdout.flush()
            }
        }
    }

    fn read_command(&mut self) -> std::io::Result<Line> {
        let command = match &self.terminal {
            Some(terminal) => &terminal.command,
            None => return read_stdin(),
        };
        match command.read_line()? {
            ReadResult::Input(line) => {
                command.add_history_unique(line.clone());
                Ok(Line::Text(line))
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(Line::Eof),
        }
    }

    fn read_input(&mut self, prompt: &str) -> std::io::Result<Line> {
        let input = match &self.terminal {
            Some(terminal) => &terminal.input,
            None => return read_stdin(),
        };
        input.set_prompt(prompt)?;
        match input.read_line()? {
            ReadResult::Input(line) => {
                input.add_history_unique(line.clone());
                Ok(Line::Text(line))
            }
            ReadResult::Signal(Signal::Interrupt) => {
                input.set_buffer("")?;
                input.lock_reader().cancel_read_line()?;
                Ok(Line::Interrupt)
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(Line::Eof),
        }
    }

    fn print(&mut self, output: &Output) -> std::io::Result<()> {
        self.mid_line = *output != Output::Char('\n');
        self.write(format_args!("{}", output))
    }

    fn finish_line(&mut self) -> std::io::Result<()> {
        if self.mid_line {
            self.mid_line = false;
            self.write(format_args!("\n"))?;
        }
        Ok(())
    }

    fn report(&mut self, level: Level, text: &str) -> std::io::Result<()> {
        self.finish_line()?;
        let prefix = format!("{:<width$}", level.label(), width = PREFIX_WIDTH);
        if self.ansi {
            self.write(format_args!("{}{}\n", level.style().paint(prefix), text))
        } else {
            self.write(format_args!("{}{}\n", prefix, text))
        }
    }
}

fn read_stdin() -> std::io::Result<Line> {
    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(Line::Eof);
    }
    Ok(Line::Text(line))
}

/// `dir`, `dir/` and `dir/maumivu.au` all name `dir/maumivu.au`.
fn program_path(arg: &str) -> PathBuf {
    let dir = arg.strip_suffix(FILE_NAME).unwrap_or(arg);
    Path::new(dir).join(FILE_NAME)
}

fn load(path: &Path) -> Result<String, Error> {
    let source: Rc<str> = path.to_string_lossy().into();
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(error) => match error.kind() {
            ErrorKind::NotFound => Err(error!(FileNotFound).in_source(&source)),
            ErrorKind::InvalidData => Err(error!(DiskIoError; "NOT UTF-8").in_source(&source)),
            _ => Err(error!(DiskIoError).in_source(&source)),
        },
    }
}
