use super::{Address, Context, Program};
use crate::error;
use crate::lang::ast::{Command, Instruction, Repeat, Scope};
use crate::lang::Error;
use rand::Rng;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Repetitions done by one step before the machine yields back to `execute`.
const BURST: u64 = 1024;

/// ## Tape machine
///
/// A `Runtime` is one interpreter session. The global context lives as long
/// as the `Runtime` does, so every program loaded into the same session
/// sees the global memory left behind by the previous one. The local
/// context, program counter and loop bookkeeping are reset by `load`.

#[derive(Debug, Default)]
pub struct Runtime {
    global: Context,
    local: Context,
    program: Rc<Program>,
    pc: Address,
    entered: HashSet<Address>,
    input: Option<String>,
    waiting: bool,
    running: bool,
    interrupted: bool,
    tron: bool,
    events: VecDeque<Event>,
    repeating: Option<Repeating>,
}

// What is left of a repeat that did not fit in one step.
#[derive(Debug, Clone, Copy)]
struct Repeating {
    command: Command,
    left: u64,
    warned: bool,
}

/// Events are how the machine talks to the outside world.
#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(Output),
    Input(InputKind),
    Warning(Warning),
    Trace(Address),
    Errors(Vec<Error>),
}

/// Numbers print in shortest round-trip form with at least one decimal:
/// `3.0`, `0.5`, `1e+20`, `2.5e-07`, `inf`, `nan`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Output {
    Number(f64),
    Char(char),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Output::Number(n) => write!(f, "{}", format_number(*n)),
            Output::Char(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputKind {
    Number,
    Char,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Warning {
    TooLeftPointer,
}

impl Warning {
    /// Name used to disable this warning from the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Warning::TooLeftPointer => "too-left-pointer",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Warning::TooLeftPointer => write!(
                f,
                "You moved to the -1 index in memory. This will not crash the program, but should generally be avoided"
            ),
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Compile and load in one go. Compile errors are reported by the
    /// next call to `execute`.
    pub fn run_str(&mut self, source: &str, text: &str) {
        match Program::compile(source, text) {
            Ok(program) => self.load(program),
            Err(error) => {
                self.stop();
                self.events.clear();
                self.events.push_back(Event::Errors(vec![error]));
            }
        }
    }

    pub fn load(&mut self, program: Program) {
        self.program = Rc::new(program);
        self.local = Context::default();
        self.pc = 0;
        self.entered.clear();
        self.input = None;
        self.waiting = false;
        self.interrupted = false;
        self.repeating = None;
        self.events.clear();
        self.running = true;
    }

    /// Supplies a line for a pending input command. Returns `false` when
    /// nothing is waiting for input.
    pub fn enter(&mut self, line: &str) -> bool {
        if !self.waiting {
            return false;
        }
        self.waiting = false;
        self.input = Some(line.trim_end_matches(&['\r', '\n'][..]).to_string());
        true
    }

    pub fn interrupt(&mut self) {
        if self.running {
            self.interrupted = true;
        }
    }

    /// Trace on: emit `Event::Trace` after every executed instruction.
    pub fn set_tron(&mut self, tron: bool) {
        self.tron = tron;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn global(&self) -> &Context {
        &self.global
    }

    pub fn local(&self) -> &Context {
        &self.local
    }

    /// Run at most `cycles` instructions.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        if self.interrupted {
            self.interrupted = false;
            let error = error!(Break, self.program.position(self.pc)).in_source(self.program.source());
            self.stop();
            return Event::Errors(vec![error]);
        }
        if !self.running {
            return Event::Stopped;
        }
        for _ in 0..cycles {
            if self.pc >= self.program.len() {
                self.stop();
                return Event::Stopped;
            }
            let addr = self.pc;
            match self.step() {
                Ok(Some(event)) => return event,
                Ok(None) => {}
                Err(error) => {
                    self.stop();
                    self.events.clear();
                    return Event::Errors(vec![error.in_source(self.program.source())]);
                }
            }
            if self.tron && self.repeating.is_none() {
                self.events.push_back(Event::Trace(addr));
            }
            if let Some(event) = self.events.pop_front() {
                return event;
            }
        }
        Event::Running
    }

    fn stop(&mut self) {
        self.running = false;
        self.waiting = false;
        self.input = None;
        self.repeating = None;
    }

    fn context(&mut self, scope: Scope) -> &mut Context {
        match scope {
            Scope::Global => &mut self.global,
            Scope::Local => &mut self.local,
        }
    }

    fn jump(&self, addr: Address) -> Result<Address> {
        match self.program.link().target(addr) {
            Some(target) => Ok(target),
            None => Err(error!(UnmatchedBracket, self.program.position(addr))),
        }
    }

    // Returns an event when the machine has to wait before this
    // instruction can complete. The program counter is left alone then,
    // and also while a repeat longer than `BURST` is still running.
    fn step(&mut self) -> Result<Option<Event>> {
        let addr = self.pc;
        let instruction = match self.program.instruction(addr) {
            Some(instruction) => *instruction,
            None => return Err(error!(InternalError; "PROGRAM COUNTER OUT OF RANGE")),
        };
        let scope = instruction.scope;
        let cell = self.context(scope).cell();
        let (command, count) = match self.repeating {
            Some(repeating) => (repeating.command, repeating.left),
            None => match resolve(&instruction, cell) {
                Some(resolved) => resolved,
                None => {
                    let position = self.program.position(addr);
                    return Err(error!(InvalidNumber, position; "REPEAT COUNT IS NOT FINITE"));
                }
            },
        };
        use Command::*;
        match command {
            Increment | Decrement | Add | Subtract | Multiply | Divide | MoveRight | MoveLeft => {
                let mut warned = self.repeating.take().map_or(false, |r| r.warned);
                let burst = count.min(BURST);
                for _ in 0..burst {
                    if !operate(self.context(scope), command) && !warned {
                        warned = true;
                        self.events.push_back(Event::Warning(Warning::TooLeftPointer));
                    }
                }
                if count > burst {
                    self.repeating = Some(Repeating {
                        command,
                        left: count - burst,
                        warned,
                    });
                    return Ok(None);
                }
            }
            SwitchTape => self.context(scope).switch(),
            Random => *self.context(scope).cell_mut() = rand::thread_rng().gen(),
            Swap => std::mem::swap(self.global.cell_mut(), self.local.cell_mut()),
            OutputNumber => self.events.push_back(Event::Print(Output::Number(cell))),
            OutputChar => {
                let code = cell.floor();
                let ch = if code >= 0.0 && code <= u32::MAX as f64 {
                    std::char::from_u32(code as u32)
                } else {
                    None
                };
                match ch {
                    Some(ch) => self.events.push_back(Event::Print(Output::Char(ch))),
                    None => return Err(error!(InvalidCharacter, self.program.position(addr))),
                }
            }
            InputNumber | InputChar => {
                let line = match self.input.take() {
                    Some(line) => line,
                    None => {
                        self.waiting = true;
                        return Ok(Some(Event::Input(if command == InputNumber {
                            InputKind::Number
                        } else {
                            InputKind::Char
                        })));
                    }
                };
                let value = if command == InputNumber {
                    match line.trim().parse::<f64>() {
                        Ok(n) => n,
                        Err(_) => return Err(error!(InvalidNumber, self.program.position(addr))),
                    }
                } else {
                    match line.chars().next() {
                        Some(ch) => ch as u32 as f64,
                        None => return Err(error!(InvalidInput, self.program.position(addr); "EMPTY LINE")),
                    }
                };
                *self.context(scope).cell_mut() = value;
            }
            WhileStart => {
                let target = self.jump(addr)?;
                if cell == 0.0 {
                    self.entered.remove(&addr);
                    self.pc = target;
                } else {
                    self.entered.insert(addr);
                }
            }
            DoWhileStart => {
                let target = self.jump(addr)?;
                if cell == 0.0 && self.entered.contains(&addr) {
                    self.entered.remove(&addr);
                    self.pc = target;
                } else {
                    self.entered.insert(addr);
                }
            }
            WhileEnd | DoWhileEnd => {
                let target = self.jump(addr)?;
                if cell == 0.0 {
                    self.entered.remove(&addr);
                } else {
                    self.pc = target;
                }
            }
            Floor | Ceil | BreakEqual | BreakLess | BreakGreater => {}
        }
        self.pc += 1;
        Ok(None)
    }
}

/// Resolve the repeat annotation. A negative count runs the opposite
/// command that many times. `None` when the count comes from a cell
/// holding an infinity or NaN.
fn resolve(instruction: &Instruction, cell: f64) -> Option<(Command, u64)> {
    let n = match instruction.repeat {
        Repeat::Once => return Some((instruction.command, 1)),
        Repeat::Times(n) => n,
        Repeat::Cell => {
            let n = cell.floor();
            if !n.is_finite() {
                return None;
            }
            n as i64
        }
    };
    if n < 0 {
        match instruction.command.opposite() {
            Some(opposite) => Some((opposite, n.unsigned_abs())),
            None => Some((instruction.command, 0)),
        }
    } else {
        Some((instruction.command, n as u64))
    }
}

// Shortest round-trip digits, exponent from 1e16 up and below 1e-4,
// written with a sign and at least two digits.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    let s = format!("{:?}", n);
    match s.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => s,
    }
}

// Returns `false` when the cursor fell off the left end of the tape.
fn operate(context: &mut Context, command: Command) -> bool {
    let rhs = context.inactive_cell();
    match command {
        Command::MoveRight => context.active_tape_mut().right(),
        Command::MoveLeft => return context.active_tape_mut().left(),
        Command::Increment => *context.cell_mut() += 1.0,
        Command::Decrement => *context.cell_mut() -= 1.0,
        Command::Add => *context.cell_mut() += rhs,
        Command::Subtract => *context.cell_mut() -= rhs,
        Command::Multiply => *context.cell_mut() *= rhs,
        Command::Divide => *context.cell_mut() /= rhs,
        _ => debug_assert!(false, "not a tape operation: {}", command),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instruction(s: &str) -> Instruction {
        s.parse().unwrap()
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(&instruction("!"), 9.0), Some((Command::Increment, 1)));
        assert_eq!(resolve(&instruction("|3|!"), 9.0), Some((Command::Increment, 3)));
        assert_eq!(resolve(&instruction("|-2|!"), 9.0), Some((Command::Decrement, 2)));
        assert_eq!(resolve(&instruction("||>"), 2.7), Some((Command::MoveRight, 2)));
        assert_eq!(resolve(&instruction("||>"), -2.2), Some((Command::MoveLeft, 3)));
        assert_eq!(resolve(&instruction("|0|/"), 1.0), Some((Command::Divide, 0)));
    }

    #[test]
    fn test_resolve_not_finite() {
        assert_eq!(resolve(&instruction("||*"), f64::NAN), None);
        assert_eq!(resolve(&instruction("||!"), f64::INFINITY), None);
        assert_eq!(resolve(&instruction("||<"), f64::NEG_INFINITY), None);
        assert_eq!(resolve(&instruction("|5|!"), f64::INFINITY), Some((Command::Increment, 5)));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3.0");
        assert_eq!(format_number(-13.5), "-13.5");
        assert_eq!(format_number(1e20), "1e+20");
        assert_eq!(format_number(2.5e-7), "2.5e-07");
        assert_eq!(format_number(1.5e300), "1.5e+300");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }

    #[test]
    fn test_operate() {
        let mut c = Context::new();
        *c.cell_mut() = 6.0;
        c.switch();
        *c.cell_mut() = 4.0;
        c.switch();
        assert!(operate(&mut c, Command::Subtract));
        assert_eq!(c.cell(), 2.0);
        assert!(operate(&mut c, Command::Divide));
        assert_eq!(c.cell(), 0.5);
        assert!(!operate(&mut c, Command::MoveLeft));
        assert_eq!(c.cell(), 0.0);
        assert_eq!(c.active_tape().cells(), &[0.0, 0.5]);
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        let mut c = Context::new();
        *c.cell_mut() = 1.0;
        operate(&mut c, Command::Divide);
        assert_eq!(c.cell(), f64::INFINITY);
    }
}
