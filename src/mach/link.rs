use super::Address;
use crate::lang::ast::{Command, Instruction, Scope};
use std::collections::BTreeMap;

/// Loop categories. Brackets of different categories never pair up.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum LoopKind {
    While,
    DoWhile,
    WhileLocal,
    DoWhileLocal,
}

impl LoopKind {
    pub const ALL: [LoopKind; 4] = [
        LoopKind::While,
        LoopKind::DoWhile,
        LoopKind::WhileLocal,
        LoopKind::DoWhileLocal,
    ];

    fn index(self) -> usize {
        match self {
            LoopKind::While => 0,
            LoopKind::DoWhile => 1,
            LoopKind::WhileLocal => 2,
            LoopKind::DoWhileLocal => 3,
        }
    }

    fn local(self) -> LoopKind {
        match self {
            LoopKind::While | LoopKind::WhileLocal => LoopKind::WhileLocal,
            LoopKind::DoWhile | LoopKind::DoWhileLocal => LoopKind::DoWhileLocal,
        }
    }
}

impl std::fmt::Display for LoopKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LoopKind::While => write!(f, "while"),
            LoopKind::DoWhile => write!(f, "do_while"),
            LoopKind::WhileLocal => write!(f, "while_local"),
            LoopKind::DoWhileLocal => write!(f, "do_while_local"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Delimiter {
    Open,
    Close,
}

/// Classify an instruction as a loop delimiter.
pub fn bracket(instruction: &Instruction) -> Option<(LoopKind, Delimiter)> {
    let (kind, delimiter) = match instruction.command {
        Command::WhileStart => (LoopKind::While, Delimiter::Open),
        Command::WhileEnd => (LoopKind::While, Delimiter::Close),
        Command::DoWhileStart => (LoopKind::DoWhile, Delimiter::Open),
        Command::DoWhileEnd => (LoopKind::DoWhile, Delimiter::Close),
        _ => return None,
    };
    match instruction.scope {
        Scope::Global => Some((kind, delimiter)),
        Scope::Local => Some((kind.local(), delimiter)),
    }
}

#[derive(Debug)]
struct Pending {
    kind: LoopKind,
    open: Address,
    imbalance: isize,
}

/// ## Loop jump table
///
/// Every open delimiter is tracked with its own running imbalance instead
/// of a stack per category. An entry resolves on the first closing
/// delimiter of its category that brings the imbalance back to zero.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Link {
    jumps: [BTreeMap<Address, Address>; 4],
    unmatched: Vec<Address>,
}

impl Link {
    pub fn new(instructions: &[Instruction]) -> Link {
        let mut link = Link::default();
        let mut pending: Vec<Pending> = vec![];
        for (addr, instruction) in instructions.iter().enumerate() {
            let (kind, delimiter) = match bracket(instruction) {
                Some(b) => b,
                None => continue,
            };
            if delimiter == Delimiter::Open {
                pending.push(Pending {
                    kind,
                    open: addr,
                    imbalance: 0,
                });
            }
            for entry in pending.iter_mut() {
                if entry.kind != kind {
                    continue;
                }
                match delimiter {
                    Delimiter::Open => entry.imbalance += 1,
                    Delimiter::Close => entry.imbalance -= 1,
                }
            }
            if delimiter == Delimiter::Close {
                match pending.iter().position(|entry| entry.imbalance == 0) {
                    Some(index) => {
                        let entry = pending.remove(index);
                        link.insert(entry.kind, entry.open, addr);
                    }
                    None => link.unmatched.push(addr),
                }
            }
        }
        link.unmatched.extend(pending.iter().map(|entry| entry.open));
        link.unmatched.sort_unstable();
        link
    }

    fn insert(&mut self, kind: LoopKind, open: Address, close: Address) {
        let jumps = &mut self.jumps[kind.index()];
        jumps.insert(open, close);
        jumps.insert(close, open);
    }

    /// Partner of the delimiter at `addr`, whatever its category.
    pub fn target(&self, addr: Address) -> Option<Address> {
        self.jumps.iter().find_map(|jumps| jumps.get(&addr).copied())
    }

    pub fn jumps(&self, kind: LoopKind) -> &BTreeMap<Address, Address> {
        &self.jumps[kind.index()]
    }

    /// Delimiters left without a partner, in address order.
    pub fn unmatched(&self) -> &[Address] {
        &self.unmatched
    }

    pub fn is_empty(&self) -> bool {
        self.jumps.iter().all(|jumps| jumps.is_empty())
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut first = true;
        for kind in LoopKind::ALL.iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}: {{", kind)?;
            let pairs: Vec<String> = self
                .jumps(*kind)
                .iter()
                .map(|(from, to)| format!("{}: {}", from, to))
                .collect();
            write!(f, "{}}}", pairs.join(", "))?;
        }
        Ok(())
    }
}
