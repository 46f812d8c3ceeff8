use std::collections::VecDeque;

/// ## Tape memory
///
/// A tape starts as a single `0.0` cell and grows by one cell whenever
/// the cursor walks off either end. The cursor is always a valid index.

#[derive(Debug, Clone, PartialEq)]
pub struct Tape {
    cells: VecDeque<f64>,
    cursor: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Tape {
            cells: VecDeque::from(vec![0.0]),
            cursor: 0,
        }
    }
}

impl Tape {
    pub fn cells(&self) -> &VecDeque<f64> {
        &self.cells
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn get(&self) -> f64 {
        self.cells[self.cursor]
    }

    pub fn get_mut(&mut self) -> &mut f64 {
        &mut self.cells[self.cursor]
    }

    pub fn right(&mut self) {
        self.cursor += 1;
        if self.cursor >= self.cells.len() {
            self.cells.push_back(0.0);
        }
    }

    /// Returns `false` if the tape had to grow at the front.
    pub fn left(&mut self) -> bool {
        if self.cursor == 0 {
            self.cells.push_front(0.0);
            false
        } else {
            self.cursor -= 1;
            true
        }
    }
}

/// Two tapes and the selector of the active one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Context {
    tapes: [Tape; 2],
    active: usize,
}

impl Context {
    pub fn new() -> Context {
        Context::default()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn tape(&self, index: usize) -> &Tape {
        &self.tapes[index]
    }

    pub fn active_tape(&self) -> &Tape {
        &self.tapes[self.active]
    }

    pub fn active_tape_mut(&mut self) -> &mut Tape {
        &mut self.tapes[self.active]
    }

    pub fn cell(&self) -> f64 {
        self.tapes[self.active].get()
    }

    pub fn cell_mut(&mut self) -> &mut f64 {
        self.tapes[self.active].get_mut()
    }

    pub fn inactive_cell(&self) -> f64 {
        self.tapes[1 - self.active].get()
    }

    pub fn switch(&mut self) {
        self.active = 1 - self.active;
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:?} {:?} cursors [{}, {}] active {}",
            self.tapes[0].cells,
            self.tapes[1].cells,
            self.tapes[0].cursor,
            self.tapes[1].cursor,
            self.active
        )
    }
}
