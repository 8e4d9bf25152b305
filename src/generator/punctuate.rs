use rand::Rng;
use rand::rngs::SmallRng;

/// How a sentence ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminator {
    Period,
    /// Joins the sentence to the next one, which then starts lowercase.
    Semicolon,
}

impl Terminator {
    pub fn as_str(self) -> &'static str {
        match self {
            Terminator::Period => ". ",
            Terminator::Semicolon => "; ",
        }
    }

    /// Only inner sentences of a paragraph may end in a semicolon.
    pub fn pick(index: usize, sentence_count: usize, probability: f64, rng: &mut SmallRng) -> Self {
        let inner = index != 0 && index + 1 != sentence_count;
        if inner && rng.gen_bool(probability) {
            Terminator::Semicolon
        } else {
            Terminator::Period
        }
    }
}

/// Word positions (0-based) after which a clause comma may follow.
///
/// Lengths are 1-based, so `min_len..=max_len` maps to positions
/// `min_len - 1..=max_len - 1`. A `min_len` of zero behaves like one.
#[derive(Clone, Copy, Debug)]
pub struct ClauseWindow {
    min_len: usize,
    max_len: usize,
}

impl ClauseWindow {
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }

    pub fn contains(&self, position: usize) -> bool {
        let len = position + 1;
        (self.min_len..=self.max_len).contains(&len)
    }
}

/// Tracks the single clause comma allowed per sentence.
#[derive(Debug)]
pub struct ClauseState {
    window: ClauseWindow,
    probability: f64,
    inserted: bool,
}

impl ClauseState {
    pub fn new(window: ClauseWindow, probability: f64) -> Self {
        Self {
            window,
            probability,
            inserted: false,
        }
    }

    /// Decides whether a comma follows the word at `position`.
    pub fn comma_after(&mut self, position: usize, rng: &mut SmallRng) -> bool {
        if self.inserted || !self.window.contains(position) {
            return false;
        }
        if rng.gen_bool(self.probability) {
            self.inserted = true;
        }
        self.inserted
    }
}
