//! Flashcard deck state machine

use crate::bank::{Flashcard, QuestionBank, Subject};
use crate::sampler;

/// A flashcard drill over one subject's cards
///
/// Holds the card order, a clamped cursor, the flip state of the current
/// card, and which cards were marked as known. Reordering goes through the
/// sampler exactly once per explicit shuffle; navigation never reorders.
pub struct Deck {
    cards: Vec<Flashcard>,
    current: usize,
    flipped: bool,
    known: Vec<bool>,
}

impl Deck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        let known = vec![false; cards.len()];
        Self {
            cards,
            current: 0,
            flipped: false,
            known,
        }
    }

    /// Build a deck from one subject's bank cards, in bank order
    pub fn for_subject(bank: &QuestionBank, subject: Subject) -> Self {
        Self::new(bank.flashcards(subject).to_vec())
    }

    /// The card under the cursor; `None` only for an empty deck
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.cards.get(self.current)
    }

    /// Toggle between the front and back of the current card
    pub fn flip(&mut self) {
        if !self.cards.is_empty() {
            self.flipped = !self.flipped;
        }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Move to the next card, clamped; shows the front again
    ///
    /// "Review later" is this same operation: skipping a card leaves it
    /// unmarked, exactly like never visiting it.
    pub fn advance(&mut self) {
        if self.current + 1 < self.cards.len() {
            self.current += 1;
            self.flipped = false;
        }
    }

    /// Move to the previous card, clamped; shows the front again
    pub fn retreat(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.flipped = false;
        }
    }

    /// Jump straight to a card, clamped to the deck bounds
    pub fn jump_to(&mut self, index: usize) {
        if self.cards.is_empty() {
            return;
        }
        self.current = index.min(self.cards.len() - 1);
        self.flipped = false;
    }

    /// Mark the current card as known and move on
    pub fn mark_known(&mut self) {
        if let Some(slot) = self.known.get_mut(self.current) {
            *slot = true;
        }
        self.advance();
    }

    pub fn is_known(&self, index: usize) -> bool {
        self.known.get(index).copied().unwrap_or(false)
    }

    pub fn known_count(&self) -> usize {
        self.known.iter().filter(|&&k| k).count()
    }

    /// Re-draw the card order and restart the drill
    ///
    /// Uses the sampler over the full deck, then resets cursor, flip state,
    /// and known marks.
    pub fn shuffle(&mut self) {
        self.cards = sampler::sample(&self.cards, self.cards.len());
        self.current = 0;
        self.flipped = false;
        self.known = vec![false; self.cards.len()];
    }

    /// 0-based cursor position
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
