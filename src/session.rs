// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::deck::Deck;
use crate::ratings::RatingLog;
use crate::ratings::RatingRecord;
use crate::types::card::Card;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// The question is shown and the answer is hidden.
    AwaitingReveal,
    /// The answer is shown and a rating is expected.
    AwaitingRating,
}

/// Events the session raises for whoever is presenting it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Notification {
    /// The last card was rated and the deck starts over.
    EndOfDeck,
}

/// A drill session over a single deck.
///
/// Transitions that are not valid in the current phase are ignored, as is
/// every operation on an empty deck.
pub struct Session {
    deck: Deck,
    index: usize,
    phase: Phase,
    log: RatingLog,
}

impl Session {
    pub fn new(deck: Deck, log: RatingLog) -> Self {
        let mut session = Self {
            deck,
            index: 0,
            phase: Phase::AwaitingReveal,
            log,
        };
        session.show_current_question();
        session
    }

    /// Show the current card's question and hide its answer.
    pub fn show_current_question(&mut self) {
        let Some(card) = self.deck.get(self.index) else {
            return;
        };
        log::debug!(
            "Card {}/{}: {} x {}",
            self.index + 1,
            self.deck.len(),
            card.lhs(),
            card.rhs()
        );
        self.phase = Phase::AwaitingReveal;
    }

    pub fn reveal_answer(&mut self) {
        if self.deck.is_empty() || self.phase == Phase::AwaitingRating {
            log::debug!("Ignoring reveal: answer already shown or deck empty.");
            return;
        }
        self.phase = Phase::AwaitingRating;
    }

    /// Log a rating for the current card and move to the next one.
    pub fn rate(&mut self, rating: Rating) -> Option<Notification> {
        if self.deck.is_empty() || self.phase != Phase::AwaitingRating {
            log::debug!("Ignoring rating: answer not revealed.");
            return None;
        }
        let record = RatingRecord {
            timestamp: Timestamp::now(),
            card_index: self.index,
            rating,
        };
        if let Err(e) = self.log.append(&record) {
            log::warn!(
                "Could not write rating to {}: {}",
                self.log.path().display(),
                e.message()
            );
        }
        self.advance()
    }

    /// Move to the next card, wrapping to the first after the last.
    pub fn advance(&mut self) -> Option<Notification> {
        if self.deck.is_empty() {
            return None;
        }
        self.index += 1;
        let notification = if self.index >= self.deck.len() {
            log::debug!("Reached end of deck.");
            self.index = 0;
            Some(Notification::EndOfDeck)
        } else {
            None
        };
        self.show_current_question();
        notification
    }

    /// Start over with a new deck.
    pub fn restart(&mut self, deck: Deck) {
        self.deck = deck;
        self.index = 0;
        self.phase = Phase::AwaitingReveal;
        self.show_current_question();
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.index)
    }

    pub fn question(&self) -> Option<&str> {
        self.current_card().map(Card::question)
    }

    /// The current answer, once revealed.
    pub fn answer(&self) -> Option<&str> {
        match self.phase {
            Phase::AwaitingRating => self.current_card().map(Card::answer),
            Phase::AwaitingReveal => None,
        }
    }

    pub fn rating_enabled(&self) -> bool {
        !self.deck.is_empty() && self.phase() == Phase::AwaitingRating
    }

    pub fn reveal_enabled(&self) -> bool {
        !self.deck.is_empty() && self.phase() == Phase::AwaitingReveal
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;
    use std::path::Path;

    use tempfile::TempDir;
    use tempfile::tempdir;

    use super::*;
    use crate::deck::DECK_SIZE;
    use crate::error::Fallible;

    fn session_with(cards: Vec<Card>) -> Fallible<(TempDir, Session)> {
        let dir = tempdir()?;
        let log = RatingLog::in_directory(dir.path());
        Ok((dir, Session::new(Deck::from_cards(cards), log)))
    }

    fn log_lines(dir: &Path) -> Vec<String> {
        match read_to_string(RatingLog::in_directory(dir).path()) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    #[test]
    fn test_two_card_walkthrough() -> Fallible<()> {
        let (dir, mut session) = session_with(vec![Card::new(3, 4), Card::new(7, 7)])?;
        assert_eq!(session.question(), Some("3 × 4"));
        assert_eq!(session.answer(), None);
        assert!(!session.rating_enabled());

        session.reveal_answer();
        assert_eq!(session.answer(), Some("12"));
        assert!(session.rating_enabled());

        assert_eq!(session.rate(Rating::Good), None);
        assert_eq!(session.index(), 1);
        assert_eq!(session.question(), Some("7 × 7"));
        assert_eq!(session.phase(), Phase::AwaitingReveal);
        let lines = log_lines(dir.path());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("|0|G"));

        session.reveal_answer();
        assert_eq!(session.answer(), Some("49"));
        assert_eq!(session.rate(Rating::Bad), Some(Notification::EndOfDeck));
        assert_eq!(session.index(), 0);
        assert_eq!(session.question(), Some("3 × 4"));
        let lines = log_lines(dir.path());
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("|1|B"));
        Ok(())
    }

    #[test]
    fn test_reveal_is_idempotent() -> Fallible<()> {
        let (_dir, mut session) = session_with(vec![Card::new(2, 5)])?;
        session.reveal_answer();
        let phase = session.phase();
        let answer = session.answer().map(str::to_string);
        session.reveal_answer();
        assert_eq!(session.phase(), phase);
        assert_eq!(session.answer().map(str::to_string), answer);
        assert_eq!(session.index(), 0);
        Ok(())
    }

    #[test]
    fn test_rate_before_reveal_is_ignored() -> Fallible<()> {
        let (dir, mut session) = session_with(vec![Card::new(1, 2), Card::new(3, 4)])?;
        assert_eq!(session.rate(Rating::Meh), None);
        assert_eq!(session.index(), 0);
        assert_eq!(session.phase(), Phase::AwaitingReveal);
        assert!(log_lines(dir.path()).is_empty());
        Ok(())
    }

    #[test]
    fn test_rate_advances_by_one() -> Fallible<()> {
        let (dir, mut session) = session_with(Deck::ordered().cards().to_vec())?;
        for expected in 1..=3 {
            session.reveal_answer();
            session.rate(Rating::Meh);
            assert_eq!(session.index(), expected);
            assert_eq!(session.phase(), Phase::AwaitingReveal);
            assert_eq!(log_lines(dir.path()).len(), expected);
        }
        Ok(())
    }

    #[test]
    fn test_full_deck_wraps_once() -> Fallible<()> {
        let (dir, mut session) = session_with(Deck::shuffled().cards().to_vec())?;
        let first = session.question().map(str::to_string);
        let mut notifications = 0;
        for _ in 0..DECK_SIZE {
            session.reveal_answer();
            if session.rate(Rating::Good).is_some() {
                notifications += 1;
            }
        }
        assert_eq!(notifications, 1);
        assert_eq!(session.index(), 0);
        // Wrapping keeps the shuffled order.
        assert_eq!(session.question().map(str::to_string), first);
        let lines = log_lines(dir.path());
        assert_eq!(lines.len(), DECK_SIZE);
        assert!(lines[DECK_SIZE - 1].ends_with("|168|G"));
        Ok(())
    }

    #[test]
    fn test_advance_without_rating() -> Fallible<()> {
        let (dir, mut session) = session_with(vec![Card::new(1, 1), Card::new(2, 2)])?;
        session.reveal_answer();
        assert_eq!(session.advance(), None);
        assert_eq!(session.phase(), Phase::AwaitingReveal);
        assert_eq!(session.advance(), Some(Notification::EndOfDeck));
        assert_eq!(session.index(), 0);
        assert!(log_lines(dir.path()).is_empty());
        Ok(())
    }

    #[test]
    fn test_log_failure_does_not_block() -> Fallible<()> {
        let dir = tempdir()?;
        let log = RatingLog::new(dir.path().join("missing").join("ratings.log"));
        let deck = Deck::from_cards(vec![Card::new(6, 7), Card::new(8, 9)]);
        let mut session = Session::new(deck, log);
        session.reveal_answer();
        assert_eq!(session.rate(Rating::Good), None);
        assert_eq!(session.index(), 1);
        assert_eq!(session.question(), Some("8 × 9"));
        Ok(())
    }

    #[test]
    fn test_empty_deck_is_inert() -> Fallible<()> {
        let (dir, mut session) = session_with(Vec::new())?;
        session.show_current_question();
        session.reveal_answer();
        assert_eq!(session.rate(Rating::Good), None);
        assert_eq!(session.advance(), None);
        assert_eq!(session.index(), 0);
        assert_eq!(session.question(), None);
        assert_eq!(session.answer(), None);
        assert!(!session.rating_enabled());
        assert!(!session.reveal_enabled());
        assert!(log_lines(dir.path()).is_empty());
        Ok(())
    }

    #[test]
    fn test_restart() -> Fallible<()> {
        let (_dir, mut session) = session_with(vec![Card::new(1, 1), Card::new(2, 2)])?;
        session.reveal_answer();
        session.rate(Rating::Good);
        session.reveal_answer();
        session.restart(Deck::from_cards(vec![Card::new(5, 5)]));
        assert_eq!(session.index(), 0);
        assert_eq!(session.deck_len(), 1);
        assert_eq!(session.phase(), Phase::AwaitingReveal);
        assert_eq!(session.question(), Some("5 × 5"));
        Ok(())
    }
}
