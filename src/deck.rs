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

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::types::card::Card;
use crate::types::card::MAX_OPERAND;

/// The number of cards in a full deck.
pub const DECK_SIZE: usize = (MAX_OPERAND as usize + 1) * (MAX_OPERAND as usize + 1);

/// An ordered sequence of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    #[cfg(test)]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Every fact from `0 × 0` to `12 × 12`, left operand outermost.
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for lhs in 0..=MAX_OPERAND {
            for rhs in 0..=MAX_OPERAND {
                cards.push(Card::new(lhs, rhs));
            }
        }
        Self { cards }
    }

    /// The full deck, shuffled with a generator seeded from OS entropy.
    pub fn shuffled() -> Self {
        let mut rng = StdRng::from_entropy();
        Self::shuffled_with(&mut rng)
    }

    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.shuffle(rng);
        log::debug!("Generated a deck of {} cards.", deck.len());
        deck
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[cfg(test)]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
