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

/// The largest operand in the fact table.
pub const MAX_OPERAND: u8 = 12;

/// A single multiplication fact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    lhs: u8,
    rhs: u8,
    /// The rendered prompt, e.g. `7 × 8`.
    question: String,
    /// The product in decimal.
    answer: String,
}

impl Card {
    pub fn new(lhs: u8, rhs: u8) -> Self {
        let question = format!("{lhs} \u{00D7} {rhs}");
        let answer = (lhs as u32 * rhs as u32).to_string();
        Self {
            lhs,
            rhs,
            question,
            answer,
        }
    }

    pub fn lhs(&self) -> u8 {
        self.lhs
    }

    pub fn rhs(&self) -> u8 {
        self.rhs
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_uses_multiplication_sign() {
        let card = Card::new(7, 8);
        assert_eq!(card.question(), "7 × 8");
        assert!(!card.question().contains('x'));
    }

    #[test]
    fn test_answer() {
        assert_eq!(Card::new(3, 4).answer(), "12");
        assert_eq!(Card::new(12, 12).answer(), "144");
    }

    #[test]
    fn test_zero_has_no_padding() {
        assert_eq!(Card::new(0, 9).answer(), "0");
        assert_eq!(Card::new(12, 0).answer(), "0");
    }

    #[test]
    fn test_answers_match_products() {
        for lhs in 0..=MAX_OPERAND {
            for rhs in 0..=MAX_OPERAND {
                let card = Card::new(lhs, rhs);
                let product = lhs as u32 * rhs as u32;
                assert_eq!(card.answer(), product.to_string());
                assert!(card.answer() == "0" || !card.answer().starts_with('0'));
                assert_eq!((card.lhs(), card.rhs()), (lhs, rhs));
            }
        }
    }
}
