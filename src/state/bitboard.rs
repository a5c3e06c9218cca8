//
// This file is part of gomoku_mcts.
//
// gomoku_mcts is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// gomoku_mcts is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with gomoku_mcts. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2016-2017 Chris Foster
//

/// A fixed-size set of cells, one bit per cell in row-major order.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Bitboard {
    words: Vec<u64>,
}

impl Bitboard {
    pub fn new(cells: usize) -> Bitboard {
        Bitboard {
            words: vec![0; (cells + 63) / 64],
        }
    }

    pub fn get(&self, index: usize) -> bool {
        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    pub fn set(&mut self, index: usize) {
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    pub fn get_population(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    pub fn intersects(&self, other: &Bitboard) -> bool {
        self.words.iter().zip(&other.words).any(|(a, b)| a & b != 0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_set_across_word_boundary() {
        let mut bitboard = Bitboard::new(130);
        bitboard.set(63);
        bitboard.set(64);
        bitboard.set(129);

        assert!(bitboard.get(63));
        assert!(bitboard.get(64));
        assert!(bitboard.get(129));
        assert!(!bitboard.get(0));
        assert_eq!(bitboard.get_population(), 3);
    }

    #[test]
    fn test_intersects() {
        let mut a = Bitboard::new(100);
        let mut b = Bitboard::new(100);
        a.set(70);
        b.set(71);
        assert!(!a.intersects(&b));
        b.set(70);
        assert!(a.intersects(&b));
    }
}
