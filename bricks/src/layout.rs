use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cell::Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Across,
    Down,
}

impl Orientation {
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Across => (1, 0),
            Orientation::Down => (0, 1),
        }
    }

    fn flip(self) -> Self {
        match self {
            Orientation::Across => Orientation::Down,
            Orientation::Down => Orientation::Across,
        }
    }
}

/// One word as positioned by a crossword layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPlacement {
    pub answer: String,
    pub startx: i32,
    pub starty: i32,
    pub orientation: Orientation,
}

impl WordPlacement {
    pub fn new(answer: impl Into<String>, startx: i32, starty: i32, orientation: Orientation) -> Self {
        Self {
            answer: answer.into(),
            startx,
            starty,
            orientation,
        }
    }

    /// Coordinates and letters of the word, in reading order.
    pub fn letters(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        let (dx, dy) = self.orientation.step();
        let start = Coord::new(self.startx, self.starty);
        self.answer
            .chars()
            .enumerate()
            .map(move |(i, ch)| (start.offset(dx * i as i32, dy * i as i32), ch))
    }
}

/// Assigns grid positions to a word list. Implementations may leave the
/// words disconnected; the engine asks again with a reshuffled list.
pub trait LayoutGenerator {
    fn generate(&mut self, words: &[String]) -> Vec<WordPlacement>;
}

impl<F> LayoutGenerator for F
where
    F: FnMut(&[String]) -> Vec<WordPlacement>,
{
    fn generate(&mut self, words: &[String]) -> Vec<WordPlacement> {
        self(words)
    }
}

/// Minimal crossing layout: every word after the first is laid
/// perpendicular through a shared letter of an already placed word. Words
/// that cannot cross anything go on a separate row below the grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyLayout;

impl GreedyLayout {
    fn fits(grid: &HashMap<Coord, char>, p: &WordPlacement) -> bool {
        let mut crossings = 0;
        for (at, ch) in p.letters() {
            match grid.get(&at) {
                Some(&existing) if existing == ch => crossings += 1,
                Some(_) => return false,
                None => {}
            }
        }
        crossings > 0
    }

    fn crossing_for(
        grid: &HashMap<Coord, char>,
        placed: &[WordPlacement],
        word: &str,
    ) -> Option<WordPlacement> {
        for host in placed {
            let orientation = host.orientation.flip();
            let (dx, dy) = orientation.step();
            for (at, host_ch) in host.letters() {
                for (i, ch) in word.chars().enumerate() {
                    if ch != host_ch {
                        continue;
                    }
                    let start = at.offset(-dx * i as i32, -dy * i as i32);
                    let cand = WordPlacement::new(word, start.x, start.y, orientation);
                    if Self::fits(grid, &cand) {
                        return Some(cand);
                    }
                }
            }
        }
        None
    }
}

impl LayoutGenerator for GreedyLayout {
    fn generate(&mut self, words: &[String]) -> Vec<WordPlacement> {
        let mut grid: HashMap<Coord, char> = HashMap::new();
        let mut placed: Vec<WordPlacement> = Vec::with_capacity(words.len());

        for word in words.iter().filter(|w| !w.is_empty()) {
            let p = if placed.is_empty() {
                WordPlacement::new(word.as_str(), 0, 0, Orientation::Across)
            } else if let Some(p) = Self::crossing_for(&grid, &placed, word) {
                p
            } else {
                let bottom = grid.keys().map(|c| c.y).max().unwrap_or(0);
                WordPlacement::new(word.as_str(), 0, bottom + 2, Orientation::Across)
            };
            for (at, ch) in p.letters() {
                grid.entry(at).or_insert(ch);
            }
            placed.push(p);
        }

        placed
    }
}
