use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    assemble::assemble,
    brick::PuzzleState,
    cell::CellSet,
    config::GeneratorConfig,
    connectivity::{components, is_connected},
    layout::LayoutGenerator,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("layout is disconnected after {attempts} attempts")]
    LayoutDisconnected { attempts: u32 },
    #[error("could not generate puzzle: every partition of {attempts} attempts was a single brick")]
    DegeneratePartition { attempts: u32 },
    #[error("brick {brick} found no free slot in {attempts} attempts")]
    PlacementExhausted { brick: usize, attempts: u32 },
}

#[derive(Clone, Debug)]
pub struct Generation {
    pub cells: CellSet,
    pub state: PuzzleState,
    /// Indices into `state.bricks` left at their unpacked position.
    pub fallbacks: Vec<usize>,
}

/// Runs layout, assembly, validation, partitioning and packing with one
/// random source.
pub struct PuzzleEngine<L, R = SmallRng> {
    config: GeneratorConfig,
    layout: L,
    rng: R,
}

impl<L: LayoutGenerator> PuzzleEngine<L, SmallRng> {
    pub fn new(config: GeneratorConfig, layout: L) -> Self {
        Self::with_rng(config, layout, SmallRng::from_os_rng())
    }

    pub fn with_seed(config: GeneratorConfig, layout: L, seed: u64) -> Self {
        Self::with_rng(config, layout, SmallRng::seed_from_u64(seed))
    }
}

impl<L: LayoutGenerator, R: Rng> PuzzleEngine<L, R> {
    pub fn with_rng(config: GeneratorConfig, layout: L, rng: R) -> Self {
        Self {
            config,
            layout,
            rng,
        }
    }

    /// Asks the layout for positions until the assembled grid is one
    /// connected shape. The word order is reshuffled before every new try.
    pub fn build_cells(&mut self, words: &[String]) -> Result<CellSet, PuzzleError> {
        let mut order = words.to_vec();

        for attempt in 1..=self.config.layout_attempts {
            if attempt > 1 {
                order.shuffle(&mut self.rng);
            }
            let cells = assemble(&self.layout.generate(&order));
            if is_connected(&cells) {
                return Ok(cells);
            }
            debug!(
                attempt,
                components = components(&cells).len(),
                "layout disconnected, regenerating"
            );
        }

        Err(PuzzleError::LayoutDisconnected {
            attempts: self.config.layout_attempts,
        })
    }

    pub fn generate(&mut self, words: &[String], hint: &str) -> Result<PuzzleState, PuzzleError> {
        self.generate_report(words, hint).map(|g| g.state)
    }

    /// Like [`generate`](Self::generate), but also returns the assembled
    /// grid and the bricks that fell back to their original position.
    pub fn generate_report(
        &mut self,
        words: &[String],
        hint: &str,
    ) -> Result<Generation, PuzzleError> {
        let cells = self.build_cells(words)?;
        let bricks = self.config.partitioner().partition(&cells, &mut self.rng)?;
        let packing = self.config.packer().pack(bricks, &mut self.rng)?;

        info!(
            cells = cells.len(),
            bricks = packing.bricks.len(),
            fallbacks = packing.fallbacks.len(),
            "puzzle generated"
        );

        Ok(Generation {
            state: PuzzleState {
                bricks: packing.bricks,
                hint: hint.to_owned(),
            },
            fallbacks: packing.fallbacks,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GreedyLayout, Orientation, WordPlacement};
    use std::cell::Cell as Counter;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn hint_passes_through() {
        let mut engine = PuzzleEngine::with_seed(GeneratorConfig::default(), GreedyLayout, 9);
        let state = engine.generate(&words(&["matej", "anet"]), "two names").unwrap();
        assert_eq!(state.hint, "two names");
        assert_eq!(state.cell_count(), 8);
    }

    #[test]
    fn report_keeps_the_assembled_grid() {
        let mut engine = PuzzleEngine::with_seed(GeneratorConfig::default(), GreedyLayout, 2);
        let g = engine.generate_report(&words(&["matej", "anet"]), "").unwrap();
        assert_eq!(g.cells.to_string(), "matej\n.n...\n.e...\n.t...\n");
        assert!(g.fallbacks.is_empty());
    }

    #[test]
    fn empty_word_list_is_an_empty_puzzle() {
        let mut engine = PuzzleEngine::with_seed(GeneratorConfig::default(), GreedyLayout, 1);
        let state = engine.generate(&[], "").unwrap();
        assert!(state.bricks.is_empty());
    }

    #[test]
    fn disconnected_layout_gives_up_after_ceiling() {
        let calls = Counter::new(0);
        let layout = |ws: &[String]| -> Vec<WordPlacement> {
            calls.set(calls.get() + 1);
            ws.iter()
                .enumerate()
                .map(|(i, w)| WordPlacement::new(w.as_str(), 0, 2 * i as i32, Orientation::Across))
                .collect()
        };
        let mut engine = PuzzleEngine::with_seed(GeneratorConfig::default(), layout, 4);
        let err = engine.generate(&words(&["abc", "xyz"]), "").unwrap_err();
        assert_eq!(err, PuzzleError::LayoutDisconnected { attempts: 10 });
        drop(engine);
        assert_eq!(calls.get(), 10);
    }

    #[test]
    fn regeneration_recovers_on_a_later_attempt() {
        let mut calls = 0;
        let layout = |ws: &[String]| -> Vec<WordPlacement> {
            calls += 1;
            let gap = if calls < 3 { 2 } else { 1 };
            ws.iter()
                .enumerate()
                .map(|(i, w)| WordPlacement::new(w.as_str(), 0, gap * i as i32, Orientation::Across))
                .collect()
        };
        let mut engine = PuzzleEngine::with_seed(GeneratorConfig::default(), layout, 4);
        let cells = engine.build_cells(&words(&["abc", "xyz"])).unwrap();
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn degenerate_partition_is_an_error() {
        let mut engine = PuzzleEngine::with_seed(GeneratorConfig::default(), GreedyLayout, 5);
        let err = engine.generate(&words(&["ab"]), "").unwrap_err();
        assert_eq!(err, PuzzleError::DegeneratePartition { attempts: 101 });
        assert!(err.to_string().starts_with("could not generate puzzle"));
    }

    #[test]
    fn single_letter_word_is_degenerate() {
        let mut engine = PuzzleEngine::with_seed(GeneratorConfig::default(), GreedyLayout, 1);
        let err = engine.generate(&words(&["a"]), "").unwrap_err();
        assert_eq!(err, PuzzleError::DegeneratePartition { attempts: 101 });
    }
}
