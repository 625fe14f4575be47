use bricks::PuzzleState;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct JsonRecord<'a> {
    pub schema: &'static str,
    pub id: u32,
    pub seed: u64,
    pub words: &'a [String],
    #[serde(flatten)]
    pub state: PuzzleState,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<usize>,
}
