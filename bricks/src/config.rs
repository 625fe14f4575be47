use serde::{Deserialize, Serialize};

use crate::{
    pack::{DEFAULT_PLACEMENT_ATTEMPTS, FallbackPolicy, Packer},
    partition::{DEFAULT_PARTITION_RETRIES, Partitioner, SeedOrder},
};

pub const DEFAULT_LAYOUT_ATTEMPTS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Layout requests before giving up on a disconnected grid.
    pub layout_attempts: u32,
    /// Extra partition passes when everything ends up in one brick.
    pub partition_retries: u32,
    /// Ring targets tried per brick while packing.
    pub placement_attempts: u32,
    pub seed_order: SeedOrder,
    pub fallback: FallbackPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            layout_attempts: DEFAULT_LAYOUT_ATTEMPTS,
            partition_retries: DEFAULT_PARTITION_RETRIES,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            seed_order: SeedOrder::Shuffled,
            fallback: FallbackPolicy::Original,
        }
    }
}

impl GeneratorConfig {
    pub fn partitioner(&self) -> Partitioner {
        Partitioner {
            retries: self.partition_retries,
            seed_order: self.seed_order,
        }
    }

    pub fn packer(&self) -> Packer {
        Packer {
            attempts: self.placement_attempts,
            fallback: self.fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: GeneratorConfig =
            serde_json::from_str(r#"{"seed_order":"edge-first","fallback":"fail"}"#).unwrap();
        assert_eq!(cfg.seed_order, SeedOrder::EdgeFirst);
        assert_eq!(cfg.fallback, FallbackPolicy::Fail);
        assert_eq!(cfg.layout_attempts, 10);
        assert_eq!(cfg.partition_retries, 100);
        assert_eq!(cfg.placement_attempts, 1000);
    }
}
