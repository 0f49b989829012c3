//! Construction-time settings for the finders: [`SearchConfig`].

use thiserror::Error;

/// Default side length of the square search window, in tiles.
pub const DEFAULT_SEARCH_MAP_SIZE: usize = 128;
/// Default capacity of the breadth-first frontier ring buffer.
pub const DEFAULT_RING_BUFFER_SIZE: usize = 4096;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ring buffer size must be a non-zero power of two, got {0}")]
    RingBufferNotPowerOfTwo(usize),

    #[error("search map size must be greater than zero")]
    EmptySearchMap,
}

/// Search window and scratch-buffer settings shared by the finders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Clear the direction and distance maps before every search.
    pub reset_on_search: bool,
    /// Side length of the square window centred on the source.
    pub search_map_size: usize,
    /// Capacity of the frontier ring buffer; must be a power of two.
    pub ring_buffer_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            reset_on_search: true,
            search_map_size: DEFAULT_SEARCH_MAP_SIZE,
            ring_buffer_size: DEFAULT_RING_BUFFER_SIZE,
        }
    }
}

impl SearchConfig {
    pub fn with_reset_on_search(mut self, reset: bool) -> Self {
        self.reset_on_search = reset;
        self
    }

    pub fn with_search_map_size(mut self, size: usize) -> Self {
        self.search_map_size = size;
        self
    }

    pub fn with_ring_buffer_size(mut self, size: usize) -> Self {
        self.ring_buffer_size = size;
        self
    }

    /// Number of tiles in the search window.
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.search_map_size * self.search_map_size
    }

    /// Check that the settings describe a usable search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_map_size == 0 {
            return Err(ConfigError::EmptySearchMap);
        }
        if !self.ring_buffer_size.is_power_of_two() {
            return Err(ConfigError::RingBufferNotPowerOfTwo(self.ring_buffer_size));
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::default()
            .with_reset_on_search(false)
            .with_search_map_size(64);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
