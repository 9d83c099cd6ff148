//! ca-kernel — a generalized cellular-automaton simulation kernel.
//!
//! Double-buffered, row-major grid of small integer cell states, stepped
//! under a configurable B/S (birth/survive) or Generations-style decay rule,
//! over one of five neighborhood lattices and nine boundary topologies, with
//! an optional fractional "vitality" influence curve on decaying neighbors.
//!
//! Cells are plain `u16` states rather than bit-packed, since Generations
//! rules need more than one bit per cell; `bitset` provides a lossy 1-bit
//! export for collaborators that only care about the alive/dead projection.

pub mod bitset;
pub mod config;
pub mod error;
pub mod grid;
pub mod neighborhood;
pub mod rule;
pub mod seed;
pub mod step;
pub mod topology;
pub mod vitality;
pub mod io;

pub use config::KernelConfig;
pub use error::{ConfigError, PatternError};
pub use grid::CaGrid;
pub use neighborhood::Neighborhood;
pub use rule::RuleSpec;
pub use seed::{apply_seed, paint, PaintShape, SeedSource};
pub use step::step;
pub use topology::Boundary;
pub use vitality::VitalityTable;
