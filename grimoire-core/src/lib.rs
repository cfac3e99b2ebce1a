//! Logic core for a text-command tabletop assistant.
//!
//! This crate takes a single line of free text (already stripped of any
//! transport-specific addressing), routes it to the matching command, and
//! returns a plain reply string for the transport to send verbatim:
//! - Dice rolls in `(X)YdZ` notation
//! - Source-book reference lookups over a loaded record table
//! - Random character generation
//!
//! # Quick Start
//!
//! ```
//! use grimoire_core::{CommandRegistry, RecordStore};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let registry = CommandRegistry::new(RecordStore::default())?;
//! let mut rng = StdRng::from_entropy();
//!
//! let reply = registry.dispatch("roll 2d6", &mut rng)?;
//! println!("{reply}");
//! # Ok::<(), grimoire_core::BotError>(())
//! ```
//!
//! The core holds no mutable state: the record table and command registry
//! are built once at startup and read-only afterwards, and all randomness
//! comes from a caller-provided generator.

pub mod command;
pub mod dice;
pub mod error;
pub mod generate;
pub mod lookup;
pub mod record;

// Primary public API
pub use command::{CommandKind, CommandRegistry, CommandSpec};
pub use dice::{RollSet, RollSpec};
pub use error::BotError;
pub use record::{Category, Record, RecordStore};
