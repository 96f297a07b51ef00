//! Writes ORCA compound jobs for counterpoise-corrected interaction energies.
//!
//! ```no_run
//! use cpwrite::{geom::Geom, program::orca::Orca, program::Template};
//!
//! let geom = Geom::load("water_dimer.xyz")?;
//! let orca = Orca::new(Template::from("B3LYP D3BJ def2-SVP"), "4000", geom, 3)?;
//! orca.write_input("water_dimer.inp")?;
//! # Ok::<(), cpwrite::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod geom;
pub mod program;

pub use error::{Error, Result};
