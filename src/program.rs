use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub mod orca;

/// Empirical dispersion keywords that make ORCA report a VDW_CORRECTION term.
/// Only these exact spellings are recognized, anywhere in the keywords.
pub const DISPERSION_TAGS: [&str; 6] =
    ["D3ZERO", "d3zero", "D3BJ", "d3bj", "D4", "d4"];

/// Dispersion keywords that also occur inside grid keywords like `DefGrid2`,
/// so they only count as a separate keyword or after a `-`, as in `B97-D2`
pub const DISPERSION_TOKENS: [&str; 2] = ["D2", "d2"];

static DISPERSION: OnceLock<Regex> = OnceLock::new();

/// The method and basis set keywords shared by every calculation in the
/// compound job, like
/// ```text
/// M062X D3ZERO def2-TZVPD TIGHTSCF defgrid3
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub header: String,
}

impl Template {
    /// the keywords as an ORCA simple input line, including the newline
    pub fn keyword_line(&self) -> String {
        format!("! {}\n", self.header)
    }

    /// reports whether any of [DISPERSION_TAGS] or [DISPERSION_TOKENS] occurs
    /// in the keywords
    pub fn has_dispersion(&self) -> bool {
        let re = DISPERSION.get_or_init(|| {
            let tags = DISPERSION_TAGS.map(regex::escape).join("|");
            let tokens = DISPERSION_TOKENS.map(regex::escape).join("|");
            Regex::new(&format!(r"{tags}|(?:^|[\s-])(?:{tokens})(?:\s|$)"))
                .unwrap()
        });
        re.is_match(&self.header)
    }
}

impl From<&str> for Template {
    fn from(value: &str) -> Self {
        Self {
            header: value.to_owned(),
        }
    }
}

impl From<String> for Template {
    fn from(header: String) -> Self {
        Self { header }
    }
}

/// The five single points of a counterpoise correction, in the order they run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Dimer,
    Monomer1,
    Monomer1Ghost,
    Monomer2,
    Monomer2Ghost,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Dimer,
        Step::Monomer1,
        Step::Monomer1Ghost,
        Step::Monomer2,
        Step::Monomer2Ghost,
    ];

    /// 1-based position of the step, used to index its results
    pub fn index(self) -> usize {
        match self {
            Step::Dimer => 1,
            Step::Monomer1 => 2,
            Step::Monomer1Ghost => 3,
            Step::Monomer2 => 4,
            Step::Monomer2Ghost => 5,
        }
    }

    pub fn comment(self) -> &'static str {
        match self {
            Step::Dimer => "dimer calculation",
            Step::Monomer1 => "fragment 1 @ complex geom with fragment 1 basis",
            Step::Monomer1Ghost => {
                "fragment 1 @ complex geom with complex basis"
            }
            Step::Monomer2 => "fragment 2 @ complex geom with fragment 2 basis",
            Step::Monomer2Ghost => {
                "fragment 2 @ complex geom with complex basis"
            }
        }
    }

    /// name of the variable holding the SCF energy of this step
    pub fn energy(self) -> &'static str {
        match self {
            Step::Dimer => "DIMER",
            Step::Monomer1 => "SP1",
            Step::Monomer1Ghost => "SP2",
            Step::Monomer2 => "SP3",
            Step::Monomer2Ghost => "SP4",
        }
    }

    /// name of the variable holding the dispersion correction of this step
    pub fn dispersion(self) -> &'static str {
        match self {
            Step::Dimer => "D0",
            Step::Monomer1 => "D1",
            Step::Monomer1Ghost => "D2",
            Step::Monomer2 => "D3",
            Step::Monomer2Ghost => "D4",
        }
    }
}
