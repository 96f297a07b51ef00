use std::{fmt::Display, fs::read_to_string, path::Path, str::FromStr};

use log::{debug, warn};

use crate::error::{Error, Result};

/// the token ORCA expects after an element label to mark a ghost atom
pub const GHOST: &str = ":";

/// A single atom line from an XYZ file. The coordinate fields are checked to
/// be numbers but kept as written, so re-rendering the atom never changes its
/// precision.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    label: String,
    coord: [String; 3],
}

impl Atom {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// the coordinate fields exactly as they appeared in the input
    pub fn coord_fields(&self) -> &[String; 3] {
        &self.coord
    }

    /// returns a copy of `self` whose label carries the ghost marker, leaving
    /// the coordinates untouched
    pub fn ghost(&self) -> Self {
        Self {
            label: format!("{} {GHOST}", self.label),
            coord: self.coord.clone(),
        }
    }
}

impl FromStr for Atom {
    type Err = Error;

    /// parse an Atom from a line like
    ///  C 1.0 1.0 1.0
    fn from_str(s: &str) -> Result<Self> {
        let malformed = |reason: &str| Error::MalformedGeometryLine {
            line: s.trim_end().to_string(),
            reason: reason.to_string(),
        };
        let fields: Vec<_> = s.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(malformed(&format!(
                "expected 4 fields, found {}",
                fields.len()
            )));
        }
        for field in &fields[1..] {
            field.parse::<f64>().map_err(|_| {
                malformed(&format!("failed to parse `{field}` as f64"))
            })?;
        }
        Ok(Self {
            label: fields[0].to_string(),
            coord: [fields[1], fields[2], fields[3]].map(String::from),
        })
    }
}

/// fields rejoined with single spaces
impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [x, y, z] = &self.coord;
        write!(f, "{} {x} {y} {z}", self.label)
    }
}

/// An XYZ geometry. Alongside the parsed [Atom]s, the raw atom lines are kept
/// (each terminated by a newline) so they can be copied into an input file
/// verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Geom {
    atoms: Vec<Atom>,
    lines: Vec<String>,
}

impl FromStr for Geom {
    type Err = Error;

    /// the first two lines are the atom count and a comment. blank lines
    /// after that are skipped, and every other line must be an atom
    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.split_inclusive('\n');
        let (Some(count), Some(_)) = (lines.next(), lines.next()) else {
            return Err(Error::MissingHeader);
        };
        let mut atoms = Vec::new();
        let mut raw = Vec::new();
        for line in lines.filter(|l| !l.trim().is_empty()) {
            atoms.push(line.parse::<Atom>()?);
            let mut line = line.to_string();
            if !line.ends_with('\n') {
                line.push('\n');
            }
            raw.push(line);
        }
        if let Ok(n) = count.trim().parse::<usize>() {
            if n != atoms.len() {
                warn!(
                    "header claims {n} atoms but {} atom lines were found",
                    atoms.len()
                );
            }
        }
        Ok(Self {
            atoms,
            lines: raw,
        })
    }
}

impl Geom {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = read_to_string(path)
            .map_err(|e| Error::io(path.display().to_string(), e))?;
        contents.parse()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// the raw atom lines, each ending in a newline
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// split `self` after the first `split` atoms. `split` may be 0 or equal to
    /// the number of atoms, in which case one of the fragments is empty, but
    /// anything larger is an error
    pub fn fragments(&self, split: usize) -> Result<Fragments> {
        let n = self.atoms.len();
        if split > n {
            return Err(Error::InvalidSplitIndex {
                index: split,
                atoms: n,
            });
        }
        if split == 0 || split == n {
            warn!("splitting {n} atoms at atom {split} leaves a fragment empty");
        }
        debug!("fragment 1 has {split} atoms, fragment 2 has {}", n - split);

        let (lines1, lines2) = self.lines.split_at(split);
        let (atoms1, atoms2) = self.atoms.split_at(split);
        Ok(Fragments {
            monomer1: lines1.to_vec(),
            monomer2: lines2.to_vec(),
            monomer1_ghost: lines1
                .iter()
                .cloned()
                .chain(ghost_lines(atoms2, lines2))
                .collect(),
            monomer2_ghost: ghost_lines(atoms1, lines1)
                .chain(lines2.iter().cloned())
                .collect(),
        })
    }
}

/// ghost versions of `atoms`, each ending like the source line it came from
fn ghost_lines<'a>(
    atoms: &'a [Atom],
    lines: &'a [String],
) -> impl Iterator<Item = String> + 'a {
    atoms.iter().zip(lines).map(|(atom, line)| {
        let ending = if line.ends_with("\r\n") { "\r\n" } else { "\n" };
        format!("{}{ending}", atom.ghost())
    })
}

/// The four geometry blocks derived from splitting a [Geom] in two. Every line
/// ends with a newline.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragments {
    /// the atoms of fragment 1
    pub monomer1: Vec<String>,

    /// the atoms of fragment 2
    pub monomer2: Vec<String>,

    /// fragment 1 with the atoms of fragment 2 as ghosts
    pub monomer1_ghost: Vec<String>,

    /// fragment 2 with the atoms of fragment 1 as ghosts
    pub monomer2_ghost: Vec<String>,
}
