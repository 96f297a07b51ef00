use std::{
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write},
};

use log::{debug, info};

use crate::{
    error::{Error, Result},
    geom::{Fragments, Geom},
};

use super::{Step, Template};

#[cfg(test)]
mod tests;

/// kcal/mol per hartree, as written into the compound script
pub const KCALHT: &str = "627.5096";

/// separator between atom lines of a geometry block nested in a step
const BLOCK_SEP: &str = "\t\t";

/// Orca holds everything needed to write an ORCA compound job that computes
/// the counterpoise-corrected interaction energy of a dimer from five single
/// point calculations:
///
/// 1. the dimer
/// 2. fragment 1 in its own basis
/// 3. fragment 1 in the dimer basis, with fragment 2 as ghost atoms
/// 4. fragment 2 in its own basis
/// 5. fragment 2 in the dimer basis, with fragment 1 as ghost atoms
#[derive(Debug, Clone)]
pub struct Orca {
    template: Template,

    /// memory per core in MB, written verbatim into the `%maxcore` line
    maxcore: String,

    geom: Geom,

    fragments: Fragments,
}

impl Orca {
    /// split `geom` after the first `split` atoms and prepare the job. fails
    /// if `split` is larger than the number of atoms
    pub fn new(
        template: Template,
        maxcore: impl Into<String>,
        geom: Geom,
        split: usize,
    ) -> Result<Self> {
        let fragments = geom.fragments(split)?;
        info!(
            "Using the method keywords: {}",
            template.keyword_line().trim_end()
        );
        if template.has_dispersion() {
            info!("Empirical dispersion correction detected.");
        }
        Ok(Self {
            template,
            maxcore: maxcore.into(),
            geom,
            fragments,
        })
    }

    pub fn geom(&self) -> &Geom {
        &self.geom
    }

    pub fn fragments(&self) -> &Fragments {
        &self.fragments
    }

    /// whether the dispersion corrections are tracked alongside the energies
    pub fn dispersion(&self) -> bool {
        self.template.has_dispersion()
    }

    /// the geometry block written inside `step`. the dimer step has none
    /// because it uses the geometry at the top of the file
    fn block(&self, step: Step) -> Option<&[String]> {
        let Fragments {
            monomer1,
            monomer2,
            monomer1_ghost,
            monomer2_ghost,
        } = &self.fragments;
        match step {
            Step::Dimer => None,
            Step::Monomer1 => Some(monomer1.as_slice()),
            Step::Monomer1Ghost => Some(monomer1_ghost.as_slice()),
            Step::Monomer2 => Some(monomer2.as_slice()),
            Step::Monomer2Ghost => Some(monomer2_ghost.as_slice()),
        }
    }

    /// the full text of the input file
    pub fn input_string(&self) -> String {
        self.to_string()
    }

    /// write the input file to `filename`, or to stdout if `filename` is `-`
    pub fn write_input(&self, filename: &str) -> Result<()> {
        let body = self.input_string();
        if filename == "-" {
            let mut out = io::stdout().lock();
            out.write_all(body.as_bytes())
                .and_then(|_| out.flush())
                .map_err(|e| Error::io(filename, e))?;
        } else {
            let file =
                File::create(filename).map_err(|e| Error::io(filename, e))?;
            let mut w = BufWriter::new(file);
            w.write_all(body.as_bytes())
                .and_then(|_| w.flush())
                .map_err(|e| Error::io(filename, e))?;
        }
        debug!("wrote {} bytes to {filename}", body.len());
        Ok(())
    }

    fn write_step(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        step: Step,
        keywords: &str,
    ) -> std::fmt::Result {
        let i = step.index();
        writeln!(f, "\t# Calculation {i}: {}", step.comment())?;
        write!(f, "\tNew_Step\n\t\t{keywords}")?;
        if let Some(block) = self.block(step) {
            write!(f, "\t\t* xyz 0 1\n\t\t{}\t\t*\n", block.join(BLOCK_SEP))?;
        }
        writeln!(f, "\tStep_End")?;
        writeln!(f, "\tRead {} = SCF_ENERGY[{i}] ;", step.energy())?;
        if self.dispersion() {
            writeln!(
                f,
                "\tRead {} = VDW_CORRECTION[{i}] ;",
                step.dispersion()
            )?;
        }
        writeln!(f)
    }
}

impl Display for Orca {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dispersion = self.dispersion();
        let keywords = self.template.keyword_line();

        writeln!(f, "%maxcore {}", self.maxcore)?;
        writeln!(f, "* xyz 0 1")?;
        for line in self.geom.lines() {
            write!(f, "{line}")?;
        }
        write!(f, "*\n\n")?;

        writeln!(f, "%Compound")?;
        writeln!(f, "\tvariable DIMER, SP1, SP2, SP3, SP4;")?;
        if dispersion {
            writeln!(f, "\tvariable D0, D1, D2, D3, D4;")?;
        }
        for var in ["IE_KCALMOL", "BSSE_AU", "BSSE_KCALMOL", "CP_IE"] {
            writeln!(f, "\tvariable {var};")?;
        }
        writeln!(f)?;

        for step in Step::ALL {
            self.write_step(f, step, &keywords)?;
        }

        if dispersion {
            writeln!(
                f,
                "\tIE_KCALMOL = ((DIMER + D0) - (SP1 + D1 + SP3 + D3)) \
                 * {KCALHT} ;"
            )?;
            writeln!(
                f,
                "\tBSSE_AU = (SP1 - SP2) + (SP3 - SP4) + (D1 - D2) + (D3 - D4) ;"
            )?;
        } else {
            writeln!(
                f,
                "\tIE_KCALMOL = ((DIMER) - (SP1 + SP3)) * {KCALHT} ;"
            )?;
            writeln!(f, "\tBSSE_AU = (SP1 - SP2) + (SP3 - SP4) ;")?;
        }
        writeln!(f, "\tBSSE_KCALMOL = {KCALHT} * BSSE_AU ;")?;
        writeln!(f, "\tCP_IE = IE_KCALMOL + BSSE_KCALMOL ;")?;
        writeln!(f, "End")
    }
}
