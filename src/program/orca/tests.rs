use std::fs::read_to_string;

use crate::{
    config::DEFAULT_METHOD_KEYWORDS,
    geom::Geom,
    program::{orca::Orca, Template},
};

fn water_dimer(keywords: &str) -> Orca {
    Orca::new(
        Template::from(keywords),
        "4000",
        Geom::load("testfiles/water_dimer.xyz").unwrap(),
        3,
    )
    .unwrap()
}

fn hcn_h2() -> Orca {
    Orca::new(
        Template::from("B3LYP def2-SVP TIGHTSCF"),
        "2000",
        Geom::load("testfiles/hcn_h2.xyz").unwrap(),
        3,
    )
    .unwrap()
}

mod write_input {
    use super::*;

    macro_rules! check {
        ($orca: expr, $want_file: expr) => {
            let tmp = tempfile::NamedTempFile::new().unwrap();
            let got_file = tmp.path().to_str().unwrap();
            $orca.write_input(got_file).unwrap();
            let want_file = $want_file;
            let got = read_to_string(got_file).expect("file not found");
            let want = read_to_string(want_file).unwrap();
            if got != want {
                panic!("\n(diff \"{}\" \"{}\")\n{got}", got_file, want_file);
            }
        };
    }

    #[test]
    fn dispersion() {
        check!(
            water_dimer(DEFAULT_METHOD_KEYWORDS),
            "testfiles/orca/water_dimer_disp.want"
        );
    }

    #[test]
    fn no_dispersion() {
        check!(hcn_h2(), "testfiles/orca/hcn_h2_nodisp.want");
    }

    #[test]
    fn unwritable() {
        let got = hcn_h2().write_input("/nonexistent/dir/job.inp");
        assert!(matches!(got, Err(crate::Error::Io { .. })));
    }
}

#[test]
fn idempotent() {
    let a = water_dimer(DEFAULT_METHOD_KEYWORDS).input_string();
    let b = water_dimer(DEFAULT_METHOD_KEYWORDS).input_string();
    assert_eq!(a, b);
}

#[test]
fn structure() {
    let got = hcn_h2().input_string();
    assert!(got.starts_with("%maxcore 2000\n* xyz 0 1\n"));
    assert_eq!(got.matches("New_Step").count(), 5);
    assert_eq!(got.matches("Step_End").count(), 5);
    assert_eq!(got.matches("%Compound").count(), 1);
    assert_eq!(got.matches("\tRead ").count(), 5);
    assert!(!got.contains("VDW_CORRECTION"));
    assert!(got.ends_with("CP_IE = IE_KCALMOL + BSSE_KCALMOL ;\nEnd\n"));

    let got = water_dimer("B3LYP D3BJ def2-SVP").input_string();
    assert!(got.contains("\tvariable D0, D1, D2, D3, D4;\n"));
    assert_eq!(got.matches("\tRead ").count(), 10);
    assert_eq!(got.matches("VDW_CORRECTION").count(), 5);
    assert!(got.contains(
        "\tIE_KCALMOL = ((DIMER + D0) - (SP1 + D1 + SP3 + D3)) * 627.5096 ;\n"
    ));
}

#[test]
fn block_sizes() {
    let orca = water_dimer(DEFAULT_METHOD_KEYWORDS);
    let f = orca.fragments();
    assert_eq!(orca.geom().lines().len(), 6);
    assert_eq!(f.monomer1.len(), 3);
    assert_eq!(f.monomer2.len(), 3);
    assert_eq!(f.monomer1_ghost.len(), 6);
    assert_eq!(f.monomer2_ghost.len(), 6);
}

#[test]
fn empty_fragment() {
    let orca = Orca::new(
        Template::from("HF cc-pVDZ"),
        "1000",
        Geom::load("testfiles/hcn_h2.xyz").unwrap(),
        5,
    )
    .unwrap();
    let got = orca.input_string();
    // fragment 2 is empty, so calculation 4 has an empty geometry block
    assert!(got.contains(
        "\t# Calculation 4: fragment 2 @ complex geom with fragment 2 basis\n\
         \tNew_Step\n\t\t! HF cc-pVDZ\n\t\t* xyz 0 1\n\t\t\t\t*\n"
    ));
}

#[test]
fn split_out_of_range() {
    let got = Orca::new(
        Template::from("HF cc-pVDZ"),
        "1000",
        Geom::load("testfiles/hcn_h2.xyz").unwrap(),
        6,
    );
    let Err(e) = got else {
        panic!("expected error got {got:?}");
    };
    assert!(e.is_invalid_split_index());
}

#[test]
fn grid_keyword_without_dispersion() {
    let got = water_dimer("B3LYP def2-SVP DefGrid2").input_string();
    assert!(!got.contains("variable D0"));
    assert!(!got.contains("VDW_CORRECTION"));
    assert!(got.contains(
        "\tIE_KCALMOL = ((DIMER) - (SP1 + SP3)) * 627.5096 ;\n"
    ));
}
