//! Integration tests for the geometry extraction pipeline
//!
//! These tests run the whole reference-resolution chain over synthetic
//! OpenFAST bundles modeled on the NREL 5-MW baseline turbine, verifying
//! the accumulated result, the diagnostics channels, and the JSON shape.

use openfast_geometry::app::services::extractor::extract_from_files;
use openfast_geometry::{Extraction, GeometryExtractor};

const MAIN_FILE: &str = r#"------- OpenFAST INPUT FILE ----------------------------------------------------
NREL 5.0 MW Baseline Wind Turbine
---------------------- INPUT FILES ---------------------------------------------
"NRELOffshrBsline5MW_ElastoDyn.dat"  EDFile   - Name of file containing ElastoDyn input parameters (quoted string)
"NRELOffshrBsline5MW_AeroDyn.dat"    AeroFile - Name of file containing aerodynamic input parameters (quoted string)
"#;

const ELASTODYN_FILE: &str = r#"------- ELASTODYN INPUT FILE -------------------------------------------------
NREL 5.0 MW Baseline Wind Turbine
---------------------- TURBINE CONFIGURATION -----------------------------------
3        NumBl      - Number of blades (-)
63.0     TipRad     - The distance from the rotor apex to the blade tip (meters)
1.5      HubRad     - The distance from the rotor apex to the blade root (meters)
87.6     TowerHt    - Height of tower above ground level (meters)
0.0      TowerBsHt  - Height of tower base above ground level (meters)
1.9      Twr2Shft   - Vertical distance from the tower top to the rotor shaft (meters)
---------------------- BLADE ---------------------------------------------------
"Blade.dat"  BldFile - Name of file containing blade properties
---------------------- TOWER ---------------------------------------------------
"Tower.dat"  TwrFile - Name of file containing tower properties
"#;

const BLADE_FILE: &str = r#"---------------------- DISTRIBUTED BLADE PROPERTIES ----------------------------
BlFract  PitchAxis  StrcTwst  BMassDen
(-)      (-)        (deg)     (kg/m)
0.0      0.25       13.308    678.935
0.5      0.25       9.672     400.0
1.0      0.25       0.106     10.319
"#;

const TOWER_FILE: &str = r#"---------------------- DISTRIBUTED TOWER PROPERTIES ----------------------------
HtFract  TMassDen  TwFAStif
0.0      5590.87   614.34E9
0.5      4040.0    328.17E9
1.0      2961.21   150.0E9
---------------------- TOWER FORE-AFT MODE SHAPES ------------------------------
1.0      0.7004    2.1963
"#;

fn full_bundle() -> Vec<(&'static str, &'static str)> {
    vec![
        ("turbine.fst", MAIN_FILE),
        ("NRELOffshrBsline5MW_ElastoDyn.dat", ELASTODYN_FILE),
        ("NRELOffshrBsline5MW_AeroDyn.dat", "! airfoil data\n"),
        ("Blade.dat", BLADE_FILE),
        ("Tower.dat", TOWER_FILE),
    ]
}

#[test]
fn test_full_bundle_extraction() {
    let extraction = extract_from_files(full_bundle());

    assert!(extraction.success);
    let geometry = &extraction.geometry;
    assert!(geometry.errors.is_empty());

    assert_eq!(geometry.config.num_blades, Some(3));
    assert_eq!(geometry.config.rotor_diameter, Some(126.0));
    assert_eq!(geometry.blades.length, Some(63.0));
    assert_eq!(geometry.hub.radius, Some(1.5));
    assert_eq!(geometry.tower.height, Some(87.6));
    assert_eq!(geometry.tower.base_elevation, Some(0.0));

    let hub_height = geometry.config.hub_height.expect("hub height derived");
    assert!((hub_height - 89.5).abs() < 1e-9);

    assert_eq!(geometry.blades.stations.len(), 3);
    assert_eq!(geometry.tower.stations.len(), 3);
    assert_eq!(
        geometry.files_read,
        vec![
            "Blade properties",
            "Tower properties",
            "ElastoDyn",
            "AeroDyn",
            "main.fst"
        ]
    );
}

#[test]
fn test_warnings_alone_never_flip_success() {
    // No structural reference at all: a warning, not an error
    let extraction = extract_from_files(vec![("bare.fst", "! no references here\n")]);

    assert!(extraction.success);
    assert!(extraction.geometry.errors.is_empty());
    assert!(
        extraction
            .geometry
            .warnings
            .iter()
            .any(|w| w.contains("No ElastoDyn file reference"))
    );
}

#[test]
fn test_missing_main_file_short_circuits() {
    let extraction = extract_from_files(vec![("ElastoDyn.dat", ELASTODYN_FILE)]);

    assert!(!extraction.success);
    assert_eq!(extraction.geometry.errors, vec!["No .fst file found"]);
    // No parsing was attempted
    assert!(extraction.geometry.files_read.is_empty());
    assert!(extraction.geometry.tower.height.is_none());
}

#[test]
fn test_basename_fallback_resolution() {
    // The structural file is referenced by a path that was never stored;
    // only the basename matches
    let main = "\"inputs/ed/NRELOffshrBsline5MW_ElastoDyn.dat\" EDFile - structural\n";
    let extraction = extract_from_files(vec![
        ("turbine.fst", main),
        ("NRELOffshrBsline5MW_ElastoDyn.dat", "87.6 TowerHt - height\n"),
    ]);

    assert!(extraction.success);
    assert_eq!(extraction.geometry.tower.height, Some(87.6));
}

#[test]
fn test_blade_and_tower_termination_asymmetry() {
    // Same malformed middle row in both tables: the blade parser skips it,
    // the tower parser stops at it
    let main = "\"ED.dat\" EDFile - structural\n";
    let structural = "\"B.dat\" BldFile - blade\n\"T.dat\" TwrFile - tower\n";
    let blade = "BlFract\n0.0 0.0 5.0\nx y z\n1.0 0.0 -2.0\n";
    let tower = "HtFract\n0.0\nx\n1.0\n";

    let extraction = extract_from_files(vec![
        ("turbine.fst", main),
        ("ED.dat", structural),
        ("B.dat", blade),
        ("T.dat", tower),
    ]);

    let geometry = &extraction.geometry;
    assert_eq!(geometry.blades.stations.len(), 2);
    assert_eq!(geometry.tower.stations.len(), 1);
    assert!(geometry.warnings.iter().any(|w| w == "Parsed 2 blade stations"));
    assert!(geometry.warnings.iter().any(|w| w == "Parsed 1 tower stations"));
}

#[test]
fn test_tower_out_of_range_station_ends_table() {
    let main = "\"ED.dat\" EDFile - structural\n";
    let structural = "\"T.dat\" TwrFile - tower\n";
    let tower = "HtFract\n0.0\n0.5\n1.5\n";

    let extraction = extract_from_files(vec![
        ("turbine.fst", main),
        ("ED.dat", structural),
        ("T.dat", tower),
    ]);

    let geometry = &extraction.geometry;
    assert_eq!(geometry.tower.stations.len(), 2);
    assert!(geometry.warnings.iter().any(|w| w == "Parsed 2 tower stations"));
}

#[test]
fn test_independent_runs_share_nothing() {
    let first = extract_from_files(full_bundle());
    assert!(first.success);
    assert_eq!(first.geometry.blades.stations.len(), 3);

    let second = extract_from_files(vec![("other.fst", "! empty model\n")]);
    assert!(second.success);
    assert!(second.geometry.blades.stations.is_empty());
    assert!(second.geometry.tower.stations.is_empty());
    assert!(second.geometry.config.num_blades.is_none());
    assert_eq!(second.geometry.files_read, vec!["main.fst"]);
    assert!(
        second
            .geometry
            .warnings
            .iter()
            .all(|w| !w.contains("blade stations"))
    );
}

#[test]
fn test_json_wire_shape() {
    let extraction = extract_from_files(full_bundle());
    let json: serde_json::Value =
        serde_json::from_str(&extraction.to_json().unwrap()).unwrap();

    assert_eq!(json["success"], true);
    let geometry = &json["geometry"];
    assert_eq!(geometry["config"]["numBlades"], 3);
    assert_eq!(geometry["config"]["rotorDiameter"], 126.0);
    assert_eq!(geometry["blades"]["stations"][0]["spanFraction"], 0.0);
    assert_eq!(geometry["tower"]["stations"][2]["heightFraction"], 1.0);
    assert!(geometry["filesRead"].as_array().unwrap().len() == 5);
    // Absent optionals are omitted rather than null
    assert!(geometry["tower"].get("baseElevation").is_some());
    assert!(geometry["hub"].get("overhang").is_none());
}

#[test]
fn test_extractor_builder_api() {
    let mut extractor = GeometryExtractor::new();
    for (name, content) in full_bundle() {
        extractor.add_file(name, content);
    }
    assert_eq!(extractor.store().len(), 5);

    let extraction: Extraction = extractor.extract();
    assert!(extraction.success);
}
