//! Shared fixtures for the OpenFAST parser tests
//!
//! Fixture content is modeled on the NREL 5-MW baseline turbine input files,
//! trimmed to the lines the extractor cares about.

use crate::app::services::file_store::FileStore;


/// Main `.fst` file referencing structural and aerodynamic sub-files
pub fn sample_main_file() -> &'static str {
    r#"------- OpenFAST INPUT FILE ----------------------------------------------------
NREL 5.0 MW Baseline Wind Turbine
---------------------- INPUT FILES ---------------------------------------------
"ElastoDyn.dat"    EDFile      - Name of file containing ElastoDyn input parameters (quoted string)
"AeroDyn.dat"      AeroFile    - Name of file containing aerodynamic input parameters (quoted string)
"ServoDyn.dat"     SrvDFile    - Name of file containing control input parameters (quoted string)
"#
}

/// ElastoDyn structural file with scalar geometry and table references
pub fn sample_structural_file() -> &'static str {
    r#"------- ELASTODYN INPUT FILE -------------------------------------------------
NREL 5.0 MW Baseline Wind Turbine
---------------------- TURBINE CONFIGURATION -----------------------------------
3          NumBl       - Number of blades (-)
63.0       TipRad      - The distance from the rotor apex to the blade tip (meters)
1.5        HubRad      - The distance from the rotor apex to the blade root (meters)
2.5        PreCone     - Rotor precone angle (degrees)
5.0        OverHang    - Distance from yaw axis to rotor apex (meters)
5.0        ShftTilt    - Rotor shaft tilt angle (degrees)
87.6       TowerHt     - Height of tower above ground level (meters)
0.0        TowerBsHt   - Height of tower base above ground level (meters)
1.96       Twr2Shft    - Vertical distance from the tower top to the rotor shaft (meters)
---------------------- BLADE ---------------------------------------------------
"Blade.dat"   BldFile   - Name of file containing blade properties
---------------------- TOWER ---------------------------------------------------
"Tower.dat"   TwrFile   - Name of file containing tower properties
"#
}

/// Blade distributed-property file; the units row exercises the
/// skip-malformed-row policy
pub fn sample_blade_file() -> &'static str {
    r#"---------------------- BLADE PROPERTIES ----------------------------------------
BlFract  PitchAxis  StrcTwst  BMassDen  FlpStff
(-)      (-)        (deg)     (kg/m)    (Nm^2)
0.0      0.25       13.308    678.935   18110.0
0.25     0.25       11.480    456.76    15287.4
0.75     0.25       3.125     263.343   1183.68
1.0      0.25       0.106     10.319    170.12
"#
}

/// Tower distributed-property file; numeric rows directly under the header
pub fn sample_tower_file() -> &'static str {
    r#"---------------------- TOWER PROPERTIES ----------------------------------------
HtFract  TMassDen  TwFAStif  TwSSStif
0.0      5590.87   614.34E9  614.34E9
0.5      4040.0    328.17E9  328.17E9
1.0      2961.21   150.0E9   150.0E9
---------------------- TOWER DAMPING -------------------------------------------
1.0      1.0       1.0       1.0
"#
}

/// A complete bundle with main, structural, aerodynamic, and table files
pub fn sample_bundle() -> FileStore {
    FileStore::from_files(vec![
        ("turbine.fst", sample_main_file()),
        ("ElastoDyn.dat", sample_structural_file()),
        ("AeroDyn.dat", "! aerodynamic parameters, unused by the extractor\n"),
        ("Blade.dat", sample_blade_file()),
        ("Tower.dat", sample_tower_file()),
    ])
}
