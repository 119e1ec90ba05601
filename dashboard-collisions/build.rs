use std::env;
use std::fs;
use std::path::Path;

/// Header-only fallback so the app still builds without the fixture.
const EMPTY_COLLISIONS: &str = "CRASH DATE,CRASH TIME,LATITUDE,LONGITUDE,ON STREET NAME,\
NUMBER OF PERSONS INJURED,NUMBER OF PEDESTRIANS INJURED,NUMBER OF CYCLIST INJURED,\
NUMBER OF MOTORIST INJURED\n";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("collisions.csv");

    // Copy collisions.csv to OUT_DIR for include_str
    let src = Path::new("../fixtures/collisions.csv");
    if src.exists() {
        fs::copy(src, &dest).unwrap();
    } else {
        fs::write(&dest, EMPTY_COLLISIONS).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/collisions.csv");
}
