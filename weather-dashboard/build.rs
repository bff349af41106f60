use std::env;
use std::fs;
use std::path::Path;

const HEADER: &str = "date,city,average_max_temp,actual_precipitation\n";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("weather.csv");

    // Embed the dataset as-is; the app parses and validates it at startup.
    // Only check here that the header row is readable so a broken fixture
    // fails the build instead of the page.
    let src = Path::new("../fixtures/weather.csv");
    if src.exists() {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(src)
            .expect("Failed to open weather.csv");
        let headers = rdr.headers().expect("Failed to read weather.csv headers");
        for column in ["date", "city", "average_max_temp", "actual_precipitation"] {
            if !headers.iter().any(|h| h.trim() == column) {
                panic!("weather.csv is missing the '{}' column", column);
            }
        }
        fs::copy(src, &dest).unwrap();
    } else {
        fs::write(&dest, HEADER).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/weather.csv");
}
