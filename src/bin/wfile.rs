use clap::Parser;
use std::path::Path;
use wutils::cli::WfileArgs;
use wutils::detect::Detector;
use wutils::utils::init_logging;

fn main() {
    init_logging();
    let args = WfileArgs::parse();
    let detector = Detector::new();

    for path in args.expanded_paths() {
        match detector.detect(Path::new(&path)) {
            Ok(found) => println!("{}: {}", path, found),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}
