use clap::{Arg, ArgAction, Command as ClapCommand};
use std::fs::File;
use std::io::BufReader;
use std::process;
use log::{error, info, LevelFilter};

use exifkit::{read_metadata_from, MetadataRecord};

fn main() {
    let matches = ClapCommand::new("ExifKit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print EXIF metadata embedded in JPEG files")
        .arg(
            Arg::new("input")
                .help("Input JPEG files")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("full")
                .long("full")
                .help("Print every decoded field")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let full = matches.get_flag("full");
    let mut failed = false;

    for path in matches.get_many::<String>("input").into_iter().flatten() {
        match read_file(path) {
            Ok(Some(record)) => print_record(&record, full),
            Ok(None) => info!("{}: no EXIF data", path),
            Err(e) => {
                error!("{}: {}", path, e);
                eprintln!("Error in {}: {}", path, e);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

fn read_file(path: &str) -> exifkit::ExifResult<Option<MetadataRecord>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_metadata_from(&mut reader)
}

fn print_record(record: &MetadataRecord, full: bool) {
    if full {
        print!("{}", record);
    } else {
        println!("{},{},{}, {}", record.make, record.model, record.software, record.date_time_original);
    }
}
