use itemsdat_reader::itemsdat::report::{self, ReportOptions};
use itemsdat_reader::ItemsDat;
use std::env;
use std::fs::File;
use std::io::BufWriter;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <path-to-items.dat> [-o <output-file>] [-m|--minified]",
            args[0]
        );
        std::process::exit(1);
    }

    let dat_path = &args[1];
    let mut out_path = "itemsdat_parsed.txt".to_string();
    let mut options = ReportOptions::default();

    let mut arg_idx = 2;
    while arg_idx < args.len() {
        match args[arg_idx].as_str() {
            "-o" | "--output" => {
                arg_idx += 1;
                match args.get(arg_idx) {
                    Some(path) => out_path = path.clone(),
                    None => {
                        eprintln!("ERROR: {} flag requires an argument.", args[arg_idx - 1]);
                        std::process::exit(1);
                    }
                }
            }
            "-m" | "--min" | "--minified" => {
                options.minified = true;
            }
            other => {
                eprintln!("ERROR: Invalid argument: '{}'", other);
                std::process::exit(1);
            }
        }
        arg_idx += 1;
    }

    println!("Reading items.dat file: {}", dat_path);
    println!("{}", "=".repeat(60));

    let dat = match ItemsDat::from_file(dat_path) {
        Ok(dat) => dat,
        Err(e) => {
            eprintln!("\nERROR: Failed to read items.dat file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    println!("\nDatabase Information:");
    println!("  Version: {}", dat.version);
    println!("  Item count: {}", dat.len());

    println!("\nSample Items (first 10):");
    for item in dat.items().iter().take(10) {
        println!("  {}. {}", item.id, item.name);
    }
    if dat.len() > 10 {
        println!("  ... and {} more", dat.len() - 10);
    }

    let file = match File::create(&out_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("\nERROR: Failed to create output file {}: {}", out_path, e);
            std::process::exit(1);
        }
    };
    let mut out = BufWriter::new(file);
    if let Err(e) = report::write_report(&mut out, &dat, &options) {
        eprintln!("\nERROR: Failed to write report: {}", e);
        std::process::exit(1);
    }

    println!("\n{}", "=".repeat(60));
    println!("SUCCESS! Report written to {}", out_path);
    println!("{}", "=".repeat(60));
}
