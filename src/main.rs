// src/main.rs
use clap::Parser;
use serde::Serialize;

use passgen::cli::Args;
use passgen::Generator;

#[derive(Serialize)]
struct GeneratedRecord<'a> {
    password: &'a str,
    entropy: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.to_config();
    log::debug!("generation config: {:?}", config);

    let generator = Generator::new();
    for _ in 0..args.count {
        let password = match generator.generate(&config) {
            Ok(password) => password,
            Err(e) => {
                // Surface the configuration error verbatim
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };

        if args.json {
            let record = GeneratedRecord {
                password: password.as_str(),
                entropy: password.entropy(),
            };
            println!("{}", serde_json::to_string(&record)?);
        } else if args.entropy {
            println!("{}  ({} bits)", password, password.entropy());
        } else {
            println!("{}", password);
        }
    }

    Ok(())
}
