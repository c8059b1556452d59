use contact_book::config::{Config, Invocation};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let invocation = Config::from_env().and_then(|config| config.apply_args(std::env::args().skip(1)));

    let config = match invocation {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            print_help();
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    };

    if let Err(e) = contact_book::cli::run(&config.data_file) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_help() {
    println!("Contact Book");
    println!();
    println!("Usage: contact-book [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>   Contact file path (default: data.csv, or $CONTACT_BOOK_FILE)");
    println!("  -h, --help          Show this help");
}
