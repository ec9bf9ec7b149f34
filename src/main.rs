pub mod args;

use tracing_subscriber::EnvFilter;

fn init_logging(arg: &args::Arg) {
    let level = if arg.quiet {
        "warn"
    } else if arg.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let arg = args::parse_args();
    if arg.backtrace {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") };
    }
    init_logging(&arg);
    let config = arg.to_config();
    match locale_gen::generate::generate(&config) {
        Ok(counter) => {
            if counter.failed() > 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if arg.backtrace {
                eprintln!("Backtrace: {}", e.backtrace());
            }
            std::process::exit(1);
        }
    }
}
