use pickbox::cli::Cli;
use pickbox::handles::run;
fn main() {
    let cli = Cli::parse_args();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
