use std::io;

fn main() {
    showdown_cli::logging::init_logging();
    let code = showdown_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
