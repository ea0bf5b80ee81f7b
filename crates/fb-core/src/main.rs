use std::io::{self, BufWriter, IsTerminal};

use fb_core::cli::{help_text, parse_args, Command};
use fb_core::config::Config;
use fb_core::{run, RunError};

fn fail(err: RunError) -> ! {
    eprintln!("[fb] error: {err}");
    if let RunError::Usage(_) = err {
        eprintln!("[fb] hint: run 'fizzbuzz --help' for usage");
    }
    std::process::exit(err.exit_code());
}

fn main() {
    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            print!("{}", help_text());
            return;
        }
        Ok(Command::Version) => {
            println!("fizzbuzz {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Ok(Command::Run(opts)) => opts,
        Err(e) => fail(e.into()),
    };

    let mut config = Config::load_or_default();
    opts.apply(&mut config);

    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    let writer = BufWriter::new(stdout.lock());

    if let Err(e) = run(&config, writer, is_tty) {
        fail(e);
    }
}
