//! Binary entry point. All behavior lives in `cpdd_cli`; this wrapper only
//! supplies the real process argv and stdio streams.

use std::io;

fn main() {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let code = cpdd_cli::run(std::env::args_os(), &mut stdout, &mut stderr);
    std::process::exit(code);
}
