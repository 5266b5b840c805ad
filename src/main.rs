use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use wutils::cli::WlsArgs;
use wutils::listing::Lister;
use wutils::utils::{init_logging, terminal};

fn main() -> ExitCode {
    init_logging();

    let args = match WlsArgs::try_parse_normalized(std::env::args()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    terminal::try_enable_ansi();
    terminal::force_colors();

    let lister = Lister::new(args.into_options(), terminal::terminal_width());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut err = io::stderr();

    let result = lister.run(&mut out, &mut err).and_then(|()| out.flush().map_err(Into::into));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = out.flush();
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
