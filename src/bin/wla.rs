use wutils::alias::AliasForwarder;
use wutils::utils::init_logging;

fn main() {
    init_logging();
    let forwarded: Vec<String> = std::env::args().skip(1).collect();
    let forwarder = AliasForwarder::lister();
    log::debug!("forwarding to {}", forwarder.program().display());

    let code = match forwarder.run(&forwarded) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("wla: {}", e);
            1
        }
    };
    std::process::exit(code);
}
