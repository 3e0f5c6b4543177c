use cyphus_quadrature::report::{run_session, SessionConfig};

fn main() {
    match run_session(&SessionConfig::reference()) {
        Ok(report) => print!("{}", report),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
