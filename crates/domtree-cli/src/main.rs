use std::process::ExitCode;

use domtree_cli::{cli, init_tracing, run, Outcome};

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    match run(&matches).await {
        Ok(Outcome::Success(text)) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Failure(text)) => {
            eprint!("{text}");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
