mod commands;
mod terminal;

use std::process::ExitCode;

use commands::CommandLine;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CommandLine::parse_args();
    logging::init(args.debug);

    match commands::query::query(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print::error(&err);
            ExitCode::FAILURE
        }
    }
}
