use clap::Parser;
use lectern_cli::{CliArgs, LecternCli};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    let result = match LecternCli::from_args("lectern", &args) {
        Ok(cli) => cli.run(args).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
