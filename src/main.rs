use clap::Parser;

fn main() {
    let cli = awsprofile::cli::Cli::parse();

    if let Err(err) = awsprofile::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
