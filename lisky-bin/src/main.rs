use clap::Parser;
use lisky_cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.run().await {
        eprintln!("❌ Error: {e}");
        if let Some(name) = e.variable() {
            eprintln!("   '{name}' is not settable. Run `lisky variables` to list the supported names.");
        }
        std::process::exit(1);
    }
}
