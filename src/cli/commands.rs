use clap::Parser;

#[derive(Parser)]
#[command(name = "gambit")]
#[command(about = "Play chess in the terminal, two players at one keyboard")]
pub struct Cli {
    /// Use plain ASCII piece letters instead of Unicode symbols
    #[arg(long)]
    pub ascii: bool,

    /// Print a JSON response object after every submitted move
    #[arg(long)]
    pub json: bool,
}
