use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "repo-context")]
#[command(
    about = "Concatenate the text files tracked by git into a single context document",
    long_about = None
)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Output file (default: repo_context.txt)"
    )]
    pub output: Option<String>,

    #[arg(long, help = "Disable colors")]
    pub no_color: bool,

    #[arg(short = 'v', long, help = "Print version")]
    pub version: bool,
}
