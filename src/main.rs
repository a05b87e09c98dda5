mod cli;

use clap::Parser;
use cli::Cli;
use repo_context::config::load_config;
use repo_context::format::DEFAULT_OUTPUT;
use repo_context::pipeline::{self, VERSION};
use repo_context::{console, ContextPipeline, SystemRunner};

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("repo-context {}", VERSION);
        return;
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let runner = SystemRunner::new();
    let info = pipeline::inspect(&runner)?;
    let config = load_config(Some(&info.root));

    if cli.no_color || config.no_color.unwrap_or(false) {
        console::disable_colors();
    }

    let output = cli
        .output
        .or(config.output)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let context = ContextPipeline::new(&runner, output);
    let stats = context.generate(&info)?;
    console::report_totals(&stats, context.output());

    Ok(())
}
