use clap::{Parser, Subcommand};
use orst_sorters::OrstArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort values with a classic algorithm or compare the algorithms against each other
    Sorters(OrstArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.commands {
        Commands::Sorters(orst_args) => orst_args.run(),
    }
}

fn get_styles() -> clap::builder::Styles {
    use anstyle::{AnsiColor, Color, Style};

    let fg = |color: AnsiColor| Style::new().fg_color(Some(Color::Ansi(color)));

    clap::builder::Styles::styled()
        .usage(fg(AnsiColor::Magenta).bold().underline())
        .header(fg(AnsiColor::Magenta).bold())
        .literal(fg(AnsiColor::Green))
        .invalid(fg(AnsiColor::Red).bold())
        .error(fg(AnsiColor::Red).bold())
        .valid(fg(AnsiColor::Cyan).bold().underline())
        .placeholder(fg(AnsiColor::Yellow))
}
