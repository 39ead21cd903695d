mod cli;
mod logging;
mod rt;
mod tui;

fn main() -> anyhow::Result<()> {
    cli::run()
}
