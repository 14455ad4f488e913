use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = ext_mover::cli::parse();
    app::run(args)
}
