use anyhow::Result;
use dotquery::cli::App;

fn main() -> Result<()> {
    let app = App::from_args()?;
    let args = dotquery::cli::Args::parse_args();

    app.run(args)
}
