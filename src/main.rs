use anyhow::Result;

fn main() -> Result<()> {
    fire2adium::cli::run()
}
