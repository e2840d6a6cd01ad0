use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Build info (project name, version, target) for the demo window title
    shadow_rs::new()?;

    Ok(())
}
