fn main() -> Result<(), Box<dyn std::error::Error>> {
    modelgen::build!("models.toml");

    Ok(())
}
