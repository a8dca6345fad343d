//! CLI interface for printing a resource table

use tabres::resource::ResourceLoader;

pub fn execute(name: &str, embedded_only: bool) -> anyhow::Result<()> {
    let loader = if embedded_only {
        ResourceLoader::embedded_only()
    } else {
        ResourceLoader::new()
    };

    let document = loader.get_resource(name)?;
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
