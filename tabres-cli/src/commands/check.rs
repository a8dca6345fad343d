//! CLI interface for verifying the well-known tables load

use tabres::resource::{
    CHAR_TABLE_RESOURCE, FILE_DATA_RESOURCE, FUNCTIONS_RESOURCE, ResourceLoader,
};

pub fn execute(embedded_only: bool) -> anyhow::Result<()> {
    let loader = if embedded_only {
        ResourceLoader::embedded_only()
    } else {
        ResourceLoader::new()
    };

    let mut failed = 0;
    for name in [FUNCTIONS_RESOURCE, FILE_DATA_RESOURCE, CHAR_TABLE_RESOURCE] {
        match loader.get_resource(name) {
            Ok(document) => {
                println!("✓ {} ({} entries)", name, document.root.children.len());
            }
            Err(e) => {
                failed += 1;
                println!("✗ {name}: {e}");
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of 3 tables failed to load", failed);
    }

    Ok(())
}
