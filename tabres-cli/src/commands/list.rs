//! CLI interface for listing the embedded resources

use tabres::resource::embedded::embedded_names;

pub fn execute() -> anyhow::Result<()> {
    for name in embedded_names() {
        println!("{name}");
    }

    Ok(())
}
