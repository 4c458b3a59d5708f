use clap::Args;
use eyre::Result;
use tablegraft_schema::SchemaIndex;

use crate::project::SourceArgs;

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project = self.source.load()?;
        let index = SchemaIndex::new(&project.schema);

        let mut has_errors = false;
        for name in &project.config.config().generate.select {
            match project.schema.get(name) {
                None => {
                    has_errors = true;
                    eprintln!("error: selected type '{}' not found in schema", name);
                    eprintln!("  --> {}", project.config.path().display());
                }
                Some(ty) if !index.is_table(ty) => {
                    eprintln!("warning: selected type '{}' is not a table type", name);
                    eprintln!("  --> {}", project.config.path().display());
                }
                Some(_) => {}
            }
        }

        if has_errors {
            std::process::exit(1);
        }

        println!("✓ {} is valid\n", project.schema_path.display());

        let tables = index.list_table_type_names();
        println!("  {} types", project.schema.len());
        println!(
            "  {} table type{}",
            tables.len(),
            if tables.len() == 1 { "" } else { "s" }
        );

        let select = &project.config.config().generate.select;
        if !select.is_empty() {
            println!("\n  selected ({}):", select.len());
            for name in select {
                println!("    {}", name);
            }
        }

        Ok(())
    }
}
