use clap::Args;
use eyre::Result;
use tablegraft_schema::SchemaIndex;

use crate::project::SourceArgs;

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// List every named type, not only table types
    #[arg(long)]
    pub all: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let project = self.source.load()?;
        let index = SchemaIndex::new(&project.schema);

        let names = if self.all {
            index.list_all_type_names()
        } else {
            index.list_table_type_names()
        };

        if names.is_empty() {
            println!("No table types found");
        }
        for name in names {
            println!("{}", name);
        }

        Ok(())
    }
}
