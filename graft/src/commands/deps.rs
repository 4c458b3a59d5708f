use clap::Args;
use eyre::Result;
use tablegraft_codegen::{DependencyResolver, MAX_RESOLVE_DEPTH};
use tablegraft_schema::SchemaIndex;

use super::UnwrapOrExit;
use crate::project::SourceArgs;

#[derive(Args)]
pub struct DepsCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Table types to start from
    #[arg(required = true)]
    pub seeds: Vec<String>,
}

impl DepsCommand {
    pub fn run(&self) -> Result<()> {
        let project = self.source.load()?;
        let resolver = DependencyResolver::new(SchemaIndex::new(&project.schema));
        let resolution = resolver.resolve(&self.seeds).unwrap_or_exit();

        if resolution.is_empty() {
            println!("No table dependencies");
        }
        for name in resolution.sorted() {
            println!("{}", name);
        }

        if resolution.truncated {
            eprintln!(
                "warning: traversal stopped at depth {}; the list may be incomplete",
                MAX_RESOLVE_DEPTH
            );
        }

        Ok(())
    }
}
