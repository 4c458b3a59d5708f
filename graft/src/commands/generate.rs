use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use tablegraft_codegen::DefinitionGenerator;
use tablegraft_core::{Keyword, OutputFile, WriteResult};
use tablegraft_schema::SchemaIndex;

use crate::project::SourceArgs;

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Table types to generate (defaults to [generate].select)
    pub types: Vec<String>,

    /// Generate every table type in the schema
    #[arg(long, conflicts_with = "types")]
    pub all: bool,

    /// Block keyword: type or input (defaults to [generate].keyword)
    #[arg(short, long)]
    pub keyword: Option<Keyword>,

    /// Output file (defaults to [generate].output, then stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print generated definitions without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let project = self.source.load()?;
        let index = SchemaIndex::new(&project.schema);

        let selection: Vec<String> = if self.all {
            index
                .list_table_type_names()
                .into_iter()
                .map(String::from)
                .collect()
        } else {
            project.selection(&self.types)
        };
        if selection.is_empty() {
            bail!("no types selected; pass type names, --all, or set [generate].select");
        }

        let keyword = project.keyword(self.keyword);
        let text = DefinitionGenerator::new(index).generate_all(&selection, keyword);

        match project.output(self.output.clone()) {
            Some(path) if !self.dry_run => {
                let file = OutputFile::new(path, text);
                match file.write()? {
                    WriteResult::Written => println!("Generated: {}", file.path().display()),
                    WriteResult::Unchanged => println!("Unchanged: {}", file.path().display()),
                }
            }
            _ => print!("{}", text),
        }

        Ok(())
    }
}
