//! List command
//!
//! Usage: innkeep list [--json]

use crate::render;
use clap::Args;
use innkeep_store::Session;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn execute(session: &Session, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let customers = innkeep_engine::list_all(session)?;

    if args.json {
        println!("{}", render::to_json(&customers)?);
    } else {
        print!("{}", render::render_table(&customers));
    }
    Ok(())
}
