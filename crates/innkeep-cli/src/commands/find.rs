//! Find command
//!
//! Usage: innkeep find <ROOM> [--json]

use crate::render;
use clap::Args;
use innkeep_store::Session;

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Room number to look up
    pub room: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(session: &Session, args: FindArgs) -> Result<(), Box<dyn std::error::Error>> {
    let customer = innkeep_engine::find_by_room(session, &args.room)?;

    if args.json {
        println!("{}", render::to_json(&customer)?);
    } else {
        print!("{}", render::render_customer(&customer));
    }
    Ok(())
}
