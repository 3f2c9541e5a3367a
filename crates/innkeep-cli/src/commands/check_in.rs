//! Check-in command
//!
//! Usage: innkeep check-in --name <NAME> --contact <CONTACT> --address <ADDRESS> --room <ROOM>

use clap::Args;
use innkeep_core::CheckInRequest;
use innkeep_store::Session;

#[derive(Debug, Args)]
pub struct CheckInArgs {
    /// Guest name
    #[arg(long)]
    pub name: Option<String>,

    /// Phone number or other contact detail
    #[arg(long)]
    pub contact: Option<String>,

    /// Home address
    #[arg(long)]
    pub address: Option<String>,

    /// Room number
    #[arg(long)]
    pub room: Option<String>,
}

/// Execute check-in
///
/// Fields are optional at the argument level so that a missing one is
/// reported by registry validation, like any other invalid input.
pub fn execute(session: &Session, args: CheckInArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = CheckInRequest {
        name: args.name,
        contact: args.contact,
        address: args.address,
        room_number: args.room,
    };

    let customer = innkeep_engine::check_in(session, request)?;

    println!(
        "Checked in {} to room {} at {}",
        customer.name,
        customer.room_number,
        customer.check_in_display()
    );
    Ok(())
}
