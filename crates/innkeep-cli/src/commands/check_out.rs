//! Check-out command
//!
//! Usage: innkeep check-out <ROOM> [--yes]
//!
//! Without `--yes` the operator is asked to confirm on stdin.

use clap::Args;
use innkeep_core::{Confirmation, PendingCheckOut, RegistryError};
use innkeep_store::Session;
use std::io::{self, BufRead, Write};

#[derive(Debug, Args)]
pub struct CheckOutArgs {
    /// Room number to check out
    pub room: String,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

/// Execute check-out
///
/// A declined confirmation is a normal outcome and exits 0.
pub fn execute(session: &Session, args: CheckOutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let pending = innkeep_engine::resolve_check_out(session, &args.room)?;
    let room_number = pending.room_number;

    let confirmation = if args.yes {
        Confirmation::Confirmed
    } else {
        let stdin = io::stdin();
        prompt_confirmation(&pending, &mut stdin.lock(), &mut io::stdout())?
    };

    match innkeep_engine::confirm_check_out(session, pending, confirmation) {
        Ok(name) => {
            println!("{} checked out of room {}", name, room_number);
            Ok(())
        }
        Err(e @ RegistryError::CheckOutCancelled { .. }) => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Ask the operator to confirm checking out `pending`
///
/// End of input counts as a refusal.
pub fn prompt_confirmation<R: BufRead, W: Write>(
    pending: &PendingCheckOut,
    input: &mut R,
    output: &mut W,
) -> io::Result<Confirmation> {
    write!(
        output,
        "Check out {} from room {}? [y/N] ",
        pending.name, pending.room_number
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(Confirmation::from_response(&answer))
}
