//! Interactive front desk menu
//!
//! Usage: innkeep menu
//!
//! Runs until the operator picks Exit or input ends. Registry errors are
//! reported and the loop carries on; only I/O failures on the terminal end it.

use crate::commands::check_out::prompt_confirmation;
use crate::render;
use innkeep_core::{CheckInRequest, OutcomeKind, RegistryError};
use innkeep_store::Session;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
==== Front Desk ====
1. Check in
2. List guests
3. Find guest by room
4. Check out
5. Exit
";

pub fn execute(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    run(session, &mut stdin.lock(), &mut io::stdout())?;
    Ok(())
}

/// Drive the menu over arbitrary input and output streams
pub fn run<R: BufRead, W: Write>(session: &Session, input: &mut R, output: &mut W) -> io::Result<()> {
    loop {
        write!(output, "\n{}", MENU)?;
        let Some(choice) = read_field(input, output, "Select an option: ")? else {
            break;
        };

        match choice.trim() {
            "1" => check_in(session, input, output)?,
            "2" => list(session, output)?,
            "3" => find(session, input, output)?,
            "4" => check_out(session, input, output)?,
            "5" | "q" | "quit" | "exit" => break,
            other => writeln!(output, "Unknown option '{}'", other)?,
        }
    }

    writeln!(output, "Goodbye.")
}

/// Prompt and read one line; `None` at end of input
fn read_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

fn report<W: Write>(output: &mut W, err: &RegistryError) -> io::Result<()> {
    match err.outcome() {
        OutcomeKind::Validation => writeln!(output, "Invalid input: {}", err),
        OutcomeKind::Storage => writeln!(output, "Error: {}", err),
        OutcomeKind::Conflict | OutcomeKind::NotFound | OutcomeKind::Cancelled => {
            writeln!(output, "{}", err)
        }
    }
}

fn check_in<R: BufRead, W: Write>(session: &Session, input: &mut R, output: &mut W) -> io::Result<()> {
    let request = CheckInRequest {
        name: read_field(input, output, "Name: ")?,
        contact: read_field(input, output, "Contact: ")?,
        address: read_field(input, output, "Address: ")?,
        room_number: read_field(input, output, "Room number: ")?,
    };

    match innkeep_engine::check_in(session, request) {
        Ok(customer) => writeln!(
            output,
            "Checked in {} to room {} at {}",
            customer.name,
            customer.room_number,
            customer.check_in_display()
        ),
        Err(e) => report(output, &e),
    }
}

fn list<W: Write>(session: &Session, output: &mut W) -> io::Result<()> {
    match innkeep_engine::list_all(session) {
        Ok(customers) => write!(output, "{}", render::render_table(&customers)),
        Err(e) => report(output, &e),
    }
}

fn find<R: BufRead, W: Write>(session: &Session, input: &mut R, output: &mut W) -> io::Result<()> {
    let room = read_field(input, output, "Room number: ")?.unwrap_or_default();

    match innkeep_engine::find_by_room(session, &room) {
        Ok(customer) => write!(output, "{}", render::render_customer(&customer)),
        Err(e) => report(output, &e),
    }
}

fn check_out<R: BufRead, W: Write>(session: &Session, input: &mut R, output: &mut W) -> io::Result<()> {
    let room = read_field(input, output, "Room number: ")?.unwrap_or_default();

    let pending = match innkeep_engine::resolve_check_out(session, &room) {
        Ok(pending) => pending,
        Err(e) => return report(output, &e),
    };
    let room_number = pending.room_number;
    let confirmation = prompt_confirmation(&pending, input, output)?;

    match innkeep_engine::confirm_check_out(session, pending, confirmation) {
        Ok(name) => writeln!(output, "{} checked out of room {}", name, room_number),
        Err(e) => report(output, &e),
    }
}
