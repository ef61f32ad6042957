//! CLI commands for the vendor directory

use clap::Subcommand;

use crate::display::format_vendor_list;
use crate::error::EventDeskResult;
use crate::storage::Collections;

/// Vendor subcommands
#[derive(Subcommand, Debug)]
pub enum VendorCommands {
    /// List vendors
    List {
        /// Only show preferred vendors
        #[arg(short, long)]
        preferred: bool,
    },
}

/// Handle vendor commands
pub fn handle_vendor_command(
    collections: &Collections,
    cmd: VendorCommands,
) -> EventDeskResult<()> {
    match cmd {
        VendorCommands::List { preferred } => {
            let vendors: Vec<_> = collections
                .vendors
                .iter()
                .filter(|v| !preferred || v.is_preferred)
                .collect();
            println!("{}", format_vendor_list(&vendors));
        }
    }

    Ok(())
}
