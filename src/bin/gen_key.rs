//! Prints a fresh API key for the operator to add to the key file.
//!
//! The key is not registered anywhere; paste the printed line under
//! `[api_keys]` and restart the server.

use catalog_api::keys::{generate_key, SECTION};

fn main() {
    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "new_key".to_string());
    let key = generate_key();

    println!("{key}");
    eprintln!();
    eprintln!("Add this entry to your key file to authorize it:");
    eprintln!();
    eprintln!("[{SECTION}]");
    eprintln!("{name} = \"{key}\"");
}
