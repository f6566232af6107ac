//! Embeds git metadata for the startup log.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let git = GitclBuilder::all_git()?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}
