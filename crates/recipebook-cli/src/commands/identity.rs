//! Identity commands
//!
//! Usage: recipebook whoami | recipebook register <NAME>

use clap::Args;
use recipebook_engine::{
    apply_engine_command, apply_engine_query, EngineCommand, EngineCommandResult, EngineQuery,
    EngineQueryResult,
};
use recipebook_store::RecipeStore;

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Your name, saved permanently
    pub name: String,
}

/// Execute whoami command
pub fn execute_whoami(store: &RecipeStore) -> Result<(), Box<dyn std::error::Error>> {
    match apply_engine_query(EngineQuery::CurrentIdentity, store)? {
        EngineQueryResult::CurrentIdentity(Some(identity)) => {
            println!("Hello, {}", identity.name);
        }
        _ => {
            println!("No name saved yet. Run `recipebook register <NAME>` to personalize the journal.");
        }
    }
    Ok(())
}

/// Execute register command
pub fn execute_register(
    args: RegisterArgs,
    store: &RecipeStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = EngineCommand::RegisterIdentity { name: args.name };

    if let EngineCommandResult::IdentityRegistered { identity, .. } =
        apply_engine_command(cmd, store)?
    {
        println!(
            "Welcome, {}! Your name is saved permanently.",
            identity.name
        );
    }
    Ok(())
}
