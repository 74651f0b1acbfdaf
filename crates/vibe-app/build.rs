//! Build script for embedding git metadata via vergen-gitcl and the web
//! deployment base path.

use vergen_gitcl::{Emitter, GitclBuilder};

#[allow(dead_code)]
#[path = "src/deploy.rs"]
mod deploy;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let gitcl = GitclBuilder::all_git()?;

    Emitter::default().add_instructions(&gitcl)?.emit()?;

    println!("cargo:rerun-if-env-changed=GITHUB_ACTIONS");
    println!("cargo:rerun-if-env-changed=GITHUB_REPOSITORY");
    let github_actions = std::env::var("GITHUB_ACTIONS").ok();
    let repository = std::env::var("GITHUB_REPOSITORY").ok();
    let base_path = deploy::base_path_for(github_actions.as_deref(), repository.as_deref());
    println!("cargo:rustc-env={}={base_path}", deploy::BASE_PATH_ENV);

    Ok(())
}
