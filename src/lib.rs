//! git-mv-tabs
//!
//! `git mv` a file and keep the editor's open tabs pointing at it. The editor
//! integration lives in the `gmv-app` crate; this package adds a headless
//! host so the same command can be driven from a terminal.

pub mod headless;

pub use headless::{run_headless, HeadlessEvent, HeadlessHost, HeadlessOptions};
