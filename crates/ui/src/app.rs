mod command;
mod fetch;
mod run;
mod state;
#[cfg(test)]
mod tests;
mod types;

pub use fetch::source_title;
pub use state::App;
pub use types::IncomingText;
