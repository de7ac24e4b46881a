mod client;
mod prompt;

pub use client::JdParserClient;
