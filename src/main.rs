use {
  arguments::Arguments,
  balance_checker::BalanceChecker,
  clap::Parser,
  error::{Error, Result},
  imbalance::Imbalance,
  lexer::Lexer,
  position::Position,
  state::State,
  std::{
    fmt::{self, Display, Formatter},
    fs,
    io::{self, Write},
    path::PathBuf,
    process,
    str::Chars,
  },
  token::{SourceId, Token},
  token_kind::TokenKind,
  tokenizer::Tokenizer,
  tracing::{debug, trace},
  tracing_subscriber::{EnvFilter, prelude::*},
};

mod arguments;
mod balance_checker;
mod error;
mod imbalance;
mod lexer;
mod position;
mod state;
mod token;
mod token_kind;
mod tokenizer;

fn main() {
  tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
