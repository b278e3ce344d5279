use super::*;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Reads Racket programs and reports any unbalanced brackets"
)]
pub(crate) struct Arguments {
  /// Racket programs to check
  #[arg(required = true, value_name = "FILE")]
  filenames: Vec<PathBuf>,
}

impl Arguments {
  /// Prints one report line per unbalanced file, in argument order.
  pub(crate) fn run(self) -> Result {
    let mut stdout = io::stdout().lock();

    for (index, path) in self.filenames.iter().enumerate() {
      let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.clone(),
        source,
      })?;

      let src = String::from_utf8_lossy(&bytes);

      let filename = path.display().to_string();

      let mut lexer = Lexer::new(&src, &filename).with_source(SourceId(index));

      let token = BalanceChecker::new(&mut lexer).check_balance();

      debug!(file = %filename, balanced = token.is_eof(), "checked");

      if !token.is_eof() {
        writeln!(stdout, "{}", Imbalance(&token))
          .map_err(|source| Error::Write { source })?;
      }
    }

    Ok(())
  }
}
