use super::*;

/// The report printed for a token that unbalances its file.
pub(crate) struct Imbalance<'a, 'src>(pub(crate) &'a Token<'src>);

impl Display for Imbalance<'_, '_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let Imbalance(token) = self;

    write!(
      f,
      "{}:{}:{}:  '{}' is causing an imbalance",
      token.filename, token.end.line, token.start.column, token.lexeme
    )
  }
}
