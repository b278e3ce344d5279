use super::*;

/// Identifies the tokenizer that produced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SourceId(pub(crate) usize);

/// Tokens compare equal when their kind, lexeme and source agree, wherever
/// in whichever file they were found.
#[derive(Debug, Clone)]
pub(crate) struct Token<'src> {
  pub(crate) kind: TokenKind,
  pub(crate) lexeme: &'src str,
  pub(crate) source: Option<SourceId>,
  pub(crate) filename: &'src str,
  pub(crate) start: Position,
  pub(crate) end: Position,
}

impl Token<'_> {
  pub(crate) fn is_eof(&self) -> bool {
    self.kind == TokenKind::Eof
  }
}

impl PartialEq for Token<'_> {
  fn eq(&self, other: &Self) -> bool {
    self.kind == other.kind
      && self.lexeme == other.lexeme
      && self.source == other.source
  }
}

impl Eq for Token<'_> {}
