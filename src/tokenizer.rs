use super::*;

/// A source of tokens for the balance checker. Every tokenizer must be able
/// to produce the end of input token, and must keep producing it once the
/// input is exhausted.
pub(crate) trait Tokenizer<'src> {
  fn next_token(&mut self) -> Token<'src>;

  /// Whether `closer` closes `opener`.
  fn are_matching(&self, opener: &Token<'src>, closer: &Token<'src>) -> bool;

  /// A token may be both opening and closing, like `"`.
  fn is_opening(&self, token: &Token<'src>) -> bool;

  fn is_closing(&self, token: &Token<'src>) -> bool;

  fn is_eof(&self, token: &Token<'src>) -> bool {
    token.is_eof()
  }
}
