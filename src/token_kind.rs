#[derive(Debug, PartialEq, Clone, Copy, Ord, PartialOrd, Eq)]
pub(crate) enum TokenKind {
  Eof = 0,
  BraceL,
  BraceR,
  BracketL,
  BracketR,
  Comment,
  ParenL,
  ParenR,
  QuotationMark,
  StringData,
  Symbol,
  Whitespace,
}

impl TokenKind {
  /// The kind a character would produce outside of a string or comment,
  /// with `None` standing for the end of input.
  pub(crate) fn characteristic(c: Option<char>) -> Self {
    match c {
      None => Self::Eof,
      Some('(') => Self::ParenL,
      Some('[') => Self::BracketL,
      Some('{') => Self::BraceL,
      Some(')') => Self::ParenR,
      Some(']') => Self::BracketR,
      Some('}') => Self::BraceR,
      Some('"') => Self::QuotationMark,
      Some(' ' | '\t' | '\n' | '\r') => Self::Whitespace,
      Some(';') => Self::Comment,
      Some(_) => Self::Symbol,
    }
  }

  pub(crate) fn is_opening(self) -> bool {
    matches!(
      self,
      Self::ParenL | Self::BracketL | Self::BraceL | Self::QuotationMark
    )
  }

  pub(crate) fn is_closing(self) -> bool {
    matches!(
      self,
      Self::ParenR | Self::BracketR | Self::BraceR | Self::QuotationMark
    )
  }

  pub(crate) fn closes(self, opener: TokenKind) -> bool {
    matches!(
      (opener, self),
      (Self::ParenL, Self::ParenR)
        | (Self::BracketL, Self::BracketR)
        | (Self::BraceL, Self::BraceR)
        | (Self::QuotationMark, Self::QuotationMark)
    )
  }
}
