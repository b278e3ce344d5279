use super::*;

#[derive(Debug, PartialEq, Clone, Copy, Eq)]
pub(crate) enum State {
  AtBraces,
  AtComment,
  /// In a comment, just consumed a `\r` that may begin a `\r\n`.
  AtCommentCr,
  AtEndQuote,
  AtEof,
  AtEscapedStringData,
  AtStartQuote,
  AtStringData,
  AtSymbol,
  AtWhitespace,
  Init,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) struct Transition {
  pub(crate) next: State,
  pub(crate) emit: bool,
  pub(crate) kind: TokenKind,
}

impl State {
  fn characteristic(kind: TokenKind) -> Self {
    match kind {
      TokenKind::BraceL
      | TokenKind::BraceR
      | TokenKind::BracketL
      | TokenKind::BracketR
      | TokenKind::ParenL
      | TokenKind::ParenR => Self::AtBraces,
      TokenKind::Comment => Self::AtComment,
      TokenKind::Eof => Self::AtEof,
      TokenKind::QuotationMark => Self::AtStartQuote,
      TokenKind::StringData => Self::AtStringData,
      TokenKind::Symbol => Self::AtSymbol,
      TokenKind::Whitespace => Self::AtWhitespace,
    }
  }

  /// Given the character just consumed in this state and the one about to
  /// be consumed (`None` at end of input), decides the next state and
  /// whether the pending text forms a token before `peek` is consumed.
  pub(crate) fn transition(
    self,
    consumed: Option<char>,
    peek: Option<char>,
  ) -> Transition {
    let upcoming = TokenKind::characteristic(peek);

    let default = Transition {
      next: Self::characteristic(upcoming),
      emit: true,
      kind: TokenKind::characteristic(consumed),
    };

    let hold = |next| Transition {
      next,
      emit: false,
      ..default
    };

    match self {
      Self::Init => Transition {
        emit: false,
        ..default
      },
      Self::AtBraces | Self::AtEndQuote => default,
      Self::AtStartQuote => Transition {
        next: match peek {
          None => Self::AtEof,
          Some('"') => Self::AtEndQuote,
          Some('\\') => Self::AtEscapedStringData,
          Some(_) => Self::AtStringData,
        },
        ..default
      },
      Self::AtStringData => Transition {
        kind: TokenKind::StringData,
        ..match peek {
          None => default,
          Some('"') => Transition {
            next: Self::AtEndQuote,
            ..default
          },
          Some('\\') => hold(Self::AtEscapedStringData),
          Some(_) => hold(Self::AtStringData),
        }
      },
      Self::AtEscapedStringData => Transition {
        kind: TokenKind::StringData,
        ..match peek {
          None => default,
          Some(_) => hold(Self::AtStringData),
        }
      },
      Self::AtWhitespace if upcoming == TokenKind::Whitespace => {
        hold(Self::AtWhitespace)
      }
      Self::AtWhitespace => default,
      Self::AtComment | Self::AtCommentCr => Transition {
        kind: TokenKind::Comment,
        ..match peek {
          None => default,
          Some('\n') => Transition {
            next: Self::AtWhitespace,
            ..default
          },
          Some('\r') => hold(Self::AtCommentCr),
          Some(_) => hold(Self::AtComment),
        }
      },
      Self::AtSymbol if upcoming == TokenKind::Symbol => hold(Self::AtSymbol),
      Self::AtSymbol => default,
      Self::AtEof => Transition {
        kind: TokenKind::Eof,
        ..default
      },
    }
  }
}
