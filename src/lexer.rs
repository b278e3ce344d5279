use super::*;

/// Tokenizes the bracket structure of Racket source.
///
/// Only `(`, `)`, `[`, `]`, `{`, `}`, `"`, `;` and whitespace delimit
/// tokens. Inside a string a backslash escapes whatever follows it, so `"\\"`
/// is one string. Everything else is lumped into symbol runs, which means
/// something like `` ,`'hello `` is a single token.
///
/// The line break ending a comment is not part of the comment. When a
/// comment ends in `\r\n` the `\r` belongs to the whitespace token that
/// follows, while a lone `\r` stays in the comment.
///
/// Input that ends in the middle of a string, even right after a backslash,
/// produces the truncated string data followed by the end of input token.
pub(crate) struct Lexer<'src> {
  chars: Chars<'src>,
  filename: &'src str,
  position: Position,
  source: Option<SourceId>,
  src: &'src str,
  start_position: Position,
  state: State,
}

impl<'src> Lexer<'src> {
  pub fn new(src: &'src str, filename: &'src str) -> Self {
    Lexer {
      chars: src.chars(),
      filename,
      position: Position::new(),
      source: None,
      src,
      start_position: Position::new(),
      state: State::Init,
    }
  }

  /// Stamps every token produced with `source`.
  pub fn with_source(self, source: SourceId) -> Self {
    Self {
      source: Some(source),
      ..self
    }
  }

  fn advance(&mut self) -> Option<char> {
    let c = self.chars.next()?;

    self.position.advance(c);

    Some(c)
  }

  fn peek(&self) -> Option<char> {
    self.chars.clone().next()
  }

  /// The position where the token being emitted ends. When a comment is
  /// followed by `\r\n`, the comment's trailing `\r` is handed over to the
  /// whitespace token that comes next.
  fn token_end(&self, carriage_return: bool) -> Position {
    let mut end = self.position;

    if carriage_return {
      debug_assert!(self.src[..end.offset].ends_with('\r'));
      end.retreat('\r');
    }

    end
  }

  fn token(&mut self, kind: TokenKind, end: Position) -> Token<'src> {
    let token = Token {
      kind,
      lexeme: &self.src[self.start_position.offset..end.offset],
      source: self.source,
      filename: self.filename,
      start: self.start_position,
      end,
    };

    self.start_position = end;

    trace!(
      kind = ?token.kind,
      lexeme = token.lexeme,
      line = token.start.line,
      column = token.start.column,
      "token"
    );

    token
  }
}

impl<'src> Tokenizer<'src> for Lexer<'src> {
  fn next_token(&mut self) -> Token<'src> {
    loop {
      let consumed = match self.state {
        State::Init | State::AtEof => None,
        _ => self.advance(),
      };

      let transition = self.state.transition(consumed, self.peek());

      let carriage_return = self.state == State::AtCommentCr
        && transition.next == State::AtWhitespace;

      self.state = transition.next;

      if transition.emit {
        let end = self.token_end(carriage_return);
        return self.token(transition.kind, end);
      }
    }
  }

  fn are_matching(&self, opener: &Token<'src>, closer: &Token<'src>) -> bool {
    closer.kind.closes(opener.kind)
  }

  fn is_opening(&self, token: &Token<'src>) -> bool {
    token.kind.is_opening()
  }

  fn is_closing(&self, token: &Token<'src>) -> bool {
    token.kind.is_closing()
  }
}
