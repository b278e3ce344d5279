use super::*;

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum Action {
  NoAction,
  Pop,
  Push,
  ReportUnbalanced,
}

/// Matches the opening and closing tokens produced by a tokenizer, asking
/// the tokenizer which tokens open and close and which pairs match.
pub(crate) struct BalanceChecker<'a, 'src, T: Tokenizer<'src>> {
  stack: Vec<Token<'src>>,
  tokenizer: &'a mut T,
}

impl<'a, 'src, T: Tokenizer<'src>> BalanceChecker<'a, 'src, T> {
  pub fn new(tokenizer: &'a mut T) -> Self {
    BalanceChecker {
      stack: Vec::new(),
      tokenizer,
    }
  }

  /// Consumes tokens until the input is exhausted or found unbalanced.
  ///
  /// Returns the end of input token if the input is balanced, the opener on
  /// top of the stack if the input ended with openers left unclosed, or
  /// otherwise the closing token that failed to match.
  pub fn check_balance(&mut self) -> Token<'src> {
    loop {
      let token = self.tokenizer.next_token();

      match self.determine_action(&self.stack, &token) {
        Action::NoAction if self.tokenizer.is_eof(&token) => {
          assert!(
            self.stack.is_empty(),
            "reached end of input with {} unclosed tokens",
            self.stack.len()
          );
          return token;
        }
        Action::NoAction => {}
        Action::Pop => {
          self.stack.pop();
        }
        Action::Push => self.stack.push(token),
        Action::ReportUnbalanced => return self.unbalanced(token),
      }
    }
  }

  /// Decides what `token` does to `stack` without touching either.
  ///
  /// A token that both opens and closes closes a matching stack top and
  /// otherwise opens. An opener is pushed. A closer pops a matching stack
  /// top and is unbalanced otherwise. The end of input is unbalanced while
  /// anything is left on the stack.
  pub(crate) fn determine_action(
    &self,
    stack: &[Token<'src>],
    token: &Token<'src>,
  ) -> Action {
    let opening = self.tokenizer.is_opening(token);
    let closing = self.tokenizer.is_closing(token);

    let matches_top = stack
      .last()
      .is_some_and(|top| self.tokenizer.are_matching(top, token));

    if opening && closing {
      if matches_top {
        Action::Pop
      } else {
        Action::Push
      }
    } else if opening {
      Action::Push
    } else if closing {
      if matches_top {
        Action::Pop
      } else {
        Action::ReportUnbalanced
      }
    } else if self.tokenizer.is_eof(token) {
      if stack.is_empty() {
        Action::NoAction
      } else {
        Action::ReportUnbalanced
      }
    } else {
      Action::NoAction
    }
  }

  fn unbalanced(&mut self, token: Token<'src>) -> Token<'src> {
    let culprit = if self.tokenizer.is_eof(&token) {
      self.stack.pop().unwrap_or(token)
    } else {
      token
    };

    debug!(
      kind = ?culprit.kind,
      line = culprit.end.line,
      column = culprit.start.column,
      pending = self.stack.len(),
      "unbalanced token"
    );

    culprit
  }
}
