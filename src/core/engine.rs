use crate::core::classifier::classify_credits;
use crate::core::input::Prompter;
use crate::domain::model::{Checkpoint, Credits, RoundResult, Session, CREDIT_RANGE};
use crate::utils::error::{Result, TallyError};
use std::io::{BufRead, Write};

pub const MSG_EXIT_OR_ENTER: &str =
    "Would you like to enter another set of data, or quit and view results?";

/// Drives the interactive rounds and collects them into a [`Session`].
pub struct TallyEngine<R, W> {
    prompter: Prompter<R, W>,
    session: Session,
}

impl<R: BufRead, W: Write> TallyEngine<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            session: Session::new(),
        }
    }

    /// 執行一回合：讀取三個學分值、檢查總和並分類
    ///
    /// A wrong total is returned as [`TallyError::IncorrectTotal`] after the
    /// message has been printed; the caller starts the round over.
    pub fn round(&mut self) -> Result<RoundResult> {
        let mut values = [0u32; 3];
        for (slot, checkpoint) in values.iter_mut().zip(Checkpoint::ALL) {
            let label = format!("Please enter the credits at {}", checkpoint.name());
            *slot = self.prompter.ranged_input(&label, &CREDIT_RANGE)?;
        }
        let [pass, defer, fail] = values;

        let credits = match Credits::new(pass, defer, fail) {
            Ok(credits) => credits,
            Err(e @ TallyError::IncorrectTotal { .. }) => {
                self.prompter.say(&format!("{}\n", e))?;
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let category = classify_credits(&credits)?;
        self.prompter
            .say(&format!("Status: {}\n", category.message()))?;
        tracing::debug!("Round classified: {} -> {:?}", credits, category);

        Ok(RoundResult::new(credits, category))
    }

    /// 反覆執行回合直到使用者選擇離開
    pub fn run(mut self) -> Result<(Session, Prompter<R, W>)> {
        loop {
            match self.round() {
                Ok(result) => {
                    self.session.record(result);
                    if !self.prompter.yes_or_quit(MSG_EXIT_OR_ENTER)? {
                        break;
                    }
                }
                Err(TallyError::IncorrectTotal { actual, .. }) => {
                    tracing::debug!("Round discarded, total was {}", actual);
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!("Session finished with {} rounds", self.session.len());
        Ok((self.session, self.prompter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;
    use std::io::Cursor;

    fn engine(script: &str) -> TallyEngine<Cursor<Vec<u8>>, Vec<u8>> {
        TallyEngine::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_single_round_then_quit() {
        let (session, prompter) = engine("120\n0\n0\nq\n").run().unwrap();

        assert_eq!(session.len(), 1);
        assert_eq!(session.rounds()[0].category, Category::Progress);

        let (_, output) = prompter.into_parts();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Status: Progress\n\n"));
        assert!(output.contains(MSG_EXIT_OR_ENTER));
    }

    #[test]
    fn test_wrong_total_restarts_round() {
        let (session, prompter) = engine("40\n40\n20\n100\n20\n0\nquit\n").run().unwrap();

        assert_eq!(session.len(), 1);
        assert_eq!(session.rounds()[0].category, Category::ProgressWithTrailer);

        let (_, output) = prompter.into_parts();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("The total is incorrect. Expected 120, but got 100!\n\n"));
        assert_eq!(output.matches("Please enter the credits at pass: ").count(), 2);
    }

    #[test]
    fn test_interrupt_mid_round() {
        let err = engine("120\n0\n0\ny\n40\n").run().unwrap_err();
        assert!(matches!(err, TallyError::Interrupted));
    }
}
