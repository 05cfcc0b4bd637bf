use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, anyhow, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Confirm(bool),
    Text(String),
    Number(f64),
}

/// Replays a fixed list of answers in order, ignoring prompt bounds.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
}

impl ScriptedDriver {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer left for {title:?}"))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, _default: bool) -> Result<bool> {
        match self.next(title)? {
            Answer::Confirm(b) => Ok(b),
            other => bail!("expected a confirmation for {title:?}, got {other:?}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, _default: &str) -> Result<String> {
        match self.next(title)? {
            Answer::Text(s) => Ok(s),
            other => bail!("expected text for {title:?}, got {other:?}"),
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        _default: f64,
        _min: Option<f64>,
        _max: Option<f64>,
    ) -> Result<f64> {
        match self.next(title)? {
            Answer::Number(x) => Ok(x),
            other => bail!("expected a number for {title:?}, got {other:?}"),
        }
    }
}
