//! Interactive prompts.
//!
//! Used when the Songs directory or the categories to delete were not given
//! on the command line or in the config file, and to confirm a Songs
//! directory that does not look like one.
//!
//! Prompts are drawn with [`dialoguer`] on the terminal. Every yes/no
//! question defaults to no, so pressing Enter never deletes anything.

use std::path::PathBuf;

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input};
use thiserror::Error;
use yansi::Paint;

use crate::classifier::Selection;

/// Category questions, in the order they are asked.
pub const CATEGORY_QUESTIONS: [&str; 5] = [
    "Do you want to delete all videos from your osu! Songs directory?",
    "Do you want to delete all hitsounds from your osu! Songs directory?",
    "Do you want to delete all backgrounds from your osu! Songs directory?",
    "Do you want to delete all skin elements from your osu! Songs directory?",
    "Do you want to delete all storyboards from your osu! Songs directory?",
];

/// Errors that can occur while prompting.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The terminal could not be used (not a TTY, input closed, ...).
    #[error("terminal prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),
}

/// Asks questions on the terminal.
pub struct Prompter {
    theme: Box<dyn Theme>,
}

impl Prompter {
    /// Create a prompter, with or without colors.
    #[must_use]
    pub fn new(colored: bool) -> Self {
        let theme: Box<dyn Theme> = if colored {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }

    /// Ask a yes/no question. An empty answer is no.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Terminal`] if the terminal cannot be used.
    pub fn ask_yes_no(&self, question: &str) -> Result<bool, PromptError> {
        Ok(Confirm::with_theme(self.theme.as_ref())
            .with_prompt(question)
            .default(false)
            .interact()?)
    }

    /// Ask for the path of the Songs directory.
    ///
    /// Surrounding quotes, as left by drag-and-drop into a terminal, are
    /// removed. Empty answers are asked again.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Terminal`] if the terminal cannot be used.
    pub fn ask_songs_dir(&self) -> Result<PathBuf, PromptError> {
        let answer: String = Input::with_theme(self.theme.as_ref())
            .with_prompt("Enter the path to your osu! Songs directory")
            .validate_with(|input: &String| -> Result<(), &'static str> {
                if strip_quotes(input).is_empty() {
                    Err("Please enter a path")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        Ok(PathBuf::from(strip_quotes(&answer)))
    }

    /// Ask, one category at a time, what to delete.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Terminal`] if the terminal cannot be used.
    pub fn ask_selection(&self) -> Result<Selection, PromptError> {
        let mut answers = [false; 5];
        for (answer, question) in answers.iter_mut().zip(CATEGORY_QUESTIONS) {
            *answer = self.ask_yes_no(question)?;
        }
        Ok(selection_from_answers(answers))
    }

    /// Ask for confirmation before scanning a directory without `osu!.exe` next to it.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Terminal`] if the terminal cannot be used.
    pub fn confirm_unrecognized_dir(&self) -> Result<bool, PromptError> {
        let warning = "Incorrect choice of directory may lead to LOSS OF DATA.".red();
        self.ask_yes_no(&format!(
            "Are you really sure that chosen directory is actually osu! Songs directory? {warning}"
        ))
    }
}

/// Answers to [`CATEGORY_QUESTIONS`], in order, as a selection.
#[must_use]
pub fn selection_from_answers(answers: [bool; 5]) -> Selection {
    let [videos, hitsounds, backgrounds, skin_elements, storyboard_elements] = answers;
    Selection {
        videos,
        hitsounds,
        backgrounds,
        skin_elements,
        storyboard_elements,
    }
}

/// Drag-and-drop into a terminal often wraps the path in quotes.
fn strip_quotes(answer: &str) -> &str {
    let trimmed = answer.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    trimmed
}
