//! Shared test fixtures for the catalog integration tests.
//!
//! Provides sample card sheets written into temp directories, a row builder,
//! and a scripted [`Operator`] that answers prompts from a queue.

#![allow(dead_code)]

use nommsters_catalog::{Operator, Result, SourceRow};
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A small sheet exercising mixed-case headers, an extra column, a blank
/// row, placeholder rarity, emoji text and the optional columns.
pub const SAMPLE_SHEET: &str = "\
Guild,Rarity,Type,Name,Textbox,Traits,Combat,Power,Deals True Damage,Notes
Axalon,1,Character,Day's End,\"Deal \u{1F525} damage, then \u{1F525} again.\",Fast - Loyal - ,\u{1F525} 3,4,TRUE,art pending
Ziotech,\u{2014},Action,Red \u{2013} Handed,Draw a card.,,,,,
,,,,,,,,,
Coronis,2,Asset,Salt&Pepper,\u{1F6E1}\u{FE0F} Block.,Tasty,,-,false,
";

/// Same cards, but two names collapse to the same image file.
pub const COLLIDING_SHEET: &str = "\
GUILD,RARITY,TYPE,NAME,TEXTBOX,TRAITS,COMBAT
Axalon,1,Character,Day's End,,,
Axalon,3,Character,Days End,,,
";

/// Missing the COMBAT column.
pub const INCOMPLETE_SHEET: &str = "\
GUILD,RARITY,TYPE,NAME,TEXTBOX,TRAITS
Axalon,1,Character,Day's End,,
";

/// Write `contents` to `dir/name` and return the path.
pub fn write_sheet(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Build a [`SourceRow`] from `(header, value)` pairs.
pub fn row(pairs: &[(&str, &str)]) -> SourceRow {
    SourceRow::from_pairs(pairs.iter().map(|(k, v)| (*k, v.to_string())))
}

/// A row carrying every required column.
pub fn card_row(guild: &str, rarity: &str, name: &str) -> SourceRow {
    row(&[
        ("GUILD", guild),
        ("RARITY", rarity),
        ("TYPE", "Character"),
        ("NAME", name),
        ("TEXTBOX", ""),
        ("TRAITS", ""),
        ("COMBAT", ""),
    ])
}

/// An [`Operator`] that answers from a queue and records everything shown.
pub struct ScriptedOperator {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
    pub messages: Vec<String>,
}

impl ScriptedOperator {
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
            messages: Vec::new(),
        }
    }
}

impl Operator for ScriptedOperator {
    fn say(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        self.answers
            .pop_front()
            .map(|a| a.trim().to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted").into())
    }
}
