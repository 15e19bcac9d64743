use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::Poem;

/// Number of answer choices offered per question.
pub const CHOICE_COUNT: usize = 4;

/// Which field of a poem is being quizzed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Guess the lower verse from the upper verse.
    #[default]
    LowerVerse,
    /// Guess the author from the whole poem.
    Author,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::LowerVerse, GameMode::Author];

    /// The field whose value is the correct answer.
    pub fn answer<'a>(&self, poem: &'a Poem) -> &'a str {
        match self {
            GameMode::LowerVerse => &poem.lower,
            GameMode::Author => &poem.author,
        }
    }

    /// Text shown to the player for the given target poem.
    pub fn prompt(&self, poem: &Poem) -> String {
        match self {
            GameMode::LowerVerse => poem.upper.clone(),
            GameMode::Author => format!("{}\n{}", poem.upper, poem.lower),
        }
    }

    /// Synthetic filler used when the corpus runs out of distractors.
    pub fn placeholder(&self, position: usize) -> String {
        match self {
            GameMode::LowerVerse => format!("選択肢 {}", position),
            GameMode::Author => format!("作者 {}", position),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::LowerVerse => "下の句当て",
            GameMode::Author => "作者当て",
        }
    }

    pub fn toggled(&self) -> GameMode {
        match self {
            GameMode::LowerVerse => GameMode::Author,
            GameMode::Author => GameMode::LowerVerse,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single multiple-choice round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub poem: Poem,
    pub prompt: String,
    pub choices: [String; CHOICE_COUNT],
    pub correct_answer: String,
    pub kind: GameMode,
}

impl Question {
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poem() -> Poem {
        Poem {
            id: 7,
            author: "安倍仲麿".to_string(),
            upper: "天の原 ふりさけ見れば 春日なる".to_string(),
            lower: "三笠の山に 出でし月かも".to_string(),
            reading_upper: "あまのはら ふりさけみれば かすがなる".to_string(),
            reading_lower: "みかさのやまに いでしつきかも".to_string(),
            description: "唐の地で故郷の月を詠んだ歌".to_string(),
        }
    }

    #[test]
    fn test_answer_field_per_mode() {
        let poem = poem();
        assert_eq!(GameMode::LowerVerse.answer(&poem), "三笠の山に 出でし月かも");
        assert_eq!(GameMode::Author.answer(&poem), "安倍仲麿");
    }

    #[test]
    fn test_author_prompt_shows_whole_poem() {
        let poem = poem();
        assert_eq!(GameMode::LowerVerse.prompt(&poem), poem.upper);
        assert_eq!(
            GameMode::Author.prompt(&poem),
            "天の原 ふりさけ見れば 春日なる\n三笠の山に 出でし月かも"
        );
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&GameMode::LowerVerse).unwrap();
        assert_eq!(json, "\"lower_verse\"");
        let mode: GameMode = serde_json::from_str("\"author\"").unwrap();
        assert_eq!(mode, GameMode::Author);
    }
}
