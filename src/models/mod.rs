mod poem;
mod question;
mod score;

pub use poem::Poem;
pub use question::{CHOICE_COUNT, GameMode, Question};
pub use score::Score;
