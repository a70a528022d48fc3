pub mod lang;

pub use lang::{get_text, Language, TextBundle};
