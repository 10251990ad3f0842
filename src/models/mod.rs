pub mod answer;
pub mod loaders;
pub mod locale;
pub mod question;
pub mod result;

pub use answer::Answer;
pub use loaders::{load_catalog, load_catalog_for_locale, load_scale};
pub use locale::Locale;
pub use question::{CatalogTexts, CategoryLabels, Question, QuestionCatalog, QuizOption};
pub use result::{AgeCategory, AgeComparison, QuizResult};
