mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{FontRules, MarginRules, ParagraphRules, RuleSet, Tolerances};
