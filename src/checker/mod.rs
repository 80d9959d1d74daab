mod margins;
mod paragraph;
mod span;

pub use margins::MarginChecker;
pub use paragraph::ParagraphChecker;
pub use span::SpanChecker;
