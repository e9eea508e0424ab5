pub mod filter;
pub mod query;
pub mod result_ranking;
pub mod spell;
pub mod tokenization;

// Public exports
pub use filter::{
    filter_data, filter_data_with_checker, filter_exact, validate_search, SearchOptions,
    SearchValidation,
};
pub use query::expand_query_tokens;
pub use result_ranking::rank_keywords;
pub use spell::{correct_words, default_checker, Lang, SpellChecker};
pub use tokenization::{normalize, stem, tokenize};
