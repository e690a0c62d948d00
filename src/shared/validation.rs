use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Canonical slug shape: lowercase alphanumeric tokens joined by single hyphens
    /// - Valid: "books", "home-garden", "top-10-picks"
    /// - Invalid: "-books", "books-", "home--garden", "Books", "home_garden"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}
