// ABOUTME: Version string, prompt literal, and startup banner text.

pub const VERSION: &str = "0.0.0";
pub const PROMPT: &str = "lithp> ";
pub const GRAMMAR_FILE: &str = "grammar.txt";
pub const HISTORY_FILE: &str = ".lithp_history";

pub const BANNER_TITLE: &str = "Lispy Version";
pub const BANNER_EXIT_HINT: &str = "Press Ctrl+c to Exit";
