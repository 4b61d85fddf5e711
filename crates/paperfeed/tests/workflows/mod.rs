use super::*;

mod fetch;
mod summarize;
