pub mod run;
pub mod summarize;
