// Resume analysis: skills found in free text, gaps against a target sector, and advice.

pub mod gap_analyzer;
pub mod handlers;
