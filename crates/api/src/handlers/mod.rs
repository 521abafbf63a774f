pub mod character;
pub mod episode;
pub mod episode_note;
pub mod foreshadow;
pub mod original_work;
pub mod project;
pub mod prompt;
pub mod tools;
pub mod world_rule;
