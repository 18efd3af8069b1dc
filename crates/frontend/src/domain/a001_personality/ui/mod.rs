mod selector;

pub use selector::PersonalitySelector;
