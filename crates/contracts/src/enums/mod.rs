pub mod personality;

pub use personality::Personality;
