// Passvault services
// Services provide the core functionality: the credential store, password generation
// and scoring, settings, and the clock/id/randomness ports they depend on.

pub mod clock;
pub mod credential_store;
pub mod id_generator;
pub mod password_engine;
pub mod random_source;
pub mod settings_engine;
