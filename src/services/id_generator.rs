use uuid::Uuid;

/// Trait defining how new credential IDs are produced.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random (v4) UUIDs in hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
