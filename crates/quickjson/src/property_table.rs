//! Field-name index used by generated record decoders.
//!
//! 26 primary slots, keyed by `name.as_bytes()[0] % 26`, plus an overflow
//! list for collisions. JSON keys in typical records have well-spread first
//! letters, so the common case never touches the overflow list or compares
//! more than one byte before a full string comparison.

const BUCKETS: usize = 26;

pub struct PropertyEntry<T> {
    pub name: &'static str,
    pub decode: Box<dyn FnMut(&mut T, &mut crate::tokenizer::Tokenizer<'_>) -> Result<(), crate::error::DecodeError>>,
}

pub struct PropertyTable<T> {
    primary: [Option<PropertyEntry<T>>; BUCKETS],
    overflow: Vec<PropertyEntry<T>>,
}

impl<T> Default for PropertyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PropertyTable<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            primary: [const { None }; BUCKETS],
            overflow: Vec::new(),
        }
    }

    fn bucket(name: &str) -> usize {
        name.as_bytes().first().copied().unwrap_or(0) as usize % BUCKETS
    }

    pub fn add(&mut self, entry: PropertyEntry<T>) {
        let slot = Self::bucket(entry.name);
        if self.primary[slot].is_none() {
            self.primary[slot] = Some(entry);
        } else {
            self.overflow.push(entry);
        }
    }

    /// Find the entry for `name`, or `None` if no property was registered
    /// under it.
    pub fn find(&mut self, name: &str) -> Option<&mut PropertyEntry<T>> {
        let slot = Self::bucket(name);
        if matches!(&self.primary[slot], Some(entry) if entry.name == name) {
            return self.primary[slot].as_mut();
        }
        self.overflow.iter_mut().find(|entry| entry.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::DecodeError, tokenizer::Tokenizer};

    struct Dummy {
        hit: &'static str,
    }

    fn entry(name: &'static str) -> PropertyEntry<Dummy> {
        PropertyEntry {
            name,
            decode: Box::new(move |dest: &mut Dummy, _tokens: &mut Tokenizer<'_>| -> Result<(), DecodeError> {
                dest.hit = name;
                Ok(())
            }),
        }
    }

    #[test]
    fn finds_inserted_property() {
        let mut table = PropertyTable::new();
        table.add(entry("name"));
        table.add(entry("age"));
        assert!(table.find("name").is_some());
        assert!(table.find("age").is_some());
        assert!(table.find("missing").is_none());
    }

    #[test]
    fn same_first_letter_falls_back_to_overflow() {
        // 'a' and 'age' share a bucket (both start with 'a').
        let mut table = PropertyTable::new();
        table.add(entry("apple"));
        table.add(entry("avocado"));
        assert!(table.find("apple").is_some());
        assert!(table.find("avocado").is_some());
        assert!(table.find("apricot").is_none());
    }
}
