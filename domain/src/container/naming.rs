//! Names for sections created without an explicit name

/// Counter-backed generator owned by whoever creates the sections
#[derive(Debug, Clone)]
pub struct SectionNameSequence {
    prefix: String,
    next: u32,
}

impl SectionNameSequence {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Use `name` when given, otherwise the next generated one
    pub fn resolve(&mut self, name: Option<&str>) -> String {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(n) => n.to_string(),
            None => self.next_name(),
        }
    }

    pub fn next_name(&mut self) -> String {
        let name = format!("{} {}", self.prefix, self.next);
        self.next += 1;
        name
    }
}

impl Default for SectionNameSequence {
    fn default() -> Self {
        Self::new("Section")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_names_increment() {
        let mut seq = SectionNameSequence::default();
        assert_eq!(seq.next_name(), "Section 1");
        assert_eq!(seq.next_name(), "Section 2");
    }

    #[test]
    fn test_explicit_name_does_not_consume_counter() {
        let mut seq = SectionNameSequence::new("Unit");
        assert_eq!(seq.resolve(Some("Basics")), "Basics");
        assert_eq!(seq.resolve(Some("  ")), "Unit 1");
        assert_eq!(seq.resolve(None), "Unit 2");
    }

    #[test]
    fn test_sequences_are_independent() {
        let mut a = SectionNameSequence::default();
        let mut b = SectionNameSequence::default();
        a.next_name();
        assert_eq!(b.next_name(), "Section 1");
    }
}
