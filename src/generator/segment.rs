/// Alternatives at one position of an EDS.
///
/// Always holds at least one variant: the first one is stored on its own and
/// is the only one that counts towards an enclosing length budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DegenerateSegment {
    first: String,
    rest: Vec<String>,
}

impl DegenerateSegment {
    pub fn new(first: String, rest: Vec<String>) -> Self {
        DegenerateSegment { first, rest }
    }

    pub fn single(literal: String) -> Self {
        DegenerateSegment { first: literal, rest: Vec::new() }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn variants(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.first.as_str()).chain(self.rest.iter().map(String::as_str))
    }

    pub fn variant_count(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_singleton(&self) -> bool {
        self.rest.is_empty()
    }

    /// Length charged to the enclosing budget: the first variant only.
    pub fn accounted_length(&self) -> usize {
        self.first.len()
    }

    /// How far a scan moves past this segment. Never zero, so a scan over a
    /// budget always terminates.
    pub fn advance(&self) -> usize {
        self.accounted_length().max(1)
    }

    fn push_braced(&self, buffer: &mut String) {
        buffer.push('{');
        buffer.push_str(&self.first);
        for variant in &self.rest {
            buffer.push(',');
            buffer.push_str(variant);
        }
        buffer.push('}');
    }

    /// Rendering inside a variant: a singleton collapses to its literal.
    pub fn push_nested(&self, buffer: &mut String) {
        if self.is_singleton() {
            buffer.push_str(&self.first);
        } else {
            self.push_braced(buffer);
        }
    }

    /// Rendering at the top level: always braced, except a lone empty
    /// variant which renders as nothing rather than `{}`.
    pub fn push_top_level(&self, buffer: &mut String) {
        if self.is_singleton() && self.first.is_empty() {
            return;
        }
        self.push_braced(buffer);
    }
}
