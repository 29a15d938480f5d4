/// Byte offset into the source. Stored as `usize` so any `&str` the lexer can
/// be handed is addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpanIndex(usize);

impl SpanIndex {
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    pub const fn to_usize(&self) -> usize {
        self.0
    }
}

impl From<SpanIndex> for usize {
    fn from(value: SpanIndex) -> Self {
        value.0
    }
}

impl From<usize> for SpanIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl std::ops::Add<SpanLength> for SpanIndex {
    type Output = Self;

    fn add(self, rhs: SpanLength) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Add<usize> for SpanIndex {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanLength(usize);

impl SpanLength {
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    pub const fn to_usize(&self) -> usize {
        self.0
    }
}

impl From<SpanLength> for usize {
    fn from(value: SpanLength) -> Self {
        value.0
    }
}

impl From<usize> for SpanLength {
    fn from(value: usize) -> Self {
        Self(value)
    }
}
