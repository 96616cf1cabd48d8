use crate::span::Span;

/// A message attached to a span of the data argument.
///
/// A diagnostic usually has one primary label marking the problem and may
/// add secondary labels for related locations, such as where a quote was
/// opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_kinds() {
        let primary = Label::primary(Span::new(1..4), "here");
        let secondary = Label::secondary(Span::new(0..1), "opened here");

        assert!(primary.is_primary());
        assert!(!secondary.is_primary());
        assert_eq!(primary.span(), Span::new(1..4));
        assert_eq!(secondary.message(), "opened here");
    }
}
