//! Styled text runs

/// Character styling shared by a run of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStyle {
    pub bold: bool,
    pub underline: bool,
    pub superscript: bool,
}

/// A contiguous span of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: RunStyle,
}

impl StyledRun {
    /// Unstyled text
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }

    /// Bold text
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle {
                bold: true,
                ..RunStyle::default()
            },
        }
    }

    /// Bold and underlined text
    pub fn bold_underline(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle {
                bold: true,
                underline: true,
                superscript: false,
            },
        }
    }

    /// Superscripted text
    pub fn superscript(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle {
                superscript: true,
                ..RunStyle::default()
            },
        }
    }
}

/// Concatenate run text, discarding styling
pub fn flat_text(runs: &[StyledRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(StyledRun::bold("x").style.bold);
        assert!(!StyledRun::bold("x").style.underline);
        assert!(StyledRun::bold_underline("x").style.underline);
        assert!(StyledRun::superscript("th").style.superscript);
        assert_eq!(StyledRun::plain("x").style, RunStyle::default());
    }

    #[test]
    fn test_flat_text() {
        let runs = vec![
            StyledRun::bold("1."),
            StyledRun::plain(" "),
            StyledRun::plain("rest"),
        ];
        assert_eq!(flat_text(&runs), "1. rest");
    }
}
