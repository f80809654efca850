/// Previously submitted values for one surface, navigable like shell
/// history.
///
/// Positions run from `0` (the oldest entry) to `entries.len()`, the
/// trailing slot past the newest entry, which shows the draft rather than a
/// committed entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
    draft: String,
}

impl History {
    pub fn new(draft: impl Into<String>) -> Self {
        Self {
            entries: vec![],
            cursor: 0,
            draft: draft.into(),
        }
    }

    /// Commits `value` as the newest entry and moves back to an empty
    /// trailing slot. Repeated values are kept.
    pub fn push_state(&mut self, value: impl Into<String>) {
        self.entries.push(value.into());
        self.cursor = self.entries.len();
        self.draft.clear();
    }

    pub fn back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn forward(&mut self) -> &str {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
        self.state()
    }

    pub fn state(&self) -> &str {
        self.entries.get(self.cursor).unwrap_or(&self.draft)
    }

    pub fn at_end(&self) -> bool {
        self.cursor == self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_new() {
        let history = History::new("echo");
        assert!(history.is_empty());
        assert_eq!(history.cursor(), 0);
        assert!(history.at_end());
        assert_eq!(history.state(), "echo");
    }

    #[test]
    fn test_push_state() {
        let mut history = History::new("draft");
        history.push_state("ls");
        assert_eq!(history.entries(), ["ls"]);
        assert_eq!(history.cursor(), 1);
        assert!(history.at_end());
        assert_eq!(history.state(), "");

        history.push_state("ls");
        assert_eq!(history.entries(), ["ls", "ls"]);
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_navigation() {
        let mut history = History::new("");
        history.push_state("a");
        history.push_state("b");
        history.push_state("c");

        history.back();
        assert_eq!(history.state(), "c");
        assert!(!history.at_end());
        history.back();
        assert_eq!(history.state(), "b");
        assert_eq!(history.forward(), "c");
        assert_eq!(history.forward(), "");
        assert!(history.at_end());
    }

    #[test]
    fn test_back_at_start() {
        let mut history = History::new("");
        history.push_state("a");
        history.push_state("b");
        for _ in 0..5 {
            history.back();
        }
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.state(), "a");
        history.back();
        assert_eq!(history.state(), "a");
    }

    #[test]
    fn test_forward_at_end() {
        let mut history = History::new("partial");
        assert_eq!(history.forward(), "partial");
        assert_eq!(history.forward(), "partial");
        assert_eq!(history.cursor(), 0);

        history.push_state("a");
        assert_eq!(history.forward(), "");
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_draft_round_trip() {
        let mut history = History::new("");
        history.push_state("a");
        history.push_state("b");

        // what a prompt does on the first ArrowUp with unsaved text
        history.push_state("unsaved");
        history.back();
        history.back();
        assert_eq!(history.state(), "b");
        history.back();
        assert_eq!(history.state(), "a");

        history.forward();
        assert_eq!(history.forward(), "unsaved");
    }

    proptest! {
        #[test]
        fn prop_push_state_appends(values in prop::collection::vec(".*", 0..20)) {
            let mut history = History::new("seed");
            for (i, value) in values.iter().enumerate() {
                history.push_state(value.clone());
                prop_assert_eq!(history.len(), i + 1);
                prop_assert_eq!(history.cursor(), history.len());
                prop_assert!(history.at_end());
                prop_assert_eq!(history.state(), "");
            }
            prop_assert_eq!(history.entries(), values.as_slice());
        }

        #[test]
        fn prop_cursor_in_bounds(
            values in prop::collection::vec("[a-z]{0,4}", 0..8),
            moves in prop::collection::vec(any::<bool>(), 0..40),
        ) {
            let mut history = History::new("");
            for value in values {
                history.push_state(value);
            }
            for back in moves {
                if back {
                    history.back();
                } else {
                    history.forward();
                }
                prop_assert!(history.cursor() <= history.len());
                prop_assert_eq!(history.at_end(), history.cursor() == history.len());
            }
        }
    }
}
