//! Path label rendering with exit-equivalence collapsing

use crate::config::QueryConfig;

/// Renders a path as `Begin->A->B->C`.
///
/// Vertices in the same equivalence group are interchangeable exits joined by
/// zero-weight edges. A run of consecutive path vertices from one group is
/// printed as the first member reached only, so `...->O->S` renders as
/// `...->O`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLabeler {
    prefix: String,
    separator: String,
    groups: Vec<Vec<String>>,
}

impl PathLabeler {
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        PathLabeler {
            prefix: prefix.into(),
            separator: separator.into(),
            groups: Vec::new(),
        }
    }

    /// Add an equivalence group
    pub fn with_group<I, S>(mut self, group: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.push(group.into_iter().map(Into::into).collect());
        self
    }

    pub fn from_config(config: &QueryConfig) -> Self {
        PathLabeler {
            prefix: config.label_prefix.clone(),
            separator: config.separator.clone(),
            groups: config.exit_groups.clone(),
        }
    }

    fn group_of(&self, name: &str) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.iter().any(|member| member == name))
    }

    pub fn render<'n, I>(&self, names: I) -> String
    where
        I: IntoIterator<Item = &'n str>,
    {
        let mut label = self.prefix.clone();
        let mut previous_group = None;

        for name in names {
            let group = self.group_of(name);
            if group.is_some() && group == previous_group {
                continue;
            }
            previous_group = group;

            if !label.is_empty() {
                label.push_str(&self.separator);
            }
            label.push_str(name);
        }
        label
    }
}

impl Default for PathLabeler {
    fn default() -> Self {
        PathLabeler::from_config(&QueryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        let labeler = PathLabeler::default();
        assert_eq!(labeler.render(["A", "B", "C"]), "Begin->A->B->C");
    }

    #[test]
    fn test_collapse_trailing_exit_hop() {
        let labeler = PathLabeler::default().with_group(["S", "O"]);
        assert_eq!(labeler.render(["F", "O", "S"]), "Begin->F->O");
        assert_eq!(labeler.render(["R", "S", "O"]), "Begin->R->S");
        assert_eq!(labeler.render(["N", "S"]), "Begin->N->S");
    }

    #[test]
    fn test_groups_are_independent() {
        let labeler = PathLabeler::default()
            .with_group(["S", "O"])
            .with_group(["X1", "X2", "X3"]);
        assert_eq!(labeler.render(["A", "X2", "X3", "X1"]), "Begin->A->X2");
        assert_eq!(labeler.render(["O", "X1"]), "Begin->O->X1");
    }

    #[test]
    fn test_non_adjacent_members_kept() {
        let labeler = PathLabeler::default().with_group(["S", "O"]);
        assert_eq!(labeler.render(["S", "P", "O"]), "Begin->S->P->O");
    }

    #[test]
    fn test_empty_prefix() {
        let labeler = PathLabeler::new("", " > ");
        assert_eq!(labeler.render(["A", "B"]), "A > B");
    }
}
