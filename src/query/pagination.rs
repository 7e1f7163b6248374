//! `$top` / `$skip` windowing

/// Result window
///
/// `$top` truncates first, then `$skip` drops from what remains. This is the
/// reverse of OData's skip-then-top: `top=2&skip=1` over IDs [1..5] yields
/// [2], not [2, 3].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    pub top: Option<usize>,
    pub skip: Option<usize>,
}

impl Window {
    pub fn new(top: Option<usize>, skip: Option<usize>) -> Self {
        Self { top, skip }
    }

    /// True when neither directive restricts the result
    pub fn is_unbounded(&self) -> bool {
        self.top.is_none() && self.skip.is_none()
    }

    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .take(self.top.unwrap_or(usize::MAX))
            .skip(self.skip.unwrap_or(0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_then_skip() {
        let window = Window::new(Some(2), Some(1));
        assert_eq!(window.apply(vec![1, 2, 3, 4, 5]), vec![2]);
    }

    #[test]
    fn test_top_only() {
        let window = Window::new(Some(3), None);
        assert_eq!(window.apply(vec![1, 2, 3, 4, 5]), vec![1, 2, 3]);
    }

    #[test]
    fn test_skip_only() {
        let window = Window::new(None, Some(3));
        assert_eq!(window.apply(vec![1, 2, 3, 4, 5]), vec![4, 5]);
    }

    #[test]
    fn test_skip_past_end_is_empty() {
        let window = Window::new(None, Some(10));
        assert!(window.apply(vec![1, 2, 3]).is_empty());

        let window = Window::new(Some(2), Some(2));
        assert!(window.apply(vec![1, 2, 3]).is_empty());
    }

    #[test]
    fn test_top_zero_is_empty() {
        let window = Window::new(Some(0), None);
        assert!(window.apply(vec![1, 2]).is_empty());
    }

    #[test]
    fn test_unbounded_passes_through() {
        let window = Window::default();
        assert!(window.is_unbounded());
        assert_eq!(window.apply(vec![1, 2, 3]), vec![1, 2, 3]);
    }
}
