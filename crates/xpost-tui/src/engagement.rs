//! Local-only engagement counters for the action toolbar

/// Counters for one post. Nothing is sent anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    pub comments: u32,
    pub reposts: u32,
    pub likes: u32,
    pub bookmarks: u32,
    pub liked: bool,
}

impl Default for Engagement {
    fn default() -> Self {
        Self {
            comments: 3,
            reposts: 1,
            likes: 12,
            bookmarks: 0,
            liked: false,
        }
    }
}

/// Toolbar buttons in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Comment,
    Repost,
    Like,
    Bookmark,
    Share,
}

impl Engagement {
    /// Apply a toolbar press. Returns the status message to flash, if any;
    /// liking is silent.
    pub fn apply(&mut self, action: ToolbarAction) -> Option<&'static str> {
        match action {
            ToolbarAction::Comment => {
                self.comments += 1;
                Some("Opening comments...")
            }
            ToolbarAction::Repost => {
                self.reposts += 1;
                Some("Reposted!")
            }
            ToolbarAction::Like => {
                self.liked = !self.liked;
                if self.liked {
                    self.likes += 1;
                } else {
                    self.likes = self.likes.saturating_sub(1);
                }
                None
            }
            ToolbarAction::Bookmark => {
                self.bookmarks += 1;
                Some("Post bookmarked!")
            }
            ToolbarAction::Share => Some("Share menu opened"),
        }
    }

    /// Counter shown next to a button. Zero counts and share show nothing.
    pub fn count(&self, action: ToolbarAction) -> Option<u32> {
        let count = match action {
            ToolbarAction::Comment => self.comments,
            ToolbarAction::Repost => self.reposts,
            ToolbarAction::Like => self.likes,
            ToolbarAction::Bookmark => self.bookmarks,
            ToolbarAction::Share => return None,
        };
        (count > 0).then_some(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_counters() {
        let e = Engagement::default();
        assert_eq!((e.comments, e.reposts, e.likes, e.bookmarks), (3, 1, 12, 0));
        assert!(!e.liked);
    }

    #[test]
    fn test_like_toggles() {
        let mut e = Engagement::default();
        assert_eq!(e.apply(ToolbarAction::Like), None);
        assert_eq!(e.likes, 13);
        assert!(e.liked);
        assert_eq!(e.apply(ToolbarAction::Like), None);
        assert_eq!(e.likes, 12);
        assert!(!e.liked);
    }

    #[test]
    fn test_counters_increment() {
        let mut e = Engagement::default();
        assert_eq!(e.apply(ToolbarAction::Comment), Some("Opening comments..."));
        assert_eq!(e.apply(ToolbarAction::Repost), Some("Reposted!"));
        e.apply(ToolbarAction::Bookmark);
        e.apply(ToolbarAction::Bookmark);
        assert_eq!((e.comments, e.reposts, e.bookmarks), (4, 2, 2));
    }

    #[test]
    fn test_share_changes_nothing() {
        let mut e = Engagement::default();
        assert_eq!(e.apply(ToolbarAction::Share), Some("Share menu opened"));
        assert_eq!(e, Engagement::default());
    }

    #[test]
    fn test_zero_counts_are_hidden() {
        let e = Engagement::default();
        assert_eq!(e.count(ToolbarAction::Bookmark), None);
        assert_eq!(e.count(ToolbarAction::Like), Some(12));
        assert_eq!(e.count(ToolbarAction::Share), None);
    }
}
