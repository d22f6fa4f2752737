use crate::models::platform::Platform;
use crate::{Result, SharedError};
use log::debug;
use std::collections::BTreeSet;

/// Result of a successful platform toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformToggle {
    Selected,
    Deselected,
}

/// Platforms the user is currently viewing. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSelection {
    selected: BTreeSet<Platform>,
}

impl Default for PlatformSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl PlatformSelection {
    pub fn all() -> Self {
        Self {
            selected: Platform::ALL.into_iter().collect(),
        }
    }

    pub fn only(platform: Platform) -> Self {
        Self {
            selected: BTreeSet::from([platform]),
        }
    }

    /// Builds a selection from an arbitrary list; an empty list falls back to all platforms.
    pub fn from_platforms<I: IntoIterator<Item = Platform>>(platforms: I) -> Self {
        let selected: BTreeSet<_> = platforms.into_iter().collect();
        if selected.is_empty() {
            Self::all()
        } else {
            Self { selected }
        }
    }

    /// Adds an unselected platform or removes a selected one.
    ///
    /// Removing the sole selected platform is refused with
    /// [`SharedError::MinimumOnePlatform`] and the selection is left as is.
    pub fn toggle(&mut self, platform: Platform) -> Result<PlatformToggle> {
        if !self.selected.contains(&platform) {
            self.selected.insert(platform);
            debug!("Platform {} selected ({} active)", platform, self.selected.len());
            return Ok(PlatformToggle::Selected);
        }
        if self.selected.len() == 1 {
            debug!("Refusing to deselect {}: last selected platform", platform);
            return Err(SharedError::MinimumOnePlatform(platform));
        }
        self.selected.remove(&platform);
        debug!("Platform {} deselected ({} active)", platform, self.selected.len());
        Ok(PlatformToggle::Deselected)
    }

    pub fn select_all(&mut self) {
        *self = Self::all();
    }

    pub fn contains(&self, platform: Platform) -> bool {
        self.selected.contains(&platform)
    }

    /// True when toggling `platform` would be refused, so its control can be disabled.
    pub fn is_locked(&self, platform: Platform) -> bool {
        self.selected.len() == 1 && self.selected.contains(&platform)
    }

    pub fn is_all(&self) -> bool {
        self.selected.len() == Platform::ALL.len()
    }

    /// Selected platforms in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = Platform> + '_ {
        self.selected.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_starts_with_everything_selected() {
        let selection = PlatformSelection::default();
        assert!(selection.is_all());
        assert_eq!(selection.iter().collect::<Vec<_>>(), Platform::ALL.to_vec());
    }

    #[rstest]
    #[case(Platform::Codeforces)]
    #[case(Platform::Codechef)]
    #[case(Platform::Leetcode)]
    fn test_sole_platform_cannot_be_deselected(#[case] platform: Platform) {
        let mut selection = PlatformSelection::only(platform);
        assert!(selection.is_locked(platform));
        assert_eq!(
            selection.toggle(platform),
            Err(SharedError::MinimumOnePlatform(platform))
        );
        assert_eq!(selection, PlatformSelection::only(platform));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_toggle_removes_then_adds() {
        let mut selection = PlatformSelection::all();
        assert_eq!(selection.toggle(Platform::Codechef), Ok(PlatformToggle::Deselected));
        assert!(!selection.contains(Platform::Codechef));
        assert!(!selection.is_locked(Platform::Codeforces));
        assert_eq!(selection.toggle(Platform::Codechef), Ok(PlatformToggle::Selected));
        assert!(selection.is_all());
    }

    #[test]
    fn test_draining_never_reaches_zero() {
        let mut selection = PlatformSelection::all();
        for _ in 0..3 {
            for platform in Platform::ALL {
                let _ = selection.toggle(platform);
                assert!(selection.len() >= 1);
            }
        }
    }

    #[test]
    fn test_select_all_is_idempotent() {
        let mut selection = PlatformSelection::only(Platform::Leetcode);
        selection.select_all();
        let once = selection.clone();
        selection.select_all();
        assert_eq!(selection, once);
        assert!(selection.is_all());
    }

    #[test]
    fn test_from_empty_list_falls_back_to_all() {
        assert!(PlatformSelection::from_platforms(Vec::new()).is_all());
        let two = PlatformSelection::from_platforms(vec![Platform::Leetcode, Platform::Codeforces]);
        assert_eq!(two.iter().collect::<Vec<_>>(), vec![Platform::Codeforces, Platform::Leetcode]);
    }
}
