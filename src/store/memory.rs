use super::ProfileStore;
use crate::error::Result;
use crate::model::Profile;

/// In-memory profile storage for tests. No persistence across instances.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    profile: Option<Profile>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start pre-populated, as if a previous run had committed `profile`.
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile: Some(profile),
        }
    }
}

impl ProfileStore for InMemoryStore {
    fn load(&self) -> Result<Option<Profile>> {
        Ok(self.profile.clone())
    }

    fn save(&mut self, profile: &Profile) -> Result<()> {
        self.profile = Some(profile.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::FolioError;

    /// A store whose loads succeed but whose saves always fail. Used to
    /// verify that commit and import leave engine state untouched on
    /// persistence failure.
    #[derive(Debug, Default)]
    pub struct FailingStore {
        profile: Option<Profile>,
    }

    impl FailingStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_profile(profile: Profile) -> Self {
            Self {
                profile: Some(profile),
            }
        }
    }

    impl ProfileStore for FailingStore {
        fn load(&self) -> Result<Option<Profile>> {
            Ok(self.profile.clone())
        }

        fn save(&mut self, _profile: &Profile) -> Result<()> {
            Err(FolioError::Store("save failed".to_string()))
        }
    }

    /// A store whose loads fail, simulating corrupt or unreadable storage.
    #[derive(Debug, Default)]
    pub struct CorruptStore;

    impl ProfileStore for CorruptStore {
        fn load(&self) -> Result<Option<Profile>> {
            Err(FolioError::Store("corrupt storage".to_string()))
        }

        fn save(&mut self, _profile: &Profile) -> Result<()> {
            Ok(())
        }
    }
}
