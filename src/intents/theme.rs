/// Theme preference intents

use crate::domain::Theme;
use crate::intents::IntentResponse;
use crate::remote::HabitApi;
use crate::storage::LocalStore;
use crate::sync::SyncReport;
use crate::HabitTracker;

impl<L: LocalStore, R: HabitApi> HabitTracker<L, R> {
    /// Switch between light and dark
    pub async fn toggle_theme(&mut self) -> IntentResponse {
        let next = self.theme.toggled();
        self.set_theme(next).await
    }

    /// Apply a theme and persist it once the stored preference has been read
    pub async fn set_theme(&mut self, theme: Theme) -> IntentResponse {
        self.theme = theme;
        tracing::info!("Theme set to {}", theme.as_str());

        let sync = if self.theme_loaded {
            self.gateway.save_theme(theme).await
        } else {
            tracing::debug!("Theme not loaded yet, skipping save");
            SyncReport::default()
        };

        IntentResponse {
            message: format!("🎨 Theme is now {}", theme.as_str()),
            habit: None,
            sync,
        }
    }
}
