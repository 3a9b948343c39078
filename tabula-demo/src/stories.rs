//! Story registration for inventory-based discovery.

mod data_table;
mod input_field;

use tabula::style::Theme;

use crate::output::StyledLine;

/// Story registration entry for inventory.
pub struct StoryRegistration {
    /// Component the story belongs to.
    pub component: &'static str,
    /// Story name, unique within its component.
    pub name: &'static str,
    /// Renders the story for a theme.
    pub render: fn(Theme) -> Vec<StyledLine>,
    /// Theme the story always uses, regardless of `--dark`.
    pub theme: Option<Theme>,
}

impl StoryRegistration {
    pub const fn new(
        component: &'static str,
        name: &'static str,
        render: fn(Theme) -> Vec<StyledLine>,
    ) -> Self {
        Self {
            component,
            name,
            render,
            theme: None,
        }
    }

    /// Pin the story to `theme`.
    pub const fn themed(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Theme the story renders in when `requested` is asked for.
    pub fn theme_for(&self, requested: Theme) -> Theme {
        self.theme.unwrap_or(requested)
    }

    /// `Component/Name`, as accepted on the command line.
    pub fn path(&self) -> String {
        format!("{}/{}", self.component, self.name)
    }

    /// Whether `query` names this story, either by path or by bare name.
    pub fn matches(&self, query: &str) -> bool {
        self.path().eq_ignore_ascii_case(query) || self.name.eq_ignore_ascii_case(query)
    }
}

inventory::collect!(StoryRegistration);

/// All registered stories, sorted by path.
pub fn registered_stories() -> Vec<&'static StoryRegistration> {
    let mut stories: Vec<_> = inventory::iter::<StoryRegistration>().collect();
    stories.sort_by_key(|s| s.path());
    stories
}

/// Find the first story matching `query`.
pub fn find_story(query: &str) -> Option<&'static StoryRegistration> {
    registered_stories().into_iter().find(|s| s.matches(query))
}
