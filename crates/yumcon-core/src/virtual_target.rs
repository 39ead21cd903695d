use crate::model::{RepoTarget, STATIC_TARGET_PREFIX, StaticRepoSummary, VirtualRepoConfig};

/// One selectable entry in the internal-target selector.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TargetOption {
    pub label: String,
    pub value: String,
    pub selected: bool,
    /// True for the synthetic entry kept for a saved target that no longer
    /// appears in the fetched repo list.
    pub missing: bool,
}

impl TargetOption {
    /// Plain repo name behind this option's `static/<name>` value.
    pub fn repo_name(&self) -> &str {
        self.value
            .strip_prefix(STATIC_TARGET_PREFIX)
            .unwrap_or(&self.value)
    }
}

/// View-model for editing where a virtual repository redirects to.
///
/// Selection state lives here, not in the rendered widgets; the UI is a
/// projection of this struct. An editor is created when the virtual-repo
/// view is entered and dropped when it is left, taking its repo snapshot
/// with it.
pub struct VirtualTargetEditor {
    name: String,
    repos: Option<Vec<StaticRepoSummary>>,
    external: bool,
    internal_target: String,
    external_url: String,
    dirty: bool,
    saving: bool,
}

impl VirtualTargetEditor {
    pub fn new(config: VirtualRepoConfig) -> Self {
        let (external, internal_target, external_url) = if config.external {
            (true, String::new(), config.target)
        } else {
            (false, config.target, String::new())
        };
        Self {
            name: config.name,
            repos: None,
            external,
            internal_target,
            external_url,
            dirty: false,
            saving: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn needs_repo_fetch(&self) -> bool {
        self.repos.is_none()
    }

    pub fn repos_loaded(&self) -> bool {
        self.repos.is_some()
    }

    /// Records the fetched repo snapshot. The list is fetched at most once
    /// per editor lifetime; later calls are ignored.
    pub fn attach_repos(&mut self, repos: Vec<StaticRepoSummary>) {
        if self.repos.is_none() {
            self.repos = Some(repos);
        }
    }

    /// Options for the internal-target selector. Every known static repo
    /// becomes one option valued `static/<name>`. If none of them matches
    /// the current target by exact name, a synthetic
    /// `<target> (not existing)` option is appended and selected, so the
    /// saved target stays selectable. Empty until the snapshot arrives.
    pub fn target_options(&self) -> Vec<TargetOption> {
        let Some(repos) = &self.repos else {
            return Vec::new();
        };
        let mut options = Vec::with_capacity(repos.len() + 1);
        let mut current_in_list = false;
        for repo in repos {
            let selected = repo.name == self.internal_target;
            if selected {
                current_in_list = true;
            }
            options.push(TargetOption {
                label: repo.name.clone(),
                value: format!("{STATIC_TARGET_PREFIX}{}", repo.name),
                selected,
                missing: false,
            });
        }
        if !current_in_list {
            options.push(TargetOption {
                label: format!("{} (not existing)", self.internal_target),
                value: format!("{STATIC_TARGET_PREFIX}{}", self.internal_target),
                selected: true,
                missing: true,
            });
        }
        options
    }

    pub fn is_external(&self) -> bool {
        self.external
    }

    /// Any toggle counts as an unsaved change, even back to the saved mode.
    pub fn set_external(&mut self, external: bool) {
        self.external = external;
        self.dirty = true;
    }

    pub fn internal_target(&self) -> &str {
        &self.internal_target
    }

    pub fn select_internal(&mut self, name: &str) {
        self.internal_target = name.to_string();
        self.dirty = true;
    }

    pub fn external_url(&self) -> &str {
        &self.external_url
    }

    pub fn set_external_url(&mut self, url: &str) {
        self.external_url = url.to_string();
        self.dirty = true;
    }

    pub fn push_url_char(&mut self, ch: char) {
        self.external_url.push(ch);
        self.dirty = true;
    }

    pub fn pop_url_char(&mut self) {
        self.external_url.pop();
        self.dirty = true;
    }

    pub fn save_visible(&self) -> bool {
        self.dirty && !self.saving
    }

    pub fn spinner_visible(&self) -> bool {
        self.saving
    }

    /// Destination that would be persisted for the current selection.
    pub fn chosen_target(&self) -> RepoTarget {
        if self.external {
            RepoTarget::External(self.external_url.clone())
        } else {
            RepoTarget::Static(self.internal_target.clone())
        }
    }

    /// Starts a save: hides the save action, shows the spinner, and hands
    /// back the destination to submit. Returns `None` while a save is
    /// already in flight.
    pub fn begin_save(&mut self) -> Option<RepoTarget> {
        if self.saving {
            return None;
        }
        self.saving = true;
        Some(self.chosen_target())
    }

    pub fn save_succeeded(&mut self) {
        self.saving = false;
        self.dirty = false;
    }

    /// The failed edit stays pending so the save action reappears.
    pub fn save_failed(&mut self) {
        self.saving = false;
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(names: &[&str]) -> Vec<StaticRepoSummary> {
        names
            .iter()
            .map(|name| StaticRepoSummary {
                name: name.to_string(),
            })
            .collect()
    }

    fn editor_with(target: &str, repos: &[&str]) -> VirtualTargetEditor {
        let mut editor = VirtualTargetEditor::new(VirtualRepoConfig {
            name: "virt".to_string(),
            external: false,
            target: target.to_string(),
        });
        editor.attach_repos(summaries(repos));
        editor
    }

    #[test]
    fn current_target_in_list_selects_real_option() {
        let editor = editor_with("centos7", &["centos7", "centos8"]);
        let options = editor.target_options();
        assert_eq!(options.len(), 2);
        assert!(options[0].selected);
        assert_eq!(options[0].value, "static/centos7");
        assert!(!options[1].selected);
        assert!(options.iter().all(|option| !option.missing));
    }

    #[test]
    fn missing_target_gets_synthetic_selected_option() {
        let editor = editor_with("centos7", &["centos8"]);
        let options = editor.target_options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "centos8");
        assert!(!options[0].selected);
        assert_eq!(options[1].label, "centos7 (not existing)");
        assert_eq!(options[1].value, "static/centos7");
        assert!(options[1].selected);
        assert!(options[1].missing);
        assert_eq!(options[1].repo_name(), "centos7");
    }

    #[test]
    fn exactly_one_option_is_always_selected() {
        for (target, repos) in [
            ("centos7", vec!["centos7", "centos8"]),
            ("centos7", vec!["centos8"]),
            ("centos7", vec![]),
        ] {
            let editor = editor_with(target, &repos);
            let options = editor.target_options();
            let selected: Vec<_> = options.iter().filter(|option| option.selected).collect();
            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].value, format!("static/{target}"));
        }
    }

    #[test]
    fn options_are_empty_before_snapshot_arrives() {
        let editor = VirtualTargetEditor::new(VirtualRepoConfig {
            name: "virt".to_string(),
            external: false,
            target: "centos7".to_string(),
        });
        assert!(editor.needs_repo_fetch());
        assert!(editor.target_options().is_empty());
    }

    #[test]
    fn repo_snapshot_is_written_once() {
        let mut editor = editor_with("centos7", &["centos7"]);
        assert!(!editor.needs_repo_fetch());
        editor.attach_repos(summaries(&["other"]));
        assert_eq!(editor.target_options()[0].label, "centos7");
    }

    #[test]
    fn toggling_external_reveals_save_and_flips_mode() {
        let mut editor = editor_with("centos7", &["centos7"]);
        assert!(!editor.save_visible());
        editor.set_external(true);
        assert!(editor.is_external());
        assert!(editor.save_visible());
        editor.set_external(false);
        assert!(!editor.is_external());
        assert!(editor.save_visible());
    }

    #[test]
    fn chosen_target_follows_the_active_mode() {
        let mut editor = editor_with("centos7", &["centos7"]);
        assert_eq!(
            editor.chosen_target(),
            RepoTarget::Static("centos7".to_string())
        );
        editor.set_external(true);
        editor.set_external_url("http://mirror.example/repo");
        assert_eq!(
            editor.chosen_target().wire_value(),
            "http://mirror.example/repo"
        );
    }

    #[test]
    fn save_lifecycle_guards_against_double_submit() {
        let mut editor = editor_with("centos7", &["centos7"]);
        editor.select_internal("centos8");
        assert!(editor.save_visible());

        let target = editor.begin_save().unwrap();
        assert_eq!(target.wire_value(), "static/centos8");
        assert!(editor.spinner_visible());
        assert!(!editor.save_visible());
        assert!(editor.begin_save().is_none());

        editor.save_failed();
        assert!(!editor.spinner_visible());
        assert!(editor.save_visible());

        editor.begin_save().unwrap();
        editor.save_succeeded();
        assert!(!editor.spinner_visible());
        assert!(!editor.save_visible());
    }

    #[test]
    fn editor_created_from_external_config_starts_in_url_mode() {
        let editor = VirtualTargetEditor::new(VirtualRepoConfig {
            name: "virt".to_string(),
            external: true,
            target: "http://mirror.example/repo".to_string(),
        });
        assert!(editor.is_external());
        assert_eq!(editor.external_url(), "http://mirror.example/repo");
        assert_eq!(editor.internal_target(), "");
    }
}
