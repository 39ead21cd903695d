use super::*;

impl ConsoleApp {
    pub(super) fn new(
        service: Arc<dyn RepoService>,
        audit: AuditLog,
        log_buffer: LogBuffer,
        start: StartOptions,
    ) -> Self {
        Self {
            service,
            audit,
            log_buffer,
            view: View::Main,
            menu_index: 0,
            message: String::new(),
            message_return_view: View::Main,
            repos: Vec::new(),
            repos_loading: false,
            repos_rx: None,
            virtual_config: start.virtual_repo,
            editor: None,
            editor_cursor: 0,
            save_rx: None,
        }
    }

    pub(super) fn startup(&mut self) {
        if self.virtual_config.is_some() {
            self.enter_virtual_view();
        }
    }

    pub(super) fn enter_repos_view(&mut self) {
        info!("Entered repo list view");
        self.view = View::Repos;
        if self.repos.is_empty() {
            self.start_repo_fetch();
        }
    }

    /// Builds a fresh editor from the seed config. The repo list is fetched
    /// once per editor; re-entering the view starts over, like a page
    /// reload did in the old web console.
    pub(super) fn enter_virtual_view(&mut self) {
        let Some(config) = self.virtual_config.clone() else {
            self.show_message(
                "No virtual repository selected. Start with --virtual-repo <name> --current <target>."
                    .to_string(),
            );
            return;
        };
        info!(name = %config.name, "Entered virtual repo editor");
        let mut editor = VirtualTargetEditor::new(config);
        if editor.needs_repo_fetch() && !self.repos.is_empty() {
            // Another view already fetched the list during this session.
            editor.attach_repos(self.repos.clone());
        }
        let fetch = editor.needs_repo_fetch();
        self.editor = Some(editor);
        self.editor_cursor = 0;
        self.view = View::VirtualRepo;
        if fetch {
            self.start_repo_fetch();
        }
    }

    /// Drops the editor and its repo snapshot.
    pub(super) fn leave_virtual_view(&mut self) {
        self.editor = None;
        self.view = View::Main;
    }

    pub(super) fn show_message(&mut self, message: String) {
        if self.view != View::Message {
            self.message_return_view = self.view;
        }
        self.message = message;
        self.view = View::Message;
    }
}
