use super::*;

impl ConsoleApp {
    pub(super) fn start_repo_fetch(&mut self) {
        if self.repos_loading {
            debug!("Repo fetch already running");
            return;
        }
        info!("Fetching static repo list");
        let (tx, rx) = mpsc::channel();
        self.repos_rx = Some(rx);
        self.repos_loading = true;
        let service = Arc::clone(&self.service);
        thread::spawn(move || {
            let result =
                rt::block_on(service.list_static_repos()).map_err(|err| err.to_string());
            let _ = tx.send(result);
        });
    }

    pub(super) fn start_virtual_save(&mut self) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        let Some(target) = editor.begin_save() else {
            warn!("Save already in flight");
            return;
        };
        let name = editor.name().to_string();
        let destination = target.wire_value();
        info!(name = %name, destination = %destination, "Saving virtual repo target");
        let (tx, rx) = mpsc::channel();
        self.save_rx = Some(rx);
        let service = Arc::clone(&self.service);
        thread::spawn(move || {
            let result = rt::block_on(service.save_virtual_repo(&name, &destination))
                .map_err(|err| err.to_string());
            let _ = tx.send(result);
        });
    }

    pub(super) fn poll_repo_events(&mut self) {
        let Some(rx) = &self.repos_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.repos_rx = None;
                self.repos_loading = false;
                match result {
                    Ok(repos) => {
                        info!(count = repos.len(), "Static repo list loaded");
                        if let Some(editor) = self.editor.as_mut() {
                            editor.attach_repos(repos.clone());
                        }
                        self.repos = repos;
                    }
                    Err(err) => {
                        warn!(error = %err, "Static repo list fetch failed");
                        self.show_message(err);
                    }
                }
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.repos_rx = None;
                self.repos_loading = false;
            }
        }
    }

    pub(super) fn poll_save_events(&mut self) {
        let Some(rx) = &self.save_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.save_rx = None;
                let repo = self.editor.as_ref().map(|editor| editor.name().to_string());
                match result {
                    Ok(()) => {
                        info!("Virtual repo target saved");
                        let _ = self.audit.record(
                            "virtual.save",
                            repo.as_deref(),
                            AuditOutcome::Ok,
                            None,
                        );
                        if let Some(editor) = self.editor.as_mut() {
                            editor.save_succeeded();
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "Virtual repo save failed");
                        let _ = self.audit.record(
                            "virtual.save",
                            repo.as_deref(),
                            AuditOutcome::Failed,
                            Some(&err),
                        );
                        if let Some(editor) = self.editor.as_mut() {
                            editor.save_failed();
                        }
                        self.show_message(err);
                    }
                }
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.save_rx = None;
                if let Some(editor) = self.editor.as_mut() {
                    editor.save_failed();
                }
            }
        }
    }
}
