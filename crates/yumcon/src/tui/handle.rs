use super::*;

impl ConsoleApp {
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }
        match self.view {
            View::Main => self.handle_main(key),
            View::Repos => self.handle_repos(key),
            View::VirtualRepo => self.handle_virtual(key),
            View::Message => self.handle_message(key),
        }
    }

    pub(super) fn handle_main(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Up => {
                self.menu_index = self
                    .menu_index
                    .checked_sub(1)
                    .unwrap_or(MAIN_MENU.len() - 1);
            }
            KeyCode::Down => {
                self.menu_index = (self.menu_index + 1) % MAIN_MENU.len();
            }
            KeyCode::Enter => match self.menu_index {
                0 => self.enter_repos_view(),
                1 => self.enter_virtual_view(),
                _ => return Ok(true),
            },
            _ => {}
        }
        Ok(false)
    }

    pub(super) fn handle_repos(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => self.view = View::Main,
            KeyCode::Char('r') => self.start_repo_fetch(),
            _ => {}
        }
        Ok(false)
    }

    pub(super) fn handle_virtual(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        if key.code == KeyCode::Esc {
            self.leave_virtual_view();
            return Ok(false);
        }
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let save_visible = self
                .editor
                .as_ref()
                .map(|editor| editor.save_visible())
                .unwrap_or(false);
            if save_visible {
                self.start_virtual_save();
            }
            return Ok(false);
        }
        if key.code == KeyCode::Tab {
            if let Some(editor) = self.editor.as_mut() {
                let external = editor.is_external();
                editor.set_external(!external);
            }
            return Ok(false);
        }

        let Some(editor) = self.editor.as_mut() else {
            return Ok(false);
        };
        if editor.is_external() {
            match key.code {
                KeyCode::Char(ch) => editor.push_url_char(ch),
                KeyCode::Backspace => editor.pop_url_char(),
                _ => {}
            }
        } else {
            let options = editor.target_options();
            match key.code {
                KeyCode::Up => {
                    self.editor_cursor = self
                        .editor_cursor
                        .checked_sub(1)
                        .unwrap_or(options.len().saturating_sub(1));
                }
                KeyCode::Down => {
                    if !options.is_empty() {
                        self.editor_cursor = (self.editor_cursor + 1) % options.len();
                    }
                }
                KeyCode::Enter => {
                    if let Some(option) = options.get(self.editor_cursor) {
                        editor.select_internal(option.repo_name());
                    }
                }
                _ => {}
            }
        }
        Ok(false)
    }

    pub(super) fn handle_message(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.view = self.message_return_view;
        }
        Ok(false)
    }
}
