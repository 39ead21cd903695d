use super::*;

impl ConsoleApp {
    pub(super) fn draw(&mut self, frame: &mut ratatui::Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(LOG_PANEL_HEIGHT),
                Constraint::Length(3),
            ])
            .split(frame.size());

        let header = Paragraph::new("Yum Repository Console")
            .block(Block::default().borders(Borders::ALL).title("Header"));
        frame.render_widget(header, layout[0]);

        match self.view {
            View::Main => self.draw_main(frame, layout[1]),
            View::Repos => self.draw_repos(frame, layout[1]),
            View::VirtualRepo => self.draw_virtual(frame, layout[1]),
            View::Message => self.draw_message(frame, layout[1]),
        }

        self.draw_log_panel(frame, layout[2]);

        let footer = Paragraph::new(self.footer_text())
            .block(Block::default().borders(Borders::ALL).title("Help"));
        frame.render_widget(footer, layout[3]);
    }

    fn draw_main(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        let items: Vec<ListItem> = MAIN_MENU
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let item = ListItem::new(*label);
                if index == self.menu_index {
                    item.style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    item
                }
            })
            .collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Menu"));
        frame.render_widget(list, area);
    }

    fn draw_repos(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        let items: Vec<ListItem> = if self.repos_loading {
            vec![ListItem::new("Loading repositories...")]
        } else if self.repos.is_empty() {
            vec![ListItem::new("No static repositories.")]
        } else {
            self.repos
                .iter()
                .map(|repo| ListItem::new(repo.name.clone()))
                .collect()
        };
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Static repositories"),
        );
        frame.render_widget(list, area);
    }

    fn draw_virtual(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        let lines: Vec<Line> = self
            .virtual_view_lines()
            .into_iter()
            .map(Line::from)
            .collect();
        let title = self
            .editor
            .as_ref()
            .map(|editor| format!("Virtual repository: {}", editor.name()))
            .unwrap_or_else(|| "Virtual repository".to_string());
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    /// Pure projection of the editor state; also exercised by tests.
    pub(super) fn virtual_view_lines(&self) -> Vec<String> {
        let Some(editor) = self.editor.as_ref() else {
            return vec!["No virtual repository selected.".to_string()];
        };
        let mut lines = Vec::new();
        if editor.is_external() {
            lines.push("Mode: external URL".to_string());
            lines.push(format!("URL: {}_", editor.external_url()));
        } else {
            lines.push("Mode: internal repository".to_string());
            if !editor.repos_loaded() {
                lines.push("Loading repositories...".to_string());
            } else {
                for (index, option) in editor.target_options().iter().enumerate() {
                    let cursor = if index == self.editor_cursor { '>' } else { ' ' };
                    let selected = if option.selected { '*' } else { ' ' };
                    lines.push(format!("{cursor}{selected} {}", option.label));
                }
            }
        }
        lines.push(String::new());
        if editor.spinner_visible() {
            lines.push("Saving...".to_string());
        } else if editor.save_visible() {
            lines.push("[Ctrl+S] Save".to_string());
        } else {
            lines.push("Saved".to_string());
        }
        lines
    }

    fn draw_message(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        let paragraph = Paragraph::new(self.message.clone())
            .block(Block::default().borders(Borders::ALL).title("Message"))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn draw_log_panel(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        let lines: Vec<Line> = self
            .log_buffer
            .tail(LOG_PANEL_HEIGHT.saturating_sub(2) as usize)
            .into_iter()
            .map(|entry| Line::from(entry.format_line()))
            .collect();
        let paragraph =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log"));
        frame.render_widget(paragraph, area);
    }

    pub(super) fn footer_text(&self) -> String {
        match self.view {
            View::Main => "Up/Down: navigate | Enter: open | q: quit".to_string(),
            View::Repos => "r: refresh | Esc: back".to_string(),
            View::VirtualRepo => {
                "Tab: internal/external | Up/Down: choose | Enter: select | Ctrl+S: save | Esc: back"
                    .to_string()
            }
            View::Message => "Enter/Esc: back".to_string(),
        }
    }
}
