//! Dashboard state and event handling
//!
//! All rendering reads from `App`; all key and async events mutate it here.
//! The chat widget lives in an `Option` so that closing it drops its state,
//! which is what resets the conversation to the seeded greeting on reopen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use glance_common::{AnalysisReport, ChatLog, Config, ThemeMode, CANNED_REPLY};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Async events delivered to the event loop
#[derive(Debug)]
pub enum AppEvent {
    AssistantReply(String),
}

/// Floating chat widget state; dropped on close
pub struct ChatWidget {
    pub log: ChatLog,
    pub input: String,
    pub awaiting_reply: bool,
    reply_task: Option<JoinHandle<()>>,
}

impl ChatWidget {
    fn new() -> Self {
        Self {
            log: ChatLog::new(),
            input: String::new(),
            awaiting_reply: false,
            reply_task: None,
        }
    }
}

/// Central dashboard state
pub struct App {
    pub report: AnalysisReport,
    pub theme: ThemeMode,
    pub chat: Option<ChatWidget>,
    pub selected_feature: usize,
    pub show_help: bool,
    pub status_line: Option<String>,
    pub should_quit: bool,
    config: Config,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(report: AnalysisReport, config: Config, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            report,
            theme: config.theme,
            chat: None,
            selected_feature: 0,
            show_help: false,
            status_line: None,
            should_quit: false,
            config,
            events,
        }
    }

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }

    pub fn toggle_chat(&mut self) {
        if self.chat.is_some() {
            self.close_chat();
        } else {
            self.chat = Some(ChatWidget::new());
        }
    }

    /// Close the chat and cancel any pending reply timer
    pub fn close_chat(&mut self) {
        if let Some(chat) = self.chat.take() {
            if let Some(task) = chat.reply_task {
                task.abort();
                tracing::debug!("pending assistant reply cancelled on chat close");
            }
        }
    }

    /// Send the chat input buffer. Trimmed-empty input is a silent no-op;
    /// otherwise the user message is appended, the input clears, and the
    /// canned assistant reply is scheduled after the configured delay.
    pub fn send_chat_message(&mut self) {
        let delay = Duration::from_millis(self.config.reply_delay_ms);
        let events = self.events.clone();

        let Some(chat) = self.chat.as_mut() else {
            return;
        };
        let text = chat.input.clone();
        if !chat.log.push_user(&text) {
            return;
        }
        chat.input.clear();
        chat.awaiting_reply = true;

        chat.reply_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(AppEvent::AssistantReply(CANNED_REPLY.to_string()));
        }));
    }

    /// Apply an async event. Assistant replies that arrive after the chat
    /// closed are dropped; the log they were aimed at no longer exists.
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AssistantReply(text) => {
                if let Some(chat) = self.chat.as_mut() {
                    chat.log.push_assistant(text);
                    chat.awaiting_reply = false;
                    chat.reply_task = None;
                } else {
                    tracing::debug!("assistant reply arrived after chat close, dropped");
                }
            }
        }
    }

    /// Serialize the report and write it into the configured export dir
    pub fn export_report(&mut self) {
        let dir = self.config.export_dir();
        match self.report.write_to(&dir) {
            Ok(path) => {
                self.status_line = Some(format!("report written to {}", path.display()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "report export failed");
                self.status_line = Some(format!("export failed: {e}"));
            }
        }
    }

    pub fn select_next_feature(&mut self) {
        if !self.report.features.is_empty() {
            self.selected_feature =
                (self.selected_feature + 1).min(self.report.features.len() - 1);
        }
    }

    pub fn select_prev_feature(&mut self) {
        self.selected_feature = self.selected_feature.saturating_sub(1);
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        if self.chat.is_some() {
            self.handle_chat_key(key);
        } else {
            self.handle_dashboard_key(key);
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_chat(),
            KeyCode::Enter => self.send_chat_message(),
            KeyCode::Backspace => {
                if let Some(chat) = self.chat.as_mut() {
                    chat.input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(chat) = self.chat.as_mut() {
                    chat.input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('c') => self.toggle_chat(),
            KeyCode::Char('e') => self.export_report(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Down | KeyCode::Char('j') => self.select_next_feature(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev_feature(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glance_common::GREETING;

    fn test_app(reply_delay_ms: u64) -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = Config {
            reply_delay_ms,
            export_dir: None,
            ..Config::default()
        };
        (App::new(AnalysisReport::sample(), config, tx), rx)
    }

    #[test]
    fn test_toggle_theme_twice_restores_original() {
        let (mut app, _rx) = test_app(1000);
        let original = app.theme;
        app.toggle_theme();
        assert_ne!(app.theme, original);
        app.toggle_theme();
        assert_eq!(app.theme, original);
    }

    #[test]
    fn test_reopened_chat_resets_to_greeting() {
        let (mut app, _rx) = test_app(1000);
        app.toggle_chat();
        app.chat.as_mut().unwrap().log.push_user("hello");
        assert_eq!(app.chat.as_ref().unwrap().log.len(), 2);

        app.toggle_chat(); // close
        assert!(app.chat.is_none());

        app.toggle_chat(); // reopen
        let log = &app.chat.as_ref().unwrap().log;
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].text, GREETING);
    }

    #[tokio::test]
    async fn test_send_schedules_canned_reply() {
        let (mut app, mut rx) = test_app(10);
        app.toggle_chat();
        app.chat.as_mut().unwrap().input = "hello".to_string();
        app.send_chat_message();

        {
            let chat = app.chat.as_ref().unwrap();
            assert!(chat.awaiting_reply);
            assert!(chat.input.is_empty());
            assert_eq!(chat.log.len(), 2);
            assert_eq!(chat.log.messages()[1].text, "hello");
            assert!(!chat.log.messages()[1].is_ai);
        }

        let event = rx.recv().await.expect("reply event");
        app.apply_event(event);

        let chat = app.chat.as_ref().unwrap();
        assert!(!chat.awaiting_reply);
        assert_eq!(chat.log.len(), 3);
        let last = chat.log.messages().last().unwrap();
        assert!(last.is_ai);
        assert_eq!(last.text, CANNED_REPLY);
    }

    #[tokio::test]
    async fn test_empty_send_is_a_noop() {
        let (mut app, mut rx) = test_app(10);
        app.toggle_chat();
        app.chat.as_mut().unwrap().input = "   ".to_string();
        app.send_chat_message();

        let chat = app.chat.as_ref().unwrap();
        assert_eq!(chat.log.len(), 1);
        assert!(!chat.awaiting_reply);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_close_cancels_pending_reply() {
        let (mut app, mut rx) = test_app(20);
        app.toggle_chat();
        app.chat.as_mut().unwrap().input = "hello".to_string();
        app.send_chat_message();

        app.close_chat();

        // Well past the delay: the aborted task must not have delivered
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_late_reply_after_close_is_dropped() {
        let (mut app, _rx) = test_app(10);
        app.toggle_chat();
        app.close_chat();

        // A reply that raced past the abort must not panic or resurrect state
        app.apply_event(AppEvent::AssistantReply(CANNED_REPLY.to_string()));
        assert!(app.chat.is_none());
    }

    #[test]
    fn test_feature_selection_stays_in_bounds() {
        let (mut app, _rx) = test_app(1000);
        app.select_prev_feature();
        assert_eq!(app.selected_feature, 0);

        for _ in 0..10 {
            app.select_next_feature();
        }
        assert_eq!(app.selected_feature, app.report.features.len() - 1);
    }

    #[test]
    fn test_export_writes_into_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, _rx) = mpsc::unbounded_channel();
        let config = Config {
            export_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let mut app = App::new(AnalysisReport::sample(), config, tx);

        app.export_report();

        let expected = dir.path().join(app.report.export_filename());
        assert!(expected.exists());
        assert!(app
            .status_line
            .as_deref()
            .unwrap()
            .starts_with("report written to "));
    }

    #[test]
    fn test_dashboard_keys() {
        let (mut app, _rx) = test_app(1000);

        app.handle_key(KeyEvent::from(KeyCode::Char('t')));
        assert_eq!(app.theme, ThemeMode::Dark);

        app.handle_key(KeyEvent::from(KeyCode::Char('c')));
        assert!(app.chat.is_some());

        // 'q' goes into the chat input while the chat is open
        app.handle_key(KeyEvent::from(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.chat.as_ref().unwrap().input, "q");

        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(app.chat.is_none());

        app.handle_key(KeyEvent::from(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
