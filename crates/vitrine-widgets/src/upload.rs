//! File upload list with a replaceable internationalization table.
//!
//! Every user-visible string the widget emits comes from an [`UploadI18n`]
//! table. The default table is English; a demo localizes the widget by
//! constructing a full replacement table and passing it at build time.
//! File sizes are formatted with the table's unit names and base, so a
//! locale can switch between `kB` and `kt` style units without touching
//! the widget.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use vitrine_core::command::Command;
use vitrine_core::component::Component;
use vitrine_core::theme::Theme;

/// A pair of strings chosen by whether one or many files are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plural {
    /// Used when at most one file is accepted.
    pub one: String,
    /// Used otherwise.
    pub many: String,
}

impl Plural {
    /// Convenience constructor.
    pub fn new(one: impl Into<String>, many: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            many: many.into(),
        }
    }
}

/// Strings for rejected files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorI18n {
    pub too_many_files: String,
    pub file_is_too_big: String,
    pub incorrect_file_type: String,
}

/// Strings shown while a file is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadingI18n {
    pub status: StatusI18n,
    pub remaining_time: RemainingTimeI18n,
    pub error: UploadingErrorI18n,
}

/// Transfer status labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusI18n {
    pub connecting: String,
    pub stalled: String,
    pub processing: String,
    pub held: String,
}

/// Remaining-time phrasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingTimeI18n {
    pub prefix: String,
    pub unknown: String,
}

/// Transfer failure labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadingErrorI18n {
    pub server_unavailable: String,
    pub unexpected_server_error: String,
    pub forbidden: String,
}

/// Size unit names and the base they advance by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitsI18n {
    /// Unit names from bytes upward.
    pub size: Vec<String>,
    /// Factor between consecutive units.
    pub size_base: u64,
}

/// The full string table for the [`Upload`] widget.
///
/// The [`Default`] table is English. Localizing means building a complete
/// replacement; there is no per-key fallback, a partial table is simply a
/// table with some English strings left in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadI18n {
    pub drop_files: Plural,
    pub add_files: Plural,
    pub error: ErrorI18n,
    pub uploading: UploadingI18n,
    pub units: UnitsI18n,
}

impl Default for UploadI18n {
    fn default() -> Self {
        Self {
            drop_files: Plural::new("Drop file here", "Drop files here"),
            add_files: Plural::new("Upload File...", "Upload Files..."),
            error: ErrorI18n {
                too_many_files: "Too Many Files.".to_string(),
                file_is_too_big: "File is Too Big.".to_string(),
                incorrect_file_type: "Incorrect File Type.".to_string(),
            },
            uploading: UploadingI18n {
                status: StatusI18n {
                    connecting: "Connecting...".to_string(),
                    stalled: "Stalled".to_string(),
                    processing: "Processing File...".to_string(),
                    held: "Queued".to_string(),
                },
                remaining_time: RemainingTimeI18n {
                    prefix: "remaining time: ".to_string(),
                    unknown: "unknown remaining time".to_string(),
                },
                error: UploadingErrorI18n {
                    server_unavailable: "Upload failed, please try again later".to_string(),
                    unexpected_server_error: "Upload failed due to server error".to_string(),
                    forbidden: "Upload forbidden".to_string(),
                },
            },
            units: UnitsI18n {
                size: ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                size_base: 1000,
            },
        }
    }
}

/// Where a file in the list currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Connecting,
    Stalled,
    Processing,
    Held,
    /// Finished successfully.
    Complete,
    /// Failed; the payload selects the error string.
    Failed(UploadError),
}

/// Which transfer failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadError {
    ServerUnavailable,
    UnexpectedServerError,
    Forbidden,
}

/// A file tracked by the upload list.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub size: u64,
    pub status: FileStatus,
}

/// Messages for the upload component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A file was offered to the widget.
    FileAdded(UploadFile),
    /// The status of the file at an index changed.
    StatusChanged(usize, FileStatus),
    /// Remove the file at an index.
    Remove(usize),
    /// A file was rejected, carrying the localized reason.
    Rejected(String),
}

/// A file list with localized labels and add/drop affordances.
pub struct Upload {
    i18n: UploadI18n,
    files: Vec<UploadFile>,
    max_files: Option<usize>,
    last_error: Option<String>,
    theme: Theme,
}

impl Upload {
    /// Create an empty upload list with the default English strings.
    pub fn new() -> Self {
        Self {
            i18n: UploadI18n::default(),
            files: Vec::new(),
            max_files: None,
            last_error: None,
            theme: Theme::default(),
        }
    }

    /// Replace the whole string table.
    pub fn with_i18n(mut self, i18n: UploadI18n) -> Self {
        self.i18n = i18n;
        self
    }

    /// Limit how many files the list accepts.
    pub fn with_max_files(mut self, max: usize) -> Self {
        self.max_files = Some(max);
        self
    }

    /// Set the theme labels are resolved against.
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.theme = theme.clone();
        self
    }

    /// The active string table.
    pub fn i18n(&self) -> &UploadI18n {
        &self.i18n
    }

    /// The tracked files.
    pub fn files(&self) -> &[UploadFile] {
        &self.files
    }

    /// The most recent rejection message, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the widget accepts at most one file.
    fn single(&self) -> bool {
        self.max_files == Some(1)
    }

    /// The add-button label for the current plurality.
    pub fn add_label(&self) -> &str {
        if self.single() {
            &self.i18n.add_files.one
        } else {
            &self.i18n.add_files.many
        }
    }

    /// The drop-zone label for the current plurality.
    pub fn drop_label(&self) -> &str {
        if self.single() {
            &self.i18n.drop_files.one
        } else {
            &self.i18n.drop_files.many
        }
    }

    /// Format a byte count with the table's units, dividing by `size_base`
    /// until the value fits the next unit. Whole values print without a
    /// decimal, fractional ones with one digit. A table with no unit names
    /// yields the bare byte count.
    pub fn format_size(&self, bytes: u64) -> String {
        let units = &self.i18n.units.size;
        if units.is_empty() {
            return bytes.to_string();
        }
        let base = self.i18n.units.size_base.max(2) as f64;
        let mut value = bytes as f64;
        let mut unit = 0;
        while value >= base && unit + 1 < units.len() {
            value /= base;
            unit += 1;
        }
        let name = &units[unit];
        if value.fract() == 0.0 {
            format!("{value:.0} {name}")
        } else {
            format!("{value:.1} {name}")
        }
    }

    /// The localized status line for a file.
    pub fn status_label(&self, status: FileStatus) -> &str {
        let s = &self.i18n.uploading;
        match status {
            FileStatus::Connecting => &s.status.connecting,
            FileStatus::Stalled => &s.status.stalled,
            FileStatus::Processing => &s.status.processing,
            FileStatus::Held => &s.status.held,
            FileStatus::Complete => "",
            FileStatus::Failed(UploadError::ServerUnavailable) => &s.error.server_unavailable,
            FileStatus::Failed(UploadError::UnexpectedServerError) => {
                &s.error.unexpected_server_error
            }
            FileStatus::Failed(UploadError::Forbidden) => &s.error.forbidden,
        }
    }

    fn add_file(&mut self, file: UploadFile) -> Command<Message> {
        if let Some(max) = self.max_files {
            if self.files.len() >= max {
                let reason = self.i18n.error.too_many_files.clone();
                self.last_error = Some(reason.clone());
                return Command::message(Message::Rejected(reason));
            }
        }
        self.last_error = None;
        self.files.push(file);
        Command::none()
    }
}

impl Default for Upload {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Upload {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::FileAdded(file) => self.add_file(file),
            Message::StatusChanged(index, status) => {
                if let Some(file) = self.files.get_mut(index) {
                    file.status = status;
                }
                Command::none()
            }
            Message::Remove(index) => {
                if index < self.files.len() {
                    self.files.remove(index);
                }
                Command::none()
            }
            Message::Rejected(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let accent = Style::default().fg(self.theme.accent);
        let secondary = Style::default().fg(self.theme.secondary_text);
        let error = Style::default().fg(self.theme.error);

        let mut lines = vec![
            Line::from(Span::styled(format!("[ {} ]", self.add_label()), accent)),
            Line::from(Span::styled(self.drop_label().to_string(), secondary)),
        ];
        if let Some(ref reason) = self.last_error {
            lines.push(Line::from(Span::styled(reason.clone(), error)));
        }
        for file in &self.files {
            let status = self.status_label(file.status);
            let style = match file.status {
                FileStatus::Failed(_) => error,
                _ => secondary,
            };
            let mut spans = vec![
                Span::raw(file.name.clone()),
                Span::styled(format!("  {}", self.format_size(file.size)), secondary),
            ];
            if !status.is_empty() {
                spans.push(Span::styled(format!("  {status}"), style));
            }
            if matches!(file.status, FileStatus::Complete) {
                spans.push(Span::styled("  ✓", Style::default().fg(Color::Green)));
            }
            lines.push(Line::from(spans));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::testing::render_component;

    fn finnish() -> UploadI18n {
        UploadI18n {
            drop_files: Plural::new("Raahaa tiedosto tähän", "Raahaa tiedostot tähän"),
            add_files: Plural::new("Valitse tiedosto...", "Valitse tiedostot..."),
            error: ErrorI18n {
                too_many_files: "Liian monta tiedostoa.".to_string(),
                file_is_too_big: "Tiedosto on liian suuri.".to_string(),
                incorrect_file_type: "Väärä tiedostomuoto.".to_string(),
            },
            uploading: UploadingI18n {
                status: StatusI18n {
                    connecting: "Yhdistetään...".to_string(),
                    stalled: "Pysäytetty".to_string(),
                    processing: "Käsitellään tiedostoa...".to_string(),
                    held: "Jonossa".to_string(),
                },
                remaining_time: RemainingTimeI18n {
                    prefix: "aikaa jäljellä: ".to_string(),
                    unknown: "jäljellä olevaa aikaa ei saatavilla".to_string(),
                },
                error: UploadingErrorI18n {
                    server_unavailable: "Palvelin ei vastaa".to_string(),
                    unexpected_server_error: "Palvelinvirhe".to_string(),
                    forbidden: "Kielletty".to_string(),
                },
            },
            units: UnitsI18n {
                size: ["t", "kt", "Mt", "Gt", "Tt", "Pt", "Et", "ZB", "YB"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                size_base: 1000,
            },
        }
    }

    fn file(name: &str, size: u64) -> UploadFile {
        UploadFile {
            name: name.to_string(),
            size,
            status: FileStatus::Held,
        }
    }

    #[test]
    fn default_table_is_english() {
        let upload = Upload::new();
        assert_eq!(upload.add_label(), "Upload Files...");
        assert_eq!(upload.drop_label(), "Drop files here");
    }

    #[test]
    fn localized_table_replaces_every_label() {
        let upload = Upload::new().with_i18n(finnish());
        assert_eq!(upload.add_label(), "Valitse tiedostot...");
        assert_eq!(upload.drop_label(), "Raahaa tiedostot tähän");
        assert_eq!(upload.status_label(FileStatus::Connecting), "Yhdistetään...");
        assert_eq!(
            upload.status_label(FileStatus::Failed(UploadError::Forbidden)),
            "Kielletty"
        );
    }

    #[test]
    fn single_file_limit_uses_singular_labels() {
        let upload = Upload::new().with_i18n(finnish()).with_max_files(1);
        assert_eq!(upload.add_label(), "Valitse tiedosto...");
        assert_eq!(upload.drop_label(), "Raahaa tiedosto tähän");
    }

    #[test]
    fn format_size_walks_the_unit_table() {
        let upload = Upload::new().with_i18n(finnish());
        assert_eq!(upload.format_size(999), "999 t");
        assert_eq!(upload.format_size(1000), "1 kt");
        assert_eq!(upload.format_size(1500), "1.5 kt");
        assert_eq!(upload.format_size(2_000_000), "2 Mt");
    }

    #[test]
    fn empty_unit_table_formats_bare_bytes() {
        let mut i18n = finnish();
        i18n.units.size = Vec::new();
        let upload = Upload::new().with_i18n(i18n);
        assert_eq!(upload.format_size(0), "0");
        assert_eq!(upload.format_size(1500), "1500");
    }

    #[test]
    fn file_over_limit_is_rejected_with_localized_reason() {
        let mut upload = Upload::new().with_i18n(finnish()).with_max_files(1);
        upload.update(Message::FileAdded(file("raportti.pdf", 1200)));
        let cmd = upload.update(Message::FileAdded(file("toinen.pdf", 800)));
        assert!(matches!(
            cmd.into_message(),
            Some(Message::Rejected(reason)) if reason == "Liian monta tiedostoa."
        ));
        assert_eq!(upload.files().len(), 1);
        assert_eq!(upload.last_error(), Some("Liian monta tiedostoa."));
    }

    #[test]
    fn status_changes_update_the_file() {
        let mut upload = Upload::new();
        upload.update(Message::FileAdded(file("photo.jpg", 52_000)));
        upload.update(Message::StatusChanged(0, FileStatus::Complete));
        assert!(matches!(upload.files()[0].status, FileStatus::Complete));
    }

    #[test]
    fn renders_localized_chrome_and_files() {
        let mut upload = Upload::new().with_i18n(finnish());
        upload.update(Message::FileAdded(file("raportti.pdf", 1500)));
        let out = render_component(&upload, 50, 6);
        assert!(out.contains("Valitse tiedostot..."));
        assert!(out.contains("Raahaa tiedostot tähän"));
        assert!(out.contains("raportti.pdf"));
        assert!(out.contains("1.5 kt"));
        assert!(out.contains("Jonossa"));
    }
}
