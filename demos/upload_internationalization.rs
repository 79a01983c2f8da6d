//! # Upload Internationalization Demo
//!
//! The upload widget with a complete Finnish string table. Every label the
//! widget shows, from the add button to the size units, comes from the
//! replacement table. Press `a` to add a sample file, `x` to remove the
//! last one.
//!
//! Run with: `cargo run --example upload_internationalization`

use vitrine::crossterm::event::{KeyCode, KeyModifiers};
use vitrine::ratatui::Frame;
use vitrine::widgets::upload::{
    self, ErrorI18n, FileStatus, Plural, RemainingTimeI18n, StatusI18n, UnitsI18n, Upload,
    UploadFile, UploadI18n, UploadingErrorI18n, UploadingI18n,
};
use vitrine::{
    apply_theme, terminal_events, Command, Component, Model, RenderRoot, Subscription,
    TerminalEvent, Theme,
};

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

const SAMPLE_FILES: &[(&str, u64)] = &[
    ("raportti.pdf", 1_300_000),
    ("kuva.png", 245_000),
    ("muistio.txt", 960),
];

struct UploadDemo {
    theme: Theme,
    upload: Upload,
    next_sample: usize,
}

#[derive(Debug)]
enum Msg {
    AddSample,
    RemoveLast,
    Upload(upload::Message),
    Quit,
    Noop,
}

impl Model for UploadDemo {
    type Message = Msg;
    type Flags = Theme;

    fn init(theme: Theme) -> (Self, Command<Msg>) {
        let upload = Upload::new()
            .with_i18n(finnish())
            .with_max_files(2)
            .with_theme(&theme);
        (
            UploadDemo {
                theme,
                upload,
                next_sample: 0,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::AddSample => {
                let (name, size) = SAMPLE_FILES[self.next_sample % SAMPLE_FILES.len()];
                self.next_sample += 1;
                self.upload
                    .update(upload::Message::FileAdded(UploadFile {
                        name: name.to_string(),
                        size,
                        status: FileStatus::Held,
                    }))
                    .map(Msg::Upload)
            }
            Msg::RemoveLast => {
                let count = self.upload.files().len();
                if count > 0 {
                    self.upload
                        .update(upload::Message::Remove(count - 1))
                        .map(Msg::Upload)
                } else {
                    Command::none()
                }
            }
            Msg::Upload(inner) => self.upload.update(inner).map(Msg::Upload),
            Msg::Quit => Command::quit(),
            Msg::Noop => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let root = apply_theme(RenderRoot::new(frame.area()), &self.theme);
        self.upload.view(frame, root.area());
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Msg::Quit)
                }
                KeyCode::Char('a') => Some(Msg::AddSample),
                KeyCode::Char('x') => Some(Msg::RemoveLast),
                _ => Some(Msg::Noop),
            },
            _ => None,
        })]
    }
}

#[vitrine::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    vitrine::run::<UploadDemo>(Theme::dark()).await?;
    Ok(())
}
