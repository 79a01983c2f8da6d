//! # List Box Demo
//!
//! A multi-select list of people with a custom item presentation: an
//! initials avatar next to a name-and-profession card. Demonstrates:
//! - Fetching records asynchronously from `init` with `Command::perform`
//! - An `Fn(&T) -> Fragment` item renderer
//! - Preselected indices in multiple-selection mode
//!
//! Run with: `cargo run --example list_box_custom_item_presentation`

use vitrine::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vitrine::data::{get_people, PeopleRequest, PeopleResponse, Person};
use vitrine::ratatui::Frame;
use vitrine::widgets::avatar::Avatar;
use vitrine::widgets::list_box::{self, ListBox};
use vitrine::{
    apply_theme, terminal_events, Command, Component, Fragment, Model, RenderRoot, Role,
    Subscription, TerminalEvent, Theme,
};

struct ListBoxDemo {
    theme: Theme,
    list: ListBox<Person>,
    selection: Vec<usize>,
}

#[derive(Debug)]
enum Msg {
    Key(KeyEvent),
    People(PeopleResponse),
    List(list_box::Message),
    Quit,
}

impl Model for ListBoxDemo {
    type Message = Msg;
    type Flags = Theme;

    fn init(theme: Theme) -> (Self, Command<Msg>) {
        let item_theme = theme.clone();
        let mut list = ListBox::new(move |person: &Person| {
            Fragment::row()
                .spacing(1)
                .child(Avatar::new(person.full_name()).node(&item_theme))
                .child(
                    Fragment::column()
                        .child(Fragment::text(person.full_name()).role(Role::Strong))
                        .child(Fragment::text(person.profession.clone()).role(Role::Secondary)),
                )
        })
        .with_multiple(true)
        .with_selected([0, 2])
        .with_theme(&theme);
        list.focus();

        (
            ListBoxDemo {
                theme,
                list,
                selection: vec![0, 2],
            },
            Command::perform(get_people(PeopleRequest { count: 5 }), Msg::People),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(key) => self
                .list
                .update(list_box::Message::KeyPress(key))
                .map(Msg::List),
            Msg::People(response) => {
                self.list.set_items(response.people);
                Command::none()
            }
            Msg::List(list_box::Message::SelectionChanged(indices)) => {
                self.selection = indices;
                Command::none()
            }
            Msg::List(inner) => self.list.update(inner).map(Msg::List),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let root = apply_theme(RenderRoot::new(frame.area()), &self.theme);
        self.list.view(frame, root.area());
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Msg::Quit)
                }
                _ => Some(Msg::Key(key)),
            },
            _ => None,
        })]
    }
}

#[vitrine::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = vitrine::run::<ListBoxDemo>(Theme::dark()).await?;
    println!("Selected indices: {:?}", model.selection);
    Ok(())
}
