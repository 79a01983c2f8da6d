//! Sample records shared by the showcase demos.
//!
//! Demos that render people (the list box, the avatars) fetch them through
//! [`get_people`], a small async endpoint stand-in. The roster is fixed so
//! demo output and tests are deterministic; the await point is real, so
//! demos exercise the same fetch-then-render message flow they would
//! against a network service.

use std::time::Duration;

/// One person record as the demos consume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub profession: String,
    pub picture_url: String,
}

impl Person {
    /// `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Parameters for [`get_people`].
#[derive(Debug, Clone, Copy)]
pub struct PeopleRequest {
    /// How many records to return.
    pub count: usize,
}

/// The result of [`get_people`].
#[derive(Debug, Clone)]
pub struct PeopleResponse {
    pub people: Vec<Person>,
}

fn roster() -> Vec<Person> {
    let seed: &[(&str, &str, &str)] = &[
        ("Aria", "Bailey", "Endocrinologist"),
        ("Aaliyah", "Butler", "Nephrologist"),
        ("Eleanor", "Price", "Ophthalmologist"),
        ("Allison", "Torres", "Allergist"),
        ("Madeline", "Lewis", "Gastroenterologist"),
        ("Leo", "Vance", "Cardiologist"),
        ("Noah", "Griffin", "Dermatologist"),
        ("Maya", "Sutton", "Neurologist"),
        ("Elias", "Ford", "Radiologist"),
        ("Ivy", "Moreno", "Pediatrician"),
    ];
    seed.iter()
        .enumerate()
        .map(|(i, (first, last, profession))| Person {
            first_name: first.to_string(),
            last_name: last.to_string(),
            profession: profession.to_string(),
            picture_url: format!("https://example.test/portraits/{}.jpg", i + 1),
        })
        .collect()
}

/// Fetch sample people. Returns exactly `count` records, cycling the fixed
/// roster if more are asked for than it holds.
pub async fn get_people(request: PeopleRequest) -> PeopleResponse {
    // Keep the demos honest about asynchrony without making them sluggish.
    tokio::time::sleep(Duration::from_millis(20)).await;
    let roster = roster();
    let people = roster
        .iter()
        .cycle()
        .take(request.count)
        .cloned()
        .collect();
    PeopleResponse { people }
}
