use serde::{Deserialize, Serialize};

/// A post from the read-only seed list. `created_at` stays a string on the
/// wire; handlers parse it into an instant when they need to compare.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

/// The fixed post list, built once at startup and never mutated.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            title: "Hello".to_string(),
            content: "World".to_string(),
            created_at: "2021-01-01T00:00:00Z".to_string(),
        },
        Post {
            id: "2".to_string(),
            title: "Foo".to_string(),
            content: "Bar".to_string(),
            created_at: "2023-01-01T00:00:00Z".to_string(),
        },
        Post {
            id: "3".to_string(),
            title: "Baz".to_string(),
            content: "Qux".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        },
    ]
}
